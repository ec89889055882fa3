//! `IamProvider` backed by [`crate::state::MockState`]. IAM principals
//! are global: their envelope id is the name (or ARN for policies),
//! the same identifier the caller passes back in to read/delete/attach.

use carina_aws_types::Arn;
use carina_core::error::{Error, Result};
use carina_provider_protocol::Envelope;
use carina_provider_protocol::mappers::iam::{
    GroupInput, GroupOutput, InstanceProfileInput, InstanceProfileOutput, PolicyInput,
    PolicyOutput, RoleInput, RoleOutput, UserInput, UserOutput,
};
use carina_provider_protocol::provider::IamProvider;

use crate::{MockProvider, clock, ids};

impl IamProvider for MockProvider {
    fn create_policy(&self, input: &PolicyInput) -> Result<PolicyOutput> {
        let id = ids::iam_unique_id("ANPA", "Policy", &input.policy_name);
        let arn = Arn::build("iam", "", &self.state.account_id, "policy", &input.path, &input.policy_name);
        let output = PolicyOutput {
            envelope: Envelope::new(id, arn.clone(), "active", clock::now()),
        };
        self.state.store.lock().unwrap().policies.insert(arn, output.clone());
        Ok(output)
    }

    fn get_policy(&self, arn: &str) -> Result<PolicyOutput> {
        self.state
            .store
            .lock()
            .unwrap()
            .policies
            .get(arn)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("policy {arn}")))
    }

    fn delete_policy(&self, arn: &str) -> Result<()> {
        self.state
            .store
            .lock()
            .unwrap()
            .policies
            .remove(arn)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("policy {arn}")))
    }

    fn create_role(&self, input: &RoleInput) -> Result<RoleOutput> {
        let unique_id = ids::iam_unique_id("AROA", "Role", &input.role_name);
        let arn = Arn::build("iam", "", &self.state.account_id, "role", &input.path, &input.role_name);
        let output = RoleOutput {
            envelope: Envelope::new(input.role_name.clone(), arn, "active", clock::now()),
            unique_id,
        };
        self.state.store.lock().unwrap().roles.insert(input.role_name.clone(), output.clone());
        Ok(output)
    }

    fn get_role(&self, name: &str) -> Result<RoleOutput> {
        self.state
            .store
            .lock()
            .unwrap()
            .roles
            .get(name)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("role {name}")))
    }

    fn delete_role(&self, name: &str) -> Result<()> {
        let mut store = self.state.store.lock().unwrap();
        store.role_policy_attachments.remove(name);
        store
            .roles
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("role {name}")))
    }

    fn attach_role_policy(&self, role_name: &str, policy_arn: &str) -> Result<()> {
        let mut store = self.state.store.lock().unwrap();
        if !store.roles.contains_key(role_name) {
            return Err(Error::not_found(format!("role {role_name}")));
        }
        let attached = store.role_policy_attachments.entry(role_name.to_string()).or_default();
        if !attached.iter().any(|a| a == policy_arn) {
            attached.push(policy_arn.to_string());
        }
        Ok(())
    }

    fn detach_role_policy(&self, role_name: &str, policy_arn: &str) -> Result<()> {
        let mut store = self.state.store.lock().unwrap();
        match store.role_policy_attachments.get_mut(role_name) {
            Some(attached) => {
                attached.retain(|a| a != policy_arn);
                Ok(())
            }
            None => Err(Error::not_found(format!("role {role_name}"))),
        }
    }

    fn create_user(&self, input: &UserInput) -> Result<UserOutput> {
        let unique_id = ids::iam_unique_id("AIDA", "User", &input.user_name);
        let arn = Arn::build("iam", "", &self.state.account_id, "user", &input.path, &input.user_name);
        let output = UserOutput {
            envelope: Envelope::new(input.user_name.clone(), arn, "active", clock::now()),
            unique_id,
        };
        self.state.store.lock().unwrap().users.insert(input.user_name.clone(), output.clone());
        Ok(output)
    }

    fn get_user(&self, name: &str) -> Result<UserOutput> {
        self.state
            .store
            .lock()
            .unwrap()
            .users
            .get(name)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("user {name}")))
    }

    fn delete_user(&self, name: &str) -> Result<()> {
        self.state
            .store
            .lock()
            .unwrap()
            .users
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("user {name}")))
    }

    fn create_group(&self, input: &GroupInput) -> Result<GroupOutput> {
        let arn = Arn::build("iam", "", &self.state.account_id, "group", &input.path, &input.group_name);
        let output = GroupOutput {
            envelope: Envelope::new(input.group_name.clone(), arn, "active", clock::now()),
        };
        self.state.store.lock().unwrap().groups.insert(input.group_name.clone(), output.clone());
        Ok(output)
    }

    fn delete_group(&self, name: &str) -> Result<()> {
        self.state
            .store
            .lock()
            .unwrap()
            .groups
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("group {name}")))
    }

    fn create_instance_profile(&self, input: &InstanceProfileInput) -> Result<InstanceProfileOutput> {
        let arn = Arn::build(
            "iam",
            "",
            &self.state.account_id,
            "instance-profile",
            &input.path,
            &input.instance_profile_name,
        );
        let output = InstanceProfileOutput {
            envelope: Envelope::new(input.instance_profile_name.clone(), arn, "active", clock::now()),
        };
        let mut store = self.state.store.lock().unwrap();
        store
            .instance_profiles
            .insert(input.instance_profile_name.clone(), output.clone());
        if !input.role_name.is_empty() {
            store
                .instance_profile_roles
                .insert(input.instance_profile_name.clone(), input.role_name.clone());
        }
        Ok(output)
    }

    fn add_role_to_instance_profile(&self, profile_name: &str, role_name: &str) -> Result<()> {
        let mut store = self.state.store.lock().unwrap();
        if !store.instance_profiles.contains_key(profile_name) {
            return Err(Error::not_found(format!("instance profile {profile_name}")));
        }
        if let Some(existing) = store.instance_profile_roles.get(profile_name) {
            if existing != role_name {
                return Err(Error::provider_call(
                    "instance profile already has a different role",
                ));
            }
        }
        store
            .instance_profile_roles
            .insert(profile_name.to_string(), role_name.to_string());
        Ok(())
    }

    fn remove_role_from_instance_profile(&self, profile_name: &str, role_name: &str) -> Result<()> {
        let mut store = self.state.store.lock().unwrap();
        match store.instance_profile_roles.get(profile_name) {
            Some(existing) if existing == role_name => {
                store.instance_profile_roles.remove(profile_name);
                Ok(())
            }
            _ => Err(Error::provider_call(
                "instance profile does not have that role",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carina_core::domain::Tags;

    fn role_input(name: &str) -> RoleInput {
        RoleInput {
            role_name: name.to_string(),
            path: String::new(),
            assume_role_policy_document: "{}".to_string(),
            managed_policy_arns: Vec::new(),
            permissions_boundary: String::new(),
            tags: Tags::new(),
        }
    }

    #[test]
    fn role_lookup_is_keyed_by_name_not_unique_id() {
        let p = MockProvider::new();
        let output = p.create_role(&role_input("svc")).unwrap();
        assert_eq!(output.envelope.id, "svc");
        let fetched = p.get_role("svc").unwrap();
        assert_eq!(fetched, output);
    }

    #[test]
    fn detaching_unattached_policy_is_a_no_op() {
        let p = MockProvider::new();
        p.create_role(&role_input("svc")).unwrap();
        p.detach_role_policy("svc", "arn:aws:iam::aws:policy/Nonexistent")
            .unwrap();
    }

    #[test]
    fn assigning_a_second_role_to_a_profile_fails() {
        let p = MockProvider::new();
        p.create_role(&role_input("a")).unwrap();
        p.create_role(&role_input("b")).unwrap();
        p.create_instance_profile(&InstanceProfileInput {
            instance_profile_name: "profile".to_string(),
            path: String::new(),
            role_name: String::new(),
            tags: Tags::new(),
        })
        .unwrap();
        p.add_role_to_instance_profile("profile", "a").unwrap();
        let err = p.add_role_to_instance_profile("profile", "b").unwrap_err();
        assert!(err.is_kind(carina_core::ErrorKind::ProviderCall));
    }
}
