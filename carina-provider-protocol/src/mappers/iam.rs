use crate::envelope::{Envelope, lift_path};
use carina_core::domain::Tags;
use carina_core::domain::iam::{Group, InstanceProfile, Policy, Role, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyInput {
    pub policy_name: String,
    pub path: String,
    pub policy_document: String,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyOutput {
    pub envelope: Envelope,
}

pub fn policy_from_domain(policy: &Policy) -> PolicyInput {
    PolicyInput {
        policy_name: policy.name.clone(),
        path: policy.path.clone(),
        policy_document: policy.document.clone(),
        tags: policy.tags.clone(),
    }
}

pub fn policy_to_domain_from_output(input: &PolicyInput, output: &PolicyOutput) -> Policy {
    Policy {
        name: input.policy_name.clone(),
        path: lift_path(&input.path),
        document: input.policy_document.clone(),
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleInput {
    pub role_name: String,
    pub path: String,
    pub assume_role_policy_document: String,
    pub managed_policy_arns: Vec<String>,
    pub permissions_boundary: String,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleOutput {
    pub envelope: Envelope,
    pub unique_id: String,
}

pub fn role_from_domain(role: &Role) -> RoleInput {
    RoleInput {
        role_name: role.name.clone(),
        path: role.path.clone(),
        assume_role_policy_document: role.assume_role_policy.clone(),
        managed_policy_arns: role.managed_policy_arns.clone(),
        permissions_boundary: role.permissions_boundary.clone().unwrap_or_default(),
        tags: role.tags.clone(),
    }
}

pub fn role_to_domain_from_output(input: &RoleInput, output: &RoleOutput) -> Role {
    Role {
        name: input.role_name.clone(),
        path: lift_path(&input.path),
        assume_role_policy: input.assume_role_policy_document.clone(),
        managed_policy_arns: input.managed_policy_arns.clone(),
        permissions_boundary: if input.permissions_boundary.is_empty() {
            None
        } else {
            Some(input.permissions_boundary.clone())
        },
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
        unique_id: Some(output.unique_id.clone()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    pub user_name: String,
    pub path: String,
    pub managed_policy_arns: Vec<String>,
    pub permissions_boundary: String,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserOutput {
    pub envelope: Envelope,
    pub unique_id: String,
}

pub fn user_from_domain(user: &User) -> UserInput {
    UserInput {
        user_name: user.name.clone(),
        path: user.path.clone(),
        managed_policy_arns: user.managed_policy_arns.clone(),
        permissions_boundary: user.permissions_boundary.clone().unwrap_or_default(),
        tags: user.tags.clone(),
    }
}

pub fn user_to_domain_from_output(input: &UserInput, output: &UserOutput) -> User {
    User {
        name: input.user_name.clone(),
        path: lift_path(&input.path),
        managed_policy_arns: input.managed_policy_arns.clone(),
        permissions_boundary: if input.permissions_boundary.is_empty() {
            None
        } else {
            Some(input.permissions_boundary.clone())
        },
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
        unique_id: Some(output.unique_id.clone()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupInput {
    pub group_name: String,
    pub path: String,
    pub managed_policy_arns: Vec<String>,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupOutput {
    pub envelope: Envelope,
}

pub fn group_from_domain(group: &Group) -> GroupInput {
    GroupInput {
        group_name: group.name.clone(),
        path: group.path.clone(),
        managed_policy_arns: group.managed_policy_arns.clone(),
        tags: group.tags.clone(),
    }
}

pub fn group_to_domain_from_output(input: &GroupInput, output: &GroupOutput) -> Group {
    Group {
        name: input.group_name.clone(),
        path: lift_path(&input.path),
        managed_policy_arns: input.managed_policy_arns.clone(),
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceProfileInput {
    pub instance_profile_name: String,
    pub path: String,
    pub role_name: String,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceProfileOutput {
    pub envelope: Envelope,
}

pub fn instance_profile_from_domain(profile: &InstanceProfile) -> InstanceProfileInput {
    InstanceProfileInput {
        instance_profile_name: profile.name.clone(),
        path: profile.path.clone(),
        role_name: profile.role_name.clone().unwrap_or_default(),
        tags: profile.tags.clone(),
    }
}

pub fn instance_profile_to_domain_from_output(
    input: &InstanceProfileInput,
    output: &InstanceProfileOutput,
) -> InstanceProfile {
    InstanceProfile {
        name: input.instance_profile_name.clone(),
        path: lift_path(&input.path),
        role_name: if input.role_name.is_empty() {
            None
        } else {
            Some(input.role_name.clone())
        },
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    }
}
