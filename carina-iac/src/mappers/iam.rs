use carina_aws_types::Arn;
use carina_core::Result;
use carina_core::domain::iam::{Group, InstanceProfile, Policy, Role, User};

use crate::block::Block;
use crate::resource::AnyResource;
use crate::value::Value;

use super::tf_label;

/// An AWS-managed policy ARN names a policy outside this configuration,
/// so it stays a literal string. A customer-managed policy is assumed
/// to be declared alongside it, so it's referenced by expression
/// (`aws_iam_policy.<label>.arn`) rather than duplicating its ARN.
fn policy_arn_value(arn: &str) -> Value {
    match Arn::parse(arn) {
        Ok(parsed) if parsed.account_id != "aws" => {
            let policy_name = parsed.resource.rsplit('/').next().unwrap_or(&parsed.resource);
            Value::expr(format!("aws_iam_policy.{}.arn", tf_label(policy_name)))
        }
        _ => Value::string(arn),
    }
}

fn policy_attachment_blocks(label: &str, user_kind_attr: &str, target_id: &str, managed_policy_arns: &[String]) -> Vec<Block> {
    managed_policy_arns
        .iter()
        .enumerate()
        .map(|(i, arn)| {
            Block::resource("aws_iam_policy_attachment", format!("{label}_{i}"))
                .with_attribute("name", Value::string(format!("{label}-{i}")))
                .with_attribute(user_kind_attr, Value::string(target_id))
                .with_attribute("policy_arn", policy_arn_value(arn))
        })
        .collect()
}

pub fn policy(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::IamPolicy(policy) = resource else {
        unreachable!("registry dispatches IAMPolicy only to this mapper")
    };
    let block = Block::resource("aws_iam_policy", tf_label(&policy.name))
        .with_attribute("name", Value::string(&policy.name))
        .with_attribute("path", Value::string(&policy.path))
        .with_attribute("policy", Value::string(&policy.document))
        .with_optional_attribute(
            "tags",
            (!policy.tags.is_empty()).then(|| {
                Value::Map(policy.tags.iter().map(|(k, v)| (k.clone(), Value::string(v))).collect())
            }),
        );
    Ok(vec![block])
}

pub fn role(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::IamRole(role) = resource else {
        unreachable!("registry dispatches IAMRole only to this mapper")
    };
    let label = tf_label(&role.name);
    let mut main = Block::resource("aws_iam_role", &label)
        .with_attribute("name", Value::string(&role.name))
        .with_attribute("path", Value::string(&role.path))
        .with_attribute("assume_role_policy", Value::string(&role.assume_role_policy))
        .with_optional_attribute(
            "permissions_boundary",
            role.permissions_boundary.as_ref().map(Value::string),
        );
    if !role.tags.is_empty() {
        main = main.with_attribute(
            "tags",
            Value::Map(role.tags.iter().map(|(k, v)| (k.clone(), Value::string(v))).collect()),
        );
    }
    let mut blocks = vec![main];
    blocks.extend(policy_attachment_blocks(&label, "roles", &role.name, &role.managed_policy_arns));
    Ok(blocks)
}

pub fn user(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::IamUser(user) = resource else {
        unreachable!("registry dispatches IAMUser only to this mapper")
    };
    let label = tf_label(&user.name);
    let main = Block::resource("aws_iam_user", &label)
        .with_attribute("name", Value::string(&user.name))
        .with_attribute("path", Value::string(&user.path))
        .with_optional_attribute(
            "permissions_boundary",
            user.permissions_boundary.as_ref().map(Value::string),
        );
    let mut blocks = vec![main];
    blocks.extend(policy_attachment_blocks(&label, "users", &user.name, &user.managed_policy_arns));
    Ok(blocks)
}

pub fn group(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::IamGroup(group) = resource else {
        unreachable!("registry dispatches IAMGroup only to this mapper")
    };
    let label = tf_label(&group.name);
    let main = Block::resource("aws_iam_group", &label)
        .with_attribute("name", Value::string(&group.name))
        .with_attribute("path", Value::string(&group.path));
    let mut blocks = vec![main];
    blocks.extend(policy_attachment_blocks(&label, "groups", &group.name, &group.managed_policy_arns));
    Ok(blocks)
}

pub fn instance_profile(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::IamInstanceProfile(profile) = resource else {
        unreachable!("registry dispatches IAMInstanceProfile only to this mapper")
    };
    let block = Block::resource("aws_iam_instance_profile", tf_label(&profile.name))
        .with_attribute("name", Value::string(&profile.name))
        .with_attribute("path", Value::string(&profile.path))
        .with_optional_attribute("role", profile.role_name.as_ref().map(Value::string));
    Ok(vec![block])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_without_managed_policies_emits_a_single_block() {
        let role = Role::new("svc", "{}");
        let resource = AnyResource::IamRole(role);
        let blocks = super::role(&resource).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].labels, vec!["aws_iam_role", "svc"]);
    }

    #[test]
    fn role_managed_policies_become_attachment_blocks() {
        let mut role = Role::new("svc", "{}");
        role.managed_policy_arns.push("arn:aws:iam::123456789012:policy/X".to_string());
        role.managed_policy_arns.push("arn:aws:iam::123456789012:policy/Y".to_string());
        let resource = AnyResource::IamRole(role);
        let blocks = super::role(&resource).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1].labels[0], "aws_iam_policy_attachment");
    }

    #[test]
    fn customer_managed_policy_attaches_by_expression() {
        let arn = "arn:aws:iam::123456789012:policy/X";
        assert_eq!(policy_arn_value(arn), Value::expr("aws_iam_policy.X.arn"));
    }

    #[test]
    fn aws_managed_policy_attaches_by_literal_string() {
        let arn = "arn:aws:iam::aws:policy/AdministratorAccess";
        assert_eq!(
            policy_arn_value(arn),
            Value::string("arn:aws:iam::aws:policy/AdministratorAccess")
        );
    }

    #[test]
    fn instance_profile_emits_role_as_a_direct_attribute() {
        let mut profile = InstanceProfile::new("svc-profile");
        profile.role_name = Some("svc".to_string());
        let resource = AnyResource::IamInstanceProfile(profile);
        let blocks = super::instance_profile(&resource).unwrap();
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].attributes.iter().any(|(k, _)| k == "role"));
    }

    #[test]
    fn group_without_path_defaults_to_root() {
        let group = Group::new("admins");
        let resource = AnyResource::IamGroup(group);
        let blocks = super::group(&resource).unwrap();
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn policy_carries_document_as_a_string_attribute() {
        let policy = Policy::new("my-policy", r#"{"Version":"2012-10-17"}"#);
        let resource = AnyResource::IamPolicy(policy);
        let blocks = super::policy(&resource).unwrap();
        assert!(blocks[0].attributes.iter().any(|(k, v)| k == "policy" && *v == Value::string(r#"{"Version":"2012-10-17"}"#)));
    }
}
