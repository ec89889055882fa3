//! IAM entities: Policy, Role, User, Group, InstanceProfile.
//!
//! Shared rules: names match `[A-Za-z0-9+=,.@_-]+` (64 chars for
//! roles/users, 128 for everything else); paths start with '/' and are
//! at most 512 characters; policy/assume-role documents must be a JSON
//! object with top-level `Version` and `Statement`; managed-policy and
//! permissions-boundary references must be well-formed IAM ARNs.

pub mod group;
pub mod instance_profile;
pub mod policy;
pub mod role;
pub mod user;

pub use group::Group;
pub use instance_profile::InstanceProfile;
pub use policy::Policy;
pub use role::Role;
pub use user::User;

use crate::error::{Error, Result};
use carina_aws_types::Arn;

/// A policy document is JSON with top-level `Version` and `Statement`
/// keys (spec'd shape, not full IAM grammar validation).
pub(crate) fn validate_json_document(document: &str, field: &str) -> Result<()> {
    let value = serde_json::from_str::<serde_json::Value>(document)
        .map_err(|_| Error::domain_validation(format!("{field} must be valid JSON")))?;
    let has_shape = value
        .as_object()
        .is_some_and(|obj| obj.contains_key("Version") && obj.contains_key("Statement"));
    if !has_shape {
        return Err(Error::domain_validation(format!(
            "{field} must be a JSON object with top-level Version and Statement"
        )));
    }
    Ok(())
}

pub(crate) fn validate_managed_policy_arns(arns: &[String]) -> Result<()> {
    for arn in arns {
        if !Arn::is_well_formed_iam_arn(arn) {
            return Err(Error::domain_validation(format!(
                "managed policy arn '{arn}' is not a well-formed iam arn"
            )));
        }
    }
    Ok(())
}

pub(crate) fn validate_permissions_boundary(boundary: &Option<String>) -> Result<()> {
    if let Some(arn) = boundary {
        if !Arn::is_well_formed_iam_arn(arn) {
            return Err(Error::domain_validation(format!(
                "permissions boundary arn '{arn}' is not a well-formed iam arn"
            )));
        }
    }
    Ok(())
}
