use crate::domain::iam::{validate_managed_policy_arns, validate_permissions_boundary};
use crate::domain::{DomainEntity, Tags};
use crate::error::Result;
use carina_aws_types::{normalize_iam_path, validate_iam_name, validate_iam_path};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
    pub path: String,
    pub managed_policy_arns: Vec<String>,
    pub permissions_boundary: Option<String>,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
    pub unique_id: Option<String>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: "/".to_string(),
            managed_policy_arns: Vec::new(),
            permissions_boundary: None,
            tags: Tags::new(),
            arn: None,
            id: None,
            unique_id: None,
        }
    }
}

impl DomainEntity for User {
    fn kind(&self) -> &'static str {
        "IAMUser"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn vpc_id(&self) -> Option<&str> {
        None
    }

    fn validate(&self) -> Result<()> {
        validate_iam_name(&self.name, 64).map_err(crate::error::Error::domain_validation)?;
        validate_iam_path(&normalize_iam_path(&self.path))
            .map_err(crate::error::Error::domain_validation)?;
        validate_managed_policy_arns(&self.managed_policy_arns)?;
        validate_permissions_boundary(&self.permissions_boundary)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_user_passes() {
        assert!(User::new("alice").validate().is_ok());
    }

    #[test]
    fn empty_name_fails() {
        assert!(User::new("").validate().is_err());
    }

    #[test]
    fn name_over_64_chars_fails() {
        let user = User::new("a".repeat(65));
        assert!(user.validate().is_err());
    }
}
