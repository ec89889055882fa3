use crate::domain::iam::{
    validate_json_document, validate_managed_policy_arns, validate_permissions_boundary,
};
use crate::domain::{DomainEntity, Tags};
use crate::error::Result;
use carina_aws_types::{normalize_iam_path, validate_iam_name, validate_iam_path};

#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub name: String,
    pub path: String,
    pub assume_role_policy: String,
    pub managed_policy_arns: Vec<String>,
    pub permissions_boundary: Option<String>,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
    pub unique_id: Option<String>,
}

impl Role {
    pub fn new(name: impl Into<String>, assume_role_policy: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: "/".to_string(),
            assume_role_policy: assume_role_policy.into(),
            managed_policy_arns: Vec::new(),
            permissions_boundary: None,
            tags: Tags::new(),
            arn: None,
            id: None,
            unique_id: None,
        }
    }
}

impl DomainEntity for Role {
    fn kind(&self) -> &'static str {
        "IAMRole"
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
        validate_json_document(&self.assume_role_policy, "assume role policy")?;
        validate_managed_policy_arns(&self.managed_policy_arns)?;
        validate_permissions_boundary(&self.permissions_boundary)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_assume_role_policy_json_fails() {
        let role = Role::new("svc", "{invalid");
        let err = role.validate().unwrap_err();
        assert!(err.is_kind(crate::error::ErrorKind::DomainValidation));
        assert_eq!(err.message, "assume role policy must be valid JSON");
    }

    #[test]
    fn assume_role_policy_missing_version_and_statement_fails() {
        let role = Role::new("svc", "42");
        let err = role.validate().unwrap_err();
        assert!(err.is_kind(crate::error::ErrorKind::DomainValidation));
        assert!(err.message.contains("Version and Statement"));
    }

    #[test]
    fn valid_role_with_managed_policy_passes() {
        let mut role = Role::new(
            "svc",
            r#"{"Version":"2012-10-17","Statement":[{"Effect":"Allow","Principal":{"Service":"ec2.amazonaws.com"},"Action":"sts:AssumeRole"}]}"#,
        );
        role.managed_policy_arns
            .push("arn:aws:iam::123456789012:policy/X".to_string());
        assert!(role.validate().is_ok());
    }

    #[test]
    fn malformed_managed_policy_arn_fails() {
        let mut role = Role::new("svc", r#"{"Version":"2012-10-17","Statement":[]}"#);
        role.managed_policy_arns.push("not-an-arn".to_string());
        assert!(role.validate().is_err());
    }

    #[test]
    fn name_over_64_chars_fails() {
        let mut role = Role::new("svc", r#"{"Version":"2012-10-17","Statement":[]}"#);
        role.name = "a".repeat(65);
        assert!(role.validate().is_err());
    }
}
