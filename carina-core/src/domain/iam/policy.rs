use crate::domain::iam::validate_json_document;
use crate::domain::{DomainEntity, Tags};
use crate::error::Result;
use carina_aws_types::{normalize_iam_path, validate_iam_name, validate_iam_path};

#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    pub name: String,
    pub path: String,
    pub document: String,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl Policy {
    pub fn new(name: impl Into<String>, document: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: "/".to_string(),
            document: document.into(),
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }
}

impl DomainEntity for Policy {
    fn kind(&self) -> &'static str {
        "IAMPolicy"
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
        validate_iam_name(&self.name, 128).map_err(crate::error::Error::domain_validation)?;
        validate_iam_path(&normalize_iam_path(&self.path))
            .map_err(crate::error::Error::domain_validation)?;
        validate_json_document(&self.document, "policy document")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_policy_passes() {
        let policy = Policy::new("my-policy", r#"{"Version":"2012-10-17","Statement":[]}"#);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn invalid_json_document_fails() {
        let policy = Policy::new("my-policy", "{not json");
        assert!(policy.validate().is_err());
    }

    #[test]
    fn json_document_missing_version_and_statement_fails() {
        let policy = Policy::new("my-policy", "{}");
        let err = policy.validate().unwrap_err();
        assert!(err.is_kind(crate::error::ErrorKind::DomainValidation));
        assert!(err.message.contains("Version and Statement"));
    }

    #[test]
    fn json_array_document_fails() {
        let policy = Policy::new("my-policy", "[]");
        assert!(policy.validate().is_err());
    }

    #[test]
    fn path_without_leading_slash_fails() {
        let mut policy = Policy::new("my-policy", r#"{"Version":"2012-10-17","Statement":[]}"#);
        policy.path = "team/".to_string();
        assert!(policy.validate().is_err());
    }

    #[test]
    fn name_over_128_chars_fails() {
        let mut policy = Policy::new("x", r#"{"Version":"2012-10-17","Statement":[]}"#);
        policy.name = "a".repeat(129);
        assert!(policy.validate().is_err());
    }
}
