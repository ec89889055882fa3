use crate::domain::{DomainEntity, Tags};
use crate::error::Result;
use carina_aws_types::{normalize_iam_path, validate_iam_name, validate_iam_path};

#[derive(Debug, Clone, PartialEq)]
pub struct InstanceProfile {
    pub name: String,
    pub path: String,
    /// At most one role may be attached; the attach/detach verb is a
    /// cross-resource adapter operation, not part of this struct's
    /// construction.
    pub role_name: Option<String>,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl InstanceProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: "/".to_string(),
            role_name: None,
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }
}

impl DomainEntity for InstanceProfile {
    fn kind(&self) -> &'static str {
        "IAMInstanceProfile"
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
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_instance_profile_passes() {
        assert!(InstanceProfile::new("svc-profile").validate().is_ok());
    }

    #[test]
    fn empty_name_fails() {
        assert!(InstanceProfile::new("").validate().is_err());
    }
}
