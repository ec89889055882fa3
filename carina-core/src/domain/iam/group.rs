use crate::domain::iam::validate_managed_policy_arns;
use crate::domain::{DomainEntity, Tags};
use crate::error::Result;
use carina_aws_types::{normalize_iam_path, validate_iam_name, validate_iam_path};

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub path: String,
    pub managed_policy_arns: Vec<String>,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: "/".to_string(),
            managed_policy_arns: Vec::new(),
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }
}

impl DomainEntity for Group {
    fn kind(&self) -> &'static str {
        "IAMGroup"
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
        validate_managed_policy_arns(&self.managed_policy_arns)?;
        Ok(())
    }
}
