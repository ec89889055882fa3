//! VPC — the top-level network container.

use crate::cidr::Cidr;
use crate::domain::{DomainEntity, Tags};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Vpc {
    pub name: String,
    pub region: String,
    pub cidr: String,
    pub enable_dns: bool,
    pub enable_dns_hostnames: bool,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl Vpc {
    pub fn new(name: impl Into<String>, region: impl Into<String>, cidr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            cidr: cidr.into(),
            enable_dns: true,
            enable_dns_hostnames: false,
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }

    pub fn parsed_cidr(&self) -> Result<Cidr> {
        self.cidr
            .parse()
            .map_err(|e: String| Error::domain_validation(format!("vpc cidr invalid: {e}")))
    }
}

impl DomainEntity for Vpc {
    fn kind(&self) -> &'static str {
        "VPC"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn vpc_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::domain_validation("vpc name must not be empty"));
        }
        if self.region.is_empty() {
            return Err(Error::domain_validation("vpc region must not be empty"));
        }
        if self.cidr.is_empty() {
            return Err(Error::domain_validation("vpc cidr must not be empty"));
        }
        self.parsed_cidr()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_vpc_passes() {
        let vpc = Vpc::new("prod", "us-east-1", "10.0.0.0/16");
        assert!(vpc.validate().is_ok());
    }

    #[test]
    fn empty_name_fails() {
        let vpc = Vpc::new("", "us-east-1", "10.0.0.0/16");
        let err = vpc.validate().unwrap_err();
        assert!(err.is_kind(crate::error::ErrorKind::DomainValidation));
    }

    #[test]
    fn empty_region_fails() {
        let vpc = Vpc::new("prod", "", "10.0.0.0/16");
        assert!(vpc.validate().is_err());
    }

    #[test]
    fn non_ipv4_cidr_fails() {
        let vpc = Vpc::new("prod", "us-east-1", "not-a-cidr");
        assert!(vpc.validate().is_err());
    }

    #[test]
    fn empty_cidr_fails() {
        let vpc = Vpc::new("prod", "us-east-1", "");
        assert!(vpc.validate().is_err());
    }
}
