//! Subnet — a CIDR slice of a VPC, optionally public.

use crate::cidr::Cidr;
use crate::domain::vpc::Vpc;
use crate::domain::{DomainEntity, Tags};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Subnet {
    pub name: String,
    pub vpc_id: String,
    pub cidr: String,
    pub az: Option<String>,
    pub is_public: bool,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl Subnet {
    pub fn new(name: impl Into<String>, vpc_id: impl Into<String>, cidr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vpc_id: vpc_id.into(),
            cidr: cidr.into(),
            az: None,
            is_public: false,
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }

    fn parsed_cidr(&self) -> Result<Cidr> {
        self.cidr
            .parse()
            .map_err(|e: String| Error::domain_validation(format!("subnet cidr invalid: {e}")))
    }
}

impl DomainEntity for Subnet {
    fn kind(&self) -> &'static str {
        "Subnet"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn vpc_id(&self) -> Option<&str> {
        Some(&self.vpc_id)
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::domain_validation("subnet name must not be empty"));
        }
        if self.vpc_id.is_empty() {
            return Err(Error::domain_validation("subnet vpcID must not be empty"));
        }
        if self.cidr.is_empty() {
            return Err(Error::domain_validation("subnet cidr must not be empty"));
        }
        self.parsed_cidr()?;
        Ok(())
    }
}

/// Cross-entity check: the subnet's CIDR must be a strictly more
/// specific sub-range of the parent VPC's CIDR. Lives outside
/// `Subnet::validate()` because it needs the parent in scope, but is
/// still surfaced as `DomainValidation` (see scenario S3) since it is a
/// cloud-agnostic invariant, not a provider quirk.
pub fn check_within_parent_vpc(subnet: &Subnet, vpc: &Vpc) -> Result<()> {
    let subnet_cidr = subnet
        .cidr
        .parse::<Cidr>()
        .map_err(|e| Error::domain_validation(format!("subnet cidr invalid: {e}")))?;
    let vpc_cidr = vpc
        .cidr
        .parse::<Cidr>()
        .map_err(|e| Error::domain_validation(format!("vpc cidr invalid: {e}")))?;
    if !vpc_cidr.contains(&subnet_cidr) {
        return Err(Error::domain_validation(
            "subnet cidr must be within vpc cidr",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_subnet_passes() {
        let subnet = Subnet::new("s1", "vpc-x", "10.0.1.0/24");
        assert!(subnet.validate().is_ok());
    }

    #[test]
    fn empty_fields_fail() {
        assert!(Subnet::new("", "vpc-x", "10.0.1.0/24").validate().is_err());
        assert!(Subnet::new("s1", "", "10.0.1.0/24").validate().is_err());
        assert!(Subnet::new("s1", "vpc-x", "").validate().is_err());
    }

    #[test]
    fn within_parent_vpc_passes() {
        let vpc = Vpc::new("prod", "us-east-1", "10.0.0.0/16");
        let subnet = Subnet::new("s1", "vpc-x", "10.0.1.0/24");
        assert!(check_within_parent_vpc(&subnet, &vpc).is_ok());
    }

    #[test]
    fn outside_parent_vpc_fails() {
        let vpc = Vpc::new("prod", "us-east-1", "10.0.0.0/16");
        let subnet = Subnet::new("s1", "vpc-x", "172.16.0.0/24");
        let err = check_within_parent_vpc(&subnet, &vpc).unwrap_err();
        assert!(err.is_kind(crate::error::ErrorKind::DomainValidation));
        assert_eq!(err.message, "subnet cidr must be within vpc cidr");
    }

    #[test]
    fn same_prefix_len_as_vpc_fails() {
        let vpc = Vpc::new("prod", "us-east-1", "10.0.0.0/16");
        let subnet = Subnet::new("s1", "vpc-x", "10.1.0.0/16");
        assert!(check_within_parent_vpc(&subnet, &vpc).is_err());
    }
}
