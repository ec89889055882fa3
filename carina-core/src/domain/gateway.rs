//! InternetGateway and NatGateway.

use crate::domain::subnet::Subnet;
use crate::domain::{DomainEntity, Tags};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct InternetGateway {
    pub name: String,
    pub vpc_id: String,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl InternetGateway {
    pub fn new(name: impl Into<String>, vpc_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vpc_id: vpc_id.into(),
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }
}

impl DomainEntity for InternetGateway {
    fn kind(&self) -> &'static str {
        "InternetGateway"
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
            return Err(Error::domain_validation(
                "internet gateway name must not be empty",
            ));
        }
        if self.vpc_id.is_empty() {
            return Err(Error::domain_validation(
                "internet gateway vpcID must not be empty",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NatGateway {
    pub name: String,
    pub subnet_id: String,
    pub allocation_id: Option<String>,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl NatGateway {
    pub fn new(name: impl Into<String>, subnet_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subnet_id: subnet_id.into(),
            allocation_id: None,
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }
}

impl DomainEntity for NatGateway {
    fn kind(&self) -> &'static str {
        "NATGateway"
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
        if self.name.is_empty() {
            return Err(Error::domain_validation(
                "nat gateway name must not be empty",
            ));
        }
        if self.subnet_id.is_empty() {
            return Err(Error::domain_validation(
                "nat gateway subnetID must not be empty",
            ));
        }
        Ok(())
    }
}

/// Cross-entity check: a NAT gateway must sit in a public subnet.
/// Surfaced as `ProviderValidation` since it encodes a provider-side
/// routing reality rather than an abstract domain shape constraint.
pub fn check_in_public_subnet(nat: &NatGateway, subnet: &Subnet) -> Result<()> {
    if !subnet.is_public {
        return Err(Error::provider_validation(
            "nat gateway must be placed in a public subnet",
        ));
    }
    let _ = &nat.subnet_id;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_igw_passes() {
        assert!(InternetGateway::new("igw", "vpc-x").validate().is_ok());
    }

    #[test]
    fn igw_requires_name_and_vpc() {
        assert!(InternetGateway::new("", "vpc-x").validate().is_err());
        assert!(InternetGateway::new("igw", "").validate().is_err());
    }

    #[test]
    fn valid_nat_passes() {
        assert!(NatGateway::new("nat", "subnet-x").validate().is_ok());
    }

    #[test]
    fn nat_requires_name_and_subnet() {
        assert!(NatGateway::new("", "subnet-x").validate().is_err());
        assert!(NatGateway::new("nat", "").validate().is_err());
    }

    #[test]
    fn nat_in_public_subnet_passes() {
        let mut subnet = Subnet::new("s1", "vpc-x", "10.0.1.0/24");
        subnet.is_public = true;
        let nat = NatGateway::new("nat", "subnet-x");
        assert!(check_in_public_subnet(&nat, &subnet).is_ok());
    }

    #[test]
    fn nat_in_private_subnet_fails() {
        let subnet = Subnet::new("s1", "vpc-x", "10.0.1.0/24");
        let nat = NatGateway::new("nat", "subnet-x");
        let err = check_in_public_subnet(&nat, &subnet).unwrap_err();
        assert!(err.is_kind(crate::error::ErrorKind::ProviderValidation));
    }
}
