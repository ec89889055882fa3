//! NetworkInterface (ENI).

use crate::domain::DomainEntity;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkInterface {
    pub subnet_id: String,
    pub security_group_ids: Vec<String>,
    pub private_ip: Option<String>,
    pub auto_assign_ip: bool,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl NetworkInterface {
    pub fn new(subnet_id: impl Into<String>) -> Self {
        Self {
            subnet_id: subnet_id.into(),
            security_group_ids: Vec::new(),
            private_ip: None,
            auto_assign_ip: false,
            arn: None,
            id: None,
        }
    }
}

impl DomainEntity for NetworkInterface {
    fn kind(&self) -> &'static str {
        "NetworkInterface"
    }

    fn name(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn vpc_id(&self) -> Option<&str> {
        None
    }

    fn validate(&self) -> Result<()> {
        if self.subnet_id.is_empty() {
            return Err(Error::domain_validation(
                "network interface subnetID must not be empty",
            ));
        }
        if !(1..=5).contains(&self.security_group_ids.len()) {
            return Err(Error::domain_validation(
                "network interface requires between 1 and 5 security groups",
            ));
        }
        if self.private_ip.is_some() && self.auto_assign_ip {
            return Err(Error::domain_validation(
                "cannot set both an explicit private ip and auto-assign",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NetworkInterface {
        let mut eni = NetworkInterface::new("subnet-x");
        eni.security_group_ids.push("sg-a".to_string());
        eni
    }

    #[test]
    fn valid_eni_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn zero_security_groups_fails() {
        let eni = NetworkInterface::new("subnet-x");
        assert!(eni.validate().is_err());
    }

    #[test]
    fn six_security_groups_fails() {
        let mut eni = valid();
        for i in 0..5 {
            eni.security_group_ids.push(format!("sg-{i}"));
        }
        assert!(eni.validate().is_err());
    }

    #[test]
    fn explicit_ip_and_auto_assign_conflict() {
        let mut eni = valid();
        eni.private_ip = Some("10.0.1.5".to_string());
        eni.auto_assign_ip = true;
        assert!(eni.validate().is_err());
    }
}
