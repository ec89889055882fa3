//! NetworkACL — stateless, rule-number-ordered allow/deny rules.

use crate::domain::{DomainEntity, Tags};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AclAction {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AclRule {
    pub rule_number: u16,
    pub action: AclAction,
    pub protocol: String,
    pub cidr: String,
}

impl AclRule {
    pub fn new(rule_number: u16, action: AclAction, protocol: impl Into<String>, cidr: impl Into<String>) -> Self {
        Self {
            rule_number,
            action,
            protocol: protocol.into(),
            cidr: cidr.into(),
        }
    }

    fn validate(&self) -> Result<()> {
        if !(1..=32766).contains(&self.rule_number) {
            return Err(Error::domain_validation(
                "acl rule number must be between 1 and 32766",
            ));
        }
        if self.cidr.is_empty() {
            return Err(Error::domain_validation("acl rule cidr must not be empty"));
        }
        self.cidr
            .parse::<crate::cidr::Cidr>()
            .map_err(|e| Error::domain_validation(format!("acl rule cidr invalid: {e}")))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkAcl {
    pub name: String,
    pub vpc_id: String,
    pub is_default: bool,
    pub inbound: Vec<AclRule>,
    pub outbound: Vec<AclRule>,
    pub subnets: Vec<String>,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl NetworkAcl {
    pub fn new(name: impl Into<String>, vpc_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vpc_id: vpc_id.into(),
            is_default: false,
            inbound: Vec::new(),
            outbound: Vec::new(),
            subnets: Vec::new(),
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }

    /// Rules ordered ascending by rule number, the order AWS evaluates them in.
    pub fn inbound_ordered(&self) -> Vec<&AclRule> {
        let mut rules: Vec<&AclRule> = self.inbound.iter().collect();
        rules.sort_by_key(|r| r.rule_number);
        rules
    }

    pub fn outbound_ordered(&self) -> Vec<&AclRule> {
        let mut rules: Vec<&AclRule> = self.outbound.iter().collect();
        rules.sort_by_key(|r| r.rule_number);
        rules
    }
}

impl DomainEntity for NetworkAcl {
    fn kind(&self) -> &'static str {
        "NetworkACL"
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
            return Err(Error::domain_validation("acl name must not be empty"));
        }
        if self.vpc_id.is_empty() {
            return Err(Error::domain_validation("acl vpcID must not be empty"));
        }
        for rule in self.inbound.iter().chain(self.outbound.iter()) {
            rule.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_rule_passes() {
        let mut acl = NetworkAcl::new("acl1", "vpc-x");
        acl.inbound
            .push(AclRule::new(100, AclAction::Allow, "tcp", "0.0.0.0/0"));
        assert!(acl.validate().is_ok());
    }

    #[test]
    fn rule_number_zero_fails() {
        let mut acl = NetworkAcl::new("acl1", "vpc-x");
        acl.inbound
            .push(AclRule::new(0, AclAction::Allow, "tcp", "0.0.0.0/0"));
        assert!(acl.validate().is_err());
    }

    #[test]
    fn rule_number_32767_fails() {
        let mut acl = NetworkAcl::new("acl1", "vpc-x");
        acl.inbound
            .push(AclRule::new(32767, AclAction::Deny, "tcp", "0.0.0.0/0"));
        assert!(acl.validate().is_err());
    }

    #[test]
    fn rule_number_32766_passes() {
        let mut acl = NetworkAcl::new("acl1", "vpc-x");
        acl.inbound
            .push(AclRule::new(32766, AclAction::Deny, "tcp", "0.0.0.0/0"));
        assert!(acl.validate().is_ok());
    }

    #[test]
    fn rules_ordered_ascending_by_number() {
        let mut acl = NetworkAcl::new("acl1", "vpc-x");
        acl.inbound
            .push(AclRule::new(200, AclAction::Allow, "tcp", "0.0.0.0/0"));
        acl.inbound
            .push(AclRule::new(100, AclAction::Deny, "tcp", "10.0.0.0/16"));
        let ordered = acl.inbound_ordered();
        assert_eq!(ordered[0].rule_number, 100);
        assert_eq!(ordered[1].rule_number, 200);
    }
}
