//! SecurityGroup — stateful ingress/egress rules scoped to a VPC.

use crate::domain::{DomainEntity, Tags};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleType {
    Ingress,
    Egress,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SecurityGroupRule {
    pub rule_type: Option<RuleType>,
    pub from_port: u16,
    pub to_port: u16,
    pub protocol: String,
    pub cidrs: Vec<String>,
    /// Domain carries a *list* of source security groups; the provider
    /// mapper narrows this to the first element, a documented
    /// lossy conversion.
    pub source_security_group_ids: Vec<String>,
}

impl SecurityGroupRule {
    pub fn ingress(from_port: u16, to_port: u16, protocol: impl Into<String>) -> Self {
        Self {
            rule_type: Some(RuleType::Ingress),
            from_port,
            to_port,
            protocol: protocol.into(),
            cidrs: Vec::new(),
            source_security_group_ids: Vec::new(),
        }
    }

    pub fn egress(from_port: u16, to_port: u16, protocol: impl Into<String>) -> Self {
        Self {
            rule_type: Some(RuleType::Egress),
            from_port,
            to_port,
            protocol: protocol.into(),
            cidrs: Vec::new(),
            source_security_group_ids: Vec::new(),
        }
    }

    pub fn with_cidr(mut self, cidr: impl Into<String>) -> Self {
        self.cidrs.push(cidr.into());
        self
    }

    pub fn with_source_group(mut self, sg_id: impl Into<String>) -> Self {
        self.source_security_group_ids.push(sg_id.into());
        self
    }

    fn validate(&self) -> Result<()> {
        let rule_type = self
            .rule_type
            .ok_or_else(|| Error::domain_validation("rule type must be ingress or egress"))?;
        if self.from_port > self.to_port {
            return Err(Error::domain_validation(
                "rule fromPort must be less than or equal to toPort",
            ));
        }
        match rule_type {
            RuleType::Ingress => {
                if self.cidrs.is_empty() && self.source_security_group_ids.is_empty() {
                    return Err(Error::domain_validation(
                        "ingress rule requires cidrs or source security groups",
                    ));
                }
            }
            RuleType::Egress => {
                if self.cidrs.is_empty() {
                    return Err(Error::domain_validation("egress rule requires cidrs"));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecurityGroup {
    pub name: String,
    pub description: String,
    pub vpc_id: String,
    pub rules: Vec<SecurityGroupRule>,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl SecurityGroup {
    pub fn new(name: impl Into<String>, description: impl Into<String>, vpc_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            vpc_id: vpc_id.into(),
            rules: Vec::new(),
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }
}

impl DomainEntity for SecurityGroup {
    fn kind(&self) -> &'static str {
        "SecurityGroup"
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
                "security group name must not be empty",
            ));
        }
        if self.vpc_id.is_empty() {
            return Err(Error::domain_validation(
                "security group vpcID must not be empty",
            ));
        }
        for rule in &self.rules {
            rule.validate()?;
        }
        Ok(())
    }
}

/// Provider-specific constraint (see scenario S5): the real AWS API
/// rejects descriptions over 255 characters. Documented in the domain
/// table alongside the structural invariants, but enforced at the
/// provider-validation phase, not inside `validate()`.
pub fn check_description_length(description: &str) -> Result<()> {
    if description.chars().count() > 255 {
        return Err(Error::provider_validation(
            "description must be 255 characters or less",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_security_group_passes() {
        let mut sg = SecurityGroup::new("web", "allow http", "vpc-x");
        sg.rules
            .push(SecurityGroupRule::ingress(80, 80, "tcp").with_cidr("0.0.0.0/0"));
        assert!(sg.validate().is_ok());
    }

    #[test]
    fn ingress_without_cidr_or_source_fails() {
        let mut sg = SecurityGroup::new("web", "allow http", "vpc-x");
        sg.rules.push(SecurityGroupRule::ingress(80, 80, "tcp"));
        assert!(sg.validate().is_err());
    }

    #[test]
    fn ingress_with_source_group_passes() {
        let mut sg = SecurityGroup::new("web", "allow http", "vpc-x");
        sg.rules
            .push(SecurityGroupRule::ingress(80, 80, "tcp").with_source_group("sg-a"));
        assert!(sg.validate().is_ok());
    }

    #[test]
    fn egress_without_cidr_fails() {
        let mut sg = SecurityGroup::new("web", "allow http", "vpc-x");
        sg.rules.push(SecurityGroupRule::egress(0, 0, "-1"));
        assert!(sg.validate().is_err());
    }

    #[test]
    fn from_port_greater_than_to_port_fails() {
        let mut sg = SecurityGroup::new("web", "allow http", "vpc-x");
        sg.rules
            .push(SecurityGroupRule::ingress(100, 50, "tcp").with_cidr("0.0.0.0/0"));
        assert!(sg.validate().is_err());
    }

    #[test]
    fn description_over_255_chars_is_provider_validation() {
        let description = "x".repeat(300);
        let err = check_description_length(&description).unwrap_err();
        assert!(err.is_kind(crate::error::ErrorKind::ProviderValidation));
    }

    #[test]
    fn description_under_limit_passes() {
        assert!(check_description_length("short description").is_ok());
    }
}
