use crate::envelope::Envelope;
use carina_core::domain::Tags;
use carina_core::domain::security_group::{RuleType, SecurityGroup, SecurityGroupRule};
use carina_core::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleDirection {
    Ingress,
    Egress,
}

/// Provider rule carries a *single* source group id, not a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroupRuleInput {
    pub direction: RuleDirection,
    pub from_port: u16,
    pub to_port: u16,
    pub ip_protocol: String,
    pub cidr_blocks: Vec<String>,
    pub source_security_group_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroupInput {
    pub name: String,
    pub description: String,
    pub vpc_id: String,
    pub rules: Vec<SecurityGroupRuleInput>,
    pub tags: Tags,
}

impl SecurityGroupInput {
    pub fn validate(&self) -> Result<()> {
        carina_core::domain::security_group::check_description_length(&self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroupOutput {
    pub envelope: Envelope,
}

fn rule_from_domain(rule: &SecurityGroupRule) -> Option<SecurityGroupRuleInput> {
    let direction = match rule.rule_type? {
        RuleType::Ingress => RuleDirection::Ingress,
        RuleType::Egress => RuleDirection::Egress,
    };
    Some(SecurityGroupRuleInput {
        direction,
        from_port: rule.from_port,
        to_port: rule.to_port,
        ip_protocol: rule.protocol.clone(),
        cidr_blocks: rule.cidrs.clone(),
        source_security_group_id: rule
            .source_security_group_ids
            .first()
            .cloned()
            .unwrap_or_default(),
    })
}

fn rule_to_domain(rule: &SecurityGroupRuleInput) -> SecurityGroupRule {
    let rule_type = Some(match rule.direction {
        RuleDirection::Ingress => RuleType::Ingress,
        RuleDirection::Egress => RuleType::Egress,
    });
    let source_security_group_ids = if rule.source_security_group_id.is_empty() {
        Vec::new()
    } else {
        vec![rule.source_security_group_id.clone()]
    };
    SecurityGroupRule {
        rule_type,
        from_port: rule.from_port,
        to_port: rule.to_port,
        protocol: rule.ip_protocol.clone(),
        cidrs: rule.cidr_blocks.clone(),
        source_security_group_ids,
    }
}

pub fn from_domain(sg: &SecurityGroup) -> Result<SecurityGroupInput> {
    let rules = sg
        .rules
        .iter()
        .map(|r| {
            rule_from_domain(r).ok_or_else(|| {
                Error::domain_validation("rule type must be ingress or egress")
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(SecurityGroupInput {
        name: sg.name.clone(),
        description: sg.description.clone(),
        vpc_id: sg.vpc_id.clone(),
        rules,
        tags: carina_core::domain::tags::with_name_tag(&sg.tags, &sg.name),
    })
}

pub fn to_domain_from_output(input: &SecurityGroupInput, output: &SecurityGroupOutput) -> SecurityGroup {
    SecurityGroup {
        name: input.name.clone(),
        description: input.description.clone(),
        vpc_id: input.vpc_id.clone(),
        rules: input.rules.iter().map(rule_to_domain).collect(),
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_group_list_is_narrowed_to_first_element() {
        let mut sg = SecurityGroup::new("web", "allow internal", "vpc-x");
        sg.rules.push(
            SecurityGroupRule::ingress(443, 443, "tcp")
                .with_source_group("sg-a")
                .with_source_group("sg-b"),
        );
        let input = from_domain(&sg).unwrap();
        assert_eq!(input.rules[0].source_security_group_id, "sg-a");
    }

    #[test]
    fn round_trip_through_provider_drops_all_but_first_source_group() {
        let mut sg = SecurityGroup::new("web", "allow internal", "vpc-x");
        sg.rules.push(
            SecurityGroupRule::ingress(443, 443, "tcp")
                .with_source_group("sg-a")
                .with_source_group("sg-b"),
        );
        let input = from_domain(&sg).unwrap();
        let output = SecurityGroupOutput {
            envelope: Envelope::new("sg-1", "", "available", 0),
        };
        let lifted = to_domain_from_output(&input, &output);
        assert_eq!(
            lifted.rules[0].source_security_group_ids,
            vec!["sg-a".to_string()]
        );
    }

    #[test]
    fn description_over_limit_fails_provider_validation() {
        let sg = SecurityGroup::new("web", "x".repeat(300), "vpc-x");
        let input = from_domain(&sg).unwrap();
        let err = input.validate().unwrap_err();
        assert!(err.is_kind(carina_core::ErrorKind::ProviderValidation));
    }
}
