use crate::envelope::Envelope;
use carina_core::domain::Tags;
use carina_core::domain::network_acl::{AclAction, AclRule, NetworkAcl};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleAction {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AclRuleInput {
    pub rule_number: u16,
    pub egress: bool,
    pub rule_action: RuleAction,
    pub protocol: String,
    pub cidr_block: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkAclInput {
    pub name: String,
    pub vpc_id: String,
    pub rules: Vec<AclRuleInput>,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkAclOutput {
    pub envelope: Envelope,
    pub associated_subnet_ids: Vec<String>,
}

fn action_from_domain(action: AclAction) -> RuleAction {
    match action {
        AclAction::Allow => RuleAction::Allow,
        AclAction::Deny => RuleAction::Deny,
    }
}

fn action_to_domain(action: RuleAction) -> AclAction {
    match action {
        RuleAction::Allow => AclAction::Allow,
        RuleAction::Deny => AclAction::Deny,
    }
}

pub fn from_domain(acl: &NetworkAcl) -> NetworkAclInput {
    let inbound = acl.inbound.iter().map(|r| AclRuleInput {
        rule_number: r.rule_number,
        egress: false,
        rule_action: action_from_domain(r.action),
        protocol: r.protocol.clone(),
        cidr_block: r.cidr.clone(),
    });
    let outbound = acl.outbound.iter().map(|r| AclRuleInput {
        rule_number: r.rule_number,
        egress: true,
        rule_action: action_from_domain(r.action),
        protocol: r.protocol.clone(),
        cidr_block: r.cidr.clone(),
    });
    NetworkAclInput {
        name: acl.name.clone(),
        vpc_id: acl.vpc_id.clone(),
        rules: inbound.chain(outbound).collect(),
        tags: carina_core::domain::tags::with_name_tag(&acl.tags, &acl.name),
    }
}

pub fn to_domain_from_output(input: &NetworkAclInput, output: &NetworkAclOutput) -> NetworkAcl {
    let mut inbound = Vec::new();
    let mut outbound = Vec::new();
    for rule in &input.rules {
        let acl_rule = AclRule::new(
            rule.rule_number,
            action_to_domain(rule.rule_action),
            rule.protocol.clone(),
            rule.cidr_block.clone(),
        );
        if rule.egress {
            outbound.push(acl_rule);
        } else {
            inbound.push(acl_rule);
        }
    }
    NetworkAcl {
        name: input.name.clone(),
        vpc_id: input.vpc_id.clone(),
        is_default: false,
        inbound,
        outbound,
        subnets: output.associated_subnet_ids.clone(),
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_and_outbound_are_tagged_by_egress_flag() {
        let mut acl = NetworkAcl::new("acl1", "vpc-x");
        acl.inbound.push(AclRule::new(100, AclAction::Allow, "tcp", "0.0.0.0/0"));
        acl.outbound.push(AclRule::new(200, AclAction::Deny, "tcp", "10.0.0.0/16"));
        let input = from_domain(&acl);
        assert!(!input.rules[0].egress);
        assert!(input.rules[1].egress);
    }

    #[test]
    fn round_trip_separates_rules_back_into_inbound_outbound() {
        let mut acl = NetworkAcl::new("acl1", "vpc-x");
        acl.inbound.push(AclRule::new(100, AclAction::Allow, "tcp", "0.0.0.0/0"));
        acl.outbound.push(AclRule::new(200, AclAction::Deny, "tcp", "10.0.0.0/16"));
        let input = from_domain(&acl);
        let output = NetworkAclOutput {
            envelope: Envelope::new("acl-1", "", "available", 0),
            associated_subnet_ids: Vec::new(),
        };
        let lifted = to_domain_from_output(&input, &output);
        assert_eq!(lifted.inbound.len(), 1);
        assert_eq!(lifted.outbound.len(), 1);
    }
}
