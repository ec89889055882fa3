use carina_core::Result;
use carina_core::domain::gateway::{InternetGateway, NatGateway};
use carina_core::domain::network_acl::{AclAction, NetworkAcl};
use carina_core::domain::route_table::{RouteTable, RouteTarget};
use carina_core::domain::security_group::{RuleType, SecurityGroup};
use carina_core::domain::{Tags, elastic_ip::ElasticIp, network_interface::NetworkInterface, subnet::Subnet, vpc::Vpc, vpc_endpoint::VpcEndpoint};

use crate::block::Block;
use crate::resource::AnyResource;
use crate::value::Value;

use super::{require_id, tf_label};

fn tags_attribute(tags: &Tags) -> Option<Value> {
    if tags.is_empty() {
        None
    } else {
        Some(Value::Map(
            tags.iter().map(|(k, v)| (k.clone(), Value::string(v))).collect(),
        ))
    }
}

pub fn vpc(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::Vpc(vpc) = resource else {
        unreachable!("registry dispatches VPC only to this mapper")
    };
    let block = Block::resource("aws_vpc", tf_label(&vpc.name))
        .with_attribute("cidr_block", Value::string(&vpc.cidr))
        .with_attribute("enable_dns_support", Value::Bool(vpc.enable_dns))
        .with_attribute("enable_dns_hostnames", Value::Bool(vpc.enable_dns_hostnames))
        .with_optional_attribute("tags", tags_attribute(&vpc.tags));
    Ok(vec![block])
}

pub fn subnet(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::Subnet(subnet) = resource else {
        unreachable!("registry dispatches Subnet only to this mapper")
    };
    let mut block = Block::resource("aws_subnet", tf_label(&subnet.name))
        .with_attribute("vpc_id", Value::string(&subnet.vpc_id))
        .with_attribute("cidr_block", Value::string(&subnet.cidr))
        .with_attribute("map_public_ip_on_launch", Value::Bool(subnet.is_public))
        .with_optional_attribute("tags", tags_attribute(&subnet.tags));
    if let Some(az) = &subnet.az {
        block = block.with_attribute("availability_zone", Value::string(az));
    }
    Ok(vec![block])
}

pub fn internet_gateway(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::InternetGateway(igw) = resource else {
        unreachable!("registry dispatches InternetGateway only to this mapper")
    };
    let block = Block::resource("aws_internet_gateway", tf_label(&igw.name))
        .with_attribute("vpc_id", Value::string(&igw.vpc_id))
        .with_optional_attribute("tags", tags_attribute(&igw.tags));
    Ok(vec![block])
}

pub fn nat_gateway(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::NatGateway(nat) = resource else {
        unreachable!("registry dispatches NATGateway only to this mapper")
    };
    let mut block = Block::resource("aws_nat_gateway", tf_label(&nat.name))
        .with_attribute("subnet_id", Value::string(&nat.subnet_id))
        .with_optional_attribute("tags", tags_attribute(&nat.tags));
    if let Some(allocation_id) = &nat.allocation_id {
        block = block.with_attribute("allocation_id", Value::string(allocation_id));
    }
    Ok(vec![block])
}

fn route_target_attribute(target: &RouteTarget) -> (&'static str, Value) {
    match target {
        RouteTarget::InternetGateway(id) => ("gateway_id", Value::string(id)),
        RouteTarget::NatGateway(id) => ("nat_gateway_id", Value::string(id)),
        RouteTarget::TransitGateway(id) => ("transit_gateway_id", Value::string(id)),
        RouteTarget::VpcPeering(id) => ("vpc_peering_connection_id", Value::string(id)),
        RouteTarget::Local => ("gateway_id", Value::string("local")),
    }
}

pub fn route_table(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::RouteTable(rt) = resource else {
        unreachable!("registry dispatches RouteTable only to this mapper")
    };
    let label = tf_label(&rt.name);
    let mut main = Block::resource("aws_route_table", &label)
        .with_attribute("vpc_id", Value::string(&rt.vpc_id))
        .with_optional_attribute("tags", tags_attribute(&rt.tags));
    for route in &rt.routes {
        let (attr, value) = route_target_attribute(&route.target);
        main = main.with_nested(
            Block::nested("route")
                .with_attribute("cidr_block", Value::string(&route.destination_cidr))
                .with_attribute(attr, value),
        );
    }
    let mut blocks = vec![main];
    let rt_id = require_id("RouteTable", rt.id.as_deref())?;
    for (i, subnet_id) in rt.associated_subnets.iter().enumerate() {
        blocks.push(
            Block::resource("aws_route_table_association", format!("{label}_{i}"))
                .with_attribute("subnet_id", Value::string(subnet_id))
                .with_attribute("route_table_id", Value::string(&rt_id)),
        );
    }
    Ok(blocks)
}

fn rule_type_name(rule_type: Option<RuleType>) -> &'static str {
    match rule_type {
        Some(RuleType::Ingress) => "ingress",
        Some(RuleType::Egress) => "egress",
        None => "ingress",
    }
}

pub fn security_group(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::SecurityGroup(sg) = resource else {
        unreachable!("registry dispatches SecurityGroup only to this mapper")
    };
    let mut block = Block::resource("aws_security_group", tf_label(&sg.name))
        .with_attribute("name", Value::string(&sg.name))
        .with_attribute("description", Value::string(&sg.description))
        .with_attribute("vpc_id", Value::string(&sg.vpc_id))
        .with_optional_attribute("tags", tags_attribute(&sg.tags));
    for rule in &sg.rules {
        let mut nested = Block::nested(rule_type_name(rule.rule_type))
            .with_attribute("from_port", Value::Number(rule.from_port as f64))
            .with_attribute("to_port", Value::Number(rule.to_port as f64))
            .with_attribute("protocol", Value::string(&rule.protocol));
        if !rule.cidrs.is_empty() {
            nested = nested.with_attribute("cidr_blocks", Value::list_of_strings(rule.cidrs.clone()));
        }
        if !rule.source_security_group_ids.is_empty() {
            nested = nested.with_attribute(
                "security_groups",
                Value::list_of_strings(rule.source_security_group_ids.clone()),
            );
        }
        block = block.with_nested(nested);
    }
    Ok(vec![block])
}

fn acl_rule_block(rule_number: u16, action: AclAction, protocol: &str, cidr: &str, egress: bool) -> Block {
    Block::nested(if egress { "egress" } else { "ingress" })
        .with_attribute("rule_no", Value::Number(rule_number as f64))
        .with_attribute(
            "action",
            Value::string(match action {
                AclAction::Allow => "allow",
                AclAction::Deny => "deny",
            }),
        )
        .with_attribute("protocol", Value::string(protocol))
        .with_attribute("cidr_block", Value::string(cidr))
}

pub fn network_acl(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::NetworkAcl(acl) = resource else {
        unreachable!("registry dispatches NetworkACL only to this mapper")
    };
    let label = tf_label(&acl.name);
    let mut main = Block::resource("aws_network_acl", &label)
        .with_attribute("vpc_id", Value::string(&acl.vpc_id))
        .with_optional_attribute("tags", tags_attribute(&acl.tags));
    for rule in &acl.inbound {
        main = main.with_nested(acl_rule_block(rule.rule_number, rule.action, &rule.protocol, &rule.cidr, false));
    }
    for rule in &acl.outbound {
        main = main.with_nested(acl_rule_block(rule.rule_number, rule.action, &rule.protocol, &rule.cidr, true));
    }
    let mut blocks = vec![main];
    let acl_id = require_id("NetworkACL", acl.id.as_deref())?;
    for (i, subnet_id) in acl.subnets.iter().enumerate() {
        blocks.push(
            Block::resource("aws_network_acl_association", format!("{label}_{i}"))
                .with_attribute("network_acl_id", Value::string(&acl_id))
                .with_attribute("subnet_id", Value::string(subnet_id)),
        );
    }
    Ok(blocks)
}

pub fn elastic_ip(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::ElasticIp(eip) = resource else {
        unreachable!("registry dispatches ElasticIP only to this mapper")
    };
    let id = require_id("ElasticIP", eip.id.as_deref())?;
    let block = Block::resource("aws_eip", tf_label(&id))
        .with_attribute("domain", Value::string("vpc"))
        .with_optional_attribute("tags", tags_attribute(&eip.tags));
    Ok(vec![block])
}

pub fn network_interface(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::NetworkInterface(eni) = resource else {
        unreachable!("registry dispatches NetworkInterface only to this mapper")
    };
    let id = require_id("NetworkInterface", eni.id.as_deref())?;
    let mut block = Block::resource("aws_network_interface", tf_label(&id))
        .with_attribute("subnet_id", Value::string(&eni.subnet_id));
    if !eni.security_group_ids.is_empty() {
        block = block.with_attribute(
            "security_groups",
            Value::list_of_strings(eni.security_group_ids.clone()),
        );
    }
    if let Some(ip) = &eni.private_ip {
        block = block.with_attribute("private_ips", Value::list_of_strings([ip.clone()]));
    }
    Ok(vec![block])
}

pub fn vpc_endpoint(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::VpcEndpoint(ep) = resource else {
        unreachable!("registry dispatches VPCEndpoint only to this mapper")
    };
    use carina_core::domain::vpc_endpoint::EndpointType;
    let block = Block::resource("aws_vpc_endpoint", tf_label(&ep.name))
        .with_attribute("vpc_id", Value::string(&ep.vpc_id))
        .with_attribute("service_name", Value::string(&ep.service_name))
        .with_attribute(
            "vpc_endpoint_type",
            Value::string(match ep.endpoint_type {
                EndpointType::Interface => "Interface",
                EndpointType::Gateway => "Gateway",
            }),
        )
        .with_optional_attribute(
            "subnet_ids",
            (!ep.subnet_ids.is_empty()).then(|| Value::list_of_strings(ep.subnet_ids.clone())),
        )
        .with_optional_attribute(
            "security_group_ids",
            (!ep.security_group_ids.is_empty()).then(|| Value::list_of_strings(ep.security_group_ids.clone())),
        )
        .with_optional_attribute(
            "route_table_ids",
            (!ep.route_table_ids.is_empty()).then(|| Value::list_of_strings(ep.route_table_ids.clone())),
        )
        .with_optional_attribute("tags", tags_attribute(&ep.tags));
    Ok(vec![block])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vpc_mapper_labels_block_as_aws_vpc() {
        let resource = AnyResource::Vpc(Vpc::new("prod", "us-east-1", "10.0.0.0/16"));
        let blocks = vpc(&resource).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].labels, vec!["aws_vpc", "prod"]);
    }

    #[test]
    fn route_table_without_an_id_fails_emitter_malformed() {
        let rt = RouteTable::new("rt1", "vpc-x");
        let resource = AnyResource::RouteTable(rt);
        let err = route_table(&resource).unwrap_err();
        assert!(err.is_kind(carina_core::ErrorKind::EmitterMalformed));
    }

    #[test]
    fn route_table_emits_an_association_block_per_subnet() {
        let mut rt = RouteTable::new("rt1", "vpc-x");
        rt.id = Some("rtb-1".to_string());
        rt.associated_subnets.push("subnet-a".to_string());
        let resource = AnyResource::RouteTable(rt);
        let blocks = route_table(&resource).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].labels[0], "aws_route_table_association");
    }

    #[test]
    fn security_group_rules_become_nested_ingress_egress_blocks() {
        use carina_core::domain::security_group::SecurityGroupRule;
        let mut sg = SecurityGroup::new("web", "allow https", "vpc-x");
        sg.rules.push(SecurityGroupRule::ingress(443, 443, "tcp").with_cidr("0.0.0.0/0"));
        let resource = AnyResource::SecurityGroup(sg);
        let blocks = security_group(&resource).unwrap();
        assert_eq!(blocks[0].blocks.len(), 1);
    }
}
