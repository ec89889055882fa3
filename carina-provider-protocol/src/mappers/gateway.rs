use crate::envelope::Envelope;
use carina_core::domain::Tags;
use carina_core::domain::gateway::{InternetGateway, NatGateway};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternetGatewayInput {
    pub name: String,
    pub vpc_id: String,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternetGatewayOutput {
    pub envelope: Envelope,
    pub attachment_state: String,
}

pub fn igw_from_domain(igw: &InternetGateway) -> InternetGatewayInput {
    InternetGatewayInput {
        name: igw.name.clone(),
        vpc_id: igw.vpc_id.clone(),
        tags: carina_core::domain::tags::with_name_tag(&igw.tags, &igw.name),
    }
}

pub fn igw_to_domain_from_output(
    input: &InternetGatewayInput,
    output: &InternetGatewayOutput,
) -> InternetGateway {
    InternetGateway {
        name: input.name.clone(),
        vpc_id: input.vpc_id.clone(),
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatGatewayInput {
    pub name: String,
    pub subnet_id: String,
    pub allocation_id: String,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatGatewayOutput {
    pub envelope: Envelope,
}

pub fn nat_from_domain(nat: &NatGateway) -> NatGatewayInput {
    NatGatewayInput {
        name: nat.name.clone(),
        subnet_id: nat.subnet_id.clone(),
        allocation_id: nat.allocation_id.clone().unwrap_or_default(),
        tags: carina_core::domain::tags::with_name_tag(&nat.tags, &nat.name),
    }
}

pub fn nat_to_domain_from_output(input: &NatGatewayInput, output: &NatGatewayOutput) -> NatGateway {
    NatGateway {
        name: input.name.clone(),
        subnet_id: input.subnet_id.clone(),
        allocation_id: if input.allocation_id.is_empty() {
            None
        } else {
            Some(input.allocation_id.clone())
        },
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn igw_round_trip_lifts_identifiers() {
        let igw = InternetGateway::new("igw", "vpc-x");
        let input = igw_from_domain(&igw);
        let output = InternetGatewayOutput {
            envelope: Envelope::new("igw-1", "", "available", 0),
            attachment_state: "attached".to_string(),
        };
        let lifted = igw_to_domain_from_output(&input, &output);
        assert_eq!(lifted.id.as_deref(), Some("igw-1"));
    }

    #[test]
    fn nat_allocation_id_absent_stays_absent() {
        let nat = NatGateway::new("nat", "subnet-x");
        let input = nat_from_domain(&nat);
        assert_eq!(input.allocation_id, "");
        let output = NatGatewayOutput {
            envelope: Envelope::new("nat-1", "", "available", 0),
        };
        let lifted = nat_to_domain_from_output(&input, &output);
        assert_eq!(lifted.allocation_id, None);
    }
}
