use crate::envelope::Envelope;
use carina_core::domain::Tags;
use carina_core::domain::subnet::Subnet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubnetInput {
    pub name: String,
    pub vpc_id: String,
    pub cidr_block: String,
    pub availability_zone: Option<String>,
    pub map_public_ip_on_launch: bool,
    pub tags: Tags,
}

impl SubnetInput {
    pub fn validate(&self) -> carina_core::Result<()> {
        if self.cidr_block.is_empty() {
            return Err(carina_core::Error::provider_validation(
                "cidrBlock must not be empty",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubnetOutput {
    pub envelope: Envelope,
    /// The route table currently associated, if any (at most one).
    pub route_table_id: String,
}

pub fn from_domain(subnet: &Subnet) -> SubnetInput {
    SubnetInput {
        name: subnet.name.clone(),
        vpc_id: subnet.vpc_id.clone(),
        cidr_block: subnet.cidr.clone(),
        availability_zone: subnet.az.clone(),
        map_public_ip_on_launch: subnet.is_public,
        tags: carina_core::domain::tags::with_name_tag(&subnet.tags, &subnet.name),
    }
}

pub fn to_domain_from_output(input: &SubnetInput, output: &SubnetOutput) -> Subnet {
    Subnet {
        name: input.name.clone(),
        vpc_id: input.vpc_id.clone(),
        cidr: input.cidr_block.clone(),
        az: input.availability_zone.clone(),
        is_public: input.map_public_ip_on_launch,
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    }
}
