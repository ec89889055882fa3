use crate::envelope::Envelope;
use carina_core::domain::Tags;
use carina_core::domain::elastic_ip::{ElasticIp, PoolType};
use carina_core::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    Vpc,
    Standard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElasticIpInput {
    pub domain: Domain,
    pub existing_allocation_id: String,
    pub public_ipv4_pool: String,
    pub network_border_group: String,
    pub tags: Tags,
}

impl ElasticIpInput {
    /// Allocation ids the real API assigns always carry this prefix;
    /// an existing id that lacks it cannot be a valid reference.
    pub fn validate(&self) -> Result<()> {
        if !self.existing_allocation_id.is_empty()
            && !self.existing_allocation_id.starts_with("eipalloc-")
        {
            return Err(Error::provider_validation(
                "allocation id must be prefixed eipalloc-",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElasticIpOutput {
    pub envelope: Envelope,
    pub public_ip: String,
}

pub fn from_domain(eip: &ElasticIp) -> ElasticIpInput {
    ElasticIpInput {
        domain: Domain::Vpc,
        existing_allocation_id: eip.allocation_id.clone().unwrap_or_default(),
        public_ipv4_pool: eip.pool_id.clone().unwrap_or_default(),
        network_border_group: eip.border_group.clone().unwrap_or_default(),
        tags: eip.tags.clone(),
    }
}

pub fn to_domain_from_output(
    input: &ElasticIpInput,
    region: &str,
    output: &ElasticIpOutput,
) -> ElasticIp {
    ElasticIp {
        region: region.to_string(),
        allocation_id: Some(output.envelope.id.clone()),
        pool_type: if input.public_ipv4_pool.is_empty() {
            PoolType::Amazon
        } else {
            PoolType::Custom
        },
        pool_id: if input.public_ipv4_pool.is_empty() {
            None
        } else {
            Some(input.public_ipv4_pool.clone())
        },
        border_group: if input.network_border_group.is_empty() {
            None
        } else {
            Some(input.network_border_group.clone())
        },
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    }
}
