//! ElasticIP — a public IPv4 address allocation.

use crate::domain::{DomainEntity, Tags};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolType {
    Amazon,
    Custom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElasticIp {
    pub region: String,
    pub allocation_id: Option<String>,
    pub pool_type: PoolType,
    pub pool_id: Option<String>,
    pub border_group: Option<String>,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl ElasticIp {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            allocation_id: None,
            pool_type: PoolType::Amazon,
            pool_id: None,
            border_group: None,
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }

    pub fn existing(allocation_id: impl Into<String>) -> Self {
        Self {
            region: String::new(),
            allocation_id: Some(allocation_id.into()),
            pool_type: PoolType::Amazon,
            pool_id: None,
            border_group: None,
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }
}

impl DomainEntity for ElasticIp {
    fn kind(&self) -> &'static str {
        "ElasticIP"
    }

    fn name(&self) -> &str {
        self.allocation_id.as_deref().unwrap_or("")
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn vpc_id(&self) -> Option<&str> {
        None
    }

    fn validate(&self) -> Result<()> {
        // Existing-allocation form bypasses pool checks entirely.
        if self.allocation_id.is_some() {
            return Ok(());
        }
        if self.region.is_empty() {
            return Err(Error::domain_validation(
                "new elastic ip allocations require a region",
            ));
        }
        if self.pool_type == PoolType::Custom && self.pool_id.is_none() {
            return Err(Error::domain_validation(
                "non-amazon pool types require a pool id",
            ));
        }
        Ok(())
    }
}
