//! Translation between the domain's tagged `RouteTarget` and the provider's
//! four mutually-exclusive target-id slots.

use carina_core::domain::route_table::RouteTarget;
use carina_core::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Provider-shaped route target slots. At most one should be non-empty;
/// `local` has no id slot of its own (the provider implies it).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderRouteTargetSlots {
    pub gateway_id: String,
    pub nat_gateway_id: String,
    pub transit_gateway_id: String,
    pub vpc_peering_connection_id: String,
    pub is_local: bool,
}

impl ProviderRouteTargetSlots {
    pub fn from_domain(target: &RouteTarget) -> Self {
        let mut slots = Self::default();
        match target {
            RouteTarget::InternetGateway(id) => slots.gateway_id = id.clone(),
            RouteTarget::NatGateway(id) => slots.nat_gateway_id = id.clone(),
            RouteTarget::TransitGateway(id) => slots.transit_gateway_id = id.clone(),
            RouteTarget::VpcPeering(id) => slots.vpc_peering_connection_id = id.clone(),
            RouteTarget::Local => slots.is_local = true,
        }
        slots
    }

    fn occupied_count(&self) -> usize {
        [
            !self.gateway_id.is_empty(),
            !self.nat_gateway_id.is_empty(),
            !self.transit_gateway_id.is_empty(),
            !self.vpc_peering_connection_id.is_empty(),
            self.is_local,
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// Setting more than one slot is a validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.occupied_count() > 1 {
            return Err(Error::provider_validation(
                "route can only have one target",
            ));
        }
        Ok(())
    }

    /// In the provider-to-domain direction the first non-empty tag wins.
    pub fn to_domain(&self) -> Result<RouteTarget> {
        self.validate()?;
        if !self.gateway_id.is_empty() {
            return Ok(RouteTarget::InternetGateway(self.gateway_id.clone()));
        }
        if !self.nat_gateway_id.is_empty() {
            return Ok(RouteTarget::NatGateway(self.nat_gateway_id.clone()));
        }
        if !self.transit_gateway_id.is_empty() {
            return Ok(RouteTarget::TransitGateway(self.transit_gateway_id.clone()));
        }
        if !self.vpc_peering_connection_id.is_empty() {
            return Ok(RouteTarget::VpcPeering(self.vpc_peering_connection_id.clone()));
        }
        Ok(RouteTarget::Local)
    }
}
