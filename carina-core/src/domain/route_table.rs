//! RouteTable — ordered routes plus the subnets associated with it.

use crate::cidr::Cidr;
use crate::domain::{DomainEntity, Tags};
use crate::error::{Error, Result};
use std::collections::HashSet;

/// A route's single target, tagged by construction so the "exactly one
/// target" invariant can't be violated in the domain model (contrast
/// with the provider input struct, which carries four nullable
/// slots and must check this explicitly).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    InternetGateway(String),
    NatGateway(String),
    TransitGateway(String),
    VpcPeering(String),
    Local,
}

impl RouteTarget {
    pub fn type_name(&self) -> &'static str {
        match self {
            RouteTarget::InternetGateway(_) => "internet_gateway",
            RouteTarget::NatGateway(_) => "nat_gateway",
            RouteTarget::TransitGateway(_) => "transit_gateway",
            RouteTarget::VpcPeering(_) => "vpc_peering",
            RouteTarget::Local => "local",
        }
    }

    pub fn target_id(&self) -> Option<&str> {
        match self {
            RouteTarget::InternetGateway(id)
            | RouteTarget::NatGateway(id)
            | RouteTarget::TransitGateway(id)
            | RouteTarget::VpcPeering(id) => Some(id),
            RouteTarget::Local => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub destination_cidr: String,
    pub target: RouteTarget,
}

impl Route {
    pub fn new(destination_cidr: impl Into<String>, target: RouteTarget) -> Self {
        Self {
            destination_cidr: destination_cidr.into(),
            target,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.destination_cidr.is_empty() {
            return Err(Error::domain_validation(
                "route destinationCIDR must not be empty",
            ));
        }
        self.destination_cidr
            .parse::<Cidr>()
            .map_err(|e| Error::domain_validation(format!("route destination cidr invalid: {e}")))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    pub name: String,
    pub vpc_id: String,
    pub routes: Vec<Route>,
    pub associated_subnets: Vec<String>,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl RouteTable {
    pub fn new(name: impl Into<String>, vpc_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vpc_id: vpc_id.into(),
            routes: Vec::new(),
            associated_subnets: Vec::new(),
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }
}

impl DomainEntity for RouteTable {
    fn kind(&self) -> &'static str {
        "RouteTable"
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
                "route table name must not be empty",
            ));
        }
        if self.vpc_id.is_empty() {
            return Err(Error::domain_validation(
                "route table vpcID must not be empty",
            ));
        }
        let mut seen = HashSet::new();
        for route in &self.routes {
            route.validate()?;
            if !seen.insert(route.destination_cidr.clone()) {
                return Err(Error::domain_validation("duplicate route destination"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_route_table_passes() {
        let mut rt = RouteTable::new("rt1", "vpc-x");
        rt.routes.push(Route::new(
            "0.0.0.0/0",
            RouteTarget::InternetGateway("igw-1".to_string()),
        ));
        assert!(rt.validate().is_ok());
    }

    #[test]
    fn duplicate_destination_fails() {
        let mut rt = RouteTable::new("rt1", "vpc-x");
        rt.routes.push(Route::new(
            "0.0.0.0/0",
            RouteTarget::InternetGateway("igw-1".to_string()),
        ));
        rt.routes.push(Route::new(
            "0.0.0.0/0",
            RouteTarget::NatGateway("nat-1".to_string()),
        ));
        let err = rt.validate().unwrap_err();
        assert_eq!(err.message, "duplicate route destination");
    }

    #[test]
    fn empty_destination_cidr_fails() {
        let mut rt = RouteTable::new("rt1", "vpc-x");
        rt.routes.push(Route::new("", RouteTarget::Local));
        assert!(rt.validate().is_err());
    }

    #[test]
    fn invalid_destination_cidr_fails() {
        let mut rt = RouteTable::new("rt1", "vpc-x");
        rt.routes.push(Route::new("not-a-cidr", RouteTarget::Local));
        assert!(rt.validate().is_err());
    }

    #[test]
    fn local_route_needs_no_target_id() {
        let route = Route::new("10.0.0.0/16", RouteTarget::Local);
        assert_eq!(route.target.target_id(), None);
        assert_eq!(route.target.type_name(), "local");
    }
}
