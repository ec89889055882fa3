use crate::envelope::Envelope;
use crate::route_target::ProviderRouteTargetSlots;
use carina_core::domain::Tags;
use carina_core::domain::route_table::{Route, RouteTable};
use carina_core::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInput {
    pub destination_cidr_block: String,
    pub target: ProviderRouteTargetSlots,
}

impl RouteInput {
    pub fn validate(&self) -> Result<()> {
        self.target.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTableInput {
    pub name: String,
    pub vpc_id: String,
    pub routes: Vec<RouteInput>,
    pub tags: Tags,
}

impl RouteTableInput {
    pub fn validate(&self) -> Result<()> {
        for route in &self.routes {
            route.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTableOutput {
    pub envelope: Envelope,
    pub associated_subnet_ids: Vec<String>,
}

pub fn from_domain(rt: &RouteTable) -> RouteTableInput {
    RouteTableInput {
        name: rt.name.clone(),
        vpc_id: rt.vpc_id.clone(),
        routes: rt
            .routes
            .iter()
            .map(|r| RouteInput {
                destination_cidr_block: r.destination_cidr.clone(),
                target: ProviderRouteTargetSlots::from_domain(&r.target),
            })
            .collect(),
        tags: carina_core::domain::tags::with_name_tag(&rt.tags, &rt.name),
    }
}

pub fn to_domain_from_output(input: &RouteTableInput, output: &RouteTableOutput) -> Result<RouteTable> {
    let mut routes = Vec::with_capacity(input.routes.len());
    for route in &input.routes {
        routes.push(Route::new(
            route.destination_cidr_block.clone(),
            route.target.to_domain()?,
        ));
    }
    Ok(RouteTable {
        name: input.name.clone(),
        vpc_id: input.vpc_id.clone(),
        routes,
        associated_subnets: output.associated_subnet_ids.clone(),
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use carina_core::domain::route_table::RouteTarget;

    #[test]
    fn from_domain_translates_each_route_target() {
        let mut rt = RouteTable::new("rt1", "vpc-x");
        rt.routes
            .push(Route::new("0.0.0.0/0", RouteTarget::InternetGateway("igw-1".into())));
        let input = from_domain(&rt);
        assert_eq!(input.routes[0].target.gateway_id, "igw-1");
    }

    #[test]
    fn output_lift_restores_subnet_associations() {
        let rt = RouteTable::new("rt1", "vpc-x");
        let input = from_domain(&rt);
        let output = RouteTableOutput {
            envelope: Envelope::new("rtb-1", "", "available", 0),
            associated_subnet_ids: vec!["subnet-a".to_string()],
        };
        let lifted = to_domain_from_output(&input, &output).unwrap();
        assert_eq!(lifted.associated_subnets, vec!["subnet-a".to_string()]);
    }
}
