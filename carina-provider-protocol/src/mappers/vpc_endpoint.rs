use crate::envelope::Envelope;
use carina_core::domain::Tags;
use carina_core::domain::vpc_endpoint::{EndpointType, VpcEndpoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VpcEndpointType {
    Interface,
    Gateway,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VpcEndpointInput {
    pub name: String,
    pub vpc_id: String,
    pub service_name: String,
    pub vpc_endpoint_type: VpcEndpointType,
    pub subnet_ids: Vec<String>,
    pub security_group_ids: Vec<String>,
    pub route_table_ids: Vec<String>,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VpcEndpointOutput {
    pub envelope: Envelope,
}

pub fn from_domain(ep: &VpcEndpoint) -> VpcEndpointInput {
    VpcEndpointInput {
        name: ep.name.clone(),
        vpc_id: ep.vpc_id.clone(),
        service_name: ep.service_name.clone(),
        vpc_endpoint_type: match ep.endpoint_type {
            EndpointType::Interface => VpcEndpointType::Interface,
            EndpointType::Gateway => VpcEndpointType::Gateway,
        },
        subnet_ids: ep.subnet_ids.clone(),
        security_group_ids: ep.security_group_ids.clone(),
        route_table_ids: ep.route_table_ids.clone(),
        tags: carina_core::domain::tags::with_name_tag(&ep.tags, &ep.name),
    }
}

pub fn to_domain_from_output(input: &VpcEndpointInput, output: &VpcEndpointOutput) -> VpcEndpoint {
    VpcEndpoint {
        name: input.name.clone(),
        vpc_id: input.vpc_id.clone(),
        service_name: input.service_name.clone(),
        endpoint_type: match input.vpc_endpoint_type {
            VpcEndpointType::Interface => EndpointType::Interface,
            VpcEndpointType::Gateway => EndpointType::Gateway,
        },
        subnet_ids: input.subnet_ids.clone(),
        security_group_ids: input.security_group_ids.clone(),
        route_table_ids: input.route_table_ids.clone(),
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_type_translates_both_ways() {
        let ep = VpcEndpoint::new("s3-ep", "vpc-x", "com.amazonaws.us-east-1.s3", EndpointType::Gateway);
        let input = from_domain(&ep);
        assert_eq!(input.vpc_endpoint_type, VpcEndpointType::Gateway);
        let output = VpcEndpointOutput {
            envelope: Envelope::new("vpce-1", "", "available", 0),
        };
        let lifted = to_domain_from_output(&input, &output);
        assert_eq!(lifted.endpoint_type, EndpointType::Gateway);
    }
}
