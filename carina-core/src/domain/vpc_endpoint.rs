//! VPCEndpoint — Interface or Gateway style private connectivity to an AWS service.

use crate::domain::{DomainEntity, Tags};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointType {
    Interface,
    Gateway,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VpcEndpoint {
    pub name: String,
    pub vpc_id: String,
    pub service_name: String,
    pub endpoint_type: EndpointType,
    pub subnet_ids: Vec<String>,
    pub security_group_ids: Vec<String>,
    pub route_table_ids: Vec<String>,
    pub tags: Tags,
    pub arn: Option<String>,
    pub id: Option<String>,
}

impl VpcEndpoint {
    pub fn new(
        name: impl Into<String>,
        vpc_id: impl Into<String>,
        service_name: impl Into<String>,
        endpoint_type: EndpointType,
    ) -> Self {
        Self {
            name: name.into(),
            vpc_id: vpc_id.into(),
            service_name: service_name.into(),
            endpoint_type,
            subnet_ids: Vec::new(),
            security_group_ids: Vec::new(),
            route_table_ids: Vec::new(),
            tags: Tags::new(),
            arn: None,
            id: None,
        }
    }
}

impl DomainEntity for VpcEndpoint {
    fn kind(&self) -> &'static str {
        "VPCEndpoint"
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
                "vpc endpoint name must not be empty",
            ));
        }
        if self.vpc_id.is_empty() {
            return Err(Error::domain_validation(
                "vpc endpoint vpcID must not be empty",
            ));
        }
        if self.service_name.is_empty() {
            return Err(Error::domain_validation(
                "vpc endpoint serviceName must not be empty",
            ));
        }
        if !self.service_name.contains('.') {
            return Err(Error::domain_validation(
                "vpc endpoint serviceName must contain '.'",
            ));
        }
        match self.endpoint_type {
            EndpointType::Interface => {
                if self.security_group_ids.is_empty() || self.subnet_ids.is_empty() {
                    return Err(Error::domain_validation(
                        "interface endpoints require security groups and subnets",
                    ));
                }
            }
            EndpointType::Gateway => {
                if self.route_table_ids.is_empty() {
                    return Err(Error::domain_validation(
                        "gateway endpoints require route tables",
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_interface_endpoint_passes() {
        let mut ep = VpcEndpoint::new("s3-ep", "vpc-x", "com.amazonaws.us-east-1.s3", EndpointType::Interface);
        ep.subnet_ids.push("subnet-a".to_string());
        ep.security_group_ids.push("sg-a".to_string());
        assert!(ep.validate().is_ok());
    }

    #[test]
    fn interface_without_subnets_fails() {
        let mut ep = VpcEndpoint::new("s3-ep", "vpc-x", "com.amazonaws.us-east-1.s3", EndpointType::Interface);
        ep.security_group_ids.push("sg-a".to_string());
        assert!(ep.validate().is_err());
    }

    #[test]
    fn valid_gateway_endpoint_passes() {
        let mut ep = VpcEndpoint::new("s3-ep", "vpc-x", "com.amazonaws.us-east-1.s3", EndpointType::Gateway);
        ep.route_table_ids.push("rtb-a".to_string());
        assert!(ep.validate().is_ok());
    }

    #[test]
    fn gateway_without_route_tables_fails() {
        let ep = VpcEndpoint::new("s3-ep", "vpc-x", "com.amazonaws.us-east-1.s3", EndpointType::Gateway);
        assert!(ep.validate().is_err());
    }

    #[test]
    fn service_name_without_dot_fails() {
        let mut ep = VpcEndpoint::new("s3-ep", "vpc-x", "s3only", EndpointType::Gateway);
        ep.route_table_ids.push("rtb-a".to_string());
        assert!(ep.validate().is_err());
    }
}
