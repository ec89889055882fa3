use crate::envelope::Envelope;
use carina_core::domain::Tags;
use carina_core::domain::vpc::Vpc;
use carina_core::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Provider-shaped VPC create input. `enable_dns`/`enable_dns_hostnames`
/// rename to the provider's actual attribute names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VpcInput {
    pub name: String,
    pub region: String,
    pub cidr_block: String,
    pub enable_dns_support: bool,
    pub enable_dns_hostnames: bool,
    pub instance_tenancy: String,
    pub tags: Tags,
}

impl VpcInput {
    pub fn validate(&self) -> Result<()> {
        if self.cidr_block.is_empty() {
            return Err(Error::provider_validation("cidrBlock must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VpcOutput {
    pub envelope: Envelope,
}

pub fn from_domain(vpc: &Vpc) -> VpcInput {
    VpcInput {
        name: vpc.name.clone(),
        region: vpc.region.clone(),
        cidr_block: vpc.cidr.clone(),
        enable_dns_support: vpc.enable_dns,
        enable_dns_hostnames: vpc.enable_dns_hostnames,
        instance_tenancy: "default".to_string(),
        tags: carina_core::domain::tags::with_name_tag(&vpc.tags, &vpc.name),
    }
}

pub fn to_domain_from_output(input: &VpcInput, output: &VpcOutput) -> Vpc {
    Vpc {
        name: input.name.clone(),
        region: input.region.clone(),
        cidr: input.cidr_block.clone(),
        enable_dns: input.enable_dns_support,
        enable_dns_hostnames: input.enable_dns_hostnames,
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
        id: Some(output.envelope.id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_renames_fields_and_injects_name_tag() {
        let vpc = Vpc::new("prod", "us-east-1", "10.0.0.0/16");
        let input = from_domain(&vpc);
        assert_eq!(input.cidr_block, "10.0.0.0/16");
        assert_eq!(input.tags.get("Name"), Some(&"prod".to_string()));
        assert_eq!(input.instance_tenancy, "default");
    }

    #[test]
    fn round_trip_through_output_lifts_identifiers() {
        let vpc = Vpc::new("prod", "us-east-1", "10.0.0.0/16");
        let input = from_domain(&vpc);
        let output = VpcOutput {
            envelope: Envelope::new(
                "vpc-1",
                "arn:aws:ec2:us-east-1:123456789012:vpc/vpc-1",
                "available",
                0,
            ),
        };
        let lifted = to_domain_from_output(&input, &output);
        assert_eq!(lifted.id.as_deref(), Some("vpc-1"));
        assert_eq!(
            lifted.arn.as_deref(),
            Some("arn:aws:ec2:us-east-1:123456789012:vpc/vpc-1")
        );
        assert_eq!(lifted.cidr, "10.0.0.0/16");
    }

    #[test]
    fn empty_cidr_input_fails_provider_validation() {
        let input = VpcInput {
            name: "prod".to_string(),
            region: "us-east-1".to_string(),
            cidr_block: String::new(),
            enable_dns_support: true,
            enable_dns_hostnames: false,
            instance_tenancy: "default".to_string(),
            tags: Tags::new(),
        };
        let err = input.validate().unwrap_err();
        assert!(err.is_kind(carina_core::ErrorKind::ProviderValidation));
    }
}
