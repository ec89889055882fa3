//! In-memory resource state: every created output, plus the
//! cross-entity association tables the adapter layer relies on
//! (a subnet has at most one route table and at most one network
//! ACL association; an internet gateway is attached to at most one
//! VPC at a time).

use std::collections::HashMap;
use std::sync::Mutex;

use carina_provider_protocol::mappers::compute::{
    AutoScalingGroupOutput, Ec2InstanceOutput, LoadBalancerOutput,
};
use carina_provider_protocol::mappers::elastic_ip::ElasticIpOutput;
use carina_provider_protocol::mappers::gateway::{InternetGatewayOutput, NatGatewayOutput};
use carina_provider_protocol::mappers::iam::{
    GroupOutput, InstanceProfileOutput, PolicyOutput, RoleOutput, UserOutput,
};
use carina_provider_protocol::mappers::network_acl::NetworkAclOutput;
use carina_provider_protocol::mappers::network_interface::NetworkInterfaceOutput;
use carina_provider_protocol::mappers::route_table::RouteTableOutput;
use carina_provider_protocol::mappers::security_group::SecurityGroupOutput;
use carina_provider_protocol::mappers::storage::{LambdaFunctionOutput, S3BucketOutput};
use carina_provider_protocol::mappers::subnet::SubnetOutput;
use carina_provider_protocol::mappers::vpc::VpcOutput;
use carina_provider_protocol::mappers::vpc_endpoint::VpcEndpointOutput;

#[derive(Default)]
pub struct Store {
    pub vpcs: HashMap<String, VpcOutput>,
    pub subnets: HashMap<String, SubnetOutput>,
    pub internet_gateways: HashMap<String, InternetGatewayOutput>,
    pub igw_attachments: HashMap<String, String>,
    pub nat_gateways: HashMap<String, NatGatewayOutput>,
    pub route_tables: HashMap<String, RouteTableOutput>,
    pub route_table_associations: HashMap<String, String>,
    pub security_groups: HashMap<String, SecurityGroupOutput>,
    pub network_acls: HashMap<String, NetworkAclOutput>,
    pub acl_associations: HashMap<String, String>,
    pub elastic_ips: HashMap<String, ElasticIpOutput>,
    pub network_interfaces: HashMap<String, NetworkInterfaceOutput>,
    pub vpc_endpoints: HashMap<String, VpcEndpointOutput>,
    pub policies: HashMap<String, PolicyOutput>,
    pub roles: HashMap<String, RoleOutput>,
    pub role_policy_attachments: HashMap<String, Vec<String>>,
    pub users: HashMap<String, UserOutput>,
    pub groups: HashMap<String, GroupOutput>,
    pub instance_profiles: HashMap<String, InstanceProfileOutput>,
    pub instance_profile_roles: HashMap<String, String>,
    pub instances: HashMap<String, Ec2InstanceOutput>,
    pub autoscaling_groups: HashMap<String, AutoScalingGroupOutput>,
    pub load_balancers: HashMap<String, LoadBalancerOutput>,
    pub buckets: HashMap<String, S3BucketOutput>,
    pub functions: HashMap<String, LambdaFunctionOutput>,
}

/// Shared mutable state plus the identity the provider synthesizes
/// ids and ARNs against.
pub struct MockState {
    pub account_id: String,
    pub region: String,
    pub store: Mutex<Store>,
}

impl MockState {
    pub fn new(account_id: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            region: region.into(),
            store: Mutex::new(Store::default()),
        }
    }
}

impl Default for MockState {
    fn default() -> Self {
        Self::new(
            carina_aws_types::STANDARD_TEST_ACCOUNT_ID,
            "us-east-1",
        )
    }
}
