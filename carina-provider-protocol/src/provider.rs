//! The provider service contract: same verbs the domain adapter
//! exposes, but inputs are provider models and outputs are provider
//! output envelopes. Implemented by the deterministic in-memory
//! provider; an SDK-backed variant is a drop-in swap behind this same
//! trait.

use crate::mappers::compute::{
    AutoScalingGroupInput, AutoScalingGroupOutput, Ec2InstanceInput, Ec2InstanceOutput,
    LoadBalancerInput, LoadBalancerOutput,
};
use crate::mappers::elastic_ip::{ElasticIpInput, ElasticIpOutput};
use crate::mappers::gateway::{
    InternetGatewayInput, InternetGatewayOutput, NatGatewayInput, NatGatewayOutput,
};
use crate::mappers::iam::{
    GroupInput, GroupOutput, InstanceProfileInput, InstanceProfileOutput, PolicyInput,
    PolicyOutput, RoleInput, RoleOutput, UserInput, UserOutput,
};
use crate::mappers::network_acl::{NetworkAclInput, NetworkAclOutput};
use crate::mappers::network_interface::{NetworkInterfaceInput, NetworkInterfaceOutput};
use crate::mappers::route_table::{RouteTableInput, RouteTableOutput};
use crate::mappers::security_group::{SecurityGroupInput, SecurityGroupOutput};
use crate::mappers::storage::{LambdaFunctionInput, LambdaFunctionOutput, S3BucketInput, S3BucketOutput};
use crate::mappers::subnet::{SubnetInput, SubnetOutput};
use crate::mappers::vpc::{VpcInput, VpcOutput};
use crate::mappers::vpc_endpoint::{VpcEndpointInput, VpcEndpointOutput};
use carina_core::error::Result;

/// Networking family: VPC through VPC endpoints, plus the cross-resource
/// association verbs that have no domain entity of their own.
pub trait NetworkingProvider: Send + Sync {
    fn create_vpc(&self, input: &VpcInput) -> Result<VpcOutput>;
    fn get_vpc(&self, id: &str) -> Result<VpcOutput>;
    fn delete_vpc(&self, id: &str) -> Result<()>;

    fn create_subnet(&self, input: &SubnetInput) -> Result<SubnetOutput>;
    fn get_subnet(&self, id: &str) -> Result<SubnetOutput>;
    fn delete_subnet(&self, id: &str) -> Result<()>;

    fn create_internet_gateway(&self, input: &InternetGatewayInput) -> Result<InternetGatewayOutput>;
    fn attach_internet_gateway(&self, igw_id: &str, vpc_id: &str) -> Result<()>;
    fn detach_internet_gateway(&self, igw_id: &str, vpc_id: &str) -> Result<()>;

    fn create_nat_gateway(&self, input: &NatGatewayInput) -> Result<NatGatewayOutput>;
    fn delete_nat_gateway(&self, id: &str) -> Result<()>;

    fn create_route_table(&self, input: &RouteTableInput) -> Result<RouteTableOutput>;
    fn associate_route_table(&self, route_table_id: &str, subnet_id: &str) -> Result<()>;
    fn disassociate_route_table(&self, route_table_id: &str, subnet_id: &str) -> Result<()>;

    fn create_security_group(&self, input: &SecurityGroupInput) -> Result<SecurityGroupOutput>;
    fn get_security_group(&self, id: &str) -> Result<SecurityGroupOutput>;
    fn delete_security_group(&self, id: &str) -> Result<()>;

    fn create_network_acl(&self, input: &NetworkAclInput) -> Result<NetworkAclOutput>;
    fn associate_network_acl(&self, acl_id: &str, subnet_id: &str) -> Result<()>;

    fn allocate_elastic_ip(&self, input: &ElasticIpInput) -> Result<ElasticIpOutput>;
    fn release_elastic_ip(&self, id: &str) -> Result<()>;

    fn create_network_interface(&self, input: &NetworkInterfaceInput) -> Result<NetworkInterfaceOutput>;
    fn delete_network_interface(&self, id: &str) -> Result<()>;

    fn create_vpc_endpoint(&self, input: &VpcEndpointInput) -> Result<VpcEndpointOutput>;
    fn delete_vpc_endpoint(&self, id: &str) -> Result<()>;
}

/// IAM family.
pub trait IamProvider: Send + Sync {
    fn create_policy(&self, input: &PolicyInput) -> Result<PolicyOutput>;
    fn get_policy(&self, arn: &str) -> Result<PolicyOutput>;
    fn delete_policy(&self, arn: &str) -> Result<()>;

    fn create_role(&self, input: &RoleInput) -> Result<RoleOutput>;
    fn get_role(&self, name: &str) -> Result<RoleOutput>;
    fn delete_role(&self, name: &str) -> Result<()>;
    fn attach_role_policy(&self, role_name: &str, policy_arn: &str) -> Result<()>;
    fn detach_role_policy(&self, role_name: &str, policy_arn: &str) -> Result<()>;

    fn create_user(&self, input: &UserInput) -> Result<UserOutput>;
    fn get_user(&self, name: &str) -> Result<UserOutput>;
    fn delete_user(&self, name: &str) -> Result<()>;

    fn create_group(&self, input: &GroupInput) -> Result<GroupOutput>;
    fn delete_group(&self, name: &str) -> Result<()>;

    fn create_instance_profile(&self, input: &InstanceProfileInput) -> Result<InstanceProfileOutput>;
    fn add_role_to_instance_profile(&self, profile_name: &str, role_name: &str) -> Result<()>;
    fn remove_role_from_instance_profile(&self, profile_name: &str, role_name: &str) -> Result<()>;
}

/// Compute family.
pub trait ComputeProvider: Send + Sync {
    fn run_instance(&self, input: &Ec2InstanceInput) -> Result<Ec2InstanceOutput>;
    fn terminate_instance(&self, id: &str) -> Result<()>;

    fn create_auto_scaling_group(&self, input: &AutoScalingGroupInput) -> Result<AutoScalingGroupOutput>;
    fn delete_auto_scaling_group(&self, name: &str) -> Result<()>;

    fn create_load_balancer(&self, input: &LoadBalancerInput) -> Result<LoadBalancerOutput>;
    fn delete_load_balancer(&self, arn: &str) -> Result<()>;
}

/// Storage/serverless family.
pub trait StorageProvider: Send + Sync {
    fn create_bucket(&self, input: &S3BucketInput) -> Result<S3BucketOutput>;
    fn delete_bucket(&self, name: &str) -> Result<()>;

    fn create_function(&self, input: &LambdaFunctionInput) -> Result<LambdaFunctionOutput>;
    fn get_function(&self, name: &str) -> Result<LambdaFunctionOutput>;
    fn delete_function(&self, name: &str) -> Result<()>;
}

/// Aggregate contract a concrete provider variant (in-memory, SDK-backed)
/// implements in full.
pub trait Provider: NetworkingProvider + IamProvider + ComputeProvider + StorageProvider {}

impl<T: NetworkingProvider + IamProvider + ComputeProvider + StorageProvider> Provider for T {}
