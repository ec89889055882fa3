//! The uniform service facade: domain validate → map → provider
//! validate → provider call → map output back to a domain entity. Every
//! operation takes a [`CancellationToken`] and observes it at each phase
//! boundary. The adapter holds no state beyond a reference to the
//! provider implementation; it is safe to share across threads.

use crate::cancellation::CancellationToken;
use crate::mappers::{
    compute, elastic_ip, gateway, iam, network_acl, network_interface, route_table,
    security_group, storage, subnet, vpc, vpc_endpoint,
};
use crate::provider::{ComputeProvider, IamProvider, NetworkingProvider, StorageProvider};
use carina_core::domain::compute::{AutoScalingGroup, Ec2Instance, LoadBalancer};
use carina_core::domain::elastic_ip::ElasticIp;
use carina_core::domain::gateway::{self as gateway_domain, InternetGateway, NatGateway};
use carina_core::domain::iam::{Group, InstanceProfile, Policy, Role, User};
use carina_core::domain::network_acl::NetworkAcl;
use carina_core::domain::network_interface::NetworkInterface;
use carina_core::domain::route_table::RouteTable;
use carina_core::domain::security_group::SecurityGroup;
use carina_core::domain::storage::{LambdaFunction, S3Bucket};
use carina_core::domain::subnet::{self as subnet_domain, Subnet};
use carina_core::domain::vpc::Vpc;
use carina_core::domain::vpc_endpoint::VpcEndpoint;
use carina_core::domain::DomainEntity;
use carina_core::error::Result;
use std::sync::Arc;

/// Adapter over the networking resource family.
pub struct NetworkingAdapter {
    provider: Arc<dyn NetworkingProvider>,
}

impl NetworkingAdapter {
    pub fn new(provider: Arc<dyn NetworkingProvider>) -> Self {
        Self { provider }
    }

    pub fn create_vpc(&self, entity: &Vpc, token: &CancellationToken) -> Result<Vpc> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = vpc::from_domain(entity);
        input.validate()?;
        token.check()?;
        let output = self.provider.create_vpc(&input)?;
        Ok(vpc::to_domain_from_output(&input, &output))
    }

    /// Checks the cross-entity CIDR containment invariant before handing
    /// off to the four-phase sequence.
    pub fn create_subnet(&self, entity: &Subnet, parent_vpc: &Vpc, token: &CancellationToken) -> Result<Subnet> {
        token.check()?;
        entity.validate()?;
        subnet_domain::check_within_parent_vpc(entity, parent_vpc)?;
        token.check()?;
        let input = subnet::from_domain(entity);
        input.validate()?;
        token.check()?;
        let output = self.provider.create_subnet(&input)?;
        Ok(subnet::to_domain_from_output(&input, &output))
    }

    pub fn create_internet_gateway(
        &self,
        entity: &InternetGateway,
        token: &CancellationToken,
    ) -> Result<InternetGateway> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = gateway::igw_from_domain(entity);
        token.check()?;
        let output = self.provider.create_internet_gateway(&input)?;
        Ok(gateway::igw_to_domain_from_output(&input, &output))
    }

    pub fn attach_internet_gateway(&self, igw_id: &str, vpc_id: &str, token: &CancellationToken) -> Result<()> {
        token.check()?;
        self.provider.attach_internet_gateway(igw_id, vpc_id)
    }

    /// Checks the NAT-in-public-subnet provider constraint before the
    /// four-phase sequence.
    pub fn create_nat_gateway(
        &self,
        entity: &NatGateway,
        subnet: &Subnet,
        token: &CancellationToken,
    ) -> Result<NatGateway> {
        token.check()?;
        entity.validate()?;
        gateway_domain::check_in_public_subnet(entity, subnet)?;
        token.check()?;
        let input = gateway::nat_from_domain(entity);
        token.check()?;
        let output = self.provider.create_nat_gateway(&input)?;
        Ok(gateway::nat_to_domain_from_output(&input, &output))
    }

    pub fn create_route_table(&self, entity: &RouteTable, token: &CancellationToken) -> Result<RouteTable> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = route_table::from_domain(entity);
        input.validate()?;
        token.check()?;
        let output = self.provider.create_route_table(&input)?;
        route_table::to_domain_from_output(&input, &output)
    }

    pub fn associate_route_table(
        &self,
        route_table_id: &str,
        subnet_id: &str,
        token: &CancellationToken,
    ) -> Result<()> {
        token.check()?;
        self.provider.associate_route_table(route_table_id, subnet_id)
    }

    pub fn create_security_group(
        &self,
        entity: &SecurityGroup,
        token: &CancellationToken,
    ) -> Result<SecurityGroup> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = security_group::from_domain(entity)?;
        input.validate()?;
        token.check()?;
        let output = self.provider.create_security_group(&input)?;
        Ok(security_group::to_domain_from_output(&input, &output))
    }

    pub fn create_network_acl(&self, entity: &NetworkAcl, token: &CancellationToken) -> Result<NetworkAcl> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = network_acl::from_domain(entity);
        token.check()?;
        let output = self.provider.create_network_acl(&input)?;
        Ok(network_acl::to_domain_from_output(&input, &output))
    }

    pub fn associate_network_acl(&self, acl_id: &str, subnet_id: &str, token: &CancellationToken) -> Result<()> {
        token.check()?;
        self.provider.associate_network_acl(acl_id, subnet_id)
    }

    pub fn allocate_elastic_ip(&self, entity: &ElasticIp, token: &CancellationToken) -> Result<ElasticIp> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = elastic_ip::from_domain(entity);
        input.validate()?;
        token.check()?;
        let output = self.provider.allocate_elastic_ip(&input)?;
        Ok(elastic_ip::to_domain_from_output(&input, &entity.region, &output))
    }

    pub fn create_network_interface(
        &self,
        entity: &NetworkInterface,
        token: &CancellationToken,
    ) -> Result<NetworkInterface> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = network_interface::from_domain(entity);
        token.check()?;
        let output = self.provider.create_network_interface(&input)?;
        Ok(network_interface::to_domain_from_output(&input, &output))
    }

    pub fn create_vpc_endpoint(&self, entity: &VpcEndpoint, token: &CancellationToken) -> Result<VpcEndpoint> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = vpc_endpoint::from_domain(entity);
        token.check()?;
        let output = self.provider.create_vpc_endpoint(&input)?;
        Ok(vpc_endpoint::to_domain_from_output(&input, &output))
    }
}

/// Adapter over the IAM resource family.
pub struct IamAdapter {
    provider: Arc<dyn IamProvider>,
}

impl IamAdapter {
    pub fn new(provider: Arc<dyn IamProvider>) -> Self {
        Self { provider }
    }

    pub fn create_policy(&self, entity: &Policy, token: &CancellationToken) -> Result<Policy> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = iam::policy_from_domain(entity);
        token.check()?;
        let output = self.provider.create_policy(&input)?;
        Ok(iam::policy_to_domain_from_output(&input, &output))
    }

    pub fn create_role(&self, entity: &Role, token: &CancellationToken) -> Result<Role> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = iam::role_from_domain(entity);
        token.check()?;
        let output = self.provider.create_role(&input)?;
        Ok(iam::role_to_domain_from_output(&input, &output))
    }

    pub fn attach_role_policy(&self, role_name: &str, policy_arn: &str, token: &CancellationToken) -> Result<()> {
        token.check()?;
        self.provider.attach_role_policy(role_name, policy_arn)
    }

    pub fn create_user(&self, entity: &User, token: &CancellationToken) -> Result<User> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = iam::user_from_domain(entity);
        token.check()?;
        let output = self.provider.create_user(&input)?;
        Ok(iam::user_to_domain_from_output(&input, &output))
    }

    pub fn create_group(&self, entity: &Group, token: &CancellationToken) -> Result<Group> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = iam::group_from_domain(entity);
        token.check()?;
        let output = self.provider.create_group(&input)?;
        Ok(iam::group_to_domain_from_output(&input, &output))
    }

    pub fn create_instance_profile(
        &self,
        entity: &InstanceProfile,
        token: &CancellationToken,
    ) -> Result<InstanceProfile> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = iam::instance_profile_from_domain(entity);
        token.check()?;
        let output = self.provider.create_instance_profile(&input)?;
        Ok(iam::instance_profile_to_domain_from_output(&input, &output))
    }

    pub fn add_role_to_instance_profile(
        &self,
        profile_name: &str,
        role_name: &str,
        token: &CancellationToken,
    ) -> Result<()> {
        token.check()?;
        self.provider.add_role_to_instance_profile(profile_name, role_name)
    }
}

/// Adapter over the compute resource family.
pub struct ComputeAdapter {
    provider: Arc<dyn ComputeProvider>,
}

impl ComputeAdapter {
    pub fn new(provider: Arc<dyn ComputeProvider>) -> Self {
        Self { provider }
    }

    pub fn run_instance(&self, entity: &Ec2Instance, token: &CancellationToken) -> Result<Ec2Instance> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = compute::ec2_from_domain(entity);
        token.check()?;
        let output = self.provider.run_instance(&input)?;
        Ok(compute::ec2_to_domain_from_output(&input, &output))
    }

    pub fn create_auto_scaling_group(
        &self,
        entity: &AutoScalingGroup,
        token: &CancellationToken,
    ) -> Result<AutoScalingGroup> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = compute::asg_from_domain(entity);
        token.check()?;
        let output = self.provider.create_auto_scaling_group(&input)?;
        Ok(compute::asg_to_domain_from_output(&input, &output))
    }

    pub fn create_load_balancer(&self, entity: &LoadBalancer, token: &CancellationToken) -> Result<LoadBalancer> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = compute::alb_from_domain(entity);
        token.check()?;
        let output = self.provider.create_load_balancer(&input)?;
        Ok(compute::alb_to_domain_from_output(&input, &output))
    }
}

/// Adapter over the storage/serverless resource family.
pub struct StorageAdapter {
    provider: Arc<dyn StorageProvider>,
}

impl StorageAdapter {
    pub fn new(provider: Arc<dyn StorageProvider>) -> Self {
        Self { provider }
    }

    pub fn create_bucket(&self, entity: &S3Bucket, token: &CancellationToken) -> Result<S3Bucket> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = storage::bucket_from_domain(entity);
        token.check()?;
        let output = self.provider.create_bucket(&input)?;
        Ok(storage::bucket_to_domain_from_output(&input, &output))
    }

    pub fn create_function(&self, entity: &LambdaFunction, token: &CancellationToken) -> Result<LambdaFunction> {
        token.check()?;
        entity.validate()?;
        token.check()?;
        let input = storage::lambda_from_domain(entity);
        token.check()?;
        let output = self.provider.create_function(&input)?;
        Ok(storage::lambda_to_domain_from_output(&input, &output))
    }
}
