//! The sum-typed stand-in for inheritance-based dispatch: one
//! value that can carry any domain entity, so a single registry can
//! key off a string kind instead of every caller needing to know the
//! concrete Rust type in advance.

use carina_core::domain::compute::{AutoScalingGroup, Ec2Instance, LoadBalancer};
use carina_core::domain::elastic_ip::ElasticIp;
use carina_core::domain::gateway::{InternetGateway, NatGateway};
use carina_core::domain::iam::{Group, InstanceProfile, Policy, Role, User};
use carina_core::domain::network_acl::NetworkAcl;
use carina_core::domain::network_interface::NetworkInterface;
use carina_core::domain::route_table::RouteTable;
use carina_core::domain::security_group::SecurityGroup;
use carina_core::domain::storage::{LambdaFunction, S3Bucket};
use carina_core::domain::subnet::Subnet;
use carina_core::domain::vpc::Vpc;
use carina_core::domain::vpc_endpoint::VpcEndpoint;
use carina_core::domain::DomainEntity;

/// Any recorded resource, keyed for IaC emission by [`DomainEntity::kind`].
#[derive(Debug, Clone)]
pub enum AnyResource {
    Vpc(Vpc),
    Subnet(Subnet),
    InternetGateway(InternetGateway),
    NatGateway(NatGateway),
    RouteTable(RouteTable),
    SecurityGroup(SecurityGroup),
    NetworkAcl(NetworkAcl),
    ElasticIp(ElasticIp),
    NetworkInterface(NetworkInterface),
    VpcEndpoint(VpcEndpoint),
    IamPolicy(Policy),
    IamRole(Role),
    IamUser(User),
    IamGroup(Group),
    IamInstanceProfile(InstanceProfile),
    Ec2Instance(Ec2Instance),
    AutoScalingGroup(AutoScalingGroup),
    LoadBalancer(LoadBalancer),
    S3Bucket(S3Bucket),
    LambdaFunction(LambdaFunction),
}

macro_rules! delegate {
    ($self:expr, $method:ident $(, $arg:expr)*) => {
        match $self {
            AnyResource::Vpc(r) => r.$method($($arg),*),
            AnyResource::Subnet(r) => r.$method($($arg),*),
            AnyResource::InternetGateway(r) => r.$method($($arg),*),
            AnyResource::NatGateway(r) => r.$method($($arg),*),
            AnyResource::RouteTable(r) => r.$method($($arg),*),
            AnyResource::SecurityGroup(r) => r.$method($($arg),*),
            AnyResource::NetworkAcl(r) => r.$method($($arg),*),
            AnyResource::ElasticIp(r) => r.$method($($arg),*),
            AnyResource::NetworkInterface(r) => r.$method($($arg),*),
            AnyResource::VpcEndpoint(r) => r.$method($($arg),*),
            AnyResource::IamPolicy(r) => r.$method($($arg),*),
            AnyResource::IamRole(r) => r.$method($($arg),*),
            AnyResource::IamUser(r) => r.$method($($arg),*),
            AnyResource::IamGroup(r) => r.$method($($arg),*),
            AnyResource::IamInstanceProfile(r) => r.$method($($arg),*),
            AnyResource::Ec2Instance(r) => r.$method($($arg),*),
            AnyResource::AutoScalingGroup(r) => r.$method($($arg),*),
            AnyResource::LoadBalancer(r) => r.$method($($arg),*),
            AnyResource::S3Bucket(r) => r.$method($($arg),*),
            AnyResource::LambdaFunction(r) => r.$method($($arg),*),
        }
    };
}

impl AnyResource {
    pub fn kind(&self) -> &'static str {
        delegate!(self, kind)
    }

    pub fn name(&self) -> &str {
        delegate!(self, name)
    }

    pub fn id(&self) -> Option<&str> {
        delegate!(self, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_delegates_to_the_wrapped_entity() {
        let resource = AnyResource::Vpc(Vpc::new("prod", "us-east-1", "10.0.0.0/16"));
        assert_eq!(resource.kind(), "VPC");
        assert_eq!(resource.name(), "prod");
    }
}
