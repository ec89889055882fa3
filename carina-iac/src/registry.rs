//! The process-wide kind → mapper registry. Populated
//! once, lazily, from a fixed table built in source; thereafter only
//! ever read. `HashMap::insert` is last-writer-wins by construction,
//! so re-registering the same kind when the table is rebuilt (as in
//! tests that construct it repeatedly) is deterministic.

use std::collections::HashMap;
use std::sync::OnceLock;

use carina_core::error::{Error, Result};

use crate::block::Block;
use crate::mappers;
use crate::resource::AnyResource;

pub type MapperFn = fn(&AnyResource) -> Result<Vec<Block>>;

fn build_registry() -> HashMap<&'static str, MapperFn> {
    let mut table: HashMap<&'static str, MapperFn> = HashMap::new();
    table.insert("VPC", mappers::networking::vpc as MapperFn);
    table.insert("Subnet", mappers::networking::subnet as MapperFn);
    table.insert("InternetGateway", mappers::networking::internet_gateway as MapperFn);
    table.insert("NATGateway", mappers::networking::nat_gateway as MapperFn);
    table.insert("RouteTable", mappers::networking::route_table as MapperFn);
    table.insert("SecurityGroup", mappers::networking::security_group as MapperFn);
    table.insert("NetworkACL", mappers::networking::network_acl as MapperFn);
    table.insert("ElasticIP", mappers::networking::elastic_ip as MapperFn);
    table.insert("NetworkInterface", mappers::networking::network_interface as MapperFn);
    table.insert("VPCEndpoint", mappers::networking::vpc_endpoint as MapperFn);
    table.insert("IAMPolicy", mappers::iam::policy as MapperFn);
    table.insert("IAMRole", mappers::iam::role as MapperFn);
    table.insert("IAMUser", mappers::iam::user as MapperFn);
    table.insert("IAMGroup", mappers::iam::group as MapperFn);
    table.insert("IAMInstanceProfile", mappers::iam::instance_profile as MapperFn);
    table.insert("EC2Instance", mappers::compute::ec2_instance as MapperFn);
    table.insert("AutoScalingGroup", mappers::compute::auto_scaling_group as MapperFn);
    table.insert("ApplicationLoadBalancer", mappers::compute::load_balancer as MapperFn);
    table.insert("S3Bucket", mappers::storage::s3_bucket as MapperFn);
    table.insert("LambdaFunction", mappers::storage::lambda_function as MapperFn);
    table
}

fn registry() -> &'static HashMap<&'static str, MapperFn> {
    static REGISTRY: OnceLock<HashMap<&'static str, MapperFn>> = OnceLock::new();
    REGISTRY.get_or_init(build_registry)
}

/// Dispatches a resource to its registered mapper and validates the
/// resulting blocks.
pub fn to_terraform_blocks(resource: &AnyResource) -> Result<Vec<Block>> {
    let kind = resource.kind();
    let mapper = registry().get(kind).ok_or_else(|| {
        log::warn!("no terraform mapper registered for kind {kind}");
        Error::emitter_dispatch(format!("unsupported kind {kind}"))
    })?;
    let blocks = mapper(resource)?;
    for block in &blocks {
        block.check_no_duplicate_attributes()?;
    }
    Ok(blocks)
}

/// The set of kinds with a registered mapper, for the registry
/// closedness property: every domain kind should appear here.
pub fn registered_kinds() -> Vec<&'static str> {
    let mut kinds: Vec<&'static str> = registry().keys().copied().collect();
    kinds.sort_unstable();
    kinds
}
