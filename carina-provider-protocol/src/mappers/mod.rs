//! Provider-shaped input/output models and the three mapping functions
//! per kind (`from_domain`, `to_domain`, `to_domain_from_output`), one
//! module per domain entity family, mirroring `carina_core::domain`.

pub mod compute;
pub mod elastic_ip;
pub mod gateway;
pub mod iam;
pub mod network_acl;
pub mod network_interface;
pub mod route_table;
pub mod security_group;
pub mod storage;
pub mod subnet;
pub mod vpc;
pub mod vpc_endpoint;
