//! Cloud-agnostic domain entities and their structural invariants.
//!
//! Every entity exposes a `validate()` that is purely structural: regex,
//! CIDR parsing, JSON parsing, bounds, enum membership. It never
//! consults another entity or external state. Where an invariant spans
//! two entities (CIDR containment, VPC equality, single-association
//! rules) the check lives as a free function in the owning module and
//! is invoked by the adapter, not by `validate()`.

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
pub mod tags;
pub mod vpc;
pub mod vpc_endpoint;

pub use tags::Tags;

/// Thin capability set every domain entity implements. Stands in for
/// the inheritance-based dispatch a class-based language would use;
/// the IaC registry and cross-resource adapter ops key off `kind()`
/// and `id()`/`name()` rather than downcasting.
pub trait DomainEntity {
    /// Stable kind name used as the IaC registry key (e.g. "VPC", "Subnet").
    fn kind(&self) -> &'static str;
    fn name(&self) -> &str;
    fn id(&self) -> Option<&str>;
    fn vpc_id(&self) -> Option<&str>;
    fn validate(&self) -> crate::error::Result<()>;
}
