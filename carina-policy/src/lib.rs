//! External-facing metadata services for Carina: a static catalog of
//! IAM policy documents loaded from disk, and a registry of IAM
//! resource schemas consulted by tooling (editors, docs generators)
//! rather than by the core adapter.

pub mod policy;
pub mod schema;

pub use policy::{PolicyCatalog, PolicyDefinition, PolicyLoadError};
pub use schema::{AttributeSchema, AttributeType, ResourceSchema, get_resource_schema, list_resource_schemas};
