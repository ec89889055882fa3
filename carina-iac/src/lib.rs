//! Terraform emitter for Carina: a block model, a per-kind mapper
//! registry, and the `AnyResource` sum type that lets the registry
//! dispatch on a domain entity's `kind()` without the caller knowing
//! its concrete Rust type.

pub mod block;
pub mod mappers;
pub mod registry;
pub mod resource;
pub mod value;

pub use block::{Block, BlockType};
pub use registry::{registered_kinds, to_terraform_blocks};
pub use resource::AnyResource;
pub use value::Value;
