//! Core library for Carina, a cloud-agnostic AWS architecture modeler.
//!
//! This crate is the cloud-agnostic domain model: entities and their
//! structural invariants. It has no knowledge of any particular cloud
//! provider's wire format — that lives in `carina-provider-protocol` —
//! nor of Terraform — that lives in `carina-iac`.

pub mod cidr;
pub mod domain;
pub mod error;

pub use error::{Error, ErrorKind, Result};
