//! Provider-shaped request/response models, the mapper functions that
//! translate them to and from the cloud-agnostic domain, the
//! provider service contract, and the adapter that sequences them.

pub mod adapter;
pub mod cancellation;
pub mod envelope;
pub mod mappers;
pub mod provider;
pub mod route_target;

pub use cancellation::CancellationToken;
pub use envelope::Envelope;
