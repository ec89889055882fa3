//! Shared AWS wire-format types: ARNs, IAM name/path rules, and the region catalog.
//!
//! These are used by both the domain layer (structural validation of
//! user-supplied ARNs and IAM identifiers) and the provider layer
//! (synthesizing ARNs for created resources), so they live in a leaf
//! crate neither depends on the other to reach.

mod arn;
mod iam_name;
mod region;

pub use arn::{Arn, ArnError};
pub use iam_name::{normalize_iam_path, validate_iam_name, validate_iam_path};
pub use region::{KNOWN_REGIONS, STANDARD_TEST_ACCOUNT_ID, is_known_region};
