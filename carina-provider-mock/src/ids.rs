//! Deterministic identifier and ARN synthesis.
//!
//! Real AWS ids are opaque; this provider derives them from the
//! resource kind and name alone, so that two creates of the same input
//! (on one provider or on a fresh one) always produce the same id.

use sha2::{Digest, Sha256};

/// Hex-encodes the first 8 bytes of `sha256(kind:name)`.
fn fingerprint(kind: &str, name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(kind.as_bytes());
    hasher.update(b":");
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();
    digest[..8].iter().map(|b| format!("{b:02x}")).collect()
}

/// Builds an id of the shape AWS uses for most EC2-family resources:
/// `<prefix>-<16 hex chars>`.
pub fn hyphenated(prefix: &str, kind: &str, name: &str) -> String {
    format!("{prefix}-{}", fingerprint(kind, name))
}

/// Builds an id of the shape AWS uses for IAM principals: a type
/// prefix followed by 16 uppercase alphanumeric characters, no hyphen.
pub fn iam_unique_id(prefix: &str, kind: &str, name: &str) -> String {
    let hex = fingerprint(kind, name);
    format!("{prefix}{}", hex.to_uppercase())
}

/// Derives a `u64` from an already-synthesized id, for provider-only
/// cosmetic fields (a private IP octet, a DNS label) that want some
/// per-resource variation without reintroducing a creation-order
/// counter. Deterministic in `id` alone.
pub fn numeric_suffix(id: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(id.as_bytes());
    let digest = hasher.finalize();
    u64::from_be_bytes(digest[..8].try_into().unwrap())
}
