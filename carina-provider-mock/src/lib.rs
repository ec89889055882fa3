//! Deterministic in-memory implementation of [`carina_provider_protocol::provider::Provider`].
//!
//! Running the same model against a fresh [`MockProvider`] twice
//! produces identical ids, ARNs, and timestamps: ids are derived from
//! `sha256(kind:name:sequence)`, timestamps are a fixed constant. This
//! makes it suitable as the default backend for adapter and emitter
//! tests without a real AWS account.

mod clock;
mod compute;
mod ids;
mod iam;
mod networking;
mod state;
mod storage;

use state::MockState;

pub struct MockProvider {
    state: MockState,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            state: MockState::default(),
        }
    }

    pub fn with_account(account_id: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            state: MockState::new(account_id, region),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carina_core::domain::Tags;
    use carina_provider_protocol::mappers::vpc::VpcInput;
    use carina_provider_protocol::provider::{NetworkingProvider, Provider};

    fn assert_is_provider<T: Provider>(_: &T) {}

    #[test]
    fn mock_provider_implements_the_full_provider_trait() {
        let provider = MockProvider::new();
        assert_is_provider(&provider);
    }

    #[test]
    fn two_fresh_providers_derive_the_same_id_for_the_same_input() {
        let a = MockProvider::new();
        let b = MockProvider::new();
        let input = VpcInput {
            name: "prod".to_string(),
            region: "us-east-1".to_string(),
            cidr_block: "10.0.0.0/16".to_string(),
            enable_dns_support: true,
            enable_dns_hostnames: true,
            instance_tenancy: "default".to_string(),
            tags: Tags::new(),
        };
        let out_a = a.create_vpc(&input).unwrap();
        let out_b = b.create_vpc(&input).unwrap();
        assert_eq!(out_a.envelope.id, out_b.envelope.id);
        assert_eq!(out_a.envelope.created_at, out_b.envelope.created_at);
    }
}
