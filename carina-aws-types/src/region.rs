//! Static catalog of AWS regions known to the modeler.

/// The account id used by the in-memory provider and in all of this
/// crate's documented examples.
pub const STANDARD_TEST_ACCOUNT_ID: &str = "123456789012";

/// Regions the domain and provider layers recognize. Not exhaustive of
/// every real AWS region; sufficient for validation and ARN synthesis.
pub const KNOWN_REGIONS: &[&str] = &[
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "eu-west-1",
    "eu-west-2",
    "eu-central-1",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-south-1",
    "sa-east-1",
    "ca-central-1",
];

pub fn is_known_region(region: &str) -> bool {
    KNOWN_REGIONS.contains(&region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_region() {
        assert!(is_known_region("us-east-1"));
    }

    #[test]
    fn rejects_unknown_region() {
        assert!(!is_known_region("mars-east-1"));
    }
}
