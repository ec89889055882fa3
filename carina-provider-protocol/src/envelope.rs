//! The common part of every provider output: identifier, ARN, lifecycle
//! state, and creation time. Per-kind output structs embed this plus
//! whatever provider-only structured fields that kind carries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub id: String,
    pub arn: String,
    pub state: String,
    /// Unix seconds. The in-memory provider returns a fixed value so test
    /// fixtures are reproducible; an SDK-backed provider returns real ones.
    pub created_at: i64,
}

impl Envelope {
    pub fn new(id: impl Into<String>, arn: impl Into<String>, state: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            arn: arn.into(),
            state: state.into(),
            created_at,
        }
    }

    /// Lifts the ARN, treating an empty string as absent.
    pub fn lifted_arn(&self) -> Option<String> {
        if self.arn.is_empty() {
            None
        } else {
            Some(self.arn.clone())
        }
    }
}

/// An empty IAM path string normalizes to the root path on lift.
pub fn lift_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_arn_lifts_to_none() {
        let env = Envelope::new("vpc-1", "", "available", 0);
        assert_eq!(env.lifted_arn(), None);
    }

    #[test]
    fn non_empty_arn_lifts_to_some() {
        let env = Envelope::new("vpc-1", "arn:aws:ec2:us-east-1:123456789012:vpc/vpc-1", "available", 0);
        assert_eq!(
            env.lifted_arn(),
            Some("arn:aws:ec2:us-east-1:123456789012:vpc/vpc-1".to_string())
        );
    }

    #[test]
    fn empty_path_lifts_to_root() {
        assert_eq!(lift_path(""), "/");
    }

    #[test]
    fn non_empty_path_is_unchanged() {
        assert_eq!(lift_path("/service/"), "/service/");
    }
}
