//! ARN parsing and synthesis.
//!
//! Shape: `arn:<partition>:<service>:<region>:<account-id>:<resource>`
//! `region` is empty for global services (e.g. IAM); `resource` carries
//! the resource type, optional path, and name/id, joined with `/`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArnError {
    #[error("arn must have 6 colon-delimited segments, got {0}")]
    WrongSegmentCount(usize),
    #[error("arn must start with 'arn', got '{0}'")]
    BadPrefix(String),
    #[error("arn partition must not be empty")]
    EmptyPartition,
    #[error("arn service must not be empty")]
    EmptyService,
    #[error("arn resource must not be empty")]
    EmptyResource,
}

/// A parsed Amazon Resource Name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Arn {
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account_id: String,
    pub resource: String,
}

impl Arn {
    /// Builds a well-formed ARN string.
    ///
    /// `region` may be empty for global services (e.g. IAM); pass an
    /// empty `path` to omit the path segment entirely.
    pub fn build(
        service: &str,
        region: &str,
        account_id: &str,
        kind: &str,
        path: &str,
        name: &str,
    ) -> String {
        let path = path.trim_matches('/');
        let resource = if path.is_empty() {
            format!("{kind}/{name}")
        } else {
            format!("{kind}/{path}/{name}")
        };
        format!("arn:aws:{service}:{region}:{account_id}:{resource}")
    }

    /// Parses a string into its five ARN segments, validating well-formedness
    /// but not the meaning of any individual segment.
    pub fn parse(s: &str) -> Result<Self, ArnError> {
        let parts: Vec<&str> = s.splitn(6, ':').collect();
        if parts.len() != 6 {
            return Err(ArnError::WrongSegmentCount(parts.len()));
        }
        if parts[0] != "arn" {
            return Err(ArnError::BadPrefix(parts[0].to_string()));
        }
        let partition = parts[1];
        let service = parts[2];
        let region = parts[3];
        let account_id = parts[4];
        let resource = parts[5];

        if partition.is_empty() {
            return Err(ArnError::EmptyPartition);
        }
        if service.is_empty() {
            return Err(ArnError::EmptyService);
        }
        if resource.is_empty() {
            return Err(ArnError::EmptyResource);
        }

        Ok(Self {
            partition: partition.to_string(),
            service: service.to_string(),
            region: region.to_string(),
            account_id: account_id.to_string(),
            resource: resource.to_string(),
        })
    }

    /// Returns true if this is a well-formed ARN for the IAM service.
    pub fn is_well_formed_iam_arn(s: &str) -> bool {
        match Self::parse(s) {
            Ok(arn) => arn.service == "iam",
            Err(_) => false,
        }
    }

    pub fn is_global(&self) -> bool {
        self.region.is_empty()
    }
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}",
            self.partition, self.service, self.region, self.account_id, self.resource
        )
    }
}
