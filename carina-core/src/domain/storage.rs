//! Storage/serverless family: S3 buckets and Lambda functions.

use crate::domain::{DomainEntity, Tags};
use crate::error::{Error, Result};
use carina_aws_types::Arn;

#[derive(Debug, Clone, PartialEq)]
pub struct S3Bucket {
    pub name: String,
    pub region: String,
    pub versioning_enabled: bool,
    pub tags: Tags,
    pub arn: Option<String>,
}

impl S3Bucket {
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            versioning_enabled: false,
            tags: Tags::new(),
            arn: None,
        }
    }
}

/// S3 bucket names: 3-63 characters, lowercase letters/digits/hyphens/dots,
/// must start and end with a letter or digit, and must not be formatted
/// as an IPv4 address.
fn is_valid_bucket_name(name: &str) -> bool {
    let len = name.len();
    if !(3..=63).contains(&len) {
        return false;
    }
    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.');
    if !valid_chars {
        return false;
    }
    let first = name.chars().next().unwrap();
    let last = name.chars().next_back().unwrap();
    if !(first.is_ascii_alphanumeric() && last.is_ascii_alphanumeric()) {
        return false;
    }
    if name.parse::<std::net::Ipv4Addr>().is_ok() {
        return false;
    }
    true
}

impl DomainEntity for S3Bucket {
    fn kind(&self) -> &'static str {
        "S3Bucket"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> Option<&str> {
        None
    }

    fn vpc_id(&self) -> Option<&str> {
        None
    }

    fn validate(&self) -> Result<()> {
        if !is_valid_bucket_name(&self.name) {
            return Err(Error::domain_validation(
                "s3 bucket name must be 3-63 lowercase alphanumeric/hyphen/dot characters, not formatted as an IP address",
            ));
        }
        if self.region.is_empty() {
            return Err(Error::domain_validation("s3 bucket region must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LambdaFunction {
    pub name: String,
    pub runtime: String,
    pub handler: String,
    pub role_arn: String,
    pub memory_size_mb: u32,
    pub timeout_seconds: u32,
    pub tags: Tags,
    pub arn: Option<String>,
}

impl LambdaFunction {
    pub fn new(
        name: impl Into<String>,
        runtime: impl Into<String>,
        handler: impl Into<String>,
        role_arn: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            runtime: runtime.into(),
            handler: handler.into(),
            role_arn: role_arn.into(),
            memory_size_mb: 128,
            timeout_seconds: 3,
            tags: Tags::new(),
            arn: None,
        }
    }
}

impl DomainEntity for LambdaFunction {
    fn kind(&self) -> &'static str {
        "LambdaFunction"
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> Option<&str> {
        None
    }

    fn vpc_id(&self) -> Option<&str> {
        None
    }

    fn validate(&self) -> Result<()> {
        if self.name.is_empty() || self.name.len() > 64 {
            return Err(Error::domain_validation(
                "lambda function name must be 1-64 characters",
            ));
        }
        if self.runtime.is_empty() {
            return Err(Error::domain_validation(
                "lambda function runtime must not be empty",
            ));
        }
        if self.handler.is_empty() {
            return Err(Error::domain_validation(
                "lambda function handler must not be empty",
            ));
        }
        if !Arn::is_well_formed_iam_arn(&self.role_arn) {
            return Err(Error::domain_validation(
                "lambda function roleArn must be a well-formed iam arn",
            ));
        }
        if self.memory_size_mb < 128 || self.memory_size_mb > 10240 {
            return Err(Error::domain_validation(
                "lambda function memorySize must be between 128 and 10240 mb",
            ));
        }
        if self.timeout_seconds == 0 || self.timeout_seconds > 900 {
            return Err(Error::domain_validation(
                "lambda function timeout must be between 1 and 900 seconds",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_bucket_passes() {
        let bucket = S3Bucket::new("my-app-data", "us-east-1");
        assert!(bucket.validate().is_ok());
    }

    #[test]
    fn bucket_name_too_short_fails() {
        let bucket = S3Bucket::new("ab", "us-east-1");
        assert!(bucket.validate().is_err());
    }

    #[test]
    fn bucket_name_uppercase_fails() {
        let bucket = S3Bucket::new("My-Bucket", "us-east-1");
        assert!(bucket.validate().is_err());
    }

    #[test]
    fn bucket_name_as_ip_fails() {
        let bucket = S3Bucket::new("192.168.1.1", "us-east-1");
        assert!(bucket.validate().is_err());
    }

    #[test]
    fn valid_lambda_function_passes() {
        let function = LambdaFunction::new(
            "my-fn",
            "provided.al2",
            "bootstrap",
            "arn:aws:iam::123456789012:role/lambda-exec",
        );
        assert!(function.validate().is_ok());
    }

    #[test]
    fn lambda_function_bad_role_arn_fails() {
        let function = LambdaFunction::new("my-fn", "provided.al2", "bootstrap", "not-an-arn");
        assert!(function.validate().is_err());
    }

    #[test]
    fn lambda_function_memory_out_of_range_fails() {
        let mut function = LambdaFunction::new(
            "my-fn",
            "provided.al2",
            "bootstrap",
            "arn:aws:iam::123456789012:role/lambda-exec",
        );
        function.memory_size_mb = 64;
        assert!(function.validate().is_err());
    }
}
