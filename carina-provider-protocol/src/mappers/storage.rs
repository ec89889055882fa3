use crate::envelope::Envelope;
use carina_core::domain::Tags;
use carina_core::domain::storage::{LambdaFunction, S3Bucket};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3BucketInput {
    pub bucket: String,
    pub region: String,
    pub versioning_enabled: bool,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct S3BucketOutput {
    pub envelope: Envelope,
}

pub fn bucket_from_domain(bucket: &S3Bucket) -> S3BucketInput {
    S3BucketInput {
        bucket: bucket.name.clone(),
        region: bucket.region.clone(),
        versioning_enabled: bucket.versioning_enabled,
        tags: carina_core::domain::tags::with_name_tag(&bucket.tags, &bucket.name),
    }
}

pub fn bucket_to_domain_from_output(input: &S3BucketInput, output: &S3BucketOutput) -> S3Bucket {
    S3Bucket {
        name: input.bucket.clone(),
        region: input.region.clone(),
        versioning_enabled: input.versioning_enabled,
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambdaFunctionInput {
    pub function_name: String,
    pub runtime: String,
    pub handler: String,
    pub role: String,
    pub memory_size: u32,
    pub timeout: u32,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambdaFunctionOutput {
    pub envelope: Envelope,
    pub version: String,
}

pub fn lambda_from_domain(function: &LambdaFunction) -> LambdaFunctionInput {
    LambdaFunctionInput {
        function_name: function.name.clone(),
        runtime: function.runtime.clone(),
        handler: function.handler.clone(),
        role: function.role_arn.clone(),
        memory_size: function.memory_size_mb,
        timeout: function.timeout_seconds,
        tags: carina_core::domain::tags::with_name_tag(&function.tags, &function.name),
    }
}

pub fn lambda_to_domain_from_output(
    input: &LambdaFunctionInput,
    output: &LambdaFunctionOutput,
) -> LambdaFunction {
    LambdaFunction {
        name: input.function_name.clone(),
        runtime: input.runtime.clone(),
        handler: input.handler.clone(),
        role_arn: input.role.clone(),
        memory_size_mb: input.memory_size,
        timeout_seconds: input.timeout,
        tags: input.tags.clone(),
        arn: output.envelope.lifted_arn(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_renames_name_to_bucket() {
        let bucket = S3Bucket::new("my-app-data", "us-east-1");
        let input = bucket_from_domain(&bucket);
        assert_eq!(input.bucket, "my-app-data");
    }

    #[test]
    fn lambda_renames_role_arn_to_role() {
        let function = LambdaFunction::new(
            "my-fn",
            "provided.al2",
            "bootstrap",
            "arn:aws:iam::123456789012:role/lambda-exec",
        );
        let input = lambda_from_domain(&function);
        assert_eq!(input.role, "arn:aws:iam::123456789012:role/lambda-exec");
    }
}
