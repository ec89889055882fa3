//! `StorageProvider` backed by [`crate::state::MockState`]. S3 and
//! Lambda ARNs don't follow the generic `kind/name` shape the other
//! services use, so they're built by hand rather than through
//! [`carina_aws_types::Arn::build`].

use carina_core::error::{Error, Result};
use carina_provider_protocol::Envelope;
use carina_provider_protocol::mappers::storage::{
    LambdaFunctionInput, LambdaFunctionOutput, S3BucketInput, S3BucketOutput,
};
use carina_provider_protocol::provider::StorageProvider;

use crate::{MockProvider, clock};

impl StorageProvider for MockProvider {
    fn create_bucket(&self, input: &S3BucketInput) -> Result<S3BucketOutput> {
        let arn = format!("arn:aws:s3:::{}", input.bucket);
        let output = S3BucketOutput {
            envelope: Envelope::new(input.bucket.clone(), arn, "available", clock::now()),
        };
        self.state.store.lock().unwrap().buckets.insert(input.bucket.clone(), output.clone());
        Ok(output)
    }

    fn delete_bucket(&self, name: &str) -> Result<()> {
        self.state
            .store
            .lock()
            .unwrap()
            .buckets
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("bucket {name}")))
    }

    fn create_function(&self, input: &LambdaFunctionInput) -> Result<LambdaFunctionOutput> {
        let arn = format!(
            "arn:aws:lambda:{}:{}:function:{}",
            self.state.region, self.state.account_id, input.function_name
        );
        let output = LambdaFunctionOutput {
            envelope: Envelope::new(input.function_name.clone(), arn, "active", clock::now()),
            version: "1".to_string(),
        };
        self.state
            .store
            .lock()
            .unwrap()
            .functions
            .insert(input.function_name.clone(), output.clone());
        Ok(output)
    }

    fn get_function(&self, name: &str) -> Result<LambdaFunctionOutput> {
        self.state
            .store
            .lock()
            .unwrap()
            .functions
            .get(name)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("function {name}")))
    }

    fn delete_function(&self, name: &str) -> Result<()> {
        self.state
            .store
            .lock()
            .unwrap()
            .functions
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("function {name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carina_core::domain::Tags;

    #[test]
    fn bucket_arn_has_no_region_or_account_segment() {
        let p = MockProvider::new();
        let output = p
            .create_bucket(&S3BucketInput {
                bucket: "my-app-data".to_string(),
                region: "us-east-1".to_string(),
                versioning_enabled: false,
                tags: Tags::new(),
            })
            .unwrap();
        assert_eq!(output.envelope.arn, "arn:aws:s3:::my-app-data");
    }

    #[test]
    fn function_round_trips_through_get() {
        let p = MockProvider::new();
        p.create_function(&LambdaFunctionInput {
            function_name: "my-fn".to_string(),
            runtime: "provided.al2".to_string(),
            handler: "bootstrap".to_string(),
            role: "arn:aws:iam::123456789012:role/lambda-exec".to_string(),
            memory_size: 128,
            timeout: 3,
            tags: Tags::new(),
        })
        .unwrap();
        let fetched = p.get_function("my-fn").unwrap();
        assert_eq!(fetched.version, "1");
    }
}
