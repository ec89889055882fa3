use carina_core::Result;
use carina_core::domain::storage::{LambdaFunction, S3Bucket};

use crate::block::Block;
use crate::resource::AnyResource;
use crate::value::Value;

use super::tf_label;

pub fn s3_bucket(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::S3Bucket(bucket) = resource else {
        unreachable!("registry dispatches S3Bucket only to this mapper")
    };
    let mut blocks = vec![
        Block::resource("aws_s3_bucket", tf_label(&bucket.name))
            .with_attribute("bucket", Value::string(&bucket.name))
            .with_optional_attribute(
                "tags",
                (!bucket.tags.is_empty()).then(|| {
                    Value::Map(bucket.tags.iter().map(|(k, v)| (k.clone(), Value::string(v))).collect())
                }),
            ),
    ];
    blocks.push(
        Block::resource("aws_s3_bucket_versioning", tf_label(&bucket.name))
            .with_attribute("bucket", Value::expr(format!("aws_s3_bucket.{}.id", tf_label(&bucket.name))))
            .with_nested(Block::nested("versioning_configuration").with_attribute(
                "status",
                Value::string(if bucket.versioning_enabled { "Enabled" } else { "Suspended" }),
            )),
    );
    Ok(blocks)
}

pub fn lambda_function(resource: &AnyResource) -> Result<Vec<Block>> {
    let AnyResource::LambdaFunction(function) = resource else {
        unreachable!("registry dispatches LambdaFunction only to this mapper")
    };
    let block = Block::resource("aws_lambda_function", tf_label(&function.name))
        .with_attribute("function_name", Value::string(&function.name))
        .with_attribute("handler", Value::string(&function.handler))
        .with_attribute("runtime", Value::string(&function.runtime))
        .with_attribute("role", Value::string(&function.role_arn))
        .with_attribute("memory_size", Value::Number(function.memory_size_mb as f64))
        .with_attribute("timeout", Value::Number(function.timeout_seconds as f64))
        .with_optional_attribute(
            "tags",
            (!function.tags.is_empty()).then(|| {
                Value::Map(function.tags.iter().map(|(k, v)| (k.clone(), Value::string(v))).collect())
            }),
        );
    Ok(vec![block])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s3_bucket_mapper_emits_bucket_and_versioning_blocks() {
        let bucket = S3Bucket::new("my-app-data", "us-east-1");
        let resource = AnyResource::S3Bucket(bucket);
        let blocks = s3_bucket(&resource).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].labels[0], "aws_s3_bucket_versioning");
    }

    #[test]
    fn s3_bucket_versioning_status_reflects_domain_flag() {
        let mut bucket = S3Bucket::new("my-app-data", "us-east-1");
        bucket.versioning_enabled = true;
        let resource = AnyResource::S3Bucket(bucket);
        let blocks = s3_bucket(&resource).unwrap();
        let versioning = &blocks[1].blocks[0];
        assert!(versioning.attributes.iter().any(|(k, v)| k == "status" && *v == Value::string("Enabled")));
    }

    #[test]
    fn lambda_function_mapper_uses_role_attribute() {
        let function = LambdaFunction::new(
            "my-fn",
            "provided.al2",
            "bootstrap",
            "arn:aws:iam::123456789012:role/lambda-exec",
        );
        let resource = AnyResource::LambdaFunction(function);
        let blocks = lambda_function(&resource).unwrap();
        assert!(blocks[0].attributes.iter().any(|(k, _)| k == "role"));
    }
}
