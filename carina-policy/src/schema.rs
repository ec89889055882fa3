//! IAM resource metadata schema registry, consulted by tooling (LSP,
//! docs generation) rather than by the core adapter. Populated once
//! from a fixed table, mirroring the IaC mapper registry's
//! `OnceLock`-backed population.

use std::collections::HashMap;
use std::sync::OnceLock;

use carina_core::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
    String,
    Int,
    Bool,
    Enum(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct AttributeSchema {
    pub name: String,
    pub attr_type: AttributeType,
    pub required: bool,
    pub default: Option<String>,
    pub description: Option<String>,
}

impl AttributeSchema {
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            required: false,
            default: None,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct ResourceSchema {
    pub label: String,
    pub inputs: Vec<AttributeSchema>,
    pub outputs: Vec<(String, AttributeType)>,
    pub description: Option<String>,
}

impl ResourceSchema {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            description: None,
        }
    }

    pub fn input(mut self, attribute: AttributeSchema) -> Self {
        self.inputs.push(attribute);
        self
    }

    pub fn output(mut self, name: impl Into<String>, attr_type: AttributeType) -> Self {
        self.outputs.push((name.into(), attr_type));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

fn build_registry() -> HashMap<&'static str, ResourceSchema> {
    let mut table = HashMap::new();

    table.insert(
        "IAMRole",
        ResourceSchema::new("IAMRole")
            .with_description("An IAM role assumable by the principal in its trust policy.")
            .input(AttributeSchema::new("name", AttributeType::String).required())
            .input(AttributeSchema::new("path", AttributeType::String).with_default("/"))
            .input(AttributeSchema::new("assume_role_policy", AttributeType::String).required())
            .input(AttributeSchema::new("managed_policy_arns", AttributeType::String))
            .input(AttributeSchema::new("permissions_boundary", AttributeType::String))
            .output("arn", AttributeType::String)
            .output("id", AttributeType::String)
            .output("unique_id", AttributeType::String),
    );

    table.insert(
        "IAMUser",
        ResourceSchema::new("IAMUser")
            .with_description("An IAM user identity.")
            .input(AttributeSchema::new("name", AttributeType::String).required())
            .input(AttributeSchema::new("path", AttributeType::String).with_default("/"))
            .input(AttributeSchema::new("managed_policy_arns", AttributeType::String))
            .input(AttributeSchema::new("permissions_boundary", AttributeType::String))
            .output("arn", AttributeType::String)
            .output("id", AttributeType::String)
            .output("unique_id", AttributeType::String),
    );

    table.insert(
        "IAMGroup",
        ResourceSchema::new("IAMGroup")
            .with_description("An IAM group, a container for user policy attachments.")
            .input(AttributeSchema::new("name", AttributeType::String).required())
            .input(AttributeSchema::new("path", AttributeType::String).with_default("/"))
            .input(AttributeSchema::new("managed_policy_arns", AttributeType::String))
            .output("arn", AttributeType::String)
            .output("id", AttributeType::String),
    );

    table.insert(
        "IAMPolicy",
        ResourceSchema::new("IAMPolicy")
            .with_description("A customer-managed IAM policy document.")
            .input(AttributeSchema::new("name", AttributeType::String).required())
            .input(AttributeSchema::new("path", AttributeType::String).with_default("/"))
            .input(AttributeSchema::new("document", AttributeType::String).required())
            .output("arn", AttributeType::String)
            .output("id", AttributeType::String),
    );

    table.insert(
        "IAMInstanceProfile",
        ResourceSchema::new("IAMInstanceProfile")
            .with_description("An instance profile carrying at most one IAM role.")
            .input(AttributeSchema::new("name", AttributeType::String).required())
            .input(AttributeSchema::new("path", AttributeType::String).with_default("/"))
            .input(AttributeSchema::new("role_name", AttributeType::String))
            .output("arn", AttributeType::String)
            .output("id", AttributeType::String),
    );

    table
}

fn registry() -> &'static HashMap<&'static str, ResourceSchema> {
    static REGISTRY: OnceLock<HashMap<&'static str, ResourceSchema>> = OnceLock::new();
    REGISTRY.get_or_init(build_registry)
}

pub fn get_resource_schema(label: &str) -> Result<&'static ResourceSchema> {
    registry()
        .get(label)
        .ok_or_else(|| Error::not_found(format!("unknown IAM resource {label}")))
}

pub fn list_resource_schemas() -> Vec<&'static ResourceSchema> {
    let mut schemas: Vec<&'static ResourceSchema> = registry().values().collect();
    schemas.sort_by(|a, b| a.label.cmp(&b.label));
    schemas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_label_resolves() {
        let schema = get_resource_schema("IAMRole").unwrap();
        assert!(schema.inputs.iter().any(|a| a.name == "name" && a.required));
    }

    #[test]
    fn unknown_label_is_not_found() {
        let err = get_resource_schema("IAMWidget").unwrap_err();
        assert!(err.is_kind(carina_core::ErrorKind::NotFound));
        assert_eq!(err.message, "unknown IAM resource IAMWidget");
    }

    #[test]
    fn list_is_sorted_by_label() {
        let labels: Vec<&str> = list_resource_schemas().iter().map(|s| s.label.as_str()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }
}
