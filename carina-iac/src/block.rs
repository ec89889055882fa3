//! The Terraform block four-tuple: kind, labels, attributes,
//! and nested blocks.

use std::collections::HashSet;

use carina_core::error::{Error, Result};

use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockType {
    Resource,
    Data,
    Module,
    /// An unlabeled block nested inside a resource body, e.g. a
    /// security group's `ingress { ... }`. Rendered as a bare
    /// keyword, not `resource "..." "..."`.
    Nested(String),
}

impl BlockType {
    pub fn keyword(&self) -> &str {
        match self {
            BlockType::Resource => "resource",
            BlockType::Data => "data",
            BlockType::Module => "module",
            BlockType::Nested(name) => name,
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, BlockType::Nested(_))
    }
}

/// Attributes are an ordered list rather than a map: a mapper that
/// sets the same attribute name twice is a bug, and the list lets
/// [`Block::check_no_duplicate_attributes`] actually observe that
/// instead of silently overwriting it.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub block_type: BlockType,
    pub labels: Vec<String>,
    pub attributes: Vec<(String, Value)>,
    pub blocks: Vec<Block>,
}

impl Block {
    pub fn new<I, S>(block_type: BlockType, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            block_type,
            labels: labels.into_iter().map(Into::into).collect(),
            attributes: Vec::new(),
            blocks: Vec::new(),
        }
    }

    pub fn resource(terraform_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(BlockType::Resource, [terraform_type.into(), name.into()])
    }

    /// An unlabeled nested block, e.g. `ingress { ... }` inside a
    /// security group resource.
    pub fn nested(name: impl Into<String>) -> Self {
        Self::new(BlockType::Nested(name.into()), Vec::<String>::new())
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attributes.push((name.into(), value));
        self
    }

    /// Only sets the attribute if `value` is `Some`; a common pattern
    /// for optional domain fields that should be omitted, not emitted
    /// as an empty string, when absent.
    pub fn with_optional_attribute(self, name: impl Into<String>, value: Option<Value>) -> Self {
        match value {
            Some(v) => self.with_attribute(name, v),
            None => self,
        }
    }

    pub fn with_nested(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn check_no_duplicate_attributes(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (name, _) in &self.attributes {
            if !seen.insert(name.as_str()) {
                return Err(Error::emitter_malformed(format!(
                    "duplicate attribute key {name}"
                )));
            }
        }
        for nested in &self.blocks {
            nested.check_no_duplicate_attributes()?;
        }
        Ok(())
    }

    pub fn to_hcl(&self) -> String {
        self.render(0)
    }

    fn render(&self, indent: usize) -> String {
        let pad = "  ".repeat(indent);
        let inner_pad = "  ".repeat(indent + 1);
        let keyword = self.block_type.keyword();
        let header = if self.labels.is_empty() {
            format!("{pad}{keyword} {{\n")
        } else if self.block_type.is_nested() {
            // Nested blocks that do carry labels (rare) print them bare,
            // matching HCL's `dynamic "name" { ... }`-style shape.
            format!("{pad}{keyword} {} {{\n", self.labels.join(" "))
        } else {
            let labels: Vec<String> = self
                .labels
                .iter()
                .map(|l| format!("\"{}\"", l.replace('"', "\\\"")))
                .collect();
            format!("{pad}{keyword} {} {{\n", labels.join(" "))
        };
        let mut body = String::new();
        for (name, value) in &self.attributes {
            body.push_str(&format!("{inner_pad}{name} = {}\n", value.render()));
        }
        for nested in &self.blocks {
            body.push_str(&nested.render(indent + 1));
        }
        format!("{header}{body}{pad}}}\n")
    }
}
