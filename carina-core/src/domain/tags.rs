//! The tag mapping shared by every taggable resource.
//!
//! Ordered so that emitted Terraform and re-serialized JSON are
//! deterministic across runs (`IndexMap` preserves insertion order).

use indexmap::IndexMap;

pub type Tags = IndexMap<String, String>;

/// Builds the `Name` tag the provider layer synthesizes from an
/// entity's own name when the caller didn't set one explicitly.
pub fn with_name_tag(tags: &Tags, name: &str) -> Tags {
    if tags.contains_key("Name") {
        tags.clone()
    } else {
        let mut out = Tags::new();
        out.insert("Name".to_string(), name.to_string());
        out.extend(tags.clone());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injects_name_tag_when_absent() {
        let tags = Tags::new();
        let out = with_name_tag(&tags, "prod-vpc");
        assert_eq!(out.get("Name").map(String::as_str), Some("prod-vpc"));
    }

    #[test]
    fn leaves_explicit_name_tag_untouched() {
        let mut tags = Tags::new();
        tags.insert("Name".to_string(), "custom".to_string());
        let out = with_name_tag(&tags, "prod-vpc");
        assert_eq!(out.get("Name").map(String::as_str), Some("custom"));
    }
}
