//! IAM name and path character-class rules, shared by domain validation
//! and provider-side ARN synthesis.

use regex::Regex;
use std::sync::OnceLock;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9+=,.@_-]+$").unwrap())
}

/// Validates an IAM name against the shared character class and the
/// given maximum length (64 for roles/users, 128 for everything else).
pub fn validate_iam_name(name: &str, max_len: usize) -> Result<(), String> {
    if name.is_empty() {
        return Err("name must not be empty".to_string());
    }
    if name.chars().count() > max_len {
        return Err(format!(
            "name must be {max_len} characters or fewer, got {}",
            name.chars().count()
        ));
    }
    if !name_pattern().is_match(name) {
        return Err(
            "name must match [A-Za-z0-9+=,.@_-]+".to_string(),
        );
    }
    Ok(())
}

/// Validates an IAM path: must start with '/' and be at most 512 characters.
pub fn validate_iam_path(path: &str) -> Result<(), String> {
    if !path.starts_with('/') {
        return Err("path must start with '/'".to_string());
    }
    if path.len() > 512 {
        return Err(format!(
            "path must be 512 characters or fewer, got {}",
            path.len()
        ));
    }
    Ok(())
}

/// An empty path normalizes to the IAM default of "/".
pub fn normalize_iam_path(path: &str) -> String {
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
    fn accepts_valid_name() {
        assert!(validate_iam_name("svc-role_1.0@team+x,y=z", 64).is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        assert!(validate_iam_name("", 64).is_err());
    }

    #[test]
    fn rejects_name_over_max_len() {
        let name = "a".repeat(65);
        assert!(validate_iam_name(&name, 64).is_err());
        assert!(validate_iam_name(&name, 128).is_ok());
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(validate_iam_name("bad name!", 64).is_err());
    }

    #[test]
    fn path_must_start_with_slash() {
        assert!(validate_iam_path("team/").is_err());
        assert!(validate_iam_path("/team/").is_ok());
    }

    #[test]
    fn path_over_limit_rejected() {
        let path = format!("/{}", "a".repeat(512));
        assert!(validate_iam_path(&path).is_err());
    }

    #[test]
    fn empty_path_normalizes_to_root() {
        assert_eq!(normalize_iam_path(""), "/");
        assert_eq!(normalize_iam_path("/team/"), "/team/");
    }
}
