//! Static IAM policy catalog: a directory of `policies.json` files,
//! one per AWS service folder, loaded once and served from memory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDefinition {
    pub arn: String,
    pub name: String,
    pub description: String,
    pub path: String,
    pub policy_document: String,
    pub is_aws_managed: bool,
    #[serde(default)]
    pub resource_categories: Vec<String>,
    #[serde(default)]
    pub related_resources: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum PolicyLoadError {
    #[error("{path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("{path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

#[derive(Debug, Default)]
pub struct PolicyCatalog {
    definitions: Vec<PolicyDefinition>,
}

const CATALOG_FILE_NAME: &str = "policies.json";

impl PolicyCatalog {
    /// Walks `root` recursively, loading every `policies.json` it finds.
    /// A file that fails to read or parse is skipped and its error is
    /// returned alongside the (possibly partial) catalog; one bad file
    /// never prevents the rest of the tree from loading.
    pub fn load_from_dir(root: &Path) -> (Self, Vec<PolicyLoadError>) {
        let mut definitions = Vec::new();
        let mut errors = Vec::new();
        let mut dirs = vec![root.to_path_buf()];
        while let Some(dir) = dirs.pop() {
            let entries = match std::fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(source) => {
                    errors.push(PolicyLoadError::Io { path: dir, source });
                    continue;
                }
            };
            for entry in entries.flatten() {
                let entry_path = entry.path();
                if entry_path.is_dir() {
                    dirs.push(entry_path);
                } else if entry_path.file_name().and_then(|n| n.to_str()) == Some(CATALOG_FILE_NAME) {
                    match load_file(&entry_path) {
                        Ok(mut loaded) => {
                            let related_resource = dir
                                .file_name()
                                .and_then(|n| n.to_str())
                                .unwrap_or_default()
                                .to_string();
                            for definition in &mut loaded {
                                add_inferred_related_resource(definition, &related_resource);
                            }
                            definitions.extend(loaded);
                        }
                        Err(err) => {
                            log::warn!("skipping unreadable policy file: {err}");
                            errors.push(err);
                        }
                    }
                }
            }
        }
        (Self { definitions }, errors)
    }

    pub fn definitions(&self) -> &[PolicyDefinition] {
        &self.definitions
    }

    /// Policies whose `resource_categories` contain `service`, case-insensitively.
    pub fn by_service(&self, service: &str) -> Vec<&PolicyDefinition> {
        self.definitions
            .iter()
            .filter(|d| d.resource_categories.iter().any(|c| c.eq_ignore_ascii_case(service)))
            .collect()
    }

    /// Policies whose `related_resources` contain `resource`, case-insensitively.
    pub fn by_related_resource(&self, resource: &str) -> Vec<&PolicyDefinition> {
        self.definitions
            .iter()
            .filter(|d| d.related_resources.iter().any(|r| r.eq_ignore_ascii_case(resource)))
            .collect()
    }

    /// Policies that connect a source service to a destination service:
    /// either tagged with both, or related to both.
    pub fn connecting(&self, source: &str, destination: &str) -> Vec<&PolicyDefinition> {
        self.definitions
            .iter()
            .filter(|d| {
                let tags: Vec<&str> = d
                    .resource_categories
                    .iter()
                    .chain(d.related_resources.iter())
                    .map(String::as_str)
                    .collect();
                tags.iter().any(|t| t.eq_ignore_ascii_case(source))
                    && tags.iter().any(|t| t.eq_ignore_ascii_case(destination))
            })
            .collect()
    }
}

fn load_file(path: &Path) -> Result<Vec<PolicyDefinition>, PolicyLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PolicyLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| PolicyLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn add_inferred_related_resource(definition: &mut PolicyDefinition, related_resource: &str) {
    if related_resource.is_empty() {
        return;
    }
    let already_present = definition
        .related_resources
        .iter()
        .any(|r| r.eq_ignore_ascii_case(related_resource));
    if !already_present {
        definition.related_resources.push(related_resource.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_policies(dir: &Path, contents: &str) {
        fs::write(dir.join(CATALOG_FILE_NAME), contents).unwrap();
    }

    #[test]
    fn loads_a_single_service_folder() {
        let root = tempfile::tempdir().unwrap();
        let s3_dir = root.path().join("s3");
        fs::create_dir_all(&s3_dir).unwrap();
        write_policies(
            &s3_dir,
            r#"[{"arn":"arn:aws:iam::aws:policy/AmazonS3FullAccess","name":"AmazonS3FullAccess","description":"Full access to S3","path":"/","policy_document":"{}","is_aws_managed":true,"resource_categories":["s3"],"related_resources":[]}]"#,
        );
        let (catalog, errors) = PolicyCatalog::load_from_dir(root.path());
        assert!(errors.is_empty());
        assert_eq!(catalog.definitions().len(), 1);
        assert_eq!(catalog.definitions()[0].related_resources, vec!["s3"]);
    }

    #[test]
    fn existing_related_resource_is_not_duplicated() {
        let root = tempfile::tempdir().unwrap();
        let s3_dir = root.path().join("s3");
        fs::create_dir_all(&s3_dir).unwrap();
        write_policies(
            &s3_dir,
            r#"[{"arn":"arn:aws:iam::aws:policy/X","name":"X","description":"","path":"/","policy_document":"{}","is_aws_managed":true,"resource_categories":[],"related_resources":["S3"]}]"#,
        );
        let (catalog, _) = PolicyCatalog::load_from_dir(root.path());
        assert_eq!(catalog.definitions()[0].related_resources, vec!["S3"]);
    }

    #[test]
    fn malformed_file_is_skipped_without_aborting_the_rest() {
        let root = tempfile::tempdir().unwrap();
        let bad_dir = root.path().join("bad");
        let good_dir = root.path().join("good");
        fs::create_dir_all(&bad_dir).unwrap();
        fs::create_dir_all(&good_dir).unwrap();
        write_policies(&bad_dir, "{not valid json");
        write_policies(
            &good_dir,
            r#"[{"arn":"arn:aws:iam::aws:policy/Y","name":"Y","description":"","path":"/","policy_document":"{}","is_aws_managed":true,"resource_categories":[],"related_resources":[]}]"#,
        );
        let (catalog, errors) = PolicyCatalog::load_from_dir(root.path());
        assert_eq!(errors.len(), 1);
        assert_eq!(catalog.definitions().len(), 1);
    }

    #[test]
    fn by_service_matches_case_insensitively() {
        let root = tempfile::tempdir().unwrap();
        let s3_dir = root.path().join("s3");
        fs::create_dir_all(&s3_dir).unwrap();
        write_policies(
            &s3_dir,
            r#"[{"arn":"arn:aws:iam::aws:policy/X","name":"X","description":"","path":"/","policy_document":"{}","is_aws_managed":true,"resource_categories":["S3"],"related_resources":[]}]"#,
        );
        let (catalog, _) = PolicyCatalog::load_from_dir(root.path());
        assert_eq!(catalog.by_service("s3").len(), 1);
        assert_eq!(catalog.by_service("lambda").len(), 0);
    }
}
