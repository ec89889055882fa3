pub mod compute;
pub mod iam;
pub mod networking;
pub mod storage;

/// Shared helper: an id lifted from the domain entity, or a
/// descriptive error if the entity was never round-tripped through a
/// provider — a mapper producing a block that references an absent id
/// is malformed.
pub(crate) fn require_id(kind: &str, id: Option<&str>) -> carina_core::Result<String> {
    id.map(str::to_string)
        .ok_or_else(|| carina_core::Error::emitter_malformed(format!("{kind} has no provider id")))
}

/// Terraform identifiers can't contain `-`; mapper labels derive from
/// entity names, which can.
pub(crate) fn tf_label(name: &str) -> String {
    name.replace(['-', '.', ' '], "_")
}
