//! Descriptor parsing and validation.
//!
//! Every directory in a collection may carry a `metadata.json` file holding
//! one JSON object. The root's object is a collection descriptor; every
//! other object is a node descriptor, parsed against the directory's
//! classification (album or intermediate).
//!
//! ## Validation
//!
//! Parsing distinguishes two failure classes, mirrored by the two
//! [`DescriptorError`] variants:
//!
//! - malformed JSON — the buffer does not deserialize at all
//! - constraint violations — the JSON is well-formed but breaks a rule
//!   (missing required field, bad URL, unknown sort order, malformed
//!   filter entry, misplaced album field)
//!
//! Unrecognized keys are ignored so descriptor files can carry fields for
//! newer tool versions without breaking older ones.
//!
//! ## Root defaults
//!
//! The collection parser substitutes `sort_order = "taken"` and
//! `filter = ["include:.*"]` when absent, so every resolved descendant has
//! a concrete value to inherit. Node descriptors get no such defaults —
//! emptiness is what makes a field inherit.

use crate::types::{
    AlbumMetadata, CollectionDescriptor, CommonFields, DEFAULT_FILTER, DEFAULT_SORT_ORDER,
    SORT_ORDERS,
};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid descriptor: {0}")]
    Validation(String),
}

/// Base-URL shape: scheme, host, at least one dotted TLD segment.
/// Compiled once for the life of the process.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[a-zA-Z0-9.-]+(?:\.[a-zA-Z]{2,})+").expect("URL pattern compiles")
});

fn validation(rule: impl Into<String>) -> DescriptorError {
    DescriptorError::Validation(rule.into())
}

/// Parse and validate the collection descriptor found at the root.
pub fn parse_collection(data: &[u8]) -> Result<CollectionDescriptor, DescriptorError> {
    let mut desc: CollectionDescriptor = serde_json::from_slice(data)?;

    if desc.version.is_empty() {
        return Err(validation("collection descriptor requires a version"));
    }
    if desc.name.is_empty() {
        return Err(validation("collection descriptor requires a name"));
    }
    if desc.url.is_empty() {
        return Err(validation("collection descriptor requires a base URL"));
    }
    if !URL_PATTERN.is_match(&desc.url) {
        return Err(validation(format!("invalid collection URL {:?}", desc.url)));
    }
    if desc.s3_access_code.is_empty() {
        return Err(validation("collection descriptor requires an S3 access code"));
    }
    if desc.s3_secret_key.is_empty() {
        return Err(validation("collection descriptor requires an S3 secret key"));
    }
    if desc.max_size < 0 {
        return Err(validation(format!(
            "max_size must be >= 0, got {}",
            desc.max_size
        )));
    }

    // Root-level defaults. Descendants leaving these fields unset inherit
    // the root's values through the merge chain.
    if desc.common.sort_order.is_empty() {
        desc.common.sort_order = DEFAULT_SORT_ORDER.to_string();
    }
    if desc.common.filter.is_empty() {
        desc.common.filter = vec![DEFAULT_FILTER.to_string()];
    }

    validate_common(&desc.common)?;
    Ok(desc)
}

/// Parse and validate a node descriptor.
///
/// `is_album` comes from directory classification and decides which fields
/// are legal: an album requires a title, an intermediate directory may set
/// neither a title nor any other album-only field.
pub fn parse_node(data: &[u8], is_album: bool) -> Result<AlbumMetadata, DescriptorError> {
    let desc: AlbumMetadata = serde_json::from_slice(data)?;

    if is_album && desc.title.is_empty() {
        return Err(validation("album descriptor requires a title"));
    }
    if !is_album && !desc.title.is_empty() {
        return Err(validation("title may only be set in an album directory"));
    }
    if !is_album
        && (!desc.title_photo.is_empty()
            || !desc.highlight_photo.is_empty()
            || !desc.aliases.is_empty()
            || !desc.titles.is_empty()
            || !desc.captions.is_empty())
    {
        return Err(validation(
            "title photo, highlight photo, aliases, titles, and captions \
             may only be set in an album directory",
        ));
    }

    validate_common(&desc.common)?;
    Ok(desc)
}

/// Field checks shared by both descriptor kinds.
///
/// An empty sort order is legal here: below the root it means "inherit",
/// and the collection parser substitutes the default before calling this.
fn validate_common(common: &CommonFields) -> Result<(), DescriptorError> {
    if !common.sort_order.is_empty() && !SORT_ORDERS.contains(&common.sort_order.as_str()) {
        return Err(validation(format!(
            "invalid sort order {:?}",
            common.sort_order
        )));
    }
    for rule in &common.filter {
        if !matches!(rule.split_once(':'), Some(("include" | "exclude", _))) {
            return Err(validation(format!(
                "filter rule {rule:?} must be \"include:<pattern>\" or \"exclude:<pattern>\""
            )));
        }
    }
    Ok(())
}
