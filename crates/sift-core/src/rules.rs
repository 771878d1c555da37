//! Pure rules applied to entity fields before they are persisted.

use crate::errors::CoreError;

/// Maximum stored length of criteria and keyword descriptions, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Normalize a literature source URL.
///
/// Empty input stays empty. Input that already mentions a scheme
/// (`http://` or `https://`, anywhere in the string) is kept verbatim.
/// Anything else gets `http://` prepended.
#[must_use]
pub fn normalize_source_url(value: &str) -> String {
    if value.is_empty() || value.contains("http://") || value.contains("https://") {
        value.to_string()
    } else {
        format!("http://{value}")
    }
}

/// Cut `description` to at most `limit` characters.
///
/// Counts Unicode scalar values, so multi-byte text is never split mid-character.
#[must_use]
pub fn truncate_description(description: &str, limit: usize) -> String {
    match description.char_indices().nth(limit) {
        Some((byte_idx, _)) => description[..byte_idx].to_string(),
        None => description.to_string(),
    }
}

/// Apply the description length rule.
///
/// With `strict` off, over-length text is truncated. With `strict` on, it is
/// rejected.
///
/// # Errors
///
/// Returns `CoreError::Validation` in strict mode when `description` is longer
/// than `limit` characters.
pub fn enforce_description_limit(
    description: &str,
    limit: usize,
    strict: bool,
) -> Result<String, CoreError> {
    let len = description.chars().count();
    if len <= limit {
        return Ok(description.to_string());
    }
    if strict {
        return Err(CoreError::Validation(format!(
            "description is {len} characters, limit is {limit}"
        )));
    }
    Ok(truncate_description(description, limit))
}

/// Whether `name` is a valid review slug: non-empty, lowercase ASCII letters,
/// digits, `-` and `_` only.
#[must_use]
pub fn is_slug(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

/// Derive a slug from a review title.
///
/// Non-alphanumeric runs collapse into a single `-`; leading and trailing
/// separators are dropped. Non-ASCII letters are discarded.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Validate a review slug.
///
/// # Errors
///
/// Returns `CoreError::Validation` if `name` is not a slug.
pub fn validate_slug(name: &str) -> Result<(), CoreError> {
    if is_slug(name) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "review name '{name}' must be a slug (lowercase letters, digits, '-' or '_')"
        )))
    }
}
