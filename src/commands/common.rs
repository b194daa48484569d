//! Helpers shared across the export phases.

use tracing::warn;

use crate::{error::ExportError, Result};

/// Resolve a list field that the feed may omit entirely.
///
/// An absent field is an empty list unless `strict` is set, in which case it
/// is reported as [`ExportError::MissingField`].
pub fn list_or_empty<T>(
    value: Option<Vec<T>>,
    path: &str,
    field: &'static str,
    strict: bool,
) -> Result<Vec<T>> {
    match value {
        Some(items) => Ok(items),
        None if strict => Err(ExportError::missing(path, field)),
        None => {
            warn!(path, field, "field absent from response, treating as empty");
            Ok(Vec::new())
        }
    }
}
