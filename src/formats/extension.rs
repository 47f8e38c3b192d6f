//! Output file extension mapping
//!
//! Maps a chosen recording format back to the extension used when
//! naming the output file.

use std::collections::HashMap;

use super::types::Container;

/// Extension used for formats without a container-specific entry
pub const DEFAULT_EXTENSION: &str = "webm";

/// Get the container-to-extension table
///
/// Returns a fresh snapshot; the contents never change. Containers
/// without an entry resolve to [`DEFAULT_EXTENSION`].
pub fn extension_table() -> HashMap<&'static str, &'static str> {
    Container::ALL
        .iter()
        .filter_map(|container| {
            container
                .extension()
                .map(|extension| (container.as_str(), extension))
        })
        .collect()
}

/// Get the file extension for a recording format string.
///
/// The codec qualifier (anything from the first `;` on) is ignored; the
/// container subtype alone picks the extension. Unknown containers and
/// malformed input fall back to [`DEFAULT_EXTENSION`] rather than
/// failing, so the result is always a usable extension.
pub fn resolve_extension(output_format: &str) -> &'static str {
    output_format
        .split(';')
        .next()
        .and_then(|mime_type| mime_type.split('/').nth(1))
        .and_then(Container::from_subtype)
        .and_then(|container| container.extension())
        .unwrap_or(DEFAULT_EXTENSION)
}
