//! Recording format support
//!
//! This module provides discovery of the formats a recording backend
//! supports and the mapping from a chosen format to a file extension.

pub mod extension;
pub mod probe;
pub mod types;

pub use extension::{extension_table, resolve_extension, DEFAULT_EXTENSION};
pub use probe::enumerate_supported_formats;
pub use types::{Container, CODECS};
