//! Recording format discovery and output file extension mapping.
//!
//! A recording backend only accepts certain container and codec
//! combinations as its output format, and which ones varies by host.
//! This crate probes the backend through its own capability check to
//! find every format it will record to, and maps a chosen format back
//! to the extension used when naming the output file.

pub mod formats;

pub use formats::{
    enumerate_supported_formats, extension_table, resolve_extension, Container, CODECS,
    DEFAULT_EXTENSION,
};
