//! Recording format discovery
//!
//! Probes a recording backend for the container and codec combinations
//! it can record to.

use super::types::{Container, CODECS};

/// Enumerate the output MIME types a recording backend supports.
///
/// `is_supported` is the backend's own capability check, injected so the
/// enumeration works against any backend (and against fakes in tests).
/// Bare `video/<container>` types are probed first; each supported
/// container is then probed again with every codec qualifier. The result
/// keeps probe order: supported containers first, then supported
/// codec-qualified types.
///
/// The predicate is called once per candidate and is trusted as-is; a
/// backend check that can fail should be adapted to return `false`
/// before being passed in.
pub fn enumerate_supported_formats(mut is_supported: impl FnMut(&str) -> bool) -> Vec<String> {
    let supported_containers: Vec<String> = Container::ALL
        .iter()
        .map(|container| container.mime_type())
        .filter(|mime_type| is_supported(mime_type))
        .collect();

    let supported_codecs: Vec<String> = supported_containers
        .iter()
        .flat_map(|mime_type| {
            CODECS
                .iter()
                .map(move |codec| format!("{};codecs={}", mime_type, codec))
        })
        .filter(|mime_type| is_supported(mime_type))
        .collect();

    tracing::debug!(
        "Recording backend supports {} containers, {} codec-qualified formats",
        supported_containers.len(),
        supported_codecs.len()
    );

    let mut formats = supported_containers;
    formats.extend(supported_codecs);
    formats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containers_first_then_codecs() {
        let accepted = ["video/webm", "video/mp4", "video/webm;codecs=vp9"];
        let formats = enumerate_supported_formats(|mime_type| accepted.contains(&mime_type));

        assert_eq!(
            formats,
            ["video/webm", "video/mp4", "video/webm;codecs=vp9"]
        );
    }

    #[test]
    fn test_codecs_cycle_fastest() {
        // Two supported containers, all codec probes accepted: each
        // container's codec block is contiguous and in codec order.
        let formats = enumerate_supported_formats(|mime_type| {
            mime_type.starts_with("video/webm") || mime_type.starts_with("video/mp4")
        });

        assert_eq!(formats[0], "video/webm");
        assert_eq!(formats[1], "video/mp4");
        assert_eq!(formats[2], "video/webm;codecs=vp9");
        assert_eq!(formats[2 + CODECS.len()], "video/mp4;codecs=vp9");
        assert_eq!(formats.len(), 2 + 2 * CODECS.len());
    }

    #[test]
    fn test_deterministic() {
        let accepted = ["video/ogg", "video/ogg;codecs=opus", "video/wav"];
        let predicate = |mime_type: &str| accepted.contains(&mime_type);

        let first = enumerate_supported_formats(predicate);
        let second = enumerate_supported_formats(predicate);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_false_positives() {
        let predicate = |mime_type: &str| mime_type.contains("mp4") || mime_type.ends_with("opus");

        let formats = enumerate_supported_formats(predicate);
        assert!(!formats.is_empty());
        for format in &formats {
            assert!(predicate(format), "reported {} but backend rejects it", format);
        }
    }

    #[test]
    fn test_call_count_all_supported() {
        let mut calls = 0;
        enumerate_supported_formats(|_| {
            calls += 1;
            true
        });

        // Every container, then every container x codec pair
        assert_eq!(calls, Container::ALL.len() + Container::ALL.len() * CODECS.len());
    }

    #[test]
    fn test_codec_probes_only_for_supported_containers() {
        let mut probed = Vec::new();
        enumerate_supported_formats(|mime_type| {
            probed.push(mime_type.to_string());
            mime_type == "video/quicktime"
        });

        assert_eq!(probed.len(), Container::ALL.len() + CODECS.len());
        for candidate in &probed {
            assert!(candidate.starts_with("video/"));
            assert!(candidate.matches(';').count() <= 1);
            if candidate.contains(';') {
                assert!(candidate.starts_with("video/quicktime;codecs="));
            }
        }
    }

    #[test]
    fn test_nothing_supported() {
        let formats = enumerate_supported_formats(|_| false);
        assert!(formats.is_empty());
    }
}
