#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Helpers for resolving local `$ref` targets such as `#/parameters/Limit`.
//! External documents are never fetched.

use percent_encoding::percent_decode_str;

/// Extracts the entry name from a local `$ref` pointing at `#/{section}/{name}`.
///
/// Returns `None` for external references or pointers into other sections.
pub(crate) fn local_entry_name(ref_str: &str, section: &str) -> Option<String> {
    let pointer = ref_str.strip_prefix("#/")?;
    let segments: Vec<&str> = pointer.split('/').collect();

    if segments.len() != 2 || segments[0] != section {
        return None;
    }

    let name = decode_pointer_segment(segments[1]);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_entry_name_success() {
        let name = local_entry_name("#/parameters/Limit", "parameters").unwrap();
        assert_eq!(name, "Limit");
    }

    #[test]
    fn test_local_entry_name_wrong_section() {
        assert!(local_entry_name("#/definitions/Limit", "parameters").is_none());
    }

    #[test]
    fn test_local_entry_name_rejects_external_and_deep_pointers() {
        assert!(local_entry_name("other.yaml#/parameters/Limit", "parameters").is_none());
        assert!(local_entry_name("#/parameters/Limit/name", "parameters").is_none());
        assert!(local_entry_name("#/parameters/", "parameters").is_none());
    }

    #[test]
    fn test_decode_pointer_segment_percent_encoding() {
        let decoded = decode_pointer_segment("Page%20Size~1v2~0x");
        assert_eq!(decoded, "Page Size/v2~x");
    }
}
