//! Dotted field paths into episode records.
//!
//! A ward-round column addresses its value with a dotted path such as
//! `patient.demographics.first_name`: each segment before the last names a
//! related record to hop into, and the last segment names a scalar field.
//! Paths are parsed and validated up front so that a malformed column
//! configuration fails when the round is constructed, not per row.

use crate::{WardRoundError, WardRoundResult};

/// Parsed and validated representation of a dotted field path.
///
/// # Canonical form
///
/// `<segment>(.<segment>)*` where each segment is one or more ASCII
/// alphanumeric or underscore characters.
///
/// Example: `patient.demographics.hospital_number`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path string into a validated `FieldPath`.
    ///
    /// # Errors
    ///
    /// Returns [`WardRoundError::InvalidFieldPath`] if the input is empty,
    /// contains an empty segment (leading, trailing or doubled dots), or a
    /// segment contains characters outside `[A-Za-z0-9_]`.
    pub fn parse(input: &str) -> WardRoundResult<Self> {
        if input.is_empty() {
            return Err(WardRoundError::InvalidFieldPath {
                path: input.to_owned(),
                reason: "path is empty".to_owned(),
            });
        }

        let mut segments = Vec::new();
        for segment in input.split('.') {
            if segment.is_empty() {
                return Err(WardRoundError::InvalidFieldPath {
                    path: input.to_owned(),
                    reason: "empty path segment".to_owned(),
                });
            }
            if !segment.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
                return Err(WardRoundError::InvalidFieldPath {
                    path: input.to_owned(),
                    reason: format!("invalid characters in segment '{segment}'"),
                });
            }
            segments.push(segment.to_owned());
        }

        Ok(Self { segments })
    }

    /// The path's segments, in traversal order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_segment() {
        let path = FieldPath::parse("date_of_admission").expect("valid path");
        assert_eq!(path.segments(), ["date_of_admission"]);
    }

    #[test]
    fn parses_nested_path() {
        let path = FieldPath::parse("patient.demographics.first_name").expect("valid path");
        assert_eq!(path.segments(), ["patient", "demographics", "first_name"]);
        assert_eq!(path.to_string(), "patient.demographics.first_name");
    }

    #[test]
    fn rejects_empty_input() {
        let err = FieldPath::parse("").expect_err("should reject empty path");
        assert!(matches!(err, WardRoundError::InvalidFieldPath { .. }));
    }

    #[test]
    fn rejects_empty_segments() {
        for input in ["patient..first_name", ".patient", "patient."] {
            let err = FieldPath::parse(input).expect_err("should reject empty segment");
            assert!(matches!(err, WardRoundError::InvalidFieldPath { .. }));
        }
    }

    #[test]
    fn rejects_invalid_characters() {
        let err =
            FieldPath::parse("patient.demo graphics").expect_err("should reject whitespace");
        match err {
            WardRoundError::InvalidFieldPath { reason, .. } => {
                assert!(reason.contains("demo graphics"));
            }
            other => panic!("expected InvalidFieldPath, got {other:?}"),
        }
    }
}
