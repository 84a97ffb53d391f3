//! Error types for envtraits.
//!
//! This module provides a unified error type (`TraitError`) covering every
//! failure condition in the crate. All errors are programmer/input errors
//! surfaced synchronously to the caller; nothing here is retried or
//! swallowed.
//!
//! ## Exit Code Mapping
//!
//! The CLI maps errors to exit codes:
//! - `2`: Invalid input (bad trait/group definitions, unknown ids)
//! - `1`: Ambiguous reduction (ill-defined reference pool for the input)

use std::fmt;

use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for the `envt` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Ambiguous reduction or other unrecoverable state.
    Failure = 1,
    /// Invalid input from caller (bad definitions, unknown ids).
    InvalidInput = 2,
}

impl ExitCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for trait/group construction, reference resolution,
/// and reduction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TraitError {
    /// A required field was empty at construction time.
    #[error("empty {field} for '{id}'")]
    EmptyField {
        /// Which field was empty (`id`, `name`, or `icon`).
        field: &'static str,
        /// The id of the offending trait or group (`<unset>` when the id
        /// itself was empty).
        id: String,
    },

    /// A trait URL did not use the https scheme.
    #[error("insecure url for '{id}': {url}")]
    InsecureUrl { id: String, url: String },

    /// Two value-distinct traits collided on the same id within one group.
    #[error("conflicting member definitions for id(s): {}", ids.join(", "))]
    ConflictingMembers { ids: Vec<String> },

    /// One or more string references did not resolve against the registry.
    #[error("unknown trait or group id(s): {}", ids.join(", "))]
    UnknownIds { ids: Vec<String> },

    /// The reduction search found more than one best-size cover.
    ///
    /// The reference pool is ill-defined for this input: two covers of equal
    /// minimal cardinality exist and the engine refuses to guess. Each entry
    /// in `solutions` is a rendered cover, sorted for reproducibility.
    #[error("ambiguous reduction, {} tied covers: {}", solutions.len(), solutions.join("; "))]
    AmbiguousReduction { solutions: Vec<String> },
}

impl TraitError {
    /// Create an empty-field error.
    pub fn empty_field(field: &'static str, id: impl Into<String>) -> Self {
        let id = id.into();
        TraitError::EmptyField {
            field,
            id: if id.is_empty() {
                "<unset>".to_string()
            } else {
                id
            },
        }
    }

    /// Create an unknown-ids error from any iterator of ids.
    pub fn unknown_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TraitError::UnknownIds {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TraitError::EmptyField { .. }
            | TraitError::InsecureUrl { .. }
            | TraitError::ConflictingMembers { .. }
            | TraitError::UnknownIds { .. } => ExitCode::InvalidInput,
            TraitError::AmbiguousReduction { .. } => ExitCode::Failure,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod display {
        use super::*;

        #[test]
        fn empty_field_names_field_and_id() {
            let err = TraitError::empty_field("icon", "ubuntu");
            assert_eq!(err.to_string(), "empty icon for 'ubuntu'");
        }

        #[test]
        fn empty_field_with_empty_id_uses_sentinel() {
            let err = TraitError::empty_field("id", "");
            assert_eq!(err.to_string(), "empty id for '<unset>'");
        }

        #[test]
        fn unknown_ids_lists_every_id() {
            let err = TraitError::unknown_ids(["zorin", "beos"]);
            assert_eq!(err.to_string(), "unknown trait or group id(s): zorin, beos");
        }

        #[test]
        fn ambiguous_reduction_counts_ties() {
            let err = TraitError::AmbiguousReduction {
                solutions: vec!["{a}".to_string(), "{b}".to_string()],
            };
            assert_eq!(err.to_string(), "ambiguous reduction, 2 tied covers: {a}; {b}");
        }
    }

    mod exit_codes {
        use super::*;

        #[test]
        fn validation_errors_map_to_invalid_input() {
            assert_eq!(
                TraitError::empty_field("name", "x").exit_code(),
                ExitCode::InvalidInput
            );
            assert_eq!(
                TraitError::InsecureUrl {
                    id: "x".to_string(),
                    url: "http://example.com".to_string(),
                }
                .exit_code(),
                ExitCode::InvalidInput
            );
            assert_eq!(
                TraitError::unknown_ids(["x"]).exit_code(),
                ExitCode::InvalidInput
            );
        }

        #[test]
        fn ambiguity_maps_to_failure() {
            let err = TraitError::AmbiguousReduction { solutions: vec![] };
            assert_eq!(err.exit_code(), ExitCode::Failure);
            assert_eq!(err.exit_code().code(), 1);
        }

        #[test]
        fn display_shows_code() {
            assert_eq!(format!("{}", ExitCode::InvalidInput), "2");
            assert_eq!(format!("{}", ExitCode::Failure), "1");
        }
    }
}
