//! Trait model: immutable environment characteristics.
//!
//! A [`Trait`] identifies one distinguishing characteristic of a runtime
//! environment: an OS distribution, a CPU architecture, a CI system, a
//! shell, a terminal emulator, or an AI coding agent. Traits are constructed
//! once (normally as catalog constants), validated at construction, and
//! never mutated.
//!
//! The variant set is closed: [`TraitKind`] is a sealed tag, and each kind
//! contributes its own extension keys to [`Trait::info`]. The only
//! environment-dependent state, "is this the current environment", lives in
//! the detection cache (see [`crate::detect`]), not on the trait itself.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::detect;
use crate::error::TraitError;

// ============================================================================
// Trait Kind
// ============================================================================

/// Closed set of trait families.
///
/// Every trait belongs to exactly one kind, and every kind has exactly one
/// canonical group partition (enforced by catalog tests, not by this type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitKind {
    /// CPU architecture (x86_64, aarch64, ...).
    Architecture,
    /// Operating system or distribution (ubuntu, macos, windows, ...).
    Platform,
    /// Continuous integration system (github_actions, gitlab_ci, ...).
    Ci,
    /// Command shell (bash, zsh, powershell, ...).
    Shell,
    /// Terminal emulator or multiplexer (kitty, tmux, ...).
    Terminal,
    /// AI coding agent (claude_code, copilot, ...).
    Agent,
}

impl TraitKind {
    /// All kinds, in a fixed order.
    pub const ALL: [TraitKind; 6] = [
        TraitKind::Architecture,
        TraitKind::Platform,
        TraitKind::Ci,
        TraitKind::Shell,
        TraitKind::Terminal,
        TraitKind::Agent,
    ];

    /// Stable lowercase label, matching the serde representation.
    pub fn label(&self) -> &'static str {
        match self {
            TraitKind::Architecture => "architecture",
            TraitKind::Platform => "platform",
            TraitKind::Ci => "ci",
            TraitKind::Shell => "shell",
            TraitKind::Terminal => "terminal",
            TraitKind::Agent => "agent",
        }
    }

    /// Parse a kind from its label.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "architecture" => Some(TraitKind::Architecture),
            "platform" => Some(TraitKind::Platform),
            "ci" => Some(TraitKind::Ci),
            "shell" => Some(TraitKind::Shell),
            "terminal" => Some(TraitKind::Terminal),
            "agent" => Some(TraitKind::Agent),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Trait
// ============================================================================

/// One distinguishing characteristic of a runtime environment.
///
/// Immutable after construction. Identity is the value (kind, id, name,
/// icon, url); two traits with the same id are expected to be value-identical
/// singletons, and [`crate::group::Group`] rejects value-distinct collisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TraitData")]
pub struct Trait {
    kind: TraitKind,
    id: String,
    name: String,
    icon: String,
    url: String,
}

/// Wire shape for [`Trait`] deserialization. Fields pass through
/// [`Trait::new`] so deserialized values honor the same construction
/// invariants as directly built ones.
#[derive(Deserialize)]
struct TraitData {
    kind: TraitKind,
    id: String,
    name: String,
    icon: String,
    url: String,
}

impl TryFrom<TraitData> for Trait {
    type Error = TraitError;

    fn try_from(raw: TraitData) -> Result<Self, TraitError> {
        Trait::new(raw.kind, raw.id, raw.name, raw.icon, raw.url)
    }
}

impl Trait {
    /// Create a validated trait.
    ///
    /// Fails fast on an empty `id`, `name`, or `icon`, or a `url` that does
    /// not use the https scheme.
    pub fn new(
        kind: TraitKind,
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self, TraitError> {
        let id = id.into();
        let name = name.into();
        let icon = icon.into();
        let url = url.into();

        if id.is_empty() {
            return Err(TraitError::empty_field("id", id));
        }
        if name.is_empty() {
            return Err(TraitError::empty_field("name", id));
        }
        if icon.is_empty() {
            return Err(TraitError::empty_field("icon", id));
        }
        if !url.starts_with("https://") {
            return Err(TraitError::InsecureUrl { id, url });
        }

        Ok(Trait {
            kind,
            id,
            name,
            icon,
            url,
        })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Family tag.
    pub fn kind(&self) -> TraitKind {
        self.kind
    }

    /// Unique lowercase ASCII slug; stable identity key.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short display glyph.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Reference documentation link (https only).
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the running environment matches this trait.
    ///
    /// Delegates to the detection cache: computed at most once per process
    /// per trait id, invalidatable via [`detect::clear_detection_cache`].
    pub fn current(&self) -> bool {
        detect::current(&self.id)
    }

    /// All attributes obtainable for this trait, as a JSON object.
    ///
    /// Base keys (`kind`, `id`, `name`, `icon`, `url`, `current`) are always
    /// present. Each kind appends its own keys, populated only when the
    /// trait matches the running environment and `null` otherwise, so the
    /// schema shape is identical regardless of match status.
    pub fn info(&self) -> Map<String, Value> {
        let current = self.current();

        let mut info = Map::new();
        info.insert("kind".to_string(), json!(self.kind.label()));
        info.insert("id".to_string(), json!(self.id));
        info.insert("name".to_string(), json!(self.name));
        info.insert("icon".to_string(), json!(self.icon));
        info.insert("url".to_string(), json!(self.url));
        info.insert("current".to_string(), json!(current));

        for (key, value) in self.kind_info(current) {
            info.insert(key.to_string(), value);
        }
        info
    }

    /// Kind-specific extension keys for [`Trait::info`].
    ///
    /// Keys are fixed per kind; values are `null` unless `current` is true.
    fn kind_info(&self, current: bool) -> Vec<(&'static str, Value)> {
        fn env_or_null(current: bool, var: &str) -> Value {
            if current {
                std::env::var(var).map_or(Value::Null, Value::from)
            } else {
                Value::Null
            }
        }

        match self.kind {
            TraitKind::Architecture => vec![
                (
                    "machine",
                    if current {
                        json!(std::env::consts::ARCH)
                    } else {
                        Value::Null
                    },
                ),
                ("processor", env_or_null(current, "PROCESSOR_IDENTIFIER")),
            ],
            TraitKind::Platform => vec![
                (
                    "os",
                    if current {
                        json!(std::env::consts::OS)
                    } else {
                        Value::Null
                    },
                ),
                (
                    "family",
                    if current {
                        json!(std::env::consts::FAMILY)
                    } else {
                        Value::Null
                    },
                ),
            ],
            TraitKind::Ci | TraitKind::Agent => vec![(
                "marker",
                if current {
                    detect::marker_for(&self.id).map_or(Value::Null, Value::from)
                } else {
                    Value::Null
                },
            )],
            TraitKind::Shell => vec![("shell_path", env_or_null(current, "SHELL"))],
            TraitKind::Terminal => vec![
                ("term", env_or_null(current, "TERM")),
                ("term_program", env_or_null(current, "TERM_PROGRAM")),
            ],
        }
    }

    /// Comparison key for deterministic ordering: id first, then the rest
    /// of the immutable value.
    fn sort_key(&self) -> (&str, TraitKind, &str, &str, &str) {
        (&self.id, self.kind, &self.name, &self.icon, &self.url)
    }
}

impl PartialOrd for Trait {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Trait {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon, self.id)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trait {
        Trait::new(
            TraitKind::Platform,
            "ubuntu",
            "Ubuntu",
            "circle",
            "https://ubuntu.com",
        )
        .unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn valid_trait_constructs() {
            let t = sample();
            assert_eq!(t.id(), "ubuntu");
            assert_eq!(t.kind(), TraitKind::Platform);
        }

        #[test]
        fn empty_id_fails() {
            let err =
                Trait::new(TraitKind::Platform, "", "X", "x", "https://example.com").unwrap_err();
            assert_eq!(
                err,
                TraitError::EmptyField {
                    field: "id",
                    id: "<unset>".to_string(),
                }
            );
        }

        #[test]
        fn empty_name_fails() {
            let err =
                Trait::new(TraitKind::Platform, "x", "", "x", "https://example.com").unwrap_err();
            assert!(matches!(err, TraitError::EmptyField { field: "name", .. }));
        }

        #[test]
        fn empty_icon_fails() {
            let err =
                Trait::new(TraitKind::Platform, "x", "X", "", "https://example.com").unwrap_err();
            assert!(matches!(err, TraitError::EmptyField { field: "icon", .. }));
        }

        #[test]
        fn insecure_url_fails() {
            let err =
                Trait::new(TraitKind::Platform, "x", "X", "x", "http://example.com").unwrap_err();
            assert_eq!(
                err,
                TraitError::InsecureUrl {
                    id: "x".to_string(),
                    url: "http://example.com".to_string(),
                }
            );
        }
    }

    mod ordering_and_equality {
        use super::*;

        #[test]
        fn equality_is_by_value() {
            assert_eq!(sample(), sample().clone());
        }

        #[test]
        fn ordering_is_by_id_first() {
            let a = Trait::new(TraitKind::Ci, "aaa", "Z", "z", "https://z.example").unwrap();
            let b = Trait::new(TraitKind::Agent, "bbb", "A", "a", "https://a.example").unwrap();
            assert!(a < b);
        }
    }

    mod deserialization {
        use super::*;

        #[test]
        fn round_trips_through_json() {
            let original = sample();
            let json = serde_json::to_string(&original).unwrap();
            let back: Trait = serde_json::from_str(&json).unwrap();
            assert_eq!(back, original);
        }

        #[test]
        fn invalid_fields_are_rejected() {
            // Deserialization runs the same validation as Trait::new:
            // empty fields and non-https urls never become a Trait.
            let bypass = r#"{"kind":"platform","id":"","name":"","icon":"","url":"http://evil"}"#;
            assert!(serde_json::from_str::<Trait>(bypass).is_err());

            let insecure =
                r#"{"kind":"platform","id":"x","name":"X","icon":"x","url":"http://evil"}"#;
            let err = serde_json::from_str::<Trait>(insecure).unwrap_err();
            assert!(err.to_string().contains("insecure url"));
        }
    }

    mod info {
        use super::*;

        #[test]
        fn base_keys_always_present() {
            let info = sample().info();
            for key in ["kind", "id", "name", "icon", "url", "current"] {
                assert!(info.contains_key(key), "missing base key {key}");
            }
        }

        #[test]
        fn kind_keys_present_even_when_not_current() {
            // A trait no detector will ever match.
            let t = Trait::new(
                TraitKind::Architecture,
                "never_matches_arch",
                "Never",
                "x",
                "https://example.com",
            )
            .unwrap();
            let info = t.info();
            assert_eq!(info["current"], serde_json::json!(false));
            assert_eq!(info["machine"], Value::Null);
            assert_eq!(info["processor"], Value::Null);
        }

        #[test]
        fn kind_label_round_trips() {
            for kind in TraitKind::ALL {
                assert_eq!(TraitKind::parse(kind.label()), Some(kind));
            }
            assert_eq!(TraitKind::parse("mainframe"), None);
        }
    }
}
