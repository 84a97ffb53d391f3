//! Catalog: the static data tables of known traits and groups.
//!
//! Every trait and group the crate knows about is defined here as a
//! `LazyLock` constant, validated on first access, and collected into the
//! global registry at bootstrap. Definitions are data, not logic: each kind
//! lives in its own module, with the canonical partition and any convenience
//! groups alongside its traits.
//!
//! Closure invariant (enforced by the tests at the bottom, not by the data
//! structures): per kind, canonical groups are pairwise disjoint and their
//! union is the full trait set of that kind.

use crate::group::Group;
use crate::traits::Trait;

pub mod agents;
pub mod architectures;
pub mod ci;
pub mod platforms;
pub mod shells;
pub mod terminals;

/// Declare validated trait constants for one kind.
macro_rules! catalog_traits {
    ($kind:expr => $( $ident:ident => ($id:literal, $name:literal, $icon:literal, $url:literal) ),+ $(,)?) => {
        $(
            pub static $ident: std::sync::LazyLock<$crate::traits::Trait> =
                std::sync::LazyLock::new(|| {
                    $crate::traits::Trait::new($kind, $id, $name, $icon, $url)
                        .expect("catalog trait definition is valid")
                });
        )+
    };
}
pub(crate) use catalog_traits;

/// Every known trait, in catalog order.
pub fn all_traits() -> impl Iterator<Item = &'static Trait> {
    architectures::traits()
        .into_iter()
        .chain(platforms::traits())
        .chain(ci::traits())
        .chain(shells::traits())
        .chain(terminals::traits())
        .chain(agents::traits())
}

/// Every known group, in catalog order.
pub fn all_groups() -> impl Iterator<Item = &'static Group> {
    architectures::groups()
        .into_iter()
        .chain(platforms::groups())
        .chain(ci::groups())
        .chain(shells::groups())
        .chain(terminals::groups())
        .chain(agents::groups())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use crate::traits::TraitKind;

    #[test]
    fn trait_ids_are_unique() {
        let mut seen = BTreeSet::new();
        for t in all_traits() {
            assert!(seen.insert(t.id()), "duplicate trait id {}", t.id());
        }
    }

    #[test]
    fn group_ids_are_unique_and_distinct_from_trait_ids() {
        let trait_ids: BTreeSet<&str> = all_traits().map(|t| t.id()).collect();
        let mut seen = BTreeSet::new();
        for g in all_groups() {
            assert!(seen.insert(g.id()), "duplicate group id {}", g.id());
            assert!(
                !trait_ids.contains(g.id()),
                "group id {} collides with a trait id",
                g.id()
            );
        }
    }

    #[test]
    fn groups_are_kind_homogeneous() {
        for g in all_groups() {
            let kinds: BTreeSet<TraitKind> = g.members().values().map(|t| t.kind()).collect();
            assert!(
                kinds.len() <= 1,
                "group {} mixes trait kinds {kinds:?}",
                g.id()
            );
        }
    }

    #[test]
    fn canonical_partitions_cover_each_kind_exactly() {
        for kind in TraitKind::ALL {
            let all_of_kind: BTreeSet<&str> = all_traits()
                .filter(|t| t.kind() == kind)
                .map(|t| t.id())
                .collect();

            let canonical: Vec<&Group> = all_groups()
                .filter(|g| {
                    g.is_canonical() && g.members().values().all(|t| t.kind() == kind)
                })
                .collect();

            // Pairwise disjoint.
            for (i, a) in canonical.iter().enumerate() {
                for b in &canonical[i + 1..] {
                    assert!(
                        a.isdisjoint(*b).unwrap(),
                        "canonical groups {} and {} overlap",
                        a.id(),
                        b.id()
                    );
                }
            }

            // Union equals the full trait set of the kind.
            let covered: BTreeSet<&str> = canonical
                .iter()
                .flat_map(|g| g.member_ids())
                .collect();
            assert_eq!(
                covered, all_of_kind,
                "canonical partition for {kind} does not cover its traits"
            );
        }
    }

    #[test]
    fn platform_catalog_has_forty_two_traits() {
        assert_eq!(platforms::traits().len(), 42);
        assert_eq!(platforms::ALL_PLATFORMS.len(), 42);
    }

    #[test]
    fn convenience_groups_are_consistent() {
        use super::platforms::{ALL_PLATFORMS, ANY_UNIX, BSD, BSD_WITHOUT_MACOS, LINUX, LINUX_LIKE};

        assert!(BSD_WITHOUT_MACOS.issubset(&*BSD).unwrap());
        assert!(!BSD_WITHOUT_MACOS.contains("macos"));
        assert_eq!(BSD_WITHOUT_MACOS.len(), BSD.len() - 1);

        assert!(ANY_UNIX.issubset(&*ALL_PLATFORMS).unwrap());
        assert!(!ANY_UNIX.contains("windows"));
        assert_eq!(ANY_UNIX.len(), ALL_PLATFORMS.len() - 1);

        assert!(LINUX.issubset(&*LINUX_LIKE).unwrap());
        assert!(LINUX_LIKE.contains("cygwin"));
    }
}
