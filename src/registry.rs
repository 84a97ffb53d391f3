//! Global id registry: write-once lookup table for trait and group
//! singletons.
//!
//! The registry is populated exactly once, on first access, from the static
//! catalog, and is read-only afterward. It backs string-id resolution in
//! [`crate::group::resolve_members`] and supplies the default reference pool
//! for [`crate::reduce::reduce`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::catalog;
use crate::group::Group;
use crate::traits::{Trait, TraitKind};

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::bootstrap);

/// Access the process-wide registry, building it on first use.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Read-only table of every known trait and group, keyed by id.
#[derive(Debug)]
pub struct Registry {
    traits: BTreeMap<String, Trait>,
    groups: BTreeMap<String, Group>,
}

impl Registry {
    /// Collect the full catalog. Trait and group ids never collide: catalog
    /// tests enforce id uniqueness across both namespaces.
    fn bootstrap() -> Self {
        let traits = catalog::all_traits()
            .map(|t| (t.id().to_string(), t.clone()))
            .collect();
        let groups = catalog::all_groups()
            .map(|g| (g.id().to_string(), g.clone()))
            .collect();
        Registry { traits, groups }
    }

    /// Look up a trait by id.
    pub fn trait_by_id(&self, id: &str) -> Option<&Trait> {
        self.traits.get(id)
    }

    /// Look up a group by id.
    pub fn group_by_id(&self, id: &str) -> Option<&Group> {
        self.groups.get(id)
    }

    /// All known traits, in id order.
    pub fn all_traits(&self) -> impl Iterator<Item = &Trait> {
        self.traits.values()
    }

    /// All known groups, in id order.
    pub fn all_groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    /// All known traits of one kind, in id order.
    pub fn traits_of_kind(&self, kind: TraitKind) -> impl Iterator<Item = &Trait> {
        self.traits.values().filter(move |t| t.kind() == kind)
    }

    /// Canonical groups whose members are all of the given kind, in id
    /// order.
    pub fn canonical_groups_of_kind(&self, kind: TraitKind) -> impl Iterator<Item = &Group> {
        self.groups
            .values()
            .filter(move |g| g.is_canonical() && g.members().values().all(|t| t.kind() == kind))
    }
}

// ============================================================================
// Tests
// ============================================================================
