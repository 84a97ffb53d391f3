//! Group model: deduplicated, id-sorted trait collections with set algebra.
//!
//! A [`Group`] owns (by value) zero or more [`Trait`]s, keyed and sorted by
//! trait id. Groups are values: two groups with identical id/name/icon and
//! members compare equal, regardless of how they were built.
//!
//! ## Nested references
//!
//! Group construction and every algebra operation accept [`Member`] values,
//! a closed recursive enum covering everything callers pass as a member
//! reference: a trait, a group (contributing its members), a string id
//! (resolved against the global registry), or an arbitrarily nested list of
//! the above. Resolution is strict: unknown ids fail with the full list of
//! unrecognized ids, and value-distinct traits colliding on one id fail with
//! the colliding ids.
//!
//! ## Metadata inheritance
//!
//! Algebra operations (`union`, `intersection`, `difference`,
//! `symmetric_difference`) produce a new group inheriting id/name/icon from
//! the **left-hand operand only**; right-hand metadata is discarded. This
//! asymmetry is deliberate and load-bearing: derived groups keep a stable
//! identity for display while their membership changes.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use serde::{Deserialize, Serialize};

use crate::error::TraitError;
use crate::registry;
use crate::traits::Trait;

// ============================================================================
// Nested Member References
// ============================================================================

/// A reference to group members: one trait, one group, one registry id, or
/// a nested list of further references.
#[derive(Debug, Clone)]
pub enum Member {
    /// A trait, contributing itself.
    Trait(Trait),
    /// A group, contributing its members.
    Group(Group),
    /// A string id, resolved against the global registry (a trait id yields
    /// that trait; a group id yields that group's members).
    Id(String),
    /// A nested list, flattened recursively.
    Many(Vec<Member>),
}

impl From<Trait> for Member {
    fn from(t: Trait) -> Self {
        Member::Trait(t)
    }
}

impl From<&Trait> for Member {
    fn from(t: &Trait) -> Self {
        Member::Trait(t.clone())
    }
}

impl From<Group> for Member {
    fn from(g: Group) -> Self {
        Member::Group(g)
    }
}

impl From<&Group> for Member {
    fn from(g: &Group) -> Self {
        Member::Group(g.clone())
    }
}

impl From<&str> for Member {
    fn from(id: &str) -> Self {
        Member::Id(id.to_string())
    }
}

impl From<String> for Member {
    fn from(id: String) -> Self {
        Member::Id(id)
    }
}

impl From<Vec<Member>> for Member {
    fn from(members: Vec<Member>) -> Self {
        Member::Many(members)
    }
}

/// Build a `Vec<Member>` from a comma-separated list of anything convertible
/// into [`Member`]. Convenience for catalog definitions and tests.
#[macro_export]
macro_rules! members {
    ($($item:expr),* $(,)?) => {
        vec![$($crate::group::Member::from($item)),*]
    };
}

/// Recursively flatten nested member references into an id-sorted,
/// deduplicated trait map.
///
/// Duplicate ids are collapsed when the traits are value-identical; a
/// value-distinct collision is a [`TraitError::ConflictingMembers`]. Unknown
/// string ids accumulate into a single [`TraitError::UnknownIds`] listing
/// every unrecognized id.
pub fn resolve_members<I>(refs: I) -> Result<BTreeMap<String, Trait>, TraitError>
where
    I: IntoIterator,
    I::Item: Into<Member>,
{
    let mut resolved = BTreeMap::new();
    let mut conflicts = BTreeSet::new();
    let mut unknown = BTreeSet::new();

    for member in refs {
        flatten_into(&member.into(), &mut resolved, &mut conflicts, &mut unknown);
    }

    if !unknown.is_empty() {
        return Err(TraitError::unknown_ids(unknown));
    }
    if !conflicts.is_empty() {
        return Err(TraitError::ConflictingMembers {
            ids: conflicts.into_iter().collect(),
        });
    }
    Ok(resolved)
}

fn flatten_into(
    member: &Member,
    resolved: &mut BTreeMap<String, Trait>,
    conflicts: &mut BTreeSet<String>,
    unknown: &mut BTreeSet<String>,
) {
    match member {
        Member::Trait(t) => insert_trait(t, resolved, conflicts),
        Member::Group(g) => {
            for t in g.members().values() {
                insert_trait(t, resolved, conflicts);
            }
        }
        Member::Id(id) => {
            let reg = registry::registry();
            if let Some(t) = reg.trait_by_id(id) {
                insert_trait(t, resolved, conflicts);
            } else if let Some(g) = reg.group_by_id(id) {
                for t in g.members().values() {
                    insert_trait(t, resolved, conflicts);
                }
            } else {
                unknown.insert(id.clone());
            }
        }
        Member::Many(nested) => {
            for inner in nested {
                flatten_into(inner, resolved, conflicts, unknown);
            }
        }
    }
}

fn insert_trait(
    t: &Trait,
    resolved: &mut BTreeMap<String, Trait>,
    conflicts: &mut BTreeSet<String>,
) {
    match resolved.get(t.id()) {
        Some(existing) if existing != t => {
            conflicts.insert(t.id().to_string());
        }
        Some(_) => {}
        None => {
            resolved.insert(t.id().to_string(), t.clone());
        }
    }
}

// ============================================================================
// Group
// ============================================================================

/// A named, deduplicated, id-sorted collection of traits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GroupData")]
pub struct Group {
    id: String,
    name: String,
    icon: String,
    /// Member of the non-overlapping partition for its trait kind.
    ///
    /// Bookkeeping only: excluded from equality and ordering. Never true on
    /// groups produced by algebra operations.
    canonical: bool,
    members: BTreeMap<String, Trait>,
}

/// Wire shape for [`Group`] deserialization. Rebuilt through [`Group::build`]
/// so metadata is validated and members are re-keyed by their own trait ids,
/// regardless of what keys the wire map carried.
#[derive(Deserialize)]
struct GroupData {
    id: String,
    name: String,
    icon: String,
    #[serde(default)]
    canonical: bool,
    members: BTreeMap<String, Trait>,
}

impl TryFrom<GroupData> for Group {
    type Error = TraitError;

    fn try_from(raw: GroupData) -> Result<Self, TraitError> {
        Group::build(raw.id, raw.name, raw.icon, raw.canonical, raw.members.into_values())
    }
}

impl Group {
    /// Create a validated, non-canonical group from nested member
    /// references.
    pub fn new<I>(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        members: I,
    ) -> Result<Self, TraitError>
    where
        I: IntoIterator,
        I::Item: Into<Member>,
    {
        Self::build(id, name, icon, false, members)
    }

    /// Create a validated group flagged as part of its kind's canonical
    /// partition.
    pub fn new_canonical<I>(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        members: I,
    ) -> Result<Self, TraitError>
    where
        I: IntoIterator,
        I::Item: Into<Member>,
    {
        Self::build(id, name, icon, true, members)
    }

    fn build<I>(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        canonical: bool,
        members: I,
    ) -> Result<Self, TraitError>
    where
        I: IntoIterator,
        I::Item: Into<Member>,
    {
        let id = id.into();
        let name = name.into();
        let icon = icon.into();

        if id.is_empty() {
            return Err(TraitError::empty_field("id", id));
        }
        if name.is_empty() {
            return Err(TraitError::empty_field("name", id));
        }
        if icon.is_empty() {
            return Err(TraitError::empty_field("icon", id));
        }

        Ok(Group {
            id,
            name,
            icon,
            canonical,
            members: resolve_members(members)?,
        })
    }

    /// Internal constructor for algebra results: metadata from `self`,
    /// members already resolved. Always non-canonical.
    fn derived(&self, members: BTreeMap<String, Trait>) -> Group {
        Group {
            id: self.id.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
            canonical: false,
            members,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Group id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display glyph.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Whether this group is part of its kind's canonical partition.
    pub fn is_canonical(&self) -> bool {
        self.canonical
    }

    /// Members keyed and sorted by trait id.
    pub fn members(&self) -> &BTreeMap<String, Trait> {
        &self.members
    }

    /// The derived set of member ids.
    pub fn member_ids(&self) -> BTreeSet<&str> {
        self.members.keys().map(String::as_str).collect()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether a trait id is a member.
    pub fn contains(&self, id: &str) -> bool {
        self.members.contains_key(id)
    }

    /// Members matching the running environment.
    pub fn current_members(&self) -> Vec<&Trait> {
        self.members.values().filter(|t| t.current()).collect()
    }

    /// Whether any member matches the running environment.
    pub fn current(&self) -> bool {
        self.members.values().any(|t| t.current())
    }

    // ------------------------------------------------------------------
    // Copy
    // ------------------------------------------------------------------

    /// Return a new group with any provided fields overridden and the rest
    /// copied from `self`.
    ///
    /// Overriding `members` clears the canonical flag: a group with edited
    /// membership cannot claim a partition slot.
    pub fn copy(
        &self,
        id: Option<&str>,
        name: Option<&str>,
        icon: Option<&str>,
        members: Option<Vec<Member>>,
    ) -> Result<Group, TraitError> {
        let (canonical, members) = match members {
            Some(refs) => (false, resolve_members(refs)?),
            None => (self.canonical, self.members.clone()),
        };
        Ok(Group {
            id: id.unwrap_or(&self.id).to_string(),
            name: name.unwrap_or(&self.name).to_string(),
            icon: icon.unwrap_or(&self.icon).to_string(),
            canonical,
            members,
        })
    }

    // ------------------------------------------------------------------
    // Set algebra
    // ------------------------------------------------------------------

    /// Members of `self` plus the flattened members of every operand.
    ///
    /// The result inherits id/name/icon from `self`.
    pub fn union<I>(&self, others: I) -> Result<Group, TraitError>
    where
        I: IntoIterator,
        I::Item: Into<Member>,
    {
        let mut combined: Vec<Member> = vec![Member::Group(self.clone())];
        combined.extend(others.into_iter().map(Into::into));
        Ok(self.derived(resolve_members(combined)?))
    }

    /// Members common to `self` and **every** operand.
    ///
    /// Each operand is flattened separately, so `intersection([])` returns
    /// a copy of `self` while a single empty operand yields the empty group.
    /// The result inherits id/name/icon from `self`.
    pub fn intersection<I>(&self, others: I) -> Result<Group, TraitError>
    where
        I: IntoIterator,
        I::Item: Into<Member>,
    {
        let mut members = self.members.clone();
        for other in others {
            let operand = resolve_members([other.into()])?;
            members.retain(|id, _| operand.contains_key(id));
        }
        Ok(self.derived(members))
    }

    /// Members of `self` with each operand's flattened members successively
    /// removed. The result inherits id/name/icon from `self`.
    pub fn difference<I>(&self, others: I) -> Result<Group, TraitError>
    where
        I: IntoIterator,
        I::Item: Into<Member>,
    {
        let mut members = self.members.clone();
        for other in others {
            let operand = resolve_members([other.into()])?;
            members.retain(|id, _| !operand.contains_key(id));
        }
        Ok(self.derived(members))
    }

    /// Members in exactly one of `self` and the single flattened operand.
    /// The result inherits id/name/icon from `self`.
    pub fn symmetric_difference(&self, other: impl Into<Member>) -> Result<Group, TraitError> {
        let operand = resolve_members([other.into()])?;
        let mut members: BTreeMap<String, Trait> = self
            .members
            .iter()
            .filter(|(id, _)| !operand.contains_key(*id))
            .map(|(id, t)| (id.clone(), t.clone()))
            .collect();
        for (id, t) in operand {
            if !self.members.contains_key(&id) {
                members.insert(id, t);
            }
        }
        Ok(self.derived(members))
    }

    // ------------------------------------------------------------------
    // Set relations
    // ------------------------------------------------------------------

    /// Whether every member of `self` is in the flattened operand.
    ///
    /// The empty group is a subset of everything; a non-empty group is not
    /// a subset of the empty operand.
    pub fn issubset(&self, other: impl Into<Member>) -> Result<bool, TraitError> {
        let operand = resolve_members([other.into()])?;
        Ok(self.members.keys().all(|id| operand.contains_key(id)))
    }

    /// Whether every member of the flattened operand is in `self`.
    ///
    /// Every group is a superset of the empty operand.
    pub fn issuperset(&self, other: impl Into<Member>) -> Result<bool, TraitError> {
        let operand = resolve_members([other.into()])?;
        Ok(operand.keys().all(|id| self.members.contains_key(id)))
    }

    /// Whether `self` and the flattened operand share no member.
    pub fn isdisjoint(&self, other: impl Into<Member>) -> Result<bool, TraitError> {
        let operand = resolve_members([other.into()])?;
        Ok(!self.members.keys().any(|id| operand.contains_key(id)))
    }

    /// Whether one side's member set contains the other's entirely.
    pub fn fullyintersects(&self, other: impl Into<Member>) -> Result<bool, TraitError> {
        let operand = resolve_members([other.into()])?;
        Ok(self.members.keys().all(|id| operand.contains_key(id))
            || operand.keys().all(|id| self.members.contains_key(id)))
    }

    /// Comparison key for deterministic ordering. The canonical flag is
    /// bookkeeping and stays out of comparisons, matching equality.
    fn sort_key(&self) -> (&str, &str, &str, &BTreeMap<String, Trait>) {
        (&self.id, &self.name, &self.icon, &self.members)
    }
}

// Equality is by value (id, name, icon, members); `canonical` is excluded.
impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Group {}

impl std::hash::Hash for Group {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.icon.hash(state);
        self.members.hash(state);
    }
}

impl PartialOrd for Group {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Group {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({} traits)", self.icon, self.id, self.len())
    }
}

// ----------------------------------------------------------------------
// Operator sugar (single-operand forms). Two individually valid groups
// can still hold value-distinct traits sharing an id; the operators
// panic on that conflict, where the named methods return
// `ConflictingMembers`. Use the methods when the operands come from
// untrusted or mixed trait universes.
// ----------------------------------------------------------------------

impl BitOr for &Group {
    type Output = Group;

    /// Panics if the operands hold value-distinct traits sharing an id;
    /// use [`Group::union`] to handle that case as an error.
    fn bitor(self, rhs: &Group) -> Group {
        self.union([rhs])
            .expect("operand groups hold value-distinct traits sharing an id")
    }
}

impl BitAnd for &Group {
    type Output = Group;

    /// Panics if the operands hold value-distinct traits sharing an id;
    /// use [`Group::intersection`] to handle that case as an error.
    fn bitand(self, rhs: &Group) -> Group {
        self.intersection([rhs])
            .expect("operand groups hold value-distinct traits sharing an id")
    }
}

impl Sub for &Group {
    type Output = Group;

    /// Panics if the operands hold value-distinct traits sharing an id;
    /// use [`Group::difference`] to handle that case as an error.
    fn sub(self, rhs: &Group) -> Group {
        self.difference([rhs])
            .expect("operand groups hold value-distinct traits sharing an id")
    }
}

impl BitXor for &Group {
    type Output = Group;

    /// Panics if the operands hold value-distinct traits sharing an id;
    /// use [`Group::symmetric_difference`] to handle that case as an error.
    fn bitxor(self, rhs: &Group) -> Group {
        self.symmetric_difference(rhs)
            .expect("operand groups hold value-distinct traits sharing an id")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TraitKind;

    fn t(id: &str) -> Trait {
        Trait::new(
            TraitKind::Platform,
            id,
            id.to_uppercase(),
            "dot",
            format!("https://example.com/{id}"),
        )
        .unwrap()
    }

    fn g(id: &str, members: &[&str]) -> Group {
        Group::new(
            id,
            id.to_uppercase(),
            "box",
            members.iter().map(|m| Member::Trait(t(m))),
        )
        .unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn members_are_sorted_and_deduplicated() {
            let group = g("a", &["zeta", "alpha", "zeta", "mid"]);
            assert_eq!(group.len(), 3);
            let ids: Vec<&str> = group.members().keys().map(String::as_str).collect();
            assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
        }

        #[test]
        fn duplicate_identical_traits_collapse_to_one() {
            let tr = t("solo");
            let group = Group::new("a", "A", "box", [&tr, &tr]).unwrap();
            assert_eq!(group.len(), 1);
        }

        #[test]
        fn value_distinct_collision_fails_with_ids() {
            let a = t("dup");
            let b = Trait::new(
                TraitKind::Platform,
                "dup",
                "Different",
                "dot",
                "https://example.com/dup",
            )
            .unwrap();
            let err = Group::new("a", "A", "box", [a, b]).unwrap_err();
            assert_eq!(
                err,
                TraitError::ConflictingMembers {
                    ids: vec!["dup".to_string()],
                }
            );
        }

        #[test]
        fn empty_metadata_fails() {
            let err = Group::new("", "A", "box", Vec::<Member>::new()).unwrap_err();
            assert!(matches!(err, TraitError::EmptyField { field: "id", .. }));
            let err = Group::new("a", "A", "", Vec::<Member>::new()).unwrap_err();
            assert!(matches!(err, TraitError::EmptyField { field: "icon", .. }));
        }

        #[test]
        fn nested_references_flatten_recursively() {
            let inner = g("inner", &["one", "two"]);
            let group = Group::new(
                "outer",
                "Outer",
                "box",
                [Member::Many(vec![
                    Member::Group(inner),
                    Member::Many(vec![Member::Trait(t("three"))]),
                ])],
            )
            .unwrap();
            assert_eq!(group.len(), 3);
        }

        #[test]
        fn member_ids_matches_members() {
            let group = g("a", &["x", "y"]);
            assert_eq!(group.member_ids().len(), group.len());
        }
    }

    mod algebra {
        use super::*;

        #[test]
        fn union_combines_and_inherits_lhs_metadata() {
            let a = g("a", &["one", "two"]);
            let b = g("b", &["two", "three"]);
            let u = a.union([&b]).unwrap();
            assert_eq!(u.id(), "a");
            assert_ne!(u.id(), b.id());
            assert_eq!(u.len(), 3);
            assert!(u.issuperset(&a).unwrap());
            assert!(u.issuperset(&b).unwrap());
        }

        #[test]
        fn union_with_no_operands_is_identity() {
            let a = g("a", &["one"]);
            assert_eq!(a.union(Vec::<Member>::new()).unwrap(), a);
        }

        #[test]
        fn intersection_is_over_all_operands() {
            let a = g("a", &["one", "two", "three"]);
            let b = g("b", &["two", "three"]);
            let c = g("c", &["three", "four"]);
            let i = a.intersection(members![&b, &c]).unwrap();
            assert_eq!(i.len(), 1);
            assert!(i.contains("three"));
            assert!(i.issubset(&a).unwrap());
            assert!(i.issubset(&b).unwrap());
        }

        #[test]
        fn intersection_with_no_operands_copies_self() {
            let a = g("a", &["one", "two"]);
            assert_eq!(a.intersection(Vec::<Member>::new()).unwrap(), a);
        }

        #[test]
        fn intersection_with_one_empty_operand_is_empty() {
            let a = g("a", &["one", "two"]);
            let empty = g("empty", &[]);
            assert!(a.intersection([&empty]).unwrap().is_empty());
        }

        #[test]
        fn difference_subtracts_successively() {
            let a = g("a", &["one", "two", "three"]);
            let b = g("b", &["one"]);
            let c = g("c", &["three"]);
            let d = a.difference(members![&b, &c]).unwrap();
            assert_eq!(d.len(), 1);
            assert!(d.contains("two"));
        }

        #[test]
        fn difference_with_self_is_empty() {
            let a = g("a", &["one", "two"]);
            assert!(a.difference([&a]).unwrap().is_empty());
        }

        #[test]
        fn symmetric_difference_keeps_exclusive_members() {
            let a = g("a", &["one", "two"]);
            let b = g("b", &["two", "three"]);
            let s = a.symmetric_difference(&b).unwrap();
            assert_eq!(s.member_ids(), ["one", "three"].into_iter().collect());
        }

        #[test]
        fn operators_match_methods() {
            let a = g("a", &["one", "two"]);
            let b = g("b", &["two", "three"]);
            assert_eq!(&a | &b, a.union([&b]).unwrap());
            assert_eq!(&a & &b, a.intersection([&b]).unwrap());
            assert_eq!(&a - &b, a.difference([&b]).unwrap());
            assert_eq!(&a ^ &b, a.symmetric_difference(&b).unwrap());
            assert!((&a ^ &a).is_empty());
        }

        #[test]
        #[should_panic(expected = "value-distinct traits sharing an id")]
        fn operator_union_panics_on_conflicting_member_ids() {
            // Same id, different name: union() reports ConflictingMembers,
            // the operator form has no Result to return and panics.
            let a = Group::new("a", "A", "box", [t("dup")]).unwrap();
            let conflicting = Trait::new(
                TraitKind::Platform,
                "dup",
                "Different",
                "dot",
                "https://example.com/dup",
            )
            .unwrap();
            let b = Group::new("b", "B", "box", [conflicting]).unwrap();
            let _ = &a | &b;
        }

        #[test]
        fn derived_groups_are_never_canonical() {
            let a = Group::new_canonical("a", "A", "box", [t("one")]).unwrap();
            let b = g("b", &["two"]);
            assert!(a.is_canonical());
            assert!(!a.union([&b]).unwrap().is_canonical());
            assert!(!a.intersection([&b]).unwrap().is_canonical());
        }
    }

    mod relations {
        use super::*;

        #[test]
        fn subset_and_superset_are_reflexive() {
            let a = g("a", &["one", "two"]);
            assert!(a.issubset(&a).unwrap());
            assert!(a.issuperset(&a).unwrap());
            assert!(a.fullyintersects(&a).unwrap());
        }

        #[test]
        fn every_group_is_superset_of_empty() {
            let a = g("a", &["one"]);
            let empty = g("empty", &[]);
            assert!(a.issuperset(&empty).unwrap());
            assert!(!a.issubset(&empty).unwrap());
            assert!(empty.issubset(&a).unwrap());
            assert!(empty.issubset(&empty).unwrap());
        }

        #[test]
        fn disjoint_groups_are_detected() {
            let a = g("a", &["one"]);
            let b = g("b", &["two"]);
            let c = g("c", &["one", "three"]);
            assert!(a.isdisjoint(&b).unwrap());
            assert!(!a.isdisjoint(&c).unwrap());
        }

        #[test]
        fn fullyintersects_works_in_both_directions() {
            let big = g("big", &["one", "two", "three"]);
            let small = g("small", &["two", "three"]);
            let other = g("other", &["three", "four"]);
            assert!(big.fullyintersects(&small).unwrap());
            assert!(small.fullyintersects(&big).unwrap());
            assert!(!big.fullyintersects(&other).unwrap());
        }
    }

    mod copy {
        use super::*;

        #[test]
        fn copy_without_overrides_is_equal() {
            let a = g("a", &["one", "two"]);
            assert_eq!(a.copy(None, None, None, None).unwrap(), a);
        }

        #[test]
        fn copy_overrides_selected_fields() {
            let a = g("a", &["one", "two"]);
            let c = a.copy(Some("b"), None, Some("star"), None).unwrap();
            assert_eq!(c.id(), "b");
            assert_eq!(c.name(), a.name());
            assert_eq!(c.icon(), "star");
            assert_eq!(c.members(), a.members());
        }

        #[test]
        fn copy_preserves_canonical_unless_members_change() {
            let a = Group::new_canonical("a", "A", "box", [t("one")]).unwrap();
            assert!(a.copy(None, None, None, None).unwrap().is_canonical());
            let edited = a
                .copy(None, None, None, Some(members![t("two")]))
                .unwrap();
            assert!(!edited.is_canonical());
        }
    }

    mod deserialization {
        use super::*;

        #[test]
        fn round_trips_through_json() {
            let original = Group::new_canonical("a", "A", "box", [t("one"), t("two")]).unwrap();
            let json = serde_json::to_string(&original).unwrap();
            let back: Group = serde_json::from_str(&json).unwrap();
            assert_eq!(back, original);
            assert!(back.is_canonical());
        }

        #[test]
        fn mismatched_member_keys_are_rekeyed_by_trait_id() {
            // The wire map's keys carry no authority: members are re-keyed
            // by their own ids on the way in.
            let json = r#"{
                "id": "a", "name": "A", "icon": "box", "canonical": false,
                "members": {
                    "wrong_key": {
                        "kind": "platform", "id": "real_id", "name": "Real",
                        "icon": "dot", "url": "https://example.com/real"
                    }
                }
            }"#;
            let group: Group = serde_json::from_str(json).unwrap();
            assert!(group.contains("real_id"));
            assert!(!group.contains("wrong_key"));
        }

        #[test]
        fn invalid_metadata_is_rejected() {
            let json = r#"{"id": "", "name": "A", "icon": "box", "members": {}}"#;
            assert!(serde_json::from_str::<Group>(json).is_err());
        }
    }

    mod equality {
        use super::*;

        #[test]
        fn groups_are_values() {
            let a = g("same", &["one", "two"]);
            let b = g("same", &["two", "one"]);
            assert_eq!(a, b);
        }

        #[test]
        fn canonical_flag_does_not_affect_equality() {
            let a = Group::new("x", "X", "box", [t("one")]).unwrap();
            let b = Group::new_canonical("x", "X", "box", [t("one")]).unwrap();
            assert_eq!(a, b);
        }

        #[test]
        fn different_members_differ() {
            assert_ne!(g("x", &["one"]), g("x", &["two"]));
        }
    }
}
