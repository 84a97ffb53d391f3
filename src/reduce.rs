//! Reduction engine: minimal-cover search over a pool of named groups.
//!
//! Given an arbitrary nested collection of traits and groups, [`reduce`]
//! finds the smallest set of reference-pool groups plus leftover standalone
//! traits whose combined membership exactly equals the input's flattened
//! trait set.
//!
//! ## Cost
//!
//! The search enumerates k-combinations of qualifying candidate groups for
//! increasing k, so the worst case is combinatorial (`2^|candidates|`
//! combinations before early termination). In practice the candidate pool is
//! small (bounded by the number of defined groups, typically under 50) and
//! the early exit fires as soon as a combination size exceeds the best cover
//! found. This is a known scaling limit of the algorithm, not an oversight.

use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;

use crate::error::TraitError;
use crate::group::{resolve_members, Group, Member};
use crate::registry;
use crate::traits::Trait;

// ============================================================================
// Reduction Result
// ============================================================================

/// One element of a reduction cover: a pool group, or a trait no pool group
/// accounts for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reduction {
    /// A group from the reference pool.
    Group(Group),
    /// A standalone trait left ungrouped.
    Trait(Trait),
}

impl Reduction {
    /// Id of the underlying group or trait.
    pub fn id(&self) -> &str {
        match self {
            Reduction::Group(g) => g.id(),
            Reduction::Trait(t) => t.id(),
        }
    }

    /// Number of traits this element contributes to the cover.
    pub fn weight(&self) -> usize {
        match self {
            Reduction::Group(g) => g.len(),
            Reduction::Trait(_) => 1,
        }
    }
}

impl PartialOrd for Reduction {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Reduction {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Traits sort before groups at equal ids; ids are unique across the
        // registry so this mostly orders by id.
        let rank = |r: &Reduction| match r {
            Reduction::Trait(_) => 0u8,
            Reduction::Group(_) => 1u8,
        };
        self.id()
            .cmp(other.id())
            .then_with(|| rank(self).cmp(&rank(other)))
            .then_with(|| match (self, other) {
                (Reduction::Trait(a), Reduction::Trait(b)) => a.cmp(b),
                (Reduction::Group(a), Reduction::Group(b)) => a.cmp(b),
                _ => std::cmp::Ordering::Equal,
            })
    }
}

impl std::fmt::Display for Reduction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reduction::Group(g) => write!(f, "{}", g.id()),
            Reduction::Trait(t) => write!(f, "{}", t.id()),
        }
    }
}

/// Render a cover as a stable, human-readable set literal.
fn render_cover(cover: &BTreeSet<Reduction>) -> String {
    format!("{{{}}}", cover.iter().map(Reduction::to_string).join(", "))
}

// ============================================================================
// Reduce
// ============================================================================

/// Reduce a nested collection of traits/groups to the minimal-cardinality
/// cover drawn from `pool` (defaulting to every registry group).
///
/// Returns the smallest set of pool groups plus leftover traits whose
/// flattened membership exactly equals the input's. Pool groups are only
/// combined when pairwise disjoint. When several covers tie at the minimal
/// size the input is ill-defined for this pool and the call fails with
/// [`TraitError::AmbiguousReduction`] enumerating every tie; when no pool
/// group fits at all, the flattened traits are returned ungrouped.
pub fn reduce<I>(items: I, pool: Option<&[Group]>) -> Result<BTreeSet<Reduction>, TraitError>
where
    I: IntoIterator,
    I::Item: Into<Member>,
{
    let traits = resolve_members(items)?;

    let pool: Vec<&Group> = match pool {
        Some(groups) => groups.iter().collect(),
        None => registry::registry().all_groups().collect(),
    };

    Ok(search(&traits, &pool)?.unwrap_or_else(|| {
        // No covering combination: the trivial ungrouped answer.
        traits.into_values().map(Reduction::Trait).collect()
    }))
}

/// Inner search: `Ok(None)` when no candidate combination covers anything.
fn search(
    traits: &BTreeMap<String, Trait>,
    pool: &[&Group],
) -> Result<Option<BTreeSet<Reduction>>, TraitError> {
    let target_ids: BTreeSet<&str> = traits.keys().map(String::as_str).collect();

    // Candidates: non-empty pool groups entirely contained in the target.
    let mut candidates: Vec<&Group> = pool
        .iter()
        .copied()
        .filter(|g| !g.is_empty() && g.member_ids().is_subset(&target_ids))
        .collect();

    // Deterministic order: biggest first, id as tie-break.
    candidates.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.id().cmp(b.id())));

    tracing::debug!(
        target_size = target_ids.len(),
        candidates = candidates.len(),
        "reduction search start"
    );

    let mut best_size: Option<usize> = None;
    let mut best_covers: Vec<BTreeSet<Reduction>> = Vec::new();

    for k in 1..=candidates.len() {
        // A combination of k groups yields a cover of at least k elements,
        // so once k exceeds the best size no larger k can win.
        if best_size.is_some_and(|best| k > best) {
            break;
        }

        for combination in candidates.iter().combinations(k) {
            if !pairwise_disjoint(&combination) {
                continue;
            }

            let covered: BTreeSet<&str> = combination
                .iter()
                .flat_map(|g| g.member_ids())
                .collect();

            let cover: BTreeSet<Reduction> = traits
                .iter()
                .filter(|(id, _)| !covered.contains(id.as_str()))
                .map(|(_, t)| Reduction::Trait(t.clone()))
                .chain(combination.iter().map(|g| Reduction::Group((**g).clone())))
                .collect();

            let size = cover.len();
            match best_size {
                Some(best) if size > best => {}
                Some(best) if size == best => {
                    if !best_covers.contains(&cover) {
                        best_covers.push(cover);
                    }
                }
                _ => {
                    tracing::debug!(k, size, "new best cover");
                    best_size = Some(size);
                    best_covers = vec![cover];
                }
            }
        }
    }

    match best_covers.len() {
        0 => Ok(None),
        1 => Ok(Some(best_covers.remove(0))),
        _ => {
            let mut solutions: Vec<String> = best_covers.iter().map(render_cover).collect();
            solutions.sort();
            Err(TraitError::AmbiguousReduction { solutions })
        }
    }
}

/// Whether every pair in a candidate combination is disjoint. Overlapping
/// groups are never combined: that would double-represent a trait.
fn pairwise_disjoint(groups: &[&&Group]) -> bool {
    for (i, a) in groups.iter().enumerate() {
        for b in &groups[i + 1..] {
            let b_ids = b.member_ids();
            if a.members().keys().any(|id| b_ids.contains(id.as_str())) {
                return false;
            }
        }
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
