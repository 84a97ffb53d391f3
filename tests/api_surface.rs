//! Compile-only test to verify the public API surface.
//!
//! This file serves as a compile-time contract for the public API: if it
//! fails to compile, the public API has regressed.

// Allow unused imports - this test is about compile-time verification, not
// runtime usage
#![allow(unused_imports)]

// Crate-root re-exports
use envtraits::{
    clear_detection_cache, reduce, registry, resolve_members, set_detection_override, Group,
    Member, Reduction, Registry, Trait, TraitError, TraitKind,
};

// error module
use envtraits::error::{ExitCode, TraitError as ErrorAlias};

// traits module
use envtraits::traits::{Trait as TraitAlias, TraitKind as KindAlias};

// group module
use envtraits::group::{Group as GroupAlias, Member as MemberAlias};

// catalog data tables
use envtraits::catalog::agents::ALL_AGENTS;
use envtraits::catalog::architectures::{ALL_ARCHITECTURES, ARCH_32_BIT, ARCH_64_BIT, X86_64};
use envtraits::catalog::ci::{ALL_CI, GITHUB_ACTIONS};
use envtraits::catalog::platforms::{
    AIX, ALL_PLATFORMS, ANY_UNIX, ANY_WINDOWS, BSD, BSD_WITHOUT_MACOS, LINUX, MACOS, UBUNTU,
    WINDOWS,
};
use envtraits::catalog::shells::{ALL_SHELLS, POSIX_SHELLS};
use envtraits::catalog::terminals::{ALL_TERMINALS, MULTIPLEXERS};
use envtraits::catalog::{all_groups, all_traits};

#[test]
fn api_surface_compiles() {
    // The imports above are the test.
}
