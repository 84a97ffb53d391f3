//! Command shells.

use std::sync::LazyLock;

use super::catalog_traits;
use crate::group::Group;
use crate::members;
use crate::traits::{Trait, TraitKind};

// ============================================================================
// Traits
// ============================================================================

catalog_traits! { TraitKind::Shell =>
    BASH => ("bash", "Bash", "𝍄", "https://gnu.org/software/bash"),
    CMD => ("cmd", "Command Prompt", "🪟", "https://learn.microsoft.com/windows-server/administration/windows-commands/cmd"),
    CSH => ("csh", "C shell", "🅲", "https://wikipedia.org/wiki/C_shell"),
    DASH => ("dash", "Dash", "💨", "https://git.kernel.org/pub/scm/utils/dash/dash.git"),
    ELVISH => ("elvish", "Elvish", "🧝", "https://elv.sh"),
    FISH => ("fish", "Fish", "🐟", "https://fishshell.com"),
    KSH => ("ksh", "KornShell", "🌽", "https://kornshell.com"),
    NUSHELL => ("nushell", "Nushell", "🐚", "https://nushell.sh"),
    POWERSHELL => ("powershell", "PowerShell", "🔷", "https://learn.microsoft.com/powershell"),
    TCSH => ("tcsh", "TENEX C shell", "🅃", "https://tcsh.org"),
    XONSH => ("xonsh", "Xonsh", "🐍", "https://xon.sh"),
    ZSH => ("zsh", "Zsh", "🆉", "https://zsh.org"),
}

/// All shell traits, in id order.
pub fn traits() -> Vec<&'static Trait> {
    vec![
        &*BASH, &*CMD, &*CSH, &*DASH, &*ELVISH, &*FISH, &*KSH, &*NUSHELL, &*POWERSHELL, &*TCSH,
        &*XONSH, &*ZSH,
    ]
}

// ============================================================================
// Groups
// ============================================================================

/// Every known shell (the canonical partition for the kind).
pub static ALL_SHELLS: LazyLock<Group> = LazyLock::new(|| {
    Group::new_canonical("all_shells", "All shells", "🐚", traits())
        .expect("catalog group definition is valid")
});

/// Shells aiming for POSIX sh compatibility.
pub static POSIX_SHELLS: LazyLock<Group> = LazyLock::new(|| {
    Group::new(
        "posix_shells",
        "POSIX-compatible shells",
        "📜",
        members![&*BASH, &*DASH, &*KSH, &*ZSH],
    )
    .expect("catalog group definition is valid")
});

/// All shell groups, canonical first.
pub fn groups() -> Vec<&'static Group> {
    vec![&*ALL_SHELLS, &*POSIX_SHELLS]
}
