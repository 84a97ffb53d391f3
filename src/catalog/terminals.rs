//! Terminal emulators and multiplexers.

use std::sync::LazyLock;

use super::catalog_traits;
use crate::group::Group;
use crate::members;
use crate::traits::{Trait, TraitKind};

// ============================================================================
// Traits
// ============================================================================

catalog_traits! { TraitKind::Terminal =>
    ALACRITTY => ("alacritty", "Alacritty", "🚀", "https://alacritty.org"),
    APPLE_TERMINAL => ("apple_terminal", "Apple Terminal", "🍎", "https://support.apple.com/guide/terminal"),
    GHOSTTY => ("ghostty", "Ghostty", "👻", "https://ghostty.org"),
    GNOME_TERMINAL => ("gnome_terminal", "GNOME Terminal", "👣", "https://help.gnome.org/users/gnome-terminal"),
    HYPER => ("hyper", "Hyper", "⚡", "https://hyper.is"),
    ITERM2 => ("iterm2", "iTerm2", "🮖", "https://iterm2.com"),
    KITTY => ("kitty", "kitty", "🐱", "https://sw.kovidgoyal.net/kitty"),
    KONSOLE => ("konsole", "Konsole", "🄺", "https://konsole.kde.org"),
    SCREEN => ("screen", "GNU Screen", "📺", "https://gnu.org/software/screen"),
    TMUX => ("tmux", "tmux", "🪟", "https://github.com/tmux/tmux"),
    VSCODE_TERMINAL => ("vscode_terminal", "VS Code Terminal", "🆚", "https://code.visualstudio.com/docs/terminal/basics"),
    WEZTERM => ("wezterm", "WezTerm", "🇼", "https://wezterm.org"),
    WINDOWS_TERMINAL => ("windows_terminal", "Windows Terminal", "🪟", "https://learn.microsoft.com/windows/terminal"),
    XTERM => ("xterm", "xterm", "🇽", "https://invisible-island.net/xterm"),
}

/// All terminal traits, in id order.
pub fn traits() -> Vec<&'static Trait> {
    vec![
        &*ALACRITTY,
        &*APPLE_TERMINAL,
        &*GHOSTTY,
        &*GNOME_TERMINAL,
        &*HYPER,
        &*ITERM2,
        &*KITTY,
        &*KONSOLE,
        &*SCREEN,
        &*TMUX,
        &*VSCODE_TERMINAL,
        &*WEZTERM,
        &*WINDOWS_TERMINAL,
        &*XTERM,
    ]
}

// ============================================================================
// Groups
// ============================================================================

/// Every known terminal (the canonical partition for the kind).
pub static ALL_TERMINALS: LazyLock<Group> = LazyLock::new(|| {
    Group::new_canonical("all_terminals", "All terminals", "🖥️", traits())
        .expect("catalog group definition is valid")
});

/// Terminal multiplexers, which layer over another emulator.
pub static MULTIPLEXERS: LazyLock<Group> = LazyLock::new(|| {
    Group::new(
        "multiplexers",
        "Terminal multiplexers",
        "🮻",
        members![&*SCREEN, &*TMUX],
    )
    .expect("catalog group definition is valid")
});

/// All terminal groups, canonical first.
pub fn groups() -> Vec<&'static Group> {
    vec![&*ALL_TERMINALS, &*MULTIPLEXERS]
}
