//! AI coding agents.
//!
//! Detection rests on env-var markers the agents set in subprocesses; see
//! [`crate::detect`].

use std::sync::LazyLock;

use super::catalog_traits;
use crate::group::Group;
use crate::traits::{Trait, TraitKind};

// ============================================================================
// Traits
// ============================================================================

catalog_traits! { TraitKind::Agent =>
    AIDER => ("aider", "Aider", "🤝", "https://aider.chat"),
    CLAUDE_CODE => ("claude_code", "Claude Code", "✳️", "https://claude.com/product/claude-code"),
    CODEX => ("codex", "Codex CLI", "🄾", "https://developers.openai.com/codex"),
    COPILOT => ("copilot", "GitHub Copilot", "🧑‍✈️", "https://github.com/features/copilot"),
    CURSOR => ("cursor", "Cursor", "▋", "https://cursor.com"),
    GEMINI_CLI => ("gemini_cli", "Gemini CLI", "♊", "https://github.com/google-gemini/gemini-cli"),
    GOOSE => ("goose", "Goose", "🪿", "https://block.github.io/goose"),
    WINDSURF => ("windsurf", "Windsurf", "🏄", "https://windsurf.com"),
}

/// All agent traits, in id order.
pub fn traits() -> Vec<&'static Trait> {
    vec![
        &*AIDER,
        &*CLAUDE_CODE,
        &*CODEX,
        &*COPILOT,
        &*CURSOR,
        &*GEMINI_CLI,
        &*GOOSE,
        &*WINDSURF,
    ]
}

// ============================================================================
// Groups
// ============================================================================

/// Every known coding agent (the canonical partition for the kind).
pub static ALL_AGENTS: LazyLock<Group> = LazyLock::new(|| {
    Group::new_canonical("all_agents", "All coding agents", "🤖", traits())
        .expect("catalog group definition is valid")
});

/// All agent groups.
pub fn groups() -> Vec<&'static Group> {
    vec![&*ALL_AGENTS]
}
