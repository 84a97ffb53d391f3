//! Environment detection: per-trait-id boolean heuristics with a
//! process-wide memo cache.
//!
//! Detection answers one question per trait id: does the running
//! environment match? Answers are computed at most once per process and
//! cached; [`clear_detection_cache`] empties the cache (for tests that mock
//! the environment mid-run) and [`set_detection_override`] forces a value
//! without touching the real environment.
//!
//! Heuristics are deliberately cheap and side-effect free: compile-target
//! constants for architectures and most operating systems, `/etc/os-release`
//! for Linux distributions, and well-known env-var markers for CI systems,
//! shells, terminals, and coding agents. Unknown ids detect as `false`.
//! Duplicate concurrent first computation is tolerated; heuristics are pure
//! reads, so last-insert-wins is safe.

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

static CACHE: LazyLock<RwLock<HashMap<String, bool>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

// ============================================================================
// Cache
// ============================================================================

/// Whether the running environment matches the trait id, memoized.
pub fn current(id: &str) -> bool {
    if let Some(cached) = CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(id)
    {
        return *cached;
    }

    let detected = probe(id);
    tracing::trace!(id, detected, "environment probe");
    CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(id.to_string(), detected);
    detected
}

/// Drop every memoized detection result, including overrides. The next
/// [`current`] call per id re-probes the environment.
pub fn clear_detection_cache() {
    CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}

/// Force a detection result for a trait id, bypassing the probe. Cleared by
/// [`clear_detection_cache`]. Intended for environment mocking in tests.
pub fn set_detection_override(id: &str, value: bool) {
    CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(id.to_string(), value);
}

// ============================================================================
// Probes
// ============================================================================

fn probe(id: &str) -> bool {
    if let Some(arch) = arch_target(id) {
        return std::env::consts::ARCH == arch;
    }
    if let Some(var) = marker_var(id) {
        return env_set(var);
    }
    platform_probe(id) || shell_probe(id) || terminal_probe(id)
}

/// The env-var marker identifying a CI system or coding agent, when it is
/// currently set. Used by `Trait::info` for the `marker` key.
pub fn marker_for(id: &str) -> Option<String> {
    marker_var(id).filter(|var| env_set(var)).map(String::from)
}

fn env_set(var: &str) -> bool {
    std::env::var_os(var).is_some_and(|v| !v.is_empty())
}

fn env_eq(var: &str, value: &str) -> bool {
    std::env::var(var).is_ok_and(|v| v == value)
}

/// Compile-target architecture name for an architecture trait id.
fn arch_target(id: &str) -> Option<&'static str> {
    match id {
        "arm" => Some("arm"),
        "arm64" => Some("aarch64"),
        "i386" => Some("x86"),
        "x86_64" => Some("x86_64"),
        "riscv32" => Some("riscv32"),
        "riscv64" => Some("riscv64"),
        "ppc" => Some("powerpc"),
        "ppc64" => Some("powerpc64"),
        "mips" => Some("mips"),
        "mips64" => Some("mips64"),
        "sparc" => Some("sparc"),
        "sparc64" => Some("sparc64"),
        "s390x" => Some("s390x"),
        "wasm32" => Some("wasm32"),
        "loongarch64" => Some("loongarch64"),
        _ => None,
    }
}

/// Env-var markers for CI systems and coding agents.
fn marker_var(id: &str) -> Option<&'static str> {
    match id {
        // CI systems
        "appveyor" => Some("APPVEYOR"),
        "azure_pipelines" => Some("TF_BUILD"),
        "bamboo" => Some("bamboo_buildKey"),
        "bitbucket_pipelines" => Some("BITBUCKET_BUILD_NUMBER"),
        "buildkite" => Some("BUILDKITE"),
        "circle_ci" => Some("CIRCLECI"),
        "cirrus_ci" => Some("CIRRUS_CI"),
        "codebuild" => Some("CODEBUILD_BUILD_ID"),
        "drone" => Some("DRONE"),
        "github_actions" => Some("GITHUB_ACTIONS"),
        "gitlab_ci" => Some("GITLAB_CI"),
        "heroku_ci" => Some("HEROKU_TEST_RUN_ID"),
        "jenkins" => Some("JENKINS_URL"),
        "teamcity" => Some("TEAMCITY_VERSION"),
        "travis_ci" => Some("TRAVIS"),
        // Coding agents
        "aider" => Some("AIDER_MODEL"),
        "claude_code" => Some("CLAUDECODE"),
        "codex" => Some("CODEX_SANDBOX"),
        "copilot" => Some("COPILOT_AGENT"),
        "cursor" => Some("CURSOR_TRACE_ID"),
        "gemini_cli" => Some("GEMINI_CLI"),
        "goose" => Some("GOOSE_PROVIDER"),
        "windsurf" => Some("WINDSURF"),
        _ => None,
    }
}

fn platform_probe(id: &str) -> bool {
    match id {
        // Ids matching the compile target's OS name directly.
        "aix" | "android" | "freebsd" | "hurd" | "macos" | "netbsd" | "openbsd" | "solaris"
        | "windows" => std::env::consts::OS == id,
        "cygwin" => std::env::var("OSTYPE").is_ok_and(|v| v.contains("cygwin")),
        // No stable probe from inside a Rust process; detectable only via
        // set_detection_override.
        "midnightbsd" | "sunos" => false,
        // Linux distributions, via /etc/os-release.
        _ => {
            std::env::consts::OS == "linux"
                && os_release_id().is_some_and(|release| distro_matches(id, &release))
        }
    }
}

/// Map a platform trait id onto the `ID=` value in `/etc/os-release`.
fn distro_matches(id: &str, release_id: &str) -> bool {
    match id {
        // Oracle Linux identifies as "ol".
        "oracle" => release_id == "ol",
        // openSUSE Leap vs Tumbleweed share the "opensuse-" prefix.
        "opensuse" => release_id == "opensuse" || release_id == "opensuse-leap",
        "tumbleweed" => release_id == "opensuse-tumbleweed",
        "altlinux" | "amzn" | "arch" | "buildroot" | "centos" | "cloudlinux" | "debian"
        | "exherbo" | "fedora" | "gentoo" | "guix" | "ibm_powerkvm" | "kvmibm" | "linuxmint"
        | "mageia" | "mandriva" | "nobara" | "parallels" | "pidora" | "raspbian" | "rhel"
        | "rocky" | "scientific" | "slackware" | "sles" | "tuxedo" | "ubuntu" => {
            release_id == id
        }
        _ => false,
    }
}

/// The unquoted `ID=` value from `/etc/os-release`, if readable.
fn os_release_id() -> Option<String> {
    let contents = std::fs::read_to_string("/etc/os-release").ok()?;
    contents.lines().find_map(|line| {
        line.strip_prefix("ID=")
            .map(|v| v.trim().trim_matches('"').to_string())
    })
}

fn shell_probe(id: &str) -> bool {
    match id {
        "bash" | "zsh" | "fish" | "dash" | "ksh" | "tcsh" | "csh" | "elvish" | "xonsh" => {
            shell_basename().is_some_and(|base| base == id)
        }
        "nushell" => shell_basename().is_some_and(|base| base == "nu"),
        "powershell" => env_set("PSModulePath"),
        "cmd" => cfg!(windows) && env_set("COMSPEC") && !env_set("SHELL"),
        _ => false,
    }
}

fn shell_basename() -> Option<String> {
    let shell = std::env::var("SHELL").ok()?;
    std::path::Path::new(&shell)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

fn terminal_probe(id: &str) -> bool {
    let term = std::env::var("TERM").unwrap_or_default();
    match id {
        "alacritty" => env_set("ALACRITTY_WINDOW_ID") || term == "alacritty",
        "apple_terminal" => env_eq("TERM_PROGRAM", "Apple_Terminal"),
        "ghostty" => env_set("GHOSTTY_RESOURCES_DIR") || env_eq("TERM_PROGRAM", "ghostty"),
        "gnome_terminal" => env_set("GNOME_TERMINAL_SCREEN"),
        "hyper" => env_eq("TERM_PROGRAM", "Hyper"),
        "iterm2" => env_set("ITERM_SESSION_ID") || env_eq("TERM_PROGRAM", "iTerm.app"),
        "kitty" => env_set("KITTY_WINDOW_ID") || term == "xterm-kitty",
        "konsole" => env_set("KONSOLE_VERSION"),
        "screen" => env_set("STY") || term.starts_with("screen"),
        "tmux" => env_set("TMUX"),
        "vscode_terminal" => env_eq("TERM_PROGRAM", "vscode"),
        "wezterm" => env_set("WEZTERM_EXECUTABLE") || env_eq("TERM_PROGRAM", "WezTerm"),
        "windows_terminal" => env_set("WT_SESSION"),
        "xterm" => term.starts_with("xterm") && !env_set("TERM_PROGRAM"),
        _ => false,
    }
}

// ============================================================================
// Tests
// ============================================================================
