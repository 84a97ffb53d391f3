//! Operating systems and distributions.
//!
//! The canonical partition splits the 42 platforms into six disjoint
//! families: `BSD`, `LINUX`, `SYSTEM_V`, `UNIX_LAYERS`, `OTHER_UNIX`, and
//! `ANY_WINDOWS`. Convenience groups (`ALL_PLATFORMS`, `ANY_UNIX`,
//! `BSD_WITHOUT_MACOS`, `LINUX_LIKE`) overlap freely and are not canonical.

use std::sync::LazyLock;

use super::catalog_traits;
use crate::group::Group;
use crate::members;
use crate::traits::{Trait, TraitKind};

// ============================================================================
// Traits
// ============================================================================

catalog_traits! { TraitKind::Platform =>
    AIX => ("aix", "IBM AIX", "➿", "https://ibm.com/products/aix"),
    ALTLINUX => ("altlinux", "ALT Linux", "🐧", "https://altlinux.org"),
    AMZN => ("amzn", "Amazon Linux", "🙂", "https://aws.amazon.com/linux"),
    ANDROID => ("android", "Android", "🤖", "https://android.com"),
    ARCH => ("arch", "Arch Linux", "🎗️", "https://archlinux.org"),
    BUILDROOT => ("buildroot", "Buildroot", "⛑️", "https://buildroot.org"),
    CENTOS => ("centos", "CentOS", "💠", "https://centos.org"),
    CLOUDLINUX => ("cloudlinux", "CloudLinux OS", "꩜", "https://cloudlinux.com"),
    CYGWIN => ("cygwin", "Cygwin", "Ͼ", "https://cygwin.com"),
    DEBIAN => ("debian", "Debian", "🌀", "https://debian.org"),
    EXHERBO => ("exherbo", "Exherbo Linux", "🐽", "https://exherbolinux.org"),
    FEDORA => ("fedora", "Fedora", "🎩", "https://fedoraproject.org"),
    FREEBSD => ("freebsd", "FreeBSD", "😈", "https://freebsd.org"),
    GENTOO => ("gentoo", "Gentoo Linux", "🗜️", "https://gentoo.org"),
    GUIX => ("guix", "Guix System", "🐃", "https://guix.gnu.org"),
    HURD => ("hurd", "GNU/Hurd", "🐃", "https://gnu.org/software/hurd"),
    IBM_POWERKVM => ("ibm_powerkvm", "IBM PowerKVM", "🤹", "https://ibm.com/mysupport/s/topic/0TO50000000QkyPGAS"),
    KVMIBM => ("kvmibm", "KVM for IBM z Systems", "🤹", "https://ibm.com/products/kvm"),
    LINUXMINT => ("linuxmint", "Linux Mint", "🌿", "https://linuxmint.com"),
    MACOS => ("macos", "macOS", "🍎", "https://apple.com/macos"),
    MAGEIA => ("mageia", "Mageia", "⍥", "https://mageia.org"),
    MANDRIVA => ("mandriva", "Mandriva Linux", "💫", "https://web.archive.org/web/20150522203942/https://mandriva.com"),
    MIDNIGHTBSD => ("midnightbsd", "MidnightBSD", "🌘", "https://midnightbsd.org"),
    NETBSD => ("netbsd", "NetBSD", "🚩", "https://netbsd.org"),
    NOBARA => ("nobara", "Nobara", "🎮", "https://nobaraproject.org"),
    OPENBSD => ("openbsd", "OpenBSD", "🐡", "https://openbsd.org"),
    OPENSUSE => ("opensuse", "openSUSE", "🦎", "https://opensuse.org"),
    ORACLE => ("oracle", "Oracle Linux", "🦴", "https://oracle.com/linux"),
    PARALLELS => ("parallels", "Parallels", "∥", "https://parallels.com"),
    PIDORA => ("pidora", "Pidora", "🍓", "https://web.archive.org/web/20200227132047/http://pidora.ca"),
    RASPBIAN => ("raspbian", "Raspbian", "🍓", "https://raspberrypi.com/software"),
    RHEL => ("rhel", "Red Hat Enterprise Linux", "🎩", "https://redhat.com/rhel"),
    ROCKY => ("rocky", "Rocky Linux", "⛰️", "https://rockylinux.org"),
    SCIENTIFIC => ("scientific", "Scientific Linux", "⚛️", "https://scientificlinux.org"),
    SLACKWARE => ("slackware", "Slackware", "🚬", "https://slackware.com"),
    SLES => ("sles", "SUSE Linux Enterprise Server", "🦎", "https://suse.com/products/server"),
    SOLARIS => ("solaris", "Solaris", "🌞", "https://oracle.com/solaris"),
    SUNOS => ("sunos", "SunOS", "☀️", "https://wikipedia.org/wiki/SunOS"),
    TUMBLEWEED => ("tumbleweed", "openSUSE Tumbleweed", "↻", "https://get.opensuse.org/tumbleweed"),
    TUXEDO => ("tuxedo", "Tuxedo OS", "🤵", "https://tuxedocomputers.com"),
    UBUNTU => ("ubuntu", "Ubuntu", "🎯", "https://ubuntu.com"),
    WINDOWS => ("windows", "Windows", "🪟", "https://windows.com"),
}

/// All platform traits, in id order.
pub fn traits() -> Vec<&'static Trait> {
    vec![
        &*AIX,
        &*ALTLINUX,
        &*AMZN,
        &*ANDROID,
        &*ARCH,
        &*BUILDROOT,
        &*CENTOS,
        &*CLOUDLINUX,
        &*CYGWIN,
        &*DEBIAN,
        &*EXHERBO,
        &*FEDORA,
        &*FREEBSD,
        &*GENTOO,
        &*GUIX,
        &*HURD,
        &*IBM_POWERKVM,
        &*KVMIBM,
        &*LINUXMINT,
        &*MACOS,
        &*MAGEIA,
        &*MANDRIVA,
        &*MIDNIGHTBSD,
        &*NETBSD,
        &*NOBARA,
        &*OPENBSD,
        &*OPENSUSE,
        &*ORACLE,
        &*PARALLELS,
        &*PIDORA,
        &*RASPBIAN,
        &*RHEL,
        &*ROCKY,
        &*SCIENTIFIC,
        &*SLACKWARE,
        &*SLES,
        &*SOLARIS,
        &*SUNOS,
        &*TUMBLEWEED,
        &*TUXEDO,
        &*UBUNTU,
        &*WINDOWS,
    ]
}

// ============================================================================
// Canonical partition
// ============================================================================

/// BSD family, macOS included.
pub static BSD: LazyLock<Group> = LazyLock::new(|| {
    Group::new_canonical(
        "bsd",
        "Any BSD",
        "🅱️",
        members![&*FREEBSD, &*MACOS, &*MIDNIGHTBSD, &*NETBSD, &*OPENBSD, &*SUNOS],
    )
    .expect("catalog group definition is valid")
});

/// Linux distributions.
pub static LINUX: LazyLock<Group> = LazyLock::new(|| {
    Group::new_canonical(
        "linux",
        "Any Linux distribution",
        "🐧",
        members![
            &*ALTLINUX,
            &*AMZN,
            &*ANDROID,
            &*ARCH,
            &*BUILDROOT,
            &*CENTOS,
            &*CLOUDLINUX,
            &*DEBIAN,
            &*EXHERBO,
            &*FEDORA,
            &*GENTOO,
            &*GUIX,
            &*IBM_POWERKVM,
            &*KVMIBM,
            &*LINUXMINT,
            &*MAGEIA,
            &*MANDRIVA,
            &*NOBARA,
            &*OPENSUSE,
            &*ORACLE,
            &*PARALLELS,
            &*PIDORA,
            &*RASPBIAN,
            &*RHEL,
            &*ROCKY,
            &*SCIENTIFIC,
            &*SLACKWARE,
            &*SLES,
            &*TUMBLEWEED,
            &*TUXEDO,
            &*UBUNTU,
        ],
    )
    .expect("catalog group definition is valid")
});

/// UNIX System V derivatives.
pub static SYSTEM_V: LazyLock<Group> = LazyLock::new(|| {
    Group::new_canonical(
        "system_v",
        "Any Unix derived from AT&T System Five",
        "Ⅴ",
        members![&*AIX, &*SOLARIS],
    )
    .expect("catalog group definition is valid")
});

/// Compatibility layers providing Unix userlands on foreign kernels.
pub static UNIX_LAYERS: LazyLock<Group> = LazyLock::new(|| {
    Group::new_canonical(
        "unix_layers",
        "Any Unix compatibility layer",
        "≛",
        members![&*CYGWIN],
    )
    .expect("catalog group definition is valid")
});

/// Unix systems in no other family.
pub static OTHER_UNIX: LazyLock<Group> = LazyLock::new(|| {
    Group::new_canonical("other_unix", "Any other Unix", "⊎", members![&*HURD])
        .expect("catalog group definition is valid")
});

/// Windows releases.
pub static ANY_WINDOWS: LazyLock<Group> = LazyLock::new(|| {
    Group::new_canonical("any_windows", "Any Windows", "🪟", members![&*WINDOWS])
        .expect("catalog group definition is valid")
});

// ============================================================================
// Convenience groups
// ============================================================================

/// Every known platform.
pub static ALL_PLATFORMS: LazyLock<Group> = LazyLock::new(|| {
    Group::new("all_platforms", "All platforms", "⚙️", traits())
        .expect("catalog group definition is valid")
});

/// Every Unix-like platform, Windows excluded.
pub static ANY_UNIX: LazyLock<Group> = LazyLock::new(|| {
    ALL_PLATFORMS
        .difference([&*ANY_WINDOWS])
        .and_then(|g| g.copy(Some("any_unix"), Some("Any Unix"), Some("⨷"), None))
        .expect("catalog group definition is valid")
});

/// The BSD family without macOS.
pub static BSD_WITHOUT_MACOS: LazyLock<Group> = LazyLock::new(|| {
    BSD.difference([&*MACOS])
        .and_then(|g| {
            g.copy(
                Some("bsd_without_macos"),
                Some("Any BSD but macOS"),
                Some("🅱️"),
                None,
            )
        })
        .expect("catalog group definition is valid")
});

/// Linux distributions plus Unix layers commonly treated as Linux.
pub static LINUX_LIKE: LazyLock<Group> = LazyLock::new(|| {
    Group::new(
        "linux_like",
        "Any Linux distribution or compatibility layer",
        "🐧",
        members![&*LINUX, &*UNIX_LAYERS],
    )
    .expect("catalog group definition is valid")
});

/// All platform groups, canonical first, in id order within each block.
pub fn groups() -> Vec<&'static Group> {
    vec![
        &*ANY_WINDOWS,
        &*BSD,
        &*LINUX,
        &*OTHER_UNIX,
        &*SYSTEM_V,
        &*UNIX_LAYERS,
        &*ALL_PLATFORMS,
        &*ANY_UNIX,
        &*BSD_WITHOUT_MACOS,
        &*LINUX_LIKE,
    ]
}
