//! CPU architectures.
//!
//! The canonical partition splits architectures by word size into
//! `ARCH_32_BIT` and `ARCH_64_BIT`.

use std::sync::LazyLock;

use super::catalog_traits;
use crate::group::Group;
use crate::members;
use crate::traits::{Trait, TraitKind};

// ============================================================================
// Traits
// ============================================================================

catalog_traits! { TraitKind::Architecture =>
    ARM => ("arm", "ARM (32-bit)", "💪", "https://arm.com"),
    ARM64 => ("arm64", "ARM64", "💪", "https://arm.com/architecture/cpu"),
    I386 => ("i386", "x86 (32-bit)", "𝗑", "https://wikipedia.org/wiki/IA-32"),
    LOONGARCH64 => ("loongarch64", "LoongArch64", "🐉", "https://loongson.cn"),
    MIPS => ("mips", "MIPS (32-bit)", "🀰", "https://mips.com"),
    MIPS64 => ("mips64", "MIPS64", "🀰", "https://mips.com"),
    PPC => ("ppc", "PowerPC (32-bit)", "🏋️", "https://wikipedia.org/wiki/PowerPC"),
    PPC64 => ("ppc64", "PowerPC 64", "🏋️", "https://wikipedia.org/wiki/Ppc64"),
    RISCV32 => ("riscv32", "RISC-V (32-bit)", "⛰️", "https://riscv.org"),
    RISCV64 => ("riscv64", "RISC-V 64", "⛰️", "https://riscv.org"),
    S390X => ("s390x", "IBM z Systems", "🖥️", "https://ibm.com/z"),
    SPARC => ("sparc", "SPARC (32-bit)", "✴️", "https://wikipedia.org/wiki/SPARC"),
    SPARC64 => ("sparc64", "SPARC64", "✴️", "https://wikipedia.org/wiki/SPARC"),
    WASM32 => ("wasm32", "WebAssembly (32-bit)", "🕸️", "https://webassembly.org"),
    X86_64 => ("x86_64", "x86-64", "𝗑", "https://wikipedia.org/wiki/X86-64"),
}

/// All architecture traits, in id order.
pub fn traits() -> Vec<&'static Trait> {
    vec![
        &*ARM,
        &*ARM64,
        &*I386,
        &*LOONGARCH64,
        &*MIPS,
        &*MIPS64,
        &*PPC,
        &*PPC64,
        &*RISCV32,
        &*RISCV64,
        &*S390X,
        &*SPARC,
        &*SPARC64,
        &*WASM32,
        &*X86_64,
    ]
}

// ============================================================================
// Canonical partition
// ============================================================================

/// 32-bit architectures.
pub static ARCH_32_BIT: LazyLock<Group> = LazyLock::new(|| {
    Group::new_canonical(
        "arch_32_bit",
        "Any 32-bit architecture",
        "³²",
        members![&*ARM, &*I386, &*MIPS, &*PPC, &*RISCV32, &*SPARC, &*WASM32],
    )
    .expect("catalog group definition is valid")
});

/// 64-bit architectures.
pub static ARCH_64_BIT: LazyLock<Group> = LazyLock::new(|| {
    Group::new_canonical(
        "arch_64_bit",
        "Any 64-bit architecture",
        "⁶⁴",
        members![
            &*ARM64,
            &*LOONGARCH64,
            &*MIPS64,
            &*PPC64,
            &*RISCV64,
            &*S390X,
            &*SPARC64,
            &*X86_64,
        ],
    )
    .expect("catalog group definition is valid")
});

// ============================================================================
// Convenience groups
// ============================================================================

/// Every known architecture.
pub static ALL_ARCHITECTURES: LazyLock<Group> = LazyLock::new(|| {
    Group::new("all_architectures", "All architectures", "💻", traits())
        .expect("catalog group definition is valid")
});

/// ARM at any word size.
pub static ANY_ARM: LazyLock<Group> = LazyLock::new(|| {
    Group::new("any_arm", "Any ARM", "💪", members![&*ARM, &*ARM64])
        .expect("catalog group definition is valid")
});

/// RISC-V at any word size.
pub static ANY_RISCV: LazyLock<Group> = LazyLock::new(|| {
    Group::new("any_riscv", "Any RISC-V", "⛰️", members![&*RISCV32, &*RISCV64])
        .expect("catalog group definition is valid")
});

/// All architecture groups, canonical first.
pub fn groups() -> Vec<&'static Group> {
    vec![
        &*ARCH_32_BIT,
        &*ARCH_64_BIT,
        &*ALL_ARCHITECTURES,
        &*ANY_ARM,
        &*ANY_RISCV,
    ]
}
