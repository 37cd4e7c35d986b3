//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `mediashelf_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("mediashelf_core ping={}", mediashelf_core::ping());
    println!("mediashelf_core version={}", mediashelf_core::core_version());
}
