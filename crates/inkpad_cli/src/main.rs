//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `inkpad_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("inkpad_core version={}", inkpad_core::core_version());
    println!("inkpad_core page_ext={}", inkpad_core::PAGE_FILE_EXT);
}
