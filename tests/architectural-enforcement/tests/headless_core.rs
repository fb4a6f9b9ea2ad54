//! Integration Test: Headless Scene Engine
//!
//! **Policy**: `scene-core` knows nothing about terminals. Rendering and
//! input decoding belong to `tui`, behind the `Surface` trait and the
//! event channel.

use std::fs;

use architectural_enforcement::{production_lines, rust_files, workspace_root};

const TERMINAL_CRATES: &[&str] = &["ratatui", "crossterm"];

#[test]
fn test_core_sources_do_not_use_terminal_crates() {
    let mut violations = Vec::new();

    for path in rust_files("scene/core") {
        for (line_number, code) in production_lines(&path) {
            for krate in TERMINAL_CRATES {
                if code.contains(&format!("{krate}::")) {
                    violations.push(format!("{}:{} - {}", path.display(), line_number, code.trim()));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "terminal crates used in scene-core:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_core_manifest_has_no_terminal_dependencies() {
    let manifest = fs::read_to_string(workspace_root().join("scene/core/Cargo.toml"))
        .expect("scene/core/Cargo.toml should be readable");

    for krate in TERMINAL_CRATES {
        assert!(
            !manifest.lines().any(|l| l.trim_start().starts_with(krate)),
            "scene-core depends on {krate}"
        );
    }
}
