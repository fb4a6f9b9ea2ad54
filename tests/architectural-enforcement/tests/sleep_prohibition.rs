//! Integration Test: Sleep Prohibition
//!
//! **Policy**: production code never sleeps. Timing comes from the
//! scheduler's `tokio::time::interval` and input arrives on a channel.
//! **Exceptions**: test code.

use architectural_enforcement::{production_lines, rust_files};

const PRODUCTION_DIRS: &[&str] = &["scene/core/src", "tui/src"];

#[test]
fn test_no_sleep_in_production_code() {
    let mut violations = Vec::new();

    for dir in PRODUCTION_DIRS {
        for path in rust_files(dir) {
            for (line_number, code) in production_lines(&path) {
                if code.contains("::sleep(") || code.contains(".sleep(") {
                    violations.push(format!("{}:{} - {}", path.display(), line_number, code.trim()));
                }
            }
        }
    }

    if !violations.is_empty() {
        eprintln!("\nSleep calls found in production code:\n");
        for violation in &violations {
            eprintln!("  {violation}");
        }
        eprintln!("\nUse tokio::time::interval or wait on a channel instead.");

        panic!("Found {} sleep violation(s) in production code", violations.len());
    }
}

#[test]
fn test_production_dirs_are_scanned() {
    for dir in PRODUCTION_DIRS {
        assert!(!rust_files(dir).is_empty(), "no sources found under {dir}");
    }
}
