//! Architectural Enforcement Integration Tests
//!
//! Shared helpers for the source scans under `tests/`:
//! - No sleep() calls in production code
//! - The scene engine stays free of terminal crates
//!
//! Everything after a `#[cfg(test)]` line counts as test code and is skipped.

use std::fs;
use std::path::{Path, PathBuf};

/// The workspace root, two levels above this package
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

/// Every `.rs` file under `dir`, relative to the workspace root
pub fn rust_files(dir: &str) -> Vec<PathBuf> {
    let path = workspace_root().join(dir);
    if !path.exists() {
        return Vec::new();
    }

    walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Non-test lines of a file with comments stripped, paired with 1-based line numbers
pub fn production_lines(path: &Path) -> Vec<(usize, String)> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };

    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .map(|(idx, line)| {
            let code = line.split("//").next().unwrap_or(line);
            (idx + 1, code.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_lines_stop_at_test_module() {
        let dir = tempfile_dir();
        let file = dir.join("sample.rs");
        fs::write(&file, "fn a() {} // note\n#[cfg(test)]\nmod tests {}\n").unwrap();

        let lines = production_lines(&file);
        assert_eq!(lines, vec![(1, "fn a() {} ".to_string())]);
        fs::remove_dir_all(dir).unwrap();
    }

    fn tempfile_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("arch-enforcement-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_workspace_root_holds_both_crates() {
        assert!(workspace_root().join("scene/core/src/lib.rs").exists());
        assert!(workspace_root().join("tui/src/main.rs").exists());
    }
}
