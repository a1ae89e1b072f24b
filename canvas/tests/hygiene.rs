//! Hygiene — enforces coding standards at test time.
//!
//! Scans the crate's production sources for patterns that have no place in
//! the engine: panicking macros, swallowed errors, dead-code escapes. Every
//! pattern has a budget of zero; the budget never grows.

use std::fs;
use std::path::Path;

/// (pattern, budget) pairs checked against every production source line.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("let _ =", 0),
    (".ok()", 0),
    ("#[allow(dead_code)]", 0),
];

fn production_sources() -> Vec<(String, String)> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            // Test modules live beside their subjects; skip them.
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path_str, content));
            }
        }
    }
}

#[test]
fn pattern_budgets_hold() {
    let files = production_sources();
    assert!(!files.is_empty(), "no production sources found; run from the crate root");

    let mut violations = Vec::new();
    for (pattern, budget) in BUDGETS {
        let mut hits = Vec::new();
        for (path, content) in &files {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            if count > 0 {
                hits.push(format!("  {path}: {count}"));
            }
        }
        let total: usize = files
            .iter()
            .map(|(_, content)| content.lines().filter(|line| line.contains(pattern)).count())
            .sum();
        if total > *budget {
            violations.push(format!("`{pattern}` budget exceeded: found {total}, max {budget}\n{}", hits.join("\n")));
        }
    }

    assert!(violations.is_empty(), "hygiene violations:\n{}", violations.join("\n"));
}
