//! Hygiene — enforces coding standards at test time
//!
//! Scans the blocks crate sources for antipatterns. Every budget is zero; the
//! block model and payload codec must never panic or swallow errors.

use std::fs;
use std::path::Path;

/// (pattern, budget, what it catches)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "explicit panic"),
    ("unreachable!(", 0, "explicit panic"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "silently discarded result"),
    (".ok()", 0, "silently discarded error"),
    ("#[allow(dead_code)]", 0, "dead code"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")));
}

#[test]
fn antipattern_budgets_hold() {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);

    let mut failures = Vec::new();
    for (pattern, budget, reason) in BUDGETS {
        let hits = hits_for(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let detail = hits
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{pattern} ({reason}): found {count}, max {budget}\n{detail}"));
        }
    }

    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
