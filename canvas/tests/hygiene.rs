//! Source checks for the viewer client.
//!
//! The client runs inside a page: a panic kills the viewer and stdout goes
//! nowhere. Browser APIs are confined to `web.rs` so the rest of the crate
//! builds and tests natively.

use std::fs;
use std::path::{Path, PathBuf};

/// Patterns banned from non-test sources, with the reason shown on failure.
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "propagate or log instead"),
    (".expect(", "propagate or log instead"),
    ("panic!(", "the page cannot recover"),
    ("unreachable!(", "the page cannot recover"),
    ("todo!(", "unfinished code"),
    ("unimplemented!(", "unfinished code"),
    ("let _ =", "inspect the result"),
    (".ok()", "inspect the error"),
    ("println!(", "use the log macros"),
    ("dbg!(", "use the log macros"),
];

/// Browser-only crates, allowed in `web.rs` alone.
const BROWSER_ONLY: &[&str] = &["web_sys", "wasm_bindgen", "js_sys", "gloo_", "console_log"];

fn sources() -> Vec<(PathBuf, String)> {
    let mut paths: Vec<PathBuf> = fs::read_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("src"))
        .into_iter()
        .flatten()
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|e| e == "rs"))
        .filter(|p| !p.to_string_lossy().ends_with("_test.rs"))
        .collect();
    paths.sort();
    paths
        .into_iter()
        .filter_map(|p| fs::read_to_string(&p).ok().map(|text| (p, text)))
        .collect()
}

/// Code lines only; `//` comments and doc comments never count.
fn code_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_start()))
        .filter(|(_, line)| !line.starts_with("//"))
}

#[test]
fn scans_the_whole_crate() {
    let names: Vec<String> = sources()
        .iter()
        .filter_map(|(p, _)| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect();
    for expected in ["engine.rs", "animation.rs", "web.rs"] {
        assert!(names.iter().any(|n| n == expected), "{expected} not scanned: {names:?}");
    }
}

#[test]
fn no_banned_patterns() {
    let mut hits = Vec::new();
    for (path, text) in sources() {
        for (n, line) in code_lines(&text) {
            for (pattern, why) in BANNED {
                if line.contains(pattern) {
                    hits.push(format!("{}:{n}: `{pattern}` ({why})", path.display()));
                }
            }
        }
    }
    assert!(hits.is_empty(), "banned patterns found:\n{}", hits.join("\n"));
}

#[test]
fn browser_apis_stay_in_web_module() {
    let mut hits = Vec::new();
    for (path, text) in sources() {
        if path.file_name().is_some_and(|n| n == "web.rs") {
            continue;
        }
        for (n, line) in code_lines(&text) {
            if let Some(name) = BROWSER_ONLY.iter().find(|name| line.contains(*name)) {
                hits.push(format!("{}:{n}: `{name}`", path.display()));
            }
        }
    }
    assert!(hits.is_empty(), "browser APIs outside web.rs:\n{}", hits.join("\n"));
}
