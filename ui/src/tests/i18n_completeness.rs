//! Every `t!("…")` key used under `src/` must exist in the fallback bundle.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "qualitydash-ui.ftl";

fn message_ids(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(is_id_char))
        .map(str::to_string)
        .collect()
}

fn is_id_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Collect literal first arguments of `t!` invocations. Dynamic keys and
/// direct `fl!` calls are not seen.
fn referenced_ids(dir: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![dir.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|e| e.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (idx, _) in content.match_indices("t!(\"") {
            let rest = &content[idx + 4..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(is_id_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = crate_root.join("i18n").join("en-US").join(FTL_FILENAME);
    let content = fs::read_to_string(&fallback).expect("fallback FTL readable");
    let defined = message_ids(&content);
    assert!(!defined.is_empty(), "no message ids parsed from {fallback:?}");

    let referenced = referenced_ids(&crate_root.join("src"));
    assert!(
        referenced.contains("dashboard-title"),
        "source scan found no t! keys; did the macro name change?"
    );

    let missing: Vec<_> = referenced.difference(&defined).cloned().collect();
    assert!(
        missing.is_empty(),
        "keys used in source but missing from en-US:\n  {}",
        missing.join("\n  ")
    );
}

#[test]
fn parser_skips_comments_terms_and_attributes() {
    let ids = message_ids("# note\n-brand = X\nchart-title = Trend\n    .title = hover\n");
    assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec!["chart-title"]);
}
