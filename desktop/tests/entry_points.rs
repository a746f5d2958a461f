//! The launcher must keep an entry point for every feature combination.

use std::fs;
use std::path::PathBuf;

fn main_rs() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/main.rs");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

/// Returns the `cfg` attribute directly above each `fn main()`.
fn main_cfgs(src: &str) -> Vec<String> {
    let lines: Vec<&str> = src.lines().collect();
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.trim_start().starts_with("fn main()"))
        .map(|(idx, _)| {
            idx.checked_sub(1)
                .map(|prev| lines[prev].trim().to_string())
                .unwrap_or_default()
        })
        .collect()
}

#[test]
fn main_exists_with_and_without_desktop_feature() {
    let cfgs = main_cfgs(&main_rs());
    assert!(
        cfgs.iter().any(|c| c == "#[cfg(feature = \"desktop\")]"),
        "missing desktop entry point: {cfgs:?}"
    );
    assert!(
        cfgs.iter().any(|c| c == "#[cfg(not(feature = \"desktop\"))]"),
        "missing fallback entry point: {cfgs:?}"
    );
}
