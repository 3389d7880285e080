use crate::domain::models::CandidateRoot;
use std::path::Path;

/// Narrow matching seam: the searcher only ever asks whether a symbol name
/// occurs in a candidate file's text. A stricter identifier-boundary matcher
/// can be substituted here without touching aggregation or reporting.
pub trait NameMatcher {
    fn is_match(&self, name: &str, text: &str) -> bool;
}

/// Case-insensitive substring containment. This is a coverage proxy, not a
/// semantic check: `add` matches inside `addition`.
pub struct SubstringMatcher;

impl NameMatcher for SubstringMatcher {
    fn is_match(&self, name: &str, text: &str) -> bool {
        text.to_lowercase().contains(&name.to_lowercase())
    }
}

/// Search every candidate root for a textual counterpart of `name` and stop
/// at the first match. Traversal order is unspecified; callers must not
/// depend on which of several qualifying files is reported.
pub fn search_corpus(
    name: &str,
    roots: &[CandidateRoot],
    matcher: &dyn NameMatcher,
) -> (bool, Option<String>) {
    for root in roots {
        let base = Path::new(&root.root);
        if !base.exists() {
            continue;
        }
        if let Some(hit) = search_dir(base, root, name, matcher) {
            return (true, Some(hit));
        }
    }
    (false, None)
}

fn search_dir(
    dir: &Path,
    root: &CandidateRoot,
    name: &str,
    matcher: &dyn NameMatcher,
) -> Option<String> {
    let entries = std::fs::read_dir(dir).ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if let Some(hit) = search_dir(&path, root, name, matcher) {
                return Some(hit);
            }
            continue;
        }
        if !has_candidate_extension(&path, &root.extensions) {
            continue;
        }
        // an unreadable candidate file counts neither as a match nor an error
        let Ok(text) = std::fs::read_to_string(&path) else {
            continue;
        };
        if matcher.is_match(name, &text) {
            return Some(display_location(&path, &root.root));
        }
    }
    None
}

fn has_candidate_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|x| x == e))
        .unwrap_or(false)
}

/// Locations render relative to the root's parent so reports read
/// `include/activations.hpp` rather than an absolute path.
fn display_location(path: &Path, root: &str) -> String {
    let base = Path::new(root).parent().unwrap_or_else(|| Path::new(""));
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
