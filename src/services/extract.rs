use crate::domain::models::{ModuleAnalysis, Symbol, SymbolKind};
use std::path::Path;

const FN_MARKER: &str = "def ";
const CLASS_MARKER: &str = "class ";
const PRIVATE_MARKER: char = '_';

/// Classify one stripped source line as a public declaration.
///
/// Classification is purely textual and indentation-insensitive: a nested
/// declaration that starts with a marker token after the strip is
/// indistinguishable from a top-level one.
pub fn classify_line(stripped: &str) -> Option<(SymbolKind, String)> {
    if let Some(rest) = stripped.strip_prefix(FN_MARKER) {
        if rest.starts_with(PRIVATE_MARKER) {
            return None;
        }
        let name = rest.split('(').next().unwrap_or(rest);
        return Some((SymbolKind::Function, name.to_string()));
    }
    if let Some(rest) = stripped.strip_prefix(CLASS_MARKER) {
        let head = rest.split('(').next().unwrap_or(rest);
        let name = head.split(':').next().unwrap_or(head);
        return Some((SymbolKind::Class, name.to_string()));
    }
    None
}

pub fn extract_symbols(text: &str, module: &str) -> Vec<Symbol> {
    text.lines()
        .filter_map(|line| classify_line(line.trim()))
        .map(|(kind, name)| Symbol {
            name,
            kind,
            module: module.to_string(),
        })
        .collect()
}

/// Read and extract one reference module. I/O and decoding failures fold
/// into the analysis instead of aborting the run.
pub fn analyze_module(path: &Path, module: &str) -> ModuleAnalysis {
    match std::fs::read_to_string(path) {
        Ok(text) => ModuleAnalysis {
            module: module.to_string(),
            symbols: extract_symbols(&text, module),
            error: None,
        },
        Err(e) => ModuleAnalysis {
            module: module.to_string(),
            symbols: vec![],
            error: Some(e.to_string()),
        },
    }
}
