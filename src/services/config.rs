use crate::domain::models::{Config, ReferenceConfig, SelectedModule};
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum VerifyError {
    #[error("module not found: {0}")]
    ModuleNotFound(String),
    #[error("no candidate roots configured")]
    NoCandidates,
    #[error("reference root not found: {0}")]
    ReferenceRootMissing(String),
}

pub fn load_config(path: &str) -> anyhow::Result<Config> {
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("read config {}", path))?;
    let config: Config = toml::from_str(&raw).with_context(|| format!("parse config {}", path))?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> anyhow::Result<()> {
    if config.candidates.is_empty() {
        return Err(VerifyError::NoCandidates.into());
    }
    if !Path::new(&config.reference.root).exists() {
        return Err(VerifyError::ReferenceRootMissing(config.reference.root.clone()).into());
    }
    Ok(())
}

/// Resolve the reference modules a run will scan: the explicit list first,
/// in listed order, then auto-discovered files up to the configured cap.
/// Explicit entries that do not exist on disk are skipped.
pub fn select_modules(reference: &ReferenceConfig) -> Vec<SelectedModule> {
    let root = Path::new(&reference.root);
    let mut out = Vec::new();

    for m in &reference.modules {
        let path = root.join(m);
        if path.exists() {
            out.push(SelectedModule {
                name: m.clone(),
                path,
                origin: "explicit".to_string(),
            });
        }
    }

    if let Some(discover) = &reference.discover {
        let mut found = Vec::new();
        collect_reference_files(&root.join(&discover.dir), &mut found);
        // sorted so module enumeration order is stable across reruns
        found.sort();
        for path in found.into_iter().take(discover.max_files) {
            let name = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .display()
                .to_string();
            out.push(SelectedModule {
                name,
                path,
                origin: "discovered".to_string(),
            });
        }
    }

    out
}

fn collect_reference_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_reference_files(&path, out);
            continue;
        }
        if path.extension().map(|e| e == "py").unwrap_or(false) {
            let name = entry.file_name();
            if name == "__init__.py" || name == "tests" {
                continue;
            }
            out.push(path);
        }
    }
}
