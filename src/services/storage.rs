use crate::domain::models::{ArtifactsConfig, CheckReport};
use std::path::{Path, PathBuf};

/// Persist the two missing-item artifacts, each fully overwritten. There is
/// no history and no merging with prior runs.
pub fn write_missing_artifacts(
    report: &CheckReport,
    artifacts: &ArtifactsConfig,
) -> anyhow::Result<()> {
    write_artifact(&artifacts.missing_functions, &report.missing_functions)?;
    write_artifact(&artifacts.missing_classes, &report.missing_classes)?;
    Ok(())
}

fn write_artifact<T: serde::Serialize>(path: &str, data: &T) -> anyhow::Result<()> {
    let p = Path::new(path);
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(p, serde_json::to_string_pretty(data)?)?;
    Ok(())
}

/// Best-effort run audit trail. Failures here never affect the run.
pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/paritas/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": unix_now(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

fn unix_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}
