use crate::cli::GatePolicy;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Function,
    Class,
}

impl SymbolKind {
    pub fn label(self) -> &'static str {
        match self {
            SymbolKind::Function => "function",
            SymbolKind::Class => "class",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub module: String,
}

/// Extraction result for one reference module. An unreadable or undecodable
/// file yields empty symbols plus the error string; extraction never aborts
/// the run.
#[derive(Debug, Serialize, Clone)]
pub struct ModuleAnalysis {
    pub module: String,
    pub symbols: Vec<Symbol>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct MatchResult {
    pub symbol: Symbol,
    pub found: bool,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MissingItem {
    pub name: String,
    pub module: String,
}

#[derive(Debug, Serialize, Default)]
pub struct CoverageReport {
    pub total_functions: usize,
    pub implemented_functions: usize,
    pub total_classes: usize,
    pub implemented_classes: usize,
    pub missing_functions: Vec<MissingItem>,
    pub missing_classes: Vec<MissingItem>,
}

impl CoverageReport {
    pub fn total(&self) -> usize {
        self.total_functions + self.total_classes
    }

    pub fn implemented(&self) -> usize {
        self.implemented_functions + self.implemented_classes
    }

    /// A symbol-less run passes vacuously at 100%.
    pub fn percentage(&self) -> f64 {
        if self.total() == 0 {
            100.0
        } else {
            self.implemented() as f64 / self.total() as f64 * 100.0
        }
    }

    pub fn missing_count(&self) -> usize {
        self.missing_functions.len() + self.missing_classes.len()
    }
}

#[derive(Debug, Serialize)]
pub struct ModuleSection {
    pub module: String,
    pub error: Option<String>,
    pub results: Vec<MatchResult>,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub modules: Vec<ModuleSection>,
    pub total_functions: usize,
    pub implemented_functions: usize,
    pub total_classes: usize,
    pub implemented_classes: usize,
    pub missing_functions: Vec<MissingItem>,
    pub missing_classes: Vec<MissingItem>,
    pub percentage: f64,
    pub threshold: f64,
    pub policy: GatePolicy,
    pub pass: bool,
}

/// What the check pipeline hands back to the process boundary. Only
/// `main.rs` maps this to an exit code, per the configured gate policy.
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    pub pass: bool,
    pub percentage: f64,
}

#[derive(Debug, Serialize, Clone)]
pub struct SelectedModule {
    pub name: String,
    #[serde(skip)]
    pub path: std::path::PathBuf,
    pub origin: String,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub reference: ReferenceConfig,
    #[serde(default, rename = "candidate")]
    pub candidates: Vec<CandidateRoot>,
    #[serde(default)]
    pub gate: GateConfig,
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
}

#[derive(Debug, Deserialize)]
pub struct ReferenceConfig {
    pub root: String,
    #[serde(default)]
    pub modules: Vec<String>,
    pub discover: Option<DiscoverConfig>,
}

#[derive(Debug, Deserialize)]
pub struct DiscoverConfig {
    pub dir: String,
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

fn default_max_files() -> usize {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct CandidateRoot {
    pub root: String,
    pub extensions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GateConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_policy")]
    pub policy: GatePolicy,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            policy: default_policy(),
        }
    }
}

fn default_threshold() -> f64 {
    90.0
}

fn default_policy() -> GatePolicy {
    GatePolicy::Gating
}

#[derive(Debug, Deserialize)]
pub struct ArtifactsConfig {
    #[serde(default = "default_missing_functions")]
    pub missing_functions: String,
    #[serde(default = "default_missing_classes")]
    pub missing_classes: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            missing_functions: default_missing_functions(),
            missing_classes: default_missing_classes(),
        }
    }
}

fn default_missing_functions() -> String {
    "missing_functions.json".to_string()
}

fn default_missing_classes() -> String {
    "missing_classes.json".to_string()
}
