use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "paritas.toml";

#[derive(Parser, Debug)]
#[command(name = "paritas", version, about = "Migration parity verification CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_CONFIG_PATH,
        help = "Path to the verification config (TOML)"
    )]
    pub config: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Check {
        #[arg(long, help = "Pass threshold percentage (overrides config)")]
        threshold: Option<f64>,
        #[arg(long, value_enum, help = "Exit-code policy (overrides config)")]
        policy: Option<GatePolicy>,
    },
    Extract {
        module: String,
    },
    Modules,
}

#[derive(Clone, Debug, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GatePolicy {
    Advisory,
    Gating,
}
