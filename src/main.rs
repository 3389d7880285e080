use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands, GatePolicy};
use domain::models::Outcome;
use services::config::{load_config, VerifyError};

fn main() {
    let cli = Cli::parse();
    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "ok": false,
                        "error": {"code": error_code(&e), "message": format!("{:#}", e)}
                    })
                );
            } else {
                eprintln!("error: {:#}", e);
            }
            fault_exit_code(&cli)
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let config = load_config(&cli.config)?;
    match &cli.command {
        Commands::Check { threshold, policy } => {
            let effective_policy = policy
                .clone()
                .unwrap_or_else(|| config.gate.policy.clone());
            let outcome = commands::handle_check(cli, &config, *threshold, policy.clone())?;
            Ok(exit_code(&effective_policy, &outcome))
        }
        _ => {
            commands::handle_inspect_commands(cli, &config)?;
            Ok(0)
        }
    }
}

fn exit_code(policy: &GatePolicy, outcome: &Outcome) -> i32 {
    match policy {
        GatePolicy::Advisory => 0,
        GatePolicy::Gating => {
            if outcome.pass {
                0
            } else {
                1
            }
        }
    }
}

/// A whole-run fault still resolves to a policy-consistent code: advisory
/// runs must not fail the invoking job even when the pipeline itself errors.
fn fault_exit_code(cli: &Cli) -> i32 {
    let policy = match &cli.command {
        Commands::Check {
            policy: Some(p), ..
        } => p.clone(),
        _ => load_config(&cli.config)
            .map(|c| c.gate.policy)
            .unwrap_or(GatePolicy::Gating),
    };
    match policy {
        GatePolicy::Advisory => 0,
        GatePolicy::Gating => 1,
    }
}

fn error_code(e: &anyhow::Error) -> &'static str {
    match e.downcast_ref::<VerifyError>() {
        Some(VerifyError::ModuleNotFound(_)) => "MODULE_NOT_FOUND",
        Some(VerifyError::NoCandidates) => "NO_CANDIDATES",
        Some(VerifyError::ReferenceRootMissing(_)) => "REFERENCE_ROOT_MISSING",
        None => "RUN_FAILED",
    }
}
