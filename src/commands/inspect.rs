use crate::cli::{Cli, Commands};
use crate::domain::models::Config;
use crate::services::config::{select_modules, VerifyError};
use crate::services::extract::analyze_module;
use crate::services::output::print_out;
use std::path::Path;

pub fn handle_inspect_commands(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Extract { module } => {
            let path = Path::new(&config.reference.root).join(module);
            if !path.exists() {
                return Err(VerifyError::ModuleNotFound(module.clone()).into());
            }
            let analysis = analyze_module(&path, module);
            if let Some(err) = analysis.error {
                anyhow::bail!("analyze {}: {}", module, err);
            }
            print_out(cli.json, &analysis.symbols, |s| {
                format!("{}\t{}", s.kind.label(), s.name)
            })?;
        }
        Commands::Modules => {
            let modules = select_modules(&config.reference);
            print_out(cli.json, &modules, |m| format!("{}\t{}", m.name, m.origin))?;
        }
        Commands::Check { .. } => {}
    }
    Ok(())
}
