use crate::cli::{Cli, GatePolicy};
use crate::domain::models::{Config, MatchResult, ModuleSection, Outcome};
use crate::services::config::select_modules;
use crate::services::coverage::CoverageAggregator;
use crate::services::extract::analyze_module;
use crate::services::output::print_check;
use crate::services::report::{build_check_report, outcome};
use crate::services::search::{search_corpus, SubstringMatcher};
use crate::services::storage::{audit, write_missing_artifacts};

/// Run the extraction → search → aggregation → reporting pipeline.
/// Returns the structured outcome; mapping it to an exit code is the
/// process boundary's job, never done here.
pub fn handle_check(
    cli: &Cli,
    config: &Config,
    threshold: Option<f64>,
    policy: Option<GatePolicy>,
) -> anyhow::Result<Outcome> {
    let threshold = threshold.unwrap_or(config.gate.threshold);
    let policy = policy.unwrap_or_else(|| config.gate.policy.clone());
    let matcher = SubstringMatcher;

    let mut sections = Vec::new();
    let mut aggregator = CoverageAggregator::new();
    for module in select_modules(&config.reference) {
        let analysis = analyze_module(&module.path, &module.name);
        let mut results = Vec::new();
        for symbol in analysis.symbols {
            let (found, location) = search_corpus(&symbol.name, &config.candidates, &matcher);
            let result = MatchResult {
                symbol,
                found,
                location,
            };
            aggregator.record(&result);
            results.push(result);
        }
        sections.push(ModuleSection {
            module: analysis.module,
            error: analysis.error,
            results,
        });
    }

    let report = build_check_report(sections, aggregator.into_report(), threshold, policy);
    write_missing_artifacts(&report, &config.artifacts)?;
    audit(
        "check",
        serde_json::json!({
            "percentage": report.percentage,
            "pass": report.pass,
            "missing": report.missing_functions.len() + report.missing_classes.len(),
        }),
    );
    print_check(cli.json, &report)?;
    Ok(outcome(&report))
}
