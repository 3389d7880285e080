use crate::cli::GatePolicy;
use crate::domain::models::{CheckReport, CoverageReport, ModuleSection, Outcome, SymbolKind};

pub fn build_check_report(
    modules: Vec<ModuleSection>,
    coverage: CoverageReport,
    threshold: f64,
    policy: GatePolicy,
) -> CheckReport {
    let percentage = coverage.percentage();
    CheckReport {
        modules,
        total_functions: coverage.total_functions,
        implemented_functions: coverage.implemented_functions,
        total_classes: coverage.total_classes,
        implemented_classes: coverage.implemented_classes,
        missing_functions: coverage.missing_functions,
        missing_classes: coverage.missing_classes,
        percentage,
        threshold,
        policy,
        pass: percentage >= threshold,
    }
}

pub fn outcome(report: &CheckReport) -> Outcome {
    Outcome {
        pass: report.pass,
        percentage: report.percentage,
    }
}

/// One section per scanned module, then a trailing summary with per-kind
/// counts, overall percentage and the gate verdict.
pub fn render_text(report: &CheckReport) -> String {
    let mut out = String::new();
    for section in &report.modules {
        out.push_str(&format!("== {}\n", section.module));
        if let Some(err) = &section.error {
            out.push_str(&format!("error\t{}\n", err));
        }
        let functions = count_kind(section, SymbolKind::Function);
        let classes = count_kind(section, SymbolKind::Class);
        out.push_str(&format!("{} functions, {} classes\n", functions, classes));
        for r in &section.results {
            match &r.location {
                Some(loc) => out.push_str(&format!(
                    "{}\t{}\tok\t{}\n",
                    r.symbol.kind.label(),
                    r.symbol.name,
                    loc
                )),
                None => out.push_str(&format!(
                    "{}\t{}\tmissing\n",
                    r.symbol.kind.label(),
                    r.symbol.name
                )),
            }
        }
    }

    let implemented = report.implemented_functions + report.implemented_classes;
    let total = report.total_functions + report.total_classes;
    let missing = report.missing_functions.len() + report.missing_classes.len();
    out.push_str("== summary\n");
    out.push_str(&format!(
        "functions: {}/{}\n",
        report.implemented_functions, report.total_functions
    ));
    out.push_str(&format!(
        "classes: {}/{}\n",
        report.implemented_classes, report.total_classes
    ));
    out.push_str(&format!(
        "overall: {}/{} ({:.1}%)\n",
        implemented, total, report.percentage
    ));
    out.push_str(&format!("missing: {}\n", missing));
    out.push_str(&format!(
        "gate: {} (threshold {:.1})\n",
        if report.pass { "pass" } else { "fail" },
        report.threshold
    ));
    out
}

fn count_kind(section: &ModuleSection, kind: SymbolKind) -> usize {
    section
        .results
        .iter()
        .filter(|r| r.symbol.kind == kind)
        .count()
}
