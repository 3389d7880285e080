use crate::domain::models::{CoverageReport, MatchResult, MissingItem, SymbolKind};

/// Folds per-module match results into one coverage report. No
/// deduplication: the same name missing from two modules is two entries.
#[derive(Default)]
pub struct CoverageAggregator {
    report: CoverageReport,
}

impl CoverageAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &MatchResult) {
        let missing = MissingItem {
            name: result.symbol.name.clone(),
            module: result.symbol.module.clone(),
        };
        match result.symbol.kind {
            SymbolKind::Function => {
                self.report.total_functions += 1;
                if result.found {
                    self.report.implemented_functions += 1;
                } else {
                    self.report.missing_functions.push(missing);
                }
            }
            SymbolKind::Class => {
                self.report.total_classes += 1;
                if result.found {
                    self.report.implemented_classes += 1;
                } else {
                    self.report.missing_classes.push(missing);
                }
            }
        }
    }

    pub fn into_report(self) -> CoverageReport {
        self.report
    }
}
