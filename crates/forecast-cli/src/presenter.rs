//! CLI report presenter.

use console::style;

use forecast_core::analysis::BestCities;
use forecast_orchestration::interfaces::ReportPresenter;

use crate::output::{format_favorability, format_report};

/// Unstyled text of one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLines {
    /// The single line written to stdout.
    pub report: String,
    /// Shared statistics of the best cities, written to stderr.
    pub details: Option<String>,
}

/// Prints the report line to stdout.
pub struct ConsoleReporter {
    details: bool,
}

impl ConsoleReporter {
    #[must_use]
    pub fn new(details: bool) -> Self {
        Self { details }
    }

    /// Lines this reporter writes for `best`.
    #[must_use]
    pub fn render(&self, best: &BestCities) -> ReportLines {
        let details = if self.details {
            best.favorability.as_ref().map(format_favorability)
        } else {
            None
        };
        ReportLines {
            report: format_report(best),
            details,
        }
    }
}

impl ReportPresenter for ConsoleReporter {
    fn present_best(&self, best: &BestCities) {
        let lines = self.render(best);
        println!("{}", style(lines.report).bold());

        if let Some(details) = lines.details {
            eprintln!("  {}", style(details).dim());
        }
    }
}
