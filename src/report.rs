//! Reporting annotations and the suite-level summary.
//!
//! [`CaseMeta`] carries the human-readable feature/title/description trio
//! attached to each case. It is presentation only: announced as a
//! structured tracing event for report tooling to pick up, with no effect
//! on execution or outcome.

use std::fmt::Write as _;

use crate::contract::{ContractReport, StepStatus};

/// Presentation metadata for one test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseMeta {
    pub feature: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl CaseMeta {
    pub const fn new(
        feature: &'static str,
        title: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            feature,
            title,
            description,
        }
    }

    /// Emit the annotation for report collectors.
    pub fn announce(&self) {
        tracing::info!(
            feature = self.feature,
            title = self.title,
            description = self.description,
            "case"
        );
    }
}

/// Aggregated contract results across resource families.
#[derive(Debug, Default)]
pub struct SuiteReport {
    reports: Vec<ContractReport>,
}

impl SuiteReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, report: ContractReport) {
        self.reports.push(report);
    }

    pub fn reports(&self) -> &[ContractReport] {
        &self.reports
    }

    pub fn passed(&self) -> bool {
        self.reports.iter().all(ContractReport::passed)
    }

    pub fn failed_step_count(&self) -> usize {
        self.reports.iter().map(|r| r.failed_steps().count()).sum()
    }

    /// Plain-text summary, one line per step.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for report in &self.reports {
            for outcome in &report.outcomes {
                let verdict = match &outcome.status {
                    StepStatus::Passed => "PASS".to_string(),
                    StepStatus::Skipped { reason } => format!("SKIP ({reason})"),
                    StepStatus::Failed { reason } => format!("FAIL ({reason})"),
                };
                let _ = writeln!(
                    out,
                    "{:<8} {:<14} {}",
                    report.family,
                    outcome.step.name(),
                    verdict
                );
            }
        }
        let _ = writeln!(
            out,
            "{} famil{} checked, {} failed step(s)",
            self.reports.len(),
            if self.reports.len() == 1 { "y" } else { "ies" },
            self.failed_step_count()
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiResponse;
    use crate::contract::{ContractStep, StepOutcome};
    use http::StatusCode;

    fn report_with(status: StatusCode) -> ContractReport {
        ContractReport {
            family: "pet",
            outcomes: vec![StepOutcome::evaluate(
                ContractStep::Create,
                &ApiResponse::from_parts(status, "{}"),
                Vec::new(),
            )],
        }
    }

    #[test]
    fn render_lists_each_step_and_totals() {
        let mut suite = SuiteReport::new();
        suite.push(report_with(StatusCode::OK));
        let rendered = suite.render();
        assert!(rendered.contains("pet"));
        assert!(rendered.contains("create"));
        assert!(rendered.contains("PASS"));
        assert!(rendered.contains("1 family checked, 0 failed step(s)"));
        assert!(suite.passed());
    }

    #[test]
    fn failed_steps_are_counted_and_quoted() {
        let mut suite = SuiteReport::new();
        suite.push(report_with(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!suite.passed());
        assert_eq!(suite.failed_step_count(), 1);
        assert!(suite.render().contains("FAIL"));
    }

    #[test]
    fn case_meta_is_constant_constructible() {
        const META: CaseMeta = CaseMeta::new("Pet", "Create a pet", "POST /pet returns 200");
        assert_eq!(META.feature, "Pet");
        META.announce();
    }
}
