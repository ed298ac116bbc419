//! # Contract Module
//!
//! The five-point CRUD contract template.
//!
//! ## Overview
//!
//! A resource family's contract is exercised as five steps, in order:
//!
//! 1. **Create** - POST the family's payload, expect the documented success
//!    code.
//! 2. **Read** - GET the created entity by identifier, expect success and
//!    spot-check that identifying/content fields echo the payload.
//! 3. **ReadMissing** - GET an identifier chosen never to collide with a
//!    created fixture, expect 404. No other error classes are exercised.
//! 4. **Update** - PUT changed mutable fields, expect success and spot-check
//!    that the response reflects the change. Families without an update
//!    endpoint record an explicit skip.
//! 5. **Delete** - DELETE the entity by identifier, expect success.
//!
//! [`CrudContract`] is the seam: one implementation per resource family
//! supplies the HTTP call for each step plus the field checks.
//! [`run_contract`] drives the steps against an [`ApiClient`] and collects a
//! [`ContractReport`]. A transport error or an unexpected status marks the
//! step failed and the run continues - there is no retry and no recovery;
//! unexpected outcomes are defects to report, not conditions to handle.

use anyhow::Result;
use http::StatusCode;

use crate::client::{ApiClient, ApiResponse};

/// The five points of the contract template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractStep {
    Create,
    Read,
    ReadMissing,
    Update,
    Delete,
}

impl ContractStep {
    /// All steps in execution order.
    pub const ALL: [ContractStep; 5] = [
        ContractStep::Create,
        ContractStep::Read,
        ContractStep::ReadMissing,
        ContractStep::Update,
        ContractStep::Delete,
    ];

    /// Human-readable step name.
    pub fn name(self) -> &'static str {
        match self {
            ContractStep::Create => "create",
            ContractStep::Read => "read",
            ContractStep::ReadMissing => "read-missing",
            ContractStep::Update => "update",
            ContractStep::Delete => "delete",
        }
    }

    /// The status code the contract documents for this step.
    pub fn expected_status(self) -> StatusCode {
        match self {
            ContractStep::ReadMissing => StatusCode::NOT_FOUND,
            _ => StatusCode::OK,
        }
    }
}

/// A spot-check of one body field against its expected value.
#[derive(Debug, Clone)]
pub struct FieldCheck {
    pub field: &'static str,
    pub expected: serde_json::Value,
    pub observed: Option<serde_json::Value>,
}

impl FieldCheck {
    pub fn passed(&self) -> bool {
        self.observed.as_ref() == Some(&self.expected)
    }
}

/// Outcome classification for one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Passed,
    Failed { reason: String },
    Skipped { reason: &'static str },
}

/// Result of one contract step: what was expected, what was observed.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub step: ContractStep,
    pub expected_status: StatusCode,
    pub observed_status: Option<StatusCode>,
    pub checks: Vec<FieldCheck>,
    pub status: StepStatus,
}

impl StepOutcome {
    pub fn passed(&self) -> bool {
        matches!(self.status, StepStatus::Passed)
    }

    fn skipped(step: ContractStep, reason: &'static str) -> Self {
        Self {
            step,
            expected_status: step.expected_status(),
            observed_status: None,
            checks: Vec::new(),
            status: StepStatus::Skipped { reason },
        }
    }

    fn transport_failure(step: ContractStep, err: &anyhow::Error) -> Self {
        Self {
            step,
            expected_status: step.expected_status(),
            observed_status: None,
            checks: Vec::new(),
            status: StepStatus::Failed {
                reason: format!("transport error: {err:#}"),
            },
        }
    }

    /// Judge a completed exchange: status must match, then every field
    /// check must hold against the response body.
    pub(crate) fn evaluate(step: ContractStep, response: &ApiResponse, checks: Vec<FieldCheck>) -> Self {
        let expected = step.expected_status();
        let observed = response.status();
        if observed != expected {
            return Self {
                step,
                expected_status: expected,
                observed_status: Some(observed),
                checks,
                status: StepStatus::Failed {
                    reason: format!(
                        "expected {expected}, got {observed}; body: {}",
                        response.text()
                    ),
                },
            };
        }
        let failed: Vec<String> = checks
            .iter()
            .filter(|check| !check.passed())
            .map(|check| {
                format!(
                    "field {:?}: expected {}, observed {}",
                    check.field,
                    check.expected,
                    check
                        .observed
                        .as_ref()
                        .map_or_else(|| "<absent>".to_string(), ToString::to_string)
                )
            })
            .collect();
        let status = if failed.is_empty() {
            StepStatus::Passed
        } else {
            StepStatus::Failed {
                reason: failed.join("; "),
            }
        };
        Self {
            step,
            expected_status: expected,
            observed_status: Some(observed),
            checks,
            status,
        }
    }
}

/// One resource family's side of the contract.
///
/// Each method issues exactly one HTTP call. `update` returns `None` when
/// the family has no update endpoint; the driver records the skip.
pub trait CrudContract {
    /// Family name used in reports and logs ("pet", "user", "order").
    fn family(&self) -> &'static str;

    fn create(&self, client: &ApiClient) -> Result<ApiResponse>;
    fn read(&self, client: &ApiClient) -> Result<ApiResponse>;
    fn read_missing(&self, client: &ApiClient) -> Result<ApiResponse>;
    fn update(&self, client: &ApiClient) -> Option<Result<ApiResponse>>;
    fn delete(&self, client: &ApiClient) -> Result<ApiResponse>;

    /// Checks applied to the read-back body after create.
    fn read_checks(&self) -> Vec<(&'static str, serde_json::Value)> {
        Vec::new()
    }

    /// Checks applied to the update response body.
    fn update_checks(&self) -> Vec<(&'static str, serde_json::Value)> {
        Vec::new()
    }
}

/// Per-family contract results.
#[derive(Debug, Clone)]
pub struct ContractReport {
    pub family: &'static str,
    pub outcomes: Vec<StepOutcome>,
}

impl ContractReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| !matches!(o.status, StepStatus::Failed { .. }))
    }

    pub fn failed_steps(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, StepStatus::Failed { .. }))
    }
}

/// Drive the five steps of `contract` against `client`.
pub fn run_contract(client: &ApiClient, contract: &dyn CrudContract) -> ContractReport {
    let family = contract.family();
    let mut outcomes = Vec::with_capacity(ContractStep::ALL.len());
    for step in ContractStep::ALL {
        let outcome = run_step(client, contract, step);
        match &outcome.status {
            StepStatus::Passed => {
                tracing::info!(family, step = step.name(), "contract step passed")
            }
            StepStatus::Skipped { reason } => {
                tracing::info!(family, step = step.name(), reason, "contract step skipped")
            }
            StepStatus::Failed { reason } => {
                tracing::warn!(family, step = step.name(), reason, "contract step failed")
            }
        }
        outcomes.push(outcome);
    }
    ContractReport { family, outcomes }
}

fn run_step(client: &ApiClient, contract: &dyn CrudContract, step: ContractStep) -> StepOutcome {
    let (result, checks) = match step {
        ContractStep::Create => (contract.create(client), Vec::new()),
        ContractStep::Read => (contract.read(client), materialize(contract.read_checks())),
        ContractStep::ReadMissing => (contract.read_missing(client), Vec::new()),
        ContractStep::Update => match contract.update(client) {
            Some(result) => (result, materialize(contract.update_checks())),
            None => return StepOutcome::skipped(step, "family has no update endpoint"),
        },
        ContractStep::Delete => (contract.delete(client), Vec::new()),
    };
    match result {
        Ok(response) => {
            let checks = observe(checks, &response);
            StepOutcome::evaluate(step, &response, checks)
        }
        Err(err) => StepOutcome::transport_failure(step, &err),
    }
}

fn materialize(pairs: Vec<(&'static str, serde_json::Value)>) -> Vec<FieldCheck> {
    pairs
        .into_iter()
        .map(|(field, expected)| FieldCheck {
            field,
            expected,
            observed: None,
        })
        .collect()
}

/// Fill in observed values from the response body. A body that is not JSON
/// leaves every observation absent, which fails the checks with a message
/// quoting the body.
fn observe(mut checks: Vec<FieldCheck>, response: &ApiResponse) -> Vec<FieldCheck> {
    if checks.is_empty() {
        return checks;
    }
    let body = response.json_value().ok();
    for check in &mut checks {
        check.observed = body.as_ref().and_then(|v| v.get(check.field)).cloned();
    }
    checks
}
