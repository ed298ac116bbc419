//! # restprobe
//!
//! **restprobe** is a black-box contract test harness for entity-CRUD REST
//! APIs, shipped with the Swagger Petstore demo service as its worked
//! example.
//!
//! ## Overview
//!
//! The harness sends HTTP requests to fixed endpoints, asserts on status
//! codes and response bodies, and attaches descriptive metadata for
//! reporting. It does not own the service under test: the remote API is the
//! sole source of truth for entity lifecycle and may reset or reject state
//! independently of any suite built on this crate.
//!
//! ## Architecture
//!
//! - **[`client`]** - blocking HTTP client wrapper; one request in flight
//!   at a time, no retries
//! - **[`config`]** - environment-driven harness configuration
//! - **[`contract`]** - the five-point CRUD contract template
//!   (create, read, read-missing, update, delete) and its report types
//! - **[`fixture`]** - scoped fixtures that create prerequisite remote
//!   entities and delete them on drop
//! - **[`petstore`]** - typed bindings for the Pet, User, and Order
//!   resource families
//! - **[`report`]** - presentation-only case annotations and suite
//!   summaries
//! - **[`cli`]** - the `restprobe` runner binary
//!
//! ## Quick Start
//!
//! ```no_run
//! use restprobe::client::ApiClient;
//! use restprobe::config::HarnessConfig;
//! use restprobe::contract::run_contract;
//! use restprobe::petstore::PetContract;
//!
//! let client = ApiClient::new(&HarnessConfig::from_env()).expect("client");
//! let report = run_contract(&client, &PetContract::default());
//! assert!(report.passed());
//! ```
//!
//! ## Error Model
//!
//! There is no local recovery anywhere in the harness: transport failures
//! surface as `anyhow::Error`, unexpected statuses surface as failed step
//! outcomes or failed assertions. The only error class that is itself under
//! test is the 404 of the two read-missing operations.

pub mod cli;
pub mod client;
pub mod config;
pub mod contract;
pub mod fixture;
pub mod petstore;
pub mod report;

pub use client::{ApiClient, ApiResponse};
pub use config::HarnessConfig;
pub use contract::{run_contract, ContractReport, ContractStep, CrudContract, StepStatus};
pub use fixture::{OrderFixture, PetFixture, UserFixture};
pub use report::{CaseMeta, SuiteReport};

/// Install the fmt tracing subscriber honoring `RUST_LOG`.
///
/// Called by the binary; library consumers bring their own subscriber.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
