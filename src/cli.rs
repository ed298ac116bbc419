//! # CLI Module
//!
//! Command-line interface for the contract harness runner.
//!
//! ## Commands
//!
//! ### `run`
//!
//! Run the five-point contract for one or all resource families:
//!
//! ```bash
//! restprobe run --base-url https://petstore.swagger.io/v2
//! restprobe run --family pet,order
//! ```
//!
//! Exits nonzero if any contract step fails.
//!
//! ### `inventory`
//!
//! Fetch the store inventory and print the status → count mapping:
//!
//! ```bash
//! restprobe inventory
//! ```
//!
//! ### `login`
//!
//! Exercise the login endpoint and print the session message:
//!
//! ```bash
//! restprobe login --username testuser --password 654321
//! ```
//!
//! The base URL defaults to `RESTPROBE_BASE_URL`, falling back to the
//! public Petstore demo instance.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use url::Url;

use crate::client::ApiClient;
use crate::config::HarnessConfig;
use crate::contract::{run_contract, CrudContract};
use crate::petstore::user::LOGIN_SESSION_MARKER;
use crate::petstore::{OrderContract, PetContract, StoreApi, UserApi, UserContract};
use crate::report::SuiteReport;

/// Command-line interface for restprobe
#[derive(Parser)]
#[command(name = "restprobe")]
#[command(about = "Black-box REST contract harness", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the five-point CRUD contract against the target service
    Run {
        /// Base URL of the service under test (default: env, then the demo instance)
        #[arg(short, long)]
        base_url: Option<Url>,

        /// Limit the run to specific families (comma-separated or repeated)
        #[arg(long, value_enum, num_args = 1.., value_delimiter = ',')]
        family: Option<Vec<Family>>,
    },
    /// Fetch the store inventory mapping
    Inventory {
        /// Base URL of the service under test
        #[arg(short, long)]
        base_url: Option<Url>,
    },
    /// Exercise the login endpoint
    Login {
        /// Base URL of the service under test
        #[arg(short, long)]
        base_url: Option<Url>,

        /// Username to log in with
        #[arg(long, default_value = "testuser")]
        username: String,

        /// Password to log in with
        #[arg(long, default_value = "654321")]
        password: String,
    },
}

/// Resource families the runner knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Family {
    Pet,
    User,
    Order,
}

impl Family {
    const ALL: [Family; 3] = [Family::Pet, Family::User, Family::Order];

    fn contract(self) -> Box<dyn CrudContract> {
        match self {
            Family::Pet => Box::new(PetContract::default()),
            Family::User => Box::new(UserContract::default()),
            Family::Order => Box::new(OrderContract::default()),
        }
    }
}

/// Execute a parsed CLI invocation.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { base_url, family } => {
            let client = client_for(base_url)?;
            let families = family.unwrap_or_else(|| Family::ALL.to_vec());
            let mut suite = SuiteReport::new();
            for family in families {
                suite.push(run_contract(&client, family.contract().as_ref()));
            }
            print!("{}", suite.render());
            if !suite.passed() {
                bail!("{} contract step(s) failed", suite.failed_step_count());
            }
            Ok(())
        }
        Commands::Inventory { base_url } => {
            let client = client_for(base_url)?;
            let counts = StoreApi::new(&client)
                .inventory_counts()
                .context("inventory fetch failed")?;
            for (status, count) in &counts {
                println!("{status:<24} {count}");
            }
            Ok(())
        }
        Commands::Login {
            base_url,
            username,
            password,
        } => {
            let client = client_for(base_url)?;
            let response = UserApi::new(&client)
                .login(&username, &password)
                .context("login request failed")?;
            if !response.is_success() {
                bail!(
                    "login returned {}; body: {}",
                    response.status(),
                    response.text()
                );
            }
            if !response.text().contains(LOGIN_SESSION_MARKER) {
                bail!("login response carries no session marker: {}", response.text());
            }
            println!("{}", response.text());
            Ok(())
        }
    }
}

fn client_for(base_url: Option<Url>) -> Result<ApiClient> {
    let mut config = HarnessConfig::from_env();
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    ApiClient::new(&config)
}
