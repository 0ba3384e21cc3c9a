//! Command-line host for the onboarding entry screen.
//!
//! Each invocation is one mount: the command raises the activation hook
//! and/or a choice, then prints the resulting state and navigation history.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ob_core::config::AppConfig;
use ob_core::onboarding::{FlowType, OnboardingEntryState, OnboardingIntent, WalletState};
use ob_core::ports::WalletStatePort;
use serde::Serialize;
use tracing::info;

use crate::bootstrap::{default_data_dir, resolve_config, OnboardingRuntime};

#[derive(Debug, Parser)]
#[command(name = "wallet-onboarding", version, about = "Wallet onboarding entry routing")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory (defaults to the platform local data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the persisted wallet state
    Show,
    /// Activate the entry screen and apply the redirect decision
    Activate,
    /// Activate the entry screen, then choose `create` or `import`
    Choose { flow: FlowType },
    /// Record whether a keyring exists (what account creation does upstream)
    Keyring {
        #[arg(action = clap::ArgAction::Set)]
        exists: bool,
    },
    /// Clear the persisted state so onboarding starts over
    Reset,
}

/// What a command left behind.
#[derive(Debug, Serialize, PartialEq)]
pub struct Report {
    pub wallet: WalletState,
    pub entry_state: Option<OnboardingEntryState>,
    pub history: Vec<String>,
}

impl Cli {
    pub fn resolve_config(&self) -> anyhow::Result<AppConfig> {
        let data_dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };
        resolve_config(self.config.as_deref(), &data_dir)
    }
}

pub async fn run(command: Command, config: &AppConfig) -> anyhow::Result<Report> {
    let runtime = OnboardingRuntime::build(config);

    let entry_state = match command {
        Command::Show => None,
        Command::Activate => Some(runtime.controller.activate().await?),
        Command::Choose { flow } => {
            let state = runtime.controller.activate().await?;
            if state.accepts_choice() {
                Some(runtime.controller.choose(OnboardingIntent::from(flow)).await?)
            } else {
                info!(?state, %flow, "entry screen redirected, choice not offered");
                Some(state)
            }
        }
        Command::Keyring { exists } => {
            let mut wallet = runtime.wallet_state.get_state().await?;
            wallet.keyring_exists = exists;
            runtime.wallet_state.set_state(&wallet).await?;
            None
        }
        Command::Reset => {
            runtime.reset_onboarding().execute().await?;
            None
        }
    };

    Ok(Report {
        wallet: runtime.wallet_state.get_state().await?,
        entry_state,
        history: runtime.history.entries().await,
    })
}
