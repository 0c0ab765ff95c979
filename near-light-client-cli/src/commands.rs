//! NearLightClientCli Subcommands
//!
//! This is where you specify the subcommands of your application.
//!
//! See the `impl Configurable` below for how to specify the path to the
//! application's configuration file.

mod start;
mod verify_block_inclusion;
mod verify_transaction;
mod view_bps;
mod view_head;

use self::{
    start::StartCmd, verify_block_inclusion::VerifyBlockInclusionCmd,
    verify_transaction::VerifyTransactionCmd, view_bps::ViewBpsCmd, view_head::ViewHeadCmd,
};
use crate::config::AppConfig;
use abscissa_core::{config::Override, Command, Configurable, FrameworkError, Runnable};
use std::path::PathBuf;

/// NearLightClientCli Configuration Filename
pub const CONFIG_FILE: &str = "near_light_client_cli.toml";

/// NearLightClientCli Subcommands
/// Subcommands need to be listed in an enum.
#[derive(clap::Parser, Command, Debug, Runnable)]
pub enum NearLightClientCliCmd {
    /// Start a NEAR light client instance and keep updating its head.
    Start(StartCmd),
    /// View cached head data at the given height (latest if omitted).
    ViewHead(ViewHeadCmd),
    /// View the cached block producer set for a given epoch.
    ViewBps(ViewBpsCmd),
    /// Verify a transaction or receipt's outcome against the latest head.
    VerifyTransaction(VerifyTransactionCmd),
    /// Verify that a past header is an ancestor of the latest head.
    VerifyBlockInclusion(VerifyBlockInclusionCmd),
}

/// Entry point for the application. It needs to be a struct to allow using subcommands!
#[derive(clap::Parser, Command, Debug)]
#[command(author, about, version)]
pub struct EntryPoint {
    #[command(subcommand)]
    cmd: NearLightClientCliCmd,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Use the specified config file
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Runnable for EntryPoint {
    fn run(&self) {
        self.cmd.run()
    }
}

/// This trait allows you to define how application configuration is loaded.
impl Configurable<AppConfig> for EntryPoint {
    /// Location of the configuration file
    fn config_path(&self) -> Option<PathBuf> {
        // Check if the config file exists, and if it does not, ignore it.
        // If you'd like for a missing configuration file to be a hard error
        // instead, always return `Some(CONFIG_FILE)` here.
        let filename = self
            .config
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| CONFIG_FILE.into());

        if filename.exists() {
            Some(filename)
        } else {
            None
        }
    }

    /// Apply changes to the config after it's been loaded, e.g. overriding
    /// values in a config file using command-line options.
    fn process_config(&self, config: AppConfig) -> Result<AppConfig, FrameworkError> {
        match &self.cmd {
            NearLightClientCliCmd::Start(cmd) => cmd.override_config(config),
            // If you don't need special overrides for some subcommands, you
            // can just use a catch all.
            _ => Ok(config),
        }
    }
}
