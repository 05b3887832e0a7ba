//! CLI argument definitions

use std::path::PathBuf;

use botpower_core::types::{Outlet, PowerAction};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};

/// PDU outlet control CLI
#[derive(Parser, Debug)]
#[command(name = "botpower")]
#[command(version, about = "Control a four-outlet networked PDU", long_about = None)]
pub struct Cli {
    /// Action to take upon the associated outlet(s)
    #[arg(short, long, value_enum)]
    pub action: ActionArg,

    /// Outlet to set the power state on (required unless the action is display)
    #[arg(short, long, value_enum)]
    pub outlet: Option<OutletArg>,

    /// PDU hostname or IP address (overrides config file)
    #[arg(long)]
    pub hostname: Option<String>,

    /// Configuration file to use instead of the default
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Username for authentication to the PDU (overrides config file)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password for authentication to the PDU (overrides config file)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Print request diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Enforce the outlet requirement: a mutating action needs a target
    /// outlet, display ignores it.
    ///
    /// Returns the clap usage error (exit code 2 when surfaced via
    /// [`clap::Error::exit`]); callers run this before any network activity.
    pub fn validate_outlet_requirement(&self) -> Result<(), clap::Error> {
        if PowerAction::from(self.action).is_mutating() && self.outlet.is_none() {
            return Err(Self::command().error(
                ErrorKind::MissingRequiredArgument,
                "the --outlet flag is required unless the action is display",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ActionArg {
    /// Turn the outlet(s) on
    On,
    /// Turn the outlet(s) off
    Off,
    /// Display the current state of the outlets
    Display,
}

impl From<ActionArg> for PowerAction {
    fn from(action: ActionArg) -> Self {
        match action {
            ActionArg::On => PowerAction::On,
            ActionArg::Off => PowerAction::Off,
            ActionArg::Display => PowerAction::Display,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutletArg {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
    #[value(name = "3")]
    Three,
    #[value(name = "4")]
    Four,
    /// All four outlets
    All,
}

impl From<OutletArg> for Outlet {
    fn from(outlet: OutletArg) -> Self {
        match outlet {
            OutletArg::One => Outlet::One,
            OutletArg::Two => Outlet::Two,
            OutletArg::Three => Outlet::Three,
            OutletArg::Four => Outlet::Four,
            OutletArg::All => Outlet::All,
        }
    }
}
