//! botpower CLI
//!
//! Thin client for a four-outlet networked PDU: one invocation builds one
//! HTTP request, sends it with basic authentication, and renders the device's
//! response as an outlet status table.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use botpower_core::query::{setpower_query, GETPOWER_QUERY};
use botpower_core::status::parse_status;
use botpower_core::types::{Outlet, PowerAction};
use botpowerctl::cli::Cli;
use botpowerctl::client::PduClient;
use botpowerctl::config::PduConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = cli.validate_outlet_requirement() {
        err.exit();
    }

    let action = PowerAction::from(cli.action);
    let outlet = cli.outlet.map(Outlet::from);

    // Build configuration using priority chain: defaults → file → env → CLI args
    let mut builder = PduConfig::builder().with_config_file(cli.config.as_deref())?;
    builder = builder.with_env_overrides();
    if let Some(hostname) = cli.hostname {
        builder = builder.with_hostname(hostname);
    }
    if let Some(username) = cli.username {
        builder = builder.with_username(username);
    }
    if let Some(password) = cli.password {
        builder = builder.with_password(password);
    }
    let config = builder.build()?;

    // Echo the resolved selection
    match outlet {
        Some(outlet) => println!("outlet: {}", outlet),
        None => println!("outlet: none"),
    }
    println!("action: {}", action);

    let query = match (action.power_state(), outlet) {
        (Some(state), Some(outlet)) => setpower_query(outlet, state),
        _ => GETPOWER_QUERY.to_string(),
    };

    let client = PduClient::new(config)?;
    if cli.verbose {
        eprintln!("requesting {}", client.url_for(&query));
    }

    let response = client.send(&query).await?;

    if !response.is_success() {
        // Single diagnostic report, no retry; exits normally afterwards.
        println!("{}", "FAILED REQUEST".red().bold());
        println!("url: {}", response.url);
        println!("status code: {}", response.status.as_u16());
        println!("headers");
        println!("{}", "-".repeat(70));
        for (name, value) in &response.headers {
            println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
        }
        return Ok(());
    }

    if cli.verbose {
        eprintln!("received {} bytes", response.body.len());
    }

    // An empty report (no recognizable outlet pairs) prints nothing extra.
    print!("{}", parse_status(&response.body));

    Ok(())
}
