//! # Promo Demo
//!
//! Prices sample orders under each promotion and under the best-promotion
//! selector.
//!
//! ## Usage
//! ```bash
//! # Full walkthrough
//! cargo run -p promo-demo
//!
//! # One scenario, with per-rule trace events
//! PROMO_LOG=promo_core=trace cargo run -p promo-demo -- --scenario joe-banana-best
//!
//! # Registered promotions
//! cargo run -p promo-demo -- --list
//! ```

mod config;
mod scenarios;

use anyhow::{bail, Context};
use clap::Parser;
use promo_core::registry;
use tracing::{debug, info};

use crate::config::DemoConfig;
use crate::scenarios::{Policy, ScenarioReport};

/// Walk through promotion selection on sample carts.
#[derive(Debug, Parser)]
#[command(name = "promo-demo", version)]
struct Cli {
    /// List registered promotions and exit
    #[arg(long)]
    list: bool,

    /// Run a single scenario by name (e.g. `ann-default-best`)
    #[arg(short, long)]
    scenario: Option<String>,

    /// Print evaluated scenarios as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = DemoConfig::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_target(true)
        .init();

    debug!(?config, "Configuration loaded");

    let registry = registry::global();
    info!(promotions = registry.len(), "Promotion registry ready");

    if cli.list {
        println!("Registered promotions:");
        for def in registry.iter() {
            println!("  {:<12} {}", def.name, def.description);
        }
        return Ok(());
    }

    let mut scenarios = scenarios::all().context("building sample carts")?;
    if let Some(name) = &cli.scenario {
        scenarios.retain(|s| s.name == name.as_str());
        if scenarios.is_empty() {
            bail!("unknown scenario '{}'", name);
        }
    }

    if cli.json {
        let reports = scenarios
            .iter()
            .map(|s| ScenarioReport::evaluate(s, &registry))
            .collect::<Result<Vec<_>, _>>()?;
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for scenario in &scenarios {
        let order = scenario.order(&registry);
        println!("{}: {}", scenario.title(), order);

        if config.report_winner && matches!(scenario.policy, Policy::Best) {
            let best = registry.best(&order)?;
            println!("  Promotion with maximum discount: {} ({})", best.name, best.discount);
        }
    }

    Ok(())
}
