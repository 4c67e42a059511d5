// ─────────────────────────────────────────────────────────────────────
// SCPN Heat Core — CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Usage: `heat-cli [CONFIG.json]`
//!
//! Without a config the 6-node reference scenario is run. Prints one
//! `u(i,t) = value` line per interior node. Log level via `RUST_LOG`.

use std::io::{self, Write};

use anyhow::{Context, Result};
use heat_core::crank_nicolson::HeatSolver;
use heat_types::config::DiffusionConfig;
use heat_types::state::RunSummary;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: heat-cli [CONFIG.json]";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut solver = match std::env::args().nth(1).as_deref() {
        Some("-h") | Some("--help") => {
            println!("{USAGE}");
            return Ok(());
        }
        Some(path) => {
            info!(path, "loading configuration");
            HeatSolver::from_file(path)
                .with_context(|| format!("failed to load config from {path}"))?
        }
        None => {
            info!("no config given, running reference scenario");
            HeatSolver::new(&DiffusionConfig::reference()).context("invalid configuration")?
        }
    };

    let summary = solver.run().context("Crank-Nicolson run failed")?;
    info!(
        steps = summary.steps_taken,
        solve_time_ms = summary.solve_time_ms,
        "run complete"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &summary)?;
    out.flush()?;
    Ok(())
}

/// One line per interior node: `u(i,t) = value`.
fn write_report<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    let t = summary.steps_taken;
    for (k, value) in summary.interior().iter().enumerate() {
        writeln!(out, "u({},{t}) = {value}", k + 1)?;
    }
    Ok(())
}
