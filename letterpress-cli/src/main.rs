//! Letterpress — render the bundled demo messages.
//!
//! # Usage
//!
//! ```text
//! letterpress render <welcome|reset|receipt> [--theme default|plain] [--config FILE] [--out DIR] [--json]
//! letterpress render --all [--theme ...] [--config FILE] --out DIR
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`); logs go to stderr.

mod commands;
mod demos;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::render::RenderArgs;
use letterpress::Theme;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "letterpress",
    version,
    about = "Render email bodies to inlined HTML and plain text",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render one or all demo messages.
    Render(RenderArgs),
}

// ---------------------------------------------------------------------------
// Shared Theme argument — strict parsing for the command line
// ---------------------------------------------------------------------------

/// Thin wrapper so clap rejects unknown theme names instead of silently
/// falling back.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeArg(pub Theme);

impl FromStr for ThemeArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self(Theme::Default)),
            "plain" => Ok(Self(Theme::Plain)),
            other => Err(format!("unknown theme '{other}'; expected: default, plain")),
        }
    }
}

impl fmt::Display for ThemeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => args.run(),
    }
}
