//! ShadeKit - shade ramp generator for design-system palettes
//!
//! This binary provides headless palette tooling: generating light/dark
//! shade ramps from compact palette text, inspecting parsed configs, and
//! canonicalising palette files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shadekit::cli::{FmtArgs, GenerateArgs, InspectArgs};
use shadekit::constants::APP_BINARY_NAME;

/// ShadeKit - shade ramp generator for design-system palettes
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate shade ramps from palette text
    Generate(GenerateArgs),
    /// Show parsed configs, model labels and scheme directives
    Inspect(InspectArgs),
    /// Canonicalise palette text formatting
    Fmt(FmtArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Generate(args) => args.execute(),
        Command::Inspect(args) => args.execute(),
        Command::Fmt(args) => args.execute(),
    }
}
