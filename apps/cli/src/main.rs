//! # qa-agent
//!
//! Entry point: parses flags, sets up logging, loads configuration and
//! dispatches to a subcommand.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use qa_cli::commands::{plan, script, totals};
use qa_cli::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "qa-agent")]
#[command(author, version)]
#[command(
    about = "Checkout totals and test-plan tooling for the QA agent",
    long_about = "Computes checkout totals under the product rules (SAVE15, standard/express \
                  shipping), and turns generated Markdown test plans into scenarios for \
                  script generation."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (defaults to QA_OUTPUT_FORMAT, then pretty)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute subtotal, discount, shipping and total for a cart
    Totals(totals::TotalsArgs),

    /// List the test cases in a Markdown test plan
    ParsePlan(plan::ParsePlanArgs),

    /// Render test cases as scenario text for script generation
    Scenario(plan::ScenarioArgs),

    /// Strip Markdown code fences from a generated script
    CleanScript(script::CleanScriptArgs),
}

fn init_tracing(verbose: bool) {
    // RUST_LOG wins; otherwise stay quiet unless --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("qa_agent=debug,qa_cli=debug")
        } else {
            EnvFilter::new("qa_cli=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig::from_env()?;
    debug!(?config, "Configuration loaded");

    let format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Totals(args) => totals::execute(args, &config, format),
        Commands::ParsePlan(args) => plan::execute_parse(args, format),
        Commands::Scenario(args) => plan::execute_scenario(args, format),
        Commands::CleanScript(args) => script::execute(args, format),
    }
}
