//! CLI entry point and command handlers for uiconf.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

use uiconf::configuration::Configuration;
use uiconf::formatters;

#[derive(Parser)]
#[command(name = "uiconf")]
#[command(version)]
#[command(about = "Inspect UI configuration flags", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    uiconf inspect --layout-direction rtl --ui-mode 0x20\n    uiconf inspect --ui-mode night --json\n\n    Values accept names (ltr, rtl, night) or raw integers (decimal or 0x hex)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect a configuration snapshot built from the given field values
    Inspect {
        /// Layout-direction field (ltr, rtl, or a raw integer)
        #[arg(long, value_name = "VALUE", default_value = "ltr")]
        layout_direction: String,
        /// UI-mode field (a night-mode name or a raw integer)
        #[arg(long, value_name = "VALUE", default_value = "0")]
        ui_mode: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Show version and build information
    Version,
}

fn main() -> Result<()> {
    // Suppress color when stdout is not a terminal
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            layout_direction,
            ui_mode,
            json,
        } => cmd_inspect(&layout_direction, &ui_mode, json),
        Commands::Completions { shell } => cmd_completions(shell),
        Commands::Version => cmd_version(),
    }
}

/// Build a snapshot from CLI values and print every predicate result
fn cmd_inspect(layout_direction: &str, ui_mode: &str, json: bool) -> Result<()> {
    let config = Configuration::new(
        formatters::parse_direction_value(layout_direction)?,
        formatters::parse_ui_mode_value(ui_mode)?,
    );

    if json {
        println!("{}", formatters::format_json_report(&config)?);
    } else {
        println!("{}", formatters::format_regular_report(&config));
    }

    Ok(())
}

/// Generate shell completion script
fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "uiconf", &mut io::stdout());
    Ok(())
}

/// Show version and build information
fn cmd_version() -> Result<()> {
    const GIT_SHA: &str = env!("GIT_SHA");
    const BUILD_DATE: &str = env!("BUILD_DATE");
    println!("uiconf {}", env!("CARGO_PKG_VERSION"));
    println!("commit: {}", GIT_SHA);
    println!("built: {}", BUILD_DATE);
    Ok(())
}
