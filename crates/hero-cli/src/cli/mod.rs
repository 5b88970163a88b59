//! CLI host for the hero detail widget.

mod commands;
mod terminal_view;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use hero_core::config;

use commands::{run_chart, run_completions, run_config, run_list, run_show};

/// Top-level CLI for the hero detail widget.
#[derive(Debug, Parser)]
#[command(name = "hero")]
#[command(about = "Browse super hero details and power stats", long_about = None)]
pub struct Cli {
    /// Hero API base URL (overrides `base_url` from config.toml).
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Load the hero list and print it.
    List {
        /// Only show heroes whose name contains this text (case-insensitive).
        #[arg(long)]
        filter: Option<String>,
    },

    /// Select a hero by id or name and show title, image, occupation and power chart.
    Show {
        /// Hero id, or text matched against hero names (first match wins).
        query: String,
        /// Print the final state of every region as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the power-stats chart (data + layout) for a hero id as JSON.
    Chart {
        /// Hero identifier.
        id: String,
    },

    /// Print the effective configuration and where it is stored.
    Config,

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell, &mut Cli::command());
            return Ok(());
        }

        let mut cfg = config::load_or_init()?;
        if let Some(base_url) = cli.base_url {
            cfg.base_url = base_url;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::List { filter } => run_list(&cfg, filter.as_deref()).await?,
            CliCommand::Show { query, json } => run_show(&cfg, &query, json).await?,
            CliCommand::Chart { id } => run_chart(&cfg, &id).await?,
            CliCommand::Config => run_config(&cfg)?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
