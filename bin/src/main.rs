//! docsize CLI - storage and sharding estimates for NoSQL document designs.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod display;

use config::Settings;
use display::Format;

#[derive(Parser)]
#[command(name = "docsize")]
#[command(about = "Storage and sharding estimates for NoSQL document designs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Size configuration file (JSON). Defaults to the built-in type sizes.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    format: Format,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog database designs
    Databases,

    /// Show the size summary and per-collection breakdown of one design
    Analyze {
        /// Design name (e.g., DB1)
        design: String,

        /// Only analyze this collection
        #[arg(short, long)]
        collection: Option<String>,
    },

    /// Compare the total size of every catalog design
    Compare,

    /// Show documents and distinct key values per server for each sharding strategy
    Shard {
        /// Number of servers. Defaults to the catalog's "servers" statistic.
        #[arg(short, long, allow_negative_numbers = true)]
        servers: Option<f64>,
    },

    /// Estimate the size of a custom schema
    Estimate {
        /// Schema file (JSON)
        #[arg(long)]
        schema: PathBuf,

        /// Statistics file (JSON object of numbers), overlaid on the catalog statistics
        #[arg(long)]
        stats: Option<PathBuf>,

        /// Number of documents in the collection
        #[arg(short = 'n', long, conflicts_with = "count_stat")]
        count: Option<f64>,

        /// Statistic giving the number of documents in the collection
        #[arg(long)]
        count_stat: Option<String>,
    },
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins over the verbosity flags when set.
fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = cli.config.as_deref();

    match command {
        Commands::Databases => commands::databases::list_databases(cli.format),
        Commands::Analyze { design, collection } => commands::analyze::analyze(
            &Settings::load(config)?,
            &design,
            collection.as_deref(),
            cli.format,
        ),
        Commands::Compare => commands::compare::compare(&Settings::load(config)?, cli.format),
        Commands::Shard { servers } => commands::shard::shard(servers, cli.format),
        Commands::Estimate {
            schema,
            stats,
            count,
            count_stat,
        } => commands::estimate::estimate(
            &Settings::load(config)?,
            &schema,
            stats.as_deref(),
            count,
            count_stat.as_deref(),
            cli.format,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["docsize", "compare", "--format", "json", "-vv"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Compare)));
        assert!(matches!(cli.format, Format::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_count_conflicts_with_count_stat() {
        let result = Cli::try_parse_from([
            "docsize",
            "estimate",
            "--schema",
            "s.json",
            "--count",
            "10",
            "--count-stat",
            "clients",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_server_count_reaches_validation() {
        let cli = Cli::try_parse_from(["docsize", "shard", "--servers", "-5"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Shard { servers: Some(s) }) if s == -5.0
        ));
    }
}
