mod cmd;
mod output;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tachanun",
    about = "Is Tachanun said today? Hebrew calendar rules in English and Hebrew",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (missing file means defaults)
    #[arg(long, global = true, env = "TACHANUN_CONFIG", default_value = "tachanun.yaml")]
    config: PathBuf,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show whether Tachanun is said today (local date)
    Today,

    /// Show whether Tachanun is said on a given civil date
    Check {
        /// Civil date, YYYY-MM-DD
        date: String,
    },

    /// List a run of upcoming days
    Upcoming {
        /// First civil date, YYYY-MM-DD (default: today)
        #[arg(long)]
        from: Option<String>,

        /// Number of days (default: upcoming.days from config)
        #[arg(long)]
        days: Option<u32>,
    },

    /// Serve the web page and JSON API
    Serve {
        /// Address to bind (default: server.host from config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on, 0 = OS-assigned (default: server.port from config)
        #[arg(long)]
        port: Option<u16>,

        /// Open a browser once listening
        #[arg(long)]
        open: bool,
    },

    /// Inspect and validate the config file
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// `RUST_LOG` when it is set and parses, otherwise `default` for everything.
fn log_filter(rust_log: Option<String>, default: tracing::Level) -> EnvFilter {
    rust_log
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(default.into()))
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok(), default_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Today => cmd::day::today(cli.json),
        Commands::Check { date } => cmd::day::check(&date, cli.json),
        Commands::Upcoming { from, days } => {
            cmd::upcoming::run(&cli.config, from.as_deref(), days, cli.json)
        }
        Commands::Serve { host, port, open } => {
            cmd::serve::run(&cli.config, host.as_deref(), port, open)
        }
        Commands::Config { subcommand } => cmd::config::run(&cli.config, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn bare_rust_log_level_overrides_default() {
        let filter = log_filter(Some("debug".to_string()), tracing::Level::WARN);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn unset_or_blank_rust_log_uses_default() {
        let filter = log_filter(None, tracing::Level::INFO);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));

        let filter = log_filter(Some("  ".to_string()), tracing::Level::WARN);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
