//! rtime CLI - epoch milliseconds, UTC and local time from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rtime_core::application::TimeConversion;
use rtime_core::domain::PosixTimeMillis;
use rtime_infra_system::configured_conversion;

const DEFAULT_LOG_FILTER: &str = "rtime=warn";

#[derive(Parser)]
#[command(name = "rtime")]
#[command(about = "Convert between epoch milliseconds, UTC and local time", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Log format for stderr diagnostics (pretty or json)
    #[arg(long, global = true, env = "RTIME_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current time in milliseconds since epoch
    Now,

    /// Convert milliseconds since epoch to UTC
    Utc {
        /// Milliseconds since epoch (may be negative)
        #[arg(allow_hyphen_values = true)]
        millis: i64,
    },

    /// Convert milliseconds since epoch to local time
    Local {
        /// Milliseconds since epoch (may be negative)
        #[arg(allow_hyphen_values = true)]
        millis: i64,

        /// Fixed UTC offset to use instead of the host timezone (e.g. +02:00)
        #[arg(long, env = "RTIME_UTC_OFFSET", allow_hyphen_values = true)]
        utc_offset: Option<String>,
    },
}

/// Result of one command, rendered as text or JSON
#[derive(Debug, Serialize)]
struct Report {
    millis: PosixTimeMillis,
    #[serde(skip_serializing_if = "Option::is_none")]
    utc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    local: Option<String>,
}

impl Report {
    fn render(&self, json: bool) -> Result<String> {
        if json {
            return serde_json::to_string_pretty(self).context("Failed to serialize report");
        }

        let mut lines = vec![format!("{} {}", "millis:".bold(), self.millis)];
        if let Some(utc) = &self.utc {
            lines.push(format!("{} {}", "utc:".bold(), utc));
        }
        if let Some(local) = &self.local {
            lines.push(format!("{} {}", "local:".bold(), local));
        }
        Ok(lines.join("\n"))
    }
}

fn init_logging(log_format: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match log_format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(
    command: Commands,
    conversion_for: impl Fn(Option<&str>) -> Result<TimeConversion>,
) -> Result<Report> {
    match command {
        Commands::Now => {
            let conv = conversion_for(None)?;
            let millis = conv.timestamp().context("Failed to read the wall clock")?;
            Ok(Report {
                millis,
                utc: None,
                local: None,
            })
        }

        Commands::Utc { millis } => {
            let conv = conversion_for(None)?;
            let millis = PosixTimeMillis::new(millis);
            let utc = conv
                .to_utc(millis)
                .with_context(|| format!("Cannot convert {} ms to UTC", millis))?;
            Ok(Report {
                millis,
                utc: Some(utc.to_rfc3339()),
                local: None,
            })
        }

        Commands::Local { millis, utc_offset } => {
            let conv = conversion_for(utc_offset.as_deref())?;
            let millis = PosixTimeMillis::new(millis);
            let local = conv
                .to_local(millis)
                .with_context(|| format!("Cannot convert {} ms to local time", millis))?;
            Ok(Report {
                millis,
                utc: Some(local.to_utc().to_rfc3339()),
                local: Some(local.to_rfc3339()),
            })
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_format);

    debug!(json = cli.json, "rtime v{} starting", rtime_core::VERSION);

    let report = run(cli.command, |offset| {
        configured_conversion(offset).context("Invalid UTC offset")
    })?;
    println!("{}", report.render(cli.json)?);

    Ok(())
}
