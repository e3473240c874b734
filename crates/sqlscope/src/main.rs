//! sqlscope CLI
//!
//! Formats and analyzes SQL from files or stdin, or serves the HTTP API.

use std::io::Write;
use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use sqlscope::config::{DEFAULT_MAX_BODY_BYTES, ServerConfig};
use sqlscope::{input, report, server};

/// Format and analyze Postgres-flavored SQL.
#[derive(Parser)]
#[command(name = "sqlscope")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical layout of the input.
    Format {
        /// SQL file to read; stdin when absent or `-`.
        file: Option<PathBuf>,
    },

    /// Print the formatted input followed by the analyzer's findings.
    Analyze {
        /// SQL file to read; stdin when absent or `-`.
        file: Option<PathBuf>,
    },

    /// Serve the JSON API over HTTP.
    Serve {
        /// Address to bind.
        #[arg(long, env = "SQLSCOPE_HOST", default_value = "127.0.0.1")]
        host: IpAddr,

        /// Port to bind.
        #[arg(short, long, env = "SQLSCOPE_PORT", default_value_t = 3000)]
        port: u16,

        /// Largest accepted request body, in bytes.
        #[arg(long, env = "SQLSCOPE_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
        max_body_bytes: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the SQL.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Format { file } => {
            let sql = input::read_sql(file.as_deref())?;
            debug!(bytes = sql.len(), "formatting");
            write_stdout(&sqlscope_core::format_sql(&sql))?;
        }

        Commands::Analyze { file } => {
            let sql = input::read_sql(file.as_deref())?;
            debug!(bytes = sql.len(), "analyzing");
            write_stdout(&report::render_analysis(&sql))?;
        }

        Commands::Serve {
            host,
            port,
            max_body_bytes,
        } => {
            let config = ServerConfig::new(host, port).max_body_bytes(max_body_bytes);
            server::serve(config).await?;
        }
    }

    Ok(())
}

fn write_stdout(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}
