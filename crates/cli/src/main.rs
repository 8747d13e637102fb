//! Logist CLI: thin front end over the interaction ledger core.
//!
//! Commands:
//! - `validate`: Check a request/response document against the exchange schema
//! - `record`  : Validate and append one exchange to a job's history
//! - `history` : Print a job's recorded exchanges
//! - `stats`   : Print aggregate cost and timing for a job
//! - `prompt`  : Assemble and render the next prompt for a job
//! - `config`  : Show the config file location and default settings

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "logist",
    about = "Logist: LLM interaction ledger and prompt assembly",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an exchange document (JSON file)
    Validate {
        /// Path to the document
        file: PathBuf,
    },

    /// Record one request/response exchange for a job
    Record {
        /// Job directory
        job_dir: PathBuf,

        /// Request document (JSON file with a top-level "request" key)
        #[arg(long)]
        request: PathBuf,

        /// Response document (JSON file with a top-level "response" key)
        #[arg(long)]
        response: PathBuf,

        /// Model that produced the response
        #[arg(short, long)]
        model: String,

        /// Cost of the call
        #[arg(long, default_value_t = 0.0)]
        cost: f64,

        /// Wall time of the call in seconds
        #[arg(long, default_value_t = 0.0)]
        time: f64,
    },

    /// Show a job's recorded exchanges
    History {
        /// Job directory
        job_dir: PathBuf,

        /// Only show the most recent N exchanges
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show aggregate statistics for a job
    Stats {
        /// Job directory
        job_dir: PathBuf,
    },

    /// Render the next prompt for a job
    Prompt {
        /// Job directory (its manifest is read from here)
        job_dir: PathBuf,

        /// Role configuration (JSON file)
        #[arg(short, long)]
        role: Option<PathBuf>,

        /// Output format: human-readable or json-files
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show the config file location and the default settings
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = commands::load_config()?;

    match cli.command {
        Commands::Validate { file } => commands::validate::run(&file)?,
        Commands::Record {
            job_dir,
            request,
            response,
            model,
            cost,
            time,
        } => commands::record::run(
            &config,
            &job_dir,
            commands::record::Exchange {
                request: &request,
                response: &response,
                model: &model,
                cost,
                time,
            },
        )?,
        Commands::History { job_dir, limit } => commands::history::run(&config, &job_dir, limit)?,
        Commands::Stats { job_dir } => commands::history::stats(&config, &job_dir)?,
        Commands::Prompt {
            job_dir,
            role,
            format,
        } => commands::prompt::run(&config, &job_dir, role.as_deref(), format.as_deref())?,
        Commands::Config => commands::config::run()?,
    }

    Ok(())
}
