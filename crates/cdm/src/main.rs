use clap::{Parser, Subcommand};
use starbase::{App, AppResult, AppSession};
use std::path::PathBuf;

use cdm::commands::{run_parse, run_roundtrip};
use cdm::logging;

/// CDM CLI - load and save CDM folder data type documents
#[derive(Parser)]
#[command(name = "cdm")]
#[command(about = "CDM folder document tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Load a data type document and summarize its references
    Parse {
        /// Path to the *.cdm.json document
        #[arg(short, long)]
        input: PathBuf,
        /// Path to a cdm.toml configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Maximum nesting of inline definitions
        #[arg(long)]
        max_depth: Option<usize>,
        /// Output result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load a data type document and write it back out
    ///
    /// Data type definitions are normalized; other definitions are copied unchanged.
    Roundtrip {
        /// Path to the *.cdm.json document
        #[arg(short, long)]
        input: PathBuf,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Path to a cdm.toml configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Maximum nesting of inline definitions
        #[arg(long)]
        max_depth: Option<usize>,
    },
}

/// Application session for CDM CLI
#[derive(Clone)]
struct CdmSession {
    command: Commands,
}

#[async_trait::async_trait]
impl AppSession for CdmSession {
    async fn execute(&mut self) -> AppResult {
        match &self.command {
            Commands::Parse {
                input,
                config,
                max_depth,
                json,
            } => run_parse(input.clone(), config.clone(), *max_depth, *json),
            Commands::Roundtrip {
                input,
                output,
                config,
                max_depth,
            } => run_roundtrip(input.clone(), output.clone(), config.clone(), *max_depth),
        }
    }
}

#[tokio::main]
async fn main() -> starbase::MainResult {
    let cli = Cli::parse();
    logging::init(cli.log_json);

    let session = CdmSession {
        command: cli.command,
    };

    let exit_code = App::default()
        .run(
            session,
            |mut session| async move { session.execute().await },
        )
        .await?;

    Ok(std::process::ExitCode::from(exit_code))
}
