//! Supermarket - produce inventory service and command line client
//!
//! `supermarket daemon` runs the HTTP API, `supermarket produce` talks to it.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use supermarket::config::{Config, LoggingConfig};
use supermarket::core::query::ListProduceParams;
use supermarket::sdk::{ClientConfig, ProduceClient};
use supermarket::sdk::config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use supermarket::server;
use supermarket::utils::logging::init_tracing;

/// Produce inventory service and client
#[derive(Debug, Parser)]
#[command(name = "supermarket", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the inventory HTTP service
    Daemon {
        /// YAML configuration file; environment variables are used when omitted
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },
    /// Query or modify the inventory of a running service
    #[command(alias = "pr")]
    Produce(ProduceArgs),
}

#[derive(Debug, Args)]
struct ProduceArgs {
    /// Service endpoint
    #[arg(long, short = 'e', global = true, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, short = 't', global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    #[command(subcommand)]
    command: ProduceCommand,
}

#[derive(Debug, Subcommand)]
enum ProduceCommand {
    /// List produce
    #[command(alias = "l")]
    List {
        /// Sort field: name, produceCode or unitPrice
        #[arg(long = "sort_by")]
        sort_by: Option<String>,
        /// Sort order: desc or descending, anything else is ascending
        #[arg(long)]
        order: Option<String>,
        /// Maximum number of records
        #[arg(long)]
        limit: Option<String>,
        /// Number of records to skip
        #[arg(long)]
        offset: Option<String>,
    },
    /// Bulk create produce from a JSON array
    #[command(alias = "c")]
    Create {
        /// JSON array of records
        #[arg(long, short = 'r')]
        request: String,
    },
    /// Delete produce by code
    #[command(alias = "d")]
    Delete {
        /// Produce code
        code: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Daemon { config } => run_daemon(config).await,
        Commands::Produce(args) => run_produce(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_daemon(path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match path {
        Some(path) => Config::from_file(&path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::from_env().context("loading configuration from environment")?,
    };

    init_tracing(config.logging())?;
    server::run_server(config).await?;
    Ok(())
}

async fn run_produce(args: ProduceArgs) -> anyhow::Result<()> {
    init_tracing(&LoggingConfig {
        level: "warn".to_string(),
        ..Default::default()
    })?;

    let client = ProduceClient::new(ClientConfig::new(args.endpoint).with_timeout(args.timeout))?;

    match args.command {
        ProduceCommand::List {
            sort_by,
            order,
            limit,
            offset,
        } => {
            let params = ListProduceParams {
                sort_by,
                order,
                limit,
                offset,
            };
            let (records, status) = client.list_produce(&params).await?;
            println!("Status Code: {}", status.as_u16());
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        ProduceCommand::Create { request } => {
            let (body, status) = client.create_produce(&request).await?;
            println!("Status Code: {}", status.as_u16());
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        ProduceCommand::Delete { code } => {
            let (body, status) = client.delete_produce(&code).await?;
            println!("Status Code: {}", status.as_u16());
            if !body.is_empty() {
                println!("{}", body);
            }
        }
    }

    Ok(())
}
