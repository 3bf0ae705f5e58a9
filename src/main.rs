use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bookshelf::config::SeedData;
use bookshelf::graphql::build_schema;
use bookshelf::{server, AppContext};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the GraphQL server
    Serve {
        #[clap(short, long, default_value = "4000")]
        port: u16,
        #[clap(long)]
        cors_origin: Option<String>,
        /// YAML file with authors and books to load instead of the built-in library
        #[clap(short, long)]
        seed: Option<PathBuf>,
    },
    /// Print the GraphQL schema
    Schema,
    /// Execute one GraphQL document against a freshly seeded store
    Query {
        document: String,
        /// Variables as a JSON object
        #[clap(long)]
        variables: Option<String>,
        #[clap(short, long)]
        seed: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Serve {
            port,
            cors_origin,
            seed,
        } => {
            let app = load_app(seed.as_deref())?;
            info!("Starting server on port {}", port);
            server::start_server(app, port, cors_origin.as_deref()).await?;
        }
        Commands::Schema => {
            let schema = build_schema(Arc::new(load_app(None)?));
            println!("{}", schema.sdl());
        }
        Commands::Query {
            document,
            variables,
            seed,
        } => {
            let schema = build_schema(Arc::new(load_app(seed.as_deref())?));
            let mut request = async_graphql::Request::new(document);
            if let Some(variables) = variables {
                let value: serde_json::Value =
                    serde_json::from_str(&variables).context("Invalid variables JSON")?;
                request = request.variables(async_graphql::Variables::from_json(value));
            }

            let response = schema.execute(request).await;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

fn load_app(seed: Option<&std::path::Path>) -> Result<AppContext> {
    let seed = SeedData::load(seed)?;
    AppContext::with_seed(seed).context("Invalid seed data")
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_string()))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
