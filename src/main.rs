use std::io::Read;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use brandguard::config::Config;
use brandguard::discovery::DISCOVERY_SCHEMA;
use brandguard::validation::{ContentValidator, KeywordTable};

/// Brandguard: brand-safety content validation.
///
/// Scans text for prohibited categories (gambling, cryptocurrency, adult
/// content, medical claims, financial advice) and reports a risk score.
#[derive(Parser)]
#[command(name = "brandguard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP validation service
    Serve {
        /// Address to bind (overrides BRANDGUARD_BIND)
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate a piece of text locally
    Check {
        /// Text to validate (reads stdin when omitted)
        text: Option<String>,

        /// Print the JSON response the HTTP endpoint would return
        #[arg(long)]
        json: bool,
    },

    /// Print the tool-registry discovery schema
    Discovery,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("brandguard=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, port } => {
            let config = Config::load()?.with_overrides(bind, port);
            let validator = build_validator()?;
            brandguard::web::run_server(config, validator).await?;
        }

        Commands::Check { text, json } => {
            let content = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let validator = build_validator()?;
            let result = validator.validate(&content);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                brandguard::output::terminal::display_result(&result);
            }
        }

        Commands::Discovery => {
            println!("{}", serde_json::to_string_pretty(&DISCOVERY_SCHEMA)?);
        }
    }

    Ok(())
}

/// Build the keyword table once and hand it to the validator.
fn build_validator() -> Result<Arc<ContentValidator>> {
    let table = Arc::new(KeywordTable::builtin());
    info!(
        categories = table.len(),
        keywords = table.keyword_count(),
        "Loaded keyword table"
    );
    Ok(Arc::new(ContentValidator::new(table)?))
}
