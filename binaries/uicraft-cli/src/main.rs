//! uicraft CLI
//!
//! Starts the generator web GUI, or inspects its routes and prompt templates.
//!
//! ```bash
//! uicraft                              # Serve on http://127.0.0.1:8501
//! uicraft serve --port 8080            # Custom port
//! uicraft prompt generate "a login form"
//! uicraft prompt modify page.html "make the button red"
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uicraft_config::{Config, Overrides};
use uicraft_core::{build_generate_prompt, build_modify_prompt};
use uicraft_groq::GroqClient;
use uicraft_web::AppState;

#[derive(Parser)]
#[command(name = "uicraft")]
#[command(about = "AI custom UI generator - describe a UI, preview the HTML")]
#[command(version)]
struct Cli {
    /// Config file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web GUI (default)
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Model identifier sent to the provider
        #[arg(short, long)]
        model: Option<String>,

        /// Sampling temperature
        #[arg(short, long)]
        temperature: Option<f32>,
    },

    /// Print the HTTP routes
    Routes,

    /// Print the prompt that would be sent, without calling the provider
    Prompt {
        #[command(subcommand)]
        command: PromptCommands,
    },
}

#[derive(Subcommand)]
enum PromptCommands {
    /// Prompt for a new design
    Generate {
        /// UI description
        text: String,
    },

    /// Prompt for changing an existing design
    Modify {
        /// HTML file holding the current design
        markup: PathBuf,

        /// Requested change
        text: String,
    },
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "uicraft=info,uicraft_web=info,uicraft_groq=info,uicraft_config=info,tower_http=info".into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        model: None,
        temperature: None,
    }) {
        Commands::Serve {
            host,
            port,
            model,
            temperature,
        } => {
            let overrides = Overrides {
                host,
                port,
                model,
                temperature,
            };
            let config = Config::load(cli.config.as_deref(), overrides)
                .context("Failed to load configuration")?;
            serve(config).await
        }
        Commands::Routes => {
            uicraft_web::routes::print_routes();
            Ok(())
        }
        Commands::Prompt { command } => {
            match command {
                PromptCommands::Generate { text } => println!("{}", build_generate_prompt(&text)),
                PromptCommands::Modify { markup, text } => {
                    let current = std::fs::read_to_string(&markup)
                        .with_context(|| format!("Failed to read {}", markup.display()))?;
                    println!("{}", build_modify_prompt(&current, &text));
                }
            }
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    let client = GroqClient::from_config(&config).context("Failed to build completion client")?;

    tracing::info!(
        model = %config.model,
        temperature = config.temperature,
        endpoint = %config.endpoint,
        api_key_set = config.has_api_key(),
        "starting uicraft"
    );

    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(&config, Arc::new(client)));

    uicraft_web::routes::print_routes();
    println!("Server ready at http://{}", addr);
    println!();

    uicraft_web::serve(state, &addr)
        .await
        .with_context(|| format!("Server error on {}", addr))
}
