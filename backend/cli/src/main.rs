use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use glyphgate_config::GlyphConfig;
use glyphgate_gateway::{start_server, GatewayState};
use glyphgate_ocr::TesseractRecognizer;

#[derive(Parser)]
#[command(name = "glyphgate")]
#[command(about = "GlyphGate — image-to-text HTTP gateway")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the OCR gateway server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show current gateway status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, config } => {
            let mut config = glyphgate_config::load(config.as_deref())?;
            if let Some(port) = port {
                config.gateway.port = port;
            }
            run_server(config).await?;
        }
        Commands::Status => {
            let config = glyphgate_config::load(None)?;
            let client = reqwest::Client::new();
            match client
                .get(format!(
                    "http://localhost:{}/api/health",
                    config.gateway.port
                ))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!(
                        "glyphgate is not running on port {}",
                        config.gateway.port
                    );
                }
            }
        }
    }

    Ok(())
}

async fn run_server(config: GlyphConfig) -> Result<()> {
    logging::init_logger(&config.logging.level, config.logging.dir.as_deref());

    info!(
        port = config.gateway.port,
        bind = %config.gateway.bind_address,
        engine = "tesseract",
        "Starting GlyphGate gateway"
    );

    let recognizer = Arc::new(TesseractRecognizer::new(
        config.ocr.tesseract_path.clone(),
        config.ocr.languages.clone(),
    ));
    let state = GatewayState::new(recognizer);

    let addr: SocketAddr = format!("{}:{}", config.gateway.bind_address, config.gateway.port)
        .parse()
        .context("invalid bind address")?;

    start_server(addr, state).await
}
