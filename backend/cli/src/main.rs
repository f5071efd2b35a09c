use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use textlens_config::{resolve_credentials_json, Settings};
use textlens_gateway::{start_server, GatewayState};
use textlens_vision::{ServiceAccountKey, VisionClient};

#[derive(Parser)]
#[command(name = "textlens")]
#[command(about = "TextLens — image text extraction over Google Cloud Vision")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TextLens web server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Show current server status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::from_env();
    logging::init_logger(
        &settings.log_level,
        settings.log_dir.as_deref().map(Path::new),
    );

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let settings = Settings {
                port: port.unwrap_or(settings.port),
                ..settings
            };
            run_server(settings).await?;
        }
        Commands::Status => {
            println!("TextLens status: checking...");
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/api/health", settings.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("TextLens is not running on port {}", settings.port);
                }
            }
        }
    }

    Ok(())
}

async fn run_server(settings: Settings) -> Result<()> {
    // Credential loading happens before anything binds: a malformed or
    // missing key fails startup with a non-zero exit.
    let raw = settings
        .google_application_credentials
        .as_deref()
        .context("GOOGLE_APPLICATION_CREDENTIALS is not set")?;
    let key_json = resolve_credentials_json(raw)?;
    let key = ServiceAccountKey::from_json(&key_json)?;
    info!(
        project = %key.project_id,
        account = %key.client_email,
        "loaded service-account credentials"
    );

    let mut client = VisionClient::new(key);
    if let Some(endpoint) = &settings.vision_endpoint {
        client = client.with_base_url(endpoint.clone());
    }

    let addr: SocketAddr = format!("{}:{}", settings.bind_address, settings.port)
        .parse()
        .context("invalid bind address")?;
    let state = GatewayState::new(Arc::new(client));

    info!(addr = %addr, "starting TextLens");
    start_server(addr, state).await
}
