mod app;
mod config;
mod error;
mod gemini;
mod handler;
mod image_client;
mod logging;
mod models;
mod prompt;
mod request_id;

use clap::Parser;
use config::Config;
use handler::AppState;
use image_client::GeminiClient;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{Level, info, warn};

#[derive(Parser, Debug)]
#[command(name = "monogram-mockup")]
#[command(about = "Generates monogrammed product mockups through an image model")]
struct Args {
    #[arg(short, long, default_value = "0.0.0.0")]
    ip: String,

    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Optional YAML config file
    #[arg(short, long)]
    config: Option<String>,

    /// trace, debug, info, warn, error
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Also write logs to this file (capped at 10MB)
    #[arg(long)]
    log_file: Option<String>,

    /// socks and http proxy, example: socks5://192.168.0.2:10080
    #[arg(long)]
    proxy: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = Level::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using INFO level.", args.log_level);
        Level::INFO
    });
    logging::init_logging(log_level, args.log_file.as_deref());

    let config = Config::load(args.config.as_deref())?;
    match &args.config {
        Some(path) => info!("Configuration loaded from: {}", path),
        None => info!("No config file given, using defaults"),
    }
    if config.api_key().is_none() {
        // Requests will be answered with 500 until the key is provided
        warn!("{} is not set", config::API_KEY_ENV);
    }

    let mut client_builder = reqwest::Client::builder();
    if let Some(proxy) = &args.proxy {
        client_builder = client_builder.proxy(reqwest::Proxy::all(proxy)?);
    }
    let http_client = Arc::new(client_builder.build()?);

    let image_model = Arc::new(GeminiClient::new(http_client, config.api_base.clone()));
    let app_state = AppState {
        config: Arc::new(config),
        image_model,
    };
    let app = app::build_router(app_state);

    let bind_address = format!("{}:{}", args.ip, args.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server started on http://{}{}", bind_address, app::MOCKUP_PATH);

    axum::serve(listener, app).await?;
    Ok(())
}
