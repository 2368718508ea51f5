//! scanPDF API Server
//!
//! Accepts a photographed document (JPEG/PNG) over a multipart upload and
//! returns a single-page PDF no larger than 1 MB, downscaling and
//! recompressing as needed. The conversion itself lives in `scanpdf-core`;
//! this server is the transport glue:
//!
//! - MIME gating of uploads
//! - Mapping conversion outcomes to HTTP responses
//! - Date-stamped attachment filenames

use std::net::SocketAddr;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod error;
mod filename;
mod handlers;

use handlers::{handle_convert, handle_health};

/// Phone photos routinely exceed axum's 2 MB default body limit.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Command-line arguments for the scanPDF API server
#[derive(Parser, Debug)]
#[command(name = "scanpdf-api")]
#[command(about = "HTTP endpoint for size-constrained image-to-PDF conversion")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Build the application router.
pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/api/convert", post(handle_convert))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Starting scanPDF API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app()).await?;

    Ok(())
}
