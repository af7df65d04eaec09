//! Web server for the feedback frontend
#![forbid(unsafe_code)]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::{IpAddr, SocketAddr};

    use feedback_web::build_app;
    use tracing::{info, warn};

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Get configuration
    let config = feedback_core::Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config: {}, using defaults", e);
        feedback_core::Config::default()
    });

    // Build the application with configuration
    let app = build_app(config.clone());

    // Use configuration for web server address
    let host: IpAddr = config
        .web
        .host
        .parse()
        .map_err(|e| format!("Invalid web server host '{}': {}", config.web.host, e))?;
    let addr = SocketAddr::new(host, config.web.port);

    info!("Starting feedback web server on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// The server only exists behind the `ssr` feature; the default `csr` build
/// is the wasm client bundle.
#[cfg(not(feature = "ssr"))]
fn main() {}
