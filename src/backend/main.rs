/**
 * Formcraft Server Entry Point
 *
 * This is the main entry point for the formcraft backend server.
 * It initializes the Axum HTTP server that exposes the form API.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use formcraft::backend::server::config::ServerConfig;
    use formcraft::backend::server::init::create_app_with_config;

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    eprintln!("[STARTUP] Tracing initialized (RUST_LOG={env_filter})");

    let config = ServerConfig::from_env();
    let app = create_app_with_config(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    eprintln!("[STARTUP] Starting server on {addr}");
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    eprintln!("[STARTUP] Listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin formcraft-server --features ssr");
    std::process::exit(1);
}
