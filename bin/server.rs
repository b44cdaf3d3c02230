// Student Registry - Web Server
// Registration form + JSON API with Axum

use anyhow::{Context, Result};
use student_registry::config::ServerConfig;
use student_registry::init_logging;
use student_registry::web::{router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = ServerConfig::from_env()?;
    let app = router(AppState::new());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "registry server listening");
    println!("\n🚀 Server running on http://{}", config.bind_addr);
    println!("   Form: http://{}/", config.bind_addr);
    println!("   API:  http://{}/api/students", config.bind_addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
