mod config;
mod server;

use rmcp::ServiceExt;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use uxlaws_core::Knowledge;

use crate::config::ServerConfig;
use crate::server::UxLawsServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    // stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(config.effective_log_filter()).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let knowledge = Arc::new(Knowledge::builtin()?);
    let locale = config.effective_locale();
    info!(?locale, "serving on stdio");

    let service = UxLawsServer::new(knowledge, locale)
        .serve(rmcp::transport::io::stdio())
        .await
        .inspect_err(|e| error!("MCP server error: {}", e))?;
    service.waiting().await?;
    Ok(())
}
