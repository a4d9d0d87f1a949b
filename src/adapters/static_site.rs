use crate::config::ServerSettings;
use crate::utils::error::{Result, SiteError};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// 存在的檔案直接回傳，其他路徑一律回傳 index 文件（200）
pub fn router(settings: &ServerSettings) -> Router {
    let index = ServeFile::new(settings.index_path());
    let files = ServeDir::new(&settings.static_dir).fallback(index);

    Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(settings: ServerSettings) -> Result<()> {
    if !settings.static_dir.is_dir() {
        return Err(SiteError::InvalidConfigValueError {
            field: "static_dir".to_string(),
            value: settings.static_dir.display().to_string(),
            reason: "Directory does not exist".to_string(),
        });
    }
    if !settings.index_path().is_file() {
        tracing::warn!(
            "⚠️ Index document {} not found, unknown paths will answer 404",
            settings.index_path().display()
        );
    }

    let listener = TcpListener::bind(settings.bind_address()).await?;
    let address = listener.local_addr()?;

    tracing::info!("🚀 Serving {} on http://{}", settings.static_dir.display(), address);

    axum::serve(listener, router(&settings))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown signal received");
}
