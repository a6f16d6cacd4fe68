//! # HTTP Server for Wallpapers
//!
//! Serves year-progress wallpapers over HTTP, suitable for a phone automation
//! that fetches a fresh lock screen image every morning.
//!
//! ## Usage
//!
//! ```bash
//! almanac serve --listen 0.0.0.0:3000
//! curl -o wallpaper.png 'http://localhost:3000/api/wallpaper?width=1290&height=2796&timezone=Asia/Jakarta'
//! ```
//!
//! ## Routes
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /api/wallpaper` | PNG for today (`width`, `height`, `timezone`, `mode`) |
//! | `GET /api/wallpaper/info` | Day-of-year summary (`timezone`) |
//! | `GET /api/presets` | Known device sizes |
//! | `GET /health` | Liveness check |

mod handlers;
mod state;

pub use handlers::wallpaper::WallpaperQuery;
pub use state::{AppState, Clock, ServerConfig};

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::AlmanacError;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/wallpaper", get(handlers::wallpaper::render))
        .route("/api/wallpaper/info", get(handlers::wallpaper::info))
        .route("/api/presets", get(handlers::presets::list))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use almanac::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), almanac::error::AlmanacError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:3000".to_string(),
///     cache_max_age_secs: 3600,
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), AlmanacError> {
    let app_state = Arc::new(AppState::new(config.clone()));
    let app = router(app_state);

    println!("Almanac HTTP server starting...");
    println!("Listening on: {}", config.listen_addr);
    println!();
    println!(
        "Fetch http://{}/api/wallpaper to get today's wallpaper",
        config.listen_addr
    );
    println!();

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            AlmanacError::Transport(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    log::info!("[server] Listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AlmanacError::Transport(format!("Server error: {}", e)))?;

    Ok(())
}
