use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use common::{log, log_error};
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

use crate::bot_session::BotSession;
use crate::game_api;

#[derive(Clone)]
pub struct WebServerState {
    pub bot_name: String,
    pub session: Arc<Mutex<BotSession>>,
}

impl WebServerState {
    pub fn new(bot_name: String, session: BotSession) -> Self {
        Self {
            bot_name,
            session: Arc::new(Mutex::new(session)),
        }
    }
}

pub fn build_router(state: WebServerState, allow_any_origin: bool) -> Router {
    let router = Router::new()
        .route("/health", get(game_api::health))
        .route("/game/first-move", get(game_api::first_move))
        .route("/game/announce-symbol", post(game_api::announce_symbol))
        .route("/game/choose", post(game_api::choose_symbol))
        .route("/game/next-move", post(game_api::next_move))
        .with_state(state);

    if !allow_any_origin {
        return router;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    router.layer(cors)
}

pub async fn run_web_server(addr: SocketAddr, app: Router) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log!("Gomoku bot listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log_error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    log!("Shutdown signal received");
}
