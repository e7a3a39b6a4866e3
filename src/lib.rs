//! Backend for a personal portfolio site.
//!
//! Serves the project list, receives contact-form messages, and aggregates
//! competitive-programming stats from LeetCode and Codeforces.
//!
//!
//!
//! # Endpoints
//!
//! - `GET /` plain-text liveness check
//! - `GET /api/projects` static project list
//! - `POST /api/contact` contact form, logged and acknowledged
//! - `GET /api/competitive-stats` combined LeetCode + Codeforces stats
//!
//! Stats are fetched fresh on every request. Nothing is cached and nothing
//! is persisted, so two calls can return different numbers as the upstream
//! data changes.
//!
//!
//!
//! # Environment
//!
//! - `PORT` listen port, default 3001
//! - `LEETCODE_USERNAME` LeetCode account to report on
//! - `CODEFORCES_HANDLE` Codeforces account to report on
//! - `RUST_LOG` tracing filter, e.g. `portfolio_backend=debug`
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod codeforces;
pub mod config;
pub mod error;
pub mod leetcode;
pub mod projects;
pub mod routes;
pub mod state;
pub mod stats;

use routes::{contact_handler, projects_handler, root_handler, stats_handler};
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new();

    info!("Starting server...");

    let app = app(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(root_handler))
        .route("/api/projects", get(projects_handler))
        .route("/api/contact", post(contact_handler))
        .route("/api/competitive-stats", get(stats_handler))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
