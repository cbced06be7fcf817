use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::Level;

use crate::config::Config;
use crate::db;
use crate::handlers;
use crate::repository::PgUserRepository;
use crate::service::{DefaultUserService, UserService};

/// Shared handler state
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) users: Arc<dyn UserService>,
}

impl AppState {
    pub(crate) fn new(users: impl UserService + 'static) -> Self {
        Self {
            users: Arc::new(users),
        }
    }
}

/// Build the application router.
///
/// Request spans are recorded at INFO so errors logged while handling a request carry its
/// method and URI under the default filter.
pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/user",
            post(handlers::create_user).get(handlers::list_users),
        )
        .route(
            "/user/",
            post(handlers::create_user).get(handlers::list_users),
        )
        .route(
            "/user/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .layer(
            TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Run the server until Ctrl+C or SIGTERM.
pub(crate) async fn run(config: Config) -> Result<()> {
    let pool = db::connect(&config.database)
        .await
        .context("could not connect to the database")?;

    let users = DefaultUserService::new(PgUserRepository::new(pool));
    let app = router(AppState::new(users));

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("could not bind {}", config.addr))?;
    tracing::info!("listening on {}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server shut down");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("could not listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("could not listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
