use axum::{
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::users;
use crate::config::ServerConfig;
use crate::db::repo::UserStore;
use crate::error::ServerError;

#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
}

/// Route table. Unknown paths and wrong methods on known paths both land on
/// the `"Not Found"` fallback.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .patch(users::patch_user)
                .delete(users::delete_user),
        )
        .fallback(users::not_found)
        .method_not_allowed_fallback(users::not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState {
        users: UserStore::seeded(),
    };

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .map_err(|source| ServerError::Bind {
            address: config.bind_address.clone(),
            source,
        })?;

    let address = listener.local_addr()?;
    tracing::info!(address = %address, "Listening for connections");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
