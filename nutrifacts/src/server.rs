// HTTP API: GET /api/nutrition?query=<food>

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use nutrifacts_client::FoodDataClient;
use nutrifacts_core::{lookup_food, LookupError, NutritionFacts};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch nutrition data. Please try again.";

pub struct AppState {
    pub client: FoodDataClient,
}

/// First `query` value in the query string; repeats are ignored.
pub fn first_query_value(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value.as_str())
}

/// Error body is always `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub LookupError);

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            LookupError::MissingQuery => StatusCode::BAD_REQUEST,
            LookupError::NotFound { .. } => StatusCode::NOT_FOUND,
            LookupError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match &self.0 {
            LookupError::Upstream(_) => UPSTREAM_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let LookupError::Upstream(ref cause) = self.0 {
            error!("Nutrition lookup failed: {}", cause);
        }
        let body = Json(serde_json::json!({ "error": self.message() }));
        (self.status(), body).into_response()
    }
}

pub fn router(client: FoodDataClient) -> Router {
    let state = Arc::new(AppState { client });
    Router::new()
        .route("/api/nutrition", get(nutrition_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn nutrition_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<NutritionFacts>, ApiError> {
    // An unreadable query string carries no usable food name
    let pairs = params.map(|Query(pairs)| pairs).unwrap_or_else(|rejection| {
        debug!("Rejected query string: {}", rejection);
        Vec::new()
    });
    let query = first_query_value(&pairs).unwrap_or_default();
    let facts = lookup_food(&state.client, query).await?;
    info!("Served nutrition facts for {:?}", facts.name);
    Ok(Json(facts))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

pub async fn serve(addr: SocketAddr, client: FoodDataClient) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "Serving nutrition lookups on http://{} (upstream {})",
        listener.local_addr()?,
        client.base_url()
    );

    axum::serve(listener, router(client))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
