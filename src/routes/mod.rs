use axum::{
    Json, Router,
    http::{Method, StatusCode, Uri},
};

use crate::db::DbPool;

pub mod categories;
pub mod doc;
pub mod health;
pub mod products;
pub mod root;
pub mod tasks;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<DbPool> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/products", products::router())
}

/// Fallback for unmatched routes, shared by both binaries.
pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "success": false,
            "mensaje": "Ruta no encontrada",
            "ruta_solicitada": uri.to_string(),
            "metodo": method.as_str(),
        })),
    )
}
