// src/application/views/health.rs

use axum::extract::State;
use axum::Json;

use crate::application::state::AppState;
use crate::db::get_connection;
use crate::error::AppResult;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let conn = get_connection(&state.pool)?;
    conn.query_row("SELECT 1", [], |row| row.get::<_, i32>(0))?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "service": "producao",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
