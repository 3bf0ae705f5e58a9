use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::server::app::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let store = state.app.store();

    Json(json!({
        "status": "healthy",
        "service": "bookshelf",
        "version": env!("CARGO_PKG_VERSION"),
        "books": store.book_count(),
        "authors": store.author_count(),
    }))
}
