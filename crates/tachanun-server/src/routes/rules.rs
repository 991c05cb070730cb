use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /api/rules — the exception list in priority order.
pub async fn list_rules(State(app): State<AppState>) -> Json<serde_json::Value> {
    let rules: Vec<serde_json::Value> = app
        .classifier
        .rules()
        .iter()
        .enumerate()
        .map(|(i, r)| {
            serde_json::json!({
                "priority": i + 1,
                "id": r.id,
                "reason_en": r.reason_en,
                "reason_he": r.reason_he,
            })
        })
        .collect();
    Json(serde_json::json!({ "rules": rules }))
}
