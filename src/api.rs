//! Activity API Endpoints
//!
//! - `GET /activities` - full catalog
//! - `POST /activities/:name/signup?email=` - register a student
//! - `DELETE /activities/:name/unregister?email=` - withdraw a student
//! - `GET /health` - liveness

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

use crate::activity::Catalog;
use crate::error::SignupError;
use crate::store::ActivityStore;

/// Page the root path redirects to
pub const INDEX_PATH: &str = "/static/index.html";

/// API state shared across all handlers
pub struct ApiState {
    pub store: ActivityStore,
}

impl ApiState {
    pub fn new(store: ActivityStore) -> Self {
        Self { store }
    }
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET / - send browsers to the static front page
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// GET /activities - list every activity with its participants
pub async fn list_activities(State(state): State<Arc<ApiState>>) -> Json<Catalog> {
    Json(state.store.list())
}

/// POST /activities/:name/signup - sign a student up for an activity
pub async fn signup_for_activity(
    State(state): State<Arc<ApiState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, SignupError> {
    match state.store.signup(&activity_name, &query.email) {
        Ok(message) => {
            info!("Signed up {} for {}", query.email, activity_name);
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!(
                "Signup rejected for {} on '{}': {}",
                query.email, activity_name, e
            );
            Err(e)
        }
    }
}

/// DELETE /activities/:name/unregister - remove a student from an activity
pub async fn unregister_from_activity(
    State(state): State<Arc<ApiState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, SignupError> {
    match state.store.unregister(&activity_name, &query.email) {
        Ok(message) => {
            info!("Unregistered {} from {}", query.email, activity_name);
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!(
                "Unregister rejected for {} on '{}': {}",
                query.email, activity_name, e
            );
            Err(e)
        }
    }
}

/// GET /health
pub async fn health(State(state): State<Arc<ApiState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "activities": state.store.len(),
    }))
}
