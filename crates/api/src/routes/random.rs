//! Random string route.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use webfuncs_core::random::random_string;
use webfuncs_shared::AppError;

use crate::{AppState, error::ApiResult};

/// Creates the random routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/random", get(generate))
}

/// Query parameters for generation.
#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    /// Requested length; the configured default when omitted.
    pub length: Option<usize>,
}

/// Generated string.
#[derive(Debug, Serialize)]
pub struct RandomResponse {
    /// The random string.
    pub value: String,
}

/// GET `/random` - Generate a random alphanumeric string.
async fn generate(
    State(state): State<AppState>,
    Query(query): Query<RandomQuery>,
) -> ApiResult<Json<RandomResponse>> {
    let limits = &state.config.random;
    let length = query.length.unwrap_or(limits.default_length);

    if length > limits.max_length {
        return Err(AppError::Validation(format!(
            "length {length} exceeds maximum {}",
            limits.max_length
        ))
        .into());
    }

    Ok(Json(RandomResponse {
        value: random_string(length),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{get_json, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_default_length() {
        let (status, body) = get_json(test_app(routes()), "/random").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["value"].as_str().unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_requested_length() {
        let (status, body) = get_json(test_app(routes()), "/random?length=5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["value"].as_str().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_length_over_limit() {
        let (status, body) = get_json(test_app(routes()), "/random?length=5000").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Validation error: length 5000 exceeds maximum 1024");
    }
}
