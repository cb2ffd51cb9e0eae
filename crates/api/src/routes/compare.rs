//! Key/value comparison route.

use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use webfuncs_core::compare::arrays_equal_unordered;

use crate::AppState;

/// Creates the compare routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/compare", post(compare))
}

/// Two collections to compare.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    /// Left-hand collection.
    pub left: Value,
    /// Right-hand collection.
    pub right: Value,
}

/// Comparison result.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    /// Whether both hold the same key/value pairs.
    pub equal: bool,
}

/// POST `/compare` - Compare two collections ignoring order.
async fn compare(Json(body): Json<CompareRequest>) -> Json<CompareResponse> {
    Json(CompareResponse {
        equal: arrays_equal_unordered(&body.left, &body.right),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{send, test_app};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"left": {"a": 1, "b": 2}, "right": {"b": 2, "a": 1}}"#, true)]
    #[case(r#"{"left": {"a": 1}, "right": {"a": 2}}"#, false)]
    #[case(r#"{"left": "text", "right": {"a": 2}}"#, false)]
    #[tokio::test]
    async fn test_compare(#[case] body: &'static str, #[case] expected: bool) {
        let request = Request::builder()
            .method("POST")
            .uri("/compare")
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap();

        let (status, json) = send(test_app(routes()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["equal"], expected);
    }
}
