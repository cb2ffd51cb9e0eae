//! Relative time routes.

use axum::{Json, Router, extract::Query, routing::get};
use serde::{Deserialize, Serialize};
use webfuncs_core::time::time_difference;

use crate::{AppState, error::ApiResult};

/// Creates the time routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/time/difference", get(difference))
}

/// Query parameters for a time difference.
#[derive(Debug, Deserialize)]
pub struct DifferenceQuery {
    /// First timestamp.
    pub from: String,
    /// Second timestamp.
    #[serde(default = "default_to")]
    pub to: String,
    /// Include every nonzero unit.
    #[serde(default)]
    pub complete: bool,
    /// Phrase as elapsed time.
    #[serde(default = "default_past")]
    pub past: bool,
}

fn default_to() -> String {
    "now".to_string()
}

fn default_past() -> bool {
    true
}

/// Time difference response.
#[derive(Debug, Serialize)]
pub struct DifferenceResponse {
    /// Human-readable difference.
    pub difference: String,
}

/// GET `/time/difference` - Describe the time between two timestamps.
async fn difference(Query(query): Query<DifferenceQuery>) -> ApiResult<Json<DifferenceResponse>> {
    let difference = time_difference(&query.from, &query.to, query.complete, query.past)?;
    Ok(Json(DifferenceResponse { difference }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{get_json, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_difference() {
        let (status, body) = get_json(
            test_app(routes()),
            "/time/difference?from=2024-01-01T00:00:00&to=2024-01-02T01:00:00",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["difference"], "1 day ago");
    }

    #[tokio::test]
    async fn test_complete_future() {
        let (status, body) = get_json(
            test_app(routes()),
            "/time/difference?from=2024-01-01&to=2024-01-09T00:00:05&complete=true&past=false",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["difference"], "1 week, 1 day, 5 seconds");
    }

    #[tokio::test]
    async fn test_unparseable() {
        let (status, body) =
            get_json(test_app(routes()), "/time/difference?from=whenever").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}
