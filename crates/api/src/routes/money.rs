//! Money formatting routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use webfuncs_core::currency::parse_amount;
use webfuncs_shared::Position;

use crate::{AppState, error::ApiResult};

/// Creates the money routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/money/format", get(format_money))
}

/// Query parameters for formatting.
///
/// Omitted fields fall back to the configured money defaults.
#[derive(Debug, Deserialize)]
pub struct FormatQuery {
    /// Amount as text; blank means zero.
    #[serde(default)]
    pub amount: String,
    /// Currency code.
    pub code: Option<String>,
    /// Render the symbol instead of the code.
    pub symbol: Option<bool>,
    /// Label placement name.
    pub position: Option<String>,
}

/// Formatted money response.
#[derive(Debug, Serialize)]
pub struct FormatResponse {
    /// The display string.
    pub formatted: String,
}

/// GET `/money/format` - Format an amount.
async fn format_money(
    State(state): State<AppState>,
    Query(query): Query<FormatQuery>,
) -> ApiResult<Json<FormatResponse>> {
    let amount = parse_amount(&query.amount)?;
    let formatted = state.money.format_with(
        amount,
        query.code.as_deref(),
        query.symbol,
        query.position.as_deref().map(Position::from_name),
    )?;
    Ok(Json(FormatResponse { formatted }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{get_json, test_app};
    use axum::http::StatusCode;
    use rstest::rstest;

    #[rstest]
    #[case("/money/format?amount=1234.5&code=USD", "USD 1,234.50")]
    #[case("/money/format?amount=1234.5&code=usd&symbol=true&position=left", "$1,234.50")]
    #[case("/money/format?amount=1000&code=JPY&symbol=true&position=right_space", "1,000 ¥")]
    #[case("/money/format?amount=0&code=EUR&symbol=true", "€ 0.00")]
    #[case("/money/format?amount=7&symbol=true&position=sideways", "$7.00")]
    #[case("/money/format", "USD 0.00")]
    #[tokio::test]
    async fn test_format(#[case] uri: &str, #[case] expected: &str) {
        let (status, body) = get_json(test_app(routes()), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["formatted"], expected);
    }

    #[tokio::test]
    async fn test_invalid_amount() {
        let (status, body) = get_json(test_app(routes()), "/money/format?amount=lots").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_currency() {
        let (status, body) = get_json(test_app(routes()), "/money/format?amount=1&code=ZZZ").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Validation error: unknown currency: ZZZ");
    }
}
