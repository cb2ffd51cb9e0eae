//! Currency listing routes.

use axum::{Json, Router, extract::Path, routing::get};
use serde::Serialize;
use webfuncs_core::currency::{CurrencyDescriptor, CurrencyLookup, all_currencies, lookup_currency};

use crate::AppState;

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currencies", get(list_currencies))
        .route("/currencies/{code}", get(get_currency))
}

/// Response for a currency lookup.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CurrencyResponse {
    /// The code matched one currency.
    Single {
        /// The matched currency.
        currency: &'static CurrencyDescriptor,
    },
    /// All currencies, in code order.
    All {
        /// Every supported currency.
        currencies: Vec<&'static CurrencyDescriptor>,
    },
}

/// GET `/currencies` - List all currencies.
async fn list_currencies() -> Json<CurrencyResponse> {
    Json(CurrencyResponse::All {
        currencies: all_currencies().collect(),
    })
}

/// GET `/currencies/{code}` - One currency, or all of them when the code is unknown.
async fn get_currency(Path(code): Path<String>) -> Json<CurrencyResponse> {
    let response = match lookup_currency(Some(code.as_str())) {
        CurrencyLookup::Single(currency) => CurrencyResponse::Single { currency },
        CurrencyLookup::All(registry) => CurrencyResponse::All {
            currencies: registry.values().collect(),
        },
    };
    Json(response)
}
