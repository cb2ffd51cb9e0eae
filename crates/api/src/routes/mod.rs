//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::session_middleware};

pub mod client;
pub mod compare;
pub mod currencies;
pub mod health;
pub mod money;
pub mod random;
pub mod time;

#[cfg(test)]
mod test_support;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    // Routes that run inside a bootstrapped session
    let session_routes = client::session_routes().layer(middleware::from_fn(session_middleware));

    Router::new()
        .merge(health::routes())
        .merge(currencies::routes())
        .merge(money::routes())
        .merge(time::routes())
        .merge(compare::routes())
        .merge(random::routes())
        .merge(client::routes())
        .merge(session_routes)
}
