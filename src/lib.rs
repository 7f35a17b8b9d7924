use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::state::AppState;

pub mod error;
mod handler;
pub mod integration;
pub mod kringle;
pub mod notify;
pub mod state;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub fn app(s: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/health", get(handler::health))
        .merge(kringle::api(s))
        .layer(ServiceBuilder::new().layer(cors))
}
