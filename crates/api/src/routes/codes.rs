//! Route definition for the `/codes` lookup endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::codes;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/codes", get(codes::get_all))
}
