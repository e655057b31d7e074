pub mod actors;
pub mod health;
pub mod movies;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                  greeting (public)
/// /actors            list, create
/// /actors/{id}       update, delete
/// /movies            list, create
/// /movies/{id}       update, delete
/// ```
///
/// Every resource route requires a Bearer token carrying the route's
/// permission; see [`crate::middleware::rbac`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::greeting::greeting))
        .nest("/actors", actors::router())
        .nest("/movies", movies::router())
}
