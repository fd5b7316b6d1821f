//! Route definitions for the `/films` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::films;
use crate::state::AppState;

/// Routes mounted at `/films`.
///
/// ```text
/// GET    /                        -> list (?minimum-duration=)
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> replace
/// PATCH  /{id}                    -> update
/// DELETE /{id}                    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(films::list).post(films::create))
        .route(
            "/{id}",
            get(films::get_by_id)
                .put(films::replace)
                .patch(films::update)
                .delete(films::delete),
        )
}
