use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{generate_handler, health_handler, index_handler, redirect_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the HTTP router. The redirect route is only mounted when
    /// the state carries a hosted-link backend.
    pub fn router(state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(index_handler))
            .route("/health", get(health_handler))
            .route("/generate", post(generate_handler));

        if state.redirects_enabled() {
            router = router.route("/image/{id}", get(redirect_handler));
        }

        router.layer(TraceLayer::new_for_http()).with_state(state)
    }
}
