pub mod videogames;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use videogame_shared::config::ApplicationConfiguration;
use videogame_store::state::VideogameState;

pub const VIDEOGAMES_PATH: &str = "/videogames";

pub fn app(state: VideogameState, config: &ApplicationConfiguration) -> Router {
    let base_path = config.base_path();

    let router = if base_path.is_empty() {
        videogames::router(state)
    } else {
        info!("Serving the API under `{base_path}`");
        Router::new().nest(&base_path, videogames::router(state))
    };

    let router = router.layer(TraceLayer::new_for_http());

    if config.http.cors_enabled.unwrap_or(false) {
        info!("CORS (permissive) enabled");
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
