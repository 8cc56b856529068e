use axum::{
    extract::{Json, OriginalUri, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use videogame_shared::config::KeyMode;
use videogame_store::{
    state::VideogameState, CatalogError, Lookup, NewVideogame, VideogameChanges, VideogameId,
};

use crate::VIDEOGAMES_PATH;

pub fn router(state: VideogameState) -> Router {
    Router::new()
        .route(VIDEOGAMES_PATH, get(videogames).post(post_videogames))
        .route(
            &format!("{VIDEOGAMES_PATH}/:key"),
            get(videogame).put(put_videogame).delete(delete_videogame),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub name: Option<String>,
}

fn lookup(key_mode: KeyMode, key: u64) -> Lookup {
    match key_mode {
        KeyMode::Id => Lookup::Id(VideogameId(key)),
        // Keys beyond the address space can never match a position.
        KeyMode::Position => Lookup::Position(usize::try_from(key).unwrap_or(usize::MAX)),
    }
}

fn error_response(err: CatalogError) -> Response {
    info!("{err}");

    match err {
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        CatalogError::Conflict(_) => StatusCode::CONFLICT.into_response(),
    }
}

#[axum_macros::debug_handler]
pub(crate) async fn videogames(State(state): State<VideogameState>, Query(params): Query<ListParams>) -> Response {
    let videogames = match params.name {
        Some(name) => {
            info!("Listing videogames by name: {name}");
            state.repository.list_by_name(&name).await
        }
        None => {
            info!("Listing videogames");
            state.repository.list().await
        }
    };

    (StatusCode::OK, Json(videogames)).into_response()
}

#[axum_macros::debug_handler]
pub(crate) async fn videogame(State(state): State<VideogameState>, Path(key): Path<u64>) -> Response {
    match state.repository.get(lookup(state.key_mode, key)).await {
        Ok(videogame) => (StatusCode::OK, Json(videogame)).into_response(),
        Err(err) => error_response(err),
    }
}

#[axum_macros::debug_handler]
pub(crate) async fn post_videogames(
    State(state): State<VideogameState>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<Value>,
) -> Response {
    info!("Request Body: {}", payload);

    let Ok(new_videogame) = serde_json::from_value::<NewVideogame>(payload) else {
        return (StatusCode::BAD_REQUEST, "invalid payload").into_response();
    };

    match state.repository.add(new_videogame).await {
        // The stored record is only addressable by its id when keys are ids.
        Ok(videogame) if state.key_mode == KeyMode::Id => (
            StatusCode::CREATED,
            [(
                header::LOCATION,
                format!("{}/{}", uri.path().trim_end_matches('/'), videogame.id),
            )],
            Json(videogame),
        )
            .into_response(),
        Ok(videogame) => (StatusCode::CREATED, Json(videogame)).into_response(),
        Err(err) => error_response(err),
    }
}

#[axum_macros::debug_handler]
pub(crate) async fn put_videogame(
    State(state): State<VideogameState>,
    Path(key): Path<u64>,
    Json(payload): Json<Value>,
) -> Response {
    info!("Request Body: {}", payload);

    // An `id` inside the body is ignored, the path decides which record changes.
    let Ok(changes) = serde_json::from_value::<VideogameChanges>(payload) else {
        return (StatusCode::BAD_REQUEST, "invalid payload").into_response();
    };

    match state.repository.update(lookup(state.key_mode, key), changes).await {
        Ok(videogame) => (StatusCode::OK, Json(videogame)).into_response(),
        Err(err) => error_response(err),
    }
}

#[axum_macros::debug_handler]
pub(crate) async fn delete_videogame(State(state): State<VideogameState>, Path(key): Path<u64>) -> Response {
    match state.repository.delete(lookup(state.key_mode, key)).await {
        Ok(videogame) => (StatusCode::OK, Json(videogame)).into_response(),
        Err(err) => error_response(err),
    }
}
