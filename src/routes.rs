use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::Method,
    routing::{get, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{AppState, error::AppResult, models::Movie};

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE]);

    Router::new()
        .route("/api/movie", get(list_movies).post(create_movie).delete(delete_all_movies))
        .route("/api/movie/{id}", axum::routing::delete(delete_movie))
        .route("/api/movie/watched/{id}", put(mark_as_watched))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn list_movies(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.store.list_all().await?))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<Movie>> {
    let mut movie = Movie::from_request_body(&body);
    let id = state.store.insert(&movie).await?;
    movie.id = Some(id);
    Ok(Json(movie))
}

pub async fn mark_as_watched(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<String>> {
    state.store.mark_watched(&id).await?;
    Ok(Json(id))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Json<String>> {
    state.store.delete(&id).await?;
    Ok(Json(id))
}

pub async fn delete_all_movies(State(state): State<Arc<AppState>>) -> AppResult<Json<u64>> {
    Ok(Json(state.store.delete_all().await?))
}
