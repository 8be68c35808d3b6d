use crate::server::{Result, ServerError, ServerRouter, json::Json};
use axum::{extract::State, routing::post};
use axum_extra::routing::{RouterExt, TypedPath};
use murmur_common::model::{
    Id,
    post::{CreatePost, Post, PostMarker},
};
use murmur_db::database::Database;
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .route("/posts", post(create_post))
        .typed_get(view_post)
}

async fn create_post(
    State(db): State<Arc<dyn Database>>,
    Json(new_post): Json<CreatePost>,
) -> Result<Json<Post>> {
    let post = db
        .create_post(&new_post)
        .await?
        .ok_or(ServerError::UserDoesNotExist(new_post.user_id))?;

    Ok(Json(post))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts/{id}", rejection(ServerError))]
struct ViewPostPath {
    id: Id<PostMarker>,
}

/// Every successful read counts as one view.
async fn view_post(
    ViewPostPath { id }: ViewPostPath,
    State(db): State<Arc<dyn Database>>,
) -> Result<Json<Post>> {
    let post = db
        .view_post(id)
        .await?
        .ok_or(ServerError::PostNotFound(id))?;

    Ok(Json(post))
}
