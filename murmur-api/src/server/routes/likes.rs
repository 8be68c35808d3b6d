use crate::server::{Message, Result, ServerError, ServerRouter, json::Json};
use axum::{extract::State, routing::post};
use axum_extra::routing::{RouterExt, TypedPath};
use murmur_common::model::{
    Id,
    like::{CreateLike, Like, LikeMarker},
    post::PostMarker,
};
use murmur_db::database::Database;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .route("/likes", post(create_like))
        .typed_delete(delete_like)
        .typed_get(get_post_likes)
}

/// The user and post are taken on trust; the schema has the final say.
async fn create_like(
    State(db): State<Arc<dyn Database>>,
    Json(new_like): Json<CreateLike>,
) -> Result<Json<Like>> {
    let like = db.create_like(&new_like).await?;

    Ok(Json(like))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/likes/{id}", rejection(ServerError))]
struct DeleteLikePath {
    id: Id<LikeMarker>,
}

/// Unliking is idempotent: a like that is already gone still reports success.
async fn delete_like(
    DeleteLikePath { id }: DeleteLikePath,
    State(db): State<Arc<dyn Database>>,
) -> Result<Json<Message>> {
    if !db.delete_like(id).await? {
        debug!(%id, "Like to delete did not exist");
    }

    Ok(Json(Message::new("like deleted successfully")))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/likes/post/{post_id}", rejection(ServerError))]
struct PostLikesPath {
    post_id: Id<PostMarker>,
}

async fn get_post_likes(
    PostLikesPath { post_id }: PostLikesPath,
    State(db): State<Arc<dyn Database>>,
) -> Result<Json<Vec<String>>> {
    let usernames = db.fetch_post_like_usernames(post_id).await?;

    Ok(Json(usernames))
}
