use crate::server::{Message, Result, ServerError, ServerRouter, json::Json};
use axum::{extract::State, routing::post};
use axum_extra::routing::{RouterExt, TypedPath};
use murmur_common::model::{
    Id,
    comment::{
        Comment, CommentLike, CommentMarker, CreateComment, CreateCommentLike, PostComment,
        UpdateComment,
    },
    post::PostMarker,
};
use murmur_db::database::Database;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .route("/comment", post(create_comment))
        .typed_get(get_post_comments)
        .typed_put(update_comment)
        .typed_delete(delete_comment)
        .typed_post(like_comment)
}

async fn create_comment(
    State(db): State<Arc<dyn Database>>,
    Json(new_comment): Json<CreateComment>,
) -> Result<Json<Comment>> {
    let comment = db.create_comment(&new_comment).await?;

    Ok(Json(comment))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/comment/post/{id}", rejection(ServerError))]
struct PostCommentsPath {
    id: Id<PostMarker>,
}

async fn get_post_comments(
    PostCommentsPath { id }: PostCommentsPath,
    State(db): State<Arc<dyn Database>>,
) -> Result<Json<Vec<PostComment>>> {
    let comments = db.fetch_post_comments(id).await?;

    Ok(Json(comments))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/comment/{id}", rejection(ServerError))]
struct CommentPath {
    id: Id<CommentMarker>,
}

/// The path segment is not interpreted; the body names the comment.
#[derive(TypedPath, Deserialize)]
#[typed_path("/comment/{id}", rejection(ServerError))]
struct UpdateCommentPath {
    id: String,
}

/// The comment to edit is named by the body's `id`, not the path.
async fn update_comment(
    UpdateCommentPath { id: path_id }: UpdateCommentPath,
    State(db): State<Arc<dyn Database>>,
    Json(update): Json<UpdateComment>,
) -> Result<Json<Comment>> {
    if path_id != update.id.to_string() {
        debug!(%path_id, body_id = %update.id, "Comment id in path and body differ");
    }

    let comment = db
        .update_comment_content(update.id, &update.content)
        .await?
        .ok_or(ServerError::CommentIdNotFound(update.id))?;

    Ok(Json(comment))
}

async fn delete_comment(
    CommentPath { id }: CommentPath,
    State(db): State<Arc<dyn Database>>,
) -> Result<Json<Message>> {
    if !db.delete_comment(id).await? {
        return Err(ServerError::CommentNotFound(id));
    }

    Ok(Json(Message::new("Comment deleted successfully.")))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/comment/{id}/like", rejection(ServerError))]
struct LikeCommentPath {
    id: String,
}

/// Like [`update_comment`], the body's `comment_id` wins over the path.
async fn like_comment(
    LikeCommentPath { id: path_id }: LikeCommentPath,
    State(db): State<Arc<dyn Database>>,
    Json(new_like): Json<CreateCommentLike>,
) -> Result<Json<CommentLike>> {
    if path_id != new_like.comment_id.to_string() {
        debug!(%path_id, body_id = %new_like.comment_id, "Comment id in path and body differ");
    }

    let like = db.create_comment_like(&new_like).await?;

    Ok(Json(like))
}
