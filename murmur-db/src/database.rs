use async_trait::async_trait;
use murmur_common::model::{
    Id, ModelValidationError,
    comment::{
        Comment, CommentLike, CommentMarker, CreateComment, CreateCommentLike, PostComment,
    },
    like::{CreateLike, Like, LikeMarker},
    post::{CreatePost, Post, PostMarker},
};
use std::fmt::Debug;
use thiserror::Error;

pub type Result<T, E = DbError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("An object in the database was invalid: {0}")]
    Data(#[from] ModelValidationError),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Data access used by the HTTP handlers.
///
/// Every operation checks a connection out of the pool for its own duration
/// and hands it back when it returns, whether it succeeded or not.
#[async_trait]
pub trait Database: Debug + Send + Sync {
    /// The server version string reported by the database.
    async fn version(&self) -> Result<String>;

    /// Inserts a post for an existing user.
    ///
    /// Returns `None` without inserting anything if the user does not exist.
    async fn create_post(&self, post: &CreatePost) -> Result<Option<Post>>;

    /// Increments the view counter of a post and returns the updated row.
    async fn view_post(&self, post_id: Id<PostMarker>) -> Result<Option<Post>>;

    /// Inserts a like. The referenced user and post are not checked here.
    async fn create_like(&self, like: &CreateLike) -> Result<Like>;

    /// Returns whether a like was actually deleted.
    async fn delete_like(&self, like_id: Id<LikeMarker>) -> Result<bool>;

    /// Usernames of everyone who liked the post.
    async fn fetch_post_like_usernames(&self, post_id: Id<PostMarker>) -> Result<Vec<String>>;

    /// Inserts a comment. The referenced user and post are not checked here.
    async fn create_comment(&self, comment: &CreateComment) -> Result<Comment>;

    async fn fetch_post_comments(&self, post_id: Id<PostMarker>) -> Result<Vec<PostComment>>;

    async fn update_comment_content(
        &self,
        comment_id: Id<CommentMarker>,
        content: &str,
    ) -> Result<Option<Comment>>;

    /// Returns whether a comment was actually deleted.
    async fn delete_comment(&self, comment_id: Id<CommentMarker>) -> Result<bool>;

    async fn create_comment_like(&self, like: &CreateCommentLike) -> Result<CommentLike>;
}
