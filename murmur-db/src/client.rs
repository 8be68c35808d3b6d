use crate::{
    database::{Database, Result},
    record::{CommentLikeRecord, CommentRecord, LikeRecord, PostCommentRecord, PostRecord},
};
use async_trait::async_trait;
use murmur_common::model::{
    Id,
    comment::{
        Comment, CommentLike, CommentMarker, CreateComment, CreateCommentLike, PostComment,
    },
    like::{CreateLike, Like, LikeMarker},
    post::{CreatePost, Post, PostMarker},
};
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
    query, query_as, query_scalar,
};
use std::time::Duration;
use tracing::debug;

/// How the connection pool is sized and bounded.
#[derive(Clone)]
pub struct PoolConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub statement_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct DbClient {
    pool: PgPool,
}

impl DbClient {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool with at least one live connection.
    pub async fn connect(config: &PoolConfig) -> Result<Self> {
        let options = config
            .database_url
            .parse::<PgConnectOptions>()?
            .options([(
                "statement_timeout",
                config.statement_timeout.as_millis().to_string(),
            )]);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await?;

        debug!(
            max_connections = config.max_connections,
            "Database pool established"
        );
        Ok(Self::new(pool))
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// Projections cast to int8 and timestamptz so SERIAL ids and plain TIMESTAMP columns decode too.
#[async_trait]
impl Database for DbClient {
    async fn version(&self) -> Result<String> {
        let version = query_scalar::<_, String>("SELECT version()")
            .fetch_one(&self.pool)
            .await?;

        Ok(version)
    }

    async fn create_post(&self, post: &CreatePost) -> Result<Option<Post>> {
        let mut transaction = self.pool.begin().await?;

        // Holding the key share lock keeps the user from being deleted before the insert lands.
        let user_id = query_scalar::<_, i64>(
            "
            SELECT
                users.id::int8
            FROM
                users
            WHERE
                users.id = $1
            FOR KEY SHARE
            ",
        )
        .bind(post.user_id.get())
        .fetch_optional(&mut *transaction)
        .await?;

        if user_id.is_none() {
            transaction.rollback().await?;
            return Ok(None);
        }

        let record = query_as::<_, PostRecord>(
            "
            INSERT INTO posts (title, content, user_id, created_at)
            VALUES ($1, $2, $3, CURRENT_TIMESTAMP)
            RETURNING
                posts.id::int8 AS id,
                posts.title,
                posts.content,
                posts.user_id::int8 AS user_id,
                posts.created_at::timestamptz AS created_at,
                posts.views::int8 AS views
            ",
        )
        .bind(post.title.as_str())
        .bind(post.content.as_str())
        .bind(post.user_id.get())
        .fetch_one(&mut *transaction)
        .await?;

        transaction.commit().await?;

        let post = Post::try_from(record)?;
        Ok(Some(post))
    }

    async fn view_post(&self, post_id: Id<PostMarker>) -> Result<Option<Post>> {
        let record = query_as::<_, PostRecord>(
            "
            UPDATE posts
            SET views = posts.views + 1
            WHERE posts.id = $1
            RETURNING
                posts.id::int8 AS id,
                posts.title,
                posts.content,
                posts.user_id::int8 AS user_id,
                posts.created_at::timestamptz AS created_at,
                posts.views::int8 AS views
            ",
        )
        .bind(post_id.get())
        .fetch_optional(&self.pool)
        .await?;

        let post = record.map(Post::try_from).transpose()?;
        Ok(post)
    }

    async fn create_like(&self, like: &CreateLike) -> Result<Like> {
        let record = query_as::<_, LikeRecord>(
            "
            INSERT INTO likes (user_id, post_id, created_at)
            VALUES ($1, $2, CURRENT_TIMESTAMP)
            RETURNING
                likes.id::int8 AS id,
                likes.user_id::int8 AS user_id,
                likes.post_id::int8 AS post_id,
                likes.created_at::timestamptz AS created_at
            ",
        )
        .bind(like.user_id.get())
        .bind(like.post_id.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }

    async fn delete_like(&self, like_id: Id<LikeMarker>) -> Result<bool> {
        let result = query("DELETE FROM likes WHERE likes.id = $1")
            .bind(like_id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn fetch_post_like_usernames(&self, post_id: Id<PostMarker>) -> Result<Vec<String>> {
        let usernames = query_scalar::<_, String>(
            "
            SELECT
                users.username
            FROM
                likes INNER JOIN users ON likes.user_id = users.id
            WHERE
                likes.post_id = $1
            ORDER BY
                likes.created_at, likes.id
            ",
        )
        .bind(post_id.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(usernames)
    }

    async fn create_comment(&self, comment: &CreateComment) -> Result<Comment> {
        let record = query_as::<_, CommentRecord>(
            "
            INSERT INTO comment (user_id, post_id, content, created_at)
            VALUES ($1, $2, $3, CURRENT_TIMESTAMP)
            RETURNING
                comment.id::int8 AS id,
                comment.user_id::int8 AS user_id,
                comment.post_id::int8 AS post_id,
                comment.content,
                comment.created_at::timestamptz AS created_at
            ",
        )
        .bind(comment.user_id.get())
        .bind(comment.post_id.get())
        .bind(comment.content.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }

    async fn fetch_post_comments(&self, post_id: Id<PostMarker>) -> Result<Vec<PostComment>> {
        let records = query_as::<_, PostCommentRecord>(
            "
            SELECT
                comment.id::int8 AS id,
                users.username,
                comment.content,
                comment.created_at::timestamptz AS created_at
            FROM
                comment JOIN users ON comment.user_id = users.id
            WHERE
                comment.post_id = $1
            ORDER BY
                comment.created_at, comment.id
            ",
        )
        .bind(post_id.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(PostComment::from).collect())
    }

    async fn update_comment_content(
        &self,
        comment_id: Id<CommentMarker>,
        content: &str,
    ) -> Result<Option<Comment>> {
        let record = query_as::<_, CommentRecord>(
            "
            UPDATE comment
            SET content = $1
            WHERE comment.id = $2
            RETURNING
                comment.id::int8 AS id,
                comment.user_id::int8 AS user_id,
                comment.post_id::int8 AS post_id,
                comment.content,
                comment.created_at::timestamptz AS created_at
            ",
        )
        .bind(content)
        .bind(comment_id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Comment::from))
    }

    async fn delete_comment(&self, comment_id: Id<CommentMarker>) -> Result<bool> {
        let result = query("DELETE FROM comment WHERE comment.id = $1")
            .bind(comment_id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn create_comment_like(&self, like: &CreateCommentLike) -> Result<CommentLike> {
        let record = query_as::<_, CommentLikeRecord>(
            "
            INSERT INTO comment_likes (comment_id, user_id)
            VALUES ($1, $2)
            RETURNING
                comment_likes.comment_id::int8 AS comment_id,
                comment_likes.user_id::int8 AS user_id
            ",
        )
        .bind(like.comment_id.get())
        .bind(like.user_id.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }
}
