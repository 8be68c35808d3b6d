use murmur_common::model::{
    ModelValidationError,
    comment::{Comment, CommentLike, PostComment},
    like::Like,
    post::Post,
};
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Clone, Eq, PartialEq, Debug, Hash, FromRow)]
pub(crate) struct PostRecord {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub created_at: OffsetDateTime,
    pub views: i64,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, FromRow)]
pub(crate) struct LikeRecord {
    pub id: i64,
    pub user_id: i64,
    pub post_id: i64,
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, FromRow)]
pub(crate) struct CommentRecord {
    pub id: i64,
    pub user_id: i64,
    pub post_id: i64,
    pub content: String,
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, FromRow)]
pub(crate) struct PostCommentRecord {
    pub id: i64,
    pub username: String,
    pub content: String,
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash, FromRow)]
pub(crate) struct CommentLikeRecord {
    pub comment_id: i64,
    pub user_id: i64,
}

impl TryFrom<PostRecord> for Post {
    type Error = ModelValidationError;

    fn try_from(value: PostRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            title: value.title,
            content: value.content,
            user_id: value.user_id.into(),
            created_at: value.created_at,
            views: value.views.try_into()?,
        })
    }
}

impl From<LikeRecord> for Like {
    fn from(value: LikeRecord) -> Self {
        Self {
            id: value.id.into(),
            user_id: value.user_id.into(),
            post_id: value.post_id.into(),
            created_at: value.created_at,
        }
    }
}

impl From<CommentRecord> for Comment {
    fn from(value: CommentRecord) -> Self {
        Self {
            id: value.id.into(),
            user_id: value.user_id.into(),
            post_id: value.post_id.into(),
            content: value.content,
            created_at: value.created_at,
        }
    }
}

impl From<PostCommentRecord> for PostComment {
    fn from(value: PostCommentRecord) -> Self {
        Self {
            id: value.id.into(),
            username: value.username,
            content: value.content,
            created_at: value.created_at,
        }
    }
}

impl From<CommentLikeRecord> for CommentLike {
    fn from(value: CommentLikeRecord) -> Self {
        Self {
            comment_id: value.comment_id.into(),
            user_id: value.user_id.into(),
        }
    }
}
