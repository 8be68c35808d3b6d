use crate::model::{Id, post::PostMarker, user::UserMarker};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct CommentMarker;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct Comment {
    pub id: Id<CommentMarker>,
    pub user_id: Id<UserMarker>,
    pub post_id: Id<PostMarker>,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct CreateComment {
    pub user_id: Id<UserMarker>,
    pub post_id: Id<PostMarker>,
    pub content: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct UpdateComment {
    pub id: Id<CommentMarker>,
    pub content: String,
}

/// A comment as listed under its post, with the author's username joined in.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct PostComment {
    pub id: Id<CommentMarker>,
    pub username: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Deserialize, Serialize)]
pub struct CommentLike {
    pub comment_id: Id<CommentMarker>,
    pub user_id: Id<UserMarker>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct CreateCommentLike {
    pub comment_id: Id<CommentMarker>,
    pub user_id: Id<UserMarker>,
}

#[cfg(test)]
mod tests {
    use crate::model::{
        Id,
        comment::{PostComment, UpdateComment},
    };
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn post_comment_shape() {
        let comment = PostComment {
            id: Id::new(1),
            username: "ada".to_owned(),
            content: "cool this is sick!!!".to_owned(),
            created_at: datetime!(2025-06-01 12:00:00 +02:00),
        };

        assert_eq!(
            serde_json::to_value(&comment).unwrap(),
            json!({
                "id": 1,
                "username": "ada",
                "content": "cool this is sick!!!",
                "created_at": "2025-06-01T12:00:00+02:00",
            })
        );
    }

    #[test]
    fn update_takes_id_from_body() {
        let update: UpdateComment =
            serde_json::from_value(json!({ "id": 9, "content": "edited" })).unwrap();

        assert_eq!(update.id, Id::new(9));
        assert_eq!(update.content, "edited");
        assert!(serde_json::from_value::<UpdateComment>(json!({ "content": "edited" })).is_err());
    }
}
