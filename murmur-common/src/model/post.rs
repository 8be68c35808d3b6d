use crate::model::{Id, user::UserMarker};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct Post {
    pub id: Id<PostMarker>,
    pub title: String,
    pub content: String,
    pub user_id: Id<UserMarker>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub views: ViewCount,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub user_id: Id<UserMarker>,
}

/// Number of times a post has been read by id.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ViewCount(u64);

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Error)]
#[error("The view count is negative: {0}")]
pub struct NegativeViewCountError(i64);

impl ViewCount {
    #[must_use]
    pub fn new(views: u64) -> Self {
        Self(views)
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for ViewCount {
    type Error = NegativeViewCountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| NegativeViewCountError(value))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        Id,
        post::{NegativeViewCountError, Post, ViewCount},
    };
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn view_count_from_database() {
        assert_eq!(ViewCount::try_from(0).unwrap().get(), 0);
        assert_eq!(ViewCount::try_from(17).unwrap().get(), 17);
        assert_eq!(ViewCount::try_from(-1), Err(NegativeViewCountError(-1)));
    }

    #[test]
    fn post_row_shape() {
        let post = Post {
            id: Id::new(7),
            title: "hello".to_owned(),
            content: "first post".to_owned(),
            user_id: Id::new(2),
            created_at: datetime!(2025-03-04 05:06:07 UTC),
            views: ViewCount::new(3),
        };

        assert_eq!(
            serde_json::to_value(&post).unwrap(),
            json!({
                "id": 7,
                "title": "hello",
                "content": "first post",
                "user_id": 2,
                "created_at": "2025-03-04T05:06:07Z",
                "views": 3,
            })
        );
    }
}
