use crate::server::{Message, ServerRouter, json::Json};
use axum::routing::get;

mod comments;
mod likes;
mod posts;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .route("/", get(welcome))
        .merge(posts::routes())
        .merge(likes::routes())
        .merge(comments::routes())
}

async fn welcome() -> Json<Message> {
    Json(Message::new("Welcome to the twitter API!"))
}
