pub mod create_comment;
pub mod delete_comment;
pub mod list_event_comments;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::comment::application::domain::entities::Comment;

pub use create_comment::{create_comment_handler, CreateCommentDto};
pub use delete_comment::delete_comment_handler;
pub use list_event_comments::list_event_comments_handler;

#[derive(Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: String,
    pub text: String,
    pub user_id: String,
    pub event_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            text: comment.text,
            user_id: comment.user_id.to_string(),
            event_id: comment.event_id.to_string(),
            created_at: comment.created_at,
        }
    }
}
