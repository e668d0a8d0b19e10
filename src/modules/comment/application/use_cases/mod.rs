pub mod create_comment;
pub mod delete_comment;
pub mod list_event_comments;
