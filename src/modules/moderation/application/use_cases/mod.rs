pub mod approve_event;
pub mod edit_submission;
pub mod list_pending;
pub mod reject_event;
pub mod submit_event;
