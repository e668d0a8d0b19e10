pub mod attend_event;
pub mod cancel_attendance;
pub mod create_event;
pub mod delete_event;
pub mod events_by_creator;
pub mod favorite_event;
pub mod get_event;
pub mod list_events;
pub mod list_favorites;
pub mod list_participants;
pub mod unfavorite_event;
pub mod update_event;
