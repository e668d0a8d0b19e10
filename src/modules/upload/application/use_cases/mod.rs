pub mod store_avatar;
pub mod store_event_image;
