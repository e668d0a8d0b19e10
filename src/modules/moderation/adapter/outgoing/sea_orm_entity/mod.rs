pub mod events_on_review;
