pub mod auth;

pub use auth::{
    resolve_admin_or_response, resolve_current_user_or_response, AuthenticatedUser,
};
