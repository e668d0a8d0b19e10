pub mod current_user;

pub use current_user::{CurrentUserResolver, ResolveAdminError, ResolveCurrentUserError};
