pub mod get_me;
pub mod login_user;
pub mod register_user;

pub use get_me::{get_me_handler, UserProfileResponse};
pub use login_user::{login_user_handler, LoginFormDto, TokenResponse};
pub use register_user::{register_user_handler, RegisterRequestDto, RegisteredUserResponse};
