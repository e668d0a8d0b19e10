pub mod password_hasher;
pub mod token_provider;
pub mod user_repository;

pub use password_hasher::PasswordHasher;
pub use token_provider::TokenProvider;
pub use user_repository::UserRepository;
