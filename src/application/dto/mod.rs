pub mod auth;
pub mod users;

pub use auth::AuthenticatedUser;
pub use users::{PublicProfileDto, UserDto};
