mod service;
mod update_profile;

pub use service::UserCommandService;
pub use update_profile::UpdateProfileCommand;
