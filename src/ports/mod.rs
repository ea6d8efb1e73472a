pub mod identity;
pub mod installer;

pub use identity::{AuthorIdentity, IdentitySource};
pub use installer::Installer;
