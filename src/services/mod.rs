pub mod identity;
pub mod installer;
pub mod instantiate;
pub mod layout;
pub mod podfile;
pub mod prompter;
pub mod restructure;

pub use identity::GitIdentitySource;
pub use installer::PodInstaller;
pub use layout::TemplateLayout;
pub use prompter::Prompter;
