pub mod error;
pub mod placeholders;
pub mod question;
pub mod session;
pub mod strategy;

pub use error::AppError;
pub use question::Question;
pub use session::{PodName, Session};
pub use strategy::{ConfigurationStrategy, DecisionState, DecisionStep, TestExample};
