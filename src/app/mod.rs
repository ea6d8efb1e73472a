pub mod context;
pub mod messages;
pub mod pipeline;

pub use context::AppContext;
