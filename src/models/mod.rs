pub mod dataset;
pub mod message;
pub mod session;

pub use dataset::Dataset;
pub use message::{Message, MessageRole};
pub use session::Session;
