pub mod error;
pub mod op;
pub mod queue;

pub use error::QueueError;
pub use op::{Op, Repeat};
pub use queue::EventQueue;
