//! Assistant handlers.

mod send_message;

pub use send_message::{SendMessageCommand, SendMessageHandler};
