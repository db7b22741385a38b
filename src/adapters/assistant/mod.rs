//! Assistant adapters.

mod scripted;

pub use scripted::ScriptedAssistant;
