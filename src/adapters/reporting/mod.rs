//! Result reporting adapters.

mod file_result_sink;

pub use file_result_sink::FileResultSink;
