pub mod orchestration;

pub use orchestration::{failure_message, run_extract_workflow};
