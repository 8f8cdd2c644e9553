//! Command line workflow

pub mod orchestration;

pub use orchestration::{run_bump_workflow, BumpWorkflowArgs, WorkflowResult};
