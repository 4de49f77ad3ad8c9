//! Scanner orchestration: adapter contract, registry, and the
//! build-then-scan pipeline.
//!
//! The pipeline is sequential: build, then scanners one at a time, then
//! aggregation. One scanner failing never aborts the others; a build failure
//! aborts everything before any scanner runs.

#![forbid(unsafe_code)]

mod controller;
mod exec;
mod registry;
mod render;
mod scanner;
#[cfg(test)]
mod test_support;

pub use controller::{run_scan, PipelineError, ScanOutput};
pub use exec::{is_tool_missing, run_command, CommandOutput};
pub use registry::ScannerRegistry;
pub use render::render_console;
pub use scanner::{ScanContext, Scanner};
