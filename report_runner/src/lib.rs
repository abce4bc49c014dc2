//! Report harness.
//!
//! Wraps `report_shared` with the pieces a command-line run needs: input
//! parsing, artifact persistence, and the console summary.

pub mod console;
pub mod input;
pub mod pipeline;
pub mod sink;
