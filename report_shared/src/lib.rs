//! `report_shared`
//!
//! Test-result collection and reporting for UI test suites.
//!
//! Data flows one way:
//! harness → [`hooks::ReportHooks`] → [`collector::ResultCollector`] →
//! [`summary::SummaryAggregator`] → [`render::ReportRenderer`].
//!
//! Design goals:
//! - Aggregation and rendering are pure; file IO belongs to the caller.
//! - No global state: every run owns its collector.
//! - No `unsafe`.

pub mod collector;
pub mod config;
pub mod cucumber;
pub mod hooks;
pub mod render;
pub mod result;
pub mod summary;
pub mod tags;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::collector::*;
    pub use crate::config::*;
    pub use crate::hooks::*;
    pub use crate::render::{ReportRenderer, RunMetadata};
    pub use crate::result::*;
    pub use crate::summary::*;
    pub use crate::tags::*;
}
