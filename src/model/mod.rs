//! Data model shared by the pipeline stages.
//!
//! [`RawInput`] goes in, [`StageCounters`] accumulate while stages run, and a
//! single [`CleanupResult`] comes out.

mod counters;
mod input;
mod result;

pub use counters::*;
pub use input::*;
pub use result::*;
