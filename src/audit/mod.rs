//! Acceptance gate for a finished batch.
//!
//! The checks re-derive everything from the batch itself, so they catch a
//! corrupted or hand-edited batch as well as a generator bug.
pub mod auditor;
pub use auditor::*;

pub mod check;
pub use check::*;

pub mod report;
pub use report::*;
