//! Batch simulation: many unattended sessions over one board, replayed
//! until their first winner, then aggregated.
pub mod config;
pub use config::*;

pub mod report;
pub use report::*;

pub mod simulator;
pub use simulator::*;

pub mod summary;
pub use summary::*;

pub mod trial;
pub use trial::*;
