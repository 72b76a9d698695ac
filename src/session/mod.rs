//! Hit counting, win detection and ranking for one sequence of calls.
//!
//! ## Core Types
//!
//! - [`Board`]: an audited batch plus a ball-to-cards index, shared read-only
//! - [`Session`]: call history, hit counts and winners over one board
//! - [`Standing`]: one line of the ranking
pub mod board;
pub use board::*;

pub mod detail;
pub use detail::*;

pub mod outcome;
pub use outcome::*;

pub mod phase;
pub use phase::*;

pub mod ranking;
pub use ranking::*;

pub mod session;
pub use session::*;
