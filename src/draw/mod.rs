pub mod sequence;
pub use sequence::*;
