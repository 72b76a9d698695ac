pub mod batch;
pub use batch::*;

pub mod bingo;
pub use bingo::*;

pub mod card;
pub use card::*;

pub mod layout;
pub use layout::*;

pub mod signature;
pub use signature::*;

pub mod slot;
pub use slot::*;
