//! Session store and the request/response shapes of the live surface.
pub mod hall;
pub use hall::*;

pub mod response;
pub use response::*;
