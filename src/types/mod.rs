//! Request and response types at the edge of the relay.

pub mod request;
pub mod response;

// Re-export commonly used types
pub use request::*;
pub use response::*;
