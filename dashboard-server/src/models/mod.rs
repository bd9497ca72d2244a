//! Request/response models

pub mod prediction;
pub mod session;
pub mod batch;

pub use prediction::*;
pub use session::*;
pub use batch::*;
