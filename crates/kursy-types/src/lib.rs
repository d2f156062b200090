//! Core types for the course assignment board

mod error;
mod types;

pub use error::*;
pub use types::*;
