//! Operations module
//!
//! The header patch itself and the writing of its result

pub mod output;
pub mod patch;

pub use output::*;
pub use patch::*;
