//! System abstraction for filesystem operations
//!
//! Every read and write the patcher performs goes through the [`System`]
//! trait, so the whole read-modify-write cycle can be exercised against an
//! in-memory filesystem in tests.

use std::io;
use std::path::Path;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for filesystem operations
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path points to a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write bytes to a file, creating it if it doesn't exist and
    /// truncating it if it does
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}
