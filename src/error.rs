//! # Error Types
//!
//! This module defines custom error types for the memetic algorithm library.
//! It provides specific error variants for the different failure scenarios
//! that may occur while building a population or running the optimizer.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use memrev::error::{MemeticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use memrev::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn read_instance_file(path: &str) -> Result<()> {
//!     File::open(path).context("Failed to open instance file")
//!         .and_then(|_file| {
//!             // Read file contents
//!             Ok(())
//!         })
//! }
//! ```

use std::collections::TryReserveError;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur in the memetic algorithm library.
///
/// This enum provides specific error variants for different failure scenarios
/// that may occur while constructing or evolving a population.
#[derive(Error, Debug)]
pub enum MemeticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a permutation fails validation.
    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    /// Error that occurs when memory for the population store or a
    /// candidate's gene array cannot be obtained.
    #[error("Allocation error: {0}")]
    Allocation(#[from] TryReserveError),

    /// Error that occurs when a fitness value falls outside the bounded
    /// domain assumed by the counting sort.
    #[error("Fitness value {fitness} outside the sortable domain [0, {bound})")]
    FitnessOutOfRange { fitness: usize, bound: usize },

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error that occurs when an input stream cannot be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for memetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `MemeticError`.
///
/// ## Examples
///
/// ```rust
/// use memrev::error::{MemeticError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, MemeticError>;

/// Extension trait for Result to add context to errors.
///
/// This trait provides a convenient way to add context to errors when
/// converting from one error type to `MemeticError`.
///
/// ## Examples
///
/// ```rust
/// use memrev::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> memrev::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Adds context to an error.
    ///
    /// This method converts the error to a `MemeticError` with the provided
    /// context.
    ///
    /// ## Arguments
    ///
    /// * `context` - A string providing context for the error.
    ///
    /// ## Returns
    ///
    /// A `Result<T, MemeticError>` with the original value or a
    /// contextualized error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| MemeticError::Other(format!("{}: {}", context, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MemeticError::FitnessOutOfRange {
            fitness: 12,
            bound: 10,
        };
        assert_eq!(
            err.to_string(),
            "Fitness value 12 outside the sortable domain [0, 10)"
        );

        let err = MemeticError::Configuration("bad probability".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad probability");
    }

    #[test]
    fn test_context_wraps_error() {
        let io_err: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let err = io_err.context("reading instance").unwrap_err();
        assert!(err.to_string().contains("reading instance"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_from_io_error() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(MemeticError::Io(_))));
    }
}
