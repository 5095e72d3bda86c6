//! # Permutation
//!
//! The `Permutation` struct holds the reference arrangement the optimizer
//! evolves candidates against: an ordered sequence of `n` non-zero signed
//! integers whose magnitudes are exactly `1..=n`. It is immutable once
//! constructed.
//!
//! Instances can be built from an explicit vector or parsed from the textual
//! instance layout: the element count followed by `n` whitespace-separated
//! integers.
//!
//! ## Example
//!
//! ```rust
//! use memrev::permutation::Permutation;
//! use std::io::Cursor;
//!
//! let perm = Permutation::new(vec![3, -1, 2]).unwrap();
//! assert_eq!(perm.len(), 3);
//!
//! let parsed = Permutation::from_reader(Cursor::new("3\n3 -1 2\n")).unwrap();
//! assert_eq!(parsed.elements(), perm.elements());
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{MemeticError, Result, ResultExt};

/// The reference signed permutation candidates are evaluated against.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    elements: Vec<i32>,
}

impl Permutation {
    /// Creates a permutation from its elements.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPermutation` if the sequence is empty, contains a
    /// zero, or its magnitudes are not exactly `1..=n`.
    pub fn new(elements: Vec<i32>) -> Result<Self> {
        if elements.is_empty() {
            return Err(MemeticError::InvalidPermutation(
                "permutation must contain at least one element".to_string(),
            ));
        }

        let n = elements.len();
        let mut seen = vec![false; n];
        for &value in &elements {
            if value == 0 {
                return Err(MemeticError::InvalidPermutation(
                    "permutation elements must be non-zero".to_string(),
                ));
            }
            let magnitude = value.unsigned_abs() as usize;
            if magnitude > n || seen[magnitude - 1] {
                return Err(MemeticError::InvalidPermutation(format!(
                    "magnitudes must be a permutation of 1..={}, offending element {}",
                    n, value
                )));
            }
            seen[magnitude - 1] = true;
        }

        Ok(Self { elements })
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The elements in order.
    pub fn elements(&self) -> &[i32] {
        &self.elements
    }

    /// Parses a permutation from a reader.
    ///
    /// The expected layout is the element count followed by that many
    /// whitespace-separated signed integers.
    ///
    /// # Errors
    ///
    /// Returns `Io` on read failure, `Parse` on a malformed count or
    /// element, and `InvalidPermutation` if the parsed sequence fails
    /// validation.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;

        let mut tokens = input.split_whitespace();
        let count: usize = tokens
            .next()
            .ok_or_else(|| MemeticError::Parse("missing element count".to_string()))?
            .parse()
            .map_err(|e| MemeticError::Parse(format!("invalid element count: {}", e)))?;

        let mut elements = Vec::with_capacity(count);
        for i in 0..count {
            let token = tokens.next().ok_or_else(|| {
                MemeticError::Parse(format!("expected {} elements, found {}", count, i))
            })?;
            let value: i32 = token
                .parse()
                .map_err(|e| MemeticError::Parse(format!("invalid element {:?}: {}", token, e)))?;
            elements.push(value);
        }

        Self::new(elements)
    }

    /// Parses a permutation from a file with the same layout as
    /// [`from_reader`](Self::from_reader).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).context(format!(
            "Failed to open instance file {}",
            path.as_ref().display()
        ))?;
        Self::from_reader(BufReader::new(file))
    }
}
