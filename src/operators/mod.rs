//! # Generational Operators
//!
//! The operators that mutate the shared population store, applied by the
//! engine in a fixed order each generation: selection, crossover, mutation,
//! replacement, local search, and the restart triggered by the diversity
//! monitor. Every operator takes the configuration explicitly; none holds
//! state of its own.

pub mod crossover;
pub mod local_search;
pub mod mutation;
pub mod replacement;
pub mod restart;
pub mod selection;

pub use crossover::crossover;
pub use local_search::{local_search, local_search_pass};
pub use mutation::mutate;
pub use replacement::replace;
pub use restart::restart;
pub use selection::select;
