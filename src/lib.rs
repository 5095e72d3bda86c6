pub mod chromosome;
pub mod config;
pub mod diversity;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod operators;
pub mod permutation;
pub mod population;
pub mod rng;

// Re-export commonly used types for convenience
pub use config::Config;
pub use engine::{Engine, Report};
pub use error::{MemeticError, Result, ResultExt};
pub use fitness::{BreakpointDistance, EvalCounter, Fitness};
pub use permutation::Permutation;
pub use population::Population;
pub use rng::RandomNumberGenerator;
