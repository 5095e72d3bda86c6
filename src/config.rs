//! # Config
//!
//! The `Config` struct collects every parameter of the memetic algorithm:
//! the operator probabilities, the region percentages derived from the
//! population size, the local-search budget, and the run-level settings of
//! the engine. Passing the configuration explicitly into every operator
//! keeps concurrent runs independent and lets tests override individual
//! parameters deterministically.
//!
//! The defaults carry the published parameter set of the memetic algorithm
//! for sorting permutations by reversals.
//!
//! ## Example
//!
//! ```rust
//! use memrev::config::Config;
//!
//! let config = Config::builder()
//!     .crossover_prob(0.9)
//!     .max_generations(500)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.crossover_prob(), 0.9);
//! // Untouched parameters keep their defaults.
//! assert_eq!(config.mutation_prob(), 0.01);
//! ```

use crate::error::{MemeticError, Result};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Probability that a drawn parent pair produces offspring.
    crossover_prob: f64,
    /// Per-gene probability of a sign flip in the offspring region.
    mutation_prob: f64,
    /// Fraction of the population eligible as crossover parents.
    selection_pct: f64,
    /// Fraction of the population below which replacement never reaches.
    replacement_pct: f64,
    /// Fraction of the population visited by the per-generation local search.
    local_search_pct: f64,
    /// Fraction of the population preserved across a restart.
    conservation_pct: f64,
    /// Normalized entropy below which the population counts as degenerate.
    restart_threshold: f64,
    /// Bit-flip trials per local-search invocation.
    local_search_trials: usize,
    /// Redraw attempts before a parent collision is tolerated.
    parent_retry_limit: usize,
    /// Generation budget of a run.
    max_generations: usize,
    /// Fitness at which a run stops early.
    target_fitness: usize,
    /// Minimum region size before fitness evaluation goes parallel.
    parallel_threshold: usize,
}

impl Config {
    pub fn crossover_prob(&self) -> f64 {
        self.crossover_prob
    }

    pub fn mutation_prob(&self) -> f64 {
        self.mutation_prob
    }

    pub fn selection_pct(&self) -> f64 {
        self.selection_pct
    }

    pub fn replacement_pct(&self) -> f64 {
        self.replacement_pct
    }

    pub fn local_search_pct(&self) -> f64 {
        self.local_search_pct
    }

    pub fn conservation_pct(&self) -> f64 {
        self.conservation_pct
    }

    pub fn restart_threshold(&self) -> f64 {
        self.restart_threshold
    }

    pub fn local_search_trials(&self) -> usize {
        self.local_search_trials
    }

    pub fn parent_retry_limit(&self) -> usize {
        self.parent_retry_limit
    }

    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn target_fitness(&self) -> usize {
        self.target_fitness
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Returns a builder for creating a `Config` instance.
    ///
    /// Every parameter left unset keeps its default value.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Checks that every parameter lies in its valid range.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("crossover_prob", self.crossover_prob),
            ("mutation_prob", self.mutation_prob),
            ("selection_pct", self.selection_pct),
            ("replacement_pct", self.replacement_pct),
            ("local_search_pct", self.local_search_pct),
            ("conservation_pct", self.conservation_pct),
            ("restart_threshold", self.restart_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MemeticError::Configuration(format!(
                    "{} must lie in [0, 1], got {}",
                    name, value
                )));
            }
        }

        if self.local_search_trials == 0 {
            return Err(MemeticError::Configuration(
                "local_search_trials must be greater than 0".to_string(),
            ));
        }

        if self.max_generations == 0 {
            return Err(MemeticError::Configuration(
                "max_generations must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crossover_prob: 0.98,
            mutation_prob: 0.01,
            selection_pct: 0.96,
            replacement_pct: 0.4,
            local_search_pct: 0.94,
            conservation_pct: 0.98,
            restart_threshold: 0.2,
            local_search_trials: 2,
            parent_retry_limit: 5,
            max_generations: 200,
            target_fitness: 0,
            parallel_threshold: 1000,
        }
    }
}

/// Builder for `Config`.
///
/// Provides a fluent interface for overriding individual parameters.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    crossover_prob: Option<f64>,
    mutation_prob: Option<f64>,
    selection_pct: Option<f64>,
    replacement_pct: Option<f64>,
    local_search_pct: Option<f64>,
    conservation_pct: Option<f64>,
    restart_threshold: Option<f64>,
    local_search_trials: Option<usize>,
    parent_retry_limit: Option<usize>,
    max_generations: Option<usize>,
    target_fitness: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl ConfigBuilder {
    pub fn crossover_prob(mut self, value: f64) -> Self {
        self.crossover_prob = Some(value);
        self
    }

    pub fn mutation_prob(mut self, value: f64) -> Self {
        self.mutation_prob = Some(value);
        self
    }

    pub fn selection_pct(mut self, value: f64) -> Self {
        self.selection_pct = Some(value);
        self
    }

    pub fn replacement_pct(mut self, value: f64) -> Self {
        self.replacement_pct = Some(value);
        self
    }

    pub fn local_search_pct(mut self, value: f64) -> Self {
        self.local_search_pct = Some(value);
        self
    }

    pub fn conservation_pct(mut self, value: f64) -> Self {
        self.conservation_pct = Some(value);
        self
    }

    pub fn restart_threshold(mut self, value: f64) -> Self {
        self.restart_threshold = Some(value);
        self
    }

    pub fn local_search_trials(mut self, value: usize) -> Self {
        self.local_search_trials = Some(value);
        self
    }

    pub fn parent_retry_limit(mut self, value: usize) -> Self {
        self.parent_retry_limit = Some(value);
        self
    }

    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn target_fitness(mut self, value: usize) -> Self {
        self.target_fitness = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `Config` instance, validating every parameter.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if any parameter lies outside its
    /// valid range.
    pub fn build(self) -> Result<Config> {
        let defaults = Config::default();
        let config = Config {
            crossover_prob: self.crossover_prob.unwrap_or(defaults.crossover_prob),
            mutation_prob: self.mutation_prob.unwrap_or(defaults.mutation_prob),
            selection_pct: self.selection_pct.unwrap_or(defaults.selection_pct),
            replacement_pct: self.replacement_pct.unwrap_or(defaults.replacement_pct),
            local_search_pct: self.local_search_pct.unwrap_or(defaults.local_search_pct),
            conservation_pct: self.conservation_pct.unwrap_or(defaults.conservation_pct),
            restart_threshold: self.restart_threshold.unwrap_or(defaults.restart_threshold),
            local_search_trials: self
                .local_search_trials
                .unwrap_or(defaults.local_search_trials),
            parent_retry_limit: self
                .parent_retry_limit
                .unwrap_or(defaults.parent_retry_limit),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            target_fitness: self.target_fitness.unwrap_or(defaults.target_fitness),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_published_parameters() {
        let config = Config::default();
        assert_eq!(config.crossover_prob(), 0.98);
        assert_eq!(config.mutation_prob(), 0.01);
        assert_eq!(config.selection_pct(), 0.96);
        assert_eq!(config.replacement_pct(), 0.4);
        assert_eq!(config.local_search_pct(), 0.94);
        assert_eq!(config.conservation_pct(), 0.98);
        assert_eq!(config.restart_threshold(), 0.2);
        assert_eq!(config.local_search_trials(), 2);
        assert_eq!(config.parent_retry_limit(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides_single_parameter() {
        let config = Config::builder().mutation_prob(0.05).build().unwrap();
        assert_eq!(config.mutation_prob(), 0.05);
        assert_eq!(config.crossover_prob(), 0.98);
    }

    #[test]
    fn test_builder_rejects_out_of_range_probability() {
        let result = Config::builder().crossover_prob(1.5).build();
        assert!(matches!(result, Err(MemeticError::Configuration(_))));

        let result = Config::builder().restart_threshold(-0.1).build();
        assert!(matches!(result, Err(MemeticError::Configuration(_))));
    }

    #[test]
    fn test_builder_rejects_zero_local_search_budget() {
        let result = Config::builder().local_search_trials(0).build();
        assert!(matches!(result, Err(MemeticError::Configuration(_))));
    }

    #[test]
    fn test_builder_rejects_zero_generations() {
        let result = Config::builder().max_generations(0).build();
        assert!(matches!(result, Err(MemeticError::Configuration(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config::builder().mutation_prob(0.02).build().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
