//! # Diversity
//!
//! Normalized Shannon entropy over the fitness-value distribution of the
//! live region, used to detect premature convergence. The frequency table
//! is built fresh for every computation and discarded afterwards.

use std::collections::HashMap;

use crate::config::Config;
use crate::population::Population;

/// Normalized Shannon entropy of the live region's fitness values, in
/// `[0, 1]`.
///
/// With `p_v` the share of candidates carrying fitness `v`, the raw entropy
/// `H = -sum(p_v * log2(p_v))` is normalized by `log2(distinct)`. A single
/// distinct fitness value yields 0.0: the normalizing denominator vanishes
/// there, and a population collapsed onto one fitness value is maximally
/// degenerate by definition.
pub fn shannon_entropy(population: &Population) -> f64 {
    let live = population.live();
    let mut occurrences: HashMap<usize, usize> = HashMap::new();
    for chromosome in live {
        *occurrences.entry(chromosome.fitness()).or_insert(0) += 1;
    }

    let distinct = occurrences.len();
    if distinct <= 1 {
        return 0.0;
    }

    let size = live.len() as f64;
    let mut entropy = 0.0;
    for &count in occurrences.values() {
        let probability = count as f64 / size;
        entropy -= probability * probability.log2();
    }

    entropy / (distinct as f64).log2()
}

/// Whether the population has collapsed to near-uniform fitness and should
/// be restarted.
pub fn reached_degenerate_state(population: &Population, config: &Config) -> bool {
    shannon_entropy(population) < config.restart_threshold()
}
