//! Restart: partial re-randomization of the population after the diversity
//! monitor reports premature convergence.

use tracing::debug;

use crate::config::Config;
use crate::fitness::{EvalCounter, Fitness};
use crate::operators::local_search::local_search;
use crate::permutation::Permutation;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// Regenerates the non-conserved tail of the live region.
///
/// The first `floor(population_size * conservation_pct)` candidates are
/// preserved unchanged. Every candidate past that point gets fresh random
/// signs from the reference permutation, is re-evaluated (one counter
/// increment each), and is immediately improved by local search.
pub fn restart<F: Fitness>(
    population: &mut Population,
    permutation: &Permutation,
    config: &Config,
    fitness: &F,
    counter: &mut EvalCounter,
    rng: &mut RandomNumberGenerator,
) {
    let population_size = population.population_size();
    let conserved = (population_size as f64 * config.conservation_pct()) as usize;
    debug!(
        conserved,
        regenerated = population_size - conserved,
        "restarting degenerate population"
    );

    for index in conserved..population_size {
        {
            let chromosome = &mut population.live_mut()[index];
            chromosome.randomize_from(permutation, rng);
            counter.record();
            let f = fitness.evaluate(chromosome.genes());
            chromosome.set_fitness(f);
        }
        local_search(population, index, fitness, counter, config, rng);
    }
}
