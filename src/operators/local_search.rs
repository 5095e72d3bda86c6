//! Local search: a first-improvement bit-flip hill-climb applied per
//! candidate, bounded by a small trial budget.

use crate::config::Config;
use crate::fitness::{EvalCounter, Fitness};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// Tries to improve the live candidate at `index` by single sign flips.
///
/// Each trial picks a random gene position, flips its sign, and re-evaluates
/// the candidate (one counter increment per trial). A strict fitness
/// decrease commits the flip, stores the new fitness, and returns `true`.
/// Otherwise the flip is reverted and the next trial runs, up to
/// `local_search_trials` attempts; an exhausted budget returns `false` with
/// the candidate bit-identical to before the call.
pub fn local_search<F: Fitness + ?Sized>(
    population: &mut Population,
    index: usize,
    fitness: &F,
    counter: &mut EvalCounter,
    config: &Config,
    rng: &mut RandomNumberGenerator,
) -> bool {
    let chromosome = &mut population.live_mut()[index];
    let length = chromosome.len();
    let best_fitness = chromosome.fitness();

    for _ in 0..config.local_search_trials() {
        let position = rng.index(length);
        chromosome.flip_sign(position);
        counter.record();
        let trial = fitness.evaluate(chromosome.genes());

        if trial < best_fitness {
            chromosome.set_fitness(trial);
            return true;
        }
        chromosome.flip_sign(position);
    }

    false
}

/// Applies local search over the population, by generation mode.
///
/// Generation 1 visits the entire live region (the freshly initialized
/// population); later generations visit the prefix
/// `[0, floor(population_size * local_search_pct))`.
pub fn local_search_pass<F: Fitness>(
    population: &mut Population,
    generation: usize,
    fitness: &F,
    counter: &mut EvalCounter,
    config: &Config,
    rng: &mut RandomNumberGenerator,
) {
    let limit = if generation > 1 {
        (population.population_size() as f64 * config.local_search_pct()) as usize
    } else {
        population.population_size()
    };

    for index in 0..limit {
        local_search(population, index, fitness, counter, config, rng);
    }
}
