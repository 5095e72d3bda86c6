//! Replacement: stochastically overwrites late-population slots with
//! strictly fitter offspring.

use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// Folds the offspring region back into the live population.
///
/// Each offspring draws a uniformly random slot in
/// `[replacement_base, population_top)` and overwrites that slot's fitness
/// and genes iff it is strictly fitter. Target slots are not deduplicated:
/// a later offspring may overwrite a slot an earlier one just improved, so
/// the only guarantee is last-write-wins in iteration order.
pub fn replace(population: &mut Population, rng: &mut RandomNumberGenerator) {
    let replacement_base = population.replacement_base();
    let window = population.population_top() - replacement_base;
    if window == 0 {
        return;
    }

    let offspring_base = population.offspring_base();
    let offspring_top = population.offspring_top();
    for i in offspring_base..offspring_top {
        let slot = replacement_base + rng.index(window);
        let (live, offspring) = population.split_regions();
        let child = &offspring[i - offspring_base];
        if child.fitness() < live[slot].fitness() {
            live[slot].copy_from(child);
        }
    }
}
