//! Crossover: single-point recombination of parent pairs drawn from the
//! selectable prefix of the live region, writing child pairs into the
//! offspring region.

use crate::config::Config;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// Produces offspring by single-point recombination.
///
/// Walks pair slots `population_base, +2, ...` below `limit_for_selection`
/// while offspring space remains. Both parent indices are drawn uniformly
/// from the selectable prefix; a collision is redrawn up to
/// `parent_retry_limit` times and then tolerated, so self-crossover stays
/// possible. Each pair fires iff the acceptance draw is at most
/// `crossover_prob`; an accepted pair writes the complementary children
///
/// ```text
/// child1 = parent1[..point] ++ parent2[point..]
/// child2 = parent2[..point] ++ parent1[point..]
/// ```
///
/// and advances the write cursor by two. Afterwards `offspring_top` is the
/// write cursor, which may fall short of the region's capacity when few
/// pairs were accepted or space ran out.
pub fn crossover(population: &mut Population, config: &Config, rng: &mut RandomNumberGenerator) {
    let limit = population.limit_for_selection();
    let total = population.total_size();
    let offspring_base = population.offspring_base();

    let mut k = offspring_base;
    let mut i = population.population_base();
    while i < limit && k + 1 < total {
        let parent1 = rng.index(limit);
        let mut parent2 = rng.index(limit);
        for _ in 0..config.parent_retry_limit() {
            if parent1 != parent2 {
                break;
            }
            parent2 = rng.index(limit);
        }

        if rng.percentage() <= config.crossover_prob() {
            let length = population.live()[parent1].len();
            let point = rng.index(length);

            let (live, offspring) = population.split_regions();
            let slot = k - offspring_base;
            let (head, tail) = offspring.split_at_mut(slot + 1);
            let child1 = &mut head[slot];
            let child2 = &mut tail[0];
            let first = live[parent1].genes();
            let second = live[parent2].genes();

            child1.genes_mut()[..point].copy_from_slice(&first[..point]);
            child2.genes_mut()[..point].copy_from_slice(&second[..point]);
            child1.genes_mut()[point..].copy_from_slice(&second[point..]);
            child2.genes_mut()[point..].copy_from_slice(&first[point..]);

            k += 2;
        }

        i += 2;
    }

    population.set_offspring_top(k);
}
