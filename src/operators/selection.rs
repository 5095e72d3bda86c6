//! Selection: orders the live region ascending by fitness and tracks the
//! best solution seen so far.

use std::mem;

use crate::chromosome::Chromosome;
use crate::error::{MemeticError, Result};
use crate::population::Population;

/// Sorts the live region ascending by fitness and lowers `best_solution` if
/// the new minimum improves on it.
///
/// Fitness values are small non-negative integers bounded by the sequence
/// length plus one, so a counting sort over `[0, n + 2)` orders the region
/// in linear time. Candidates with equal fitness keep no guaranteed
/// relative order. The offspring region is untouched.
///
/// # Errors
///
/// Returns `EmptyPopulation` on an empty live region and
/// `FitnessOutOfRange` if any candidate's fitness falls outside the bounded
/// domain.
pub fn select(population: &mut Population, best_solution: &mut usize) -> Result<()> {
    let live = population.live_mut();
    if live.is_empty() {
        return Err(MemeticError::EmptyPopulation);
    }

    let bound = live[0].len() + 2;
    if let Some(fitness) = live.iter().map(|c| c.fitness()).find(|&f| f >= bound) {
        return Err(MemeticError::FitnessOutOfRange { fitness, bound });
    }

    let mut buckets: Vec<Vec<Chromosome>> = vec![Vec::new(); bound];
    for slot in live.iter_mut() {
        let chromosome = mem::take(slot);
        buckets[chromosome.fitness()].push(chromosome);
    }

    let mut write = 0;
    for bucket in &mut buckets {
        for chromosome in bucket.drain(..) {
            live[write] = chromosome;
            write += 1;
        }
    }

    let minimum = live[0].fitness();
    if minimum < *best_solution {
        *best_solution = minimum;
    }

    Ok(())
}
