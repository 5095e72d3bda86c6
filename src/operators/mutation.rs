//! Mutation: independent per-gene sign flips over the offspring region.

use crate::config::Config;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// Flips each offspring gene's sign with probability `mutation_prob`.
///
/// Every gene of every candidate in the offspring region draws
/// independently from the discrete acceptance set; a draw at or below the
/// mutation probability negates the gene. The live region is untouched.
pub fn mutate(population: &mut Population, config: &Config, rng: &mut RandomNumberGenerator) {
    let mutation_prob = config.mutation_prob();
    for chromosome in population.offspring_mut() {
        for position in 0..chromosome.len() {
            if rng.percentage() <= mutation_prob {
                chromosome.flip_sign(position);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::crossover;
    use crate::permutation::Permutation;
    use crate::population::Population;

    fn population_with_offspring(seed: u64) -> (Population, RandomNumberGenerator) {
        let perm = Permutation::new((1..=8).collect()).unwrap();
        let config = Config::default();
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let mut population = Population::initialize(&perm, &config, &mut rng).unwrap();
        crossover(&mut population, &config, &mut rng);
        (population, rng)
    }

    #[test]
    fn test_zero_probability_leaves_offspring_unchanged() {
        let (mut population, mut rng) = population_with_offspring(41);
        let config = Config::builder().mutation_prob(0.0).build().unwrap();
        let before: Vec<Vec<i32>> = population
            .offspring()
            .iter()
            .map(|c| c.genes().to_vec())
            .collect();

        mutate(&mut population, &config, &mut rng);

        let after: Vec<Vec<i32>> = population
            .offspring()
            .iter()
            .map(|c| c.genes().to_vec())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_full_probability_flips_every_gene() {
        let (mut population, mut rng) = population_with_offspring(42);
        let config = Config::builder().mutation_prob(1.0).build().unwrap();
        let before: Vec<Vec<i32>> = population
            .offspring()
            .iter()
            .map(|c| c.genes().to_vec())
            .collect();

        mutate(&mut population, &config, &mut rng);

        for (chromosome, original) in population.offspring().iter().zip(&before) {
            for (gene, &old) in chromosome.genes().iter().zip(original) {
                assert_eq!(*gene, -old);
            }
        }
    }

    #[test]
    fn test_live_region_is_untouched() {
        let (mut population, mut rng) = population_with_offspring(43);
        let config = Config::builder().mutation_prob(1.0).build().unwrap();
        let live_before: Vec<Vec<i32>> = population
            .live()
            .iter()
            .map(|c| c.genes().to_vec())
            .collect();

        mutate(&mut population, &config, &mut rng);

        let live_after: Vec<Vec<i32>> = population
            .live()
            .iter()
            .map(|c| c.genes().to_vec())
            .collect();
        assert_eq!(live_before, live_after);
    }

    #[test]
    fn test_mutation_preserves_magnitudes() {
        let (mut population, mut rng) = population_with_offspring(44);
        let config = Config::default();
        let before: Vec<Vec<i32>> = population
            .offspring()
            .iter()
            .map(|c| c.genes().to_vec())
            .collect();

        mutate(&mut population, &config, &mut rng);

        for (chromosome, original) in population.offspring().iter().zip(&before) {
            for (gene, &old) in chromosome.genes().iter().zip(original) {
                assert_eq!(gene.abs(), old.abs());
            }
        }
    }
}
