//! # Population
//!
//! The `Population` struct owns the flat buffer of candidates and the index
//! boundaries that partition it into the live region and the offspring
//! region:
//!
//! ```text
//! [population_base, population_top)  live candidates, sorted by selection
//! [offspring_base, offspring_top)    offspring written by crossover
//! ```
//!
//! The boundaries always satisfy
//! `population_base <= population_top <= offspring_base <= offspring_top <= total_size`,
//! the offspring region begins exactly at the live region's capacity, and
//! every candidate keeps the gene length of the reference permutation. All
//! index arithmetic lives behind the accessors here rather than inside the
//! operators.

use std::fmt;

use crate::chromosome::Chromosome;
use crate::config::Config;
use crate::error::{MemeticError, Result};
use crate::permutation::Permutation;
use crate::rng::RandomNumberGenerator;

/// The contiguous store of live and offspring candidates.
#[derive(Debug, Clone)]
pub struct Population {
    chromosomes: Vec<Chromosome>,
    population_base: usize,
    population_top: usize,
    limit_for_selection: usize,
    replacement_base: usize,
    offspring_base: usize,
    offspring_top: usize,
    total_size: usize,
}

impl Population {
    /// Builds the initial population from a reference permutation.
    ///
    /// The live region holds `floor(n * log2(n))` candidates whose genes
    /// take the reference magnitudes with independently random signs. The
    /// offspring region is allocated at the crossover capacity
    /// (`limit_for_selection` slots) with zeroed genes; crossover overwrites
    /// them before they are ever read.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the permutation is too short to produce a
    /// non-empty population, and `Allocation` if memory for the store or any
    /// candidate's gene array cannot be obtained. The caller must not
    /// proceed on failure.
    pub fn initialize(
        permutation: &Permutation,
        config: &Config,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        let n = permutation.len();
        let population_size = (n as f64 * (n as f64).log2()).floor() as usize;
        if population_size == 0 {
            return Err(MemeticError::Configuration(format!(
                "permutation of length {} yields an empty population",
                n
            )));
        }

        let limit_for_selection = (population_size as f64 * config.selection_pct()) as usize;
        let replacement_base = (population_size as f64 * config.replacement_pct()) as usize;
        let offspring_base = population_size;
        let total_size = population_size + limit_for_selection;

        let mut chromosomes = Vec::new();
        chromosomes.try_reserve_exact(total_size)?;
        for _ in 0..total_size {
            chromosomes.push(Chromosome::with_length(n)?);
        }

        let mut population = Self {
            chromosomes,
            population_base: 0,
            population_top: population_size,
            limit_for_selection,
            replacement_base,
            offspring_base,
            offspring_top: total_size,
            total_size,
        };

        for chromosome in population.live_mut() {
            chromosome.randomize_from(permutation, rng);
        }

        Ok(population)
    }

    /// Size of the live region.
    pub fn population_size(&self) -> usize {
        self.population_top - self.population_base
    }

    pub fn population_base(&self) -> usize {
        self.population_base
    }

    pub fn population_top(&self) -> usize {
        self.population_top
    }

    /// Exclusive upper bound of the prefix eligible as crossover parents.
    pub fn limit_for_selection(&self) -> usize {
        self.limit_for_selection
    }

    /// Inclusive lower bound of the suffix eligible for replacement.
    pub fn replacement_base(&self) -> usize {
        self.replacement_base
    }

    pub fn offspring_base(&self) -> usize {
        self.offspring_base
    }

    /// Exclusive upper bound of the offspring actually produced by the last
    /// crossover pass. Downstream operators must use this bound, not the
    /// region's capacity.
    pub fn offspring_top(&self) -> usize {
        self.offspring_top
    }

    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// The live region `[population_base, population_top)`.
    pub fn live(&self) -> &[Chromosome] {
        &self.chromosomes[self.population_base..self.population_top]
    }

    pub fn live_mut(&mut self) -> &mut [Chromosome] {
        &mut self.chromosomes[self.population_base..self.population_top]
    }

    /// The offspring produced by the last crossover pass.
    pub fn offspring(&self) -> &[Chromosome] {
        &self.chromosomes[self.offspring_base..self.offspring_top]
    }

    pub fn offspring_mut(&mut self) -> &mut [Chromosome] {
        &mut self.chromosomes[self.offspring_base..self.offspring_top]
    }

    /// Splits the buffer at `offspring_base`, yielding the live capacity and
    /// the full offspring capacity as disjoint mutable slices. Crossover and
    /// replacement use this to read parents while writing children.
    pub(crate) fn split_regions(&mut self) -> (&mut [Chromosome], &mut [Chromosome]) {
        self.chromosomes.split_at_mut(self.offspring_base)
    }

    pub(crate) fn set_offspring_top(&mut self, offspring_top: usize) {
        debug_assert!(offspring_top >= self.offspring_base && offspring_top <= self.total_size);
        self.offspring_top = offspring_top;
    }

    /// The fittest live candidate, if any. After a selection pass this is
    /// the candidate at `population_base`.
    pub fn best(&self) -> Option<&Chromosome> {
        self.live().iter().min_by_key(|c| c.fitness())
    }
}

impl fmt::Display for Population {
    /// Renders live then offspring candidates as `{g1, g2, ...} fit: f`
    /// lines, separated by a rule. Diagnostic output only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_region(f: &mut fmt::Formatter<'_>, region: &[Chromosome]) -> fmt::Result {
            for chromosome in region {
                write!(f, "{{")?;
                for (i, gene) in chromosome.genes().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", gene)?;
                }
                writeln!(f, "}} fit: {}", chromosome.fitness())?;
            }
            Ok(())
        }

        write_region(f, self.live())?;
        writeln!(f, "-------------------")?;
        write_region(f, self.offspring())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(n: usize) -> Permutation {
        Permutation::new((1..=n as i32).collect()).unwrap()
    }

    #[test]
    fn test_initialize_layout_invariants() {
        let perm = identity(8);
        let config = Config::default();
        let mut rng = RandomNumberGenerator::from_seed(1);
        let population = Population::initialize(&perm, &config, &mut rng).unwrap();

        assert!(population.population_base() <= population.population_top());
        assert_eq!(population.population_top(), population.offspring_base());
        assert!(population.offspring_base() <= population.offspring_top());
        assert!(population.offspring_top() <= population.total_size());
        for chromosome in population.live().iter().chain(population.offspring()) {
            assert_eq!(chromosome.len(), 8);
        }
    }

    #[test]
    fn test_initialize_derived_sizes() {
        // n = 8: population_size = floor(8 * 3) = 24,
        // limit = floor(24 * 0.96) = 23, replacement base = floor(24 * 0.4) = 9.
        let perm = identity(8);
        let config = Config::default();
        let mut rng = RandomNumberGenerator::from_seed(2);
        let population = Population::initialize(&perm, &config, &mut rng).unwrap();

        assert_eq!(population.population_size(), 24);
        assert_eq!(population.limit_for_selection(), 23);
        assert_eq!(population.replacement_base(), 9);
        assert_eq!(population.offspring_base(), 24);
        assert_eq!(population.total_size(), 47);
        assert_eq!(population.offspring_top(), 47);
    }

    #[test]
    fn test_initialize_live_genes_follow_reference_magnitudes() {
        let perm = Permutation::new(vec![2, -4, 1, 3]).unwrap();
        let config = Config::default();
        let mut rng = RandomNumberGenerator::from_seed(3);
        let population = Population::initialize(&perm, &config, &mut rng).unwrap();

        for chromosome in population.live() {
            for (gene, reference) in chromosome.genes().iter().zip(perm.elements()) {
                assert_eq!(gene.abs(), reference.abs());
            }
        }
    }

    #[test]
    fn test_initialize_offspring_zeroed() {
        let perm = identity(4);
        let config = Config::default();
        let mut rng = RandomNumberGenerator::from_seed(4);
        let population = Population::initialize(&perm, &config, &mut rng).unwrap();

        for chromosome in population.offspring() {
            assert!(chromosome.genes().iter().all(|&g| g == 0));
            assert_eq!(chromosome.fitness(), 0);
        }
    }

    #[test]
    fn test_initialize_rejects_single_element_permutation() {
        // n = 1: floor(1 * log2(1)) = 0 candidates.
        let perm = identity(1);
        let config = Config::default();
        let mut rng = RandomNumberGenerator::from_seed(5);
        let result = Population::initialize(&perm, &config, &mut rng);
        assert!(matches!(result, Err(MemeticError::Configuration(_))));
    }

    #[test]
    fn test_best_returns_minimum_fitness() {
        let perm = identity(4);
        let config = Config::default();
        let mut rng = RandomNumberGenerator::from_seed(6);
        let mut population = Population::initialize(&perm, &config, &mut rng).unwrap();

        for (i, chromosome) in population.live_mut().iter_mut().enumerate() {
            chromosome.set_fitness(10 - i % 5);
        }
        let best = population.best().unwrap().fitness();
        assert_eq!(best, 6);
    }

    #[test]
    fn test_display_renders_both_regions() {
        let perm = identity(2);
        let config = Config::default();
        let mut rng = RandomNumberGenerator::from_seed(7);
        let population = Population::initialize(&perm, &config, &mut rng).unwrap();

        let rendered = population.to_string();
        assert!(rendered.contains("fit:"));
        assert!(rendered.contains("-------------------"));
    }
}
