//! # Engine
//!
//! The `Engine` owns the configuration and the fitness collaborator and
//! drives the per-generation operator sequence:
//!
//! selection → (after the first generation) crossover → mutation →
//! offspring evaluation → replacement → local search over a fraction of the
//! population → diversity check → optional restart.
//!
//! The run stops when the generation budget is exhausted or the best
//! solution reaches the target fitness.
//!
//! ## Example
//!
//! ```rust
//! use memrev::config::Config;
//! use memrev::engine::Engine;
//! use memrev::fitness::BreakpointDistance;
//! use memrev::permutation::Permutation;
//! use memrev::rng::RandomNumberGenerator;
//!
//! let permutation = Permutation::new(vec![1, 2, 3, 4]).unwrap();
//! let engine = Engine::new(Config::default(), BreakpointDistance).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! let report = engine.run(&permutation, &mut rng).unwrap();
//! assert!(report.generations >= 1);
//! ```

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::Config;
use crate::diversity;
use crate::error::Result;
use crate::fitness::{EvalCounter, Fitness};
use crate::operators::{crossover, local_search_pass, mutate, replace, restart, select};
use crate::permutation::Permutation;
use crate::population::Population;
use crate::rng::RandomNumberGenerator;

/// The outcome of a run: the best candidate found and the run's cost
/// accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Fitness of the best candidate found.
    pub best_fitness: usize,
    /// Genes of the best candidate found.
    pub best_genes: Vec<i32>,
    /// Generations actually executed.
    pub generations: usize,
    /// Total calls to the fitness collaborator.
    pub evaluations: u64,
}

/// Drives the memetic algorithm over a population.
#[derive(Debug, Clone)]
pub struct Engine<F: Fitness> {
    config: Config,
    fitness: F,
}

impl<F: Fitness> Engine<F> {
    /// Creates an engine from a validated configuration and a fitness
    /// collaborator.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if any parameter lies outside its
    /// valid range.
    pub fn new(config: Config, fitness: F) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, fitness })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the algorithm against a reference permutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the population cannot be initialized or an
    /// operator reports a broken invariant.
    pub fn run(&self, permutation: &Permutation, rng: &mut RandomNumberGenerator) -> Result<Report> {
        let mut population = Population::initialize(permutation, &self.config, rng)?;
        let mut counter = EvalCounter::new();
        let mut best_solution = usize::MAX;
        let mut generations = 0;

        for generation in 1..=self.config.max_generations() {
            generations = generation;

            if generation == 1 {
                self.evaluate(&mut population, generation, &mut counter);
                select(&mut population, &mut best_solution)?;
            } else {
                select(&mut population, &mut best_solution)?;
                if best_solution <= self.config.target_fitness() {
                    break;
                }
                crossover(&mut population, &self.config, rng);
                mutate(&mut population, &self.config, rng);
                self.evaluate(&mut population, generation, &mut counter);
                replace(&mut population, rng);
            }

            local_search_pass(
                &mut population,
                generation,
                &self.fitness,
                &mut counter,
                &self.config,
                rng,
            );

            if diversity::reached_degenerate_state(&population, &self.config) {
                restart(
                    &mut population,
                    permutation,
                    &self.config,
                    &self.fitness,
                    &mut counter,
                    rng,
                );
            }

            debug!(
                generation,
                best_fitness = best_solution,
                evaluations = counter.total(),
                "generation complete"
            );
        }

        // Fold the last local-search pass into the reported best.
        select(&mut population, &mut best_solution)?;

        info!(
            best_fitness = best_solution,
            generations,
            evaluations = counter.total(),
            "run complete"
        );

        Ok(Report {
            best_fitness: best_solution,
            best_genes: population.live()[0].genes().to_vec(),
            generations,
            evaluations: counter.total(),
        })
    }

    /// Evaluates the region owed a fitness pass this generation: the whole
    /// live region on the bootstrap generation, only the offspring region
    /// afterwards. Regions at or above `parallel_threshold` are evaluated
    /// in parallel; the counter is bumped by the exact number of calls
    /// either way.
    fn evaluate(&self, population: &mut Population, generation: usize, counter: &mut EvalCounter) {
        let region = if generation > 1 {
            population.offspring_mut()
        } else {
            population.live_mut()
        };

        if region.len() >= self.config.parallel_threshold() {
            region.par_iter_mut().for_each(|chromosome| {
                let fitness = self.fitness.evaluate(chromosome.genes());
                chromosome.set_fitness(fitness);
            });
            counter.record_many(region.len() as u64);
        } else {
            for chromosome in region {
                counter.record();
                let fitness = self.fitness.evaluate(chromosome.genes());
                chromosome.set_fitness(fitness);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::BreakpointDistance;

    fn identity(n: usize) -> Permutation {
        Permutation::new((1..=n as i32).collect()).unwrap()
    }

    #[test]
    fn test_new_accepts_default_config() {
        assert!(Engine::new(Config::default(), BreakpointDistance).is_ok());
    }

    #[test]
    fn test_bootstrap_evaluates_live_region() {
        let permutation = identity(8);
        let config = Config::default();
        let engine = Engine::new(config.clone(), BreakpointDistance).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(81);
        let mut population = Population::initialize(&permutation, &config, &mut rng).unwrap();
        let mut counter = EvalCounter::new();

        engine.evaluate(&mut population, 1, &mut counter);

        assert_eq!(counter.total(), population.population_size() as u64);
        let fitness = BreakpointDistance;
        for chromosome in population.live() {
            assert_eq!(chromosome.fitness(), fitness.evaluate(chromosome.genes()));
        }
    }

    #[test]
    fn test_later_generations_evaluate_offspring_only() {
        let permutation = identity(8);
        let config = Config::default();
        let engine = Engine::new(config.clone(), BreakpointDistance).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(82);
        let mut population = Population::initialize(&permutation, &config, &mut rng).unwrap();

        crossover(&mut population, &config, &mut rng);
        let produced = population.offspring().len() as u64;
        let mut counter = EvalCounter::new();

        engine.evaluate(&mut population, 2, &mut counter);
        assert_eq!(counter.total(), produced);
    }

    #[test]
    fn test_parallel_pass_counts_exactly() {
        let permutation = identity(8);
        // Threshold 1 forces the rayon path even for a small region.
        let config = Config::builder().parallel_threshold(1).build().unwrap();
        let engine = Engine::new(config.clone(), BreakpointDistance).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(83);
        let mut population = Population::initialize(&permutation, &config, &mut rng).unwrap();
        let mut counter = EvalCounter::new();

        engine.evaluate(&mut population, 1, &mut counter);

        assert_eq!(counter.total(), population.population_size() as u64);
        let fitness = BreakpointDistance;
        for chromosome in population.live() {
            assert_eq!(chromosome.fitness(), fitness.evaluate(chromosome.genes()));
        }
    }

    #[test]
    fn test_run_executes_at_least_one_generation() {
        let permutation = identity(4);
        let config = Config::builder().max_generations(5).build().unwrap();
        let engine = Engine::new(config, BreakpointDistance).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(84);

        let report = engine.run(&permutation, &mut rng).unwrap();
        assert!(report.generations >= 1);
        assert!(report.evaluations > 0);
        assert_eq!(report.best_genes.len(), 4);
    }
}
