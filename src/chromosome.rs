//! # Chromosome
//!
//! A `Chromosome` is one candidate solution: a sequence of signed genes with
//! the same magnitudes as the reference permutation, position by position,
//! plus the fitness of that sign assignment. Candidates are mutated in place
//! by every operator and never resized after allocation.

use std::collections::TryReserveError;

use crate::permutation::Permutation;
use crate::rng::RandomNumberGenerator;

/// One candidate signed permutation and its fitness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chromosome {
    genes: Vec<i32>,
    fitness: usize,
}

impl Chromosome {
    /// Allocates a candidate of `length` zeroed genes.
    ///
    /// # Errors
    ///
    /// Returns the allocation error if memory for the gene array cannot be
    /// obtained.
    pub fn with_length(length: usize) -> Result<Self, TryReserveError> {
        let mut genes = Vec::new();
        genes.try_reserve_exact(length)?;
        genes.resize(length, 0);
        Ok(Self { genes, fitness: 0 })
    }

    /// The number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The genes in order.
    pub fn genes(&self) -> &[i32] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [i32] {
        &mut self.genes
    }

    /// The stored fitness of this candidate.
    pub fn fitness(&self) -> usize {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: usize) {
        self.fitness = fitness;
    }

    /// Negates the sign of the gene at `position`.
    pub fn flip_sign(&mut self, position: usize) {
        self.genes[position] = -self.genes[position];
    }

    /// Fills every gene with the magnitude of the reference permutation at
    /// that position, each sign chosen by a fair coin.
    pub fn randomize_from(&mut self, permutation: &Permutation, rng: &mut RandomNumberGenerator) {
        debug_assert_eq!(self.genes.len(), permutation.len());
        for (gene, &reference) in self.genes.iter_mut().zip(permutation.elements()) {
            *gene = if rng.coin() { reference } else { -reference };
        }
    }

    /// Copies another candidate's fitness and gene values into this slot.
    /// Lengths are equal by the population layout invariant.
    pub(crate) fn copy_from(&mut self, other: &Chromosome) {
        self.fitness = other.fitness;
        self.genes.copy_from_slice(&other.genes);
    }
}
