//! Seat-vector chromosome for the seating GA.
//!
//! # Encoding
//!
//! Gene `i` is the seat of the `i`-th student in a fixed student ordering.
//! A chromosome is valid when its seats are pairwise distinct and all come
//! from the pool. The default operators (single-point crossover, random
//! reset mutation) may break distinctness; such children are kept and
//! scored `-∞` by the fitness evaluator. Order crossover and swap mutation
//! preserve distinctness.

use std::collections::HashSet;

use rand::seq::index;
use rand::Rng;

use crate::models::{Seat, SeatAssignment, SeatPool, StudentId};

/// Ordered seat vector aligned to the problem's student ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatChromosome {
    /// Seat per student position.
    pub genes: Vec<Seat>,
}

impl SeatChromosome {
    /// Wraps a gene vector.
    pub fn new(genes: Vec<Seat>) -> Self {
        Self { genes }
    }

    /// Creates a random valid chromosome: `student_count` seats drawn
    /// without replacement from `pool`.
    pub fn random<R: Rng>(pool: &SeatPool, student_count: usize, rng: &mut R) -> Self {
        Self::new(pool.sample(student_count, rng))
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Whether some seat appears more than once.
    pub fn has_duplicate_seats(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.genes.len());
        !self.genes.iter().all(|s| seen.insert(s))
    }

    /// Zips the genes with `students` into an assignment.
    ///
    /// Extra genes or extra students are dropped, so a length mismatch shows
    /// up as an incomplete assignment.
    pub fn to_assignment(&self, students: &[StudentId]) -> SeatAssignment {
        students.iter().cloned().zip(self.genes.iter().copied()).collect()
    }
}

// ======================== Crossover operators ========================

/// Single-point crossover.
///
/// Picks a pivot in `[1, n-1]` and concatenates `p1[..pivot]` with
/// `p2[pivot..]`. No uniqueness repair: the child may reuse a seat.
/// Chromosomes shorter than 2 are copied from `p1`.
pub fn single_point_crossover<R: Rng>(
    p1: &SeatChromosome,
    p2: &SeatChromosome,
    rng: &mut R,
) -> SeatChromosome {
    let n = p1.len().min(p2.len());
    if n < 2 {
        return p1.clone();
    }
    let pivot = rng.random_range(1..n);
    let mut genes = Vec::with_capacity(n);
    genes.extend_from_slice(&p1.genes[..pivot]);
    genes.extend_from_slice(&p2.genes[pivot..n]);
    SeatChromosome::new(genes)
}

/// Order crossover (OX).
///
/// Copies `p1[a..b]` for a random segment, then fills the remaining
/// positions left to right with `p2`'s seats in order, skipping seats
/// already copied. For valid parents the child is valid. If the parents
/// themselves contain duplicates the fill may run short; leftover positions
/// take `p2`'s gene at the same index.
///
/// # Reference
/// Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
pub fn order_crossover<R: Rng>(
    p1: &SeatChromosome,
    p2: &SeatChromosome,
    rng: &mut R,
) -> SeatChromosome {
    let n = p1.len().min(p2.len());
    if n < 2 {
        return p1.clone();
    }
    let picks = index::sample(rng, n, 2);
    let (a, b) = {
        let (x, y) = (picks.index(0), picks.index(1));
        (x.min(y), x.max(y))
    };

    let segment: HashSet<Seat> = p1.genes[a..b].iter().copied().collect();
    let mut donor = p2.genes[..n].iter().filter(|s| !segment.contains(*s));

    let genes = (0..n)
        .map(|i| {
            if (a..b).contains(&i) {
                p1.genes[i]
            } else {
                donor.next().copied().unwrap_or(p2.genes[i])
            }
        })
        .collect();
    SeatChromosome::new(genes)
}

// ======================== Mutation operators ========================

/// Random-reset mutation.
///
/// Each gene is independently replaced, with probability `rate`, by a seat
/// drawn uniformly from the whole pool (seats already in use included).
pub fn random_reset_mutation<R: Rng>(
    chromosome: &mut SeatChromosome,
    pool: &SeatPool,
    rate: f64,
    rng: &mut R,
) {
    for gene in chromosome.genes.iter_mut() {
        if rng.random::<f64>() < rate {
            if let Some(seat) = pool.choose(rng) {
                *gene = seat;
            }
        }
    }
}

/// Swap mutation: exchanges two random positions.
pub fn swap_mutation<R: Rng>(chromosome: &mut SeatChromosome, rng: &mut R) {
    let n = chromosome.len();
    if n < 2 {
        return;
    }
    let picks = index::sample(rng, n, 2);
    chromosome.genes.swap(picks.index(0), picks.index(1));
}
