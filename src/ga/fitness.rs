//! Fitness evaluation for seat assignments.
//!
//! Higher is better. Evaluation short-circuits on hard failures:
//!
//! 1. Mapped students ≠ student count → `-∞`
//! 2. Distinct seats < student count (a seat reused) → `-∞`
//! 3. Each avoid pair with both students seated: `-max(3 - d, 0) * 10`
//! 4. Each prefer pair with both students seated: `+max(2 - d, 0) * 5`
//! 5. Each seat outside the pool: `-1000`
//!
//! where `d` is the Manhattan distance between the pair's seats.

use crate::models::{ConstraintIndex, SeatAssignment, SeatPool, StudentPair};

/// Avoid pairs closer than this are penalized.
pub const AVOID_RADIUS: u64 = 3;
/// Penalty per unit of distance below [`AVOID_RADIUS`].
pub const AVOID_WEIGHT: f64 = 10.0;
/// Prefer pairs closer than this are rewarded.
pub const PREFER_RADIUS: u64 = 2;
/// Reward per unit of distance below [`PREFER_RADIUS`].
pub const PREFER_WEIGHT: f64 = 5.0;
/// Penalty per seat outside the pool.
pub const FOREIGN_SEAT_PENALTY: f64 = 1000.0;

/// Penalty for an avoid pair at Manhattan distance `d`: `max(3 - d, 0) * 10`.
#[inline]
pub fn avoid_penalty(d: u64) -> f64 {
    AVOID_RADIUS.saturating_sub(d) as f64 * AVOID_WEIGHT
}

/// Reward for a prefer pair at Manhattan distance `d`: `max(2 - d, 0) * 5`.
#[inline]
pub fn prefer_reward(d: u64) -> f64 {
    PREFER_RADIUS.saturating_sub(d) as f64 * PREFER_WEIGHT
}

/// Scores assignments against one problem's constraints and seat pool.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    constraints: ConstraintIndex,
    pool: SeatPool,
    student_count: usize,
}

impl FitnessEvaluator {
    /// Creates an evaluator for `student_count` students.
    pub fn new(constraints: ConstraintIndex, pool: SeatPool, student_count: usize) -> Self {
        Self {
            constraints,
            pool,
            student_count,
        }
    }

    /// The constraint index used for scoring.
    pub fn constraints(&self) -> &ConstraintIndex {
        &self.constraints
    }

    /// Scores an assignment. Partial or seat-reusing assignments score `-∞`.
    pub fn score(&self, assignment: &SeatAssignment) -> f64 {
        if assignment.len() != self.student_count {
            return f64::NEG_INFINITY;
        }
        if assignment.distinct_seat_count() < self.student_count {
            return f64::NEG_INFINITY;
        }

        let mut score = 0.0;

        for pair in self.constraints.avoid_pairs() {
            if let Some(d) = pair_distance(assignment, pair) {
                score -= avoid_penalty(d);
            }
        }
        for pair in self.constraints.prefer_pairs() {
            if let Some(d) = pair_distance(assignment, pair) {
                score += prefer_reward(d);
            }
        }

        let foreign = assignment.seats().filter(|s| !self.pool.contains(s)).count();
        score -= foreign as f64 * FOREIGN_SEAT_PENALTY;

        score
    }
}

/// Distance between a pair's seats, `None` unless both are seated.
pub(crate) fn pair_distance(assignment: &SeatAssignment, pair: &StudentPair) -> Option<u64> {
    let a = assignment.seat_of(pair.first())?;
    let b = assignment.seat_of(pair.second())?;
    Some(a.distance(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Relation, Seat, StudentId};

    fn row_pool(n: u32) -> SeatPool {
        SeatPool::new((0..n).map(|c| Seat::new(0, c)))
    }

    fn assign(seats: &[(i64, Seat)]) -> SeatAssignment {
        seats.iter().map(|&(id, s)| (StudentId::from(id), s)).collect()
    }

    #[test]
    fn test_penalty_table() {
        assert_eq!(avoid_penalty(0), 30.0);
        assert_eq!(avoid_penalty(1), 20.0);
        assert_eq!(avoid_penalty(2), 10.0);
        assert_eq!(avoid_penalty(3), 0.0);
        assert_eq!(avoid_penalty(40), 0.0);
    }

    #[test]
    fn test_reward_table() {
        assert_eq!(prefer_reward(0), 10.0);
        assert_eq!(prefer_reward(1), 5.0);
        assert_eq!(prefer_reward(2), 0.0);
        assert_eq!(prefer_reward(9), 0.0);
    }

    #[test]
    fn test_missing_student_is_neg_infinity() {
        let eval = FitnessEvaluator::new(ConstraintIndex::new(), row_pool(3), 3);
        let a = assign(&[(1, Seat::new(0, 0)), (2, Seat::new(0, 1))]);
        assert_eq!(eval.score(&a), f64::NEG_INFINITY);
    }

    #[test]
    fn test_reused_seat_is_neg_infinity() {
        let eval = FitnessEvaluator::new(ConstraintIndex::new(), row_pool(3), 2);
        let a = assign(&[(1, Seat::new(0, 0)), (2, Seat::new(0, 0))]);
        assert_eq!(eval.score(&a), f64::NEG_INFINITY);
    }

    #[test]
    fn test_unconstrained_score_is_zero() {
        let eval = FitnessEvaluator::new(ConstraintIndex::new(), row_pool(3), 2);
        let a = assign(&[(1, Seat::new(0, 0)), (2, Seat::new(0, 2))]);
        assert_eq!(eval.score(&a), 0.0);
    }

    #[test]
    fn test_avoid_and_prefer_scoring() {
        let index = ConstraintIndex::from_relations(&[
            Relation::avoid(1, 2),
            Relation::prefer(2, 3),
        ]);
        let eval = FitnessEvaluator::new(index, row_pool(5), 3);

        // avoid d=1 → -20, prefer d=1 → +5
        let close = assign(&[(1, Seat::new(0, 0)), (2, Seat::new(0, 1)), (3, Seat::new(0, 2))]);
        assert_eq!(eval.score(&close), -15.0);

        // avoid d=4 → 0, prefer d=1 → +5
        let apart = assign(&[(1, Seat::new(0, 4)), (2, Seat::new(0, 0)), (3, Seat::new(0, 1))]);
        assert_eq!(eval.score(&apart), 5.0);
    }

    #[test]
    fn test_unknown_ids_do_not_score() {
        let index = ConstraintIndex::from_relations(&[Relation::avoid(1, 99)]);
        let eval = FitnessEvaluator::new(index, row_pool(2), 2);
        let a = assign(&[(1, Seat::new(0, 0)), (2, Seat::new(0, 1))]);
        assert_eq!(eval.score(&a), 0.0);
    }

    #[test]
    fn test_foreign_seat_penalty() {
        let eval = FitnessEvaluator::new(ConstraintIndex::new(), row_pool(2), 2);
        let a = assign(&[(1, Seat::new(0, 0)), (2, Seat::new(7, 7))]);
        assert_eq!(eval.score(&a), -1000.0);
    }
}
