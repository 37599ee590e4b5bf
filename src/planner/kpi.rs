//! Seating quality metrics (KPIs).
//!
//! Summarizes how well an assignment honors its relations.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avoid conflicts | Avoid pairs seated closer than 3 |
//! | Prefer satisfied | Prefer pairs seated closer than 2 |
//! | Total penalty | Sum of avoid penalties |
//! | Total reward | Sum of prefer rewards |
//! | Mean distances | Average Manhattan distance per relation kind |
//!
//! Only pairs whose two students are both seated are counted.

use serde::Serialize;

use crate::ga::{avoid_penalty, pair_distance, prefer_reward};
use crate::models::{ConstraintIndex, SeatAssignment};

/// Relation-level quality indicators for one assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeatingKpi {
    /// Avoid pairs with both students seated.
    pub avoid_pairs: usize,
    /// Avoid pairs close enough to be penalized.
    pub avoid_conflicts: usize,
    /// Prefer pairs with both students seated.
    pub prefer_pairs: usize,
    /// Prefer pairs close enough to be rewarded.
    pub prefer_satisfied: usize,
    /// Sum of avoid penalties.
    pub total_penalty: f64,
    /// Sum of prefer rewards.
    pub total_reward: f64,
    /// Mean distance of avoid pairs (`None` without avoid pairs).
    pub mean_avoid_distance: Option<f64>,
    /// Mean distance of prefer pairs (`None` without prefer pairs).
    pub mean_prefer_distance: Option<f64>,
}

impl SeatingKpi {
    /// Computes KPIs for an assignment.
    pub fn calculate(assignment: &SeatAssignment, constraints: &ConstraintIndex) -> Self {
        let mut kpi = Self::default();

        let avoid: Vec<u64> = constraints
            .avoid_pairs()
            .filter_map(|p| pair_distance(assignment, p))
            .collect();
        kpi.avoid_pairs = avoid.len();
        for &d in &avoid {
            let penalty = avoid_penalty(d);
            if penalty > 0.0 {
                kpi.avoid_conflicts += 1;
            }
            kpi.total_penalty += penalty;
        }
        kpi.mean_avoid_distance = mean(&avoid);

        let prefer: Vec<u64> = constraints
            .prefer_pairs()
            .filter_map(|p| pair_distance(assignment, p))
            .collect();
        kpi.prefer_pairs = prefer.len();
        for &d in &prefer {
            let reward = prefer_reward(d);
            if reward > 0.0 {
                kpi.prefer_satisfied += 1;
            }
            kpi.total_reward += reward;
        }
        kpi.mean_prefer_distance = mean(&prefer);

        kpi
    }

    /// Relation score: reward minus penalty.
    ///
    /// Equals the fitness of a complete, valid assignment.
    pub fn net_score(&self) -> f64 {
        self.total_reward - self.total_penalty
    }
}

fn mean(distances: &[u64]) -> Option<f64> {
    if distances.is_empty() {
        None
    } else {
        let sum: f64 = distances.iter().map(|&d| d as f64).sum();
        Some(sum / distances.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Relation, Seat, StudentId};

    fn assignment() -> SeatAssignment {
        [
            (StudentId::from(1), Seat::new(0, 0)),
            (StudentId::from(2), Seat::new(0, 1)),
            (StudentId::from(3), Seat::new(2, 2)),
            (StudentId::from(4), Seat::new(2, 3)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_kpi_counts() {
        let index = ConstraintIndex::from_relations(&[
            Relation::avoid(1, 2), // d=1 → conflict, 20
            Relation::avoid(1, 3), // d=4 → fine
            Relation::prefer(3, 4), // d=1 → satisfied, 5
            Relation::prefer(1, 4), // d=5 → not satisfied
        ]);
        let kpi = SeatingKpi::calculate(&assignment(), &index);
        assert_eq!(kpi.avoid_pairs, 2);
        assert_eq!(kpi.avoid_conflicts, 1);
        assert_eq!(kpi.prefer_pairs, 2);
        assert_eq!(kpi.prefer_satisfied, 1);
        assert_eq!(kpi.total_penalty, 20.0);
        assert_eq!(kpi.total_reward, 5.0);
        assert_eq!(kpi.net_score(), -15.0);
        assert_eq!(kpi.mean_avoid_distance, Some(2.5));
        assert_eq!(kpi.mean_prefer_distance, Some(3.0));
    }

    #[test]
    fn test_kpi_skips_unseated_pairs() {
        let index = ConstraintIndex::from_relations(&[Relation::avoid(1, 99)]);
        let kpi = SeatingKpi::calculate(&assignment(), &index);
        assert_eq!(kpi.avoid_pairs, 0);
        assert_eq!(kpi.mean_avoid_distance, None);
        assert_eq!(kpi.net_score(), 0.0);
    }
}
