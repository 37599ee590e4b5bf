//! Seat planning entry point.
//!
//! [`SeatPlanner`] runs the whole pipeline for one request:
//!
//! ```text
//! validate → index relations → GA search → verify → placements + KPIs
//! ```
//!
//! Input problems surface as [`SeatingError::Validation`] before any search
//! starts. A final assignment that is not a bijection onto pool seats
//! surfaces as [`SeatingError::AlgorithmInvariant`] and is never returned.

use std::collections::{BTreeMap, HashSet};
use std::time::Instant;

use log::{error, info, warn};
use rand::Rng;
use serde::Serialize;

use super::grid::{ExportRequest, ExportStudent, SeatGrid};
use super::kpi::SeatingKpi;
use super::request::SeatingRequest;
use crate::error::SeatingError;
use crate::ga::{GaConfig, GaResult, GaRunner, SeatChromosome, SeatingGaProblem};
use crate::models::{ConstraintIndex, SeatAssignment, SeatPlacement, SeatPool, Student, StudentId};
use crate::validation::{validate_input, verify_assignment};

/// Seat assignment planner.
///
/// # Example
/// ```
/// use u_seating::models::{Relation, Student};
/// use u_seating::planner::{SeatPlanner, SeatingRequest};
/// use u_seating::ga::GaConfig;
///
/// let request = SeatingRequest::new(
///     vec![Student::new(1, "Lin"), Student::new(2, "Mei")],
///     ["0-0", "0-1", "0-2", "0-3"],
/// )
/// .with_relation(Relation::avoid(1, 2));
///
/// let planner = SeatPlanner::new().with_config(GaConfig::default().with_seed(7));
/// let plan = planner.plan(&request).unwrap();
/// assert_eq!(plan.placements.len(), 2);
/// assert_eq!(plan.fitness, 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeatPlanner {
    config: GaConfig,
    strict_relations: bool,
}

impl SeatPlanner {
    /// Creates a planner with the default GA configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GA configuration.
    pub fn with_config(mut self, config: GaConfig) -> Self {
        self.config = config;
        self
    }

    /// Rejects relations that name unknown students instead of ignoring them.
    pub fn with_strict_relations(mut self, strict: bool) -> Self {
        self.strict_relations = strict;
        self
    }

    /// The GA configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Plans seats, seeding the search from the configured seed or a fresh
    /// one. The seed used is reported in [`SeatPlan::seed`].
    pub fn plan(&self, request: &SeatingRequest) -> Result<SeatPlan, SeatingError> {
        self.plan_inner(request, |problem, config| Ok(GaRunner::run(problem, config)?))
    }

    /// Plans seats drawing all randomness from `rng`.
    ///
    /// Identical inputs and identically seeded generators give identical
    /// plans.
    pub fn plan_with_rng<R: Rng>(
        &self,
        request: &SeatingRequest,
        rng: &mut R,
    ) -> Result<SeatPlan, SeatingError> {
        self.plan_inner(request, |problem, config| {
            Ok(GaRunner::run_with_rng(problem, config, rng)?)
        })
    }

    fn plan_inner<F>(&self, request: &SeatingRequest, search: F) -> Result<SeatPlan, SeatingError>
    where
        F: FnOnce(&SeatingGaProblem, &GaConfig) -> Result<GaResult<SeatChromosome>, SeatingError>,
    {
        self.config.validate()?;

        let pool = validate_input(
            &request.students,
            request.seats.as_slice(),
            &request.relations,
            self.strict_relations,
        )?;
        let index = ConstraintIndex::from_relations(&request.relations);

        if !self.strict_relations {
            let known: HashSet<&StudentId> = request.students.iter().map(|s| &s.id).collect();
            let unknown = index.unknown_references(&known);
            if !unknown.is_empty() {
                warn!(
                    "ignoring relations that reference unknown students: {}",
                    join_ids(&unknown)
                );
            }
        }

        if request.students.is_empty() {
            info!("no students to seat");
            return Ok(SeatPlan::empty(pool));
        }

        let started = Instant::now();
        let ids: Vec<StudentId> = request.students.iter().map(|s| s.id.clone()).collect();
        let problem = SeatingGaProblem::new(ids, pool, index);

        let result = search(&problem, &self.config)?;
        let assignment = problem.decode(&result.best);

        if let Err(e) = verify_assignment(&assignment, problem.student_ids(), problem.pool()) {
            error!("{e}");
            return Err(e);
        }

        let placements = request
            .students
            .iter()
            .filter_map(|s| {
                assignment
                    .seat_of(&s.id)
                    .map(|seat| SeatPlacement::new(s.clone(), seat))
            })
            .collect();
        let kpi = SeatingKpi::calculate(&assignment, problem.evaluator().constraints());

        info!(
            "seated {} students in {} seats: fitness {}, {} avoid conflicts, {} prefer pairs satisfied ({:.2?})",
            request.students.len(),
            problem.pool().len(),
            result.best_fitness,
            kpi.avoid_conflicts,
            kpi.prefer_satisfied,
            started.elapsed()
        );

        Ok(SeatPlan {
            placements,
            fitness: result.best_fitness,
            generations: result.generations,
            history: result.history,
            seed: result.seed,
            kpi,
            pool: problem.pool().clone(),
        })
    }
}

/// Result of a planning run.
#[derive(Debug, Clone, Serialize)]
pub struct SeatPlan {
    /// One placement per student, in request order.
    pub placements: Vec<SeatPlacement>,
    /// Fitness of the returned assignment.
    pub fitness: f64,
    /// Generations executed.
    pub generations: usize,
    /// Best fitness per generation.
    pub history: Vec<f64>,
    /// Seed the search started from, if the planner seeded it.
    pub seed: Option<u64>,
    /// Relation quality indicators.
    pub kpi: SeatingKpi,
    #[serde(skip)]
    pool: SeatPool,
}

impl SeatPlan {
    fn empty(pool: SeatPool) -> Self {
        Self {
            placements: Vec::new(),
            fitness: 0.0,
            generations: 0,
            history: Vec::new(),
            seed: None,
            kpi: SeatingKpi::default(),
            pool,
        }
    }

    /// Student → seat map.
    pub fn assignment(&self) -> SeatAssignment {
        self.placements
            .iter()
            .map(|p| (p.student.id.clone(), p.position))
            .collect()
    }

    /// Placement of one student.
    pub fn placement_for(&self, id: &StudentId) -> Option<&SeatPlacement> {
        self.placements.iter().find(|p| &p.student.id == id)
    }

    /// Students keyed by seat token (`"row-col"`).
    pub fn seat_map(&self) -> BTreeMap<String, &Student> {
        self.placements
            .iter()
            .map(|p| (p.position.key(), &p.student))
            .collect()
    }

    /// Seat pool the plan was drawn from.
    pub fn pool(&self) -> &SeatPool {
        &self.pool
    }

    /// Encodes the placement list, the response body of the seating
    /// endpoint.
    pub fn to_json(&self) -> Result<String, SeatingError> {
        Ok(serde_json::to_string(&self.placements)?)
    }

    /// Payload for the seat chart exporter.
    pub fn export_request(&self) -> ExportRequest {
        ExportRequest {
            students: self
                .placements
                .iter()
                .map(|p| ExportStudent {
                    id: p.student.id.clone(),
                    name: p.student.name.clone(),
                    position: p.position.key(),
                })
                .collect(),
            seats: self.pool.seats().iter().map(|s| s.key()).collect(),
        }
    }

    /// Seat chart of this plan.
    ///
    /// Fails when the pool spans more than
    /// [`MAX_GRID_CELLS`](crate::planner::MAX_GRID_CELLS) cells.
    pub fn grid(&self) -> Result<SeatGrid, SeatingError> {
        SeatGrid::new(
            &self.pool,
            self.placements
                .iter()
                .map(|p| (p.position, p.student.clone())),
        )
    }
}

fn join_ids(ids: &[StudentId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
