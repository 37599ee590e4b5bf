//! End-to-end seat planning scenarios.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use u_seating::ga::operators::GeneticOperators;
use u_seating::ga::{avoid_penalty, prefer_reward, GaConfig};
use u_seating::models::{Relation, Seat, SeatPlacement, SeatPool, Student, StudentId};
use u_seating::planner::{SeatPlanner, SeatingRequest};
use u_seating::models::SeatAssignment;
use u_seating::validation::{verify_assignment, ValidationErrorKind};
use u_seating::SeatingError;

fn planner(seed: u64) -> SeatPlanner {
    SeatPlanner::new().with_config(GaConfig::default().with_seed(seed))
}

fn assert_bijection(placements: &[SeatPlacement], students: usize, pool: &SeatPool) {
    assert_eq!(placements.len(), students);
    let seats: HashSet<Seat> = placements.iter().map(|p| p.position).collect();
    assert_eq!(seats.len(), students, "a seat was assigned twice");
    assert!(seats.iter().all(|s| pool.contains(s)), "seat outside pool");
}

#[test]
fn test_two_students_two_seats_avoid() {
    let request = SeatingRequest::new(
        vec![Student::new("A", "Ana"), Student::new("B", "Ben")],
        ["0-0", "0-1"],
    )
    .with_relation(Relation::avoid("A", "B"));

    let plan = planner(1).plan(&request).unwrap();
    assert_bijection(&plan.placements, 2, plan.pool());
    // The pair is always 1 apart here.
    assert_eq!(plan.fitness, -20.0);
    assert_eq!(plan.kpi.avoid_conflicts, 1);
}

#[test]
fn test_too_few_seats_fails_before_search() {
    let request = SeatingRequest::new(
        vec![Student::new(1, "Ana"), Student::new(2, "Ben")],
        ["0-0"],
    );
    let err = planner(1).plan(&request).unwrap_err();
    assert!(err.is_client_error());
    match &err {
        SeatingError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].kind, ValidationErrorKind::InsufficientSeats);
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert!(err.to_string().contains("Not enough seats"));
}

#[test]
fn test_prefer_pair_beats_random_baseline() {
    let tokens = ["0-0", "0-1", "0-5", "3-3", "5-0"];
    let students = vec![
        Student::new(1, "Ana"),
        Student::new(2, "Ben"),
        Student::new(3, "Cai"),
    ];
    let request = SeatingRequest::new(students, tokens).with_relation(Relation::prefer(1, 2));
    let pool = SeatPool::parse(&tokens).unwrap();

    let mut rng = SmallRng::seed_from_u64(0);
    let trials = 500;
    let baseline: u64 = (0..trials)
        .map(|_| {
            let pick = pool.sample(2, &mut rng);
            pick[0].distance(&pick[1])
        })
        .sum();
    let baseline_mean = baseline as f64 / trials as f64;

    for seed in 0..10 {
        let plan = planner(seed).plan(&request).unwrap();
        let a = plan.placement_for(&1.into()).unwrap().position;
        let b = plan.placement_for(&2.into()).unwrap().position;
        let d = a.distance(&b) as f64;
        assert!(d <= baseline_mean, "seed {seed}: {d} > {baseline_mean}");
        assert_eq!(d, 1.0, "seed {seed}: adjacent seats exist");
    }
}

#[test]
fn test_same_seed_same_plan() {
    let students: Vec<Student> = (1..=6).map(|i| Student::new(i, format!("S{i}"))).collect();
    let seats: Vec<String> = (0..3)
        .flat_map(|r| (0..3).map(move |c| format!("{r}-{c}")))
        .collect();
    let request = SeatingRequest::new(students, seats).with_relations([
        Relation::avoid(1, 2),
        Relation::avoid(3, 4),
        Relation::prefer(5, 6),
        Relation::prefer(1, 6),
    ]);

    let a = planner(2024).plan(&request).unwrap();
    let b = planner(2024).plan(&request).unwrap();
    assert_eq!(a.placements, b.placements);
    assert_eq!(a.fitness, b.fitness);
    assert_eq!(a.history, b.history);
}

#[test]
fn test_json_request_and_response() {
    let json = r#"{
        "students": [
            {"id": 1, "name": "Ana"},
            {"id": "b-2", "name": "Ben"},
            {"id": 3, "name": "Cai"}
        ],
        "seats": ["0-0", "0-1", " 1-0 ", "1-1", "0-0"],
        "relations": [
            {"students": [1, "b-2"], "type": "avoid"},
            {"students": ["b-2", 3], "type": "prefer"}
        ]
    }"#;
    let request = SeatingRequest::from_json(json).unwrap();
    let plan = planner(5).plan(&request).unwrap();
    assert_bijection(&plan.placements, 3, plan.pool());
    assert_eq!(plan.pool().len(), 4);

    let body = plan.to_json().unwrap();
    let decoded: Vec<SeatPlacement> = serde_json::from_str(&body).unwrap();
    assert_eq!(decoded, plan.placements);
    assert_eq!(decoded[1].student.id, StudentId::from("b-2"));

    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(value[0]["position"]["row"].is_u64());
    assert!(value[0]["student"]["name"].is_string());
}

#[test]
fn test_malformed_payload_is_client_error() {
    let err = SeatingRequest::from_json(r#"{"students": 1}"#).unwrap_err();
    assert!(matches!(err, SeatingError::Payload(_)));
    assert!(err.is_client_error());
}

#[test]
fn test_strict_relations_reject_unknown_ids() {
    let request = SeatingRequest::new(vec![Student::new(1, "Ana")], ["0-0", "0-1"])
        .with_relation(Relation::avoid(1, 42));

    let lenient = planner(3).plan(&request).unwrap();
    assert_eq!(lenient.fitness, 0.0);

    match planner(3).with_strict_relations(true).plan(&request) {
        Err(SeatingError::Validation(errors)) => {
            assert_eq!(errors[0].kind, ValidationErrorKind::UnknownStudentReference);
            assert!(errors[0].message.contains("42"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_permutation_preserving_operators() {
    let students: Vec<Student> = (1..=5).map(|i| Student::new(i, format!("S{i}"))).collect();
    let request = SeatingRequest::new(students, ["0-0", "0-1", "0-2", "0-3", "0-4", "0-5"])
        .with_relation(Relation::avoid(1, 2))
        .with_relation(Relation::prefer(3, 4));
    let config = GaConfig::default()
        .with_seed(11)
        .with_operators(GeneticOperators::permutation_preserving());

    let plan = SeatPlanner::new().with_config(config).plan(&request).unwrap();
    assert_bijection(&plan.placements, 5, plan.pool());
    assert!(plan.history.iter().all(|f| f.is_finite()));
    assert_eq!(plan.fitness, plan.kpi.net_score());
}

#[test]
fn test_export_grid_marks_aisles() {
    let request = SeatingRequest::new(
        vec![Student::new(1, "Ana"), Student::new(2, "Ben")],
        ["0-0", "0-1", "0-3", "1-4"],
    );
    let plan = planner(8).plan(&request).unwrap();
    let grid = plan.grid().unwrap();
    assert_eq!((grid.rows, grid.cols), (2, 5));
    assert!(grid.cell(0, 2).unwrap().aisle);
    assert!(!grid.cell(0, 2).unwrap().in_pool);
    assert_eq!(grid.occupied_count(), 2);

    let export = plan.export_request();
    let json = serde_json::to_string(&export).unwrap();
    assert!(json.contains("\"position\""));
}

#[test]
fn test_broken_assignment_is_service_error() {
    let pool = SeatPool::parse(&["0-0", "0-1"]).unwrap();
    let ids = [StudentId::from(1), StudentId::from(2)];
    let reused: SeatAssignment = [(ids[0].clone(), Seat::new(0, 0)), (ids[1].clone(), Seat::new(0, 0))]
        .into_iter()
        .collect();

    let err = verify_assignment(&reused, &ids, &pool).unwrap_err();
    assert!(matches!(err, SeatingError::AlgorithmInvariant(_)));
    assert!(!err.is_client_error());
}

#[test]
fn test_extreme_coordinates_are_scored() {
    let request = SeatingRequest::new(
        vec![Student::new(1, "Ana"), Student::new(2, "Ben")],
        ["0-0", "4294967295-4294967295"],
    )
    .with_relation(Relation::avoid(1, 2));

    let plan = planner(4).plan(&request).unwrap();
    assert_eq!(plan.fitness, 0.0);
    assert_eq!(plan.kpi.mean_avoid_distance, Some(2.0 * f64::from(u32::MAX)));
}

#[test]
fn test_sparse_pool_chart_is_refused() {
    let request = SeatingRequest::new(
        vec![Student::new(1, "Ana"), Student::new(2, "Ben")],
        ["0-70000", "70000-0"],
    );
    let plan = planner(4).plan(&request).unwrap();
    assert_eq!(plan.placements.len(), 2);

    match plan.grid() {
        Err(SeatingError::Validation(errors)) => {
            assert_eq!(errors[0].kind, ValidationErrorKind::GridTooLarge)
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert!(plan.export_request().to_grid().is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn avoid_penalty_matches_formula(d in 0u64..50) {
        let expected = 3u64.saturating_sub(d) as f64 * 10.0;
        prop_assert_eq!(avoid_penalty(d), expected);
    }

    #[test]
    fn prefer_reward_matches_formula(d in 0u64..50) {
        let expected = 2u64.saturating_sub(d) as f64 * 5.0;
        prop_assert_eq!(prefer_reward(d), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn plan_is_always_a_bijection(
        n in 1usize..6,
        extra in 0usize..4,
        links in prop::collection::vec((0usize..6, 0usize..6, any::<bool>()), 0..5),
        seed in any::<u64>(),
    ) {
        let students: Vec<Student> =
            (0..n).map(|i| Student::new(i as i64, format!("S{i}"))).collect();
        let seats: Vec<String> = (0..n + extra).map(|i| format!("{}-{}", i / 4, i % 4)).collect();
        let relations: Vec<Relation> = links
            .into_iter()
            .filter(|(a, b, _)| a % n != b % n)
            .map(|(a, b, avoid)| {
                let (a, b) = ((a % n) as i64, (b % n) as i64);
                if avoid { Relation::avoid(a, b) } else { Relation::prefer(a, b) }
            })
            .collect();
        let request = SeatingRequest::new(students, seats).with_relations(relations);
        let config = GaConfig::default()
            .with_population_size(8)
            .with_max_generations(5);

        let plan = SeatPlanner::new()
            .with_config(config)
            .plan_with_rng(&request, &mut SmallRng::seed_from_u64(seed))
            .unwrap();

        prop_assert_eq!(plan.placements.len(), n);
        let used: HashSet<Seat> = plan.placements.iter().map(|p| p.position).collect();
        prop_assert_eq!(used.len(), n);
        prop_assert!(used.iter().all(|s| plan.pool().contains(s)));
        prop_assert!(plan.fitness.is_finite());
        prop_assert_eq!(plan.fitness, plan.kpi.net_score());
    }
}
