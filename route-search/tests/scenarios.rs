use anyhow::{anyhow, Result};
use std::fs;
use tas_route_core::{step, AirParams, Angle, DeadZone, InputRange, SimState, StickInput, Vec3};
use tas_route_search::catalog::find_scenario;
use tas_route_search::policy::{
    Acceptance, Axis, Evaluation, Goal, GoalMetric, Improvement, Prune,
};
use tas_route_search::report::{write_json, RouteReport};
use tas_route_search::scenario::RootSpec;
use tas_route_search::stats::HistogramSpec;
use tas_route_search::{
    replay, ConfigIssue, NoProgress, Scenario, SearchError, SearchOptions, SearchPolicy,
};

fn scenario_a() -> Scenario {
    Scenario {
        id: "scenario-a".to_string(),
        description: String::new(),
        root: RootSpec {
            position: Vec3::new(435.91, 4474.0, -1854.51),
            velocity: Vec3::new(-16.17, -75.0, -17.68),
            h_speed: None,
            facing: Angle(39780),
            camera: Angle(16384),
        },
        inputs: InputRange::new(-66, -46, -41, -21),
        dead_zone: DeadZone::STANDARD,
        max_depth: 3,
        goal: Goal {
            x: 392.86,
            z: -1901.02,
            metric: GoalMetric::Planar,
        },
        evaluation: Evaluation::AtDepth { depth: 3 },
        improvement: Improvement::Strict,
        acceptance: Acceptance::Never,
        prune: Prune::None,
        camera_by_index: Vec::new(),
        air: AirParams::STANDARD,
        histogram: HistogramSpec::default(),
    }
}

fn catalog(id: &str) -> Result<Scenario> {
    find_scenario(id).ok_or_else(|| anyhow!("missing catalog scenario {id}"))
}

#[test]
fn scenario_a_finds_three_frame_route_closer_than_root() -> Result<()> {
    let scenario = scenario_a();
    let root_distance = scenario.distance(&scenario.root_state());

    let report = scenario.run(&SearchOptions::default(), &mut NoProgress)?;
    let route = &report.route;
    assert_eq!(route.inputs.len(), 3);
    assert!(route.distance < root_distance, "{} >= {root_distance}", route.distance);
    assert_eq!(route.final_state().index(), 3);
    for input in &route.inputs {
        assert!((-66..=-46).contains(&input.x), "{input}");
        assert!((-41..=-21).contains(&input.z), "{input}");
    }
    Ok(())
}

#[test]
fn scenario_b_zero_depth_is_rejected_before_search() {
    let mut scenario = scenario_a();
    scenario.max_depth = 0;
    scenario.evaluation = Evaluation::EveryState;
    let err = scenario
        .run(&SearchOptions::default(), &mut NoProgress)
        .expect_err("zero depth must fail");
    assert_eq!(
        err,
        SearchError::InvalidSearchConfiguration(ConfigIssue::ZeroMaxDepth)
    );
}

#[test]
fn inverted_range_and_out_of_range_evaluation_are_rejected() {
    let mut inverted = scenario_a();
    inverted.inputs = InputRange::new(10, -10, 0, 0);
    assert_eq!(
        inverted.run(&SearchOptions::default(), &mut NoProgress).err(),
        Some(SearchError::InvalidSearchConfiguration(
            ConfigIssue::InvertedInputRange
        ))
    );

    let mut empty = scenario_a();
    empty.inputs = InputRange::new(1, 7, 1, 7);
    assert_eq!(
        empty.run(&SearchOptions::default(), &mut NoProgress).err(),
        Some(SearchError::InvalidSearchConfiguration(
            ConfigIssue::EmptyInputSpace
        ))
    );

    let mut past_bound = scenario_a();
    past_bound.evaluation = Evaluation::AtDepth { depth: 4 };
    assert_eq!(
        past_bound.run(&SearchOptions::default(), &mut NoProgress).err(),
        Some(SearchError::InvalidSearchConfiguration(
            ConfigIssue::EvaluationDepthOutOfRange {
                depth: 4,
                max_depth: 3
            }
        ))
    );
}

#[test]
fn scenario_c_constant_camera_override_is_applied_exactly() -> Result<()> {
    let camera = Angle(20000);
    let mut scenario = scenario_a().with_radius(2);
    scenario.camera_by_index = vec![camera; 4];

    let report = scenario.run(&SearchOptions::default(), &mut NoProgress)?;
    let trajectory = &report.route.trajectory;
    assert_eq!(trajectory[0].camera(), Angle(16384));
    for state in &trajectory[1..] {
        assert_eq!(state.camera(), camera);
    }

    // The override lands on each child after its step, so the first frame
    // still moves under the root camera.
    let mut state = scenario.root_state();
    for (input, expected) in report.route.inputs.iter().zip(&trajectory[1..]) {
        state = step(&state, *input, &scenario.air).with_camera(camera);
        assert_eq!(state.key(), expected.key());
    }
    Ok(())
}

#[test]
fn dedup_does_not_change_best_distance() -> Result<()> {
    let scenario = scenario_a().with_radius(3).with_max_depth(2);
    let with_dedup = scenario.run(&SearchOptions::default(), &mut NoProgress)?;
    let without = scenario.run(
        &SearchOptions {
            dedup: false,
            ..SearchOptions::default()
        },
        &mut NoProgress,
    )?;
    assert_eq!(with_dedup.route.distance, without.route.distance);
    assert_eq!(without.stats.duplicates, 0);
    Ok(())
}

#[test]
fn neutral_clamping_cycle_terminates() -> Result<()> {
    // Over the air cap with no input: speed relaxes by one per frame forever
    // without ever revisiting a state, so only the depth bound ends it.
    let mut scenario = scenario_a();
    scenario.root.h_speed = Some(40.0);
    scenario.inputs = InputRange::new(0, 0, 0, 0);
    scenario = scenario.with_max_depth(50);

    let report = scenario.run(&SearchOptions::default(), &mut NoProgress)?;
    assert_eq!(report.route.inputs, vec![StickInput::NEUTRAL; 50]);
    assert_eq!(report.stats.retained, 51);
    assert_eq!(report.stats.deepest, 50);
    assert!(report.route.final_state().h_speed() <= 32.0);
    Ok(())
}

#[test]
fn lineage_depths_increase_by_one_from_root() -> Result<()> {
    let scenario = catalog("wf-holp")?.with_radius(2);
    let report = scenario.run(&SearchOptions::default(), &mut NoProgress)?;
    for (depth, state) in report.route.trajectory.iter().enumerate() {
        assert_eq!(state.index() as usize, depth);
    }
    let path = report.arena.path(report.route.node);
    assert_eq!(path.first().map(|id| id.index()), Some(0));
    Ok(())
}

#[test]
fn replay_reproduces_best_state_with_camera_table() -> Result<()> {
    let scenario = catalog("wf-holp")?.with_radius(2);
    let report = scenario.run(&SearchOptions::default(), &mut NoProgress)?;
    let states = replay(scenario.root_state(), &scenario, &report.route.inputs);
    let replayed: Vec<_> = states.iter().map(SimState::key).collect();
    let searched: Vec<_> = report.route.trajectory.iter().map(SimState::key).collect();
    assert_eq!(replayed, searched);
    let last = states.last().ok_or_else(|| anyhow!("empty replay"))?;
    assert_eq!(scenario.distance(last), report.route.distance);
    Ok(())
}

#[test]
fn thread_count_does_not_change_result() -> Result<()> {
    let scenario = catalog("ttm-holp")?.with_radius(2);
    let single = scenario.run(
        &SearchOptions {
            jobs: Some(1),
            ..SearchOptions::default()
        },
        &mut NoProgress,
    )?;
    let pooled = scenario.run(
        &SearchOptions {
            jobs: Some(3),
            parallel_min_inputs: 1,
            ..SearchOptions::default()
        },
        &mut NoProgress,
    )?;
    assert_eq!(single.route, pooled.route);
    assert_eq!(single.stats, pooled.stats);
    Ok(())
}

#[test]
fn report_round_trips_through_nested_output_path() -> Result<()> {
    let scenario = catalog("bits-holp")?.with_radius(2);
    let report = scenario.run(&SearchOptions::default(), &mut NoProgress)?;
    let summary = RouteReport::new(&scenario, &report)?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("reports").join("bits.json");
    write_json(&path, &summary)?;

    let decoded: RouteReport = serde_json::from_slice(&fs::read(&path)?)?;
    assert_eq!(decoded.scenario_id, "bits-holp");
    assert_eq!(decoded.frames.len(), 4);
    assert_eq!(decoded.frames[0].input, None);
    assert_eq!(decoded.frames[1].input, Some(report.route.inputs[0]));
    assert_eq!(decoded.inputs, report.route.inputs);
    assert_eq!(decoded.scenario_fingerprint, summary.scenario_fingerprint);
    Ok(())
}

#[test]
fn scenario_json_file_behaves_like_catalog_entry() -> Result<()> {
    let scenario = catalog("bits-holp")?.with_radius(2);
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bits.json");
    write_json(&path, &scenario)?;

    let loaded: Scenario = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(loaded, scenario);
    let a = scenario.run(&SearchOptions::default(), &mut NoProgress)?;
    let b = loaded.run(&SearchOptions::default(), &mut NoProgress)?;
    assert_eq!(a.route, b.route);
    Ok(())
}

#[test]
fn pruning_every_child_reports_no_solution() {
    let mut scenario = scenario_a().with_radius(2);
    scenario.prune = Prune::ShrinkingRadius { numerator: 1.0e-6 };

    let err = scenario
        .run(&SearchOptions::default(), &mut NoProgress)
        .expect_err("every child is pruned");
    let stats = match err {
        SearchError::NoSolutionFound { stats } => stats,
        other => panic!("expected NoSolutionFound, got {other:?}"),
    };
    assert_eq!(stats.expanded, 1);
    assert_eq!(stats.pruned, 25);
    assert_eq!(stats.evaluated, 0);
}

#[test]
fn pruning_that_rejects_the_root_is_a_configuration_error() {
    // Already at the target vertical speed, so the projection is the root's
    // own X, 43 units from the goal against a tolerance of 2.
    let mut scenario = scenario_a();
    scenario.goal.metric = GoalMetric::Axis {
        axis: Axis::X,
    };
    scenario.prune = Prune::ProjectedAxis {
        axis: Axis::X,
        target_y_speed: -75.0,
        base: 2.0,
        growth: 2.0,
    };

    assert_eq!(
        scenario.run(&SearchOptions::default(), &mut NoProgress).err(),
        Some(SearchError::InvalidSearchConfiguration(ConfigIssue::RootPruned))
    );
}

#[test]
fn bully_reaches_exact_stop_within_six_frames() -> Result<()> {
    let scenario = catalog("bully")?.with_max_depth(6);
    let report = scenario.run(&SearchOptions::default(), &mut NoProgress)?;

    let route = &report.route;
    assert!(route.solved);
    assert!(report.stats.solved);
    assert_eq!(route.distance, 0.0);
    assert!(route.final_state().h_speed().abs() < 0.2);
    assert!(route.inputs.len() <= 6);
    assert!(route.inputs.iter().all(|input| input.z == 0));
    assert!(report.stats.pruned > 0);
    assert!(report.stats.terminal_distances.exact >= 1);
    Ok(())
}

#[test]
fn wall_gap_lands_on_target_vertical_speed() -> Result<()> {
    let scenario = catalog("wall-gap")?;
    let report = scenario.run(&SearchOptions::default(), &mut NoProgress)?;

    let route = &report.route;
    let last = route.final_state();
    assert_eq!(last.velocity().y, -34.0);
    assert_eq!(route.inputs.len(), 6);
    assert!(route.inputs.iter().all(|input| input.x == 0));
    assert!(route.distance < 2.0, "{}", route.distance);
    assert!(report.stats.pruned > 0);
    assert!(report.stats.terminal_distances.total() > 0);
    assert_eq!(
        report.stats.terminal_distances.total(),
        report.stats.evaluated
    );
    Ok(())
}
