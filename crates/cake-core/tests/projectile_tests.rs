// Host-side tests for the projectile arena and its flight events.

use cake_core::{
    plan_flight, FlightEvent, FlightPlan, Launch, Phase, ProjectileArena, ProjectileId,
    SceneParams, FADE_DELAY_SEC, FADE_SEC, MAX_IN_FLIGHT,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn plan(duration: f32) -> FlightPlan {
    FlightPlan {
        start: Vec2::new(100.0, 700.0),
        waypoint: Vec2::new(300.0, 100.0),
        end: Vec2::new(500.0, 300.0),
        duration,
        spin_y: 360.0,
        spin_x: 10.0,
    }
}

fn launch(arena: &mut ProjectileArena, duration: f32) -> ProjectileId {
    match arena.launch(plan(duration)) {
        Launch::Accepted(id) => id,
        Launch::AtCapacity => panic!("arena unexpectedly full"),
    }
}

fn run(arena: &mut ProjectileArena, frames: usize) -> Vec<FlightEvent> {
    let mut events = Vec::new();
    for _ in 0..frames {
        arena.tick(FRAME, &mut events);
    }
    events
}

#[test]
fn capacity_is_enforced() {
    let mut arena = ProjectileArena::default();
    for _ in 0..MAX_IN_FLIGHT {
        launch(&mut arena, 1.0);
    }
    assert_eq!(arena.in_flight(), MAX_IN_FLIGHT);
    assert!(!arena.has_room());
    assert_eq!(arena.launch(plan(1.0)), Launch::AtCapacity);
    assert_eq!(arena.in_flight(), MAX_IN_FLIGHT);
}

#[test]
fn each_flight_impacts_exactly_once() {
    let mut arena = ProjectileArena::default();
    let a = launch(&mut arena, 0.5);
    let b = launch(&mut arena, 0.8);
    let events = run(&mut arena, 300);
    for id in [a, b] {
        let impacts = events
            .iter()
            .filter(|e| matches!(e, FlightEvent::Impact { id: i, .. } if *i == id))
            .count();
        assert_eq!(impacts, 1);
        let removed = events
            .iter()
            .filter(|e| matches!(e, FlightEvent::Removed { id: i } if *i == id))
            .count();
        assert_eq!(removed, 1);
    }
    assert_eq!(arena.in_flight(), 0);
}

#[test]
fn impact_lands_on_fixed_end_point() {
    let mut arena = ProjectileArena::default();
    launch(&mut arena, 0.3);
    let events = run(&mut arena, 40);
    let pos = events.iter().find_map(|e| match e {
        FlightEvent::Impact { pos, .. } => Some(*pos),
        _ => None,
    });
    assert_eq!(pos, Some(Vec2::new(500.0, 300.0)));
}

#[test]
fn samples_stop_after_impact() {
    let mut arena = ProjectileArena::default();
    launch(&mut arena, 0.2);
    let events = run(&mut arena, 120);
    let impact_at = events
        .iter()
        .position(|e| matches!(e, FlightEvent::Impact { .. }))
        .expect("impact");
    assert!(matches!(events[impact_at - 1], FlightEvent::Sample { pos, .. } if pos == Vec2::new(500.0, 300.0)));
    assert!(!events[impact_at + 1..]
        .iter()
        .any(|e| matches!(e, FlightEvent::Sample { .. })));
}

#[test]
fn landed_record_lingers_then_frees_its_slot() {
    let mut arena = ProjectileArena::default();
    let id = launch(&mut arena, 0.1);
    run(&mut arena, 10);
    assert_eq!(arena.get(id).map(|p| p.phase), Some(Phase::Landed));
    assert!(arena.contains(id));

    let linger = FADE_DELAY_SEC + FADE_SEC;
    let frames = (linger / FRAME.as_secs_f32()).ceil() as usize + 2;
    let events = run(&mut arena, frames);
    assert!(events.contains(&FlightEvent::Removed { id }));
    assert!(!arena.contains(id));
    assert!(arena.has_room());
}

#[test]
fn stale_ids_do_not_alias_reused_slots() {
    let mut arena = ProjectileArena::new(1);
    let first = launch(&mut arena, 0.05);
    run(&mut arena, 120);
    let second = launch(&mut arena, 0.05);
    assert_eq!(first.slot(), second.slot());
    assert_ne!(first, second);
    assert!(arena.pose(first).is_none());
    assert!(arena.pose(second).is_some());
}

#[test]
fn flight_pose_pops_in_and_fades_after_landing() {
    let mut arena = ProjectileArena::default();
    let id = launch(&mut arena, 0.5);
    let pose = arena.pose(id).unwrap();
    assert!((pose.scale - 0.72).abs() < 1e-4);
    assert_eq!((pose.x_percent, pose.y_percent), (-50.0, -50.0));
    assert!(pose.opacity <= 1.0);

    run(&mut arena, 20);
    let pose = arena.pose(id).unwrap();
    assert!(pose.scale >= 0.95);

    let landed = 0.5 + FADE_DELAY_SEC + FADE_SEC * 0.5;
    let frames = (landed / FRAME.as_secs_f32()).ceil() as usize - 20;
    run(&mut arena, frames);
    let pose = arena.pose(id).unwrap();
    assert_eq!((pose.x, pose.y), (500.0, 300.0));
    assert!(pose.opacity < 0.9 && pose.opacity > 0.0);
}

#[test]
fn overlapping_throws_interleave_samples() {
    let params = SceneParams::default();
    let mut rng = StdRng::seed_from_u64(3);
    let mut arena = ProjectileArena::default();
    for _ in 0..3 {
        let plan = plan_flight(Vec2::new(500.0, 800.0), Vec2::new(500.0, 200.0), &params, &mut rng);
        arena.launch(plan);
    }
    let mut events = Vec::new();
    arena.tick(FRAME, &mut events);
    let samples = events
        .iter()
        .filter(|e| matches!(e, FlightEvent::Sample { .. }))
        .count();
    assert_eq!(samples, 3);
    assert_eq!(arena.in_flight(), 3);
}
