// Host-side tests for throw path planning.

use cake_core::flight::PATH_EASE;
use cake_core::{plan_flight, SceneParams};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn plans(n: usize, start: Vec2, target: Vec2) -> Vec<cake_core::FlightPlan> {
    let params = SceneParams::default();
    let mut rng = StdRng::seed_from_u64(7);
    (0..n)
        .map(|_| plan_flight(start, target, &params, &mut rng))
        .collect()
}

#[test]
fn upward_throw_matches_expected_shape() {
    let start = Vec2::new(500.0, 800.0);
    let target = Vec2::new(500.0, 200.0);
    for plan in plans(200, start, target) {
        assert_eq!(plan.start, start);
        let jitter = plan.end - target;
        assert!((-18.0..=18.0).contains(&jitter.x), "jitter x {}", jitter.x);
        assert!((-12.0..=14.0).contains(&jitter.y), "jitter y {}", jitter.y);
        // lifted at least 120 above the higher (jittered) end
        assert!(plan.waypoint.y <= plan.end.y.min(start.y) - 120.0);
        assert!(plan.waypoint.y < 94.0, "waypoint y {}", plan.waypoint.y);
        assert!((0.95..=1.45).contains(&plan.duration));
        assert_eq!(plan.spin_y.abs(), 360.0);
        assert!((-12.0..18.0).contains(&plan.spin_x));
    }
}

#[test]
fn waypoint_sits_above_both_ends() {
    for plan in plans(100, Vec2::new(100.0, 300.0), Vec2::new(900.0, 650.0)) {
        let top = plan.start.y.min(plan.end.y);
        assert!(plan.waypoint.y <= top - 120.0);
        assert!(plan.waypoint.y >= top - 300.0);
        let mid_x = (plan.start.x + plan.end.x) * 0.5;
        assert!((plan.waypoint.x - mid_x).abs() <= 110.0);
    }
}

#[test]
fn curve_passes_through_endpoints_and_waypoint() {
    let plan = plans(1, Vec2::new(0.0, 600.0), Vec2::new(400.0, 100.0))[0];
    assert!((plan.point_at(0.0) - plan.start).length() < 1e-3);
    assert!((plan.point_at(1.0) - plan.end).length() < 1e-3);
    assert!((plan.point_at(0.5) - plan.waypoint).length() < 1e-3);
}

#[test]
fn position_is_eased_along_the_curve() {
    let plan = plans(1, Vec2::new(0.0, 600.0), Vec2::new(400.0, 100.0))[0];
    let half = plan.duration * 0.5;
    let eased = plan.point_at(PATH_EASE.apply(0.5));
    assert!((plan.position(half) - eased).length() < 1e-3);
    // ease-in: halfway in time is short of the waypoint
    assert!((plan.position(half) - plan.waypoint).length() > 1.0);
    assert_eq!(plan.position(plan.duration * 2.0), plan.point_at(1.0));
}

#[test]
fn tumble_is_linear_in_time() {
    let plan = plans(1, Vec2::new(0.0, 600.0), Vec2::new(400.0, 100.0))[0];
    let (x, y) = plan.tumble(plan.duration * 0.25);
    assert!((x - plan.spin_x * 0.25).abs() < 1e-3);
    assert!((y - plan.spin_y * 0.25).abs() < 1e-3);
    assert_eq!(plan.tumble(plan.duration * 3.0), (plan.spin_x, plan.spin_y));
}

#[test]
fn same_seed_gives_same_plan() {
    let a = plans(3, Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
    let b = plans(3, Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
    assert_eq!(a, b);
}
