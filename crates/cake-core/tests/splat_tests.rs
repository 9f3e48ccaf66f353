// Host-side tests for procedural splats and DOM decoration specs.

use cake_core::decor::{confetti, dom_splats};
use cake_core::splat::impact_blob_count;
use cake_core::{
    splat_burst, Blob, CONFETTI_COUNT, DECOR_PALETTE, DOM_SPLAT_COUNT, IMPACT_BLOBS_MIN,
    IMPACT_BLOBS_SPAN, IMPACT_MAX_RADIUS, SPLAT_PALETTE,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0xCA4E)
}

#[test]
fn impact_count_stays_in_range() {
    let mut rng = rng();
    for _ in 0..500 {
        let n = impact_blob_count(IMPACT_BLOBS_MIN, IMPACT_BLOBS_SPAN, &mut rng);
        assert!((9..=15).contains(&n), "count {}", n);
    }
    assert_eq!(impact_blob_count(6, 0, &mut rng), 6);
}

#[test]
fn blob_parameters_stay_in_range() {
    let mut rng = rng();
    let center = Vec2::new(400.0, 300.0);
    for blob in splat_burst(center, 200, IMPACT_MAX_RADIUS, &mut rng) {
        assert!(SPLAT_PALETTE.contains(&blob.color));
        assert!(blob.radius >= 12.0 && blob.radius < IMPACT_MAX_RADIUS * 0.8 + 12.0);
        assert!((3..=8).contains(&blob.spikes()));
        assert!(blob.alpha >= 0.45 && blob.alpha < 1.0 + 1e-6);
        let off = blob.center - center;
        assert!(off.x.abs() <= 80.001 && off.y.abs() <= 40.001);
        for lobe in &blob.lobes {
            assert!(lobe.inner >= 0.4 && lobe.inner <= 1.0);
            assert!(lobe.outer >= 0.7 && lobe.outer <= 1.3);
        }
    }
}

#[test]
fn outline_is_closed_and_deterministic() {
    let mut rng = rng();
    let blob = Blob::random(Vec2::ZERO, 60.0, &mut rng);
    let segs: Vec<_> = blob.outline().collect();
    assert_eq!(segs.len(), blob.spikes());
    let last = segs.last().expect("segments");
    assert!((last.to - blob.start()).length() < 1e-3);
    let again: Vec<_> = blob.outline().collect();
    assert_eq!(segs, again);
}

#[test]
fn outline_points_respect_lobe_radii() {
    let mut rng = rng();
    let blob = Blob::random(Vec2::new(50.0, 50.0), IMPACT_MAX_RADIUS, &mut rng);
    for (i, seg) in blob.outline().enumerate() {
        let next = (i + 1) % blob.spikes();
        let control_r = (seg.control - blob.center).length();
        let to_r = (seg.to - blob.center).length();
        assert!((control_r - blob.radius * blob.lobes[i].outer).abs() < 1e-2);
        assert!((to_r - blob.radius * blob.lobes[next].inner).abs() < 1e-2);
    }
}

#[test]
fn dom_decorations_have_expected_counts_and_sizes() {
    let mut rng = rng();
    let at = Vec2::new(300.0, 200.0);
    let splats = dom_splats(at, &mut rng);
    assert_eq!(splats.len(), DOM_SPLAT_COUNT);
    for s in &splats {
        assert!(s.width >= 18.0 && s.width <= 88.0);
        assert!((s.height - s.width * 0.6).abs() < 1e-4);
        assert!(s.border_radius_pct >= 30.0 && s.border_radius_pct <= 90.0);
        assert!(s.blur_px >= 0.0 && s.blur_px <= 1.2);
        assert!(DECOR_PALETTE.contains(&s.color));
        let d = s.timeline.duration().expect("finite");
        assert!(s.timeline.sample(d).opacity.abs() < 1e-4);
    }
    let pieces = confetti(at, &mut rng);
    assert_eq!(pieces.len(), CONFETTI_COUNT);
    for c in &pieces {
        assert!((c.left - at.x).abs() <= 100.001);
        assert!((c.top - at.y).abs() <= 50.001);
        let d = c.timeline.duration().expect("finite");
        assert!((1.6..=3.0).contains(&d));
        let end = c.timeline.sample(d);
        assert!(end.y >= 220.0 && end.y <= 820.0);
        assert!(end.opacity.abs() < 1e-4);
    }
}
