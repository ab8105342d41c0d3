use solarsim::simulation::params::AU;
use solarsim::{Body, NVec2, NewtonianGravity, Parameters, Phase, Projection, SimError, System, UpdateOrder};

const SUN_MASS: f64 = 1.98892e30;
const EARTH_MASS: f64 = 5.9742e24;

fn sun() -> Body {
    Body::new("sun", NVec2::zeros(), SUN_MASS, 20.0, [255, 255, 0]).as_anchor()
}

fn earth() -> Body {
    Body::new("earth", NVec2::new(-AU, 0.0), EARTH_MASS, 10.0, [0, 0, 255])
        .with_velocity(NVec2::new(0.0, 29.783e3))
}

/// Sun at the origin and Earth at -1 AU, anchor lock off
fn sun_earth() -> System {
    System::new(&Parameters::default(), vec![sun(), earth()]).expect("valid two-body system")
}

fn gravity() -> NewtonianGravity {
    NewtonianGravity { G: Parameters::default().G }
}

fn rel_err(a: f64, b: f64) -> f64 {
    (a - b).abs() / b.abs()
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let g = gravity();
    let mut a = sun();
    let mut b = Body::new("p", NVec2::new(0.3 * AU, -0.8 * AU), 6.39e23, 6.0, [188, 39, 50]);
    let b_copy = b.clone();

    let f_ab = a.pairwise_force(&b_copy, &g).unwrap();
    let f_ba = b.pairwise_force(&sun(), &g).unwrap();

    let net = f_ab + f_ba;
    assert!(net.norm() < 1e-9 * f_ab.norm(), "forces not opposite: {:?} vs {:?}", f_ab, f_ba);
    assert!(rel_err(f_ab.norm(), f_ba.norm()) < 1e-9);
}

#[test]
fn gravity_points_toward_other_body() {
    let mut e = earth();
    let f = e.pairwise_force(&sun(), &gravity()).unwrap();

    // Earth sits at -x, the sun pulls it toward +x
    assert!(f.x > 0.0, "force is not toward the sun: {:?}", f);
    assert!(f.y.abs() < 1e-9 * f.x);
}

#[test]
fn gravity_inverse_square_law() {
    let g = gravity();
    let mut near = earth();
    let mut far = earth();
    far.x *= 2.0;

    let ratio = near.pairwise_force(&sun(), &g).unwrap().norm() / far.pairwise_force(&sun(), &g).unwrap().norm();

    assert!((ratio - 4.0).abs() < 1e-9, "expected 4x, got {}", ratio);
}

#[test]
fn gravity_magnitude_matches_newton() {
    let g = gravity();
    let mut e = earth();
    let f = e.pairwise_force(&sun(), &g).unwrap();
    let expected = g.G * SUN_MASS * EARTH_MASS / (AU * AU);

    assert!(rel_err(f.norm(), expected) < 1e-12);
}

#[test]
fn pairwise_force_tracks_anchor_distance_only() {
    let g = gravity();
    let mut e = earth();
    let moon = Body::new("moon", NVec2::new(-AU + 3.84e8, 0.0), 7.35e22, 2.0, [200, 200, 200]);

    e.pairwise_force(&moon, &g).unwrap();
    assert_eq!(e.dist_to_anchor, 0.0, "non-anchor peer must not touch the anchor distance");

    e.pairwise_force(&sun(), &g).unwrap();
    assert!(rel_err(e.dist_to_anchor, AU) < 1e-12);
}

#[test]
fn pairwise_force_rejects_coincident_bodies() {
    let mut a = sun();
    let b = Body::new("twin", NVec2::zeros(), 1.0e24, 5.0, [255, 255, 255]);

    let err = b.clone().pairwise_force(&a, &gravity()).unwrap_err();
    assert!(matches!(err, SimError::DegenerateConfiguration { .. }));
    assert!(a.pairwise_force(&b, &gravity()).is_err());
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn lone_body_drifts_at_constant_velocity() {
    let params = Parameters::default();
    let v = NVec2::new(1000.0, -250.0);
    let lone = sun().with_velocity(v);
    let mut sys = System::new(&params, vec![lone]).unwrap();

    sys.step_frame().unwrap();
    assert_eq!(sys.bodies()[0].v, v, "no forces act on a lone body");
    assert!((sys.bodies()[0].x - v * params.timestep).norm() < 1e-6);

    sys.step_frame().unwrap();
    assert_eq!(sys.bodies()[0].v, v);
    assert!((sys.bodies()[0].x - v * 2.0 * params.timestep).norm() < 1e-6);
}

#[test]
fn net_force_excludes_self_by_index() {
    // Two bodies with identical values except position still both count
    let mut bodies = vec![sun(), earth(), earth()];
    bodies[2].x = NVec2::new(AU, 0.0);

    let f = solarsim::net_force(&mut bodies, 1, &gravity()).unwrap();
    let g = gravity();
    let expected = g.G * EARTH_MASS * SUN_MASS / (AU * AU) + g.G * EARTH_MASS * EARTH_MASS / (4.0 * AU * AU);

    assert!(rel_err(f.x, expected) < 1e-12);
}

#[test]
fn integrate_kicks_before_drifting() {
    let mut b = earth();
    b.v = NVec2::zeros();
    let f = NVec2::new(EARTH_MASS, 0.0); // 1 m/s^2

    b.integrate(f, 10.0);

    assert!((b.v.x - 10.0).abs() < 1e-12);
    // position uses the updated velocity
    assert!((b.x.x - (-AU + 100.0)).abs() < 1e-3);
}

#[test]
fn earth_one_day_two_body_step() {
    let params = Parameters::default();
    let mut sys = sun_earth();
    sys.step_frame().unwrap();

    let s = &sys.bodies()[0];
    let e = &sys.bodies()[1];

    // Earth starts at -1 AU, so the pull toward the sun is +x
    let expected_dv = params.G * SUN_MASS / (AU * AU) * params.timestep;
    assert!(e.v.x > 0.0);
    assert!(rel_err(e.v.x, expected_dv) < 1e-3, "earth vx = {}", e.v.x);

    // The free sun is pulled toward Earth: negative vx of a few mm/s
    assert!(s.v.x < 0.0);
    assert!(s.v.x.abs() > 1e-3 && s.v.x.abs() < 1e-2, "sun vx = {}", s.v.x);

    assert!(rel_err(e.dist_to_anchor, AU) < 1e-3);
    assert!(rel_err((e.x - s.x).norm(), AU) < 1e-3);
}

#[test]
fn snapshot_two_body_conserves_momentum() {
    let params = Parameters::default();
    let a = Body::new("a", NVec2::new(-0.5 * AU, 0.0), 1.0e29, 5.0, [255, 255, 255]).as_anchor();
    let b = Body::new("b", NVec2::new(0.5 * AU, 0.0), 1.0e29, 5.0, [255, 255, 255]);
    let mut sys = System::new(&params, vec![a, b])
        .unwrap()
        .with_update_order(UpdateOrder::Snapshot);

    sys.step_frame().unwrap();

    let p = sys.bodies()[0].v * sys.bodies()[0].m + sys.bodies()[1].v * sys.bodies()[1].m;
    let scale = sys.bodies()[0].v.norm() * sys.bodies()[0].m;
    assert!(p.norm() < 1e-9 * scale, "momentum drift {:?}", p);
}

#[test]
fn sequential_and_snapshot_agree_within_tolerance() {
    let params = Parameters::default();
    let mut seq = System::solar(&params);
    let mut snap = System::solar(&params).with_update_order(UpdateOrder::Snapshot);

    seq.step_frame().unwrap();
    snap.step_frame().unwrap();

    for (a, b) in seq.bodies().iter().zip(snap.bodies()) {
        assert!((a.x - b.x).norm() < 1e-6 * AU, "{} positions diverge", a.name);
        assert!((a.v - b.v).norm() < 1.0, "{} velocities diverge", a.name);
    }
}

// ==================================================================================
// System tests
// ==================================================================================

#[test]
fn anchor_lock_pins_anchor_every_frame() {
    let mut sys = System::solar(&Parameters::default());
    assert!(sys.anchor_lock());

    for _ in 0..100 {
        sys.step_frame().unwrap();
        assert_eq!(sys.bodies()[0].x, NVec2::zeros());
    }

    // velocity keeps integrating while pinned
    let v = sys.bodies()[0].v;
    assert!(v.norm() > 0.0);

    // unlocked, the anchor resumes from that velocity
    sys.set_anchor_lock(false);
    sys.step_frame().unwrap();
    assert!(sys.bodies()[0].x.norm() > 0.0);
}

#[test]
fn anchor_lock_overrides_prior_drift() {
    let mut sys = sun_earth();
    for _ in 0..10 {
        sys.step_frame().unwrap();
    }
    assert!(sys.bodies()[0].x.norm() > 0.0);

    sys.set_anchor_lock(true);
    sys.step_frame().unwrap();
    assert_eq!(sys.bodies()[0].x, NVec2::zeros());
}

#[test]
fn distance_to_anchor_is_pre_update_separation() {
    let mut sys = System::solar(&Parameters::default());
    for _ in 0..5 {
        sys.step_frame().unwrap();
    }
    let before: Vec<NVec2> = sys.bodies().iter().map(|b| b.x).collect();

    sys.step_frame().unwrap();

    // anchor is pinned at the origin for the whole frame
    for (b, x) in sys.bodies().iter().zip(&before).skip(1) {
        assert!(rel_err(b.dist_to_anchor, x.norm()) < 1e-12, "{}", b.name);
    }
}

#[test]
fn canonical_solar_system_layout() {
    let sys = System::solar(&Parameters::default());
    let bodies = sys.bodies();
    let names: Vec<&str> = bodies.iter().map(|b| b.name.as_str()).collect();

    assert_eq!(bodies.len(), 9);
    assert_eq!(
        names,
        ["sun", "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune"]
    );
    assert!(bodies[0].anchor);
    assert_eq!(bodies[0].x, NVec2::zeros());
    assert_eq!(bodies.iter().filter(|b| b.anchor).count(), 1);

    let mercury = &bodies[1];
    assert!(rel_err(mercury.x.x, 0.387 * AU) < 1e-12);
    assert_eq!(mercury.v, NVec2::new(0.0, -47.4e3));

    let offsets = [0.387, 0.723, -1.0, -1.524, 5.20238, 9.58202, 19.19126, 30.13];
    for (b, au) in bodies[1..].iter().zip(offsets) {
        assert!(rel_err(b.x.x, au * AU) < 1e-12, "{}", b.name);
        assert_eq!(b.x.y, 0.0);
        assert_eq!(b.v.x, 0.0);
    }
    let radii: Vec<f64> = bodies[1..].iter().map(|b| b.x.x.abs()).collect();
    assert!(radii.windows(2).all(|w| w[0] < w[1]), "orbits are not ordered outward");

    assert!(bodies[6].ring, "saturn carries the ring");
    assert_eq!(bodies.iter().filter(|b| b.ring).count(), 1);
}

#[test]
fn reset_is_idempotent() {
    let params = Parameters::default();
    let mut sys = System::solar(&params);
    for _ in 0..30 {
        sys.step_frame().unwrap();
    }

    sys.reset();
    let once = sys.bodies().to_vec();
    sys.reset();

    assert_eq!(sys.bodies(), once.as_slice());
    assert_eq!(sys.bodies(), System::solar(&params).bodies());
    assert_eq!(sys.frames(), 0);
    assert_eq!(sys.elapsed(), 0.0);
}

#[test]
fn reset_keeps_settings() {
    let mut sys = System::solar(&Parameters::default()).with_update_order(UpdateOrder::Snapshot);
    sys.set_anchor_lock(false);
    sys.reset();

    assert!(!sys.anchor_lock());
    assert_eq!(sys.update_order(), UpdateOrder::Snapshot);
}

#[test]
fn requested_reset_applies_on_next_frame() {
    let params = Parameters::default();
    let mut sys = System::solar(&params);
    for _ in 0..10 {
        sys.step_frame().unwrap();
    }

    sys.request_reset();
    assert_eq!(sys.phase(), Phase::ResetPending);
    sys.step_frame().unwrap();
    assert_eq!(sys.phase(), Phase::Running);
    assert_eq!(sys.frames(), 1);

    let mut fresh = System::solar(&params);
    fresh.step_frame().unwrap();
    assert_eq!(sys.bodies(), fresh.bodies());
}

#[test]
fn degenerate_frame_keeps_prior_state() {
    let params = Parameters::default();
    let twin = Body::new("twin", NVec2::zeros(), 1.0e24, 5.0, [255, 255, 255]);
    let mut sys = System::new(&params, vec![sun(), twin]).unwrap();
    let before = sys.bodies().to_vec();

    let err = sys.step_frame().unwrap_err();

    assert!(matches!(err, SimError::DegenerateConfiguration { .. }));
    assert_eq!(sys.bodies(), before.as_slice());
    assert_eq!(sys.frames(), 0);
    assert_eq!(sys.elapsed(), 0.0);
}

#[test]
fn non_finite_frame_keeps_prior_state() {
    let params = Parameters::default();
    let heavy = Body::new("heavy", NVec2::zeros(), 1.0e300, 5.0, [255, 255, 255]).as_anchor();
    let close = Body::new("close", NVec2::new(1.0e-10, 0.0), 1.0e300, 5.0, [255, 255, 255]);
    let mut sys = System::new(&params, vec![heavy, close]).unwrap();
    let before = sys.bodies().to_vec();

    let err = sys.step_frame().unwrap_err();

    assert!(matches!(err, SimError::NonFiniteState { .. }), "{err:?}");
    assert_eq!(sys.bodies(), before.as_slice());
    assert_eq!(sys.frames(), 0);
    assert_eq!(sys.elapsed(), 0.0);
}

#[test]
fn system_rejects_invalid_parameters() {
    let params = Parameters { au: 0.0, ..Parameters::default() };
    let err = System::new(&params, vec![sun()]).unwrap_err();
    assert!(matches!(err, SimError::InvalidParameters { field: "au", .. }));
    assert!(Parameters::default().validate().is_ok());
}

#[test]
fn system_rejects_invalid_bodies() {
    let params = Parameters::default();

    let massless = Body::new("dust", NVec2::new(AU, 0.0), 0.0, 1.0, [1, 1, 1]);
    let err = System::new(&params, vec![sun(), massless]).unwrap_err();
    assert!(matches!(err, SimError::InvalidBody { ref name, .. } if name == "dust"));

    let lost = Body::new("lost", NVec2::new(f64::NAN, 0.0), 1.0, 1.0, [1, 1, 1]);
    assert!(matches!(System::new(&params, vec![sun(), lost]), Err(SimError::InvalidBody { .. })));

    assert_eq!(System::new(&params, vec![earth()]).unwrap_err(), SimError::AnchorCount(0));
    assert_eq!(System::new(&params, vec![sun(), sun()]).unwrap_err(), SimError::AnchorCount(2));
}

// ==================================================================================
// Projection and label tests
// ==================================================================================

#[test]
fn projections_center_the_origin() {
    let sys = System::solar(&Parameters::default());

    let sun = sys.body_view(0).unwrap();
    assert_eq!(sun.full, NVec2::new(450.0, 450.0));
    assert_eq!(sun.overview, NVec2::new(208.5, 208.5));
    assert!(sun.label.is_none());

    let earth = sys.body_view(3).unwrap();
    assert!((earth.full - NVec2::new(438.0, 450.0)).norm() < 1e-9);
    assert!((earth.overview - NVec2::new(108.5, 208.5)).norm() < 1e-9);
    assert_eq!(earth.color, [0, 0, 255]);

    let projected = sys.full_projection().project(&sys.bodies()[3].x, AU);
    assert!((projected - earth.full).norm() < 1e-9);
}

#[test]
fn overview_hides_far_bodies() {
    let sys = System::solar(&Parameters::default());
    let overview = sys.overview_projection();

    let mars = sys.body_view(4).unwrap();
    let neptune = sys.body_view(8).unwrap();

    assert!(mars.on_overview(&overview));
    assert!(!neptune.on_overview(&overview));

    assert!(!Projection::visible_hint(&NVec2::new(-25.0, 10.0)));
    assert!(Projection::visible_hint(&NVec2::new(-19.0, 10.0)));
}

#[test]
fn overview_footprint_in_full_view() {
    let footprint = Parameters::default().overview_footprint();
    assert!((footprint[0] - 50.04).abs() < 1e-9);
    assert!((footprint[1] - 50.04).abs() < 1e-9);
}

#[test]
fn labels_report_distance_in_au() {
    let mut sys = System::solar(&Parameters::default());
    assert_eq!(sys.label(1).as_deref(), Some("mercury - 0.000AU"));

    sys.step_frame().unwrap();

    let labels = sys.labels();
    assert_eq!(labels.len(), 8);
    assert_eq!(labels[0], "mercury - 0.387AU");
    assert_eq!(labels[2], "earth - 1.000AU");
    assert_eq!(labels[7], "neptune - 30.130AU");
    assert_eq!(sys.label(0), None);
    assert_eq!(sys.distance_to_anchor_au(3), Some(1.0));
}
