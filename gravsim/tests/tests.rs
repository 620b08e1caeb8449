use std::f64::consts::FRAC_PI_2;
use std::path::PathBuf;

use gravsim::simulation::vector;
use gravsim::{Body, Bounds, Cadence, Chain, ForceSet, Model, NPoint2, NVec2, NewtonianGravity, Observer};
use gravsim::{Parameters, PendulumLink, Preset, Runner, Scenario, ScenarioConfig, SimError, System, Trace};
use gravsim::{chain_step, gravity_step, link_torque, pair_force, symplectic_euler};

/// Body at (x, y) with velocity (vx, vy)
pub fn body(x: f64, y: f64, vx: f64, vy: f64, m: f64) -> Body {
    Body::new(NPoint2::new(x, y), NVec2::new(vx, vy), m, 1.0).unwrap()
}

/// The pinned-sun / light-planet pair used for the golden value
pub fn sun_and_planet() -> Vec<Body> {
    vec![
        body(0.0, 0.0, 0.0, 0.0, 1.0).pinned(),
        body(250.0, 250.0, 10.0, -10.0, 0.5),
    ]
}

/// Chain hanging from the origin with the given (length, mass, angle) links
pub fn chain(specs: &[(f64, f64, f64)]) -> Chain {
    Chain::from_specs(NPoint2::origin(), specs).unwrap()
}

pub fn triple_chain() -> Chain {
    chain(&[
        (100.0, 50.0, (-30.0f64).to_radians()),
        (50.0, 50.0, FRAC_PI_2),
        (50.0, 50.0, FRAC_PI_2),
    ])
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
}

// ==================================================================================
// Vector tests
// ==================================================================================

#[test]
fn vector_polar_construction() {
    let v = vector::from_angle_and_length(FRAC_PI_2, 2.0);
    assert!(v.x.abs() < 1e-12);
    assert!(close(v.y, 2.0, 1e-12));

    let back = vector::from_angle_and_length(vector::angle(v), vector::length(v));
    assert!(close(back.x, v.x, 1e-12) && close(back.y, v.y, 1e-12));
}

#[test]
fn vector_two_points_and_move() {
    let a = NPoint2::new(1.0, 2.0);
    let b = NPoint2::new(4.0, -2.0);
    let d = vector::from_two_points(a, b);
    assert_eq!(d, NVec2::new(3.0, -4.0));
    assert_eq!(vector::length(d), 5.0);
    assert_eq!(vector::move_point(a, d), b);
}

#[test]
fn vector_arithmetic() {
    let u = NVec2::new(1.0, 2.0);
    let v = NVec2::new(3.0, -1.0);
    assert_eq!(vector::add(u, v), NVec2::new(4.0, 1.0));
    assert_eq!(vector::scale(u, 3.0), NVec2::new(3.0, 6.0));
    assert_eq!(vector::reverse(u), NVec2::new(-1.0, -2.0));
    assert_eq!(vector::dot(u, v), 1.0);
    assert_eq!(vector::cross(u, v), -7.0);
    assert_eq!(vector::cross(v, u), 7.0);
    assert_eq!(vector::divide(u, 2.0).unwrap(), NVec2::new(0.5, 1.0));
}

#[test]
fn vector_divide_by_zero_is_an_error() {
    let err = vector::divide(NVec2::new(1.0, 1.0), 0.0).unwrap_err();
    assert!(matches!(err, SimError::DivisionByZero { .. }));
}

#[test]
fn vector_sum() {
    assert_eq!(vector::sum(Vec::new()), NVec2::zeros());
    let total = vector::sum([NVec2::new(1.0, 2.0), NVec2::new(-3.0, 1.0), NVec2::new(0.5, 0.5)]);
    assert_eq!(total, NVec2::new(-1.5, 3.5));
}

// ==================================================================================
// Cadence tests
// ==================================================================================

fn firing_calls(period: u32, calls: u32) -> Vec<u32> {
    let mut cadence = Cadence::new(period).unwrap();
    (1..=calls).filter(|_| cadence.tick()).collect()
}

#[test]
fn cadence_period_one_fires_every_call() {
    assert_eq!(firing_calls(1, 5), vec![1, 2, 3, 4, 5]);
}

#[test]
fn cadence_fires_on_last_call_of_each_cycle() {
    assert_eq!(firing_calls(4, 12), vec![4, 8, 12]);
}

#[test]
fn cadence_period_thousand() {
    let mut cadence = Cadence::new(1000).unwrap();
    for _ in 1..1000 {
        assert!(!cadence.tick());
    }
    assert!(cadence.tick());
    assert_eq!(cadence.period(), 1000);
    assert_eq!(cadence.remaining(), 1000);
    for _ in 1..1000 {
        assert!(!cadence.tick());
    }
    assert!(cadence.tick());
}

#[test]
fn cadence_rejects_zero_period() {
    assert!(matches!(Cadence::new(0), Err(SimError::InvalidPeriod { period: 0 })));
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_pair_force_equal_and_opposite() {
    let a = body(-3.0, 1.0, 0.0, 0.0, 2.0);
    let b = body(5.0, 7.0, 0.0, 0.0, 3.0);
    let g = 100000.0;

    let f_ab = pair_force(&a, &b, g).unwrap();
    let f_ba = pair_force(&b, &a, g).unwrap();
    let rev = vector::reverse(f_ba);

    assert!(close(f_ab.x, rev.x, 1e-12), "{f_ab:?} vs {rev:?}");
    assert!(close(f_ab.y, rev.y, 1e-12), "{f_ab:?} vs {rev:?}");
    // 100000 * 2 * 3 / (8^2 + 6^2)
    assert!(close(vector::length(f_ab), 6000.0, 1e-12));
    // points from a toward b
    assert!(vector::dot(f_ab, vector::from_two_points(a.x, b.x)) > 0.0);
}

#[test]
fn gravity_net_momentum_change_is_zero() {
    let mut bodies = vec![
        body(0.0, 0.0, 1.0, 0.0, 1.0),
        body(100.0, 0.0, 0.0, 2.0, 2.0),
        body(30.0, -70.0, -1.0, 0.0, 0.5),
    ];
    let momentum = |bs: &[Body]| vector::sum(bs.iter().map(|b| vector::scale(b.v, b.m)));
    let before = momentum(&bodies[..]);

    gravity_step(&mut bodies, 0.05, 100000.0).unwrap();

    let after = momentum(&bodies[..]);
    assert!(vector::length(after - before) < 1e-9, "{before:?} -> {after:?}");
}

#[test]
fn gravity_golden_value() {
    let mut bodies = sun_and_planet();
    let (g, dt) = (100000.0, 0.05);

    gravity_step(&mut bodies, dt, g).unwrap();

    let force = g * 1.0 * 0.5 / (250.0f64 * 250.0 + 250.0 * 250.0);
    let toward_sun = vector::from_angle_and_length((-250.0f64).atan2(-250.0), force);
    let v = vector::add(NVec2::new(10.0, -10.0), vector::scale(vector::scale(toward_sun, 1.0 / 0.5), dt));
    let expected = vector::move_point(NPoint2::new(250.0, 250.0), vector::scale(v, dt));

    let b = &bodies[1];
    assert!(close(b.x.x, expected.x, 1e-12), "{:?} vs {:?}", b.x, expected);
    assert!(close(b.x.y, expected.y, 1e-12), "{:?} vs {:?}", b.x, expected);
    assert!(close(b.v.x, v.x, 1e-12) && close(b.v.y, v.y, 1e-12));

    // Hand-computed: |a| = 0.8 toward the origin
    assert!((b.x.x - 250.498_585_786).abs() < 1e-6);
    assert!((b.x.y - 249.498_585_786).abs() < 1e-6);
}

#[test]
fn gravity_stationary_body_never_moves() {
    let mut bodies = vec![
        body(0.0, 0.0, 3.0, -2.0, 5.0).pinned(),
        body(200.0, 0.0, 0.0, 15.0, 1.0),
        body(-150.0, 80.0, 5.0, 5.0, 2.0),
    ];
    let pinned = bodies[0].clone();

    for _ in 0..500 {
        gravity_step(&mut bodies, 0.05, 100000.0).unwrap();
    }

    assert_eq!(bodies[0].x, pinned.x);
    assert_eq!(bodies[0].v, pinned.v);
    assert_ne!(bodies[1].x, NPoint2::new(200.0, 0.0));
}

#[test]
fn gravity_uses_updated_velocity_for_position() {
    // Explicit Euler would leave x at 100 + 0 * dt; symplectic moves it by a*dt^2
    let mut bodies = vec![
        body(0.0, 0.0, 0.0, 0.0, 1.0).pinned(),
        body(100.0, 0.0, 0.0, 0.0, 1.0),
    ];
    let dt = 0.1;
    gravity_step(&mut bodies, dt, 10000.0).unwrap();

    // a = 10000 / 100^2 = 1 toward the origin
    assert!(close(bodies[1].v.x, -0.1, 1e-12));
    assert!(close(bodies[1].x.x, 100.0 - 0.01, 1e-12));
    assert!(bodies[1].x.y.abs() < 1e-12);
}

#[test]
fn gravity_coincident_bodies_error_and_leave_state_untouched() {
    let mut bodies = vec![
        body(10.0, 10.0, 1.0, 0.0, 1.0),
        body(10.0, 10.0, 0.0, 1.0, 1.0),
        body(50.0, 50.0, 0.0, 0.0, 1.0),
    ];
    let before = bodies.clone();

    let err = gravity_step(&mut bodies, 0.05, 100000.0).unwrap_err();

    assert!(matches!(err, SimError::DivisionByZero { .. }));
    assert_eq!(bodies, before);
}

#[test]
fn gravity_single_body_drifts() {
    let mut bodies = vec![body(0.0, 0.0, 2.0, 1.0, 1.0)];
    gravity_step(&mut bodies, 0.5, 100000.0).unwrap();
    assert_eq!(bodies[0].x, NPoint2::new(1.0, 0.5));
}

#[test]
fn gravity_symplectic_orbit_stays_bound() {
    let mut sys = System::new(sun_and_planet());
    let forces = ForceSet::new().with(NewtonianGravity { g: 100000.0 });
    let params = Parameters { dt: 0.05, steps: 4000, gravity: 100000.0 };

    let mut min_r = f64::MAX;
    let mut max_r: f64 = 0.0;
    for _ in 0..params.steps {
        symplectic_euler(&mut sys, &forces, &params).unwrap();
        let r = vector::length(vector::from_two_points(sys.bodies[0].x, sys.bodies[1].x));
        min_r = min_r.min(r);
        max_r = max_r.max(r);
    }

    assert!(close(sys.t, 200.0, 1e-9));
    assert!(min_r > 150.0, "periapsis collapsed to {min_r}");
    assert!(max_r < 400.0, "apoapsis grew to {max_r}");
}

#[test]
fn body_rejects_bad_mass() {
    for m in [0.0, -1.0, f64::NAN] {
        let r = Body::new(NPoint2::origin(), NVec2::zeros(), m, 1.0);
        assert!(matches!(r, Err(SimError::InvalidMass { .. })), "mass {m}");
    }
}

// ==================================================================================
// Pendulum tests
// ==================================================================================

#[test]
fn link_geometry() {
    let link = PendulumLink::new(NPoint2::new(1.0, 1.0), 10.0, 3.0, FRAC_PI_2).unwrap();
    assert!(close(link.end_point().x, 1.0, 1e-12));
    assert!(close(link.end_point().y, 11.0, 1e-12));
    assert!(close(link.center().y, 6.0, 1e-12));
    assert_eq!(link.moment_of_inertia(), 3.0 * 100.0 / 3.0);
}

#[test]
fn link_rejects_bad_length_and_mass() {
    assert!(matches!(
        PendulumLink::new(NPoint2::origin(), 0.0, 1.0, 0.0),
        Err(SimError::InvalidLength { .. })
    ));
    assert!(matches!(
        PendulumLink::new(NPoint2::origin(), 1.0, -2.0, 0.0),
        Err(SimError::InvalidMass { .. })
    ));
}

#[test]
fn chain_from_specs_connects_hinges() {
    let c = triple_chain();
    assert_eq!(c.anchor(), Some(NPoint2::origin()));
    for i in 1..c.links.len() {
        assert_eq!(c.links[i].hinge, c.links[i - 1].end_point());
    }
    assert_eq!(c.joints().len(), 4);
}

#[test]
fn single_link_matches_physical_pendulum() {
    let (length, mass, g, dt) = (100.0, 50.0, 9.81, 0.05);
    let theta: f64 = 0.01; // deviation from hanging straight down
    let mut c = chain(&[(length, mass, FRAC_PI_2 + theta)]);
    let inertia = c.links[0].moment_of_inertia();

    chain_step(&mut c.links, dt, g);

    let expected = -mass * g * (length / 2.0) * theta.sin() / inertia;
    let link = &c.links[0];
    assert!(close(link.alpha, expected, 1e-9), "{} vs {}", link.alpha, expected);
    assert!(close(link.omega, expected * dt, 1e-9));
    assert!(close(link.angle, FRAC_PI_2 + theta + expected * dt * dt, 1e-12));
    assert_eq!(link.hinge, NPoint2::origin());
}

#[test]
fn hanging_chain_stays_at_rest() {
    let mut c = chain(&[(10.0, 1.0, FRAC_PI_2), (10.0, 1.0, FRAC_PI_2)]);
    for _ in 0..100 {
        chain_step(&mut c.links, 0.05, 9.81);
    }
    for link in &c.links {
        assert!((link.angle - FRAC_PI_2).abs() < 1e-9);
        assert!(link.omega.abs() < 1e-9);
    }
}

#[test]
fn chain_hinges_follow_parent_tips_exactly() {
    let mut c = triple_chain();
    let anchor = c.links[0].hinge;

    for _ in 0..200 {
        chain_step(&mut c.links, 0.05, 9.81);
        assert_eq!(c.links[0].hinge, anchor);
        for i in 1..c.links.len() {
            assert_eq!(c.links[i].hinge, c.links[i - 1].end_point());
        }
    }
    for link in &c.links {
        assert!(link.angle.is_finite() && link.omega.is_finite() && link.alpha.is_finite());
    }
}

#[test]
fn chain_torques_read_pre_step_configuration() {
    let mut c = triple_chain();
    let g = 9.81;
    let expected: Vec<f64> = (0..c.links.len())
        .map(|i| link_torque(&c.links, i, g) / c.links[i].moment_of_inertia())
        .collect();

    chain_step(&mut c.links, 0.05, g);

    for (link, alpha) in c.links.iter().zip(expected) {
        assert_eq!(link.alpha, alpha);
    }
}

#[test]
fn chain_inertial_term_uses_parent_acceleration() {
    let mut c = chain(&[(20.0, 2.0, FRAC_PI_2), (10.0, 1.0, 0.0)]);
    let g = 9.81;
    let gravity_only = c.links[1].gravity_torque(c.links[1].hinge, g);
    assert_eq!(link_torque(&c.links, 1, g), gravity_only);

    // Parent at pi/2 with alpha 1: tip accelerates along pi, i.e. (-20, 0)
    c.links[0].alpha = 1.0;
    let child = &c.links[1];
    let inertia_force = vector::scale(NVec2::new(-20.0, 0.0), -child.mass());
    let r = vector::from_two_points(child.hinge, child.center());
    let expected = gravity_only - vector::cross(r, inertia_force);
    assert!(close(link_torque(&c.links, 1, g), expected, 1e-12));
}

#[test]
fn empty_chain_step_is_noop() {
    let mut links: Vec<PendulumLink> = Vec::new();
    chain_step(&mut links, 0.05, 9.81);
    assert!(links.is_empty());
}

// ==================================================================================
// Configuration and scenario tests
// ==================================================================================

const CHAIN_YAML: &str = r#"
name: yaml chain
parameters:
  dt: 0.02
  gravity: 9.81
system:
  kind: pendulum
  anchor: [5.0, 5.0]
  links:
    - { length: 10.0, mass: 1.0, angle_deg: 90.0 }
    - { length: 5.0, mass: 2.0, angle_deg: 0.0 }
"#;

#[test]
fn config_parses_pendulum_yaml_with_defaults() {
    let cfg = ScenarioConfig::from_yaml_str(CHAIN_YAML).unwrap();
    assert_eq!(cfg.engine.view_refresh, 4);
    assert_eq!(cfg.engine.bounds_refit, 64);
    assert_eq!(cfg.engine.trace_sample, 8);
    assert_eq!(cfg.parameters.steps, 2000);

    let scenario = Scenario::build_scenario(cfg).unwrap();
    let Model::Pendulum(c) = &scenario.model else {
        panic!("expected a pendulum model");
    };
    assert_eq!(c.links.len(), 2);
    assert_eq!(c.links[0].hinge, NPoint2::new(5.0, 5.0));
    assert_eq!(c.links[1].hinge, c.links[0].end_point());
    assert_eq!(scenario.trace_points().len(), 1);
}

#[test]
fn config_rejects_unknown_kind() {
    let yaml = "parameters: { dt: 0.1, gravity: 1.0 }\nsystem: { kind: springs }\n";
    assert!(matches!(ScenarioConfig::from_yaml_str(yaml), Err(SimError::Yaml(_))));
}

#[test]
fn scenario_files_load() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for file in ["normal_orbit.yaml", "triple_pendulum.yaml"] {
        let cfg = ScenarioConfig::from_yaml_file(&dir.join(file)).unwrap();
        Scenario::build_scenario(cfg).unwrap();
    }
}

#[test]
fn every_preset_builds() {
    for preset in [
        Preset::NormalOrbit,
        Preset::Elongated,
        Preset::Chasing,
        Preset::AroundTheSun,
        Preset::ThreeBody,
        Preset::TriplePendulum,
    ] {
        let mut scenario = Scenario::build_scenario(preset.config()).unwrap();
        scenario.step().unwrap();
        assert!(scenario.time() > 0.0);
    }
}

#[test]
fn scenario_rejects_coincident_bodies() {
    let mut cfg = Preset::Chasing.config();
    if let gravsim::SystemConfig::Gravity { bodies } = &mut cfg.system {
        bodies[1].x = bodies[0].x;
    }
    let err = Scenario::build_scenario(cfg).err().unwrap();
    assert!(matches!(err, SimError::CoincidentBodies { first: 0, second: 1, .. }));
}

#[test]
fn scenario_rejects_bad_parameters() {
    let mut cfg = Preset::NormalOrbit.config();
    cfg.parameters.dt = 0.0;
    assert!(matches!(Scenario::build_scenario(cfg), Err(SimError::Config { .. })));

    let mut cfg = Preset::NormalOrbit.config();
    cfg.engine.trace_sample = 0;
    assert!(matches!(Scenario::build_scenario(cfg), Err(SimError::InvalidPeriod { .. })));

    let mut cfg = Preset::TriplePendulum.config();
    if let gravsim::SystemConfig::Pendulum { links, .. } = &mut cfg.system {
        links[2].mass = 0.0;
    }
    assert!(matches!(Scenario::build_scenario(cfg), Err(SimError::InvalidMass { .. })));

    let mut cfg = Preset::TriplePendulum.config();
    if let gravsim::SystemConfig::Pendulum { links, .. } = &mut cfg.system {
        links.clear();
    }
    assert!(matches!(Scenario::build_scenario(cfg), Err(SimError::Config { .. })));
}

// ==================================================================================
// Runner tests
// ==================================================================================

#[derive(Default)]
struct Counting {
    redraw_ticks: Vec<u64>,
    refits: usize,
    samples: usize,
    last_points: usize,
}

impl Observer for Counting {
    fn on_redraw(&mut self, tick: u64, points: &[NPoint2]) {
        self.redraw_ticks.push(tick);
        self.last_points = points.len();
    }

    fn on_refit(&mut self, _bounds: &Bounds, follow: bool) {
        assert!(!follow);
        self.refits += 1;
    }

    fn on_trace(&mut self, _trace: &Trace) {
        self.samples += 1;
    }
}

#[test]
fn runner_gates_observer_by_cadence() {
    let scenario = Scenario::build_scenario(Preset::TriplePendulum.config()).unwrap();
    let mut runner = Runner::new(scenario).unwrap();
    let mut obs = Counting::default();

    runner.run(128, &mut obs).unwrap();

    assert_eq!(runner.ticks(), 128);
    assert_eq!(obs.redraw_ticks.len(), 32);
    assert_eq!(obs.redraw_ticks[0], 4);
    assert_eq!(obs.refits, 2);
    assert_eq!(obs.samples, 16);
    assert_eq!(obs.last_points, 4);
    assert_eq!(runner.trace().tracks().len(), 1);
    assert!(close(runner.scenario.time(), 128.0 * 0.05, 1e-9));
}

#[test]
fn runner_trace_is_bounded() {
    let mut cfg = Preset::AroundTheSun.config();
    cfg.engine.trace_sample = 1;
    cfg.engine.trace_length = 10;
    let mut runner = Runner::new(Scenario::build_scenario(cfg).unwrap()).unwrap();

    runner.run(25, &mut gravsim::NullObserver).unwrap();

    assert_eq!(runner.trace().max_len(), 10);
    assert_eq!(runner.trace().tracks().len(), 3);
    for track in runner.trace().tracks() {
        assert_eq!(track.len(), 10);
    }
}

#[test]
fn trace_drops_oldest_samples() {
    let mut trace = Trace::new(3);
    for i in 0..5 {
        trace.push(&[NPoint2::new(i as f64, 0.0)]);
    }
    let xs: Vec<f64> = trace.tracks()[0].iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![2.0, 3.0, 4.0]);
}

#[test]
fn bounds_fit_square_around_points() {
    let pts = [NPoint2::new(0.0, 0.0), NPoint2::new(10.0, 4.0)];
    let b = Bounds::fit(&pts, 1.0).unwrap();
    assert_eq!(b.center(), NPoint2::new(5.0, 2.0));
    assert_eq!(b.min, NPoint2::new(-5.0, -8.0));
    assert_eq!(b.max, NPoint2::new(15.0, 12.0));

    let zoomed = Bounds::fit(&pts, 2.0).unwrap();
    assert_eq!(zoomed.width(), 40.0);
    assert!(Bounds::fit(&[] as &[NPoint2], 1.0).is_none());
}
