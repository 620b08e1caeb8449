//! Fixed-step stepper for a chain of rigid pendulum links
//!
//! Two phases per step:
//! 1. every link's new `(angle, omega, alpha)` is computed from the
//!    pre-step configuration, base to tip
//! 2. the new values are applied and each hinge is moved onto the
//!    previous link's free end, root first
//!
//! The torque on link `i` is the gravity torque of links `i..N` about
//! hinge `i`, minus an inertial term from the parent link's angular
//! acceleration of the previous step. This is a planar approximation,
//! not a full multi-link Lagrangian.

use std::f64::consts::FRAC_PI_2;

use super::states::{Chain, PendulumLink};
use super::params::Parameters;
use super::vector;

/// New angular state of one link, computed before anything is applied
#[derive(Debug, Clone, Copy)]
struct LinkUpdate {
    angle: f64,
    omega: f64,
    alpha: f64,
}

/// Advance the chain by one step using `params.dt` and `params.gravity`, then advance `chain.t`
pub fn chain_integrator(chain: &mut Chain, params: &Parameters) {
    chain_step(&mut chain.links, params.dt, params.gravity);
    chain.t += params.dt;
}

/// Advance `links` (base to tip) by one step of `dt` under gravitational acceleration `g`
pub fn chain_step(links: &mut [PendulumLink], dt: f64, g: f64) {
    let updates: Vec<LinkUpdate> = (0..links.len())
        .map(|i| link_update(links, i, dt, g))
        .collect();

    for (link, u) in links.iter_mut().zip(updates.iter()) {
        link.angle = u.angle;
        link.omega = u.omega;
        link.alpha = u.alpha;
    }

    // Hinge propagation, strictly after every angle is final
    for i in 1..links.len() {
        links[i].hinge = links[i - 1].end_point();
    }

    log::trace!("chain step: {} links, dt = {dt}", links.len());
}

/// Net torque about link `i`'s hinge for the current configuration
pub fn link_torque(links: &[PendulumLink], i: usize, g: f64) -> f64 {
    let current = &links[i];
    let pivot = current.hinge;

    // Gravity of this link and everything hanging below it
    let mut torque: f64 = links[i..].iter().map(|l| l.gravity_torque(pivot, g)).sum();

    if i > 0 {
        // Parent tip accelerates tangentially; feed that back as an inertial force
        let previous = &links[i - 1];
        let linear_accel = previous.alpha * previous.length();
        let accel = vector::from_angle_and_length(previous.angle + FRAC_PI_2, linear_accel);
        let inertia_force = vector::scale(accel, -current.mass());
        let r = vector::from_two_points(current.hinge, current.center());
        torque -= vector::cross(r, inertia_force);
    }

    torque
}

fn link_update(links: &[PendulumLink], i: usize, dt: f64, g: f64) -> LinkUpdate {
    let current = &links[i];
    let alpha = link_torque(links, i, g) / current.moment_of_inertia();
    let omega = current.omega + alpha * dt;
    let angle = current.angle + omega * dt;
    LinkUpdate { angle, omega, alpha }
}
