//! Fixed-step symplectic Euler integrator for the N-body system
//!
//! Forces are gathered for the whole system first, then every body is
//! kicked and drifted. A failure while gathering forces returns before
//! any body has moved.

use super::states::{Body, NVec2, System};
use super::forces::{ForceSet, NewtonianGravity};
use super::params::Parameters;
use super::vector;
use crate::error::SimResult;

/// Advance the system by one step of semi-implicit Euler
/// v_n+1 = v_n + dt * F_n / m
/// x_n+1 = x_n + dt * v_n+1
/// Stationary bodies are skipped, `sys.t` advances by `params.dt`
pub fn symplectic_euler(sys: &mut System, forces: &ForceSet, params: &Parameters) -> SimResult<()> {
    advance_bodies(&mut sys.bodies, forces, params.dt)?;
    sys.t += params.dt;
    Ok(())
}

/// Advance `bodies` under mutual Newtonian gravity by one step of `dt`
pub fn gravity_step(bodies: &mut [Body], dt: f64, g: f64) -> SimResult<()> {
    let forces = ForceSet::new().with(NewtonianGravity { g });
    advance_bodies(bodies, &forces, dt)
}

fn advance_bodies(bodies: &mut [Body], forces: &ForceSet, dt: f64) -> SimResult<()> {
    let n = bodies.len();
    if n == 0 { // no bodies, return
        return Ok(());
    }

    // Net force per body, index-aligned with `bodies`, from the pre-step positions
    let mut net = vec![NVec2::zeros(); n];
    forces.accumulate_forces(bodies, &mut net)?;

    // a = F / m for every moving body before touching any state
    let mut accel = vec![NVec2::zeros(); n];
    for ((a, f), b) in accel.iter_mut().zip(net.iter()).zip(bodies.iter()) {
        if !b.stationary {
            *a = vector::divide(*f, b.m)?;
        }
    }

    for (b, a) in bodies.iter_mut().zip(accel.iter()) {
        if b.stationary {
            continue;
        }
        // Kick, then drift with the updated velocity
        b.v = vector::add(b.v, vector::scale(*a, dt));
        b.x = vector::move_point(b.x, vector::scale(b.v, dt));
    }

    log::trace!("gravity step: {n} bodies, dt = {dt}");
    Ok(())
}
