//! Core state types for both simulations
//!
//! - `Body` / `System`: point masses for the gravity stepper
//! - `PendulumLink` / `Chain`: rigid rods for the pendulum chain stepper
//!
//! Each collection carries the current simulation time `t`.
//! Construction validates mass and length so that the steppers never see
//! a zero or negative inertia.

use nalgebra::{Point2, Vector2};
use serde::Serialize;

use crate::error::{SimError, SimResult};
use super::vector;

pub type NVec2 = Vector2<f64>;
pub type NPoint2 = Point2<f64>;

fn check_mass(m: f64) -> SimResult<f64> {
    if m.is_finite() && m > 0.0 {
        Ok(m)
    } else {
        Err(SimError::InvalidMass { mass: m })
    }
}

fn check_length(length: f64) -> SimResult<f64> {
    if length.is_finite() && length > 0.0 {
        Ok(length)
    } else {
        Err(SimError::InvalidLength { length })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    pub x: NPoint2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, > 0
    pub radius: f64, // display radius
    pub stationary: bool, // pulls on others but never moves
}

impl Body {
    pub fn new(x: NPoint2, v: NVec2, m: f64, radius: f64) -> SimResult<Self> {
        Ok(Self {
            x,
            v,
            m: check_mass(m)?,
            radius,
            stationary: false,
        })
    }

    /// Same body, pinned in place
    pub fn pinned(mut self) -> Self {
        self.stationary = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, index is identity
    pub t: f64, // time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Reject two bodies sharing a position, which would make the pair force diverge
    pub fn check_coincident(&self) -> SimResult<()> {
        for (i, bi) in self.bodies.iter().enumerate() {
            for (j, bj) in self.bodies.iter().enumerate().skip(i + 1) {
                if bi.x == bj.x {
                    return Err(SimError::CoincidentBodies {
                        first: i,
                        second: j,
                        x: bi.x.x,
                        y: bi.x.y,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Uniform rigid rod hinged at one end
///
/// Angles are measured from the +x axis with y growing downward, so a
/// link at `π/2` hangs straight down. `end_point` and `center` are
/// derived from `(hinge, angle, length)` on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendulumLink {
    pub hinge: NPoint2, // pivot (pt1)
    pub angle: f64, // radians
    pub omega: f64, // angular velocity
    pub alpha: f64, // angular acceleration from the last step
    length: f64,
    mass: f64,
    inertia: f64, // mass * length^2 / 3
}

impl PendulumLink {
    pub fn new(hinge: NPoint2, length: f64, mass: f64, angle: f64) -> SimResult<Self> {
        let length = check_length(length)?;
        let mass = check_mass(mass)?;
        Ok(Self {
            hinge,
            angle,
            omega: 0.0,
            alpha: 0.0,
            length,
            mass,
            inertia: mass * length * length / 3.0,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn moment_of_inertia(&self) -> f64 {
        self.inertia
    }

    /// Point at distance `l` from the hinge along the rod
    pub fn point_at_length(&self, l: f64) -> NPoint2 {
        vector::move_point(self.hinge, vector::from_angle_and_length(self.angle, l))
    }

    /// Free end (pt2)
    pub fn end_point(&self) -> NPoint2 {
        self.point_at_length(self.length)
    }

    /// Center of mass
    pub fn center(&self) -> NPoint2 {
        self.point_at_length(self.length / 2.0)
    }

    /// Gravity torque of this link about `pivot`: weight times horizontal lever arm
    pub fn gravity_torque(&self, pivot: NPoint2, g: f64) -> f64 {
        self.mass * g * (self.center().x - pivot.x)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chain {
    pub links: Vec<PendulumLink>, // base (anchored) to tip
    pub t: f64, // time
}

impl Chain {
    pub fn new(links: Vec<PendulumLink>) -> Self {
        Self { links, t: 0.0 }
    }

    /// Build a chain hanging from `anchor`, each hinge placed at the previous free end
    ///
    /// `specs` holds `(length, mass, angle)` per link, base first.
    pub fn from_specs(anchor: NPoint2, specs: &[(f64, f64, f64)]) -> SimResult<Self> {
        let mut links: Vec<PendulumLink> = Vec::with_capacity(specs.len());
        let mut hinge = anchor;
        for &(length, mass, angle) in specs {
            let link = PendulumLink::new(hinge, length, mass, angle)?;
            hinge = link.end_point();
            links.push(link);
        }
        Ok(Self::new(links))
    }

    /// Fixed pivot of the first link, if any
    pub fn anchor(&self) -> Option<NPoint2> {
        self.links.first().map(|l| l.hinge)
    }

    /// Free end of the last link
    pub fn tip(&self) -> Option<NPoint2> {
        self.links.last().map(PendulumLink::end_point)
    }

    /// Anchor followed by every link's free end
    pub fn joints(&self) -> Vec<NPoint2> {
        let mut out = Vec::with_capacity(self.links.len() + 1);
        if let Some(anchor) = self.anchor() {
            out.push(anchor);
        }
        out.extend(self.links.iter().map(PendulumLink::end_point));
        out
    }
}
