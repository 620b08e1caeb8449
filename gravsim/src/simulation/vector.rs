//! Free functions over 2D vectors and points
//!
//! Thin value-semantics layer over `nalgebra` used by both steppers.
//! Nothing here mutates its arguments; every function returns a new value.

use crate::error::{SimError, SimResult};
use super::states::{NPoint2, NVec2};

/// Vector of length `r` pointing along `theta` (radians)
pub fn from_angle_and_length(theta: f64, r: f64) -> NVec2 {
    NVec2::new(r * theta.cos(), r * theta.sin())
}

/// Displacement from `a` to `b`
pub fn from_two_points(a: NPoint2, b: NPoint2) -> NVec2 {
    NVec2::new(b.x - a.x, b.y - a.y)
}

/// Point `p` moved by `u`
pub fn move_point(p: NPoint2, u: NVec2) -> NPoint2 {
    NPoint2::new(p.x + u.x, p.y + u.y)
}

pub fn add(u: NVec2, v: NVec2) -> NVec2 {
    NVec2::new(u.x + v.x, u.y + v.y)
}

pub fn scale(u: NVec2, k: f64) -> NVec2 {
    NVec2::new(u.x * k, u.y * k)
}

/// Componentwise division, rejecting a zero divisor instead of yielding inf/NaN
pub fn divide(u: NVec2, k: f64) -> SimResult<NVec2> {
    if k == 0.0 {
        return Err(SimError::division_by_zero(format!(
            "vector ({}, {}) divided by 0",
            u.x, u.y
        )));
    }
    Ok(NVec2::new(u.x / k, u.y / k))
}

pub fn reverse(u: NVec2) -> NVec2 {
    NVec2::new(-u.x, -u.y)
}

pub fn length(u: NVec2) -> f64 {
    u.x.hypot(u.y)
}

/// Direction of `u` in radians, `atan2(dy, dx)`
pub fn angle(u: NVec2) -> f64 {
    u.y.atan2(u.x)
}

pub fn dot(u: NVec2, v: NVec2) -> f64 {
    u.x * v.x + u.y * v.y
}

/// Scalar 2D cross product `u.dx * v.dy - u.dy * v.dx`
pub fn cross(u: NVec2, v: NVec2) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Componentwise sum, `(0, 0)` for an empty input
pub fn sum<I>(vectors: I) -> NVec2
where
    I: IntoIterator<Item = NVec2>,
{
    vectors.into_iter().fold(NVec2::zeros(), add)
}
