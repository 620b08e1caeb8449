//! Headless consumers of the physics tick
//!
//! Rendering itself lives outside this crate. This module holds what a
//! renderer needs from the core: a cadence-gated driver, a bounded trace
//! history, and viewport bounds.

pub mod observer;
pub mod runner;
pub mod trace;
pub mod viewport;
