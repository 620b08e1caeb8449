//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – cadence periods and trace / viewport options
//! - [`ParametersConfig`] – step size, run length and gravity constant
//! - [`SystemConfig`]     – either gravitating bodies or a pendulum chain
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An N-body scenario:
//!
//! ```yaml
//! name: normal orbit
//! engine:
//!   view_refresh: 4       # redraw every 4th tick
//!   bounds_refit: 4       # refit viewport every 4th tick
//!   trace_sample: 4       # sample trace every 4th tick
//!   trace_length: 2000    # samples kept per body
//! parameters:
//!   dt: 0.05              # fixed step size
//!   steps: 2000           # ticks to run
//!   gravity: 100000.0     # gravitational constant (arbitrary units)
//! system:
//!   kind: gravity
//!   bodies:
//!     - x: [0.0, 0.0]
//!       v: [0.0, 0.0]
//!       m: 1.0
//!       radius: 100.0
//!       stationary: true
//!     - x: [250.0, 250.0]
//!       v: [10.0, -10.0]
//!       m: 0.5
//!       radius: 60.0
//! ```
//!
//! A pendulum chain hangs from `anchor`; each link's hinge is placed at the
//! previous link's free end:
//!
//! ```yaml
//! parameters: { dt: 0.05, steps: 2000, gravity: 9.81 }
//! system:
//!   kind: pendulum
//!   anchor: [0.0, 0.0]
//!   links:
//!     - { length: 100.0, mass: 50.0, angle_deg: -30.0 }
//!     - { length: 50.0, mass: 50.0, angle_deg: 90.0 }
//! ```
//!
//! Angles are in degrees from the +x axis, y pointing down (90 hangs
//! straight down). The engine maps this configuration into its runtime
//! [`Scenario`](crate::Scenario), validating every value on the way.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimResult;

/// Consumer-side options, all independent of the physics timing
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EngineConfig {
    #[serde(default = "default_view_refresh")]
    pub view_refresh: u32, // ticks between redraws
    #[serde(default = "default_bounds_refit")]
    pub bounds_refit: u32, // ticks between viewport refits
    #[serde(default = "default_trace_sample")]
    pub trace_sample: u32, // ticks between trace samples
    #[serde(default = "default_trace_length")]
    pub trace_length: usize, // samples kept per traced point
    #[serde(default)]
    pub auto_fit: bool, // viewport follows every refit
    #[serde(default = "default_zoom")]
    pub zoom: f64, // scale applied to the fitted bounds
}

fn default_view_refresh() -> u32 { 4 }
fn default_bounds_refit() -> u32 { 64 }
fn default_trace_sample() -> u32 { 8 }
fn default_trace_length() -> usize { 2000 }
fn default_zoom() -> f64 { 1.0 }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            view_refresh: default_view_refresh(),
            bounds_refit: default_bounds_refit(),
            trace_sample: default_trace_sample(),
            trace_length: default_trace_length(),
            auto_fit: false,
            zoom: default_zoom(),
        }
    }
}

/// Numerical and physical parameters for a scenario
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    pub dt: f64, // fixed time step
    #[serde(default = "default_steps")]
    pub steps: u64, // ticks to run headless
    pub gravity: f64, // G for gravity systems, g for pendulum chains
}

fn default_steps() -> u64 { 2000 }

/// Initial state of a single body
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position
    #[serde(default)]
    pub v: [f64; 2], // initial velocity
    pub m: f64, // mass, > 0
    #[serde(default)]
    pub radius: f64, // display radius
    #[serde(default)]
    pub stationary: bool, // pinned in place
}

/// Initial state of a single pendulum link
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LinkConfig {
    pub length: f64, // rod length, > 0
    pub mass: f64, // rod mass, > 0
    pub angle_deg: f64, // initial angle in degrees
}

/// Which simulation the scenario runs
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SystemConfig {
    Gravity {
        bodies: Vec<BodyConfig>,
    },
    Pendulum {
        #[serde(default)]
        anchor: [f64; 2],
        links: Vec<LinkConfig>,
    },
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: Option<String>, // label used in logs
    #[serde(default)]
    pub engine: EngineConfig, // cadences and trace / viewport options
    pub parameters: ParametersConfig, // step size, run length, gravity
    pub system: SystemConfig, // initial bodies or chain
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> SimResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_yaml_file(path: &Path) -> SimResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
