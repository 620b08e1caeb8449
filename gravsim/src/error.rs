//! Error type shared by the steppers, scenario builder and config loader
//!
//! Every fallible operation returns [`SimResult`]. A stepper that fails
//! leaves its state untouched, so callers can treat an error as fatal to
//! the run without worrying about half-advanced bodies.

use thiserror::Error;

/// Result alias used across the crate
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// Division by a zero divisor (vector division, coincident bodies)
    #[error("division by zero: {context}")]
    DivisionByZero {
        context: String,
    },

    /// Two bodies share the same initial position
    #[error("bodies {first} and {second} are coincident at ({x}, {y})")]
    CoincidentBodies {
        first: usize,
        second: usize,
        x: f64,
        y: f64,
    },

    /// Mass must be finite and strictly positive
    #[error("invalid mass {mass}: must be finite and > 0")]
    InvalidMass {
        mass: f64,
    },

    /// Link length must be finite and strictly positive
    #[error("invalid length {length}: must be finite and > 0")]
    InvalidLength {
        length: f64,
    },

    /// Cadence period must be at least one tick
    #[error("invalid cadence period {period}: must be > 0")]
    InvalidPeriod {
        period: u32,
    },

    /// Inconsistent scenario configuration
    #[error("configuration error: {message}")]
    Config {
        message: String,
    },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
