//! Per-particle fields that a species can store.
//!
//! Each field is a distinct type, so that a species declares what it stores by
//! the types of its members rather than by name alone.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Stable identifier of a per-particle field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    Position,
    Momentum,
    Weighting,
}

/// A value stored once per particle.
pub trait ParticleField: Copy + Send + Sync + 'static {
    const ID: FieldId;
}

/// Position of a particle in space, with respect to cartesian x,y,z axes.
///
/// SI units (metres)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub pos: Vector3<f64>,
}
impl ParticleField for Position {
    const ID: FieldId = FieldId::Position;
}
impl Default for Position {
    fn default() -> Self {
        Position {
            pos: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

/// Momentum of a single real particle, with respect to cartesian x,y,z axes.
///
/// SI units (kg m/s)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Momentum {
    pub mom: Vector3<f64>,
}
impl ParticleField for Momentum {
    const ID: FieldId = FieldId::Momentum;
}
impl Default for Momentum {
    fn default() -> Self {
        Momentum {
            mom: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

/// Number of real particles represented by one macro-particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weighting {
    pub value: f64,
}
impl ParticleField for Weighting {
    const ID: FieldId = FieldId::Weighting;
}
impl Default for Weighting {
    fn default() -> Self {
        Weighting { value: 1.0 }
    }
}
