//! Number of real particles represented by each macro-particle.

use super::{DerivedAttribute, Evaluate, UnitDimension};
use crate::particle::{FieldId, Position, Weighting};
use crate::species::{Carries, Species};

/// Counts real particles: each macro-particle contributes its weighting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter;

impl DerivedAttribute for Counter {
    const NAME: &'static str = "Counter";
    const REQUIRED: &'static [FieldId] = &[FieldId::Position, FieldId::Weighting];

    fn unit_dimension(&self) -> UnitDimension {
        UnitDimension::DIMENSIONLESS
    }
}

impl<S> Evaluate<S> for Counter
where
    S: Species + Carries<Position> + Carries<Weighting>,
{
    fn evaluate(&self, particle: &S) -> f64 {
        particle.get::<Weighting>().value
    }
}
