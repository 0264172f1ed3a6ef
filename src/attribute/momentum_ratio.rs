//! Ratio of one momentum component to the magnitude of the momentum.

use super::{DerivedAttribute, Evaluate, UnitDimension};
use crate::particle::{FieldId, Momentum, Position};
use crate::species::{Carries, Species};
use nalgebra::Vector3;

/// The direction cosine `p[D] / |p|` of a particle's momentum along axis `D`.
///
/// A particle at rest has no preferred direction and yields exactly zero.
///
/// `D` is 0, 1 or 2 for the x, y and z axes. Any other value fails to build as
/// soon as the attribute is used, including through its name or field list:
///
/// ```compile_fail
/// use plasmecs::attribute::momentum_ratio::MomentumRatio;
/// use plasmecs::attribute::species_is_eligible;
/// use plasmecs::species::Electron;
///
/// assert!(species_is_eligible::<Electron, MomentumRatio<3>>());
/// ```
///
/// ```compile_fail
/// use plasmecs::attribute::momentum_ratio::MomentumRatio;
/// use plasmecs::attribute::DerivedAttribute;
///
/// println!("{}", MomentumRatio::<7>.name());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MomentumRatio<const D: usize>;

impl<const D: usize> MomentumRatio<D> {
    const VALID_AXIS: () = assert!(
        D < 3,
        "MomentumRatio axis must be 0 (x), 1 (y) or 2 (z)"
    );

    /// The momentum axis this attribute is projected on.
    pub fn axis(&self) -> usize {
        let () = Self::VALID_AXIS;
        D
    }

    /// Calculates `p[D] / |p|`, or zero if `p` is the zero vector.
    pub fn ratio(momentum: &Vector3<f64>) -> f64 {
        let () = Self::VALID_AXIS;
        // Scale by the largest component so that the norm neither over- nor underflows.
        let largest = momentum.amax();
        if largest > 0.0 {
            let scaled = *momentum / largest;
            scaled[D] / scaled.norm()
        } else {
            0.0
        }
    }
}

impl<const D: usize> DerivedAttribute for MomentumRatio<D> {
    const NAME: &'static str = {
        let () = Self::VALID_AXIS;
        "MomentumComponent"
    };
    const REQUIRED: &'static [FieldId] = {
        let () = Self::VALID_AXIS;
        &[FieldId::Position, FieldId::Momentum]
    };

    fn unit_dimension(&self) -> UnitDimension {
        let () = Self::VALID_AXIS;
        UnitDimension::DIMENSIONLESS
    }
}

impl<S, const D: usize> Evaluate<S> for MomentumRatio<D>
where
    S: Species + Carries<Position> + Carries<Momentum>,
{
    fn evaluate(&self, particle: &S) -> f64 {
        Self::ratio(&particle.get::<Momentum>().mom)
    }
}
