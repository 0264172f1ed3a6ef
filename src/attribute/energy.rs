//! Kinetic energy of macro-particles.

use super::{DerivedAttribute, Evaluate, UnitDimension};
use crate::constant::C;
use crate::particle::{FieldId, Momentum, Position, Weighting};
use crate::species::{Carries, Species};

/// Kinetic energy of a macro-particle, `w (sqrt(p^2 c^2 + m^2 c^4) - m c^2)`, in Joules.
///
/// `p` is the momentum of one real particle and `w` the weighting. The energy
/// is evaluated as `w p^2 c^2 / (sqrt(p^2 c^2 + m^2 c^4) + m c^2)`, which stays
/// accurate for non-relativistic particles where the direct difference cancels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Energy;

impl Energy {
    /// Kinetic energy of a single particle with momentum magnitude `p` and rest mass `mass`.
    pub fn kinetic_energy(p: f64, mass: f64) -> f64 {
        let pc = p * C;
        if pc == 0.0 {
            return 0.0;
        }
        let rest_energy = mass * C * C;
        pc * pc / ((pc * pc + rest_energy * rest_energy).sqrt() + rest_energy)
    }
}

impl DerivedAttribute for Energy {
    const NAME: &'static str = "Energy";
    const REQUIRED: &'static [FieldId] =
        &[FieldId::Position, FieldId::Momentum, FieldId::Weighting];

    fn unit_dimension(&self) -> UnitDimension {
        let mut dim = UnitDimension::DIMENSIONLESS;
        dim.0[UnitDimension::LENGTH] = 2.0;
        dim.0[UnitDimension::MASS] = 1.0;
        dim.0[UnitDimension::TIME] = -2.0;
        dim
    }
}

impl<S> Evaluate<S> for Energy
where
    S: Species + Carries<Position> + Carries<Momentum> + Carries<Weighting>,
{
    fn evaluate(&self, particle: &S) -> f64 {
        let p = particle.get::<Momentum>().mom.norm();
        particle.get::<Weighting>().value * Self::kinetic_energy(p, S::MASS)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::constant::ELECTRON_MASS;
    use crate::species::{Electron, Photon};
    use assert_approx_eq::assert_approx_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_non_relativistic_limit() {
        // p = m v with v = 1000 m/s
        let p = ELECTRON_MASS * 1000.0;
        let expected = 0.5 * ELECTRON_MASS * 1000.0 * 1000.0;
        let energy = Energy::kinetic_energy(p, ELECTRON_MASS);
        assert_approx_eq!(energy / expected, 1.0, 1e-9);
    }

    #[test]
    fn test_relativistic_electron() {
        // gamma = 2 => p = sqrt(3) m c, E_kin = m c^2
        let p = 3.0_f64.sqrt() * ELECTRON_MASS * C;
        let energy = Energy::kinetic_energy(p, ELECTRON_MASS);
        assert_approx_eq!(energy / (ELECTRON_MASS * C * C), 1.0, 1e-12);
    }

    #[test]
    fn test_weighted_energy() {
        let electron = Electron {
            momentum: Momentum {
                mom: Vector3::new(0.0, ELECTRON_MASS * 1000.0, 0.0),
            },
            weighting: Weighting { value: 4.0 },
            ..Default::default()
        };
        let expected = 4.0 * 0.5 * ELECTRON_MASS * 1.0e6;
        assert_approx_eq!(Energy.evaluate(&electron) / expected, 1.0, 1e-9);
    }

    #[test]
    fn test_massless_particles() {
        let photon = Photon {
            momentum: Momentum {
                mom: Vector3::new(1.0e-27, 0.0, 0.0),
            },
            ..Default::default()
        };
        assert_approx_eq!(Energy.evaluate(&photon) / (1.0e-27 * C), 1.0, 1e-15);
        assert_eq!(Energy.evaluate(&Photon::default()), 0.0);
    }

    #[test]
    fn test_energy_unit_dimension() {
        assert_eq!(
            Energy.unit_dimension(),
            UnitDimension([2.0, 1.0, -2.0, 0.0, 0.0, 0.0, 0.0])
        );
    }
}
