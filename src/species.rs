//! Particle species and the fields they store.
//!
//! A species is a plain record type whose members are [ParticleField]s. The
//! [species!](crate::species!) macro generates the record, implements [Species]
//! for it and implements [Carries] once for every stored field. Derived
//! attributes bound their species parameter by `Carries<F>` for each field they
//! read, which is how ineligible species are rejected when the crate is built.

use crate::constant::{ELECTRON_MASS, ELEMENTARY_CHARGE, PROTON_MASS};
use crate::particle::{FieldId, ParticleField};
use specs::Component;

/// Physical constants and stored fields of a particle species.
pub trait Species: Component + Copy + Default + Send + Sync {
    /// Short label used when labelling output.
    const NAME: &'static str;
    /// Charge of a single real particle, in SI units of Coulomb.
    const CHARGE: f64;
    /// Rest mass of a single real particle, in SI units of kg.
    const MASS: f64;
    /// Identifiers of every field a particle of this species stores.
    const FIELDS: &'static [FieldId];

    /// Typed access to a stored field.
    fn get<F: ParticleField>(&self) -> &F
    where
        Self: Carries<F>,
    {
        <Self as Carries<F>>::field(self)
    }
}

/// Implemented by a species for each field `F` that it stores.
pub trait Carries<F: ParticleField> {
    fn field(&self) -> &F;
}

/// Defines a species record.
///
/// ```
/// use plasmecs::particle::{Momentum, Position};
/// plasmecs::species!(
///     /// Positrons without macro-particle weighting.
///     Positron, "e+", charge = 1.602_176_634e-19, mass = 9.109_383_7015e-31,
///     { position: Position, momentum: Momentum }
/// );
/// ```
///
/// Listing the same field type twice is rejected with conflicting `Carries`
/// implementations.
#[macro_export]
macro_rules! species {
    (
        $(#[$meta:meta])*
        $name:ident, $label:expr, charge = $charge:expr, mass = $mass:expr,
        { $($field:ident : $ty:ty),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq)]
        pub struct $name {
            $(pub $field: $ty),*
        }

        impl $crate::species::Species for $name {
            const NAME: &'static str = $label;
            const CHARGE: f64 = $charge;
            const MASS: f64 = $mass;
            const FIELDS: &'static [$crate::particle::FieldId] =
                &[$(<$ty as $crate::particle::ParticleField>::ID),*];
        }

        $(
            impl $crate::species::Carries<$ty> for $name {
                fn field(&self) -> &$ty {
                    &self.$field
                }
            }
        )*

        impl $crate::specs::Component for $name {
            type Storage = $crate::specs::VecStorage<Self>;
        }
    };
}

use crate::particle::{Momentum, Position, Weighting};

species!(
    /// Electron macro-particles.
    Electron, "e", charge = -ELEMENTARY_CHARGE, mass = ELECTRON_MASS,
    { position: Position, momentum: Momentum, weighting: Weighting }
);

species!(
    /// Fully ionised hydrogen macro-particles.
    Proton, "p", charge = ELEMENTARY_CHARGE, mass = PROTON_MASS,
    { position: Position, momentum: Momentum, weighting: Weighting }
);

species!(
    /// Massless, neutral macro-particles.
    Photon, "ph", charge = 0.0, mass = 0.0,
    { position: Position, momentum: Momentum, weighting: Weighting }
);

species!(
    /// Stationary probes that record fields at fixed positions. Probes carry no momentum.
    Probe, "probe", charge = 0.0, mass = 0.0,
    { position: Position, weighting: Weighting }
);
