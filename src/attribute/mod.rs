//! Derived per-particle attributes.
//!
//! A derived attribute computes one scalar for each particle from the fields the
//! particle stores. The scalar is later spread onto the grid by the deposition
//! routine of the field solver, which is not part of this crate.
//!
//! Whether a species may be used with an attribute is decided when the crate
//! is built: an attribute implements [Evaluate] for a species only if that
//! species [Carries] every field the attribute reads. Asking for an ineligible
//! combination, for example a [CalculateDerivedAttributeSystem] for field
//! probes that have no momentum, does not compile.
//!
//! ```
//! use plasmecs::attribute::momentum_ratio::MomentumRatio;
//! use plasmecs::attribute::Evaluate;
//! use plasmecs::species::Electron;
//!
//! assert_eq!(MomentumRatio::<0>.evaluate(&Electron::default()), 0.0);
//! ```
//!
//! Probes store no momentum:
//!
//! ```compile_fail
//! use plasmecs::attribute::momentum_ratio::MomentumRatio;
//! use plasmecs::attribute::Evaluate;
//! use plasmecs::species::Probe;
//!
//! MomentumRatio::<0>.evaluate(&Probe::default());
//! ```
//!
//! and there is no fourth momentum axis:
//!
//! ```compile_fail
//! use plasmecs::attribute::momentum_ratio::MomentumRatio;
//! use plasmecs::attribute::Evaluate;
//! use plasmecs::species::Electron;
//!
//! MomentumRatio::<3>.evaluate(&Electron::default());
//! ```
//!
//! To calculate an attribute `A` for species `S`, add the systems returned by
//! [add_systems_to_dispatch] to the dispatcher. Every `S` entity then receives
//! an [AttributeValue<A>] component that is refreshed each frame.
//!
//! [Carries]: crate::species::Carries

use crate::particle::FieldId;
use crate::species::Species;
use serde::Serialize;
use specs::{
    Component, DispatcherBuilder, Entities, Join, LazyUpdate, Read, ReadStorage, System,
    VecStorage, WriteStorage,
};
use std::marker::PhantomData;

pub mod counter;
pub mod energy;
pub mod momentum_ratio;

/// Exponents of the seven SI base units that make up the dimension of a quantity.
///
/// Ordered as length, mass, time, electric current, thermodynamic temperature,
/// amount of substance and luminous intensity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDimension(pub [f64; 7]);

impl UnitDimension {
    pub const LENGTH: usize = 0;
    pub const MASS: usize = 1;
    pub const TIME: usize = 2;
    pub const CURRENT: usize = 3;
    pub const TEMPERATURE: usize = 4;
    pub const AMOUNT: usize = 5;
    pub const LUMINOUS_INTENSITY: usize = 6;

    /// The dimension of a pure number.
    pub const DIMENSIONLESS: UnitDimension = UnitDimension([0.0; 7]);

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|exponent| *exponent == 0.0)
    }
}

/// Metadata of a derived attribute.
pub trait DerivedAttribute: Copy + Default + Send + Sync + 'static {
    /// Name used to label output. Shared by all parameterisations of one attribute type.
    const NAME: &'static str;
    /// Fields a species must store to be used with this attribute.
    const REQUIRED: &'static [FieldId];

    fn unit_dimension(&self) -> UnitDimension;

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

/// Calculates a derived attribute for a particle of species `S`.
///
/// Implementations bound `S` by `Carries<F>` for every field they read, so
/// `A: Evaluate<S>` holds exactly when `S` is eligible for `A`.
#[diagnostic::on_unimplemented(
    message = "species `{S}` does not store every field required by `{Self}`",
    label = "ineligible species for this derived attribute",
    note = "the species must implement `Carries<F>` for each field listed in `{Self}::REQUIRED`"
)]
pub trait Evaluate<S>: DerivedAttribute {
    fn evaluate(&self, particle: &S) -> f64;
}

/// Marker relation: species `Self` is eligible for attribute `A`.
pub trait Eligible<A: DerivedAttribute> {}
impl<S, A> Eligible<A> for S where A: Evaluate<S> {}

/// True if every field in `required` also appears in `stored`.
pub const fn is_eligible(stored: &[FieldId], required: &[FieldId]) -> bool {
    let mut i = 0;
    while i < required.len() {
        let mut found = false;
        let mut j = 0;
        while j < stored.len() {
            if stored[j] as u8 == required[i] as u8 {
                found = true;
            }
            j += 1;
        }
        if !found {
            return false;
        }
        i += 1;
    }
    true
}

/// Compares the stored fields of `S` with the fields required by `A`.
pub const fn species_is_eligible<S: Species, A: DerivedAttribute>() -> bool {
    is_eligible(S::FIELDS, A::REQUIRED)
}

/// Calculates `attribute` for each particle in a slice, in parallel.
pub fn evaluate_all<S, A>(attribute: &A, particles: &[S]) -> Vec<f64>
where
    S: Species,
    A: Evaluate<S>,
{
    use rayon::prelude::*;
    particles
        .par_iter()
        .map(|particle| attribute.evaluate(particle))
        .collect()
}

/// The value of derived attribute `A` for the particle this component is attached to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeValue<A: DerivedAttribute> {
    pub value: f64,
    marker: PhantomData<A>,
}

impl<A: DerivedAttribute> AttributeValue<A> {
    pub fn new(value: f64) -> Self {
        AttributeValue {
            value,
            marker: PhantomData,
        }
    }
}

impl<A: DerivedAttribute> Default for AttributeValue<A> {
    fn default() -> Self {
        AttributeValue::new(f64::NAN)
    }
}

impl<A: DerivedAttribute> Component for AttributeValue<A> {
    type Storage = VecStorage<Self>;
}

/// Attaches an [AttributeValue] to every particle of species `S` that does not have one yet.
pub struct AttachAttributeValuesSystem<S, A> {
    marker: PhantomData<(S, A)>,
}

impl<S, A> Default for AttachAttributeValuesSystem<S, A> {
    fn default() -> Self {
        AttachAttributeValuesSystem {
            marker: PhantomData,
        }
    }
}

impl<'a, S, A> System<'a> for AttachAttributeValuesSystem<S, A>
where
    S: Species,
    A: Evaluate<S>,
{
    type SystemData = (
        Entities<'a>,
        ReadStorage<'a, S>,
        ReadStorage<'a, AttributeValue<A>>,
        Read<'a, LazyUpdate>,
    );

    fn run(&mut self, (entities, particles, values, updater): Self::SystemData) {
        for (ent, _, _) in (&entities, &particles, !&values).join() {
            updater.insert(ent, AttributeValue::<A>::default());
        }
    }
}

/// Calculates derived attribute `A` for every particle of species `S`.
pub struct CalculateDerivedAttributeSystem<S, A> {
    attribute: A,
    marker: PhantomData<S>,
}

impl<S, A> CalculateDerivedAttributeSystem<S, A>
where
    S: Species,
    A: Evaluate<S>,
{
    pub fn new(attribute: A) -> Self {
        CalculateDerivedAttributeSystem {
            attribute,
            marker: PhantomData,
        }
    }
}

impl<'a, S, A> System<'a> for CalculateDerivedAttributeSystem<S, A>
where
    S: Species,
    A: Evaluate<S>,
{
    type SystemData = (ReadStorage<'a, S>, WriteStorage<'a, AttributeValue<A>>);

    fn run(&mut self, (particles, mut values): Self::SystemData) {
        use rayon::prelude::*;
        use specs::ParJoin;

        let attribute = self.attribute;
        (&particles, &mut values)
            .par_join()
            .for_each(|(particle, value)| {
                value.value = attribute.evaluate(particle);
            });
    }
}

/// Adds the systems that calculate attribute `A` for species `S` to the dispatcher.
///
/// # Arguments
///
/// `builder`: the dispatch builder to modify
///
/// `attribute`: the attribute to calculate
///
/// `label`: unique name for the systems, eg `"electron_momentum_ratio_x"`.
///
/// `deps`: any dependencies that must be completed before the systems run.
pub fn add_systems_to_dispatch<S, A>(
    builder: DispatcherBuilder<'static, 'static>,
    attribute: A,
    label: &str,
    deps: &[&str],
) -> DispatcherBuilder<'static, 'static>
where
    S: Species,
    A: Evaluate<S>,
{
    let attach_name = format!("{}_attach", label);
    builder
        .with(
            AttachAttributeValuesSystem::<S, A>::default(),
            &attach_name,
            deps,
        )
        .with(
            CalculateDerivedAttributeSystem::<S, A>::new(attribute),
            label,
            &[attach_name.as_str()],
        )
}
