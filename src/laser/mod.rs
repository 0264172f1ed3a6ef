//! Analytic laser profiles used as source terms by the field solver.
//!
//! A [LaserProfile] produces the electric field of the laser once per step
//! ([LaserProfile::longitudinal]) and then shapes it for each boundary point
//! ([LaserProfile::transversal]). Profiles are pure functions of the step and
//! their configuration, so the same step always yields the same sample.
//!
//! [SampleLaserSystem] evaluates a profile each frame, stores the result in the
//! [InjectedField] resource and writes the shaped field into every
//! [InjectionPoint] entity.

use crate::constant::{C, ELECTRON_MASS, ELEMENTARY_CHARGE, PI};
use crate::integrator::Step;
use crate::precision::FloatX;
use log::trace;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use specs::{Component, ReadExpect, System, VecStorage, Write, WriteStorage};

pub mod plane_wave;

/// Polarisation of the injected electric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarisation {
    /// Field oscillates along x.
    LinearX,
    /// Field oscillates along z.
    LinearZ,
    /// Field rotates in the x-z plane.
    Circular,
}

impl Default for Polarisation {
    fn default() -> Self {
        Polarisation::LinearX
    }
}

/// Electric field of the laser at one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaserSample {
    /// Field components along x,y,z, V/m.
    pub field: Vector3<FloatX>,
    /// Carrier phase handed back to the solver, rad.
    pub phase: FloatX,
}

impl Default for LaserSample {
    fn default() -> Self {
        LaserSample {
            field: Vector3::new(0.0, 0.0, 0.0),
            phase: 0.0,
        }
    }
}

/// A temporal laser profile with an optional transverse shape.
pub trait LaserProfile: Send + Sync + 'static {
    /// Field of the laser at `current_step`, before transverse shaping.
    fn longitudinal(&self, current_step: u64, polarisation: Polarisation) -> LaserSample;

    /// Applies the transverse shape at the boundary point `x, y, z`.
    fn transversal(
        &self,
        field: Vector3<FloatX>,
        x: FloatX,
        y: FloatX,
        z: FloatX,
    ) -> Vector3<FloatX>;
}

/// Peak electric field of a laser with normalised vector potential `a0`.
///
/// `E0 = a0 m_e c omega / e`, with `omega = 2 pi c / wavelength`.
pub fn amplitude_from_a0(a0: f64, wavelength: f64) -> f64 {
    let omega = 2.0 * PI * C / wavelength;
    a0 * ELECTRON_MASS * C * omega / ELEMENTARY_CHARGE
}

/// The laser field sampled for the current step.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct InjectedField {
    /// Step at which `sample` was evaluated.
    pub step: u64,
    pub sample: LaserSample,
}

/// A boundary point at which the laser is injected into the grid.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
#[storage(VecStorage)]
pub struct InjectionPoint {
    /// Position of the point, m.
    pub position: Vector3<FloatX>,
    /// Shaped laser field at the point for the current step, V/m.
    pub field: Vector3<FloatX>,
}

impl InjectionPoint {
    pub fn at(position: Vector3<FloatX>) -> Self {
        InjectionPoint {
            position,
            field: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

pub const SAMPLE_LASER_SYSTEM_NAME: &str = "sample_laser";

/// Samples laser profile `P` at the current [Step].
pub struct SampleLaserSystem<P: LaserProfile> {
    profile: P,
    polarisation: Polarisation,
}

impl<P: LaserProfile> SampleLaserSystem<P> {
    pub fn new(profile: P, polarisation: Polarisation) -> Self {
        SampleLaserSystem {
            profile,
            polarisation,
        }
    }
}

impl<'a, P: LaserProfile> System<'a> for SampleLaserSystem<P> {
    type SystemData = (
        ReadExpect<'a, Step>,
        Write<'a, InjectedField>,
        WriteStorage<'a, InjectionPoint>,
    );

    fn run(&mut self, (step, mut injected, mut points): Self::SystemData) {
        use rayon::prelude::*;
        use specs::ParJoin;

        let sample = self.profile.longitudinal(step.n, self.polarisation);
        trace!("laser sample at step {}: {:?}", step.n, sample.field);
        injected.step = step.n;
        injected.sample = sample;

        let profile = &self.profile;
        (&mut points).par_join().for_each(|point| {
            point.field = profile.transversal(
                sample.field,
                point.position[0],
                point.position[1],
                point.position[2],
            );
        });
    }
}
