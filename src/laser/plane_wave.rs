//! Plane-wave laser pulse without transverse envelope.
//!
//! The field is derived from the electric potential
//! `Phi = Phi_0 exp(-0.5 (x - x_0)^2 / sigma^2) cos(k (x - x_0) - phi)`
//! via `E = d Phi / dx`. Expressed in time with `t = x / c` and `tau c = sigma`,
//! this gives a carrier `sin(omega (t - t_0) + phi)` plus a correction term
//! proportional to `cos(omega (t - t_0) + phi)` that keeps the time integral of
//! the field at zero for any phase. Without that term a Gaussian pulse would
//! leave a net displacement of charge behind.
//!
//! The integral only vanishes exactly for a pure Gaussian. With a plateau the
//! plateau length must be a multiple of the wavelength as well.
//!
//! Use periodic boundaries in the transverse directions.

use super::{LaserProfile, LaserSample, Polarisation};
use crate::configuration::LaserConfig;
use crate::constant::{C, PI, SQRT_2};
use crate::integrator::Timestep;
use crate::precision::{narrow, FloatX};
use log::debug;
use nalgebra::Vector3;

/// Which part of the pulse a time falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Gaussian rise towards full amplitude.
    Upramp,
    /// Full amplitude, including both boundaries.
    Plateau,
    /// Gaussian decay after the plateau.
    Downramp,
}

/// A plane-wave laser pulse with Gaussian up- and downramps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneWave {
    amplitude: f64,
    pulse_length: f64,
    phase: f64,
    timestep: Timestep,
    /// Angular frequency of the carrier, rad/s.
    omega: f64,
    end_upramp: f64,
    start_downramp: f64,
}

impl PlaneWave {
    pub fn new(config: &LaserConfig, timestep: &Timestep) -> Self {
        let end_upramp = 0.5 * config.ramp_init * config.pulse_length;
        let start_downramp = end_upramp + config.no_focus_length;
        let omega = 2.0 * PI * C / config.wavelength;
        debug!(
            "plane wave: end of upramp {:e} s, start of downramp {:e} s, omega {:e} rad/s",
            end_upramp, start_downramp, omega
        );
        PlaneWave {
            amplitude: config.amplitude,
            pulse_length: config.pulse_length,
            phase: config.phase,
            timestep: *timestep,
            omega,
            end_upramp,
            start_downramp,
        }
    }

    /// Time at which the upramp reaches full amplitude, s.
    pub fn end_upramp(&self) -> f64 {
        self.end_upramp
    }

    /// Time at which the downramp begins, s.
    pub fn start_downramp(&self) -> f64 {
        self.start_downramp
    }

    /// Time at which the downramp has decayed to the envelope value at `t = 0`, s.
    pub fn pulse_end(&self) -> f64 {
        self.start_downramp + self.end_upramp
    }

    pub fn omega(&self) -> f64 {
        self.omega
    }

    pub fn regime(&self, t: f64) -> Regime {
        if t > self.start_downramp {
            Regime::Downramp
        } else if t < self.end_upramp {
            Regime::Upramp
        } else {
            Regime::Plateau
        }
    }

    /// Envelope and integration correction factor at time `t`.
    fn envelope_and_correction(&self, t: f64) -> (f64, f64) {
        let ramp_origin = match self.regime(t) {
            Regime::Plateau => return (self.amplitude, 0.0),
            Regime::Upramp => self.end_upramp,
            Regime::Downramp => self.start_downramp,
        };
        let exponent = (t - ramp_origin) / self.pulse_length / SQRT_2;
        let envelope = self.amplitude * (-0.5 * exponent * exponent).exp();
        let correction = (t - ramp_origin) / (2.0 * self.pulse_length * self.pulse_length);
        (envelope, correction)
    }

    /// Amplitude of the pulse at time `t`, V/m.
    pub fn envelope(&self, t: f64) -> f64 {
        self.envelope_and_correction(t).0
    }

    /// Weight of the cosine term that keeps the field integral at zero. Zero on the plateau.
    pub fn integration_correction_factor(&self, t: f64) -> f64 {
        self.envelope_and_correction(t).1
    }

    /// Field at time `t` in double precision.
    pub fn field(&self, t: f64, polarisation: Polarisation) -> Vector3<f64> {
        let (envelope, correction) = self.envelope_and_correction(t);
        let theta = self.omega * (t - self.end_upramp) + self.phase;
        let (sin, cos) = theta.sin_cos();
        match polarisation {
            Polarisation::LinearX => {
                Vector3::new(envelope * (sin + cos * correction), 0.0, 0.0)
            }
            Polarisation::LinearZ => {
                Vector3::new(0.0, 0.0, envelope * (sin + cos * correction))
            }
            Polarisation::Circular => {
                let half = envelope / SQRT_2;
                Vector3::new(
                    half * (sin + cos * correction),
                    0.0,
                    half * (cos - sin * correction),
                )
            }
        }
    }
}

impl LaserProfile for PlaneWave {
    fn longitudinal(&self, current_step: u64, polarisation: Polarisation) -> LaserSample {
        let field = self.field(self.timestep.time_at(current_step), polarisation);
        LaserSample {
            field: Vector3::new(narrow(field[0]), narrow(field[1]), narrow(field[2])),
            // The plane wave carries its phase in the field itself.
            phase: 0.0,
        }
    }

    fn transversal(
        &self,
        field: Vector3<FloatX>,
        _x: FloatX,
        _y: FloatX,
        _z: FloatX,
    ) -> Vector3<FloatX> {
        field
    }
}
