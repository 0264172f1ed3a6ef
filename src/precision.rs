//! Working precision of values handed to the field solver.
//!
//! Internal envelope and phase calculations are always carried out in `f64`.
//! Results are narrowed to `FloatX` when a sample leaves a generator.

#[cfg(not(feature = "double-precision"))]
pub type FloatX = f32;

#[cfg(feature = "double-precision")]
pub type FloatX = f64;

/// Narrows an `f64` to the working precision.
#[inline]
pub fn narrow(value: f64) -> FloatX {
    value as FloatX
}
