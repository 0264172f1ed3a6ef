/// Mathematica constant pi
pub const PI: f64 = std::f64::consts::PI;

/// Square root of two, used to split circularly polarised fields.
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Speed of light in SI units of m/s
pub const C: f64 = 2.997_924_58e8;

/// Elementary charge in SI units of Coulomb
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Electron rest mass in SI units of kg
pub const ELECTRON_MASS: f64 = 9.109_383_7015e-31;

/// Proton rest mass in SI units of kg
pub const PROTON_MASS: f64 = 1.672_621_923_69e-27;

/// Boltzmann constant in SI units
pub const BOLTZCONST: f64 = 1.380_649e-23;
