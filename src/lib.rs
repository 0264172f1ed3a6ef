#[macro_use]
extern crate specs_derive;
pub extern crate specs;

pub mod attribute;
pub mod configuration;
pub mod constant;
pub mod ecs;
pub mod error;
pub mod integrator;
pub mod laser;
pub mod particle;
pub mod precision;
pub mod species;

#[cfg(test)]
mod integration_tests;
