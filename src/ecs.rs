//! Assembles the world resources and dispatcher used to sample the analytic sources.

use crate::integrator::{AdvanceStepSystem, Step, Timestep, ADVANCE_STEP_SYSTEM_NAME};
use crate::laser::{
    InjectedField, InjectionPoint, LaserProfile, Polarisation, SampleLaserSystem,
    SAMPLE_LASER_SYSTEM_NAME,
};
use specs::{DispatcherBuilder, World, WorldExt};

/// Registers the components used by the laser systems.
///
/// Species and attribute storages are registered when the attribute systems are set up.
pub fn register_components(world: &mut World) {
    world.register::<InjectionPoint>();
}

/// Add resources to the world
pub fn register_resources(world: &mut World, timestep: Timestep) {
    world.insert(timestep);
    world.insert(Step { n: 0 });
    world.insert(InjectedField::default());
}

/// Creates a `DispatcherBuilder` that samples `profile` once per frame and then advances the step.
///
/// Derived attribute systems can be added to the returned builder with
/// [crate::attribute::add_systems_to_dispatch].
pub fn create_simulation_dispatcher_builder<P: LaserProfile>(
    profile: P,
    polarisation: Polarisation,
) -> DispatcherBuilder<'static, 'static> {
    DispatcherBuilder::new()
        .with(
            SampleLaserSystem::new(profile, polarisation),
            SAMPLE_LASER_SYSTEM_NAME,
            &[],
        )
        .with(
            AdvanceStepSystem,
            ADVANCE_STEP_SYSTEM_NAME,
            &[SAMPLE_LASER_SYSTEM_NAME],
        )
}
