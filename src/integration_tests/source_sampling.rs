//! Integration tests for the source sampling dispatcher
//!
//! These tests build a world with laser injection points and several particle
//! species, run the dispatcher and compare the stored results against direct
//! evaluation of the laser profile and attribute functors.

#[cfg(test)]
pub mod tests {
    use crate::attribute::counter::Counter;
    use crate::attribute::energy::Energy;
    use crate::attribute::momentum_ratio::MomentumRatio;
    use crate::attribute::{self, AttributeValue, Evaluate};
    use crate::configuration::LaserConfig;
    use crate::ecs;
    use crate::integrator::{Step, Timestep};
    use crate::laser::plane_wave::PlaneWave;
    use crate::laser::{InjectedField, InjectionPoint, LaserProfile, Polarisation};
    use crate::particle::{Momentum, Position, Weighting};
    use crate::precision::FloatX;
    use crate::species::{Electron, Probe};
    use nalgebra::Vector3;
    use specs::{Builder, Join, World, WorldExt};

    fn laser_config() -> LaserConfig {
        LaserConfig {
            amplitude: 2.0e12,
            wavelength: 0.8e-6,
            pulse_length: 1.0e-14,
            ramp_init: 3.0,
            no_focus_length: 1.0e-14,
            phase: 0.0,
            polarisation: Polarisation::Circular,
        }
    }

    #[test]
    fn injected_field_follows_profile() {
        let timestep = Timestep { delta: 2.0e-17 };
        let laser = PlaneWave::new(&laser_config(), &timestep);

        let mut world = World::new();
        ecs::register_components(&mut world);
        ecs::register_resources(&mut world, timestep);
        let mut dispatcher =
            ecs::create_simulation_dispatcher_builder(laser, Polarisation::Circular).build();
        dispatcher.setup(&mut world);

        let points: Vec<_> = (0..8)
            .map(|i| {
                world
                    .create_entity()
                    .with(InjectionPoint::at(Vector3::new(i as FloatX * 1.0e-6, 0.0, 0.0)))
                    .build()
            })
            .collect();

        for n in 0..2000_u64 {
            dispatcher.dispatch(&world);
            world.maintain();

            let injected = *world.read_resource::<InjectedField>();
            let expected = laser.longitudinal(n, Polarisation::Circular);
            assert_eq!(injected.step, n);
            assert_eq!(injected.sample, expected);

            let storage = world.read_storage::<InjectionPoint>();
            for point in &points {
                let point = storage.get(*point).expect("entity not found");
                assert_eq!(point.field, expected.field);
            }
        }
        assert_eq!(world.read_resource::<Step>().n, 2000);
    }

    #[test]
    fn attributes_are_calculated_for_each_species() {
        let timestep = Timestep { delta: 1.0e-17 };
        let laser = PlaneWave::new(&laser_config(), &timestep);

        let mut world = World::new();
        ecs::register_components(&mut world);
        ecs::register_resources(&mut world, timestep);

        let mut builder = ecs::create_simulation_dispatcher_builder(laser, Polarisation::LinearX);
        builder = attribute::add_systems_to_dispatch::<Electron, _>(
            builder,
            MomentumRatio::<0>,
            "electron_ratio_x",
            &[],
        );
        builder = attribute::add_systems_to_dispatch::<Electron, _>(
            builder,
            MomentumRatio::<2>,
            "electron_ratio_z",
            &[],
        );
        builder =
            attribute::add_systems_to_dispatch::<Electron, _>(builder, Energy, "electron_energy", &[]);
        builder =
            attribute::add_systems_to_dispatch::<Probe, _>(builder, Counter, "probe_counter", &[]);
        let mut dispatcher = builder.build();
        dispatcher.setup(&mut world);

        let electrons: Vec<Electron> = (0..100)
            .map(|i| {
                let i = i as f64;
                Electron {
                    position: Position {
                        pos: Vector3::new(i * 1.0e-7, 0.0, 0.0),
                    },
                    momentum: Momentum {
                        mom: Vector3::new(i - 50.0, 0.5 * i, 3.0 - i) * 1.0e-24,
                    },
                    weighting: Weighting { value: 1.0 + i },
                }
            })
            .collect();
        let electron_entities: Vec<_> = electrons
            .iter()
            .map(|electron| world.create_entity().with(*electron).build())
            .collect();
        let probe = world
            .create_entity()
            .with(Probe {
                position: Position::default(),
                weighting: Weighting { value: 3.0 },
            })
            .build();

        // Attribute components are attached lazily during the first frame.
        dispatcher.dispatch(&world);
        world.maintain();
        dispatcher.dispatch(&world);
        world.maintain();

        let ratio_x = world.read_storage::<AttributeValue<MomentumRatio<0>>>();
        let ratio_z = world.read_storage::<AttributeValue<MomentumRatio<2>>>();
        let energy = world.read_storage::<AttributeValue<Energy>>();
        for (electron, entity) in electrons.iter().zip(electron_entities.iter()) {
            assert_eq!(
                ratio_x.get(*entity).expect("entity not found").value,
                MomentumRatio::<0>.evaluate(electron)
            );
            assert_eq!(
                ratio_z.get(*entity).expect("entity not found").value,
                MomentumRatio::<2>.evaluate(electron)
            );
            assert_eq!(
                energy.get(*entity).expect("entity not found").value,
                Energy.evaluate(electron)
            );
        }
        assert_eq!((&ratio_x).join().count(), electrons.len());

        let counter = world.read_storage::<AttributeValue<Counter>>();
        assert_eq!(counter.get(probe).expect("entity not found").value, 3.0);
        assert!(counter.get(electron_entities[0]).is_none());
    }
}
