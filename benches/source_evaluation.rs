use criterion::{black_box, criterion_group, criterion_main, Criterion};
extern crate plasmecs as lib;

use lib::attribute::energy::Energy;
use lib::attribute::evaluate_all;
use lib::attribute::momentum_ratio::MomentumRatio;
use lib::configuration::LaserConfig;
use lib::integrator::Timestep;
use lib::laser::plane_wave::PlaneWave;
use lib::laser::{LaserProfile, Polarisation};
use lib::particle::{Momentum, Position, Weighting};
use lib::species::Electron;
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn criterion_benchmark(c: &mut Criterion) {
    let laser = PlaneWave::new(
        &LaserConfig {
            amplitude: 4.0e12,
            wavelength: 0.8e-6,
            pulse_length: 1.0e-14,
            ramp_init: 3.0,
            no_focus_length: 1.0e-14,
            phase: 0.0,
            polarisation: Polarisation::Circular,
        },
        &Timestep { delta: 1.0e-17 },
    );

    c.bench_function("plane wave, 5000 steps", |b| {
        b.iter(|| {
            for step in 0..5000_u64 {
                black_box(laser.longitudinal(black_box(step), Polarisation::Circular));
            }
        })
    });

    let normal = Normal::new(0.0, 3.5e-24).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let electrons: Vec<Electron> = (0..100_000)
        .map(|_| Electron {
            position: Position::default(),
            momentum: Momentum {
                mom: Vector3::new(
                    normal.sample(&mut rng),
                    normal.sample(&mut rng),
                    normal.sample(&mut rng),
                ),
            },
            weighting: Weighting::default(),
        })
        .collect();

    c.bench_function("momentum ratio, 100k electrons", |b| {
        b.iter(|| black_box(evaluate_all(&MomentumRatio::<2>, &electrons)))
    });
    c.bench_function("energy, 100k electrons", |b| {
        b.iter(|| black_box(evaluate_all(&Energy, &electrons)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
