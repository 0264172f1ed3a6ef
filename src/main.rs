//! plasmecs command-line interface.
//!
//! ```sh
//! plasmecs trace laser.yaml
//! plasmecs validate laser.json
//! plasmecs ratio --particles 100000 --temperature 1e6 --drift 2.0
//! ```

extern crate plasmecs as lib;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lib::attribute::energy::Energy;
use lib::attribute::momentum_ratio::MomentumRatio;
use lib::attribute::{self, AttributeValue, DerivedAttribute};
use lib::configuration::SimulationConfig;
use lib::constant::BOLTZCONST;
use lib::ecs;
use lib::laser::plane_wave::PlaneWave;
use lib::laser::InjectedField;
use lib::particle::{Momentum, Position, Weighting};
use lib::species::{Electron, Species};
use log::info;
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use specs::{Builder, Join, World, WorldExt};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "plasmecs")]
#[command(about = "Analytic laser sources and derived particle attributes for PIC simulations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the injected laser field for every step of a run.
    Trace {
        /// Path to the run configuration (.json, .yaml or .yml).
        config: PathBuf,
        /// Number of steps (overrides the configuration file).
        #[arg(short, long)]
        steps: Option<u64>,
    },
    /// Validate a configuration file without running it.
    Validate {
        /// Path to the run configuration.
        config: PathBuf,
    },
    /// Sample a drifting thermal electron population and report its mean momentum ratios.
    Ratio {
        /// Number of electron macro-particles.
        #[arg(short, long, default_value_t = 10_000)]
        particles: usize,
        /// Electron temperature, K.
        #[arg(long, default_value_t = 1.0e6)]
        temperature: f64,
        /// Drift momentum along x, in units of the thermal momentum.
        #[arg(long, default_value_t = 0.0)]
        drift: f64,
        /// Seed of the random number generator.
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Trace { config, steps } => trace(&config, steps),
        Commands::Validate { config } => {
            let run = SimulationConfig::load(&config)
                .with_context(|| format!("invalid configuration {}", config.display()))?;
            let laser = PlaneWave::new(&run.laser, &run.timestep());
            println!("{} is valid.", config.display());
            println!("  end of upramp:     {:e} s", laser.end_upramp());
            println!("  start of downramp: {:e} s", laser.start_downramp());
            println!("  end of pulse:      {:e} s", laser.pulse_end());
            Ok(())
        }
        Commands::Ratio {
            particles,
            temperature,
            drift,
            seed,
        } => ratio(particles, temperature, drift, seed),
    }
}

fn trace(path: &Path, steps: Option<u64>) -> Result<()> {
    let run = SimulationConfig::load(path)
        .with_context(|| format!("failed to load configuration {}", path.display()))?;
    let timestep = run.timestep();
    let laser = PlaneWave::new(&run.laser, &timestep);
    let steps = steps
        .or(run.steps)
        .unwrap_or_else(|| (laser.pulse_end() / timestep.delta).ceil() as u64);
    info!("Tracing {} steps", steps);

    let mut world = World::new();
    ecs::register_components(&mut world);
    ecs::register_resources(&mut world, timestep);
    let mut dispatcher =
        ecs::create_simulation_dispatcher_builder(laser, run.laser.polarisation).build();
    dispatcher.setup(&mut world);

    println!("t,Ex,Ey,Ez");
    for _ in 0..steps {
        dispatcher.dispatch(&world);
        world.maintain();
        let injected = world.read_resource::<InjectedField>();
        let field = injected.sample.field;
        println!(
            "{:e},{:e},{:e},{:e}",
            timestep.time_at(injected.step),
            field[0],
            field[1],
            field[2]
        );
    }
    Ok(())
}

fn ratio(particles: usize, temperature: f64, drift: f64, seed: u64) -> Result<()> {
    let thermal_momentum = (Electron::MASS * BOLTZCONST * temperature).sqrt();
    let normal = Normal::new(0.0, thermal_momentum).context("invalid temperature")?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut world = World::new();
    ecs::register_components(&mut world);

    let mut builder = specs::DispatcherBuilder::new();
    builder = attribute::add_systems_to_dispatch::<Electron, _>(
        builder,
        MomentumRatio::<0>,
        "electron_ratio_x",
        &[],
    );
    builder = attribute::add_systems_to_dispatch::<Electron, _>(
        builder,
        MomentumRatio::<1>,
        "electron_ratio_y",
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
    let mut dispatcher = builder.build();
    dispatcher.setup(&mut world);

    for _ in 0..particles {
        let mom = Vector3::new(
            normal.sample(&mut rng) + drift * thermal_momentum,
            normal.sample(&mut rng),
            normal.sample(&mut rng),
        );
        world
            .create_entity()
            .with(Electron {
                position: Position::default(),
                momentum: Momentum { mom },
                weighting: Weighting::default(),
            })
            .build();
    }
    info!("Created {} electrons", particles);

    // The first frame attaches the attribute components.
    for _ in 0..2 {
        dispatcher.dispatch(&world);
        world.maintain();
    }

    let count = particles.max(1) as f64;
    let x = mean(&world.read_storage::<AttributeValue<MomentumRatio<0>>>(), count);
    let y = mean(&world.read_storage::<AttributeValue<MomentumRatio<1>>>(), count);
    let z = mean(&world.read_storage::<AttributeValue<MomentumRatio<2>>>(), count);
    let energy = mean(&world.read_storage::<AttributeValue<Energy>>(), count);

    println!("{} (x, y, z): {:.6} {:.6} {:.6}", MomentumRatio::<0>::NAME, x, y, z);
    println!("mean {}: {:e} J", Energy::NAME, energy);
    Ok(())
}

fn mean<A: DerivedAttribute>(values: &specs::ReadStorage<AttributeValue<A>>, count: f64) -> f64 {
    values.join().map(|value| value.value).sum::<f64>() / count
}
