//! random-policy: drives the lift environment with a uniformly random
//! controller.
//!
//! Each step the demo may generate a passenger, sends every car either
//! `NO_CHANGE` or a random floor, then lets riders off and on wherever a car
//! stands on a floor.  The bookkeeping is checked after every step.
//!
//! Usage: `random-policy [config.json]`.  Without a file the constants below
//! are used; a file may set any subset of `EnvConfig`'s fields.

use std::time::Instant;

use anyhow::{Context, Result};

use lift_core::{Direction, ElevatorId, EnvConfig, Floor, NO_CHANGE, RetargetGuard, SimRng, Tick};
use lift_sim::{EnvObserver, Environment};

// ── Constants ─────────────────────────────────────────────────────────────────

const STEPS:             u64 = 500;
const POLICY_SEED:       u64 = 7;
const ARRIVAL_PROB:      f64 = 0.25; // chance of a new passenger per step
const RETARGET_PROB:     f64 = 0.15; // chance a car gets a fresh random target

fn default_config() -> EnvConfig {
    EnvConfig {
        floor_low:      -2,
        floor_high:     12,
        max_people:     60,
        num_elevators:  3,
        car_capacity:   Some(8),
        retarget_guard: RetargetGuard::Symmetric,
        seed:           42,
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Refusals {
    per_car: Vec<usize>,
}

impl EnvObserver for Refusals {
    fn on_retarget_rejected(&mut self, car: ElevatorId, _requested: Floor) {
        if self.per_car.len() <= car.index() {
            self.per_car.resize(car.index() + 1, 0);
        }
        self.per_car[car.index()] += 1;
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str::<EnvConfig>(&text)
                .with_context(|| format!("parsing config {path}"))?
        }
        None => default_config(),
    };

    println!("=== random-policy: lift elevator environment ===");
    println!("{}", serde_json::to_string_pretty(&config)?);
    println!();

    let mut env    = Environment::seeded(config.clone())?;
    let mut policy = SimRng::new(POLICY_SEED);
    let mut obs    = Refusals::default();
    let floors: Vec<Floor> = env.floors().iter().collect();
    let cars: Vec<ElevatorId> = env.elevators().iter().map(|e| e.id()).collect();

    let mut generated = 0usize;
    let mut boarded   = 0usize;
    let mut delivered = 0usize;

    let t0 = Instant::now();
    for _ in 0..STEPS {
        if env.total_reservoir() > 0 && policy.gen_bool(ARRIVAL_PROB) {
            env.generate_passenger()?;
            generated += 1;
        }

        let actions: Vec<Floor> = cars
            .iter()
            .map(|_| {
                if policy.gen_bool(RETARGET_PROB) {
                    floors[policy.gen_range(0..floors.len())]
                } else {
                    NO_CHANGE
                }
            })
            .collect();
        env.step_observed(&actions, &mut obs)?;

        for &car in &cars {
            let at_floor = env.elevator(car).and_then(|e| e.current_floor()).is_some();
            if at_floor {
                delivered += env.alight(car)?;
                for direction in Direction::ALL {
                    boarded += env.board(car, direction)?;
                }
            }
        }
        env.check_invariants()?;
    }
    let elapsed = t0.elapsed();

    // ── Summary ───────────────────────────────────────────────────────────
    let population = env.population();
    println!("Ran {} steps in {:.3} ms", env.tick().0, elapsed.as_secs_f64() * 1e3);
    println!("  generated : {generated}");
    println!("  boarded   : {boarded}");
    println!("  delivered : {delivered}");
    println!(
        "  population: reservoir {} | waiting {} | riding {}",
        population.reservoir, population.waiting, population.riding
    );
    println!();

    println!("{:<8} {:<10} {:<8} {:<8} {:<6} {:<9}", "Car", "Position", "Target", "Vel", "Load", "Refusals");
    println!("{}", "-".repeat(52));
    for car in env.elevators() {
        let refused = obs.per_car.get(car.id().index()).copied().unwrap_or(0);
        println!(
            "{:<8} {:<10.1} {:<8} {:<8.1} {:<6} {:<9}",
            car.id().0,
            car.position(),
            car.target(),
            car.velocity(),
            car.load(),
            refused
        );
    }

    debug_assert_eq!(env.tick(), Tick(STEPS));
    Ok(())
}
