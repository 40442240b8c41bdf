//! Headless maze exploration demo
//!
//! Stands in for the rendering/UI host: owns the frame loop, feeds input
//! snapshots into the simulation core, and reacts to the events it emits.
//! The "input device" is a scripted walker that holds forward and turns
//! a random quarter when it runs into a wall.
//!
//! Usage: `maze_explorer [seed] [maze_size] [max_ticks]`

use maze_core::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A blind-but-persistent input source for the demo loop
struct ScriptedWalker {
    rng: StdRng,
    stuck: bool,
    turn_sign: f32,
}

impl ScriptedWalker {
    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            stuck: false,
            turn_sign: 1.0,
        }
    }

    /// Produce the next tick's input snapshot
    ///
    /// Holds forward every tick. After a blocked tick, issues one look
    /// delta worth a quarter turn in a random direction.
    fn next_input(&mut self, look_sensitivity: f32) -> InputState {
        let mut input = InputState {
            forward_held: true,
            ..Default::default()
        };
        if self.stuck {
            if self.rng.gen_bool(0.5) {
                self.turn_sign = -self.turn_sign;
            }
            let quarter_turn = std::f32::consts::FRAC_PI_2 / look_sensitivity;
            input.look_delta.x = self.turn_sign * quarter_turn;
        }
        input
    }

    fn observe(&mut self, moved: bool) {
        self.stuck = !moved;
    }
}

fn parse_args() -> (u64, usize, usize) {
    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(42u64);
    let size = args.next().and_then(|a| a.parse().ok()).unwrap_or(21);
    let ticks = args.next().and_then(|a| a.parse().ok()).unwrap_or(20_000);
    (seed, size, ticks)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    maze_core::foundation::logging::init();

    let (seed, size, max_ticks) = parse_args();
    log::info!("starting maze explorer: seed {seed}, size {size}, up to {max_ticks} ticks");

    let config = SimulationConfig::default()
        .with_maze_size(size)
        .with_pickup_count(6);
    let mut session = GameSession::new(config, seed)?;
    session.start();

    let snapshot = session.snapshot();
    log::info!(
        "maze ready: {} wall boxes, {} pickups, exit at ({:.1}, {:.1})",
        snapshot.colliders.len(),
        snapshot.total_count,
        snapshot.exit.x,
        snapshot.exit.z
    );

    let mut walker = ScriptedWalker::new(seed ^ 0x5153_F00D);
    let mut ticks_run = 0;

    for tick in 0..max_ticks {
        let input = walker.next_input(session.config().look_sensitivity);
        let before = session.player().position;
        let events = session.tick(&input);
        let after = session.player().position;
        walker.observe((after - before).magnitude_squared() > 1e-12);

        for event in &events {
            match event {
                SessionEvent::ItemCollected { id } => {
                    log::info!(
                        "tick {tick}: collected pickup {id} ({}/{})",
                        session.collected_count(),
                        session.total_placed()
                    );
                }
                SessionEvent::GameWon => log::info!("tick {tick}: maze completed!"),
            }
        }

        ticks_run = tick + 1;
        if session.state() == SessionState::Won {
            break;
        }
    }

    println!(
        "ran {ticks_run} ticks: {}/{} pickups, final state {:?}",
        session.collected_count(),
        session.total_placed(),
        session.state()
    );
    Ok(())
}
