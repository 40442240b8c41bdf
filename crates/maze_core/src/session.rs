//! Game session orchestration
//!
//! [`GameSession`] owns everything with session lifetime: the grid, the
//! collision world, the pickup set, and the player. All of it lives in
//! one internal world struct that restart rebuilds and swaps as a unit,
//! so stale references to a previous run cannot survive a regeneration.
//!
//! Per-tick protocol while Playing: integrate the player, sweep pickups,
//! then evaluate the win condition — all in the same synchronous call,
//! so a collection can never lag one frame behind win detection.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ConfigError, SimulationConfig};
use crate::events::{EventQueue, SessionEvent};
use crate::foundation::math::{horizontal_distance_squared, Vec3};
use crate::input::InputState;
use crate::maze::{GenerationError, Grid, MazeGenerator};
use crate::physics::{CollisionWorld, WallCollider};
use crate::placement::{EntityPlacer, Pickup};
use crate::player::{Player, PlayerController};

/// Lifecycle of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created but not started; ticks are ignored
    Idle,
    /// Actively simulating
    Playing,
    /// Win condition reached; ticks are ignored until restart
    Won,
}

/// Errors building a session
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// The configuration failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Maze generation rejected its inputs
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Everything owned for exactly one maze run
///
/// Rebuilt wholesale on restart; never partially mutated.
struct SessionWorld {
    grid: Grid,
    collision: CollisionWorld,
    pickups: Vec<Pickup>,
    start: Vec3,
    exit: Vec3,
    player: Player,
}

impl SessionWorld {
    fn build(config: &SimulationConfig, rng: &mut StdRng) -> Result<Self, GenerationError> {
        let grid = MazeGenerator::generate(config.maze_size, rng)?;
        let placement = EntityPlacer::place(
            &grid,
            config.pickup_count,
            config.cell_size,
            config.pickup_height,
            rng,
        );
        let collision = CollisionWorld::from_grid(&grid, config.cell_size, config.wall_height);
        let player = Player::spawn(&placement.start, config.eye_height);

        log::info!(
            "built maze world: size {}, {} wall boxes, {} pickups",
            grid.size(),
            collision.collider_count(),
            placement.pickups.len()
        );

        Ok(Self {
            grid,
            collision,
            pickups: placement.pickups,
            start: placement.start,
            exit: placement.exit,
            player,
        })
    }
}

/// Everything the host needs to render one frame
#[derive(Debug)]
pub struct SceneSnapshot<'a> {
    /// The player's position and orientation
    pub player: &'a Player,
    /// Uncollected pickups only; collected ones are gone from the scene
    pub pickups: Vec<&'a Pickup>,
    /// Static wall boxes
    pub colliders: &'a [WallCollider],
    /// World position of the start cell
    pub start: Vec3,
    /// World position of the exit cell
    pub exit: Vec3,
    /// Current session state
    pub state: SessionState,
    /// Pickups collected so far
    pub collected_count: usize,
    /// Total pickups placed this run
    pub total_count: usize,
}

/// The simulation core's top-level object
///
/// Owns all session state and is the only mutator of it; the host calls
/// [`GameSession::tick`] once per rendered frame and renders from
/// [`GameSession::snapshot`].
pub struct GameSession {
    config: SimulationConfig,
    rng: StdRng,
    world: SessionWorld,
    state: SessionState,
    collected_count: usize,
    total_placed: usize,
    events: EventQueue,
}

impl GameSession {
    /// Build a session from a validated configuration and a seed
    ///
    /// The seed drives every random decision (layout, placement, kinds),
    /// so a given `(config, seed)` pair always produces the same run.
    pub fn new(config: SimulationConfig, seed: u64) -> Result<Self, SessionError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let world = SessionWorld::build(&config, &mut rng)?;
        let total_placed = world.pickups.len();

        Ok(Self {
            config,
            rng,
            world,
            state: SessionState::Idle,
            collected_count: 0,
            total_placed,
            events: EventQueue::new(),
        })
    }

    /// Begin simulating; a no-op unless the session is Idle
    pub fn start(&mut self) {
        if self.state == SessionState::Idle {
            log::info!("session started");
            self.state = SessionState::Playing;
        }
    }

    /// Throw the current run away and begin a fresh one
    ///
    /// Regenerates the maze from the session's rng stream, replaces all
    /// session-owned state atomically, and resumes Playing. Valid from
    /// any state.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let world = SessionWorld::build(&self.config, &mut self.rng)?;
        self.world = world;
        self.collected_count = 0;
        self.total_placed = self.world.pickups.len();
        self.events.clear();
        self.state = SessionState::Playing;
        log::info!("session restarted with a fresh maze");
        Ok(())
    }

    /// Advance the simulation by one tick
    ///
    /// Returns the events emitted during this tick, in order. Outside of
    /// Playing the call is a no-op that returns no events; the host's
    /// frame callback always completes.
    pub fn tick(&mut self, input: &InputState) -> Vec<SessionEvent> {
        if self.state != SessionState::Playing {
            return Vec::new();
        }

        PlayerController::tick(
            &mut self.world.player,
            input,
            &self.config,
            &self.world.collision,
        );

        self.sweep_pickups();
        self.check_win();

        self.events.drain()
    }

    /// Collect every uncollected pickup within reach of the player
    fn sweep_pickups(&mut self) {
        let reach = self.config.player_radius + self.config.pickup_radius;
        let reach_sq = reach * reach;
        let position = self.world.player.position;

        for pickup in self.world.pickups.iter_mut().filter(|p| !p.collected) {
            if horizontal_distance_squared(&position, &pickup.position) < reach_sq {
                pickup.collected = true;
                self.collected_count += 1;
                log::debug!(
                    "collected pickup {} ({}/{})",
                    pickup.id,
                    self.collected_count,
                    self.total_placed
                );
                self.events.send(SessionEvent::ItemCollected { id: pickup.id });
            }
        }
    }

    /// Evaluate the win condition in the same tick as collection
    ///
    /// The `total_placed > 0` guard keeps a zero-pickup run from winning
    /// the instant the player spawns near the exit.
    fn check_win(&mut self) {
        if self.collected_count != self.total_placed || self.total_placed == 0 {
            return;
        }

        let reach = self.config.player_radius + self.config.exit_radius;
        let at_exit = horizontal_distance_squared(&self.world.player.position, &self.world.exit)
            < reach * reach;
        if at_exit {
            self.state = SessionState::Won;
            self.events.send(SessionEvent::GameWon);
            log::info!("game won after collecting {} pickups", self.total_placed);
        }
    }

    /// Snapshot the scene for rendering
    pub fn snapshot(&self) -> SceneSnapshot<'_> {
        SceneSnapshot {
            player: &self.world.player,
            pickups: self.world.pickups.iter().filter(|p| !p.collected).collect(),
            colliders: self.world.collision.colliders(),
            start: self.world.start,
            exit: self.world.exit,
            state: self.state,
            collected_count: self.collected_count,
            total_count: self.total_placed,
        }
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Pickups collected so far this run
    pub fn collected_count(&self) -> usize {
        self.collected_count
    }

    /// Pickups placed this run (the win denominator)
    pub fn total_placed(&self) -> usize {
        self.total_placed
    }

    /// The player's current state
    pub fn player(&self) -> &Player {
        &self.world.player
    }

    /// The grid for the current run
    pub fn grid(&self) -> &Grid {
        &self.world.grid
    }

    /// The configuration this session was built with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
