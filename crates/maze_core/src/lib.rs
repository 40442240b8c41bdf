//! # Maze Core
//!
//! The simulation core for a first-person maze exploration game.
//!
//! ## Features
//!
//! - **Procedural Generation**: Perfect mazes via randomized recursive backtracking
//! - **Collision Resolution**: Sphere-vs-wall-box movement resolution
//! - **First-Person Controller**: Per-tick look + movement integration
//! - **Session Orchestration**: Pickup collection, win detection, restart
//!
//! The core is renderer-agnostic: the host feeds an [`input::InputState`]
//! snapshot into [`session::GameSession::tick`] once per frame and renders
//! from the returned events plus [`session::GameSession::snapshot`]. No
//! rendering, windowing, or input-device API appears anywhere in this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use maze_core::prelude::*;
//!
//! fn main() -> Result<(), SessionError> {
//!     let config = SimulationConfig::default().with_pickup_count(4);
//!     let mut session = GameSession::new(config, 42)?;
//!     session.start();
//!
//!     let input = InputState::default();
//!     for event in session.tick(&input) {
//!         match event {
//!             SessionEvent::ItemCollected { id } => println!("collected {id}"),
//!             SessionEvent::GameWon => println!("won!"),
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod events;
pub mod foundation;
pub mod input;
pub mod maze;
pub mod physics;
pub mod placement;
pub mod player;
pub mod session;

/// Common imports for core users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, SimulationConfig},
        events::SessionEvent,
        foundation::math::{Vec2, Vec3},
        input::InputState,
        maze::{Cell, Grid},
        physics::{CollisionWorld, WallCollider},
        placement::{Pickup, PickupKind},
        player::Player,
        session::{GameSession, SceneSnapshot, SessionError, SessionState},
    };
}
