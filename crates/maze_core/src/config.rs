//! Simulation configuration
//!
//! All tunables the host may override live in [`SimulationConfig`]:
//! maze dimensions, movement and look parameters, and interaction radii.
//! Configurations can be built in code via the `with_*` setters or loaded
//! from TOML/RON files through the [`Config`] trait. Validation happens
//! before a session is constructed; nothing downstream re-checks sizes.

use serde::{Deserialize, Serialize};

/// Configuration trait for loading and saving config files
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A tunable fails validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// All tunables for one maze session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Maze grid dimension (cells per side, odd, at least 5)
    pub maze_size: usize,

    /// World-space edge length of one grid cell
    pub cell_size: f32,

    /// Height of every wall collider box
    pub wall_height: f32,

    /// Player camera height; the player's y never leaves this value
    pub eye_height: f32,

    /// Player displacement per tick (speed is distance-per-tick, not per-second)
    pub move_speed: f32,

    /// Radians of rotation per unit of look delta
    pub look_sensitivity: f32,

    /// Radius of the player's collision sphere
    pub player_radius: f32,

    /// Interaction radius of a pickup
    pub pickup_radius: f32,

    /// Interaction radius of the exit marker
    pub exit_radius: f32,

    /// Requested number of pickups (actual count may be lower on tiny mazes)
    pub pickup_count: usize,

    /// Cosmetic hover height of pickups (does not affect collection logic)
    pub pickup_height: f32,
}

impl SimulationConfig {
    /// Create a configuration with the standard tunables
    pub fn new() -> Self {
        Self {
            maze_size: 21,
            cell_size: 2.0,
            wall_height: 3.0,
            eye_height: 1.6,
            move_speed: 0.15,
            look_sensitivity: 0.002,
            player_radius: 0.45,
            pickup_radius: 0.5,
            exit_radius: 0.8,
            pickup_count: 6,
            pickup_height: 0.8,
        }
    }

    /// Set the maze dimension
    pub fn with_maze_size(mut self, size: usize) -> Self {
        self.maze_size = size;
        self
    }

    /// Set the cell edge length
    pub fn with_cell_size(mut self, size: f32) -> Self {
        self.cell_size = size;
        self
    }

    /// Set the per-tick movement speed
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Set the look sensitivity
    pub fn with_look_sensitivity(mut self, sensitivity: f32) -> Self {
        self.look_sensitivity = sensitivity;
        self
    }

    /// Set the requested pickup count
    pub fn with_pickup_count(mut self, count: usize) -> Self {
        self.pickup_count = count;
        self
    }

    /// Set the player collision radius
    pub fn with_player_radius(mut self, radius: f32) -> Self {
        self.player_radius = radius;
        self
    }

    /// Validate the configuration
    ///
    /// Sessions refuse to build from an invalid configuration, so a failed
    /// validation can never leave a partially generated grid behind.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.maze_size < 5 {
            return Err(ConfigError::Invalid(format!(
                "maze_size must be at least 5, got {}",
                self.maze_size
            )));
        }

        if self.maze_size % 2 == 0 {
            return Err(ConfigError::Invalid(format!(
                "maze_size must be odd, got {}",
                self.maze_size
            )));
        }

        if self.cell_size <= 0.0 || self.wall_height <= 0.0 {
            return Err(ConfigError::Invalid(
                "cell_size and wall_height must be positive".to_string(),
            ));
        }

        if self.move_speed <= 0.0 {
            return Err(ConfigError::Invalid(
                "move_speed must be positive".to_string(),
            ));
        }

        if self.player_radius <= 0.0 || self.pickup_radius <= 0.0 || self.exit_radius <= 0.0 {
            return Err(ConfigError::Invalid(
                "interaction radii must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for SimulationConfig {}
