//! First-person player state and per-tick movement integration

use crate::config::SimulationConfig;
use crate::foundation::math::{constants, utils, Vec3};
use crate::input::InputState;
use crate::physics::CollisionWorld;

/// The player avatar: a sphere at fixed eye height with a look direction
#[derive(Debug, Clone)]
pub struct Player {
    /// World position; y stays at the configured eye height
    pub position: Vec3,
    /// Heading in radians around the vertical axis
    pub yaw: f32,
    /// Look elevation in radians, clamped to [-pi/2, pi/2]
    pub pitch: f32,
}

impl Player {
    /// Spawn a player at a start anchor, facing along negative z
    pub fn spawn(start: &Vec3, eye_height: f32) -> Self {
        Self {
            position: Vec3::new(start.x, eye_height, start.z),
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Unit forward vector on the horizontal plane, from yaw only
    ///
    /// Pitch never contributes: movement stays on the floor plane no
    /// matter where the player is looking.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Unit right vector on the horizontal plane
    pub fn right(&self) -> Vec3 {
        let f = self.forward();
        Vec3::new(-f.z, 0.0, f.x)
    }
}

/// Integrates look and movement intent into the player each tick
pub struct PlayerController;

impl PlayerController {
    /// Advance the player by one tick
    ///
    /// Orientation first: look deltas scale by sensitivity and apply
    /// subtractively, with pitch clamped to straight up/down. Then
    /// movement: the combined intent vector is normalized and scaled to
    /// the per-tick speed (speed is distance-per-tick; the host calls
    /// this at a fixed cadence), proposed, and resolved against the
    /// collision world. A blocked move leaves the position untouched.
    pub fn tick(
        player: &mut Player,
        input: &InputState,
        config: &SimulationConfig,
        world: &CollisionWorld,
    ) {
        player.yaw -= input.look_delta.x * config.look_sensitivity;
        player.pitch -= input.look_delta.y * config.look_sensitivity;
        player.pitch = utils::clamp(player.pitch, -constants::HALF_PI, constants::HALF_PI);

        let velocity =
            player.forward() * input.forward_axis() + player.right() * input.right_axis();
        if velocity.magnitude_squared() == 0.0 {
            return;
        }

        let velocity = velocity.normalize() * config.move_speed;
        let proposed = player.position + velocity;
        let (resolved, _collided) =
            world.resolve_move(&player.position, &proposed, config.player_radius);
        player.position = resolved;
    }
}
