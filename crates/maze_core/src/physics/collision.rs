//! Sphere-versus-wall-box collision resolution
//!
//! The collision world holds one axis-aligned box per Wall cell and
//! resolves the player's movement sphere against all of them. The
//! resolution policy is deliberately conservative: any penetrating move
//! is rejected outright and the player stays put. There is no sliding
//! and no partial resolution, so diagonal movement into a corner blocks
//! completely instead of deflecting. Simple, deterministic, and cheap
//! to reason about; walls never move, so nothing else is needed.

use crate::foundation::math::Vec3;
use crate::maze::Grid;

/// An axis-aligned wall box, one per Wall cell
#[derive(Debug, Clone, Copy)]
pub struct WallCollider {
    /// Box center in world space
    pub center: Vec3,
    /// Half-extents along each axis
    pub half_extents: Vec3,
}

impl WallCollider {
    /// Creates a new wall collider from center and half-extents
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Closest point on this box to the given point
    ///
    /// Clamps the point into the box's extent per axis; for points
    /// inside the box this returns the point itself.
    pub fn closest_point(&self, point: &Vec3) -> Vec3 {
        let min = self.center - self.half_extents;
        let max = self.center + self.half_extents;
        Vec3::new(
            point.x.clamp(min.x, max.x),
            point.y.clamp(min.y, max.y),
            point.z.clamp(min.z, max.z),
        )
    }

    /// Whether a sphere at `center` with `radius` penetrates this box
    pub fn intersects_sphere(&self, center: &Vec3, radius: f32) -> bool {
        let closest = self.closest_point(center);
        (center - closest).magnitude_squared() < radius * radius
    }
}

/// All static wall colliders for one session
#[derive(Debug, Clone)]
pub struct CollisionWorld {
    colliders: Vec<WallCollider>,
}

impl CollisionWorld {
    /// Build the collider set from a generated grid
    ///
    /// Wall boxes are centered on their cell; every open cell spans its
    /// full width, so the box footprint is exactly one cell.
    pub fn from_grid(grid: &Grid, cell_size: f32, wall_height: f32) -> Self {
        let half_extents = Vec3::new(cell_size / 2.0, wall_height / 2.0, cell_size / 2.0);
        let colliders = grid
            .iter_cells()
            .filter(|(_, _, cell)| !cell.is_open())
            .map(|(col, row, _)| {
                let mut center = grid.cell_to_world(col, row, cell_size);
                center.y = wall_height / 2.0;
                WallCollider::new(center, half_extents)
            })
            .collect();
        Self { colliders }
    }

    /// The collider list, for the host to build wall meshes from
    pub fn colliders(&self) -> &[WallCollider] {
        &self.colliders
    }

    /// Number of wall boxes in the world
    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    /// Resolve a proposed move of the player sphere
    ///
    /// Returns the final position and whether a collision occurred. A
    /// proposed position that penetrates any wall box rejects the whole
    /// move: the final position is `current`, untouched.
    pub fn resolve_move(
        &self,
        current: &Vec3,
        proposed: &Vec3,
        player_radius: f32,
    ) -> (Vec3, bool) {
        for collider in &self.colliders {
            if collider.intersects_sphere(proposed, player_radius) {
                return (*current, true);
            }
        }
        (*proposed, false)
    }
}
