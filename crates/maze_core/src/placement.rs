//! Start/exit anchoring and pickup scattering
//!
//! Runs once per session, after generation: derives the world positions
//! of the start and exit cells and scatters pickups over a random subset
//! of plain Path cells. The *placed* count (which may be below the
//! requested count on small mazes) is what the session uses as the win
//! denominator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::foundation::math::Vec3;
use crate::maze::Grid;

/// Cosmetic pickup variants
///
/// The kind only affects how the host renders a pickup; collection
/// physics are identical across the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    /// Glowing crystal shard
    Crystal,
    /// Spinning coin
    Coin,
    /// Floating orb
    Orb,
    /// Old key
    Key,
}

impl PickupKind {
    /// The fixed palette pickups are drawn from
    pub const PALETTE: [PickupKind; 4] = [
        PickupKind::Crystal,
        PickupKind::Coin,
        PickupKind::Orb,
        PickupKind::Key,
    ];
}

/// A collectible item somewhere in the maze
#[derive(Debug, Clone)]
pub struct Pickup {
    /// Stable identifier, unique within one session
    pub id: u32,
    /// Cosmetic variant
    pub kind: PickupKind,
    /// World position (hovering at the configured pickup height)
    pub position: Vec3,
    /// Set once the player has collected this pickup
    pub collected: bool,
}

/// Result of entity placement for one session
#[derive(Debug, Clone)]
pub struct Placement {
    /// World position of the start cell center
    pub start: Vec3,
    /// World position of the exit cell center
    pub exit: Vec3,
    /// Placed pickups; `pickups.len()` is the win denominator
    pub pickups: Vec<Pickup>,
}

/// Selects start/exit world anchors and scatters pickups
pub struct EntityPlacer;

impl EntityPlacer {
    /// Place entities on a generated grid
    ///
    /// Pickup locations are drawn from Path cells only (never Start,
    /// Exit, or Wall). At most `min(desired_count, candidates)` pickups
    /// are placed; callers must read the actual count from the result.
    pub fn place<R: Rng>(
        grid: &Grid,
        desired_count: usize,
        cell_size: f32,
        pickup_height: f32,
        rng: &mut R,
    ) -> Placement {
        let (start_col, start_row) = grid.start();
        let (exit_col, exit_row) = grid.exit();
        let start = grid.cell_to_world(start_col, start_row, cell_size);
        let exit = grid.cell_to_world(exit_col, exit_row, cell_size);

        let mut candidates = grid.plain_path_cells();
        candidates.shuffle(rng);

        let count = desired_count.min(candidates.len());
        if count < desired_count {
            log::warn!(
                "requested {desired_count} pickups but only {count} path cells are available"
            );
        }

        let pickups = candidates
            .into_iter()
            .take(count)
            .enumerate()
            .map(|(i, (col, row))| {
                let mut position = grid.cell_to_world(col, row, cell_size);
                position.y = pickup_height;
                Pickup {
                    id: i as u32,
                    kind: *PickupKind::PALETTE
                        .choose(rng)
                        .unwrap_or(&PickupKind::Crystal),
                    position,
                    collected: false,
                }
            })
            .collect();

        Placement {
            start,
            exit,
            pickups,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Cell, MazeGenerator};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid_and_rng(seed: u64) -> (Grid, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = MazeGenerator::generate(11, &mut rng).unwrap();
        (grid, rng)
    }

    #[test]
    fn test_pickups_only_on_plain_path_cells() {
        let (grid, mut rng) = grid_and_rng(17);
        let placement = EntityPlacer::place(&grid, 8, 2.0, 0.8, &mut rng);

        for pickup in &placement.pickups {
            // Invert the world mapping to recover the source cell
            let half = grid.size() as f32 / 2.0;
            let col = (pickup.position.x / 2.0 + half) as usize;
            let row = (pickup.position.z / 2.0 + half) as usize;
            assert_eq!(grid.cell(col, row), Some(Cell::Path));
        }
    }

    #[test]
    fn test_placed_count_capped_by_candidates() {
        let (grid, mut rng) = grid_and_rng(3);
        let candidates = grid.plain_path_cells().len();
        let placement = EntityPlacer::place(&grid, candidates + 50, 2.0, 0.8, &mut rng);
        assert_eq!(placement.pickups.len(), candidates);
    }

    #[test]
    fn test_placed_count_matches_request_when_room() {
        let (grid, mut rng) = grid_and_rng(3);
        let placement = EntityPlacer::place(&grid, 3, 2.0, 0.8, &mut rng);
        assert_eq!(placement.pickups.len(), 3);
    }

    #[test]
    fn test_pickup_ids_unique() {
        let (grid, mut rng) = grid_and_rng(8);
        let placement = EntityPlacer::place(&grid, 10, 2.0, 0.8, &mut rng);
        let mut ids: Vec<u32> = placement.pickups.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), placement.pickups.len());
    }

    #[test]
    fn test_pickups_hover_at_configured_height() {
        let (grid, mut rng) = grid_and_rng(8);
        let placement = EntityPlacer::place(&grid, 5, 2.0, 1.25, &mut rng);
        for pickup in &placement.pickups {
            assert!((pickup.position.y - 1.25).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_start_and_exit_anchor_world_positions() {
        let mut rng = StdRng::seed_from_u64(4);
        let grid = MazeGenerator::generate(21, &mut rng).unwrap();
        let placement = EntityPlacer::place(&grid, 0, 2.0, 0.8, &mut rng);

        let (ec, er) = grid.exit();
        // Exit is (19, 19) on a size-21 grid: (19 - 10.5) * 2.0 = 17.0
        assert_eq!((ec, er), (19, 19));
        assert!((placement.exit.x - 17.0).abs() < f32::EPSILON);
        assert!((placement.exit.z - 17.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let (grid, _) = grid_and_rng(12);
        let mut rng_a = StdRng::seed_from_u64(77);
        let mut rng_b = StdRng::seed_from_u64(77);
        let a = EntityPlacer::place(&grid, 6, 2.0, 0.8, &mut rng_a);
        let b = EntityPlacer::place(&grid, 6, 2.0, 0.8, &mut rng_b);
        for (pa, pb) in a.pickups.iter().zip(&b.pickups) {
            assert_eq!(pa.kind, pb.kind);
            assert_eq!(pa.position, pb.position);
        }
    }
}
