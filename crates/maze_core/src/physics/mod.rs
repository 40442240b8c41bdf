//! Static collision world and movement resolution

pub mod collision;

pub use collision::{CollisionWorld, WallCollider};
