//! **relief-core** — Pathfinding over height-sampled terrain grids (core geometry types).
//!
//! This crate provides the two coordinate types shared across the *relief*
//! workspace: [`Coord`], a dense 2-D index into a navigation grid, and
//! [`Vec3`], a world-space position whose `y` component carries elevation.

pub mod coord;
pub mod vec3;

pub use coord::Coord;
pub use vec3::Vec3;
