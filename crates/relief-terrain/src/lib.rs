//! **relief-terrain** — concrete terrain collaborators for the relief
//! pathfinder.
//!
//! The search engine in `relief-paths` reaches the outside world through
//! two traits: `HeightSampler` for elevation and `ObstacleProbe` for
//! blocked positions. This crate supplies ready-made implementations:
//!
//! - [`Heightfield`]: a bilinearly interpolated elevation lattice, with
//!   a procedural hill generator for demos and tests.
//! - [`SphereField`]: a set of sphere colliders probed the way a scene
//!   physics overlap query would be.

pub mod heightfield;
pub mod obstacles;

pub use heightfield::{Heightfield, HillConfig};
pub use obstacles::{Sphere, SphereField};
