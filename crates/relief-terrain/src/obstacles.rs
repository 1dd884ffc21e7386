//! Sphere-collider obstacle sets.

use rand::Rng;
use relief_core::Vec3;
use relief_paths::ObstacleProbe;

/// A sphere collider standing in for a scene obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

/// A set of sphere colliders, probed the way a physics overlap query
/// would be: a position is blocked when a probe sphere placed there
/// overlaps any collider.
pub struct SphereField {
    pub spheres: Vec<Sphere>,
    /// Radius of the probe sphere placed at each queried position.
    pub probe_radius: f32,
}

impl SphereField {
    /// Probe radius used unless the caller overrides it.
    pub const DEFAULT_PROBE_RADIUS: f32 = 1.0;

    /// A field over the given colliders with the default probe radius.
    pub fn new(spheres: Vec<Sphere>) -> Self {
        Self {
            spheres,
            probe_radius: Self::DEFAULT_PROBE_RADIUS,
        }
    }

    /// Place `count` colliders of radius `radius` at positions drawn
    /// from `candidates`. Deterministic for a given `rng` state.
    pub fn scatter<R: Rng>(
        rng: &mut R,
        candidates: &[Vec3],
        count: usize,
        radius: f32,
    ) -> Self {
        let mut spheres = Vec::with_capacity(count.min(candidates.len()));
        if !candidates.is_empty() {
            for _ in 0..count {
                let center = candidates[rng.random_range(0..candidates.len())];
                spheres.push(Sphere { center, radius });
            }
        }
        Self::new(spheres)
    }

    /// Whether a probe sphere at `position` overlaps any collider.
    pub fn blocked(&self, position: Vec3) -> bool {
        self.spheres
            .iter()
            .any(|s| (s.center - position).length() < s.radius + self.probe_radius)
    }
}

impl ObstacleProbe for SphereField {
    fn is_blocked(&self, position: Vec3) -> bool {
        self.blocked(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use relief_core::Coord;
    use relief_paths::{GridConfig, Strategy, TerrainGrid};

    #[test]
    fn blocks_inside_overlap_range_only() {
        let field = SphereField::new(vec![Sphere {
            center: Vec3::new(10.0, 0.0, 0.0),
            radius: 2.0,
        }]);
        // Overlap threshold is collider radius + probe radius = 3.
        assert!(field.blocked(Vec3::new(10.0, 0.0, 0.0)));
        assert!(field.blocked(Vec3::new(12.5, 0.0, 0.0)));
        assert!(!field.blocked(Vec3::new(13.5, 0.0, 0.0)));
        assert!(field.blocked(Vec3::new(10.0, 2.9, 0.0)));
    }

    #[test]
    fn probe_radius_widens_the_check() {
        let mut field = SphereField::new(vec![Sphere {
            center: Vec3::ZERO,
            radius: 1.0,
        }]);
        assert!(!field.blocked(Vec3::new(2.5, 0.0, 0.0)));
        field.probe_radius = 2.0;
        assert!(field.blocked(Vec3::new(2.5, 0.0, 0.0)));
    }

    #[test]
    fn empty_field_blocks_nothing() {
        let field = SphereField::new(Vec::new());
        assert!(!field.blocked(Vec3::ZERO));
    }

    #[test]
    fn scattered_colliders_block_grid_nodes() {
        let cfg = GridConfig {
            bounds: Vec3::new(60.0, 0.0, 60.0),
            cell_spacing: 10.0,
            vertical_offset: 25.0,
        };
        let mut grid = TerrainGrid::build(cfg, &|_: f32, _: f32| 0.0).unwrap();
        let blocked_node = grid.node(Coord::new(3, 3)).unwrap().position;
        let field = SphereField::scatter(
            &mut StdRng::seed_from_u64(3),
            &[blocked_node],
            1,
            2.0,
        );
        grid.refresh_walkability(&field);
        assert!(!grid.node(Coord::new(3, 3)).unwrap().walkable);
        assert!(grid.node(Coord::new(0, 0)).unwrap().walkable);

        // The search routes around the blocked cell.
        grid.select(Strategy::AStar);
        let goal = Coord::new(5, 5);
        let path = grid.compute_path(Coord::new(0, 0), goal).unwrap();
        assert_eq!(path.last(), Some(&goal));
        assert!(!path.contains(&Coord::new(3, 3)));
    }
}
