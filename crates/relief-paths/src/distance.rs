use relief_core::{Coord, Vec3};

/// Full 3-D Euclidean distance between two world positions.
///
/// This is the edge cost between adjacent nodes: elevation change along a
/// slope makes the step more expensive than its ground-plane projection.
#[inline]
pub fn euclidean(a: Vec3, b: Vec3) -> f32 {
    (a - b).length()
}

/// Straight-line distance in grid-index space.
#[inline]
pub fn grid_euclidean(a: Coord, b: Coord) -> f32 {
    let dx = (a.x - b.x) as f32;
    let dz = (a.z - b.z) as f32;
    (dx * dx + dz * dz).sqrt()
}

/// Chebyshev (L∞) distance between two grid indices.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs().max((a.z - b.z).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_includes_elevation() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(euclidean(a, b), 5.0);
        // Same ground-plane step, but uphill.
        let c = Vec3::new(3.0, 0.0, 4.0);
        let d = Vec3::new(3.0, 12.0, 9.0);
        assert_eq!(euclidean(c, d), 13.0);
    }

    #[test]
    fn grid_euclidean_diagonal() {
        let d = grid_euclidean(Coord::new(0, 0), Coord::new(1, 1));
        assert!((d - std::f32::consts::SQRT_2).abs() < 1e-6);
        assert_eq!(grid_euclidean(Coord::new(2, 3), Coord::new(2, 3)), 0.0);
    }

    #[test]
    fn chebyshev_adjacency() {
        assert_eq!(chebyshev(Coord::new(0, 0), Coord::new(1, 1)), 1);
        assert_eq!(chebyshev(Coord::new(0, 0), Coord::new(-2, 1)), 2);
        assert_eq!(chebyshev(Coord::new(5, 5), Coord::new(5, 5)), 0);
    }
}
