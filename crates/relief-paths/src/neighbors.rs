use relief_core::Coord;

use crate::TerrainGrid;

impl TerrainGrid {
    /// Append the in-bounds 8-connected neighbors of `c` (every cell at
    /// Chebyshev distance 1) to `buf`. The caller clears `buf` before
    /// calling.
    ///
    /// The scan order is fixed, so the result is identical on every call
    /// for a given grid, keeping searches reproducible.
    pub fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for dz in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dz == 0 {
                    continue;
                }
                let n = c.shift(dx, dz);
                if self.contains(n) {
                    buf.push(n);
                }
            }
        }
    }
}
