use relief_core::Coord;

use crate::TerrainGrid;
use crate::grid::NO_PARENT;

impl TerrainGrid {
    /// Walk predecessor links back from `goal` and materialize the path
    /// in start-to-goal order.
    ///
    /// Returns an empty path unless the chain terminates at `start`;
    /// the chain root is the only node without a predecessor, so a root
    /// other than `start` means the goal was never reached. Every node
    /// on a non-empty result is flagged [`Node::on_path`](crate::Node)
    /// for the caller-facing view; the flag is cleared by
    /// [`reset_run`](TerrainGrid::reset_run).
    pub(crate) fn extract_path(&mut self, start: usize, goal: usize) -> Vec<Coord> {
        let mut chain = Vec::new();
        let mut ci = goal;
        loop {
            chain.push(ci);
            let parent = self.node_at(ci).parent;
            if parent == NO_PARENT {
                break;
            }
            ci = parent;
        }
        if chain.last() != Some(&start) {
            return Vec::new();
        }

        chain.reverse();
        let mut path = Vec::with_capacity(chain.len());
        for &i in &chain {
            self.node_at_mut(i).on_path = true;
            path.push(self.coord(i));
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use crate::{GridConfig, Strategy, TerrainGrid};
    use relief_core::{Coord, Vec3};

    fn grid() -> TerrainGrid {
        let cfg = GridConfig {
            bounds: Vec3::new(5.0, 0.0, 5.0),
            cell_spacing: 1.0,
            vertical_offset: 0.0,
        };
        TerrainGrid::build(cfg, &|_: f32, _: f32| 0.0).unwrap()
    }

    #[test]
    fn marks_path_nodes_and_only_them() {
        let mut grid = grid();
        grid.select(Strategy::AStar);
        let path = grid.compute_path(Coord::new(0, 0), Coord::new(4, 4)).unwrap();
        let mut flagged = 0;
        for z in 0..grid.depth() {
            for x in 0..grid.width() {
                if grid.is_on_path(Coord::new(x, z)) {
                    flagged += 1;
                    assert!(path.contains(&Coord::new(x, z)));
                }
            }
        }
        assert_eq!(flagged, path.len());
    }

    #[test]
    fn flags_cleared_on_next_run() {
        let mut grid = grid();
        grid.select(Strategy::Dijkstra);
        grid.compute_path(Coord::new(0, 0), Coord::new(4, 4)).unwrap();
        assert!(grid.is_on_path(Coord::new(0, 0)));
        grid.compute_path(Coord::new(0, 1), Coord::new(0, 3)).unwrap();
        // (4, 4) was on the first path but not the second.
        assert!(!grid.is_on_path(Coord::new(4, 4)));
    }

    #[test]
    fn no_flags_set_when_goal_unreached() {
        let mut grid = grid();
        grid.select(Strategy::Dijkstra);
        grid.refresh_walkability(&|p: Vec3| p.x == 3.0);
        let path = grid.compute_path(Coord::new(0, 0), Coord::new(4, 0)).unwrap();
        assert!(path.is_empty());
        for z in 0..grid.depth() {
            for x in 0..grid.width() {
                assert!(!grid.is_on_path(Coord::new(x, z)));
            }
        }
    }
}
