use std::collections::BinaryHeap;

use relief_core::Coord;

use crate::TerrainGrid;
use crate::distance::{euclidean, grid_euclidean};
use crate::grid::OpenRef;

impl TerrainGrid {
    /// Heuristic estimate of the remaining cost from `c` to `goal`:
    /// the straight line between the two grid indices, scaled by the
    /// cell spacing into edge-cost units.
    ///
    /// The scaled estimate never exceeds the true remaining cost: a 3-D
    /// edge cost is never smaller than its ground-plane projection, and
    /// elevation only ever adds on top. A* therefore keeps its optimality
    /// guarantee on any terrain. Dropping the scaling would silently
    /// overestimate whenever the spacing is below one world unit and
    /// cost A* that guarantee.
    fn heuristic(&self, c: Coord, goal: Coord) -> f32 {
        self.cell_spacing() * grid_euclidean(c, goal)
    }

    /// A* search: Dijkstra's frontier keyed by `g + h` with an early
    /// exit as soon as the goal is popped.
    pub(crate) fn astar(&mut self, start: usize, goal: usize) {
        let goal_c = self.coord(goal);

        let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
        open.push(OpenRef {
            idx: start,
            key: self.heuristic(self.coord(start), goal_c),
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if self.node_at(ci).visited {
                continue;
            }
            self.node_at_mut(ci).visited = true;
            self.stats.expanded += 1;

            if ci == goal {
                break;
            }

            let current_d = self.node_at(ci).distance;
            let current_pos = self.node_at(ci).position;
            let cc = self.coord(ci);

            nbuf.clear();
            self.neighbors(cc, &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };
                let n = self.node_at(ni);
                if !n.walkable || n.visited {
                    continue;
                }
                let cand = current_d + euclidean(current_pos, n.position);
                if cand < n.distance {
                    let n = self.node_at_mut(ni);
                    n.distance = cand;
                    n.parent = ci;
                    self.stats.relaxed += 1;
                    open.push(OpenRef {
                        idx: ni,
                        key: cand + self.heuristic(nc, goal_c),
                    });
                }
            }
        }

        self.nbuf = nbuf;
    }
}
