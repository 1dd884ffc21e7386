use std::collections::VecDeque;

use crate::TerrainGrid;
use crate::distance::euclidean;

impl TerrainGrid {
    /// FIFO-relaxation wave search.
    ///
    /// The frontier is a plain queue rather than a priority queue, while
    /// edge costs vary (diagonals and slopes cost more), so a node can be
    /// dequeued before its cheapest route is known and re-enqueued when a
    /// better one appears later. The search stops as soon as the goal is
    /// dequeued, which means **the returned path is not guaranteed to be
    /// the cheapest one**. This is the intended contract of the wave
    /// strategy, a fast approximation; pick
    /// [`Strategy::Dijkstra`](crate::Strategy::Dijkstra) or
    /// [`Strategy::AStar`](crate::Strategy::AStar) when optimality
    /// matters.
    pub(crate) fn wave(&mut self, start: usize, goal: usize) {
        let mut frontier: VecDeque<usize> = VecDeque::new();
        frontier.push_back(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = frontier.pop_front() {
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
                if !n.walkable {
                    continue;
                }
                let cand = current_d + euclidean(current_pos, n.position);
                if cand < n.distance {
                    let n = self.node_at_mut(ni);
                    n.distance = cand;
                    n.parent = ci;
                    self.stats.relaxed += 1;
                    frontier.push_back(ni);
                }
            }
        }

        self.nbuf = nbuf;
    }
}
