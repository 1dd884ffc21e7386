use std::collections::BinaryHeap;

use crate::TerrainGrid;
use crate::distance::euclidean;
use crate::grid::OpenRef;

impl TerrainGrid {
    /// Priority-frontier search with finalize-on-pop.
    ///
    /// Pops the cheapest open node, finalizes it (`visited = true`), and
    /// relaxes its walkable, unfinalized neighbors. `BinaryHeap` has no
    /// decrease-key, so improvements are pushed as fresh entries and
    /// superseded ones are skipped on pop.
    ///
    /// There is no early exit on the goal: the search drains the whole
    /// reachable component, leaving every reachable node with its true
    /// shortest distance. The path is drawn afterwards from the
    /// predecessor chain.
    pub(crate) fn dijkstra(&mut self, start: usize) {
        let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
        open.push(OpenRef {
            idx: start,
            key: 0.0,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if self.node_at(ci).visited {
                // Stale entry, already finalized through a cheaper route.
                continue;
            }
            self.node_at_mut(ci).visited = true;
            self.stats.expanded += 1;

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
                    open.push(OpenRef { idx: ni, key: cand });
                }
            }
        }

        self.nbuf = nbuf;
    }
}
