//! Strategy selection and the public search entry point.

use std::fmt;
use std::str::FromStr;

use relief_core::Coord;

use crate::TerrainGrid;

/// Which search runs on the next [`TerrainGrid::compute_path`] call.
///
/// The selector is read once at the start of each computation; switching
/// it mid-run is impossible because the computation holds `&mut` access
/// to the grid for its whole duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// FIFO relaxation wave: fast, path not guaranteed cheapest.
    #[default]
    Wave,
    /// Priority frontier, exhausts the reachable component, optimal.
    Dijkstra,
    /// Priority frontier with goal heuristic and early exit, optimal.
    AStar,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wave => "wave",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        };
        f.write_str(name)
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wave" => Ok(Self::Wave),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" => Ok(Self::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// An unrecognized strategy name.
#[derive(Debug, Clone)]
pub struct ParseStrategyError(String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy {:?}; expected wave, dijkstra or astar",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

/// Counters from the most recent computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off the frontier and processed (stale heap entries
    /// excluded).
    pub expanded: usize,
    /// Successful relaxations: how often a node's distance was lowered.
    pub relaxed: usize,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} expanded, {} relaxed", self.expanded, self.relaxed)
    }
}

/// Errors raised by [`TerrainGrid::compute_path`]. An unreachable goal
/// is *not* an error; it yields an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A start or goal index outside `[0, width) × [0, depth)`.
    /// Rejected before any node state is touched.
    OutOfRange {
        coord: Coord,
        width: i32,
        depth: i32,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                coord,
                width,
                depth,
            } => write!(f, "{coord} is outside the {width}x{depth} grid"),
        }
    }
}

impl std::error::Error for PathError {}

impl TerrainGrid {
    /// Set the strategy used by subsequent [`compute_path`](Self::compute_path) calls.
    pub fn select(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// The currently selected strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Counters from the most recent computation.
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Compute a path from `start` to `goal` with the selected strategy.
    ///
    /// Resets all per-run node state, runs the search to completion, and
    /// extracts the path from the predecessor chain. Returns the node
    /// sequence in start-to-goal order; an empty vector means no walkable
    /// route connects the two cells. `start == goal` yields the
    /// single-node path at cost 0.
    pub fn compute_path(&mut self, start: Coord, goal: Coord) -> Result<Vec<Coord>, PathError> {
        // Validate both endpoints before touching any node state.
        let Some(si) = self.idx(start) else {
            return Err(self.out_of_range(start));
        };
        let Some(gi) = self.idx(goal) else {
            return Err(self.out_of_range(goal));
        };

        self.reset_run();
        self.stats = SearchStats::default();
        self.node_at_mut(si).distance = 0.0;

        match self.strategy {
            Strategy::Wave => self.wave(si, gi),
            Strategy::Dijkstra => self.dijkstra(si),
            Strategy::AStar => self.astar(si, gi),
        }

        let path = self.extract_path(si, gi);
        log::debug!(
            "{} {start} -> {goal}: {} node(s), {}",
            self.strategy,
            path.len(),
            self.stats,
        );
        Ok(path)
    }

    fn out_of_range(&self, coord: Coord) -> PathError {
        PathError::OutOfRange {
            coord,
            width: self.width(),
            depth: self.depth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridConfig;
    use relief_core::Vec3;

    fn grid() -> TerrainGrid {
        let cfg = GridConfig {
            bounds: Vec3::new(4.0, 0.0, 4.0),
            cell_spacing: 1.0,
            vertical_offset: 0.0,
        };
        TerrainGrid::build(cfg, &|_: f32, _: f32| 0.0).unwrap()
    }

    #[test]
    fn rejects_out_of_range_before_any_mutation() {
        let mut grid = grid();
        grid.select(Strategy::Dijkstra);
        grid.compute_path(Coord::new(0, 0), Coord::new(3, 3)).unwrap();
        assert!(grid.is_on_path(Coord::new(3, 3)));

        let err = grid
            .compute_path(Coord::new(0, 0), Coord::new(4, 3))
            .unwrap_err();
        assert_eq!(
            err,
            PathError::OutOfRange {
                coord: Coord::new(4, 3),
                width: 4,
                depth: 4,
            }
        );
        // The failed call must not have reset the previous run's state.
        assert!(grid.is_on_path(Coord::new(3, 3)));
        assert_eq!(grid.distance_at(Coord::new(0, 0)), 0.0);

        let err = grid
            .compute_path(Coord::new(-1, 0), Coord::new(3, 3))
            .unwrap_err();
        assert!(matches!(err, PathError::OutOfRange { coord, .. } if coord == Coord::new(-1, 0)));
    }

    #[test]
    fn every_strategy_solves_the_same_request() {
        for strategy in [Strategy::Wave, Strategy::Dijkstra, Strategy::AStar] {
            let mut grid = grid();
            grid.select(strategy);
            assert_eq!(grid.strategy(), strategy);
            let path = grid.compute_path(Coord::new(0, 0), Coord::new(3, 3)).unwrap();
            assert_eq!(path.first(), Some(&Coord::new(0, 0)), "{strategy}");
            assert_eq!(path.last(), Some(&Coord::new(3, 3)), "{strategy}");
        }
    }

    #[test]
    fn selection_takes_effect_on_next_run() {
        let mut grid = grid();
        grid.select(Strategy::Dijkstra);
        grid.compute_path(Coord::new(0, 0), Coord::new(3, 3)).unwrap();
        // Dijkstra drains the whole component.
        assert_eq!(grid.last_stats().expanded, 16);
        grid.select(Strategy::AStar);
        grid.compute_path(Coord::new(0, 0), Coord::new(3, 3)).unwrap();
        assert!(grid.last_stats().expanded < 16);
    }

    #[test]
    fn strategy_names_round_trip() {
        for strategy in [Strategy::Wave, Strategy::Dijkstra, Strategy::AStar] {
            let parsed: Strategy = strategy.to_string().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
        assert_eq!("A*".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert!("bfs".parse::<Strategy>().is_err());
    }
}
