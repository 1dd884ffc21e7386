//! Node storage and grid construction.

use std::fmt;

use relief_core::{Coord, Vec3};

use crate::strategy::{SearchStats, Strategy};
use crate::traits::{HeightSampler, ObstacleProbe};

/// Sentinel parent index meaning "no predecessor".
pub(crate) const NO_PARENT: usize = usize::MAX;

/// A single grid cell: world position, walkability, and the transient
/// per-run search state.
#[derive(Debug, Clone)]
pub struct Node {
    /// World-space position; `y` is the sampled elevation plus the
    /// configured vertical offset.
    pub position: Vec3,
    /// Whether the cell may appear on a path. Only
    /// [`TerrainGrid::refresh_walkability`] changes this.
    pub walkable: bool,
    /// Best known cost from the start node; `f32::INFINITY` until the
    /// cell is first reached. Only ever lowered during a run.
    pub distance: f32,
    /// Set by the priority strategies when the node is finalized
    /// (popped from the frontier, never re-enqueued).
    pub visited: bool,
    /// Set on the nodes of the most recently extracted path.
    pub on_path: bool,
    /// Flat index of the predecessor on the best-known path, or
    /// [`NO_PARENT`]. Exposed as [`TerrainGrid::predecessor`].
    pub(crate) parent: usize,
}

impl Node {
    fn new(position: Vec3) -> Self {
        Self {
            position,
            walkable: true,
            distance: f32::INFINITY,
            visited: false,
            on_path: false,
            parent: NO_PARENT,
        }
    }
}

/// Reference into the node array, ordered by search key for use in
/// `BinaryHeap`.
#[derive(Clone, Copy)]
pub(crate) struct OpenRef {
    pub(crate) idx: usize,
    pub(crate) key: f32,
}

impl Eq for OpenRef {}

impl PartialEq for OpenRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other.key.total_cmp(&self.key)
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Parameters for [`TerrainGrid::build`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// World-space extent of the covered terrain; `bounds.x` and
    /// `bounds.z` are divided by the cell spacing to derive grid
    /// dimensions (`bounds.y` is unused).
    pub bounds: Vec3,
    /// World distance between adjacent cells on each ground axis.
    pub cell_spacing: f32,
    /// Added to every sampled elevation, lifting nodes above the surface.
    pub vertical_offset: f32,
}

/// Errors raised while building a [`TerrainGrid`]. No partial grid is
/// ever produced.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// The derived grid dimensions were zero or negative.
    EmptyBounds { width: i32, depth: i32 },
    /// The cell spacing was not a finite positive number.
    InvalidSpacing(f32),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBounds { width, depth } => {
                write!(f, "terrain bounds produce an empty {width}x{depth} grid")
            }
            Self::InvalidSpacing(s) => write!(f, "cell spacing {s} is not a positive number"),
        }
    }
}

impl std::error::Error for BuildError {}

/// A fixed-size grid of [`Node`]s overlaid on a height-sampled surface.
///
/// Built once from an external elevation source; never resized. Holds the
/// currently selected [`Strategy`] and the scratch buffers the searches
/// reuse between runs.
#[derive(Debug)]
pub struct TerrainGrid {
    nodes: Vec<Node>,
    width: i32,
    depth: i32,
    cell_spacing: f32,
    pub(crate) strategy: Strategy,
    pub(crate) stats: SearchStats,
    // Shared scratch buffer for neighbor queries.
    pub(crate) nbuf: Vec<Coord>,
}

impl TerrainGrid {
    /// Build a grid covering `cfg.bounds` with one node per
    /// `cfg.cell_spacing` step, each positioned at the sampled surface
    /// height plus `cfg.vertical_offset`.
    pub fn build<S: HeightSampler>(cfg: GridConfig, sampler: &S) -> Result<Self, BuildError> {
        if !cfg.cell_spacing.is_finite() || cfg.cell_spacing <= 0.0 {
            return Err(BuildError::InvalidSpacing(cfg.cell_spacing));
        }
        let width = (cfg.bounds.x / cfg.cell_spacing).floor() as i32;
        let depth = (cfg.bounds.z / cfg.cell_spacing).floor() as i32;
        if width <= 0 || depth <= 0 {
            return Err(BuildError::EmptyBounds { width, depth });
        }

        let mut nodes = Vec::with_capacity((width as usize) * (depth as usize));
        for z in 0..depth {
            for x in 0..width {
                let wx = x as f32 * cfg.cell_spacing;
                let wz = z as f32 * cfg.cell_spacing;
                let wy = sampler.sample(wx, wz) + cfg.vertical_offset;
                nodes.push(Node::new(Vec3::new(wx, wy, wz)));
            }
        }
        log::debug!("built {width}x{depth} terrain grid, spacing {}", cfg.cell_spacing);

        Ok(Self {
            nodes,
            width,
            depth,
            cell_spacing: cfg.cell_spacing,
            strategy: Strategy::default(),
            stats: SearchStats::default(),
            nbuf: Vec::with_capacity(8),
        })
    }

    /// Re-evaluate every node's walkability against an external obstacle
    /// check. This is the only place walkability changes; nothing is
    /// cached between calls.
    pub fn refresh_walkability<P: ObstacleProbe>(&mut self, probe: &P) {
        for node in &mut self.nodes {
            node.walkable = !probe.is_blocked(node.position);
        }
    }

    /// Reset the transient per-run state of every node: distance back to
    /// `f32::INFINITY`, predecessor and path/visited flags cleared.
    /// Walkability is untouched.
    pub fn reset_run(&mut self) {
        for node in &mut self.nodes {
            node.distance = f32::INFINITY;
            node.visited = false;
            node.on_path = false;
            node.parent = NO_PARENT;
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a grid index to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.z as usize) * (self.width as usize) + c.x as usize)
    }

    /// Convert a flat index back to a grid index.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        let w = self.width as usize;
        Coord::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Whether `c` lies inside `[0, width) × [0, depth)`.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.x < self.width && c.z >= 0 && c.z < self.depth
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Number of cells along the world X axis.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of cells along the world Z axis.
    #[inline]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// World distance between adjacent cells.
    #[inline]
    pub fn cell_spacing(&self) -> f32 {
        self.cell_spacing
    }

    /// The node at `c`, or `None` if out of range.
    pub fn node(&self, c: Coord) -> Option<&Node> {
        self.idx(c).map(|i| &self.nodes[i])
    }

    /// Best known cost from the start of the last run, or
    /// `f32::INFINITY` if `c` is out of range or was never reached.
    pub fn distance_at(&self, c: Coord) -> f32 {
        match self.idx(c) {
            Some(i) => self.nodes[i].distance,
            None => f32::INFINITY,
        }
    }

    /// Predecessor of `c` on the best-known path, if any.
    pub fn predecessor(&self, c: Coord) -> Option<Coord> {
        let i = self.idx(c)?;
        let p = self.nodes[i].parent;
        if p == NO_PARENT {
            None
        } else {
            Some(self.coord(p))
        }
    }

    /// Whether `c` lies on the most recently extracted path.
    pub fn is_on_path(&self, c: Coord) -> bool {
        self.idx(c).is_some_and(|i| self.nodes[i].on_path)
    }

    pub(crate) fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    pub(crate) fn node_at_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }
}
