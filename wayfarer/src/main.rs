//! Wayfarer — terminal demo for the relief terrain pathfinder.
//!
//! Generates hilly terrain, scatters sphere obstacles on it, and walks a
//! path between opposite corners of the navigation grid, re-running the
//! search on a tick cadence the way a host engine would. The engine
//! itself knows nothing about ticks or rendering; both live here.

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use relief_core::{Coord, Vec3};
use relief_paths::{GridConfig, Strategy, TerrainGrid};
use relief_terrain::{Heightfield, HillConfig, SphereField};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World extent of the terrain on both ground axes.
    #[arg(long, default_value_t = 640.0)]
    extent: f32,

    /// World distance between grid cells.
    #[arg(long, default_value_t = 20.0)]
    spacing: f32,

    /// Number of hills deposited on the terrain.
    #[arg(long, default_value_t = 30)]
    hills: usize,

    /// Number of sphere obstacles scattered per tick.
    #[arg(long, default_value_t = 14)]
    obstacles: usize,

    /// Search strategy: wave, dijkstra or astar.
    #[arg(long, default_value = "astar")]
    strategy: String,

    /// How many times to re-scatter obstacles and recompute the path.
    #[arg(long, default_value_t = 1)]
    ticks: usize,

    /// Seed for terrain and obstacle generation.
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Run all three strategies each tick and compare them.
    #[arg(long, default_value_t = false)]
    compare: bool,
}

/// Nodes sit this far above the sampled surface.
const VERTICAL_OFFSET: f32 = 25.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let strategy: Strategy = args.strategy.parse()?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let hill_cfg = HillConfig {
        cols: (args.extent / args.spacing).ceil() as usize + 1,
        rows: (args.extent / args.spacing).ceil() as usize + 1,
        sample_spacing: args.spacing,
        hills: args.hills,
        ..HillConfig::default()
    };
    let terrain = Heightfield::generate(&mut rng, &hill_cfg);

    let grid_cfg = GridConfig {
        bounds: Vec3::new(args.extent, 0.0, args.extent),
        cell_spacing: args.spacing,
        vertical_offset: VERTICAL_OFFSET,
    };
    let mut grid = TerrainGrid::build(grid_cfg, &terrain)?;
    grid.select(strategy);

    let start = Coord::new(0, 0);
    let goal = Coord::new(grid.width() - 1, grid.depth() - 1);
    println!(
        "{}x{} grid, spacing {}, {} -> {}",
        grid.width(),
        grid.depth(),
        args.spacing,
        start,
        goal
    );

    // Candidate obstacle positions are the node positions themselves, so
    // scattered colliders actually intersect the navigation layer.
    let mut candidates = Vec::new();
    for z in 0..grid.depth() {
        for x in 0..grid.width() {
            let c = Coord::new(x, z);
            if c != start && c != goal {
                if let Some(node) = grid.node(c) {
                    candidates.push(node.position);
                }
            }
        }
    }

    for tick in 0..args.ticks.max(1) {
        let field = SphereField::scatter(&mut rng, &candidates, args.obstacles, args.spacing / 2.0);
        grid.refresh_walkability(&field);

        if args.ticks > 1 {
            println!("\n--- tick {tick} ---");
        }
        if args.compare {
            for s in [Strategy::Wave, Strategy::Dijkstra, Strategy::AStar] {
                grid.select(s);
                report(&mut grid, start, goal)?;
            }
            grid.select(strategy);
        } else {
            report(&mut grid, start, goal)?;
            render(&grid, start, goal);
        }
    }
    Ok(())
}

/// Run one computation and print its outcome on a single line.
fn report(
    grid: &mut TerrainGrid,
    start: Coord,
    goal: Coord,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = grid.compute_path(start, goal)?;
    if path.is_empty() {
        println!("{:>8}: goal unreachable ({})", grid.strategy().to_string(), grid.last_stats());
    } else {
        println!(
            "{:>8}: {} node(s), cost {:.1} ({})",
            grid.strategy().to_string(),
            path.len(),
            grid.distance_at(goal),
            grid.last_stats()
        );
    }
    Ok(())
}

/// Draw the grid: `#` blocked, `*` on the path, `.` open ground.
fn render(grid: &TerrainGrid, start: Coord, goal: Coord) {
    for z in 0..grid.depth() {
        let mut line = String::with_capacity(grid.width() as usize * 2);
        for x in 0..grid.width() {
            let c = Coord::new(x, z);
            let ch = if c == start {
                'S'
            } else if c == goal {
                'G'
            } else if grid.is_on_path(c) {
                '*'
            } else if grid.node(c).is_some_and(|n| !n.walkable) {
                '#'
            } else {
                '.'
            };
            line.push(ch);
            line.push(' ');
        }
        println!("{line}");
    }
}
