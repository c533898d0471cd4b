//! Command-line demo: generate a maze, solve it, draw the outcome.

use std::collections::HashSet;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;

use mazekit::{
    compare, generate, solve, Algorithm, Coord, Grid, MazeConfig, SearchResult,
};

#[derive(Parser, Debug)]
#[command(version, about = "Generate a random maze and race the search algorithms across it")]
struct Args {
    /// Grid height, clamped to [5, 60]
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Grid width, clamped to [5, 80]
    #[arg(long, default_value_t = 25)]
    cols: usize,

    /// Wall density, clamped to [0.05, 0.45]
    #[arg(long, default_value_t = 0.28)]
    density: f64,

    /// Start cell as "row,col"
    #[arg(long, default_value = "0,0", value_parser = parse_coord)]
    start: Coord,

    /// Goal cell as "row,col"; defaults to the bottom-right corner
    #[arg(long, value_parser = parse_coord)]
    goal: Option<Coord>,

    /// Algorithm to run (bfs, dfs, dijkstra, astar); omit to compare all four
    #[arg(long)]
    algorithm: Option<String>,

    /// Maze samples to try before settling for an unsolvable grid
    #[arg(long, default_value_t = mazekit::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// RNG seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_coord(value: &str) -> Result<Coord, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected \"row,col\", got {value:?}"))?;
    let row = row.trim().parse::<usize>().map_err(|e| e.to_string())?;
    let col = col.trim().parse::<usize>().map_err(|e| e.to_string())?;
    Ok(Coord::new(row, col))
}

/// Fold the raw arguments into a maze config. Dimensions and density are
/// clamped to serving limits and endpoints outside the (clamped) grid snap
/// back to their corners.
fn sanitize(args: &Args) -> MazeConfig {
    let rows = args.rows.clamp(5, 60);
    let cols = args.cols.clamp(5, 80);
    let density = args.density.clamp(0.05, 0.45);

    let mut start = args.start;
    if start.row >= rows || start.col >= cols {
        start = Coord::new(0, 0);
    }

    let mut goal = args.goal.unwrap_or(Coord::new(rows - 1, cols - 1));
    if goal.row >= rows || goal.col >= cols {
        goal = Coord::new(rows - 1, cols - 1);
    }

    MazeConfig {
        rows,
        cols,
        wall_probability: density,
        start,
        goal,
        max_attempts: args.max_attempts,
        seed: args.seed,
    }
}

/// ASCII view of the maze, with the solution path overlaid when given.
fn render(grid: &Grid, result: Option<&SearchResult<Coord>>, start: Coord, goal: Coord) -> String {
    let on_path: HashSet<Coord> = result
        .map(|r| r.path.iter().copied().collect())
        .unwrap_or_default();

    let mut out = String::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let coord = Coord::new(row, col);
            let ch = if coord == start {
                'S'
            } else if coord == goal {
                'G'
            } else if on_path.contains(&coord) {
                '*'
            } else if grid.is_open(coord) {
                '.'
            } else {
                '#'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let config = sanitize(&args);

    let grid = generate(&config);

    match args.algorithm.as_deref() {
        Some(name) => {
            let algorithm = match Algorithm::from_str(name) {
                Ok(algorithm) => algorithm,
                Err(error) => {
                    eprintln!("error: {error:?}");
                    return ExitCode::from(2);
                }
            };

            let result = solve(algorithm, &grid, config.start, config.goal);
            print!("{}", render(&grid, Some(&result), config.start, config.goal));
            if result.found() {
                println!(
                    "{algorithm}: {} steps, {} cells visited",
                    result.path.len() - 1,
                    result.visited.len()
                );
            } else {
                println!(
                    "{algorithm}: no path found ({} cells visited)",
                    result.visited.len()
                );
            }
        }
        None => {
            print!("{}", render(&grid, None, config.start, config.goal));

            let mut reports = compare(&grid, config.start, config.goal);
            // Fastest first
            reports.sort_by_key(|report| report.elapsed);

            println!(
                "{:<10} {:>12} {:>8} {:>6} {:>6}",
                "algorithm", "time", "visited", "steps", "found"
            );
            for report in &reports {
                println!(
                    "{:<10} {:>9.3} ms {:>8} {:>6} {:>6}",
                    report.algorithm.to_string(),
                    report.elapsed.as_secs_f64() * 1000.0,
                    report.visited_count,
                    report.path_length,
                    if report.success { "yes" } else { "no" },
                );
            }
        }
    }

    ExitCode::SUCCESS
}
