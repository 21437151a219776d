//! maze_view - render the map and first-person views of a grid maze to PNG.
//!
//! USAGE:
//! ```bash
//! RUST_LOG=debug cargo run --bin maze_view -- \
//!     --cols 6 --rows 4 --open-interior \
//!     --x 0.5 --y 0.5 --dir 30 --fov 60 \
//!     --map map.png --view view.png
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use mazecull::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_IMAGE_SIDE};
use mazecull::prelude::*;

/// One wall to open, written `col,row,direction`.
#[derive(Debug, Clone, Copy)]
struct OpenWall {
    col: usize,
    row: usize,
    direction: Direction,
}

fn parse_open_wall(s: &str) -> Result<OpenWall, String> {
    let parts: Vec<&str> = s.split(',').collect();
    let [col, row, direction] = parts.as_slice() else {
        return Err(format!("expected col,row,direction but got `{s}`"));
    };
    Ok(OpenWall {
        col: col.trim().parse().map_err(|e| format!("bad column `{col}`: {e}"))?,
        row: row.trim().parse().map_err(|e| format!("bad row `{row}`: {e}"))?,
        direction: direction.parse()?,
    })
}

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Cells along x
    #[arg(long, default_value_t = 8)]
    cols: usize,

    /// Cells along y
    #[arg(long, default_value_t = 8)]
    rows: usize,

    /// Edge length of a square cell
    #[arg(long, default_value_t = 1.0)]
    cell_size: f32,

    /// Open every interior wall
    #[arg(long)]
    open_interior: bool,

    /// Open one wall, e.g. `2,3,east` (repeatable)
    #[arg(long = "open", value_name = "COL,ROW,DIR", value_parser = parse_open_wall)]
    open: Vec<OpenWall>,

    /// Viewer x position
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    x: f32,

    /// Viewer y position
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    y: f32,

    /// View direction in degrees, counter-clockwise from +x
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    dir: f32,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    fov: f32,

    /// Image width in pixels
    #[arg(
        long,
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..=MAX_IMAGE_SIDE as i64)
    )]
    width: u32,

    /// Image height in pixels
    #[arg(
        long,
        default_value_t = DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(u32).range(1..=MAX_IMAGE_SIDE as i64)
    )]
    height: u32,

    /// Where to write the map view
    #[arg(long, value_name = "FILE", default_value = "map.png")]
    map: PathBuf,

    /// Where to write the first-person view
    #[arg(long, value_name = "FILE", default_value = "view.png")]
    view: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    let mut maze = Maze::grid(opts.cols, opts.rows, opts.cell_size, opts.cell_size)
        .context("building maze grid")?;
    if opts.open_interior {
        maze.open_interior();
    }
    for wall in &opts.open {
        maze.open_wall(wall.col, wall.row, wall.direction)
            .with_context(|| format!("opening {} wall of cell ({}, {})", wall.direction, wall.col, wall.row))?;
    }

    let view = ViewConfig {
        x: opts.x,
        y: opts.y,
        dir_degrees: opts.dir,
        fov_degrees: opts.fov,
        ..ViewConfig::default()
    };
    let mut viewer = Viewer::from_config(&view);
    let placed = viewer.position();
    let cell = maze
        .move_viewer(&mut viewer, 0.0, 0.0, 0.0)
        .context("placing viewer")?;
    if viewer.position() != placed {
        warn!(
            "viewer moved from ({}, {}) to ({}, {}) inside cell {cell}",
            placed.x,
            placed.y,
            viewer.position().x,
            viewer.position().y
        );
    }
    let config = RenderConfig::default().with_size(opts.width, opts.height);

    let visible = VisibleWalls::collect(&maze, &viewer, &config)
        .context("collecting visible walls")?;
    info!(
        "{} visible wall pieces across {} cells",
        visible.walls.len(),
        visible.cells.len()
    );

    let mut renderer = Renderer::new(config.width, config.height);

    MapView::new(&maze, &config).draw(&mut renderer, &maze, &viewer, &visible, &config);
    renderer
        .save_png(&opts.map)
        .with_context(|| format!("writing {}", opts.map.display()))?;

    FirstPersonView::new(&config).draw(&mut renderer, &maze, &viewer, &visible, &config);
    renderer
        .save_png(&opts.view)
        .with_context(|| format!("writing {}", opts.view.display()))?;

    Ok(())
}
