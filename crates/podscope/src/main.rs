//! podscope — terminal viewer for pod observation grids.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod render;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use podscope_core::config::{GridConfig, TIME_COLUMN_WIDTH};
use podscope_core::provider::{FileSource, PodSource};
use podscope_core::view::{ColumnKey, ViewState, Viewport, col_at_x, window};

// ============================================================
// CLI
// ============================================================

#[derive(Parser)]
#[command(name = "podscope", about = "Pod observation grid viewer", version = podscope_core::VERSION)]
struct Args {
    /// Path to a pod document (JSON with "pod" and "observations").
    path: PathBuf,

    /// Viewport width in pixels. Defaults to 1200.
    #[arg(long, env = "PODSCOPE_WIDTH", value_parser = parse_width)]
    width: Option<f64>,

    /// Number of visible rows.
    #[arg(long, default_value = "20", env = "PODSCOPE_ROWS")]
    rows: usize,

    /// First visible row (0 = most recent observation).
    #[arg(long, default_value = "0")]
    scroll_row: usize,

    /// Horizontal scroll offset in pixels.
    #[arg(long, default_value = "0")]
    scroll_x: f64,

    /// Time column width in pixels.
    #[arg(long, default_value_t = TIME_COLUMN_WIDTH, value_parser = parse_width)]
    time_width: f64,

    /// Resize a column: TITLE[@GROUP]=WIDTH (e.g. "temp@engine=200"). Repeatable.
    #[arg(long, value_parser = parse_resize)]
    resize: Vec<(ColumnKey, f64)>,

    /// Resize the column under a grid x position: X=WIDTH (e.g. "300=120"). Repeatable.
    #[arg(long, value_parser = parse_resize_at)]
    resize_at: Vec<(f64, f64)>,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is warn level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Widest pixel width accepted on the command line.
const MAX_WIDTH_PX: f64 = 100_000.0;

/// Parses a pixel width in `(0, MAX_WIDTH_PX]`.
fn parse_width(s: &str) -> Result<f64, String> {
    let width = s
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid width '{}': {}", s, e))?;
    if !(width > 0.0 && width <= MAX_WIDTH_PX) {
        return Err(format!(
            "width must be in (0, {}] pixels, got '{}'",
            MAX_WIDTH_PX, s
        ));
    }
    Ok(width)
}

/// Parses `TITLE[@GROUP]=WIDTH` into a column key and width.
fn parse_resize(s: &str) -> Result<(ColumnKey, f64), String> {
    let (column, width) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected TITLE[@GROUP]=WIDTH, got '{}'", s))?;
    let width = parse_width(width)?;
    let (title, group) = column.split_once('@').unwrap_or((column, ""));
    if title.is_empty() {
        return Err(format!("empty column title in '{}'", s));
    }
    Ok((ColumnKey::new(title, group), width))
}

/// Parses `X=WIDTH` into a grid x position and width.
fn parse_resize_at(s: &str) -> Result<(f64, f64), String> {
    let (x, width) = s
        .split_once('=')
        .ok_or_else(|| format!("expected X=WIDTH, got '{}'", s))?;
    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid position in '{}': {}", s, e))?;
    if !x.is_finite() {
        return Err(format!("invalid position in '{}'", s));
    }
    Ok((x, parse_width(width)?))
}

/// Resizes the column under grid position `x`, as a drag on its header would.
fn resize_at(state: ViewState, x: f64, width: f64) -> ViewState {
    let Some(key) = col_at_x(state.columns(), x).map(|i| state.columns()[i].key()) else {
        warn!(x, "resize ignored: no column at position");
        return state;
    };
    match state.resize(&key, width) {
        Ok(resized) => resized,
        Err(e) => {
            warn!(error = %e, "resize ignored");
            state
        }
    }
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Default level is WARN so log lines do not interleave with the grid.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("podscope={},podscope_core={}", level, level))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let config = GridConfig {
        time_column_width: args.time_width,
        ..GridConfig::default()
    };

    let mut source = FileSource::new(&args.path);
    info!(source = %source.describe(), "loading pod");
    let doc = match source.load() {
        Ok(doc) => doc,
        Err(e) => {
            error!(error = %e, "failed to load pod");
            eprintln!("podscope: {}", e);
            process::exit(1);
        }
    };

    let title = doc
        .pod
        .name
        .clone()
        .unwrap_or_else(|| args.path.display().to_string());
    let (schema, observations) = doc.into_parts();

    let mut state = ViewState::build(schema, observations, args.width, &config);
    if !state.is_built() {
        println!("{}: no observations", title);
        return;
    }

    for (key, width) in &args.resize {
        state = match state.resize(key, *width) {
            Ok(resized) => resized,
            Err(e) => {
                warn!(error = %e, "resize ignored");
                state
            }
        };
    }
    for (x, width) in &args.resize_at {
        state = resize_at(state, *x, *width);
    }

    let viewport = Viewport {
        scroll_x: args.scroll_x,
        scroll_y: 0.0,
        width: config.viewport_width(args.width),
        height: args.rows as f64 * config.row_height,
    }
    .scroll_to_row(args.scroll_row, config.row_height);

    let rows = viewport.visible_rows(config.row_height, state.row_count());
    let cols = viewport.visible_cols(state.columns());
    debug!(?rows, ?cols, grid_width = state.total_width(), "visible range");

    if let Some(grid) = window(&state, rows, cols) {
        println!("{} ({} observations)", title, state.row_count());
        print!("{}", render::render_window(&grid));
    }
}
