//! CLI tool for gridview - renders the demo table headlessly and outputs JSON
//!
//! Usage:
//!   gridview_cli                                  # 20 x 2000 demo, 1280 x 720 viewport
//!   gridview_cli --rows 50 --cols 5               # Smaller demo table
//!   gridview_cli --width 400 --height 320         # Viewport size
//!   gridview_cli --scroll 0 100000 --scroll 40 0  # Apply scroll deltas in order
//!   gridview_cli -o frame.json                    # Output JSON to file
//!
//! Set `RUST_LOG=gridview=trace` to log every render pass to stderr.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use serde::Serialize;
use std::env;
use std::fs;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

use gridview::demo::{demo_columns, demo_data_source, DEMO_COLUMNS, DEMO_ROWS};
use gridview::render::DrawOp;
use gridview::{FrameSnapshot, GridConfig, RecordingSurface, VirtualTable};

const USAGE: &str = "Usage: gridview_cli [--rows N] [--cols N] [--width W] [--height H] \
                     [--scroll DX DY]... [-o output.json]";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output {
    snapshot: FrameSnapshot,
    batch_draws: usize,
    ops: Vec<DrawOp>,
}

struct Args {
    rows: usize,
    cols: usize,
    width: f64,
    height: f64,
    scrolls: Vec<(f64, f64)>,
    output: Option<String>,
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    eprintln!("{USAGE}");
    std::process::exit(1);
}

fn value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).map(|s| s.parse::<T>()) {
        Some(Ok(v)) => v,
        _ => fail(&format!("Missing or invalid value for {flag}")),
    }
}

fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();
    let mut parsed = Args {
        rows: DEMO_ROWS,
        cols: DEMO_COLUMNS,
        width: 1280.0,
        height: 720.0,
        scrolls: Vec::new(),
        output: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rows" => {
                parsed.rows = value(&args, i + 1, "--rows");
                i += 2;
            }
            "--cols" => {
                parsed.cols = value(&args, i + 1, "--cols");
                i += 2;
            }
            "--width" => {
                parsed.width = value(&args, i + 1, "--width");
                i += 2;
            }
            "--height" => {
                parsed.height = value(&args, i + 1, "--height");
                i += 2;
            }
            "--scroll" => {
                let dx = value(&args, i + 1, "--scroll");
                let dy = value(&args, i + 2, "--scroll");
                parsed.scrolls.push((dx, dy));
                i += 3;
            }
            "-o" => {
                parsed.output = Some(value(&args, i + 1, "-o"));
                i += 2;
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => fail(&format!("Unknown argument: {other}")),
        }
    }
    parsed
}

fn main() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();

    let args = parse_args();

    let columns = demo_columns(args.cols);
    let data = demo_data_source(args.rows);
    let surface = RecordingSurface::new(args.width, args.height);
    let mut table = match VirtualTable::new(surface, columns, data, GridConfig::default()) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error building table: {}", e);
            std::process::exit(1);
        }
    };

    for (dx, dy) in &args.scrolls {
        table.handle_scroll(*dx, *dy);
    }

    let output = Output {
        snapshot: table.snapshot(),
        batch_draws: table.surface().batch_draws(),
        ops: table.surface().paint(),
    };

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&output) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
