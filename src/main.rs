//! Pen Sketcher CLI
//!
//! Usage:
//!   pen-sketcher [OPTIONS] [FILE]
//!
//! Reads comma-separated coordinates from FILE (or stdin) and writes
//! the rendered drawing to `<name>.pdf` in the current directory.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;

use pen_sketcher::{resolve_file_name, sketch, Color, Columns, PageSize, RenderParameters};

#[derive(Parser)]
#[command(name = "pen-sketcher")]
#[command(about = "Renders pen-plotter coordinate tables to PDF")]
struct Cli {
    /// Input file with x,y coordinates (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Input rows carry a third pen-lift column (draw only when the flag is 1)
    #[arg(short, long)]
    pen_lift: bool,

    /// Stroke color as a hex string (default "#010b13")
    #[arg(short, long)]
    color: Option<String>,

    /// Stroke width, 1 to 20 (default 2)
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u32).range(1..=20))]
    stroke_width: Option<u32>,

    /// Page size preset: a4 or letter (default a4)
    #[arg(long)]
    page_size: Option<PageSize>,

    /// Custom page width in inches (overrides the preset)
    #[arg(long)]
    page_width: Option<f64>,

    /// Custom page height in inches (overrides the preset)
    #[arg(long)]
    page_height: Option<f64>,

    /// Settings file supplying defaults (TOML format)
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Output document name; ".pdf" is appended (default "mno-<timestamp>")
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Settings file first, individual flags override it
    let mut params = match &cli.settings {
        Some(path) => match RenderParameters::from_file(path) {
            Ok(params) => params,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => RenderParameters::default(),
    };

    if let Some(hex) = &cli.color {
        match Color::from_hex(hex) {
            Ok(color) => params.stroke_color = color,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
    if let Some(width) = cli.stroke_width {
        params.stroke_width = width as f64;
    }
    if let Some(size) = cli.page_size {
        params = params.with_page_size(size);
    }
    if let Some(width) = cli.page_width {
        if width <= 0.0 {
            eprintln!("Error: page width must be positive");
            std::process::exit(1);
        }
        params.page_width = width;
    }
    if let Some(height) = cli.page_height {
        if height <= 0.0 {
            eprintln!("Error: page height must be positive");
            std::process::exit(1);
        }
        params.page_height = height;
    }

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let columns = if cli.pen_lift {
        Columns::Three
    } else {
        Columns::Two
    };

    let bytes = match sketch(&source, columns, &params) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let name = resolve_file_name(cli.output.as_deref(), Local::now().naive_local());
    let file = format!("{}.pdf", name);
    if let Err(e) = fs::write(&file, &bytes) {
        eprintln!("Error writing '{}': {}", file, e);
        std::process::exit(1);
    }
    println!("{}", file);
}

fn print_intro() {
    println!(
        r##"Pen Sketcher - renders pen-plotter coordinate tables to PDF

USAGE:
    pen-sketcher [OPTIONS] [FILE]
    cat drawing.csv | pen-sketcher

INPUT:
    Comma-separated rows, no header. Two shapes are accepted:
        x,y         every consecutive pair of rows is joined
        x,y,flag    with --pen-lift: a flag of 1 draws to the point,
                    anything else moves the pen without drawing

OPTIONS:
    -p, --pen-lift         Input rows carry the third pen-lift column
    -c, --color <HEX>      Stroke color (default "#010b13")
    -w, --stroke-width <N> Stroke width 1-20 (default 2)
    --page-size <SIZE>     a4 or letter (default a4)
    --page-width <IN>      Custom page width in inches
    --page-height <IN>     Custom page height in inches
    -s, --settings <FILE>  TOML settings file with defaults
    -o, --output <NAME>    Output name, ".pdf" appended
    -h, --help             Print help

QUICK START:
    printf '0,0\n200,200\n400,100\n' | pen-sketcher -o spiral

This joins the three points with two strokes and writes spiral.pdf."##
    );
}
