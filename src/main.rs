//! Contrib Calendar CLI
//!
//! Usage:
//!   contrib-calendar [OPTIONS] --year <YEAR> [FILE]
//!
//! Options:
//!   -y, --year <YEAR>     Calendar year to render
//!   -p, --palette <FILE>  Palette file for tier colors (TOML format)
//!   -o, --output <FILE>   Write the SVG to a file instead of stdout
//!   -d, --debug           Print the computed layout to stderr
//!   -h, --help            Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;

use contrib_calendar::{render_json_with_config, Palette, RenderConfig, SvgConfig};

#[derive(Parser)]
#[command(name = "contrib-calendar")]
#[command(about = "Render a GitHub-style contribution calendar as SVG")]
struct Cli {
    /// Input JSON file mapping dates to counts (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Calendar year to render
    #[arg(short, long)]
    year: i32,

    /// Palette file for tier colors (TOML format)
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Write the SVG to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Debug mode: print the computed layout to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Load palette
    let palette = match &cli.palette {
        Some(path) => match Palette::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading palette '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Palette::default(),
    };

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

    // Files on disk get the XML declaration, inline output stays bare.
    let svg_config = SvgConfig::new().with_standalone(cli.output.is_some());
    let config = RenderConfig::new()
        .with_palette(palette)
        .with_svg(svg_config)
        .with_debug(cli.debug);

    match render_json_with_config(&source, cli.year, &config) {
        Ok(svg) => match &cli.output {
            Some(path) => {
                if let Err(e) = fs::write(path, svg) {
                    eprintln!("Error writing '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
            }
            None => {
                println!("{}", svg);
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
