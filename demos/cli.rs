//! Command-line interface for color_emotions
//!
//! Analyzes an image file and prints the emotion report

use color_emotions::{
    analyze_file, color::stripe::save_palette_stripe, EmotionReport, PipelineConfig,
};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut stripe_path = None;
    let mut seed = None;
    let mut clusters = None;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => config_path = Some(PathBuf::from(option_value(&args, &mut i))),
            "--stripe" => stripe_path = Some(PathBuf::from(option_value(&args, &mut i))),
            "--seed" => seed = Some(parse_number::<u64>(&args, &mut i)),
            "--clusters" => clusters = Some(parse_number::<usize>(&args, &mut i)),
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image_path = Path::new(&image_path_str);

    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    let mut config = match config_path {
        Some(path) => match PipelineConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Error: {}", error);
                process::exit(1);
            }
        },
        None => PipelineConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    if let Some(clusters) = clusters {
        config.n_clusters = clusters;
    }

    match analyze_file(image_path, &config) {
        Ok(report) => {
            print_report(&report);
            if let Some(path) = stripe_path {
                match save_palette_stripe(
                    &report.colors(),
                    config.stripe_width,
                    config.stripe_height,
                    &path,
                ) {
                    Ok(()) => eprintln!("Palette stripe saved to {}", path.display()),
                    Err(e) => eprintln!("Warning: {}", e),
                }
            }
        }
        Err(error) => {
            eprintln!("Analysis failed: {}", error);
            if error.is_recoverable() {
                eprintln!("{}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn option_value(args: &[String], i: &mut usize) -> String {
    *i += 1;
    match args.get(*i) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {} requires a value", args[*i - 1]);
            process::exit(1);
        }
    }
}

fn parse_number<T: std::str::FromStr>(args: &[String], i: &mut usize) -> T {
    let value = option_value(args, i);
    match value.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Error: {} expects a number, got '{}'", args[*i - 1], value);
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Read the emotional tone of an image from its dominant colors.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config PATH    Load pipeline settings from a JSON file");
    eprintln!("  --clusters N     Number of palette colors (default: 3)");
    eprintln!("  --seed N         Pin the clustering seed for repeatable output");
    eprintln!("  --stripe PATH    Save the palette as a PNG stripe");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Set RUST_LOG=debug to trace clustering.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photo.jpg", program_name);
    eprintln!("  {} --seed 7 --stripe palette.png photo.png", program_name);
}

fn print_report(report: &EmotionReport) {
    // JSON to stdout for programmatic use
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing report: {}", e),
    }

    // Summary to stderr for human reading
    eprintln!();
    eprintln!("Palette:");
    for color in &report.palette {
        eprintln!(
            "  {}  H={:.0}° S={:.2} B={:.2}",
            color.hex, color.hsb.hue, color.hsb.saturation, color.hsb.brightness
        );
    }
    eprintln!();
    eprintln!("{}", report.summary());
}
