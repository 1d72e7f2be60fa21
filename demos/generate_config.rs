//! Write a pipeline configuration with default values
//!
//! With no path the JSON goes to stdout; `--seed N` pins clustering.

use color_emotions::{EmotionError, PipelineConfig};
use std::{env, path::PathBuf, process};

fn main() {
    if let Err(message) = run(env::args().skip(1).collect()) {
        eprintln!("{}", message);
        eprintln!("Usage: generate_config [--seed N] [output.json]");
        process::exit(1);
    }
}

fn run(args: Vec<String>) -> Result<(), String> {
    let mut config = PipelineConfig::default();
    let mut output = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            let value = args.next().ok_or("--seed requires a value")?;
            let seed = value
                .parse::<u64>()
                .map_err(|_| format!("invalid seed '{}'", value))?;
            config.seed = Some(seed);
        } else if output.is_none() {
            output = Some(PathBuf::from(arg));
        } else {
            return Err(format!("unexpected argument '{}'", arg));
        }
    }

    match output {
        Some(path) => {
            config
                .to_json_file(&path)
                .map_err(|e: EmotionError| e.to_string())?;
            eprintln!(
                "Wrote {} (k = {}, {}x{} samples)",
                path.display(),
                config.n_clusters,
                config.sample_width,
                config.sample_height
            );
        }
        None => {
            let json = serde_json::to_string_pretty(&config).map_err(|e| e.to_string())?;
            println!("{}", json);
        }
    }
    Ok(())
}
