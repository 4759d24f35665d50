//! Generate a default engine configuration file
//!
//! Creates a JSON config with all default parameters

use color_engine::EngineConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/color_engine.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = EngineConfig::default();

    match config.to_json_file(output_path) {
        Ok(()) => {
            let palette = &config.random_palette;
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!("  Default color: {}", config.default_color);
            eprintln!(
                "  Display: {:?}, analysis {}, harmonies {}",
                config.display.default_format,
                config.display.show_color_analysis,
                config.display.show_harmonies
            );
            eprintln!(
                "  Random palette: {} colors, {:.0}° apart, S {:.0}%-{:.0}%, L {:.0}%-{:.0}%",
                palette.size,
                palette.hue_step,
                palette.saturation_min * 100.0,
                palette.saturation_max * 100.0,
                palette.lightness_min * 100.0,
                palette.lightness_max * 100.0
            );
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
