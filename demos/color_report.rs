//! Command-line interface for color_engine
//!
//! Prints the full report for one color, optionally with a contrast check
//! against a second color and a random palette.

use color_engine::{
    analyze, random_palette, ColorError, ColorReport, EngineConfig, HarmonyKind,
};
use std::{env, path::PathBuf, process};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "color_engine=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let args: Vec<String> = env::args().collect();

    let mut color_arg = None;
    let mut against_arg = None;
    let mut config_path = None;
    let mut show_palette = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--against" | "--config" if i + 1 >= args.len() => {
                eprintln!("Error: {} requires a value", args[i]);
                process::exit(1);
            }
            "--against" => {
                against_arg = Some(args[i + 1].clone());
                i += 1;
            }
            "--config" => {
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--palette" => show_palette = true,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if color_arg.is_none() {
                    color_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple colors provided");
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

    let config = match config_path {
        Some(path) => EngineConfig::from_json_file(&path).unwrap_or_else(|e| fail(&e)),
        None => EngineConfig::default(),
    };

    // No color argument means the configured default
    let color = color_arg.unwrap_or_else(|| config.default_color.to_string());
    let report = analyze(&color).unwrap_or_else(|e| fail(&e));

    print_report(&report, &config);

    if let Some(other) = against_arg {
        let other = analyze(&other).unwrap_or_else(|e| fail(&e));
        let contrast = report.contrast_with(other.rgb);
        eprintln!();
        eprintln!("Contrast against {}: {}", other.hex, contrast);
        for kind in contrast.rating.suitable_for() {
            eprintln!("  suitable for {:?}", kind);
        }
    }

    if show_palette {
        let palette = random_palette(&mut rand::thread_rng(), &config.random_palette)
            .unwrap_or_else(|e| fail(&e));
        eprintln!();
        eprintln!("Random palette:");
        for color in palette {
            eprintln!("  {}", config.display.default_format.render(color));
        }
    }
}

fn fail(error: &ColorError) -> ! {
    eprintln!("Analysis failed: {}", error);
    if error.is_recoverable() {
        eprintln!("Suggestion: {}", error.user_message());
    }
    process::exit(1);
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] [#rrggbb]", program_name);
    eprintln!();
    eprintln!("Print conversions, analysis and harmonies for a color.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --against COLOR  Check contrast against a second color");
    eprintln!("  --config FILE    Load engine configuration from a JSON file");
    eprintln!("  --palette        Also print a random palette");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} '#2d8cf0'", program_name);
    eprintln!("  {} '#767676' --against '#ffffff'", program_name);
}

fn print_report(report: &ColorReport, config: &EngineConfig) {
    // JSON on stdout for programmatic use
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing report: {}", e),
    }

    // Summary on stderr for human reading
    eprintln!();
    eprintln!("Color Summary:");
    eprintln!("  Hex:  {}", report.hex);
    eprintln!("  RGB:  {}", report.rgb);
    eprintln!("  HSL:  {}", report.hsl);
    eprintln!("  CMYK: {}", report.cmyk);
    eprintln!("  Luminance: {:.4}", report.luminance);

    if config.display.show_color_analysis {
        let analysis = &report.analysis;
        eprintln!(
            "  Brightness: {} ({})",
            analysis.brightness,
            if analysis.is_light { "light" } else { "dark" }
        );
        eprintln!("  Saturation: {}%", analysis.saturation);
        eprintln!("  Temperature: {:.3}", analysis.temperature);
    }

    if config.display.show_harmonies {
        eprintln!();
        eprintln!("Harmonies:");
        for kind in HarmonyKind::ALL {
            let colors: Vec<String> = report
                .harmonies
                .get(kind)
                .iter()
                .map(|&c| config.display.default_format.render(c))
                .collect();
            eprintln!("  {:<14} {}", kind.name(), colors.join(", "));
        }
    }
}
