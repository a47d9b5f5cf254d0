#![deny(unsafe_code)]
//! CLI binary for colormath.
//!
//! Subcommands:
//! - `inspect <color>` — print channels, HSB and hex
//! - `from-ahsb <alpha> <hue> <saturation> <brightness>` — build a color
//! - `brightness|saturation <color> <amount>` — shift by percentage points
//! - `hue <color> <degrees>` — rotate hue
//! - `relate <color> <relationship>` — derive one related color
//! - `harmonies <color>` — derive all seven related colors
//! - `list` — print relationship names
//!
//! Colors are given as `AARRGGBB` or `RRGGBB`, optionally prefixed with `#`.
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.

mod error;

use clap::{Parser, Subcommand};
use colormath_core::{
    change_brightness, change_hue, change_saturation, color_from_ahsb, from_hex_string, harmonies,
    to_hex_string, to_hsb, Color, Relationship,
};
use error::CliError;
use serde_json::{json, Value};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "colormath", about = "HSB color math on ARGB hex colors")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a color's channels, hue, saturation and brightness.
    Inspect {
        /// Color as AARRGGBB or RRGGBB.
        color: String,
    },
    /// Build a color from alpha, hue, saturation and brightness.
    FromAhsb {
        /// Alpha, 0 to 255.
        #[arg(allow_negative_numbers = true)]
        alpha: i32,
        /// Hue in degrees, 0 to 360.
        #[arg(allow_negative_numbers = true)]
        hue: f32,
        /// Saturation, 0 to 1.
        #[arg(allow_negative_numbers = true)]
        saturation: f32,
        /// Brightness, 0 to 1.
        #[arg(allow_negative_numbers = true)]
        brightness: f32,
    },
    /// Shift brightness by a percentage (clamped).
    Brightness {
        color: String,
        #[arg(allow_negative_numbers = true)]
        amount: i32,
    },
    /// Shift saturation by a percentage (clamped).
    Saturation {
        color: String,
        #[arg(allow_negative_numbers = true)]
        amount: i32,
    },
    /// Rotate hue by a number of degrees.
    Hue {
        color: String,
        #[arg(allow_negative_numbers = true)]
        degrees: i32,
    },
    /// Derive a related color (complement, left-triad, ...).
    Relate {
        color: String,
        relationship: String,
    },
    /// Derive every related color.
    Harmonies { color: String },
    /// List relationship names.
    List,
}

fn parse_color(s: &str) -> Result<Color, CliError> {
    from_hex_string(s).map_err(|e| CliError::Input(format!("invalid color {s:?}: {e}")))
}

fn describe(color: Color) -> Value {
    let hsb = to_hsb(color);
    json!({
        "hex": to_hex_string(color),
        "alpha": color.alpha,
        "red": color.red,
        "green": color.green,
        "blue": color.blue,
        "hsb": hsb,
    })
}

fn print_color(color: Color, json_mode: bool) -> Result<(), CliError> {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&describe(color))?);
    } else {
        let hsb = to_hsb(color);
        println!(
            "{}  argb({}, {}, {}, {})  hsb({:.2}, {:.4}, {:.4})",
            to_hex_string(color),
            color.alpha,
            color.red,
            color.green,
            color.blue,
            hsb.hue,
            hsb.saturation,
            hsb.brightness,
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let names = Relationship::list_names();
            if cli.json {
                let info = json!({ "relationships": names });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Relationships:");
                for name in names {
                    println!("  {name}");
                }
            }
        }
        Command::Inspect { color } => {
            print_color(parse_color(&color)?, cli.json)?;
        }
        Command::FromAhsb {
            alpha,
            hue,
            saturation,
            brightness,
        } => {
            let color = color_from_ahsb(alpha, hue, saturation, brightness)?;
            print_color(color, cli.json)?;
        }
        Command::Brightness { color, amount } => {
            let input = parse_color(&color)?;
            print_color(change_brightness(input, amount), cli.json)?;
        }
        Command::Saturation { color, amount } => {
            let input = parse_color(&color)?;
            print_color(change_saturation(input, amount), cli.json)?;
        }
        Command::Hue { color, degrees } => {
            let input = parse_color(&color)?;
            print_color(change_hue(input, degrees)?, cli.json)?;
        }
        Command::Relate {
            color,
            relationship,
        } => {
            let input = parse_color(&color)?;
            let relationship = Relationship::from_name(&relationship)?;
            debug!(relationship = relationship.name(), offset = relationship.offset(), "relate");
            print_color(relationship.apply(input), cli.json)?;
        }
        Command::Harmonies { color } => {
            let input = parse_color(&color)?;
            let related = harmonies(input);
            if cli.json {
                let map: serde_json::Map<String, Value> = related
                    .into_iter()
                    .map(|(r, c)| (r.name().to_string(), describe(c)))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&Value::Object(map))?);
            } else {
                for (r, c) in related {
                    println!("{:<24}{}", r.name(), to_hex_string(c));
                }
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
