// ABOUTME: Command-line entry point.
// ABOUTME: Runs contrast checks, contrast adjustment, and clamped cursor moves from the shell.

use std::str::FromStr;

use anyhow::Result;
use clap::Parser;

use cx_core::{adjusted_color_to_meet_contrast_ratio, contrast_ratio, Color, Config};
use cx_geometry::{clamped_move_with_inset, Point, Rect};

/// Contrast and cursor-clamping utilities.
#[derive(Debug, Parser)]
#[command(name = "cocoa-ext", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Print the contrast ratio of two colors
    Contrast {
        /// First color (#RRGGBB or #RRGGBBAA)
        first: Color,

        /// Second color
        second: Color,
    },

    /// Re-light a color to reach a contrast ratio against a reference
    Adjust {
        /// Color the result is measured against
        reference: Color,

        /// Color whose brightness is changed
        subject: Color,

        /// Target ratio, 1 to 21 (defaults to the configured ratio)
        ratio: Option<f64>,
    },

    /// Move a point, clamped to the screen holding it, and print it flipped
    Move {
        #[arg(allow_negative_numbers = true)]
        x: f64,

        #[arg(allow_negative_numbers = true)]
        y: f64,

        /// Horizontal offset, positive to the right (defaults to the configured step)
        #[arg(long, allow_negative_numbers = true)]
        dx: Option<f64>,

        /// Vertical offset, positive upward
        #[arg(long, allow_negative_numbers = true)]
        dy: Option<f64>,

        /// Screen bounds as x,y,width,height; the first one is used for flipping
        #[arg(required = true, allow_negative_numbers = true)]
        screens: Vec<ScreenArg>,
    },
}

/// Screen bounds given as `x,y,width,height`
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScreenArg(Rect);

impl FromStr for ScreenArg {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts = value
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid screen {:?}: {}", value, e))?;
        match parts.as_slice() {
            [x, y, width, height] => Ok(Self(Rect::new(*x, *y, *width, *height))),
            _ => Err(format!("screen must be x,y,width,height, got {:?}", value)),
        }
    }
}

fn run(command: Command, config: &Config) -> Result<String> {
    match command {
        Command::Contrast { first, second } => {
            let ratio = contrast_ratio(&first, &second)?;
            Ok(format!("{:.2}", ratio))
        }
        Command::Adjust {
            reference,
            subject,
            ratio,
        } => {
            let ratio = ratio.unwrap_or_else(|| config.contrast.ratio());
            let adjusted = adjusted_color_to_meet_contrast_ratio(ratio, &reference, &subject)?;
            let achieved = contrast_ratio(&adjusted, &reference)?;
            Ok(format!("{} ({:.2}:1)", adjusted.to_hex()?, achieved))
        }
        Command::Move {
            x,
            y,
            dx,
            dy,
            screens,
        } => {
            let screens: Vec<Rect> = screens.into_iter().map(|ScreenArg(rect)| rect).collect();
            let destination = clamped_move_with_inset(
                Point::new(x, y),
                dx.unwrap_or(config.cursor.step),
                dy.unwrap_or(0.0),
                &screens,
                config.cursor.edge_inset,
            )?;
            Ok(format!("{} {}", destination.x, destination.y))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = Config::load_or_default();
    tracing::info!(
        "Loaded config: default_ratio={} edge_inset={}",
        config.contrast.default_ratio,
        config.cursor.edge_inset
    );

    let output = run(cli.command, &config)?;
    println!("{}", output);

    Ok(())
}
