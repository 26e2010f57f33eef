use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use cork_logo::{Emitted, Error, RenderRequest, Variant};

/// Generate The Cork logo as PNG or SVG at any size.
#[derive(Parser, Debug)]
#[command(name = "cork-logo", version, about)]
struct Cli {
    /// Output width and height in pixels
    #[arg(long, default_value_t = 180)]
    size: u32,

    /// Output filename
    #[arg(long, default_value = "logo.png")]
    output: PathBuf,

    /// Color variant; `none` leaves the background transparent
    #[arg(long, value_enum, default_value_t = Variant::None)]
    variant: Variant,

    /// Add the rounded-rect background (for app icons)
    #[arg(long)]
    background: bool,

    /// Output SVG instead of PNG
    #[arg(long)]
    svg_only: bool,
}

impl From<Cli> for RenderRequest {
    fn from(cli: Cli) -> Self {
        RenderRequest {
            size: cli.size,
            variant: cli.variant,
            with_background: cli.background,
            svg_only: cli.svg_only,
            output: cli.output,
        }
    }
}

const MISSING_RASTERIZER: [&str; 3] = [
    "Error: PNG output needs the `raster` feature. Reinstall with:",
    "  cargo install cork-logo --features raster",
    "or pass --svg-only to write the SVG instead.",
];

/// Print the outcome of a render to `out`.
///
/// A missing rasterizer is reported, not treated as a failure.
fn report<W: Write>(
    outcome: cork_logo::Result<Emitted>,
    request: &RenderRequest,
    out: &mut W,
) -> anyhow::Result<()> {
    match outcome {
        Ok(emitted) => writeln!(out, "{}", emitted)?,
        Err(Error::RasterizerUnavailable) => {
            for line in MISSING_RASTERIZER {
                writeln!(out, "{}", line)?;
            }
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to write {}", request.output.display()))
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let request = RenderRequest::from(Cli::parse());
    let outcome = cork_logo::render(&request);
    report(outcome, &request, &mut std::io::stdout().lock())
}
