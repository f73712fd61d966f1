//! tint - color conversion and raster generation CLI
//!
//! Examples:
//!   tint convert FF8020                      # one color in every space
//!   tint convert FF8020 -s hsl               # one space
//!   tint convert FF8020 -s hsl -f "{H:1}"    # custom template
//!   tint contrast 202020 FAFAFA              # WCAG report
//!   tint scheme FF8020 --kind triadic
//!   tint gradient -o ramp.argb -W 256 -H 64 "linear 0 256 0 0 0 1 0 0 1 2 FFFF0000 0 FF0000FF 1"
//!   tint noise -o noise.argb --kind perlin --seed 7

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tint_core::{ALL_TAGS, Color, SpaceTag};
use tint_gradient::Gradient;
use tint_raster::PixelBuffer;
use tint_spaces::{fmt, scheme, wcag};

#[derive(Parser)]
#[command(name = "tint")]
#[command(author, version, about = "Color conversion and raster generation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a color in one or all color models
    #[command(visible_alias = "c")]
    Convert {
        /// Color as RRGGBB or AARRGGBB hex
        color: String,

        /// Color space tag (omit for all)
        #[arg(short, long)]
        space: Option<String>,

        /// Template with {COMPONENT} / {COMPONENT:precision} placeholders
        #[arg(short, long, requires = "space")]
        format: Option<String>,
    },

    /// WCAG contrast report for a foreground/background pair
    Contrast {
        /// Foreground color (hex)
        foreground: String,
        /// Background color (hex)
        background: String,
    },

    /// Generate a color scheme
    Scheme {
        /// Base color (hex)
        color: String,

        /// Scheme family
        #[arg(short, long, value_enum, default_value_t = SchemeKind::Monochromatic)]
        kind: SchemeKind,

        /// Swatch count (monochromatic / analogous)
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,

        /// Hue increment in degrees (analogous / triadic / tetradic)
        #[arg(short, long)]
        angle: Option<f32>,
    },

    /// Rasterize a serialized gradient to a raw ARGB file
    #[command(visible_alias = "g")]
    Gradient {
        /// Gradient in the flat text format
        spec: String,

        /// Output file (row-major ARGB bytes)
        #[arg(short, long)]
        output: PathBuf,

        /// Output width
        #[arg(short = 'W', long, default_value_t = 256)]
        width: usize,

        /// Output height
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,
    },

    /// Generate procedural noise to a raw ARGB file
    Noise {
        /// Output file (row-major ARGB bytes)
        #[arg(short, long)]
        output: PathBuf,

        /// Generator
        #[arg(short, long, value_enum, default_value_t = NoiseKind::Perlin)]
        kind: NoiseKind,

        /// Output width
        #[arg(short = 'W', long, default_value_t = 256)]
        width: usize,

        /// Output height
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,

        /// Feature scale in pixels
        #[arg(long, default_value_t = 32.0)]
        scale: f32,

        /// Octave count
        #[arg(long, default_value_t = 4)]
        octaves: u32,

        /// RNG seed (omit for entropy)
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemeKind {
    Monochromatic,
    Analogous,
    Triadic,
    Tetradic,
}

#[derive(Clone, Copy, ValueEnum)]
enum NoiseKind {
    Perlin,
    Simplex,
    Fbm,
    Voronoi,
    Plasma,
    Terrain,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    match cli.command {
        Commands::Convert { color, space, format } => convert(&color, space.as_deref(), format.as_deref()),
        Commands::Contrast { foreground, background } => contrast(&foreground, &background),
        Commands::Scheme { color, kind, count, angle } => run_scheme(&color, kind, count, angle),
        Commands::Gradient { spec, output, width, height } => gradient(&spec, &output, width, height),
        Commands::Noise { output, kind, width, height, scale, octaves, seed } => {
            noise(&output, kind, width, height, scale, octaves, seed)
        }
    }
}

/// Parses `RRGGBB` or `AARRGGBB` hex into a color.
fn parse_color(s: &str) -> Result<Color> {
    let hex = s.trim().trim_start_matches('#');
    let packed = match hex.len() {
        6 => 0xFF00_0000 | u32::from_str_radix(hex, 16)?,
        8 => u32::from_str_radix(hex, 16)?,
        n => bail!("expected 6 or 8 hex digits, got {n}"),
    };
    Ok(Color::from_argb(packed))
}

fn convert(color: &str, space: Option<&str>, template: Option<&str>) -> Result<()> {
    let c = parse_color(color).context("bad color")?;
    match space {
        Some(tag) => {
            let tag: SpaceTag = tag.parse()?;
            let line = match template {
                Some(t) => fmt::render(c, tag, t)?,
                None => fmt::render_default(c, tag)?,
            };
            println!("{line}");
        }
        None => {
            for &tag in ALL_TAGS {
                println!("{:>14}  {}", tag.name(), fmt::render_default(c, tag)?);
            }
        }
    }
    Ok(())
}

fn contrast(fg: &str, bg: &str) -> Result<()> {
    let fg = parse_color(fg).context("bad foreground")?;
    let bg = parse_color(bg).context("bad background")?;
    let ratio = wcag::contrast_ratio(fg, bg);
    println!("contrast ratio: {ratio:.2}:1");
    println!("WCAG AA  (>= 4.5): {}", pass_str(wcag::passes_aa(fg, bg)));
    println!("WCAG AAA (>= 7.0): {}", pass_str(wcag::passes_aaa(fg, bg)));
    Ok(())
}

fn pass_str(ok: bool) -> &'static str {
    if ok { "pass" } else { "fail" }
}

fn run_scheme(color: &str, kind: SchemeKind, count: usize, angle: Option<f32>) -> Result<()> {
    let c = parse_color(color).context("bad color")?;
    let colors = match kind {
        SchemeKind::Monochromatic => scheme::monochromatic(c, count),
        SchemeKind::Analogous => scheme::analogous(c, count, angle.unwrap_or(30.0)),
        SchemeKind::Triadic => scheme::triadic(c, angle.unwrap_or(120.0)).to_vec(),
        SchemeKind::Tetradic => scheme::tetradic(c, angle.unwrap_or(90.0)).to_vec(),
    };
    for c in colors {
        println!("{c}");
    }
    Ok(())
}

fn gradient(spec: &str, output: &PathBuf, width: usize, height: usize) -> Result<()> {
    let g: Gradient = spec.parse().context("bad gradient spec")?;
    let buf = PixelBuffer::from_gradient(width, height, &g);
    std::fs::write(output, buf.to_argb_bytes(width, height))
        .with_context(|| format!("writing {}", output.display()))?;
    println!("wrote {}x{} ARGB to {}", width, height, output.display());
    Ok(())
}

fn noise(
    output: &PathBuf,
    kind: NoiseKind,
    width: usize,
    height: usize,
    scale: f32,
    octaves: u32,
    seed: Option<u64>,
) -> Result<()> {
    let mut buf = PixelBuffer::filled(width, height, Color::BLACK);
    match kind {
        NoiseKind::Perlin => buf.perlin_noise(scale, octaves, 0.5, 2.0, seed),
        NoiseKind::Simplex => buf.simplex_noise(scale, octaves, 0.5, 2.0, seed),
        NoiseKind::Fbm => buf.fbm_noise(scale, octaves, 0.5, 2.0, seed),
        NoiseKind::Voronoi => buf.voronoi(24, 1.0, 2.0, seed),
        NoiseKind::Plasma => buf.plasma(),
        NoiseKind::Terrain => buf.diamond_square(0.8, 0.25, 4, seed),
    }
    std::fs::write(output, buf.to_argb_bytes(width, height))
        .with_context(|| format!("writing {}", output.display()))?;
    println!("wrote {}x{} ARGB to {}", width, height, output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_forms() {
        assert_eq!(parse_color("FF0000").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(parse_color("#80FF0000").unwrap(), Color::new(255, 0, 0, 128));
        assert!(parse_color("xyz").is_err());
        assert!(parse_color("FFFF").is_err());
    }
}
