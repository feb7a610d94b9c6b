/*
 * QR Code generator library
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! Command-line QR Code generator: encodes one piece of text into a symbol
//! and writes it out as text art, an SVG document, or a BMP image.

use clap::{Parser, ValueEnum};
use qrgen::{Generator, Mask, QrCodeEcc, QrError, Version};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[cfg(feature = "render")]
use qrgen::render::{svg::SvgOptions, text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Text art using a space/"##" pair, one character per module.
    Ascii,
    /// Text art using the Unicode full block, one character per module.
    Narrow,
    /// A standalone SVG document.
    Svg,
    /// A 1-bit BMP image.
    Bmp,
}

/// Encodes text into a QR Code symbol (ISO/IEC 18004).
#[derive(Parser, Debug)]
#[command(name = "qrgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to encode.
    value: String,

    /// Error correction level.
    #[arg(long, default_value = "m")]
    ecl: QrCodeEcc,

    /// Disables boosting the error correction level when a version has spare capacity.
    #[arg(long)]
    fixecl: bool,

    /// Forces a specific version (1-40) instead of searching for the smallest fit.
    #[arg(long)]
    version: Option<u8>,

    /// Forces a specific mask pattern (0-7) instead of evaluating all eight.
    #[arg(long)]
    mask: Option<u8>,

    /// Width of the light border around the symbol, in modules.
    #[arg(long, default_value_t = 4)]
    quiet: i32,

    /// Swaps dark and light modules.
    #[arg(long)]
    invert: bool,

    /// Folds lowercase ASCII letters to uppercase instead of forcing byte mode.
    #[arg(long)]
    uppercase: bool,

    /// Output format.
    #[arg(long = "output", value_enum, default_value_t = OutputFormat::Ascii)]
    output: OutputFormat,

    /// Output file; writes to stdout if omitted.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Scale factor for BMP output, in pixels per module.
    #[arg(long = "bmp-scale", default_value_t = 4)]
    bmp_scale: u32,

    /// Fill color for SVG output.
    #[arg(long = "svg-color", default_value = "currentColor")]
    svg_color: String,

    /// Module size for SVG output, in user units.
    #[arg(long = "svg-point", default_value_t = 1.0)]
    svg_point: f64,

    /// Corner rounding fraction (0.0-1.0) applied to every module in SVG output.
    #[arg(long = "svg-round", default_value_t = 0.0)]
    svg_round: f64,

    /// Corner rounding fraction applied to finder pattern modules in SVG output.
    #[arg(long = "svg-finder-round")]
    svg_finder_round: Option<f64>,

    /// Corner rounding fraction applied to alignment pattern modules in SVG output.
    #[arg(long = "svg-alignment-round")]
    svg_alignment_round: Option<f64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), QrError> {
    let mut gen = Generator::init(cli.ecl)
        .with_ecl_optimization(!cli.fixecl)
        .with_uppercase_folding(cli.uppercase);

    if let Some(v) = cli.version {
        gen = gen.with_fixed_version(Version::try_new(v)?);
    }
    if let Some(m) = cli.mask {
        gen = gen.with_fixed_mask(Mask::try_new(m)?);
    }

    gen.append_text(cli.value.as_bytes())?;
    let symbol = gen.generate()?;

    let bytes = render(&symbol, &cli)?;
    match cli.file {
        Some(path) => fs::write(&path, &bytes)
            .map_err(|e| QrError::InvalidOption(format!("unable to write {}: {e}", path.display())))?,
        None => {
            std::io::stdout()
                .write_all(&bytes)
                .map_err(|e| QrError::InvalidOption(format!("unable to write to stdout: {e}")))?;
        }
    }
    Ok(())
}

#[cfg(feature = "render")]
fn render(symbol: &qrgen::Symbol, cli: &Cli) -> Result<Vec<u8>, QrError> {
    match cli.output {
        OutputFormat::Ascii => Ok(text::render(symbol, &text::GLYPHS_ASCII, cli.quiet, cli.invert).into_bytes()),
        OutputFormat::Narrow => Ok(text::render(symbol, &text::GLYPHS_NARROW, cli.quiet, cli.invert).into_bytes()),
        OutputFormat::Svg => {
            let opts = SvgOptions {
                quiet: cli.quiet,
                color: cli.svg_color.clone(),
                module_size: cli.svg_point,
                module_round: cli.svg_round,
                finder_round: cli.svg_finder_round,
                alignment_round: cli.svg_alignment_round,
            };
            Ok(qrgen::render::svg_string(symbol, &opts).into_bytes())
        }
        OutputFormat::Bmp => qrgen::render::bmp_bytes(symbol, cli.quiet, cli.bmp_scale, cli.invert),
    }
}

#[cfg(not(feature = "render"))]
fn render(_symbol: &qrgen::Symbol, _cli: &Cli) -> Result<Vec<u8>, QrError> {
    Err(QrError::InvalidOption(
        "this build was compiled without the `render` feature".into(),
    ))
}
