/*
 * QR Code generator library
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! SVG rendering: one rect per dark module, with optional corner rounding
//! and distinct rounding for finder/alignment pattern modules.

use crate::part::Part;
use crate::Symbol;
use std::fmt::Write as _;

/// SVG rendering options.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    pub quiet: i32,
    pub color: String,
    pub module_size: f64,
    pub module_round: f64,
    pub finder_round: Option<f64>,
    pub alignment_round: Option<f64>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        SvgOptions {
            quiet: 4,
            color: "#000000".to_string(),
            module_size: 1.0,
            module_round: 0.0,
            finder_round: None,
            alignment_round: None,
        }
    }
}

/// Renders `symbol` to a standalone SVG document. One `<rect>` per dark
/// module; finder and alignment modules get their own rounding when
/// `finder_round`/`alignment_round` are set, otherwise they use `module_round`.
pub fn svg_string(symbol: &Symbol, opts: &SvgOptions) -> String {
    let dim = symbol.dimension();
    let side = 2 * opts.quiet + dim;
    let mut out = String::new();
    let _ = writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {side} {side}\" fill=\"{}\" shape-rendering=\"crispEdges\">",
        opts.color
    );

    for y in 0..dim {
        for x in 0..dim {
            if !symbol.module_at(x, y) {
                continue;
            }
            let round = match symbol.part_at(x, y) {
                Part::Finder => opts.finder_round.unwrap_or(opts.module_round),
                Part::Alignment => opts.alignment_round.unwrap_or(opts.module_round),
                _ => opts.module_round,
            };
            let rx = (opts.module_size * round / 2.0).max(0.0);
            let px = (x + opts.quiet) as f64 * opts.module_size;
            let py = (y + opts.quiet) as f64 * opts.module_size;
            let _ = writeln!(
                out,
                "<rect x=\"{px}\" y=\"{py}\" width=\"{0}\" height=\"{0}\" rx=\"{rx}\" />",
                opts.module_size
            );
        }
    }
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Generator, QrCodeEcc};

    #[test]
    fn svg_contains_one_rect_per_dark_module() {
        let mut gen = Generator::init(QrCodeEcc::Low);
        gen.append_text(b"1").unwrap();
        let sym = gen.generate().unwrap();
        let svg = svg_string(&sym, &SvgOptions::default());
        let dark_count = (0..sym.dimension())
            .flat_map(|y| (0..sym.dimension()).map(move |x| (x, y)))
            .filter(|&(x, y)| sym.module_at(x, y))
            .count();
        assert_eq!(svg.matches("<rect").count(), dark_count);
    }
}
