/*
 * QR Code generator library
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! Text-art rendering: each output character covers a `cell_w x cell_h`
//! block of modules, looked up in a glyph table indexed by the block's bits
//! (MSB-first, row-major within the cell).

use crate::Symbol;

/// A lookup table of `2^(cell_w*cell_h)` glyphs for one output style.
pub struct TextGlyphs {
    pub cell_w: i32,
    pub cell_h: i32,
    pub glyphs: &'static [&'static str],
}

/// One module per character: a space for light, "##" for dark.
pub static GLYPHS_ASCII: TextGlyphs = TextGlyphs { cell_w: 1, cell_h: 1, glyphs: &["  ", "##"] };

/// One module per character using the Unicode full block.
pub static GLYPHS_NARROW: TextGlyphs = TextGlyphs { cell_w: 1, cell_h: 1, glyphs: &[" ", "\u{2588}"] };

/// Renders `symbol` as text art, one line per `cell_h` rows of modules, with
/// `quiet` modules of light border on every side.
pub fn render(symbol: &Symbol, glyphs: &TextGlyphs, quiet: i32, invert: bool) -> String {
    let dim = symbol.dimension();
    let mask = (1 << (glyphs.cell_w * glyphs.cell_h)) - 1;
    let mut out = String::new();
    let mut y = -quiet;
    while y < dim + quiet {
        let mut x = -quiet;
        while x < dim + quiet {
            let mut value: usize = 0;
            for yy in 0..glyphs.cell_h {
                for xx in 0..glyphs.cell_w {
                    let bit = symbol.module_at(x + xx, y + yy);
                    if bit {
                        value |= 1 << (yy * glyphs.cell_w + xx);
                    }
                }
            }
            if invert {
                value ^= mask;
            }
            out.push_str(glyphs.glyphs[value]);
            x += glyphs.cell_w;
        }
        out.push('\n');
        y += glyphs.cell_h;
    }
    out
}
