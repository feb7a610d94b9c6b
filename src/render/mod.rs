/*
 * QR Code generator library
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! Ambient rendering support: turning a [`crate::Symbol`] into pixels, an SVG
//! document, or a block of text. Gated behind the `render` feature.

pub mod bmp;
pub mod svg;
pub mod text;

pub use bmp::bmp_bytes;
pub use svg::svg_string;
pub use text::{TextGlyphs, GLYPHS_ASCII, GLYPHS_NARROW};
