/*
 * QR Code generator library
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! Bitmap rendering via the `image` crate's BMP encoder. One output pixel
//! per module per `scale`, with a light quiet-zone border.

use crate::error::QrError;
use crate::Symbol;
use image::{DynamicImage, ImageBuffer, Luma};
use std::io::Cursor;

/// Encodes `symbol` as a 1 pixel-per-module (times `scale`) BMP image, with
/// `quiet` modules of light border on every side. `invert` swaps dark/light.
pub fn bmp_bytes(symbol: &Symbol, quiet: i32, scale: u32, invert: bool) -> Result<Vec<u8>, QrError> {
    if scale == 0 {
        return Err(QrError::InvalidOption("bmp scale must be at least 1".into()));
    }
    let dim = symbol.dimension();
    let side = ((2 * quiet + dim) as u32) * scale;

    let img = ImageBuffer::from_fn(side, side, |px, py| {
        let x = (px / scale) as i32 - quiet;
        let y = (py / scale) as i32 - quiet;
        let dark = symbol.module_at(x, y) ^ invert;
        Luma([if dark { 0u8 } else { 255u8 }])
    });

    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(img)
        .write_to(&mut buf, image::ImageFormat::Bmp)
        .map_err(|e| QrError::InvalidOption(format!("bmp encoding failed: {e}")))?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Generator, QrCodeEcc};

    #[test]
    fn bmp_header_magic_is_present() {
        let mut gen = Generator::init(QrCodeEcc::Low);
        gen.append_text(b"1").unwrap();
        let sym = gen.generate().unwrap();
        let bytes = bmp_bytes(&sym, 4, 4, false).unwrap();
        assert_eq!(&bytes[0..2], b"BM");
    }

    #[test]
    fn zero_scale_is_rejected() {
        let mut gen = Generator::init(QrCodeEcc::Low);
        gen.append_text(b"1").unwrap();
        let sym = gen.generate().unwrap();
        assert!(bmp_bytes(&sym, 4, 0, false).is_err());
    }
}
