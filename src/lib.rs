/*
 * QR Code generator library
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * https://www.nayuki.io/page/qr-code-generator-library
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy of
 * this software and associated documentation files (the "Software"), to deal in
 * the Software without restriction, including without limitation the rights to
 * use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
 * the Software, and to permit persons to whom the Software is furnished to do so,
 * subject to the following conditions:
 * - The above copyright notice and this permission notice shall be included in
 *   all copies or substantial portions of the Software.
 * - The Software is provided "as is", without warranty of any kind, express or
 *   implied, including but not limited to the warranties of merchantability,
 *   fitness for a particular purpose and noninfringement. In no event shall the
 *   authors or copyright holders be liable for any claim, damages or other
 *   liability, whether in an action of contract, tort or otherwise, arising from,
 *   out of or in connection with the Software or the use or other dealings in the
 *   Software.
 */

//! A QR Code symbol generator conforming to ISO/IEC 18004, covering versions
//! 1 through 40 and all four error correction levels.
//!
//! The pipeline is a sequence of pure stages: [`segment`] classifies text
//! into mode-tagged bit runs, [`planner`] picks the smallest version and
//! strongest error correction level that fit, [`framer`] appends the
//! terminator and padding, [`reed_solomon`] computes and interleaves the
//! error correction codewords, and [`matrix`] draws the function patterns,
//! places codewords along the serpentine path, and picks (or honors a fixed)
//! mask. [`generator::Generator`] drives the whole thing and is the crate's
//! main entry point.
//!
//! ```
//! use qrgen::{Generator, QrCodeEcc};
//!
//! let mut gen = Generator::init(QrCodeEcc::Quartile);
//! gen.append_text(b"HELLO WORLD").unwrap();
//! let symbol = gen.generate().unwrap();
//! assert_eq!(symbol.dimension(), 21);
//! ```

mod bitstream;
mod error;
mod framer;
mod generator;
mod mask;
mod matrix;
mod part;
mod planner;
mod reed_solomon;
mod segment;
mod tables;
mod version;

#[cfg(feature = "render")]
pub mod render;

pub use error::{QrError, Result};
pub use generator::{Generator, Symbol};
pub use part::Part;
pub use planner::Plan;
pub use segment::{Mode, Segment};
pub use version::{Mask, QrCodeEcc, Version, QRCODE_MAX_VERSION, QRCODE_MIN_VERSION};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_encodes_reference_string() {
        let mut gen = Generator::init(QrCodeEcc::Medium).with_fixed_version(Version::new(1));
        gen.append_text(b"01234567").unwrap();
        let sym = gen.generate().unwrap();
        assert_eq!(sym.version().value(), 1);
        assert_eq!(sym.ecl(), QrCodeEcc::Medium);
    }
}
