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

use thiserror::Error;

/// Everything that can go wrong while building a segment list, planning a
/// version/ECC combination, or generating the final symbol.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QrError {
    /// The segment's text does not validate against its mode's alphabet,
    /// or an ECI designator value is out of range.
    #[error("invalid segment: {0}")]
    InvalidSegment(String),

    /// `fixed_version` was set outside `[1, 40]`.
    #[error("version out of range: {0} (must be 1..=40)")]
    VersionOutOfRange(u8),

    /// No allowed version/ECL combination could hold the planned bitstream.
    #[error("payload of {payload_bits} bits exceeds the capacity of every allowed version")]
    CapacityExceeded { payload_bits: usize },

    /// The caller-supplied output or scratch buffer is smaller than `plan_sizes` reports.
    #[error("buffer too small: need at least {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },

    /// Contradictory or out-of-range options, e.g. a mask index outside 0-7.
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, QrError>;
