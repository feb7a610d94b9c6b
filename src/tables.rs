/*
 * QR Code generator library
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! Constant tables from ISO/IEC 18004 Table 9, plus the capacity formulas
//! derived from them. These are read-only and shared across instances.

use crate::version::Version;
use crate::QrCodeEcc;

/// [Table 9] Error correction codewords per block, indexed `[ecl][version]`.
/// Index 0 of the version axis is unused padding.
#[rustfmt::skip]
static ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
	// Version: 0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40
	[-1,  7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28, 30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30], // Low
	[-1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28], // Medium
	[-1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30, 30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30], // Quartile
	[-1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30], // High
];

/// [Table 9] Number of error correction blocks, indexed `[ecl][version]`.
#[rustfmt::skip]
static NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
	[-1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4,  4,  4,  4,  4,  6,  6,  6,  6,  7,  8,  8,  9,  9, 10, 12, 12, 12, 13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25], // Low
	[-1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5,  5,  8,  9,  9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21, 23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49], // Medium
	[-1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8,  8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27, 29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68], // Quartile
	[-1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32, 35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81], // High
];

fn ecl_ordinal(ecl: QrCodeEcc) -> usize {
    match ecl {
        QrCodeEcc::Low => 0,
        QrCodeEcc::Medium => 1,
        QrCodeEcc::Quartile => 2,
        QrCodeEcc::High => 3,
    }
}

/// Number of ECC codewords contributed by each block, for `(version, ecl)`.
pub fn ecc_per_block(ver: Version, ecl: QrCodeEcc) -> usize {
    ECC_CODEWORDS_PER_BLOCK[ecl_ordinal(ecl)][ver.value() as usize] as usize
}

/// Number of interleaved blocks, for `(version, ecl)`.
pub fn block_count(ver: Version, ecl: QrCodeEcc) -> usize {
    NUM_ERROR_CORRECTION_BLOCKS[ecl_ordinal(ecl)][ver.value() as usize] as usize
}

/// Total data+ECC+remainder bits available in the matrix before any codeword
/// is assigned, i.e. the whole module grid minus function patterns.
/// Range: `[208, 29648]`.
pub fn raw_capacity_bits(ver: Version) -> usize {
    let v = ver.value() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 18 * 2;
        }
    }
    result
}

/// Number of 8-bit data codewords (i.e. not ECC) available for `(version, ecl)`,
/// with the trailing remainder bits discarded.
pub fn data_capacity_bits(ver: Version, ecl: QrCodeEcc) -> usize {
    8 * (raw_capacity_bits(ver) / 8 - block_count(ver, ecl) * ecc_per_block(ver, ecl))
}

/// Alignment pattern center coordinates for `ver`, ascending, each usable on
/// both axes. Version 1 has none. The first entry is always 6.
pub fn alignment_pattern_positions(ver: Version) -> Vec<i32> {
    let v = ver.value() as i32;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    let step = if v != 32 {
        (v * 4 + num_align * 2 + 1) / (2 * num_align - 2) * 2
    } else {
        26
    };
    let mut result = vec![6i32];
    let mut pos = v * 4 + 10;
    for _ in 0..num_align - 1 {
        result.insert(1, pos);
        pos -= step;
    }
    result
}
