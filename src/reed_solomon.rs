/*
 * QR Code generator library
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! C5: GF(2^8/0x11D) arithmetic, the Reed-Solomon divisor/remainder, and the
//! block-splitting and interleaving rules that turn data codewords into the
//! raw codeword stream the matrix consumes.

use crate::version::QrCodeEcc;
use crate::{tables, version::Version};

/// Product of two field elements modulo GF(2^8/0x11D), via Russian peasant
/// multiplication. Commutative: `mul(a, b) == mul(b, a)`.
pub fn mul(x: u8, y: u8) -> u8 {
    let mut z: u8 = 0;
    for i in (0..8).rev() {
        z = (z << 1) ^ ((z >> 7) * 0x1D);
        z ^= ((y >> i) & 1) * x;
    }
    z
}

/// The Reed-Solomon ECC generator for a fixed degree (= ECC codewords per block).
/// Each data block in a symbol shares the same divisor polynomial.
pub struct ReedSolomonGenerator {
    /// Coefficients of the divisor polynomial, highest to lowest power,
    /// excluding the implicit leading term (always 1).
    coefficients: Vec<u8>,
}

impl ReedSolomonGenerator {
    /// Builds the divisor `prod_{i=0}^{degree-1} (x - 2^i)` for the given degree.
    pub fn new(degree: usize) -> Self {
        assert!((1..=255).contains(&degree), "degree out of range");
        let mut coefs = vec![0u8; degree - 1];
        coefs.push(1);

        let mut root: u8 = 1;
        for _ in 0..degree {
            for j in 0..degree {
                coefs[j] = mul(coefs[j], root);
                if j + 1 < coefs.len() {
                    coefs[j] ^= coefs[j + 1];
                }
            }
            root = mul(root, 0x02);
        }
        ReedSolomonGenerator { coefficients: coefs }
    }

    /// Computes the `degree` ECC codewords for `data` via synthetic division.
    pub fn remainder(&self, data: &[u8]) -> Vec<u8> {
        let mut result = vec![0u8; self.coefficients.len()];
        for &b in data {
            let factor = b ^ result.remove(0);
            result.push(0);
            for (x, &y) in result.iter_mut().zip(self.coefficients.iter()) {
                *x ^= mul(y, factor);
            }
        }
        result
    }
}

/// One data block plus its computed ECC codewords.
struct Block {
    data: Vec<u8>,
    ecc: Vec<u8>,
}

/// Splits `data` into `block_count(version, ecl)` blocks (short blocks first,
/// carrying `floor(D/B)` data codewords; the rest carry `ceil(D/B)`), computes
/// each block's ECC independently, and returns the interleaved raw codeword
/// stream the matrix writes in serpentine order.
pub fn interleave_with_ecc(data: &[u8], version: Version, ecl: QrCodeEcc) -> Vec<u8> {
    let num_blocks = tables::block_count(version, ecl);
    let block_ecc_len = tables::ecc_per_block(version, ecl);
    let total_data = data.len();
    assert_eq!(
        total_data,
        tables::data_capacity_bits(version, ecl) / 8,
        "data length does not match this version/ecl's data capacity"
    );

    let short_block_len = total_data / num_blocks;
    let num_short_blocks = num_blocks - total_data % num_blocks;

    let rs = ReedSolomonGenerator::new(block_ecc_len);
    let mut blocks = Vec::with_capacity(num_blocks);
    let mut k = 0;
    for i in 0..num_blocks {
        let len = short_block_len + usize::from(i >= num_short_blocks);
        let dat = data[k..k + len].to_vec();
        k += len;
        let ecc = rs.remainder(&dat);
        blocks.push(Block { data: dat, ecc });
    }

    let max_data_len = blocks.iter().map(|b| b.data.len()).max().unwrap_or(0);
    let mut result = Vec::with_capacity(total_data + num_blocks * block_ecc_len);
    for i in 0..max_data_len {
        for block in &blocks {
            if i < block.data.len() {
                result.push(block.data[i]);
            }
        }
    }
    for i in 0..block_ecc_len {
        for block in &blocks {
            result.push(block.ecc[i]);
        }
    }
    result
}
