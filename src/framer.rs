/*
 * QR Code generator library
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! C4: appends the terminator, byte-aligns, and fills the remaining data
//! codeword space with the standard's alternating pad bytes.

use crate::bitstream::BitStream;
use crate::segment::Segment;
use crate::version::Version;

const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Concatenates every segment's mode indicator, count field and payload into
/// one bitstream, then terminates, byte-aligns and pads it to exactly
/// `data_capacity_bits`, which must already be known to be sufficient.
pub fn frame(segments: &[Segment], version: Version, data_capacity_bits: usize) -> BitStream {
    let mut bb = BitStream::with_bit_capacity(data_capacity_bits);
    for seg in segments {
        bb.append(seg.mode().mode_bits(), 4);
        let cc_bits = seg.mode().num_char_count_bits(version);
        if cc_bits > 0 {
            bb.append(seg.char_count() as u32, cc_bits);
        }
        for i in 0..seg.payload().len_bits() {
            bb.append(seg.payload().read(i) as u32, 1);
        }
    }
    assert!(bb.len_bits() <= data_capacity_bits, "segments overflow planned capacity");

    // Terminator: up to 4 zero bits, truncated if less space remains.
    let num_zero_bits = (4).min(data_capacity_bits - bb.len_bits());
    bb.append(0, num_zero_bits as u8);

    // Byte-align with zero bits.
    let num_zero_bits = (8 - bb.len_bits() % 8) % 8;
    bb.append(0, num_zero_bits as u8);
    assert_eq!(bb.len_bits() % 8, 0, "framer must leave the stream byte-aligned");

    // Pad with alternating 0xEC/0x11 until the data capacity is reached.
    let mut pad_index = 0;
    while bb.len_bits() < data_capacity_bits {
        bb.append(PAD_BYTES[pad_index % 2] as u32, 8);
        pad_index += 1;
    }

    bb
}
