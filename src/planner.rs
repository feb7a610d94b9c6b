/*
 * QR Code generator library
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! C3: chooses the version and error-correction level that fit the payload.

use crate::error::QrError;
use crate::segment::{self, Segment};
use crate::tables;
use crate::version::{QrCodeEcc, Version};

/// The outcome of planning: a version/ECL combination plus the buffer sizes
/// the caller needs to allocate. `payload_bits <= data_capacity_bits` always
/// holds for a successfully produced `Plan`.
#[derive(Debug, Clone, Copy)]
pub struct Plan {
    pub version: Version,
    pub ecl: QrCodeEcc,
    pub data_capacity_bits: usize,
    pub payload_bits: usize,
    pub dimension: i32,
    pub buffer_size: usize,
    pub scratch_buffer_size: usize,
}

/// Inputs to planning, mirroring the `Generator`'s accumulated options.
#[derive(Debug, Clone, Copy)]
pub struct PlannerConfig {
    pub ecl: QrCodeEcc,
    pub min_version: Version,
    pub max_version: Version,
    pub fixed_version: Option<Version>,
    pub optimize_ecl: bool,
}

/// Chooses the smallest version (within `[min_version, max_version]`, or
/// exactly `fixed_version` if set) whose data capacity holds every segment,
/// then optionally boosts the ECL to the strongest level that still fits
/// without growing the version.
pub fn plan(segments: &[Segment], config: &PlannerConfig) -> Result<Plan, QrError> {
    let (version, payload_bits) = match config.fixed_version {
        Some(v) => {
            let bits = segment::total_bits(segments, v).ok_or(QrError::CapacityExceeded {
                payload_bits: estimate_bits(segments),
            })?;
            let cap = tables::data_capacity_bits(v, config.ecl);
            if bits > cap {
                return Err(QrError::CapacityExceeded { payload_bits: bits });
            }
            (v, bits)
        }
        None => find_smallest_version(segments, config)?,
    };

    let mut ecl = config.ecl;
    if config.optimize_ecl {
        for candidate in [QrCodeEcc::Medium, QrCodeEcc::Quartile, QrCodeEcc::High] {
            if candidate > ecl && payload_bits <= tables::data_capacity_bits(version, candidate) {
                ecl = candidate;
            }
        }
    }

    let data_capacity_bits = tables::data_capacity_bits(version, ecl);
    let dimension = version.dimension();
    let buffer_size = ((dimension as usize * dimension as usize) + 7) / 8;
    let scratch_buffer_size = (tables::raw_capacity_bits(version) + 7) / 8;

    Ok(Plan {
        version,
        ecl,
        data_capacity_bits,
        payload_bits,
        dimension,
        buffer_size,
        scratch_buffer_size,
    })
}

fn find_smallest_version(segments: &[Segment], config: &PlannerConfig) -> Result<(Version, usize), QrError> {
    let mut version = config.min_version;
    loop {
        if let Some(bits) = segment::total_bits(segments, version) {
            if bits <= tables::data_capacity_bits(version, config.ecl) {
                return Ok((version, bits));
            }
        }
        if version.value() >= config.max_version.value() {
            return Err(QrError::CapacityExceeded { payload_bits: estimate_bits(segments) });
        }
        version = Version::new(version.value() + 1);
    }
}

fn estimate_bits(segments: &[Segment]) -> usize {
    segment::total_bits(segments, crate::version::QRCODE_MAX_VERSION).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(ecl: QrCodeEcc) -> PlannerConfig {
        PlannerConfig {
            ecl,
            min_version: crate::version::QRCODE_MIN_VERSION,
            max_version: crate::version::QRCODE_MAX_VERSION,
            fixed_version: None,
            optimize_ecl: true,
        }
    }

    #[test]
    fn hello_world_fits_version_1() {
        let segs = Segment::make_segments(b"HELLO WORLD", false).unwrap();
        let p = plan(&segs, &cfg(QrCodeEcc::Quartile)).unwrap();
        assert_eq!(p.version.value(), 1);
        assert_eq!(p.dimension, 21);
    }

    #[test]
    fn plan_total_bits_equals_data_capacity_after_framing() {
        let segs = Segment::make_segments(b"01234567", false).unwrap();
        let p = plan(&segs, &cfg(QrCodeEcc::Medium)).unwrap();
        assert!(p.payload_bits <= p.data_capacity_bits);
    }

    #[test]
    fn near_v40_boundary() {
        let data = vec![b'A'; 2953]; // byte-mode fits exactly at V40-L per the standard's byte capacity
        let segs = vec![Segment::bytes(&data)];
        let p = plan(&segs, &cfg(QrCodeEcc::Low)).unwrap();
        assert_eq!(p.version.value(), 40);
    }

    #[test]
    fn exceeding_v40_low_capacity_fails() {
        let data = vec![b'A'; 2954];
        let segs = vec![Segment::bytes(&data)];
        let mut c = cfg(QrCodeEcc::Low);
        c.optimize_ecl = false;
        assert!(matches!(plan(&segs, &c), Err(QrError::CapacityExceeded { .. })));
    }

    #[test]
    fn fixed_version_out_of_capacity_errors() {
        let data = vec![b'A'; 3000];
        let segs = vec![Segment::bytes(&data)];
        let mut c = cfg(QrCodeEcc::Low);
        c.fixed_version = Some(Version::new(1));
        assert!(plan(&segs, &c).is_err());
    }
}
