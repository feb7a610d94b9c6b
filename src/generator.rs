/*
 * QR Code generator library
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! The public builder that drives the whole pipeline: accumulate segments,
//! plan a version/ECL, frame and error-correct the payload, then construct
//! and mask the matrix.

use crate::error::QrError;
use crate::framer;
use crate::matrix;
use crate::part::Part;
use crate::planner::{self, Plan, PlannerConfig};
use crate::reed_solomon;
use crate::segment::Segment;
use crate::version::{Mask, QrCodeEcc, Version, QRCODE_MAX_VERSION, QRCODE_MIN_VERSION};

/// An immutable, fully generated symbol. Produced only by [`Generator::generate`].
#[derive(Debug, Clone)]
pub struct Symbol {
    version: Version,
    ecl: QrCodeEcc,
    mask: Mask,
    dimension: i32,
    modules: Vec<u8>,
}

impl Symbol {
    pub fn version(&self) -> Version {
        self.version
    }

    pub fn ecl(&self) -> QrCodeEcc {
        self.ecl
    }

    pub fn mask(&self) -> Mask {
        self.mask
    }

    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    /// Reads a single module, `true` meaning dark. Coordinates outside the
    /// symbol are treated as light (the quiet zone is not stored).
    pub fn module_at(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.dimension || y >= self.dimension {
            return false;
        }
        let offset = (y * self.dimension + x) as usize;
        (self.modules[offset >> 3] >> (7 - (offset & 7))) & 1 != 0
    }

    /// Classifies the module at `(x, y)`: finder, timing, alignment, format,
    /// version, or content.
    pub fn part_at(&self, x: i32, y: i32) -> Part {
        matrix::part_at(self.version, x, y)
    }

    /// The row-major, MSB-first-per-byte packed module buffer, sized exactly
    /// `ceil(dimension^2 / 8)` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.modules
    }
}

/// Accumulates segments and options, then drives the full encode pipeline.
/// Mirrors a builder: construct with [`Generator::init`], append segments,
/// then call [`Generator::generate`] (or inspect [`Generator::plan_sizes`]
/// first to preallocate buffers of the right size).
#[derive(Debug, Clone)]
pub struct Generator {
    segments: Vec<Segment>,
    ecl: QrCodeEcc,
    min_version: Version,
    max_version: Version,
    fixed_version: Option<Version>,
    fixed_mask: Option<Mask>,
    optimize_ecl: bool,
    allow_uppercase_folding: bool,
}

impl Generator {
    /// Starts a new generator targeting at least error correction level `ecl`.
    pub fn init(ecl: QrCodeEcc) -> Self {
        Generator {
            segments: Vec::new(),
            ecl,
            min_version: QRCODE_MIN_VERSION,
            max_version: QRCODE_MAX_VERSION,
            fixed_version: None,
            fixed_mask: None,
            optimize_ecl: true,
            allow_uppercase_folding: false,
        }
    }

    /// Restricts the search to a single version, bypassing smallest-fit search.
    pub fn with_fixed_version(mut self, version: Version) -> Self {
        self.fixed_version = Some(version);
        self
    }

    /// Restricts the search to `[min, max]` (both inclusive).
    pub fn with_version_range(mut self, min: Version, max: Version) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    /// Pins the mask pattern instead of evaluating all eight penalty scores.
    pub fn with_fixed_mask(mut self, mask: Mask) -> Self {
        self.fixed_mask = Some(mask);
        self
    }

    /// If `false`, the requested ECL is used as-is. If `true` (the default),
    /// the ECL is boosted to the strongest level that still fits the chosen
    /// version without growing it.
    pub fn with_ecl_optimization(mut self, optimize: bool) -> Self {
        self.optimize_ecl = optimize;
        self
    }

    /// If `true`, lowercase ASCII in automatically-classified or explicit
    /// alphanumeric text is folded to uppercase instead of forcing byte mode.
    pub fn with_uppercase_folding(mut self, allow: bool) -> Self {
        self.allow_uppercase_folding = allow;
        self
    }

    /// Appends a pre-built segment, e.g. from [`Segment::eci`].
    pub fn append_segment(&mut self, segment: Segment) -> &mut Self {
        self.segments.push(segment);
        self
    }

    /// Classifies `text` (numeric, else alphanumeric, else byte) and appends
    /// the resulting segment(s). No sub-string mode switching is performed.
    pub fn append_text(&mut self, text: &[u8]) -> Result<&mut Self, QrError> {
        for seg in Segment::make_segments(text, self.allow_uppercase_folding)? {
            self.segments.push(seg);
        }
        Ok(self)
    }

    fn planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            ecl: self.ecl,
            min_version: self.min_version,
            max_version: self.max_version,
            fixed_version: self.fixed_version,
            optimize_ecl: self.optimize_ecl,
        }
    }

    /// Determines the version/ECL that will be used and the buffer sizes the
    /// final symbol requires, without constructing the matrix. Returns
    /// [`QrError::CapacityExceeded`] before any output buffer would be
    /// touched if the accumulated segments cannot fit any allowed version.
    pub fn plan_sizes(&self) -> Result<Plan, QrError> {
        planner::plan(&self.segments, &self.planner_config())
    }

    /// Runs the full pipeline: plan, frame, error-correct, construct the
    /// matrix, select (or honor a fixed) mask, and stamp format/version info.
    pub fn generate(&self) -> Result<Symbol, QrError> {
        let plan = self.plan_sizes()?;
        let framed = framer::frame(&self.segments, plan.version, plan.data_capacity_bits);
        let data_codewords = framed.into_bytes();
        let raw_codewords = reed_solomon::interleave_with_ecc(&data_codewords, plan.version, plan.ecl);
        let (built, mask) = matrix::construct(plan.version, plan.ecl, &raw_codewords, self.fixed_mask);

        Ok(Symbol {
            version: plan.version,
            ecl: plan.ecl,
            mask,
            dimension: plan.dimension,
            modules: built.pack(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world_quartile_auto_version_is_21x21() {
        let mut gen = Generator::init(QrCodeEcc::Quartile).with_ecl_optimization(false);
        gen.append_text(b"HELLO WORLD").unwrap();
        let sym = gen.generate().unwrap();
        assert_eq!(sym.version().value(), 1);
        assert_eq!(sym.dimension(), 21);
    }

    #[test]
    fn fixed_mask_round_trips_into_symbol() {
        let mut gen = Generator::init(QrCodeEcc::Medium).with_fixed_mask(Mask::new(2));
        gen.append_text(b"01234567").unwrap();
        let sym = gen.generate().unwrap();
        assert_eq!(sym.mask().value(), 2);
    }

    #[test]
    fn lowercase_byte_mode_round_trips() {
        let mut gen = Generator::init(QrCodeEcc::Quartile);
        gen.append_text(b"Hello, world!").unwrap();
        let sym = gen.generate().unwrap();
        assert!(sym.dimension() >= 21);
    }

    #[test]
    fn capacity_exceeded_before_any_buffer_is_produced() {
        let mut gen = Generator::init(QrCodeEcc::Low)
            .with_fixed_version(Version::new(1))
            .with_ecl_optimization(false);
        gen.append_segment(Segment::bytes(&vec![b'A'; 999]));
        assert!(matches!(gen.generate(), Err(QrError::CapacityExceeded { .. })));
    }

    #[test]
    fn empty_text_still_generates_a_minimal_symbol() {
        let mut gen = Generator::init(QrCodeEcc::Low).with_fixed_version(Version::new(1));
        gen.append_text(b"").unwrap();
        let sym = gen.generate().unwrap();
        assert_eq!(sym.dimension(), 21);
    }

    #[test]
    fn near_v40_boundary_succeeds_then_fails_one_byte_later() {
        let mut ok = Generator::init(QrCodeEcc::Low);
        ok.append_segment(Segment::bytes(&vec![b'A'; 2953]));
        assert!(ok.generate().is_ok());

        let mut fail = Generator::init(QrCodeEcc::Low).with_ecl_optimization(false);
        fail.append_segment(Segment::bytes(&vec![b'A'; 2954]));
        assert!(matches!(fail.generate(), Err(QrError::CapacityExceeded { .. })));
    }
}
