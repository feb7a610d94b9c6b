/*
 * QR Code generator library
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

use crate::error::QrError;

pub const QRCODE_MIN_VERSION: Version = Version(1);
pub const QRCODE_MAX_VERSION: Version = Version(40);

/// A validated QR Code version number, in the range `[1, 40]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    pub fn new(ver: u8) -> Self {
        assert!(
            QRCODE_MIN_VERSION.0 <= ver && ver <= QRCODE_MAX_VERSION.0,
            "version number out of range"
        );
        Version(ver)
    }

    pub fn try_new(ver: u8) -> Result<Self, QrError> {
        if QRCODE_MIN_VERSION.0 <= ver && ver <= QRCODE_MAX_VERSION.0 {
            Ok(Version(ver))
        } else {
            Err(QrError::VersionOutOfRange(ver))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Side length of the symbol in modules: `17 + 4*version`.
    pub fn dimension(&self) -> i32 {
        17 + 4 * self.0 as i32
    }
}

/// One of the eight XOR mask patterns applied to content modules.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Mask(u8);

impl Mask {
    pub fn new(mask: u8) -> Self {
        assert!(mask <= 7, "mask value out of range");
        Mask(mask)
    }

    pub fn try_new(mask: u8) -> Result<Self, QrError> {
        if mask <= 7 {
            Ok(Mask(mask))
        } else {
            Err(QrError::InvalidOption(format!("mask {mask} outside 0..=7")))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// The error correction level used in a QR Code symbol.
///
/// The discriminants match the ISO/IEC 18004 format-information bit field,
/// which reorders the levels relative to their "strength" ordering:
/// `L=01, M=00, Q=11, H=10`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QrCodeEcc {
    Low,
    Medium,
    Quartile,
    High,
}

impl QrCodeEcc {
    /// The 2-bit field value used in the 15-bit format information word.
    pub fn format_bits(&self) -> u32 {
        match self {
            QrCodeEcc::Low => 1,
            QrCodeEcc::Medium => 0,
            QrCodeEcc::Quartile => 3,
            QrCodeEcc::High => 2,
        }
    }
}

impl std::str::FromStr for QrCodeEcc {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(QrCodeEcc::Low),
            "m" | "medium" => Ok(QrCodeEcc::Medium),
            "q" | "quartile" => Ok(QrCodeEcc::Quartile),
            "h" | "high" => Ok(QrCodeEcc::High),
            other => Err(QrError::InvalidOption(format!("unknown error correction level: {other}"))),
        }
    }
}
