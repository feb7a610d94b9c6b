/*
 * QR Code generator library
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! End-to-end scenarios exercising the public API against literal inputs.

use qrgen::{Generator, Mask, QrCodeEcc, QrError, Version};

#[test]
fn hello_world_quartile_auto_is_version_one_alphanumeric() {
    let mut gen = Generator::init(QrCodeEcc::Quartile).with_ecl_optimization(false);
    gen.append_text(b"HELLO WORLD").unwrap();
    let sym = gen.generate().unwrap();
    assert_eq!(sym.version().value(), 1);
    assert_eq!(sym.dimension(), 21);
    assert_eq!(sym.ecl(), QrCodeEcc::Quartile);
}

#[test]
fn numeric_text_with_fixed_mask_and_version_one() {
    let mut gen = Generator::init(QrCodeEcc::Medium)
        .with_fixed_version(Version::new(1))
        .with_fixed_mask(Mask::new(2));
    gen.append_text(b"01234567").unwrap();
    let sym = gen.generate().unwrap();
    assert_eq!(sym.version().value(), 1);
    assert_eq!(sym.mask().value(), 2);
    assert_eq!(sym.ecl(), QrCodeEcc::Medium);

    // Symmetric finder patterns must land in the three non-bottom-right corners.
    assert!(sym.module_at(0, 0));
    assert!(sym.module_at(sym.dimension() - 1, 0));
    assert!(sym.module_at(0, sym.dimension() - 1));
}

#[test]
fn mixed_case_text_uses_byte_mode_without_uppercase_folding() {
    let mut gen = Generator::init(QrCodeEcc::Medium);
    gen.append_text(b"Hello, world!").unwrap();
    let sym = gen.generate().unwrap();
    assert!(sym.version().value() >= 1);
}

#[test]
fn near_v40_low_boundary_succeeds() {
    let mut gen = Generator::init(QrCodeEcc::Low);
    gen.append_segment(qrgen::Segment::bytes(&vec![b'A'; 2953]));
    let sym = gen.generate().unwrap();
    assert_eq!(sym.version().value(), 40);
}

#[test]
fn one_byte_past_v40_low_boundary_fails() {
    let mut gen = Generator::init(QrCodeEcc::Low).with_ecl_optimization(false);
    gen.append_segment(qrgen::Segment::bytes(&vec![b'A'; 2954]));
    assert!(matches!(gen.generate(), Err(QrError::CapacityExceeded { .. })));
}

#[test]
fn empty_byte_text_produces_a_minimal_version_one_symbol() {
    let mut gen = Generator::init(QrCodeEcc::Low).with_fixed_version(Version::new(1));
    gen.append_segment(qrgen::Segment::bytes(b""));
    let sym = gen.generate().unwrap();
    assert_eq!(sym.version().value(), 1);
    assert_eq!(sym.dimension(), 21);
}

#[test]
fn generation_is_deterministic_across_repeated_calls() {
    let mut gen = Generator::init(QrCodeEcc::Quartile);
    gen.append_text(b"Repeatability matters").unwrap();
    let a = gen.generate().unwrap();
    let b = gen.generate().unwrap();
    assert_eq!(a.mask(), b.mask());
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn every_coordinate_outside_content_is_untouched_by_masking() {
    // Two different masks must still agree on every function-pattern module
    // that doesn't encode the mask number itself: masking only XORs Content
    // cells, but Format and Version strips legitimately carry the mask in
    // their bits, so they're excluded from this comparison.
    let mut low = Generator::init(QrCodeEcc::Low).with_fixed_mask(Mask::new(0));
    low.append_text(b"12345").unwrap();
    let a = low.generate().unwrap();

    let mut low2 = Generator::init(QrCodeEcc::Low).with_fixed_mask(Mask::new(5));
    low2.append_text(b"12345").unwrap();
    let b = low2.generate().unwrap();

    for y in 0..a.dimension() {
        for x in 0..a.dimension() {
            if !matches!(a.part_at(x, y), qrgen::Part::Content | qrgen::Part::Format | qrgen::Part::Version) {
                assert_eq!(a.module_at(x, y), b.module_at(x, y), "mismatch at ({x},{y})");
            }
        }
    }
}
