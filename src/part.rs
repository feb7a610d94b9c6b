/*
 * QR Code generator library
 *
 * Copyright (c) Project Nayuki. (MIT License)
 * https://www.nayuki.io/page/qr-code-generator-library
 */

//! Module identification helper, shared by matrix construction and masking.
//!
//! `identify` is a pure function of `(version, x, y)`: it never changes
//! during encoding and is consistent across every caller. It returns the
//! [`Part`] a coordinate belongs to, plus a part-relative index. An index of
//! `-1` marks the pattern's origin (its defining center cell) - a detail
//! renderers can use to special-case a pattern's anchor, decoupled from
//! classification itself.

use crate::version::Version;

const FINDER_SIZE: i32 = 7;
const TIMING_OFFSET: i32 = 6;
const VERSION_BLOCK_SIZE: i32 = 3;
const ALIGNMENT_RADIUS: i32 = 2;

/// A classification of a single coordinate in the symbol.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Part {
    Quiet,
    Finder,
    Separator,
    Timing,
    Alignment,
    Format,
    Version,
    Content,
}

/// Classifies `(x, y)` for a symbol of the given version. Coordinates
/// outside `[0, dimension)` are `Quiet`.
pub fn identify(version: Version, x: i32, y: i32) -> (Part, i32) {
    let dimension = version.dimension();
    if x < 0 || y < 0 || x >= dimension || y >= dimension {
        return (Part::Quiet, -1);
    }

    // Finders occupy the three non-bottom-right corners, each a 7x7 footprint
    // with a 1-module separator ring just outside it.
    for f in 0..3 {
        let cx = if f & 1 != 0 { dimension - 1 - FINDER_SIZE / 2 } else { FINDER_SIZE / 2 };
        let cy = if f & 2 != 0 { dimension - 1 - FINDER_SIZE / 2 } else { FINDER_SIZE / 2 };
        let dx = (x - cx).abs();
        let dy = (y - cy).abs();
        if dx == 0 && dy == 0 {
            return (Part::Finder, -1); // pattern origin
        }
        if dx <= 1 + FINDER_SIZE / 2 && dy <= 1 + FINDER_SIZE / 2 {
            if dx == 1 + FINDER_SIZE / 2 || dy == 1 + FINDER_SIZE / 2 {
                return (Part::Separator, -1);
            }
            let dist = dx.max(dy);
            return (Part::Finder, dist);
        }
    }

    // Alignment patterns, skipping any that overlap a finder's footprint.
    let positions = crate::tables::alignment_pattern_positions(version);
    for &h in &positions {
        for &v in &positions {
            if h <= FINDER_SIZE && v <= FINDER_SIZE {
                continue; // top-left finder
            }
            if h >= dimension - 1 - FINDER_SIZE && v <= FINDER_SIZE {
                continue; // top-right finder
            }
            if h <= FINDER_SIZE && v >= dimension - 1 - FINDER_SIZE {
                continue; // bottom-left finder
            }
            if x == h && y == v {
                return (Part::Alignment, -1); // pattern origin
            }
            if (x - h).abs() <= ALIGNMENT_RADIUS && (y - v).abs() <= ALIGNMENT_RADIUS {
                let dist = (x - h).abs().max((y - v).abs());
                return (Part::Alignment, dist);
            }
        }
    }

    // Timing patterns run along row 6 / column 6, strictly between the finders.
    if y == TIMING_OFFSET && x > FINDER_SIZE && x < dimension - 1 - FINDER_SIZE {
        return (Part::Timing, if (x ^ y) & 1 != 0 { 0 } else { 1 });
    }
    if x == TIMING_OFFSET && y > FINDER_SIZE && y < dimension - 1 - FINDER_SIZE {
        return (Part::Timing, if (x ^ y) & 1 != 0 { 0 } else { 1 });
    }

    // Format information: two L-shaped strips around the top-left finder,
    // plus strips under the top-right and right of the bottom-left finder,
    // plus the single permanently-dark module.
    if x == FINDER_SIZE + 1 && y <= FINDER_SIZE + 1 && y != TIMING_OFFSET {
        let idx = y - i32::from(y >= TIMING_OFFSET);
        return (Part::Format, idx);
    }
    if y == FINDER_SIZE + 1 && x <= FINDER_SIZE + 1 && x != TIMING_OFFSET {
        let idx = 14 - x + i32::from(x >= TIMING_OFFSET);
        return (Part::Format, idx);
    }
    if y == FINDER_SIZE + 1 && x >= dimension - FINDER_SIZE - 1 {
        return (Part::Format, dimension - 1 - x);
    }
    if x == FINDER_SIZE + 1 && y == dimension - FINDER_SIZE - 1 {
        return (Part::Format, -1); // the permanently-dark module
    }
    if x == FINDER_SIZE + 1 && y >= dimension - FINDER_SIZE - 1 {
        return (Part::Format, y + 14 - (dimension - 1));
    }

    // Version information occupies two 3x6 rectangles, versions 7 and up only.
    if version.value() >= 7 {
        if x < TIMING_OFFSET
            && y >= dimension - FINDER_SIZE - 1 - VERSION_BLOCK_SIZE
            && y < dimension - FINDER_SIZE - 1
        {
            let idx = x * VERSION_BLOCK_SIZE + (y - (dimension - FINDER_SIZE - 1 - VERSION_BLOCK_SIZE));
            return (Part::Version, idx);
        }
        if y < TIMING_OFFSET
            && x >= dimension - FINDER_SIZE - 1 - VERSION_BLOCK_SIZE
            && x < dimension - FINDER_SIZE - 1
        {
            let idx = y * VERSION_BLOCK_SIZE + (x - (dimension - FINDER_SIZE - 1 - VERSION_BLOCK_SIZE));
            return (Part::Version, idx);
        }
    }

    (Part::Content, -1)
}

/// Convenience wrapper used when only the classification is needed.
pub fn part_at(version: Version, x: i32, y: i32) -> Part {
    identify(version, x, y).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn every_coordinate_classifies_uniquely_and_covers_grid() {
        for v in [1u8, 2, 6, 7, 13, 27, 40] {
            let version = Version::new(v);
            let dim = version.dimension();
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for y in 0..dim {
                for x in 0..dim {
                    let (part, _) = identify(version, x, y);
                    let key = match part {
                        Part::Quiet => "quiet",
                        Part::Finder => "finder",
                        Part::Separator => "separator",
                        Part::Timing => "timing",
                        Part::Alignment => "alignment",
                        Part::Format => "format",
                        Part::Version => "version",
                        Part::Content => "content",
                    };
                    *counts.entry(key).or_insert(0) += 1;
                }
            }
            // Every coordinate inside the grid got exactly one classification
            // (guaranteed by construction: each match arm returns early), and
            // there is always at least one Content cell and one Finder cell.
            assert!(counts["finder"] > 0);
            assert!(counts["content"] > 0);
            assert_eq!(counts.get("quiet").copied().unwrap_or(0), 0);
        }
    }

    #[test]
    fn outside_grid_is_quiet() {
        let version = Version::new(1);
        assert_eq!(part_at(version, -1, 0), Part::Quiet);
        assert_eq!(part_at(version, 0, -1), Part::Quiet);
        assert_eq!(part_at(version, 21, 0), Part::Quiet);
        assert_eq!(part_at(version, 0, 21), Part::Quiet);
    }

    #[test]
    fn version_info_absent_below_v7() {
        let version = Version::new(6);
        let dim = version.dimension();
        for y in 0..6 {
            for x in (dim - 11)..(dim - 8) {
                assert_ne!(part_at(version, x, y), Part::Version);
            }
        }
    }
}
