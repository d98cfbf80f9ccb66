//! Static character-table data.
//!
//! A [`Table`] is a list of [`Segment`]s, each a run of glyphs assigned to
//! consecutive native codes. Tables carry no logic; they are fed to
//! [`Charset::new`](crate::Charset::new), which validates them.
//!
//! In every standard MSX charset code 0x00 is a blank glyph, and several
//! charsets have more. Each differently coded blank gets its own
//! substitute character so that it survives a round trip.

use core::iter::FusedIterator;
use core::slice;
use core::str::Chars;

mod international;
mod japanese;

pub use international::INTERNATIONAL_PARTIAL;
pub use japanese::JAPANESE;

/// Substitute for the blank at 0x00: EMPTY SET.
pub const BLANK_00: char = '\u{2205}';
/// Substitute for the glyph at 0x7F: WHITE UP-POINTING TRIANGLE.
///
/// Japanese has a blank here rather than a triangle.
pub const BLANK_7F: char = '\u{25B3}';
/// Substitute for the Japanese blank at 0x90: BRAILLE PATTERN DOTS-1234.
pub const BLANK_90: char = '\u{280F}';
/// Substitute for the Japanese blank at 0xA0: BRAILLE PATTERN DOTS-1235.
pub const BLANK_A0: char = '\u{2817}';
/// Substitute for the Japanese blank at 0xFE: BRAILLE PATTERN DOTS-1236.
pub const BLANK_FE: char = '\u{2827}';

/// Printable ASCII, common to all MSX charsets. Excludes 0x00-0x1F and 0x7F,
/// which vary between charsets.
pub const ASCII: Segment = Segment::new(
    0x20,
    " !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~",
);

/// A run of glyphs mapped to consecutive native codes starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// The native code of the first glyph.
    pub start: u8,
    /// The glyphs, one per code.
    pub glyphs: &'static str,
}

impl Segment {
    /// Creates a segment.
    pub const fn new(start: u8, glyphs: &'static str) -> Self {
        Self { start, glyphs }
    }
}

/// An ordered batch of `(native code, character)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    segments: &'static [Segment],
}

impl Table {
    /// Creates a table from its segments, applied in order.
    pub const fn new(segments: &'static [Segment]) -> Self {
        Self { segments }
    }

    /// Returns the segments of this table.
    pub const fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// Returns an iterator over the `(native code, character)` pairs.
    ///
    /// Codes are `u32` so that a segment overrunning 0xFF surfaces as an
    /// out-of-range code when the table is applied.
    pub fn pairs(&self) -> Pairs<'static> {
        Pairs {
            segments: self.segments.iter(),
            current: None,
        }
    }
}

impl IntoIterator for &Table {
    type Item = (u32, char);
    type IntoIter = Pairs<'static>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs()
    }
}

impl IntoIterator for Table {
    type Item = (u32, char);
    type IntoIter = Pairs<'static>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs()
    }
}

/// Iterator over the pairs of a [`Table`].
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    segments: slice::Iter<'a, Segment>,
    current: Option<(u32, Chars<'a>)>,
}

impl Iterator for Pairs<'_> {
    type Item = (u32, char);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((code, glyphs)) = &mut self.current {
                if let Some(c) = glyphs.next() {
                    let n = *code;
                    *code += 1;
                    return Some((n, c));
                }
            }
            let segment = self.segments.next()?;
            self.current = Some((u32::from(segment.start), segment.glyphs.chars()));
        }
    }
}

impl FusedIterator for Pairs<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_ascii_segment() {
        const T: Table = Table::new(&[ASCII]);
        let pairs: Vec<_> = T.pairs().collect();
        assert_eq!(pairs.len(), 0x5F);
        assert_eq!(pairs[0], (0x20, ' '));
        assert_eq!(pairs[0x21], (0x41, 'A'));
        assert_eq!(pairs[0x5E], (0x7E, '~'));
        assert!(pairs.iter().all(|&(n, c)| n == c as u32));
    }

    #[test]
    fn test_segments_apply_in_order() {
        const T: Table = Table::new(&[Segment::new(0x10, "ab"), Segment::new(0x02, "c")]);
        let pairs: Vec<_> = T.into_iter().collect();
        assert_eq!(pairs, [(0x10, 'a'), (0x11, 'b'), (0x02, 'c')]);
    }

    #[test]
    fn test_overrun_past_ff() {
        const T: Table = Table::new(&[Segment::new(0xFE, "xyz")]);
        let codes: Vec<_> = T.pairs().map(|(n, _)| n).collect();
        assert_eq!(codes, [0xFE, 0xFF, 0x100]);
    }

    #[test]
    fn test_empty_segments_skipped() {
        const T: Table = Table::new(&[Segment::new(0x00, ""), Segment::new(0x30, "0")]);
        assert_eq!(T.pairs().collect::<Vec<_>>(), [(0x30, '0')]);
    }
}
