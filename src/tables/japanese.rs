//! Japanese charset (MSX2).

use super::{Segment, Table, ASCII};

/// The complete MSX2 Japanese table.
///
/// Blank glyphs at 0x00, 0x7F, 0x90, 0xA0 and 0xFE use the substitutes
/// documented in [`tables`](super).
#[rustfmt::skip]
pub const JAPANESE: Table = Table::new(&[
    Segment::new(0x00, "\u{2205}月火水木金土日年円時分秒百千万"),
    Segment::new(0x10, "π┴┬┤├┼│─┌┐└┘╳大中小"),
    ASCII,
    Segment::new(0x7F, "\u{25B3}"),
    Segment::new(0x80, "♠♡♣♢○●をぁぃぅぇぉゃゅょっ"),
    Segment::new(0x90, "\u{280F}あいうえおかきくけこさしすせそ"),
    Segment::new(0xA0, "\u{2817}。「」、・ヲァィゥェォャュョッ"),
    Segment::new(0xB0, "ーアイウエオカキクケコサシスセソ"),
    Segment::new(0xC0, "タチツテトナニヌネノハヒフヘホマ"),
    Segment::new(0xD0, "ミムメモヤユヨラリルレロワン゛゜"),
    Segment::new(0xE0, "たちつてとなにぬねのはひふへほま"),
    Segment::new(0xF0, "みむめもやゆよらりるれろわん\u{2827}█"),
]);

#[cfg(feature = "registry")]
inventory::submit! {
    crate::registry::CharsetEntry {
        name: "ja",
        aliases: &[],
        description: "Japanese (MSX2)",
        definition: crate::registry::Definition::Tables(&[&JAPANESE]),
    }
}
