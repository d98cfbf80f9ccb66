//! International charset.
//!
//! Much of the upper half follows code page 437. 0x10 and 0x1F are
//! vertical+horizontal crossings that stop short of the cell edge in one
//! direction; Unicode has no equivalent, so two visibly different box
//! drawing characters stand in for them.

use super::{Segment, Table, ASCII};

/// The known part of the International table.
///
/// 0xB8, 0xB9, 0xBB-0xBD and 0xC0-0xFF are still undetermined, so a
/// [`Charset`](crate::Charset) cannot be built from this table alone. Layer
/// the missing codes on top with a second table to build a usable charset.
#[rustfmt::skip]
pub const INTERNATIONAL_PARTIAL: Table = Table::new(&[
    Segment::new(0x00, "\u{2205}☺☻♡♢♣♠∙◘○◙♂♀♪♫☼"),
    Segment::new(0x10, "\u{256A}┴┬┤├┼│─┌┐└┘╳╱╲\u{256B}"),
    ASCII,
    Segment::new(0x7F, "\u{25B3}"),
    Segment::new(0x80, "ÇüéâäàåçêëèïîìÄÅ"),
    Segment::new(0x90, "ÉæÆôöòûùÿÖÜ¢£¥₧ƒ"),
    Segment::new(0xA0, "áíóúñÑªº¿⌐¬½¼¡«»"),
    Segment::new(0xB0, "ÃãĨĩÕõŨũ"),
    Segment::new(0xBA, "¾"),
    Segment::new(0xBE, "¶§"),
]);

#[cfg(feature = "registry")]
inventory::submit! {
    crate::registry::CharsetEntry {
        name: "int",
        aliases: &[],
        description: "International",
        definition: crate::registry::Definition::Unimplemented,
    }
}
