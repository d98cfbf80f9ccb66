//! MSX character set mapping library.
//!
//! This crate maps the 8-bit native character codes of the MSX computers
//! to single Unicode characters and back, for the national charset
//! variants. A [`Charset`] is a complete bijection over 0x00-0xFF built from
//! declarative [`tables`]; the [`registry`] names the standard variants,
//! including placeholders for variants whose tables are not yet known.
//!
//! # Example
//!
//! ```
//! use msxchars::{registry, CharMap};
//!
//! let ja = registry::get("ja")?;
//! assert_eq!(ja.uc(0x08)?, '年');
//! assert_eq!(ja.native('ア')?, [0xB1]);
//!
//! let text = ja.decode(&[0x4D, 0x53, 0x58, 0x20, 0x91])?;
//! assert_eq!(text, "MSX あ");
//! # Ok::<(), msxchars::RegistryError>(())
//! ```
//!
//! Custom charsets are built by layering overrides on a standard table:
//!
//! ```
//! use msxchars::{tables, Charset};
//!
//! // Swap the yen kanji and the backslash.
//! let overrides: Vec<(u32, char)> = vec![(0x5C, '円'), (0x09, '\\')];
//! let custom = Charset::new([tables::JAPANESE.pairs().collect(), overrides])?;
//! assert_eq!(custom.uc(0x5C)?, '円');
//! assert_eq!(custom.native('\\')?, [0x09]);
//! # Ok::<(), msxchars::CharsetError>(())
//! ```

#![no_std]
#![deny(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// The lookup capability and charset variants.
pub mod charmap;
/// The `Charset` bijection type.
pub mod charset;
/// Argument conversion for native codes and Unicode characters.
pub mod code;
/// Error types for charset operations.
pub mod error;
/// Static character-table data.
pub mod tables;

/// Runtime registry of the standard charset variants.
#[cfg(feature = "registry")]
pub mod registry;

// Re-export main types
pub use charmap::{CharMap, Unimplemented, Variant};
pub use charset::Charset;
pub use code::{NativeCode, UnicodeChar};
pub use error::{CharsetError, RegistryError, UnknownCharsetError};
pub use tables::{Segment, Table};
