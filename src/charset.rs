//! The [`Charset`] type: a bijection between native codes and Unicode.
//!
//! # Example
//!
//! ```
//! use msxchars::{tables, Charset};
//!
//! let ja = Charset::from_table(&tables::JAPANESE)?;
//! assert_eq!(ja.uc(0x01)?, '月');
//! assert_eq!(ja.native("月")?, [0x01]);
//!
//! // Out-of-range codes and multi-character strings are rejected.
//! assert!(ja.uc(256).is_err());
//! assert!(ja.native("ab").is_err());
//! # Ok::<(), msxchars::CharsetError>(())
//! ```

use alloc::collections::btree_map::{self, BTreeMap};
use alloc::string::String;
use alloc::vec::Vec;
use core::iter::{self, FusedIterator};

use crate::code::{NativeCode, UnicodeChar};
use crate::error::CharsetError;

/// A mapping between a native character set, encoded as single bytes
/// 0x00 through 0xFF, and a set of 256 distinct Unicode characters.
///
/// Construction fails unless both directions end up with exactly 256
/// entries. After that, [`uc`](Self::uc) never fails for a valid code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    to_unicode: BTreeMap<u8, char>,
    to_native: BTreeMap<char, u8>,
}

impl Charset {
    /// The number of codes, and of distinct characters, in a charset.
    pub const SIZE: usize = 0x100;

    /// Builds a charset by applying each table in turn with
    /// [`setchars`](Self::setchars).
    ///
    /// Later pairs overwrite earlier ones sharing either key, so a base table
    /// can be followed by overrides. Fails with [`CharsetError::Incomplete`]
    /// if the result does not cover all 256 codes with 256 distinct
    /// characters.
    pub fn new<I, T, N, U>(tables: I) -> Result<Self, CharsetError>
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = (N, U)>,
        N: NativeCode,
        U: UnicodeChar,
    {
        let mut charset = Self {
            to_unicode: BTreeMap::new(),
            to_native: BTreeMap::new(),
        };
        for table in tables {
            charset.setchars(table)?;
        }

        let native = charset.to_unicode.len();
        let unicode = charset.to_native.len();
        if native != Self::SIZE || unicode != Self::SIZE {
            return Err(CharsetError::Incomplete { native, unicode });
        }
        Ok(charset)
    }

    /// Builds a charset from a single table.
    pub fn from_table<T, N, U>(table: T) -> Result<Self, CharsetError>
    where
        T: IntoIterator<Item = (N, U)>,
        N: NativeCode,
        U: UnicodeChar,
    {
        Self::new(iter::once(table))
    }

    /// Sets character mappings from `(native code, character)` pairs.
    ///
    /// Existing entries sharing either key are quietly overwritten, which
    /// makes it easy to derive custom charsets from the standard ones. A
    /// character displaced from its code keeps its reverse entry until that
    /// character is itself reassigned.
    ///
    /// Each pair is validated before anything is written. On error, the
    /// pairs before the bad one stay applied and the rest are skipped.
    pub fn setchars<T, N, U>(&mut self, table: T) -> Result<(), CharsetError>
    where
        T: IntoIterator<Item = (N, U)>,
        N: NativeCode,
        U: UnicodeChar,
    {
        for (n, u) in table {
            let code = n.to_native()?;
            let c = u.to_unicode()?;

            if let Some(old) = self.to_unicode.insert(code, c) {
                if old != c {
                    log::trace!("native {:#04X}: {:?} replaced by {:?}", code, old, c);
                }
            }
            if let Some(old) = self.to_native.insert(c, code) {
                if old != code {
                    log::trace!("char {:?}: native {:#04X} replaced by {:#04X}", c, old, code);
                }
            }
        }
        Ok(())
    }

    /// Translates a native code to its Unicode character.
    ///
    /// Codes 0x00 through 0x1F are stored by MSX BASIC as the two bytes
    /// `0x01, 0x40 + n`; this takes the bare code.
    pub fn uc<N: NativeCode>(&self, n: N) -> Result<char, CharsetError> {
        let code = n.to_native()?;
        Ok(self.to_unicode[&code])
    }

    /// Translates a single Unicode character to its native code, as a
    /// one-byte sequence.
    ///
    /// This returns the bare code even for 0x00 through 0x1F; any escape
    /// expansion is left to the caller.
    pub fn native<U: UnicodeChar>(&self, u: U) -> Result<[u8; 1], CharsetError> {
        let c = u.to_unicode()?;
        self.to_native
            .get(&c)
            .map(|&code| [code])
            .ok_or(CharsetError::Unmapped(c))
    }

    /// Translates every byte of `bytes` to Unicode.
    pub fn decode(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|b| self.to_unicode[b]).collect()
    }

    /// Translates every character of `text` to its native code.
    ///
    /// Fails with [`CharsetError::Unmapped`] at the first character that has
    /// no native code.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, CharsetError> {
        text.chars().map(|c| self.native(c).map(|[b]| b)).collect()
    }

    /// Returns `true` if `c` has a native code in this charset.
    pub fn contains(&self, c: char) -> bool {
        self.to_native.contains_key(&c)
    }

    /// Returns an iterator over `(native code, character)` pairs in code
    /// order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.to_unicode.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Charset {
    type Item = (u8, char);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the forward mapping of a [`Charset`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, u8, char>,
}

impl Iterator for Iter<'_> {
    type Item = (u8, char);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&n, &c)| (n, c))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&n, &c)| (n, c))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
