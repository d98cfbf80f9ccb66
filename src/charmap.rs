//! The lookup capability shared by every charset variant.
//!
//! - [`CharMap`]: the `uc`/`native` capability
//! - [`Unimplemented`]: a variant whose table data does not exist yet
//! - [`Variant`]: either of the above, or a realized [`Charset`]
//!
//! # Example
//!
//! ```
//! use msxchars::{CharMap, Unimplemented};
//!
//! let ru = Unimplemented::new("ru");
//! let err = ru.uc(0x41).unwrap_err();
//! assert_eq!(err.to_string(), "charset 'ru' not implemented");
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::charset::Charset;
use crate::code::{NativeCode, UnicodeChar};
use crate::error::CharsetError;

/// Lookup between native codes and Unicode characters.
pub trait CharMap {
    /// Translates a native code to its Unicode character.
    fn uc<N: NativeCode>(&self, n: N) -> Result<char, CharsetError>;

    /// Translates a single Unicode character to its native code.
    fn native<U: UnicodeChar>(&self, u: U) -> Result<[u8; 1], CharsetError>;

    /// Translates every byte of `bytes` to Unicode.
    fn decode(&self, bytes: &[u8]) -> Result<String, CharsetError> {
        bytes.iter().map(|&b| self.uc(b)).collect()
    }

    /// Translates every character of `text` to its native code.
    fn encode(&self, text: &str) -> Result<Vec<u8>, CharsetError> {
        text.chars().map(|c| self.native(c).map(|[b]| b)).collect()
    }
}

impl CharMap for Charset {
    #[inline]
    fn uc<N: NativeCode>(&self, n: N) -> Result<char, CharsetError> {
        Charset::uc(self, n)
    }

    #[inline]
    fn native<U: UnicodeChar>(&self, u: U) -> Result<[u8; 1], CharsetError> {
        Charset::native(self, u)
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, CharsetError> {
        Ok(Charset::decode(self, bytes))
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, CharsetError> {
        Charset::encode(self, text)
    }
}

/// A charset variant that is declared but has no table data.
///
/// Every lookup fails with [`CharsetError::NotImplemented`], whatever the
/// argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Unimplemented {
    name: String,
}

impl Unimplemented {
    /// Creates a placeholder for the variant `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the variant name reported on failure.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn unimplemented(&self) -> CharsetError {
        CharsetError::NotImplemented {
            name: self.name.clone(),
        }
    }
}

impl CharMap for Unimplemented {
    fn uc<N: NativeCode>(&self, _n: N) -> Result<char, CharsetError> {
        Err(self.unimplemented())
    }

    fn native<U: UnicodeChar>(&self, _u: U) -> Result<[u8; 1], CharsetError> {
        Err(self.unimplemented())
    }

    fn decode(&self, _bytes: &[u8]) -> Result<String, CharsetError> {
        Err(self.unimplemented())
    }

    fn encode(&self, _text: &str) -> Result<Vec<u8>, CharsetError> {
        Err(self.unimplemented())
    }
}

/// A named charset variant: realized or still a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    /// A complete charset.
    Defined(Charset),
    /// A variant without table data.
    Unimplemented(Unimplemented),
}

impl Variant {
    /// Returns `true` if lookups on this variant can succeed.
    pub fn is_implemented(&self) -> bool {
        matches!(self, Self::Defined(_))
    }

    /// Returns the underlying charset, if realized.
    pub fn as_charset(&self) -> Option<&Charset> {
        match self {
            Self::Defined(charset) => Some(charset),
            Self::Unimplemented(_) => None,
        }
    }
}

impl From<Charset> for Variant {
    fn from(charset: Charset) -> Self {
        Self::Defined(charset)
    }
}

impl From<Unimplemented> for Variant {
    fn from(placeholder: Unimplemented) -> Self {
        Self::Unimplemented(placeholder)
    }
}

impl CharMap for Variant {
    fn uc<N: NativeCode>(&self, n: N) -> Result<char, CharsetError> {
        match self {
            Self::Defined(c) => CharMap::uc(c, n),
            Self::Unimplemented(u) => u.uc(n),
        }
    }

    fn native<U: UnicodeChar>(&self, u: U) -> Result<[u8; 1], CharsetError> {
        match self {
            Self::Defined(c) => CharMap::native(c, u),
            Self::Unimplemented(p) => p.native(u),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, CharsetError> {
        match self {
            Self::Defined(c) => CharMap::decode(c, bytes),
            Self::Unimplemented(u) => u.decode(bytes),
        }
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, CharsetError> {
        match self {
            Self::Defined(c) => CharMap::encode(c, text),
            Self::Unimplemented(u) => u.encode(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables;

    fn not_implemented(name: &str) -> CharsetError {
        CharsetError::NotImplemented { name: name.into() }
    }

    #[test]
    fn test_placeholder_ignores_arguments() {
        let p = Unimplemented::new("ar");
        assert_eq!(p.uc(0x41), Err(not_implemented("ar")));
        assert_eq!(p.uc(256), Err(not_implemented("ar")));
        assert_eq!(p.uc(-1), Err(not_implemented("ar")));
        assert_eq!(p.native('A'), Err(not_implemented("ar")));
        assert_eq!(p.native("ab"), Err(not_implemented("ar")));
    }

    #[test]
    fn test_placeholder_conversions_fail_even_when_empty() {
        let p = Unimplemented::new("ru");
        assert_eq!(p.decode(&[]), Err(not_implemented("ru")));
        assert_eq!(p.encode(""), Err(not_implemented("ru")));
    }

    #[test]
    fn test_variant_delegates() {
        let ja: Variant = Charset::from_table(&tables::JAPANESE).unwrap().into();
        assert!(ja.is_implemented());
        assert_eq!(ja.uc(0x80), Ok('♠'));
        assert_eq!(ja.native("ン"), Ok([0xDD]));
        assert_eq!(ja.decode(&[0x48, 0x49]).as_deref(), Ok("HI"));
        assert_eq!(ja.encode("年").unwrap(), [0x08]);

        let int: Variant = Unimplemented::new("int").into();
        assert!(!int.is_implemented());
        assert!(int.as_charset().is_none());
        assert_eq!(int.uc(0x41), Err(not_implemented("int")));
    }

    #[test]
    fn test_provided_methods_use_lookups() {
        struct Upper;

        impl CharMap for Upper {
            fn uc<N: NativeCode>(&self, n: N) -> Result<char, CharsetError> {
                Ok(char::from(n.to_native()?).to_ascii_uppercase())
            }

            fn native<U: UnicodeChar>(&self, u: U) -> Result<[u8; 1], CharsetError> {
                let c = u.to_unicode()?;
                u8::try_from(c)
                    .map(|b| [b.to_ascii_lowercase()])
                    .map_err(|_| CharsetError::Unmapped(c))
            }
        }

        assert_eq!(Upper.decode(b"abc").as_deref(), Ok("ABC"));
        assert_eq!(Upper.encode("ABC").unwrap(), b"abc");
        assert_eq!(Upper.encode("é"), Ok(alloc::vec![0xE9]));
        assert_eq!(Upper.encode("月"), Err(CharsetError::Unmapped('月')));
    }
}
