//! Argument conversion for charset lookups.
//!
//! Table data and callers hand over loosely typed values: integers of any
//! width for native codes and strings for Unicode characters. These traits
//! narrow them to `u8` and `char`, reporting the offending value when it
//! does not fit.

use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::error::CharsetError;

/// A value that can be checked and narrowed to a native character code.
pub trait NativeCode: Copy {
    /// Returns the code as a byte, or [`CharsetError::InvalidNativeCode`] if
    /// it lies outside `0x00..=0xFF`.
    fn to_native(self) -> Result<u8, CharsetError>;
}

macro_rules! impl_native_code {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl NativeCode for $ty {
                #[inline]
                fn to_native(self) -> Result<u8, CharsetError> {
                    u8::try_from(self).map_err(|_| CharsetError::InvalidNativeCode(self as i128))
                }
            }
        )+
    };
}

impl_native_code!(u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);

impl NativeCode for u8 {
    #[inline]
    fn to_native(self) -> Result<u8, CharsetError> {
        Ok(self)
    }
}

/// A value that can be checked and narrowed to a single Unicode character.
pub trait UnicodeChar {
    /// Returns the character, or [`CharsetError::InvalidUnicodeChar`] if the
    /// value is not exactly one code point.
    fn to_unicode(&self) -> Result<char, CharsetError>;
}

impl UnicodeChar for char {
    #[inline]
    fn to_unicode(&self) -> Result<char, CharsetError> {
        Ok(*self)
    }
}

impl UnicodeChar for str {
    fn to_unicode(&self) -> Result<char, CharsetError> {
        let mut chars = self.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(CharsetError::InvalidUnicodeChar(self.to_owned())),
        }
    }
}

impl UnicodeChar for String {
    #[inline]
    fn to_unicode(&self) -> Result<char, CharsetError> {
        self.as_str().to_unicode()
    }
}

impl<T: UnicodeChar + ?Sized> UnicodeChar for &T {
    #[inline]
    fn to_unicode(&self) -> Result<char, CharsetError> {
        (**self).to_unicode()
    }
}
