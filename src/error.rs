use alloc::string::String;
use core::fmt;

/// An error raised while building or querying a charset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharsetError {
    /// After all tables were applied, one or both directions of the map do
    /// not hold exactly 256 entries.
    Incomplete {
        /// Number of distinct native codes present.
        native: usize,
        /// Number of distinct Unicode characters present.
        unicode: usize,
    },
    /// A native code outside `0x00..=0xFF`.
    InvalidNativeCode(i128),
    /// A string that is not exactly one Unicode code point.
    InvalidUnicodeChar(String),
    /// A well-formed character that has no native code in this charset.
    Unmapped(char),
    /// The charset variant has no table data yet.
    NotImplemented {
        /// The canonical name of the variant.
        name: String,
    },
}

impl CharsetError {
    /// Returns `true` for errors caused by a malformed argument rather than
    /// by the charset itself.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidNativeCode(_) | Self::InvalidUnicodeChar(_)
        )
    }
}

impl fmt::Display for CharsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete { native, unicode } => write!(
                f,
                "incomplete charset: {:#04X} native / {:#04X} unicode chars present",
                native, unicode
            ),
            Self::InvalidNativeCode(code) if *code < 0 => {
                write!(f, "bad native char code -{:#04X}", code.unsigned_abs())
            }
            Self::InvalidNativeCode(code) => write!(f, "bad native char code {:#04X}", code),
            Self::InvalidUnicodeChar(s) => {
                write!(f, "not a single Unicode character: {:?}", s)
            }
            Self::Unmapped(c) => write!(f, "no native code for character {:?}", c),
            Self::NotImplemented { name } => write!(f, "charset '{}' not implemented", name),
        }
    }
}

impl core::error::Error for CharsetError {}

/// Error returned when a charset key is not registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCharsetError(pub String);

impl fmt::Display for UnknownCharsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown charset: {}", self.0)
    }
}

impl core::error::Error for UnknownCharsetError {}

/// Error returned by registry lookups and conversions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No entry is registered under the key.
    UnknownCharset(UnknownCharsetError),
    /// The entry exists but the lookup or conversion failed.
    Charset(CharsetError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCharset(e) => fmt::Display::fmt(e, f),
            Self::Charset(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl core::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::UnknownCharset(e) => Some(e),
            Self::Charset(e) => Some(e),
        }
    }
}

impl From<UnknownCharsetError> for RegistryError {
    fn from(e: UnknownCharsetError) -> Self {
        Self::UnknownCharset(e)
    }
}

impl From<CharsetError> for RegistryError {
    fn from(e: CharsetError) -> Self {
        Self::Charset(e)
    }
}
