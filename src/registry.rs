//! Registry of the standard MSX charset variants.
//!
//! Each variant registers a [`CharsetEntry`] via `inventory::submit!`. On
//! first use every entry is realized into a [`Variant`], which is shared
//! from then on: every key and alias of an entry hands out the same object.
//!
//! # Example
//!
//! ```
//! use msxchars::{registry, CharMap};
//!
//! let ja = registry::get("ja")?;
//! assert_eq!(ja.uc(0xFF)?, '█');
//!
//! // Declared variants without table data fail on every lookup.
//! let err = registry::get("BR")?.uc(0x41).unwrap_err();
//! assert_eq!(err.to_string(), "charset 'pt' not implemented");
//! # Ok::<(), msxchars::RegistryError>(())
//! ```

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use std::sync::OnceLock;

use crate::charmap::{CharMap, Unimplemented, Variant};
use crate::charset::Charset;
use crate::error::{CharsetError, RegistryError, UnknownCharsetError};
use crate::tables::Table;

/// How a registered variant is defined.
#[derive(Debug, Clone, Copy)]
pub enum Definition {
    /// Tables applied in order to build a [`Charset`].
    Tables(&'static [&'static Table]),
    /// No table data yet; lookups fail with
    /// [`CharsetError::NotImplemented`].
    Unimplemented,
}

/// A registered charset variant.
///
/// Each variant registers one of these via `inventory::submit!`.
#[derive(Debug)]
pub struct CharsetEntry {
    /// The canonical key (e.g., "pt"), also the name reported by a
    /// placeholder.
    pub name: &'static str,
    /// Alternative keys (e.g., &["BR"]).
    pub aliases: &'static [&'static str],
    /// A human-readable description.
    pub description: &'static str,
    /// How the variant is defined.
    pub definition: Definition,
}

impl CharsetEntry {
    /// Returns the canonical key of this entry.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns a human-readable description.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Returns whether this entry has table data.
    pub fn is_implemented(&self) -> bool {
        matches!(self.definition, Definition::Tables(_))
    }

    /// Returns all keys (canonical + aliases) for this entry.
    pub fn all_names(&self) -> impl Iterator<Item = &'static str> {
        core::iter::once(self.name).chain(self.aliases.iter().copied())
    }

    /// Check if this entry is registered under `key`. Keys are
    /// case-sensitive.
    pub fn matches(&self, key: &str) -> bool {
        self.all_names().any(|n| n == key)
    }

    fn realize(&self) -> Result<Variant, CharsetError> {
        match self.definition {
            Definition::Tables(tables) => {
                let charset = Charset::new(tables.iter().copied())?;
                log::debug!("realized charset '{}' ({})", self.name, self.description);
                Ok(Variant::Defined(charset))
            }
            Definition::Unimplemented => {
                log::debug!("charset '{}' has no table data", self.name);
                Ok(Variant::Unimplemented(Unimplemented::new(self.name)))
            }
        }
    }
}

inventory::collect!(CharsetEntry);

/// Every entry realized, with each key pointing at its entry's variant.
struct Realized {
    variants: Vec<Result<Variant, CharsetError>>,
    index: BTreeMap<&'static str, usize>,
}

fn realized() -> &'static Realized {
    static REALIZED: OnceLock<Realized> = OnceLock::new();
    REALIZED.get_or_init(|| {
        let mut variants = Vec::new();
        let mut index = BTreeMap::new();
        for entry in entries() {
            for key in entry.all_names() {
                if index.insert(key, variants.len()).is_some() {
                    log::warn!("charset key '{}' registered more than once", key);
                }
            }
            variants.push(entry.realize());
        }
        Realized { variants, index }
    })
}

/// Returns an iterator over all registered entries.
pub fn entries() -> impl Iterator<Item = &'static CharsetEntry> {
    inventory::iter::<CharsetEntry>()
}

/// Returns all registered keys, aliases included, sorted.
pub fn keys() -> impl Iterator<Item = &'static str> {
    realized().index.keys().copied()
}

/// Find an entry by key.
pub fn find_entry(key: &str) -> Result<&'static CharsetEntry, UnknownCharsetError> {
    entries()
        .find(|e| e.matches(key))
        .ok_or_else(|| UnknownCharsetError(key.to_string()))
}

/// Returns the variant registered under `key`.
///
/// The registry is realized on first use. Keys of the same entry return
/// the same object.
pub fn get(key: &str) -> Result<&'static Variant, RegistryError> {
    let realized = realized();
    let &i = realized
        .index
        .get(key)
        .ok_or_else(|| UnknownCharsetError(key.to_string()))?;
    Ok(realized.variants[i].as_ref().map_err(Clone::clone)?)
}

/// Decode native bytes with the charset registered under `key`.
pub fn decode(key: &str, bytes: &[u8]) -> Result<String, RegistryError> {
    Ok(get(key)?.decode(bytes)?)
}

/// Encode text with the charset registered under `key`.
pub fn encode(key: &str, text: &str) -> Result<Vec<u8>, RegistryError> {
    Ok(get(key)?.encode(text)?)
}

// Declared variants whose tables have not been worked out yet.

inventory::submit! {
    CharsetEntry {
        name: "ja1",
        aliases: &[],
        description: "Japanese (MSX1, different hiragana)",
        definition: Definition::Unimplemented,
    }
}

inventory::submit! {
    CharsetEntry {
        name: "ar",
        aliases: &[],
        description: "Arabic",
        definition: Definition::Unimplemented,
    }
}

inventory::submit! {
    CharsetEntry {
        name: "pt",
        aliases: &["BR"],
        description: "Portuguese (Brazil)",
        definition: Definition::Unimplemented,
    }
}

inventory::submit! {
    CharsetEntry {
        name: "ru",
        aliases: &[],
        description: "Russian",
        definition: Definition::Unimplemented,
    }
}
