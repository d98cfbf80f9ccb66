//! Tests for the charset registry.
//!
//! Placeholder tests are stamped out per key with `paste`.

#![cfg(feature = "registry")]

use msxchars::registry::{self, Definition};
use msxchars::{CharMap, CharsetError, RegistryError, UnknownCharsetError};
use paste::paste;

fn not_implemented(name: &str) -> CharsetError {
    CharsetError::NotImplemented { name: name.into() }
}

// =============================================================================
// Placeholders
// =============================================================================

/// Tests for a key whose variant has no table data, reporting `$name`.
macro_rules! test_placeholder {
    ($key:ident, $name:literal) => {
        paste! {
            mod [<placeholder_ $key:lower>] {
                use super::*;

                const KEY: &str = stringify!($key);

                #[test]
                fn uc_fails_for_any_code() {
                    let v = registry::get(KEY).unwrap();
                    assert_eq!(v.uc(0x41), Err(not_implemented($name)));
                    assert_eq!(v.uc(0), Err(not_implemented($name)));
                    assert_eq!(v.uc(256), Err(not_implemented($name)));
                    assert_eq!(v.uc(-1), Err(not_implemented($name)));
                }

                #[test]
                fn native_fails_for_any_string() {
                    let v = registry::get(KEY).unwrap();
                    assert_eq!(v.native('A'), Err(not_implemented($name)));
                    assert_eq!(v.native("ab"), Err(not_implemented($name)));
                    assert_eq!(v.native(""), Err(not_implemented($name)));
                }

                #[test]
                fn conversions_fail() {
                    assert_eq!(
                        registry::decode(KEY, b"A"),
                        Err(RegistryError::Charset(not_implemented($name)))
                    );
                    assert_eq!(
                        registry::encode(KEY, ""),
                        Err(RegistryError::Charset(not_implemented($name)))
                    );
                }

                #[test]
                fn entry_is_unimplemented() {
                    let entry = registry::find_entry(KEY).unwrap();
                    assert!(!entry.is_implemented());
                    assert!(matches!(entry.definition, Definition::Unimplemented));
                    assert_eq!(entry.name(), $name);
                    assert!(!registry::get(KEY).unwrap().is_implemented());
                }
            }
        }
    };
}

test_placeholder!(int, "int");
test_placeholder!(ja1, "ja1");
test_placeholder!(ar, "ar");
test_placeholder!(pt, "pt");
test_placeholder!(BR, "pt");
test_placeholder!(ru, "ru");

#[test]
fn alias_reports_canonical_name() {
    let pt = registry::get("pt").unwrap().uc(0x41).unwrap_err();
    let br = registry::get("BR").unwrap().uc(0x41).unwrap_err();
    assert_eq!(pt, br);
    assert_eq!(br.to_string(), "charset 'pt' not implemented");
}

#[test]
fn alias_is_same_object() {
    let pt = registry::get("pt").unwrap();
    let br = registry::get("BR").unwrap();
    assert!(std::ptr::eq(pt, br));
}

// =============================================================================
// Japanese
// =============================================================================

#[test]
fn japanese_is_realized() {
    let ja = registry::get("ja").unwrap();
    assert!(ja.is_implemented());
    let charset = ja.as_charset().unwrap();
    for n in 0u8..=0xFF {
        assert_eq!(charset.native(charset.uc(n).unwrap()).unwrap(), [n]);
    }
}

#[test]
fn japanese_lookups_through_variant() {
    let ja = registry::get("ja").unwrap();
    assert_eq!(ja.uc(0x01), Ok('月'));
    assert_eq!(ja.native('月'), Ok([0x01]));
    assert_eq!(ja.uc(256), Err(CharsetError::InvalidNativeCode(256)));
    assert_eq!(
        ja.native("月火"),
        Err(CharsetError::InvalidUnicodeChar("月火".into()))
    );
}

#[test]
fn japanese_decode_encode() {
    let bytes = [0x48, 0x49, 0x20, 0xB1, 0xB2];
    let text = registry::decode("ja", &bytes).unwrap();
    assert_eq!(text, "HI アイ");
    assert_eq!(registry::encode("ja", &text).unwrap(), bytes);
    assert_eq!(
        registry::encode("ja", "é"),
        Err(RegistryError::Charset(CharsetError::Unmapped('é')))
    );
}

// =============================================================================
// Keys
// =============================================================================

#[test]
fn unknown_key() {
    let err = registry::get("xx").unwrap_err();
    assert_eq!(
        err,
        RegistryError::UnknownCharset(UnknownCharsetError("xx".into()))
    );
    assert_eq!(err.to_string(), "unknown charset: xx");
    assert!(registry::decode("Ja", b"").is_err());
}

#[test]
fn every_key_resolves() {
    for key in registry::keys() {
        assert!(registry::get(key).is_ok(), "{}", key);
        assert!(registry::find_entry(key).is_ok(), "{}", key);
    }
}

#[test]
fn descriptions_are_not_empty() {
    for entry in registry::entries() {
        assert!(!entry.description().is_empty(), "{}", entry.name());
    }
}
