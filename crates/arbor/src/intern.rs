//! String interning for identifiers appearing in a syntax tree.
//!
//! Every scope-root node (a [`Module`](crate::ast::Module) or an
//! [`Expression`](crate::ast::Expression)) owns one [`InternPool`] that
//! canonicalizes all identifiers reachable beneath it: interning the same
//! name twice returns the same [`StringId`], so later passes can compare
//! names by id instead of by text. The pool is born with its root node and
//! lives exactly as long as it does.
//!
//! StringIds are laid out as follows:
//! * 0 to 128 - single character strings for all 128 ASCII characters
//! * 1000 to count(StaticNames) - the fixed placeholder names
//! * 10_000+ - names interned per pool

use std::{str::FromStr, sync::LazyLock};

use ahash::AHashMap;
use strum::{EnumString, FromRepr, IntoStaticStr};

/// Index into an intern pool's storage.
///
/// Uses `u32` to save space (4 bytes vs 8 bytes for `usize`). This limits us
/// to ~4 billion unique names, which is more than sufficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct StringId(u32);

impl StringId {
    /// Returns the raw index value.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the StringId for an ASCII byte.
    #[must_use]
    pub fn from_ascii(byte: u8) -> Self {
        Self(u32::from(byte))
    }
}

/// StringId offsets
const STATIC_NAME_ID_OFFSET: u32 = 1000;
const POOL_STRING_ID_OFFSET: usize = 10_000;

/// Static strings for all 128 ASCII characters, built once on first access.
///
/// Uses `LazyLock` to build the array at runtime (once), leaking the strings
/// to get `'static` lifetime. The leak is intentional and bounded (128
/// single-byte strings).
static ASCII_STRS: LazyLock<[&'static str; 128]> = LazyLock::new(|| {
    std::array::from_fn(|i| {
        // Safe: i is always 0-127 for a 128-element array
        let s = char::from(u8::try_from(i).expect("index out of u8 range")).to_string();
        &*Box::leak(s.into_boxed_str())
    })
});

/// Placeholder names known at compile time that don't need to be interned.
///
/// These are the display names reported for nodes that have no surface name
/// of their own: anonymous functions report `<lambda>`, module-level and
/// expression-level roots report `<module>`.
#[repr(u16)]
#[derive(
    Debug, Clone, Copy, FromRepr, EnumString, IntoStaticStr, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum StaticNames {
    #[strum(serialize = "<module>")]
    Module,
    #[strum(serialize = "<lambda>")]
    Lambda,
    #[strum(serialize = "<genexpr>")]
    GenExpr,
}

impl StaticNames {
    /// Converts a `StringId` back to its static name, if it is one.
    fn from_string_id(id: StringId) -> Option<Self> {
        let enum_id = id.0.checked_sub(STATIC_NAME_ID_OFFSET)?;
        u16::try_from(enum_id).ok().and_then(Self::from_repr)
    }
}

/// Converts this static name variant to its corresponding `StringId`.
impl From<StaticNames> for StringId {
    fn from(value: StaticNames) -> Self {
        let string_id = value as u32;
        Self(string_id + STATIC_NAME_ID_OFFSET)
    }
}

impl PartialEq<StaticNames> for StringId {
    fn eq(&self, other: &StaticNames) -> bool {
        *self == Self::from(*other)
    }
}

impl PartialEq<StringId> for StaticNames {
    fn eq(&self, other: &StringId) -> bool {
        StringId::from(*self) == *other
    }
}

/// A string interner that stores unique identifier names and returns indices
/// for lookup.
///
/// Names are deduplicated on insertion - interning the same string twice
/// returns the same `StringId`. The pool owns all interned strings and
/// provides lookup by index.
///
/// # Thread Safety
///
/// The pool is not thread-safe. It's designed to be populated single-threaded
/// while a tree is built, then accessed read-only during traversal.
#[derive(Debug, Default, Clone)]
pub struct InternPool {
    /// Maps strings to their indices for deduplication during interning.
    string_map: AHashMap<String, StringId>,
    /// Storage for interned names, indexed by `StringId`.
    strings: Vec<String>,
}

impl InternPool {
    /// Creates a new empty intern pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a name, returning its `StringId`.
    ///
    /// * If the name is a single ASCII character, returns the pre-interned id
    /// * If the name is a known static placeholder, returns the pre-interned id
    /// * If the name was already interned, returns the existing id
    /// * Otherwise, stores the name and returns a new id
    pub fn intern(&mut self, s: &str) -> StringId {
        if s.len() == 1 && s.is_ascii() {
            StringId::from_ascii(s.as_bytes()[0])
        } else if let Ok(name) = StaticNames::from_str(s) {
            name.into()
        } else {
            *self.string_map.entry(s.to_owned()).or_insert_with(|| {
                let string_id = self.strings.len() + POOL_STRING_ID_OFFSET;
                let id = StringId(string_id.try_into().expect("StringId overflow"));
                self.strings.push(s.to_owned());
                id
            })
        }
    }

    /// Looks up a name by its `StringId`.
    ///
    /// # Panics
    ///
    /// Panics if the `StringId` is invalid - not from this pool, the ASCII
    /// layer, or the static name layer. An invalid id is a contract violation
    /// by the caller, not a recoverable condition.
    #[inline]
    #[must_use]
    pub fn get_str(&self, id: StringId) -> &str {
        if let Ok(c) = u8::try_from(id.0) {
            ASCII_STRS[c as usize]
        } else if let Some(pool_index) = id.index().checked_sub(POOL_STRING_ID_OFFSET) {
            &self.strings[pool_index]
        } else {
            let name = StaticNames::from_string_id(id).expect("invalid static name StringId");
            name.into()
        }
    }

    /// Looks up a `StringId` by its string value.
    ///
    /// Returns `Some(id)` if the name was previously interned, `None`
    /// otherwise. This is the inverse of `get_str()` for names that have
    /// already been interned.
    #[must_use]
    pub fn try_get_str_id(&self, s: &str) -> Option<StringId> {
        if s.len() == 1 && s.is_ascii() {
            return Some(StringId::from_ascii(s.as_bytes()[0]));
        }
        if let Ok(name) = StaticNames::from_str(s) {
            return Some(name.into());
        }
        self.string_map.get(s).copied()
    }

    /// Returns the number of dynamically interned names.
    ///
    /// This counts only names interned into this pool (not the ASCII and
    /// static placeholder layers that are always present).
    #[must_use]
    pub fn interned_count(&self) -> usize {
        self.strings.len()
    }

    /// Reconstructs a pool from its serialized string storage.
    ///
    /// The `string_map` is rebuilt by iterating over the strings and mapping
    /// each to its `StringId` based on position.
    fn from_parts(strings: Vec<String>) -> Self {
        let mut string_map = AHashMap::with_capacity(strings.len());
        for (index, s) in strings.iter().enumerate() {
            let string_id = index + POOL_STRING_ID_OFFSET;
            let id = StringId(string_id.try_into().expect("StringId overflow"));
            string_map.insert(s.clone(), id);
        }
        Self { string_map, strings }
    }
}

/// Serializes only the string storage; the dedup map is derived state.
impl serde::Serialize for InternPool {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.strings.serialize(serializer)
    }
}

/// Deserializes the string storage and rebuilds the dedup map from it.
impl<'de> serde::Deserialize<'de> for InternPool {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let strings = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_parts(strings))
    }
}
