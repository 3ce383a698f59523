//! Opaque card metadata.
//!
//! Cards can carry arbitrary metadata (suit, rank, rarity, artist credit...).
//! The engine never reads it; it only travels with the `CardData` so a render
//! layer can use it.
//!
//! ## AttributeValue Types
//!
//! - `Int`: Whole numbers (rank, cost)
//! - `Float`: Fractional numbers (weights, aspect ratios)
//! - `Bool`: Flags (foil, promo)
//! - `Text`: Strings (suit, set code)
//! - `TextList`: String lists (tags, keywords)

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Metadata key, such as `"suit"` or `"rank"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AttributeKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for AttributeKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// A metadata value. Serialized untagged, so JSON metadata reads naturally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    TextList(Vec<String>),
}

impl AttributeValue {
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        if let AttributeValue::Int(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    /// Numeric value; integers widen.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            AttributeValue::Float(v) => Some(v),
            AttributeValue::Int(v) => Some(v as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if let AttributeValue::Bool(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    /// Text value. A single-entry list also reads as text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::TextList(list) if list.len() == 1 => Some(&list[0]),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            AttributeValue::TextList(list) => Some(list),
            AttributeValue::Text(s) => Some(std::slice::from_ref(s)),
            _ => None,
        }
    }
}

macro_rules! attribute_from {
    ($($source:ty => $variant:ident($convert:expr)),* $(,)?) => {
        $(
            impl From<$source> for AttributeValue {
                fn from(value: $source) -> Self {
                    AttributeValue::$variant($convert(value))
                }
            }
        )*
    };
}

attribute_from! {
    bool => Bool(std::convert::identity),
    i32 => Int(i64::from),
    i64 => Int(std::convert::identity),
    u32 => Int(i64::from),
    f64 => Float(std::convert::identity),
    &str => Text(str::to_owned),
    String => Text(std::convert::identity),
    Vec<String> => TextList(std::convert::identity),
}

/// A card's metadata map.
pub type Attributes = FxHashMap<AttributeKey, AttributeValue>;
