//! Card catalog entries and their runtime wrappers.
//!
//! `CardData` is the immutable description of a card: its name, optional
//! face/back artwork references and opaque metadata. It is created once and
//! shared behind an `Arc`.
//!
//! `CardState` is the per-deck runtime view of a card (face up, selected,
//! draggable). Transitions replace a `CardState` wholesale instead of
//! mutating it, so older `DeckState` snapshots stay valid.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::attributes::{AttributeKey, AttributeValue, Attributes};

/// Unique card identifier.
///
/// Ids are caller-chosen strings ("ace-of-spades", "c0"). The engine only
/// compares them for equality and ordering.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Immutable catalog entry for a card.
///
/// ## Example
///
/// ```
/// use deck_motion::core::CardData;
///
/// let ace = CardData::new("ace-spades", "Ace of Spades")
///     .with_face("faces/ace-spades.png")
///     .with_attr("rank", 1i32);
///
/// assert_eq!(ace.get_attr("rank").and_then(|v| v.as_int()), Some(1));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardData {
    pub id: CardId,

    /// Display name.
    pub name: String,

    pub description: Option<String>,

    /// Reference to the face artwork (path, URL or asset key).
    pub face: Option<String>,

    /// Reference to the back artwork.
    pub back: Option<String>,

    /// Opaque metadata, never interpreted by the engine.
    pub metadata: Attributes,
}

impl CardData {
    /// Create a new card with no artwork or metadata.
    pub fn new(id: impl Into<CardId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            face: None,
            back: None,
            metadata: Attributes::default(),
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the face artwork reference (builder pattern).
    #[must_use]
    pub fn with_face(mut self, face: impl Into<String>) -> Self {
        self.face = Some(face.into());
        self
    }

    /// Set the back artwork reference (builder pattern).
    #[must_use]
    pub fn with_back(mut self, back: impl Into<String>) -> Self {
        self.back = Some(back.into());
        self
    }

    /// Add a metadata entry (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Get a metadata entry.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.metadata.get(&AttributeKey::new(key))
    }
}

/// Runtime state of one card in a deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardState {
    pub id: CardId,
    pub face_up: bool,
    pub selected: bool,
    pub draggable: bool,

    /// Shared catalog entry.
    pub data: Arc<CardData>,
}

impl CardState {
    /// Wrap a catalog entry in its initial runtime state: face down,
    /// unselected, draggable.
    #[must_use]
    pub fn new(data: Arc<CardData>) -> Self {
        Self {
            id: data.id.clone(),
            face_up: false,
            selected: false,
            draggable: true,
            data,
        }
    }

    /// Return a copy with `patch` applied.
    #[must_use]
    pub fn patched(&self, patch: &CardStatePatch) -> Self {
        Self {
            id: self.id.clone(),
            face_up: patch.face_up.unwrap_or(self.face_up),
            selected: patch.selected.unwrap_or(self.selected),
            draggable: patch.draggable.unwrap_or(self.draggable),
            data: Arc::clone(&self.data),
        }
    }
}

/// Partial update for a `CardState`. `None` fields keep their value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStatePatch {
    pub face_up: Option<bool>,
    pub selected: Option<bool>,
    pub draggable: Option<bool>,
}

impl CardStatePatch {
    /// Empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn face_up(mut self, face_up: bool) -> Self {
        self.face_up = Some(face_up);
        self
    }

    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    #[must_use]
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = Some(draggable);
        self
    }
}
