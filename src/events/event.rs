//! Deck events.
//!
//! Events report what a `DeckController` action did, after its state has
//! been applied and its sequence played. Each kind has a fixed payload.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, CardLayout, LayoutMode};

/// Event kind, used as the subscription key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckEventKind {
    Select,
    Flip,
    Shuffle,
    Fan,
    Draw,
    Return,
    /// Stack, line or ring arrangement.
    Layout,
    Move,
}

impl std::fmt::Display for DeckEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DeckEventKind::Select => "select",
            DeckEventKind::Flip => "flip",
            DeckEventKind::Shuffle => "shuffle",
            DeckEventKind::Fan => "fan",
            DeckEventKind::Draw => "draw",
            DeckEventKind::Return => "return",
            DeckEventKind::Layout => "layout",
            DeckEventKind::Move => "move",
        };
        f.write_str(name)
    }
}

/// Something that happened to the deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DeckEvent {
    Select { card_id: CardId, selected: bool },
    Flip { card_id: CardId, face_up: bool },
    /// Resulting in-deck order.
    Shuffle { order: Vec<CardId>, seed: i64 },
    /// In-deck cards, in fan order.
    Fan { card_ids: Vec<CardId> },
    /// `drawn` is the full drawn list after the draw.
    Draw { card_id: CardId, drawn: Vec<CardId> },
    Return { card_id: CardId },
    Layout { mode: LayoutMode },
    Move { card_id: CardId, layout: CardLayout },
}

impl DeckEvent {
    #[must_use]
    pub fn kind(&self) -> DeckEventKind {
        match self {
            DeckEvent::Select { .. } => DeckEventKind::Select,
            DeckEvent::Flip { .. } => DeckEventKind::Flip,
            DeckEvent::Shuffle { .. } => DeckEventKind::Shuffle,
            DeckEvent::Fan { .. } => DeckEventKind::Fan,
            DeckEvent::Draw { .. } => DeckEventKind::Draw,
            DeckEvent::Return { .. } => DeckEventKind::Return,
            DeckEvent::Layout { .. } => DeckEventKind::Layout,
            DeckEvent::Move { .. } => DeckEventKind::Move,
        }
    }
}
