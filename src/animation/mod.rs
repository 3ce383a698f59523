//! Animation sequencing.
//!
//! ## Key Types
//!
//! - `AnimationSequence`: declarative per-card motion for a driver to play
//! - `Easing`: named easing curve
//! - `DeckTransition`: new deck + sequence, returned by every primitive
//!
//! ## Primitives
//!
//! `fan`, `stack`, `line`, `ring`, `shuffle`, `flip`, `animate_to`. See
//! `sequencer` for timings.

pub mod sequence;
pub mod sequencer;

pub use sequence::{AnimationSequence, AnimationStep, AnimationTarget, Easing, SequenceTag};
pub use sequencer::{
    animate_to, fan, fan_with, final_layouts, flip, line, ring, shuffle, stack, DeckTransition,
    FlipOptions, MoveOptions, ShuffleOptions,
};
