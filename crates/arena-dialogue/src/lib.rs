//! `arena-dialogue`: what the agents say, and what is learned from it.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`record`]     | `ChatMessage`, `Insight`, `InsightType`, `Priority`, …    |
//! | [`book`]       | `DialogueBook`: candidate lines per POI                  |
//! | [`generator`]  | `DialogueGenerator`: cooldown + non-repetition policy    |
//! | [`insight`]    | `InsightExtractor`: ordered keyword rule table           |
//! | [`transcript`] | `Transcript`: the message and insight log                |
//! | [`error`]      | `DialogueError`, `DialogueResult`                         |
//!
//! # Flow
//!
//! ```text
//! poll ─▶ DialogueGenerator::poll ─▶ Utterance ─▶ Transcript::record_message
//!                                                   │ (insight-bearing only,
//!                                                   ▼  after a short delay)
//!                                  InsightExtractor::extract ─▶ Transcript::record_insight
//! ```

pub mod book;
pub mod error;
pub mod generator;
pub mod insight;
pub mod record;
pub mod transcript;


pub use book::{DialogueBook, DialogueLine, SYNTHESIZER_DIALOGUE};
pub use error::{DialogueError, DialogueResult};
pub use generator::{DialogueGenerator, Utterance};
pub use insight::{INSIGHT_RULES, InsightExtractor, InsightRule};
pub use record::{ChatMessage, Insight, InsightDraft, InsightPatch, InsightType, LineKind, Priority};
pub use transcript::Transcript;
