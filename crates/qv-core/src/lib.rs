//! Core types for QuestVault: achievements, quests, dimensions, and the
//! timeline feed.
//!
//! This crate holds the pure domain logic shared by the CLI and TUI front
//! ends. It performs no I/O — records come in from the HTTP client crate
//! already deserialized, and everything here is a total function over them.

/// Player class derivation from per-dimension levels.
pub mod class;
/// The closed set of life dimensions and their display themes.
pub mod dimension;
/// Error types used throughout the crate.
pub mod error;
/// Wire types mirroring the QuestVault API JSON.
pub mod model;
/// The ordered, annotated achievement feed.
pub mod timeline;

/// Re-export player classification.
pub use class::{PlayerClass, classify};
/// Re-export dimension types.
pub use dimension::{ColorToken, Dimension, DimensionTheme, resolve_theme};
/// Re-export error types.
pub use error::{QvError, QvResult};
/// Re-export wire types.
pub use model::{
    Achievement, AchievementId, DimensionStat, Profile, ProfileStats, Quest, QuestId, QuestStatus,
};
/// Re-export the feed types.
pub use timeline::{Feed, FeedItem, Visual};
