//! Terminal UI for the QuestVault quest and achievement tracker.
//!
//! Provides a unified ratatui-based interface with tabs for the quest
//! dashboard, the achievement timeline, and the character sheet. All data
//! comes from the QuestVault API; loads run on background threads and are
//! cancelled when the view that started them goes away.

pub mod app;
pub mod shared;
pub mod tabs;
pub mod terminal;
