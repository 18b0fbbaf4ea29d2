//! Tab definitions, trait, and tab bar rendering.

pub mod dashboard;
pub mod sheet;
pub mod timeline;

use qv_core::ColorToken;
use ratatui::prelude::*;

/// Identifies which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    /// Active quests and recent achievements at a glance.
    Dashboard,
    /// Chronological achievement feed.
    Timeline,
    /// Character sheet: level, class, dimension stats.
    Sheet,
}

impl TabId {
    /// All tab IDs in display order.
    pub const ALL: [TabId; 3] = [TabId::Dashboard, TabId::Timeline, TabId::Sheet];

    /// Parse a tab name from a string.
    pub fn from_name(name: &str) -> Option<TabId> {
        match name.to_lowercase().as_str() {
            "dashboard" | "quests" => Some(TabId::Dashboard),
            "timeline" | "feed" => Some(TabId::Timeline),
            "sheet" | "character" => Some(TabId::Sheet),
            _ => None,
        }
    }

    /// Index of this tab in the tab bar.
    pub fn index(self) -> usize {
        TabId::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Get the next tab (wrapping).
    pub fn next(self) -> TabId {
        let idx = (self.index() + 1) % TabId::ALL.len();
        TabId::ALL[idx]
    }

    /// Get the previous tab (wrapping).
    pub fn prev(self) -> TabId {
        let idx = if self.index() == 0 {
            TabId::ALL.len() - 1
        } else {
            self.index() - 1
        };
        TabId::ALL[idx]
    }
}

/// Trait that each tab screen implements.
pub trait Tab {
    /// Handle a key event. Return `true` if the app should quit.
    fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool;

    /// Handle a mouse event.
    fn handle_mouse(&mut self, _mouse: crossterm::event::MouseEvent) {}

    /// Poll in-flight background loads. Called once per event-loop tick.
    fn tick(&mut self) {}

    /// Draw the tab content into the given area.
    fn draw(&self, frame: &mut Frame, area: Rect);

    /// Return context-sensitive status bar text.
    fn status_hint(&self) -> &str;
}

/// Map an abstract dimension color onto the terminal palette.
pub fn token_color(token: ColorToken) -> Color {
    match token {
        ColorToken::Purple => Color::Magenta,
        ColorToken::Red => Color::Red,
        ColorToken::Yellow => Color::Yellow,
        ColorToken::Green => Color::Green,
        ColorToken::Blue => Color::Blue,
        ColorToken::Cyan => Color::Cyan,
        ColorToken::Magenta => Color::LightMagenta,
        ColorToken::Gray => Color::DarkGray,
    }
}

/// Tab bar labels in display order; also the widths the mouse hit test
/// measures against (ASCII only, so byte length is display width).
pub const TAB_TITLES: [&str; 3] = ["[1]Dashboard", "[2]Timeline", "[3]Sheet"];

/// Draw the tab bar.
pub fn draw_tab_bar(frame: &mut Frame, active: TabId, area: Rect) {
    let active_idx = active.index();
    let mut spans = Vec::new();

    for (i, title) in TAB_TITLES.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }

        let style = if i == active_idx {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(*title, style));
    }

    let line = Line::from(spans);
    let paragraph = ratatui::widgets::Paragraph::new(line);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycling_wraps() {
        assert_eq!(TabId::Dashboard.next(), TabId::Timeline);
        assert_eq!(TabId::Sheet.next(), TabId::Dashboard);
        assert_eq!(TabId::Dashboard.prev(), TabId::Sheet);
    }

    #[test]
    fn tab_names_parse() {
        assert_eq!(TabId::from_name("Timeline"), Some(TabId::Timeline));
        assert_eq!(TabId::from_name("character"), Some(TabId::Sheet));
        assert_eq!(TabId::from_name("dice"), None);
    }
}
