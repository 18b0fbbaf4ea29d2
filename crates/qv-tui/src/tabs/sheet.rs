//! Character sheet tab: level, player class, and dimension stats.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use qv_client::{ApiClient, FetchHandle, fetch};
use qv_core::{Profile, classify, resolve_theme};

use super::{Tab, token_color};

/// Character sheet tab state.
pub struct SheetTab {
    client: ApiClient,
    /// Always present: seeded with the profile fetched at startup.
    profile: Profile,
    error: Option<String>,
    load: Option<FetchHandle<Profile>>,
    scroll: u16,
}

impl SheetTab {
    /// Create the tab from the profile fetched during startup.
    pub fn new(client: ApiClient, profile: Profile) -> Self {
        Self {
            client,
            profile,
            error: None,
            load: None,
            scroll: 0,
        }
    }

    fn reload(&mut self) {
        let client = self.client.clone();
        self.error = None;
        self.load = Some(fetch(move |_| client.profile()));
    }

    fn sheet_lines(&self) -> Vec<Line<'_>> {
        let profile = &self.profile;
        let class = classify(&profile.dimension_stats);

        let mut lines = vec![
            Line::from(Span::styled(
                format!("  {}", profile.shown_name()),
                Style::default().bold(),
            )),
            Line::from(Span::styled(
                format!("  @{}", profile.username),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("  Level "),
                Span::styled(profile.level.to_string(), Style::default().bold()),
                Span::raw("  \u{2014}  "),
                Span::styled(class.name, Style::default().fg(Color::Yellow).bold()),
            ]),
            Line::from(Span::styled(
                format!("  {}", class.flavor),
                Style::default().fg(Color::DarkGray).italic(),
            )),
            Line::from(""),
            Line::from(format!(
                "  {} active quests · {} completed · {} achievements",
                profile.stats.quests_active,
                profile.stats.quests_completed,
                profile.stats.achievements_unlocked
            )),
            Line::from(""),
        ];

        if profile.dimension_stats.is_empty() {
            lines.push(Line::from(Span::styled(
                "  No dimension activity yet.",
                Style::default().fg(Color::DarkGray).italic(),
            )));
            return lines;
        }

        let max_level = profile
            .dimension_stats
            .iter()
            .map(|s| s.level)
            .max()
            .unwrap_or(1)
            .max(1);

        for stat in &profile.dimension_stats {
            let theme = resolve_theme(Some(&stat.dimension));
            // Bar scaled against the strongest dimension, 20 cells wide.
            let filled = (stat.level * 20).div_ceil(max_level) as usize;
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} {:<14}", theme.icon, stat.dimension),
                    Style::default().fg(token_color(theme.color)),
                ),
                Span::styled(
                    "\u{2588}".repeat(filled),
                    Style::default().fg(token_color(theme.color)),
                ),
                Span::styled(
                    "\u{2591}".repeat(20 - filled),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!("  {}", stat.level)),
            ]));
        }

        lines
    }
}

impl Tab for SheetTab {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Char('g') => self.scroll = 0,
            KeyCode::Char('r') => self.reload(),
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            MouseEventKind::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            _ => {}
        }
    }

    fn tick(&mut self) {
        if let Some(handle) = &self.load
            && let Some(result) = handle.poll()
        {
            self.load = None;
            match result {
                Ok(profile) => self.profile = profile,
                Err(e) => self.error = Some(e.to_string()),
            }
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        if let Some(error) = &self.error {
            crate::shared::draw_error(frame, area, "Character Sheet", error);
            return;
        }

        let sheet = Paragraph::new(self.sheet_lines())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .title(" Character Sheet ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(sheet, area);
    }

    fn status_hint(&self) -> &str {
        "j/k:scroll  r:reload  Tab:view  ?:help  q:quit"
    }
}
