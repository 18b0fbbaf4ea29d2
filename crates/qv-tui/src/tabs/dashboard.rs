//! Dashboard tab: active quests beside the most recent achievements.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use qv_client::{ApiClient, FetchHandle, fetch};
use qv_core::{Achievement, Quest, QuestStatus, resolve_theme};

use super::{Tab, token_color};

/// Dashboard tab state.
pub struct DashboardTab {
    client: ApiClient,
    quests: Option<Vec<Quest>>,
    achievements: Option<Vec<Achievement>>,
    error: Option<String>,
    load: Option<FetchHandle<(Vec<Quest>, Vec<Achievement>)>>,
    cursor: usize,
}

impl DashboardTab {
    /// Create the tab and start the initial load.
    pub fn new(client: ApiClient) -> Self {
        let mut tab = Self {
            client,
            quests: None,
            achievements: None,
            error: None,
            load: None,
            cursor: 0,
        };
        tab.reload();
        tab
    }

    /// Kick off a fresh load, replacing (and thereby cancelling) any
    /// in-flight one.
    fn reload(&mut self) {
        let client = self.client.clone();
        self.error = None;
        self.load = Some(fetch(move |token| {
            let quests = client.quests()?;
            if token.is_cancelled() {
                return Ok((quests, Vec::new()));
            }
            let achievements = client.achievements()?;
            Ok((quests, achievements))
        }));
    }

    fn active_quests(&self) -> Vec<&Quest> {
        self.quests
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|q| q.status == QuestStatus::Active)
            .collect()
    }

    fn draw_quests(&self, frame: &mut Frame, area: Rect) {
        let active = self.active_quests();
        let items: Vec<ListItem> = active
            .iter()
            .map(|quest| {
                let theme = resolve_theme(quest.dimension.as_deref());
                let line = Line::from(vec![
                    Span::styled(
                        format!("{} ", theme.icon),
                        Style::default().fg(token_color(theme.color)),
                    ),
                    Span::styled(&quest.title, Style::default().fg(Color::White)),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" Active Quests ({}) ", active.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White).bold())
            .highlight_symbol("\u{25b6} ");

        let mut state = ListState::default();
        if !active.is_empty() {
            state.select(Some(self.cursor.min(active.len() - 1)));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_recent(&self, frame: &mut Frame, area: Rect) {
        let achievements = self.achievements.as_deref().unwrap_or_default();
        // Newest first, capped to what fits comfortably.
        let items: Vec<ListItem> = achievements
            .iter()
            .rev()
            .take(20)
            .map(|a| {
                let theme = resolve_theme(a.dimension.as_deref());
                let line = Line::from(vec![
                    Span::styled(
                        format!("{} ", theme.icon),
                        Style::default().fg(token_color(theme.color)),
                    ),
                    Span::raw(&a.title),
                    Span::styled(
                        format!("  {}", a.date_completed.format("%Y-%m-%d")),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(format!(" Recent Achievements ({}) ", achievements.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(list, area);
    }

    fn draw_welcome(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from("  Welcome, adventurer.").style(Style::default().bold()),
            Line::from(""),
            Line::from("  Your chronicle is empty. Start your first quest with"),
            Line::from(""),
            Line::from(Span::styled(
                "      qv quest new \"...\" --dimension physical",
                Style::default().fg(Color::Cyan),
            )),
            Line::from(""),
            Line::from("  or log something you already did:"),
            Line::from(""),
            Line::from(Span::styled(
                "      qv achievement log \"...\" --context \"...\"",
                Style::default().fg(Color::Cyan),
            )),
        ];

        let welcome = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" Dashboard ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(welcome, area);
    }
}

impl Tab for DashboardTab {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let count = self.active_quests().len();
                if self.cursor + 1 < count {
                    self.cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Char('g') => self.cursor = 0,
            KeyCode::Char('G') => {
                let count = self.active_quests().len();
                if count > 0 {
                    self.cursor = count - 1;
                }
            }
            KeyCode::Char('r') => self.reload(),
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.cursor = self.cursor.saturating_sub(1),
            MouseEventKind::ScrollDown => {
                let count = self.active_quests().len();
                if self.cursor + 1 < count {
                    self.cursor += 1;
                }
            }
            _ => {}
        }
    }

    fn tick(&mut self) {
        if let Some(handle) = &self.load
            && let Some(result) = handle.poll()
        {
            self.load = None;
            match result {
                Ok((quests, achievements)) => {
                    self.quests = Some(quests);
                    self.achievements = Some(achievements);
                }
                Err(e) => self.error = Some(e.to_string()),
            }
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        if let Some(error) = &self.error {
            crate::shared::draw_error(frame, area, "Dashboard", error);
            return;
        }
        let (Some(quests), Some(achievements)) = (&self.quests, &self.achievements) else {
            crate::shared::draw_loading(frame, area, "Dashboard");
            return;
        };

        if quests.is_empty() && achievements.is_empty() {
            self.draw_welcome(frame, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.draw_quests(frame, chunks[0]);
        self.draw_recent(frame, chunks[1]);
    }

    fn status_hint(&self) -> &str {
        "j/k:navigate  r:reload  Tab:view  ?:help  q:quit"
    }
}
