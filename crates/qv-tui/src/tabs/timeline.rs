//! Achievement timeline tab: the chronological feed, oldest first.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use qv_client::{ApiClient, FetchHandle, fetch};
use qv_core::{Achievement, Feed, FeedItem, Visual};

use super::{Tab, token_color};

/// Timeline tab state.
pub struct TimelineTab {
    client: ApiClient,
    achievements: Option<Vec<Achievement>>,
    /// Probe results per image URL, gathered during the load.
    images: HashMap<String, bool>,
    error: Option<String>,
    load: Option<FetchHandle<(Vec<Achievement>, HashMap<String, bool>)>>,
    cursor: usize,
}

impl TimelineTab {
    /// Create the tab and start the initial load.
    pub fn new(client: ApiClient) -> Self {
        let mut tab = Self {
            client,
            achievements: None,
            images: HashMap::new(),
            error: None,
            load: None,
            cursor: 0,
        };
        tab.reload();
        tab
    }

    /// Kick off a fresh load, replacing (and thereby cancelling) any
    /// in-flight one. Image probes run in the same job, checking the
    /// cancel token between requests.
    fn reload(&mut self) {
        let client = self.client.clone();
        self.error = None;
        self.load = Some(fetch(move |token| {
            let achievements = client.achievements()?;
            let mut images = HashMap::new();
            for url in achievements.iter().filter_map(|a| a.image_url.as_deref()) {
                if token.is_cancelled() {
                    break;
                }
                images.insert(url.to_string(), client.probe_image(url));
            }
            Ok((achievements, images))
        }));
    }

    fn entry_count(&self) -> usize {
        self.achievements.as_deref().map_or(0, <[_]>::len)
    }
}

impl Tab for TimelineTab {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.cursor + 1 < self.entry_count() {
                    self.cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Char('g') => self.cursor = 0,
            KeyCode::Char('G') => {
                let count = self.entry_count();
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
                if self.cursor + 1 < self.entry_count() {
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
                Ok((achievements, images)) => {
                    self.achievements = Some(achievements);
                    self.images = images;
                }
                Err(e) => self.error = Some(e.to_string()),
            }
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        if let Some(error) = &self.error {
            crate::shared::draw_error(frame, area, "Timeline", error);
            return;
        }
        let Some(achievements) = &self.achievements else {
            crate::shared::draw_loading(frame, area, "Timeline");
            return;
        };

        let feed = Feed::from_achievements(achievements);

        if feed.is_empty() {
            let msg = Paragraph::new("  No history recorded yet.")
                .style(Style::default().fg(Color::DarkGray).italic())
                .block(
                    Block::default()
                        .title(" Timeline ")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                );
            frame.render_widget(msg, area);
            return;
        }

        let items: Vec<ListItem> = feed
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let mut lines = vec![heading_line(item)];

                let visual = item.visual(|url| self.images.get(url).copied().unwrap_or(false));
                let visual_span = match visual {
                    Visual::Image(url) => {
                        Span::styled(format!("🖼  {url}"), Style::default().fg(Color::DarkGray))
                    }
                    Visual::Icon(theme) => Span::styled(
                        format!("{}  {}", theme.icon, item.achievement.context),
                        Style::default().fg(token_color(theme.color)),
                    ),
                };
                lines.push(Line::from(vec![Span::raw("  "), visual_span]));

                if feed.has_connector(index) {
                    lines.push(Line::from(Span::styled(
                        "\u{2502}",
                        Style::default().fg(Color::DarkGray),
                    )));
                }

                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!(" Timeline ({} achievements, oldest first) ", feed.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));

        let mut state = ListState::default();
        state.select(Some(self.cursor.min(feed.len() - 1)));

        frame.render_stateful_widget(list, area, &mut state);
    }

    fn status_hint(&self) -> &str {
        "j/k:navigate  r:reload  Tab:view  ?:help  q:quit"
    }
}

/// The entry's heading: node glyph, title, short id, timestamp. The id is
/// the handle into `qv achievement show <id>`.
fn heading_line<'a>(item: &FeedItem<'a>) -> Line<'a> {
    let theme = item.theme();
    let node = if item.quest_completion {
        Span::styled("\u{25c6}", Style::default().fg(Color::Yellow).bold())
    } else {
        Span::styled("\u{25cf}", Style::default().fg(token_color(theme.color)))
    };

    Line::from(vec![
        node,
        Span::raw(" "),
        Span::styled(item.achievement.title.as_str(), Style::default().bold()),
        Span::styled(
            format!("  {}", item.achievement.id),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(
                "  {}",
                item.achievement.date_completed.format("%Y-%m-%d %H:%M")
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use qv_core::AchievementId;
    use uuid::Uuid;

    fn achievement() -> Achievement {
        Achievement {
            id: AchievementId(Uuid::from_u128(0xdead_beef_0000_4000_8000_0000_0000_0001)),
            title: "Slay Dragon".to_string(),
            context: "It was big".to_string(),
            ai_description: None,
            ai_reward: None,
            image_url: None,
            date_completed: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            dimension: None,
            quest_id: None,
            is_hidden: false,
        }
    }

    #[test]
    fn heading_carries_the_short_id_and_title() {
        let records = vec![achievement()];
        let feed = Feed::from_achievements(&records);
        let line = heading_line(&feed.items()[0]);

        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("deadbeef"));
        assert!(text.contains("Slay Dragon"));
    }
}
