//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::TuiApp;
use crate::tabs::{self, TabId};

/// Poll interval; also how often in-flight loads are checked for results.
const TICK: Duration = Duration::from_millis(100);

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop. Polls with a timeout so background fetches are
/// delivered even when no input arrives.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(TICK).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            handle_event(app, event);
        }
        app.tick();
    }
}

/// Handle a crossterm event.
fn handle_event(app: &mut TuiApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => {}
    }
}

/// Handle keyboard input.
fn handle_key(app: &mut TuiApp, key: crossterm::event::KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = !app.show_help;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.switch_tab(app.active_tab.prev());
            } else {
                app.switch_tab(app.active_tab.next());
            }
            return;
        }
        KeyCode::BackTab => {
            app.switch_tab(app.active_tab.prev());
            return;
        }
        _ => {}
    }

    // Number keys 1-3 switch tabs
    if let KeyCode::Char(c) = key.code
        && let Some(idx) = c.to_digit(10)
        && (1..=TabId::ALL.len() as u32).contains(&idx)
    {
        app.switch_tab(TabId::ALL[idx as usize - 1]);
        return;
    }

    // Forward to active tab
    if app.active_tab_mut().handle_key(key) {
        app.should_quit = true;
    }
}

/// Handle mouse events.
fn handle_mouse(app: &mut TuiApp, mouse: crossterm::event::MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // Check if the click is on the tab bar (row 0)
            if mouse.row == 0
                && let Some(tab) = tab_bar_hit_test(mouse.column)
            {
                app.switch_tab(tab);
                return;
            }
            app.active_tab_mut().handle_mouse(mouse);
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            app.active_tab_mut().handle_mouse(mouse);
        }
        _ => {}
    }
}

/// Hit-test the tab bar for mouse clicks. Widths come from the same
/// labels `draw_tab_bar` renders, so the regions cannot drift.
fn tab_bar_hit_test(col: u16) -> Option<TabId> {
    let divider_len = 3u16; // " | "

    let mut x = 0u16;
    for (i, title) in tabs::TAB_TITLES.iter().enumerate() {
        let end_x = x + title.len() as u16;
        if col >= x && col < end_x {
            return Some(TabId::ALL[i]);
        }
        x = end_x;
        if i < tabs::TAB_TITLES.len() - 1 {
            x += divider_len;
        }
    }

    None
}

/// Main draw function.
fn draw(frame: &mut Frame, app: &mut TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    // Tab bar
    tabs::draw_tab_bar(frame, app.active_tab, chunks[0]);

    // Active tab content
    app.active_tab_ref().draw(frame, chunks[1]);

    // Status bar
    let hint = app.active_tab_ref().status_hint();
    let status = Paragraph::new(hint).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    // Help popup overlay
    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // "[1]Dashboard | [2]Timeline | [3]Sheet"
    //  0..12          15..26         29..37
    #[test]
    fn tab_bar_hit_regions_cover_every_label_character() {
        assert_eq!(tab_bar_hit_test(0), Some(TabId::Dashboard));
        assert_eq!(tab_bar_hit_test(11), Some(TabId::Dashboard));
        assert_eq!(tab_bar_hit_test(15), Some(TabId::Timeline));
        assert_eq!(tab_bar_hit_test(25), Some(TabId::Timeline));
        assert_eq!(tab_bar_hit_test(29), Some(TabId::Sheet));
        assert_eq!(tab_bar_hit_test(36), Some(TabId::Sheet));
    }

    #[test]
    fn dividers_and_trailing_space_hit_nothing() {
        assert_eq!(tab_bar_hit_test(12), None);
        assert_eq!(tab_bar_hit_test(14), None);
        assert_eq!(tab_bar_hit_test(27), None);
        assert_eq!(tab_bar_hit_test(37), None);
        assert_eq!(tab_bar_hit_test(200), None);
    }
}
