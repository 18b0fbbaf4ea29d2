//! Top-level application state managing tabs and the shared API client.

use qv_client::ApiClient;
use qv_core::Profile;

use crate::tabs::dashboard::DashboardTab;
use crate::tabs::sheet::SheetTab;
use crate::tabs::timeline::TimelineTab;
use crate::tabs::{Tab, TabId};

/// Main application state for the unified TUI.
pub struct TuiApp {
    /// Currently active tab.
    pub active_tab: TabId,
    /// Whether to show the global help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Dashboard tab (always initialized, starts loading on creation).
    pub dashboard: DashboardTab,
    /// Timeline tab (always initialized, starts loading on creation).
    pub timeline: TimelineTab,
    /// Sheet tab (seeded with the startup profile).
    pub sheet: SheetTab,
}

impl TuiApp {
    /// Create a new app for an authenticated session.
    pub fn new(client: ApiClient, profile: Profile, start_tab: TabId) -> Self {
        let dashboard = DashboardTab::new(client.clone());
        let timeline = TimelineTab::new(client.clone());
        let sheet = SheetTab::new(client, profile);

        Self {
            active_tab: start_tab,
            show_help: false,
            should_quit: false,
            dashboard,
            timeline,
            sheet,
        }
    }

    /// Get a reference to the active tab.
    pub fn active_tab_ref(&self) -> &dyn Tab {
        match self.active_tab {
            TabId::Dashboard => &self.dashboard,
            TabId::Timeline => &self.timeline,
            TabId::Sheet => &self.sheet,
        }
    }

    /// Get a mutable reference to the active tab.
    pub fn active_tab_mut(&mut self) -> &mut dyn Tab {
        match self.active_tab {
            TabId::Dashboard => &mut self.dashboard,
            TabId::Timeline => &mut self.timeline,
            TabId::Sheet => &mut self.sheet,
        }
    }

    /// Switch to a tab by ID.
    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    /// Poll background loads on every tab, not just the visible one, so
    /// results land no matter where the user is looking.
    pub fn tick(&mut self) {
        self.dashboard.tick();
        self.timeline.tick();
        self.sheet.tick();
    }
}
