//! TUI application state.

use super::components::CreatorView;

use crate::config::Config;
use crate::core::view::{CreatorEvent, DashboardEvent, GeneratorEvent};
use crate::core::{TestPayload, ViewController, ViewState};

/// Application state for the TUI.
pub struct App {
    /// View-state machine and the submitted test payload.
    pub controller: ViewController<TestPayload>,

    /// Creator form state, remounted on every entry to the creator.
    pub creator: CreatorView,

    /// Loaded configuration.
    pub config: Config,

    /// Set when the user asks to exit.
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    /// Create app state starting at the dashboard.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let creator = CreatorView::new(config.creator.new_form());
        Self {
            controller: ViewController::new(),
            creator,
            config,
            should_quit: false,
        }
    }

    /// Current view.
    #[must_use]
    pub const fn view_state(&self) -> ViewState {
        self.controller.state()
    }

    pub fn on_dashboard(&mut self, event: DashboardEvent) {
        let before = self.controller.state();
        self.controller.handle_dashboard(event);
        self.remount_creator_on_entry(before);
    }

    pub fn on_creator(&mut self, event: CreatorEvent<TestPayload>) {
        let before = self.controller.state();
        self.controller.handle_creator(event);
        self.remount_creator_on_entry(before);
    }

    pub fn on_generator(&mut self, event: GeneratorEvent) {
        let before = self.controller.state();
        self.controller.handle_generator(event);
        self.remount_creator_on_entry(before);
    }

    /// The creator never sees the controller's payload; it always opens on
    /// a fresh form seeded from config.
    fn remount_creator_on_entry(&mut self, before: ViewState) {
        if before != ViewState::Creator && self.controller.state() == ViewState::Creator {
            self.creator = CreatorView::new(self.config.creator.new_form());
        }
    }
}
