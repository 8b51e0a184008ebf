//! View-state machine for switching between the dashboard, creator and
//! generator screens.
//!
//! ```text
//!              CreateTest                CreateMockTest(p)
//!  Dashboard ─────────────▶ Creator ─────────────────────▶ Generator
//!      ▲                     │  ▲                              │
//!      └─────────────────────┘  └──────────────────────────────┘
//!        BackToDashboard              BackToCreator
//!        (payload cleared)            (payload kept)
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

/// Which screen is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Landing screen.
    #[default]
    Dashboard,
    /// Test-creation form.
    Creator,
    /// Test-generation screen showing the submitted configuration.
    Generator,
}

impl ViewState {
    /// All states, in navigation order.
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::Creator, Self::Generator];

    /// Stable lowercase tag.
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Creator => "creator",
            Self::Generator => "generator",
        }
    }

    /// Parse a tag, falling back to the dashboard for anything unrecognized.
    #[must_use]
    pub fn from_tag_lossy(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|e: ParseError| {
            tracing::warn!(error = %e, "falling back to dashboard");
            Self::Dashboard
        })
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for ViewState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownView(s.to_string()))
    }
}

/// Intents the dashboard can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Start building a new test.
    CreateTest,
    /// Open the reviews listing (not implemented).
    ViewReviews,
}

/// Intents the creator form can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatorEvent<P> {
    /// Abandon the form.
    BackToDashboard,
    /// Submit a completed form.
    CreateMockTest(P),
}

/// Intents the generator screen can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorEvent {
    /// Return to the creator form.
    BackToCreator,
}

/// The screen to mount, with the props it receives.
#[derive(Debug, PartialEq, Eq)]
pub enum Screen<'a, P> {
    Dashboard,
    Creator,
    Generator {
        /// Most recently submitted form, if any.
        test_data: Option<&'a P>,
    },
}

/// Owns the current view and the in-flight test payload.
///
/// Screens never mutate this directly; they hand events to the
/// `handle_*` methods, which map onto the transitions below.
#[derive(Debug, Clone)]
pub struct ViewController<P> {
    state: ViewState,
    payload: Option<P>,
}

impl<P> Default for ViewController<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ViewController<P> {
    /// Start at the dashboard with no payload.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ViewState::Dashboard,
            payload: None,
        }
    }

    /// Current view.
    #[must_use]
    pub const fn state(&self) -> ViewState {
        self.state
    }

    /// Current payload, if one has been submitted and not cleared.
    #[must_use]
    pub const fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Current `(state, payload)` pair.
    #[must_use]
    pub const fn current(&self) -> (ViewState, Option<&P>) {
        (self.state, self.payload.as_ref())
    }

    /// Dashboard → Creator. Payload untouched.
    pub fn go_to_creator(&mut self) {
        self.transition(ViewState::Creator);
    }

    /// Creator → Dashboard. Clears the payload.
    pub fn go_to_dashboard(&mut self) {
        self.payload = None;
        self.transition(ViewState::Dashboard);
    }

    /// Creator → Generator, taking ownership of the submitted form.
    ///
    /// The form is not inspected here; the creator screen validates it.
    pub fn submit_creator_form(&mut self, form: P) {
        self.payload = Some(form);
        tracing::info!("test form submitted");
        self.transition(ViewState::Generator);
    }

    /// Generator → Creator.
    ///
    /// Unlike [`Self::go_to_dashboard`] this keeps the payload, so the last
    /// submitted form survives a round trip through the creator.
    pub fn go_to_creator_from_generator(&mut self) {
        self.transition(ViewState::Creator);
    }

    /// Reviews are not implemented; this only records the request.
    pub fn view_reviews(&self) {
        tracing::info!(view = %self.state, "view reviews requested");
    }

    /// Apply an event raised by the dashboard.
    pub fn handle_dashboard(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::CreateTest => self.go_to_creator(),
            DashboardEvent::ViewReviews => self.view_reviews(),
        }
    }

    /// Apply an event raised by the creator form.
    pub fn handle_creator(&mut self, event: CreatorEvent<P>) {
        match event {
            CreatorEvent::BackToDashboard => self.go_to_dashboard(),
            CreatorEvent::CreateMockTest(form) => self.submit_creator_form(form),
        }
    }

    /// Apply an event raised by the generator screen.
    pub fn handle_generator(&mut self, event: GeneratorEvent) {
        match event {
            GeneratorEvent::BackToCreator => self.go_to_creator_from_generator(),
        }
    }

    /// Screen for the current state.
    #[must_use]
    pub const fn screen(&self) -> Screen<'_, P> {
        Self::screen_with(self.state, self.payload.as_ref())
    }

    /// Screen for an arbitrary view tag. Unknown tags render the dashboard.
    #[must_use]
    pub fn screen_for_tag(&self, tag: &str) -> Screen<'_, P> {
        Self::screen_with(ViewState::from_tag_lossy(tag), self.payload.as_ref())
    }

    const fn screen_with(state: ViewState, payload: Option<&P>) -> Screen<'_, P> {
        match state {
            ViewState::Dashboard => Screen::Dashboard,
            ViewState::Creator => Screen::Creator,
            ViewState::Generator => Screen::Generator { test_data: payload },
        }
    }

    fn transition(&mut self, to: ViewState) {
        tracing::debug!(from = %self.state, %to, has_payload = self.payload.is_some(), "view transition");
        self.state = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Form {
        difficulty: &'static str,
    }

    fn hard() -> Form {
        Form { difficulty: "hard" }
    }

    #[test]
    fn starts_at_dashboard_without_payload() {
        let controller = ViewController::<Form>::new();
        assert_eq!(controller.current(), (ViewState::Dashboard, None));
        assert_eq!(controller.screen(), Screen::Dashboard);
    }

    #[test]
    fn go_to_creator_keeps_payload() {
        let mut controller = ViewController::new();
        controller.go_to_creator();
        assert_eq!(controller.current(), (ViewState::Creator, None::<&Form>));

        controller.submit_creator_form(hard());
        controller.go_to_creator_from_generator();
        controller.go_to_creator();
        assert_eq!(controller.payload(), Some(&hard()));
    }

    #[test]
    fn submit_sets_payload_and_shows_generator() {
        let mut controller = ViewController::new();
        controller.go_to_creator();
        controller.submit_creator_form(hard());

        assert_eq!(controller.state(), ViewState::Generator);
        assert_eq!(
            controller.screen(),
            Screen::Generator {
                test_data: Some(&hard())
            }
        );
    }

    #[test]
    fn go_to_dashboard_clears_payload() {
        let mut controller = ViewController::new();
        controller.go_to_creator();
        controller.go_to_dashboard();
        assert_eq!(controller.current(), (ViewState::Dashboard, None::<&Form>));

        controller.go_to_creator();
        controller.submit_creator_form(hard());
        controller.go_to_creator_from_generator();
        controller.go_to_dashboard();
        assert_eq!(controller.current(), (ViewState::Dashboard, None));
    }

    #[test]
    fn back_to_creator_retains_submitted_payload() {
        let mut controller = ViewController::new();
        controller.go_to_creator();
        controller.submit_creator_form(hard());
        controller.go_to_creator_from_generator();

        // Asymmetric with go_to_dashboard: the payload is still held.
        assert_eq!(controller.current(), (ViewState::Creator, Some(&hard())));
    }

    #[test]
    fn resubmitting_replaces_payload() {
        let mut controller = ViewController::new();
        controller.go_to_creator();
        controller.submit_creator_form(hard());
        controller.go_to_creator_from_generator();
        controller.submit_creator_form(Form { difficulty: "easy" });
        assert_eq!(controller.payload(), Some(&Form { difficulty: "easy" }));
    }

    #[test]
    fn view_reviews_changes_nothing() {
        let mut controller = ViewController::<Form>::new();
        controller.handle_dashboard(DashboardEvent::ViewReviews);
        assert_eq!(controller.current(), (ViewState::Dashboard, None));
    }

    #[test]
    fn events_map_to_transitions() {
        let mut controller = ViewController::new();
        controller.handle_dashboard(DashboardEvent::CreateTest);
        assert_eq!(controller.state(), ViewState::Creator);

        controller.handle_creator(CreatorEvent::CreateMockTest(hard()));
        assert_eq!(controller.state(), ViewState::Generator);

        controller.handle_generator(GeneratorEvent::BackToCreator);
        assert_eq!(controller.current(), (ViewState::Creator, Some(&hard())));

        controller.handle_creator(CreatorEvent::BackToDashboard);
        assert_eq!(controller.current(), (ViewState::Dashboard, None));
    }

    #[test]
    fn state_stays_in_enumeration_for_any_sequence() {
        let mut controller = ViewController::new();
        for step in 0..64_u32 {
            match step % 5 {
                0 => controller.go_to_creator(),
                1 => controller.submit_creator_form(step),
                2 => controller.go_to_creator_from_generator(),
                3 => controller.go_to_dashboard(),
                _ => controller.view_reviews(),
            }
            assert!(ViewState::ALL.contains(&controller.state()));
        }
    }

    #[test]
    fn unknown_tag_renders_dashboard() {
        let mut controller = ViewController::new();
        controller.go_to_creator();
        controller.submit_creator_form(hard());

        assert_eq!(controller.screen_for_tag("reviews"), Screen::Dashboard);
        assert_eq!(controller.screen_for_tag(""), Screen::Dashboard);
        assert_eq!(
            controller.screen_for_tag("Generator"),
            Screen::Generator {
                test_data: Some(&hard())
            }
        );
    }

    #[test]
    fn strict_parse_rejects_unknown_tag() {
        assert_eq!("creator".parse::<ViewState>(), Ok(ViewState::Creator));
        assert_eq!(
            "settings".parse::<ViewState>(),
            Err(ParseError::UnknownView("settings".to_string()))
        );
        assert_eq!(ViewState::from_tag_lossy("settings"), ViewState::Dashboard);
    }
}
