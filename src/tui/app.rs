use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};

use crate::config::Config;
use crate::model::Phase;
use crate::opener::ExternalOpener;
use crate::workflow::ContactForm;

use super::action::Action;
use super::error::AppError;
use super::screens::{ContactState, HelpState, draw_contact, draw_help};
use super::widgets::{StatusBarContext, draw_status_bar};

/// Upper bound on how long the event loop blocks waiting for input.
const MAX_POLL: Duration = Duration::from_millis(250);

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The contact form.
    Contact,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    contact: ContactForm,
    contact_state: ContactState,
    help_state: HelpState,
    location: String,
    should_quit: bool,
}

impl App {
    /// Mounts the contact form described by `config`, starting on [`Screen::Contact`].
    pub fn new(config: &Config, opener: Box<dyn ExternalOpener>) -> Self {
        Self {
            screen: Screen::Contact,
            contact: ContactForm::new(config.recipient.clone(), config.timings(), opener),
            contact_state: ContactState::new(),
            help_state: HelpState::new(),
            location: config.location.clone(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → wait for input or the next deadline → dispatch → tick.
    ///
    /// The form is torn down before returning, whether or not the loop failed.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let result = self.event_loop(terminal);
        self.contact.teardown();
        result
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(self.poll_timeout(Instant::now()))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key, Instant::now());
            }
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Renders the current screen with the status bar underneath.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::Contact => draw_contact(
                &self.contact_state,
                &self.contact,
                &self.location,
                frame,
                main_area,
            ),
            Screen::Help => draw_help(&self.help_state, frame, main_area),
        }

        let ctx = StatusBarContext {
            recipient: self.contact.recipient().to_string(),
            phase: self.contact.phase(),
        };
        draw_status_bar(&ctx, frame, status_area);
    }

    /// Handles a key event: global keys first, then the current screen.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help_state.set_origin(self.screen);
                self.help_state.reset();
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::Contact => self.contact_state.handle_key(
                key,
                self.contact.fields(),
                self.contact.phase(),
            ),
            Screen::Help => self.help_state.handle_key(key),
        };
        self.apply(action, now);
    }

    /// Applies an [`Action`] returned by a screen.
    fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::EditField(field, value) => {
                self.contact.set_field(field, value);
                self.contact_state.sync(self.contact.fields());
            }
            Action::Submit => self.contact.on_submit_intent(now),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Fires due deadlines and refreshes the screen state if anything changed.
    pub fn tick(&mut self, now: Instant) {
        if self.contact.tick(now) {
            self.contact_state.sync(self.contact.fields());
        }
    }

    /// How long to wait for input before the next deadline needs a tick.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.contact
            .next_deadline()
            .map_or(MAX_POLL, |due| due.saturating_duration_since(now).min(MAX_POLL))
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the mounted [`ContactForm`].
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// Current submission phase.
    pub fn phase(&self) -> Phase {
        self.contact.phase()
    }
}
