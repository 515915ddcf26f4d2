use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use crate::api::EstimatorApi;
use crate::model::field_errors;
use crate::session::{PredictError, Session};

use super::action::Action;
use super::error::AppError;
use super::screens::{EstimateState, HelpState, draw_estimate, draw_help};
use super::widgets::{StatusBarContext, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Property form and prediction results.
    Estimate,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
pub struct App<A> {
    screen: Screen,
    session: Session<A>,
    estimate: EstimateState,
    help: HelpState,
    pending: bool,
    should_quit: bool,
}

impl<A: EstimatorApi> App<A> {
    /// Creates a new `App` on the [`Screen::Estimate`] screen.
    pub fn new(session: Session<A>) -> Self {
        Self {
            screen: Screen::Estimate,
            session,
            estimate: EstimateState::new(),
            help: HelpState::new(),
            pending: false,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    ///
    /// While a prediction is awaited no further events are read, so only
    /// one request is ever in flight.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub async fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut events = EventStream::new();
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            let Some(event) = events.next().await else {
                break;
            };
            if let Event::Key(key) = event? {
                let action = self.dispatch_key(key);
                if action == Action::Predict {
                    self.pending = true;
                    terminal.draw(|frame| self.draw(frame))?;
                }
                self.apply(action).await;
            }
        }
        Ok(())
    }

    /// Handles a key event: dispatches it to the active screen and applies
    /// the resulting action.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        let action = self.dispatch_key(key);
        self.apply(action).await;
    }

    fn dispatch_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }
        match self.screen {
            Screen::Estimate => {
                self.estimate
                    .handle_key(key, self.session.form(), self.session.locations())
            }
            Screen::Help => self.help.handle_key(key),
        }
    }

    async fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(Screen::Help) => {
                self.help.reset();
                self.screen = Screen::Help;
            }
            Action::Navigate(screen) => self.screen = screen,
            Action::SetField(field, value) => self.session.set_field(field, value),
            Action::Predict => {
                self.estimate.clear_errors();
                let outcome = self.session.predict().await.map(drop);
                self.pending = false;
                if let Err(PredictError::Validation(_)) = outcome {
                    self.estimate.mark_errors(&field_errors(self.session.form()));
                }
            }
            Action::Reset => {
                self.session.reset();
                self.estimate.reset();
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Renders the title, the active screen and the status bar.
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [title_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let title = Paragraph::new(Line::from(Span::styled(
            " House Price Predictor ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        match self.screen {
            Screen::Estimate => draw_estimate(&self.estimate, &self.session, frame, body_area),
            Screen::Help => draw_help(&self.help, frame, body_area),
        }

        draw_status_bar(&self.status_context(), frame, status_area);
    }

    fn status_context(&self) -> StatusBarContext {
        StatusBarContext {
            base_url: self.session.api().base_url().to_string(),
            location_count: self.session.locations().len(),
            pending: self.pending,
            notice: self.session.notice().cloned(),
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns a reference to the [`Session`].
    pub fn session(&self) -> &Session<A> {
        &self.session
    }
}
