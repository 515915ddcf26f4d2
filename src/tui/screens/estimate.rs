//! Estimate screen: property form on the left, results on the right.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Field, FormInput, ValidationError};
use crate::session::{LocationSet, Session};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::form::{Form, FormField, draw_form};
use crate::tui::widgets::results::draw_results;

/// Returns the form row index of `field`.
fn index_of(field: Field) -> usize {
    Field::all()
        .iter()
        .position(|&f| f == field)
        .unwrap_or_default()
}

/// State for the estimate screen: focus and field errors.
#[derive(Debug, Clone)]
pub struct EstimateState {
    form: Form,
}

impl Default for EstimateState {
    fn default() -> Self {
        Self::new()
    }
}

impl EstimateState {
    /// Creates the form with focus on the first field.
    pub fn new() -> Self {
        let fields = Field::all()
            .iter()
            .map(|&field| match field {
                Field::Location => FormField::selector(field.label(), true),
                _ => FormField::new(field.label(), true),
            })
            .collect();
        Self {
            form: Form::new(fields),
        }
    }

    /// Returns the field that currently has focus.
    pub fn focused_field(&self) -> Field {
        Field::all()
            .get(self.form.focus())
            .copied()
            .unwrap_or(Field::Sqft)
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    ///
    /// Edits are returned as [`Action::SetField`] carrying the new value;
    /// this state never holds field values itself.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        input: &FormInput,
        locations: &LocationSet,
    ) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('r') => Action::Reset,
                _ => Action::None,
            };
        }

        let field = self.focused_field();
        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Enter => Action::Predict,
            KeyCode::Esc => Action::Quit,
            KeyCode::F(1) => Action::Navigate(Screen::Help),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down
                if field == Field::Location =>
            {
                let forward = matches!(key.code, KeyCode::Right | KeyCode::Down);
                match locations.neighbour(&input.location, forward) {
                    Some(next) => Action::SetField(Field::Location, next.to_string()),
                    None => Action::None,
                }
            }
            KeyCode::Up => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Down => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::Char(ch) if field != Field::Location => {
                let mut value = input.get(field).to_string();
                value.push(ch);
                Action::SetField(field, value)
            }
            KeyCode::Backspace if field != Field::Location => {
                let mut value = input.get(field).to_string();
                match value.pop() {
                    Some(_) => Action::SetField(field, value),
                    None => Action::None,
                }
            }
            _ => Action::None,
        }
    }

    /// Marks each offending field with a short message.
    pub fn mark_errors(&mut self, errors: &[(Field, ValidationError)]) {
        for (field, err) in errors {
            let message = match err {
                ValidationError::Incomplete { .. } => "required".to_string(),
                other => other.to_string(),
            };
            self.form.set_error(index_of(*field), message);
        }
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        self.form.clear_errors();
    }

    /// Clears errors and returns focus to the first field.
    pub fn reset(&mut self) {
        self.form.reset();
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }
}

/// Text shown in each form row, in [`Field::all`] order.
fn display_values(input: &FormInput, locations: &LocationSet) -> Vec<String> {
    Field::all()
        .iter()
        .map(|&field| match field {
            Field::Location if locations.is_empty() => "(no locations available)".to_string(),
            Field::Location => format!("◀ {} ▶", input.location),
            _ => input.get(field).to_string(),
        })
        .collect()
}

/// Renders the estimate screen.
#[mutants::skip]
pub fn draw_estimate<A>(state: &EstimateState, session: &Session<A>, frame: &mut Frame, area: Rect) {
    let [form_pane, results_pane] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let block = Block::default()
        .title(" Enter Property Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(form_pane);
    frame.render_widget(block, form_pane);

    let [form_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(12),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let values = display_values(session.form(), session.locations());
    draw_form(state.form(), &values, frame, form_area);

    let footer = Paragraph::new(Line::from(
        "Enter: predict  Ctrl+R: reset  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    draw_results(session.result(), frame, results_pane);
}
