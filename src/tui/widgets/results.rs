//! Results pane: the prompt while awaiting input, the estimate afterwards.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::PredictionResult;

fn metric<'a>(label: &'a str, value: String, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<14}"), Style::default().fg(Color::Gray)),
        Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Renders the results pane for the given prediction, if any.
#[mutants::skip]
pub fn draw_results(result: Option<&PredictionResult>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Prediction Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(result) = result else {
        let prompt = Paragraph::new(Line::from(Span::styled(
            "Enter values to predict the house price",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        let [centered] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        frame.render_widget(prompt, centered);
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            "Estimated Price",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            result.price_display(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        metric("Confidence:", result.confidence_display(), Color::Blue),
        metric("R² Score:", result.r2_score.clone(), Color::Green),
        metric("MSE:", result.mse.clone(), Color::Yellow),
        metric("Price Range:", result.range_display(), Color::Cyan),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
