//! Status bar widget: one line with the current notice and service context.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::session::{Notice, NoticeKind};

/// Data passed to the status bar widget; decoupled from `Session`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Base URL of the prediction service.
    pub base_url: String,
    /// Number of location options loaded.
    pub location_count: usize,
    /// Whether a prediction request is in flight.
    pub pending: bool,
    /// Message for the user, if any.
    pub notice: Option<Notice>,
}

/// Renders a one-line status bar.
///
/// Display format:
/// - Pending:   `Requesting estimate…  http://127.0.0.1:5000 · 12 locations`
/// - Notice:    `Please fill all fields.  http://127.0.0.1:5000 · 12 locations`
/// - Otherwise: `http://127.0.0.1:5000 · 12 locations`
///
/// Error notices are red, info notices green, the service context dark gray.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();

    if ctx.pending {
        spans.push(Span::styled(
            "Requesting estimate…",
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw("  "));
    } else if let Some(notice) = &ctx.notice {
        let color = match notice.kind {
            NoticeKind::Error => Color::Red,
            NoticeKind::Info => Color::Green,
        };
        spans.push(Span::styled(
            notice.message.clone(),
            Style::default().fg(color),
        ));
        spans.push(Span::raw("  "));
    }

    spans.push(Span::styled(
        format!("{} · {} locations", ctx.base_url, ctx.location_count),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_status_bar(ctx: &StatusBarContext, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn ctx() -> StatusBarContext {
        StatusBarContext {
            base_url: "http://127.0.0.1:5000".to_string(),
            location_count: 12,
            pending: false,
            notice: None,
        }
    }

    #[test]
    fn renders_service_context() {
        let output = render_status_bar(&ctx(), 60);
        assert!(output.contains("http://127.0.0.1:5000"), "{output}");
        assert!(output.contains("12 locations"), "{output}");
    }

    #[test]
    fn renders_notice_first() {
        let ctx = StatusBarContext {
            notice: Some(Notice::error("Please fill all fields.")),
            ..ctx()
        };
        let output = render_status_bar(&ctx, 80);
        assert!(output.starts_with("Please fill all fields."), "{output}");
        assert!(output.contains("12 locations"), "{output}");
    }

    #[test]
    fn pending_replaces_notice() {
        let ctx = StatusBarContext {
            pending: true,
            notice: Some(Notice::error("Please fill all fields.")),
            ..ctx()
        };
        let output = render_status_bar(&ctx, 80);
        assert!(output.contains("Requesting estimate"), "{output}");
        assert!(!output.contains("Please fill"), "{output}");
    }

    #[test]
    fn renders_default_without_panic() {
        let output = render_status_bar(&StatusBarContext::default(), 40);
        assert!(output.contains("0 locations"), "{output}");
    }
}
