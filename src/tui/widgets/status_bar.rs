//! Status bar widget: recipient and submission phase on one line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Phase;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Address the enquiry will be composed for.
    pub recipient: String,
    /// Current submission phase.
    pub phase: Phase,
}

/// Text and color for a phase.
pub fn phase_label(phase: Phase) -> (&'static str, Color) {
    match phase {
        Phase::Idle => ("Ready", Color::DarkGray),
        Phase::Submitting => ("Opening email client...", Color::Yellow),
        Phase::Submitted => ("Handed to email client", Color::Green),
    }
}

/// Renders `To: <recipient>  <phase>`.
///
/// Renders nothing if `ctx.recipient` is empty.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    if ctx.recipient.is_empty() {
        return;
    }

    let cyan = Style::default().fg(Color::Cyan);
    let (label, color) = phase_label(ctx.phase);
    let spans = vec![
        Span::styled(format!("To: {}", ctx.recipient), cyan),
        Span::styled("  ", cyan),
        Span::styled(label, Style::default().fg(color)),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
