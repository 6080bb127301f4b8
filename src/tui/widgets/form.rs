//! Form widget: labels, focus, and per-field errors for controlled inputs.
//!
//! Values are not stored here. The caller owns them and passes them in when
//! drawing, so the widget always shows what the state holder has.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Height of one single-line input including its border.
pub const ROW_HEIGHT: u16 = 3;

/// A single input within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Label shown in the input's border.
    pub label: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the host must see a value before submitting.
    pub required: bool,
    /// Multi-line inputs are drawn by their owner, not by [`draw_form`].
    pub multiline: bool,
}

impl FormField {
    /// Creates a single-line field.
    pub fn new(label: impl Into<String>, required: bool) -> Self {
        Self {
            label: label.into(),
            error: None,
            required,
            multiline: false,
        }
    }

    /// Creates a multi-line field.
    pub fn multiline(label: impl Into<String>, required: bool) -> Self {
        Self {
            multiline: true,
            ..Self::new(label, required)
        }
    }

    /// Border title: the label, with ` *` for required fields.
    pub fn title(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}

/// A set of inputs with focus management.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a form. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn set_error(&mut self, index: usize, error: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = Some(error);
        }
    }

    pub fn clear_error(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = None;
        }
    }

    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Border color for a field: red on error, yellow when focused.
pub fn border_color(field: &FormField, focused: bool) -> Color {
    if field.error.is_some() {
        Color::Red
    } else if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    }
}

/// Renders the single-line fields of `form`, one row each.
///
/// `values[i]` is the current value of field `i`; missing values render empty.
/// Multi-line fields are skipped.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, values: &[&str], frame: &mut Frame, area: Rect) {
    let single: Vec<(usize, &FormField)> = form
        .fields
        .iter()
        .enumerate()
        .filter(|(_, f)| !f.multiline)
        .collect();
    let rows = Layout::vertical(single.iter().map(|_| Constraint::Length(ROW_HEIGHT))).split(area);

    for (row, (i, field)) in single.into_iter().enumerate() {
        let is_focused = i == form.focus;

        let block = Block::default()
            .title(field.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color(field, is_focused)));

        let value = values.get(i).copied().unwrap_or("");
        let mut spans = vec![Span::raw(value)];
        if is_focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), rows[row]);

        // Error sits on the bottom border.
        if let Some(ref err) = field.error {
            let err_area = Rect {
                x: rows[row].x + 2,
                y: rows[row].y + ROW_HEIGHT.saturating_sub(1),
                width: rows[row].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Span::styled(err, Style::default().fg(Color::Red))),
                err_area,
            );
        }
    }
}
