//! Contact screen: info panel, the five inputs, the submit control, and the
//! success indicator.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tui_textarea::{CursorMove, TextArea};

use crate::model::{ContactFields, FieldName, Phase, validate_fields};
use crate::tui::action::Action;
use crate::tui::widgets::form::{Form, FormField, ROW_HEIGHT, border_color, draw_form};
use crate::workflow::ContactForm;

/// Submit control label while idle or showing success.
pub const SEND_LABEL: &str = "Send Message";
/// Submit control label while the mail client is being opened.
pub const SENDING_LABEL: &str = "Opening Email...";
/// Success indicator text.
pub const SUCCESS_TEXT: &str = "Email opened! We'll respond within 24 hours.";

const MESSAGE_PLACEHOLDER: &str = "Tell us about your mining operation and data challenges...";
const INTRO: &str = "Ready to transform your mining operations with data-driven insights? \
Let's discuss how Omentics can help optimize your processes and boost efficiency.";

/// State for the contact screen.
///
/// Owns focus, field errors, and the message editor. Field values live in the
/// [`ContactForm`]; edits leave this screen as [`Action::EditField`].
#[derive(Debug, Clone)]
pub struct ContactState {
    form: Form,
    message: TextArea<'static>,
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactState {
    /// Creates the screen with focus on the name input.
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("Full Name", FieldName::Name.is_required()),
                FormField::new("Company Name", FieldName::Company.is_required()),
                FormField::new("Email Address", FieldName::Email.is_required()),
                FormField::new("Phone Number", FieldName::Phone.is_required()),
                FormField::multiline("Message", FieldName::Message.is_required()),
            ]),
            message: message_editor(""),
        }
    }

    /// The field that currently has focus.
    pub fn focused(&self) -> FieldName {
        FieldName::ALL[self.form.focus()]
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Current message editor contents, lines joined with `\n`.
    pub fn message_text(&self) -> String {
        self.message.lines().join("\n")
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    ///
    /// `fields` is the current value of every input; `phase` decides whether
    /// the submit control is enabled.
    pub fn handle_key(&mut self, key: KeyEvent, fields: &ContactFields, phase: Phase) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            return self.submit(fields, phase);
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            _ if self.focused() == FieldName::Message => self.edit_message(key),
            KeyCode::Enter => self.submit(fields, phase),
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let field = self.focused();
                let mut value = fields.get(field).to_string();
                value.push(ch);
                self.edited(field, value)
            }
            KeyCode::Backspace => {
                let field = self.focused();
                let mut value = fields.get(field).to_string();
                if value.pop().is_none() {
                    return Action::None;
                }
                self.edited(field, value)
            }
            _ => Action::None,
        }
    }

    /// Brings the message editor in line with `fields`.
    ///
    /// Called after the form resets so the editor does not keep stale text.
    pub fn sync(&mut self, fields: &ContactFields) {
        if self.message_text() != fields.message {
            self.message = message_editor(&fields.message);
        }
        if fields.is_empty() {
            self.form.clear_errors();
        }
    }

    fn edit_message(&mut self, key: KeyEvent) -> Action {
        if self.message.input(key) {
            self.edited(FieldName::Message, self.message_text())
        } else {
            Action::None
        }
    }

    fn edited(&mut self, field: FieldName, value: String) -> Action {
        self.form.clear_error(field.index());
        Action::EditField(field, value)
    }

    /// Runs the host-level checks and asks for a submission if they pass.
    ///
    /// The control is disabled while a submission is settling.
    fn submit(&mut self, fields: &ContactFields, phase: Phase) -> Action {
        if phase == Phase::Submitting {
            return Action::None;
        }

        self.form.clear_errors();
        let errors = validate_fields(fields);
        if let Some(first) = errors.first().map(|(field, _)| *field) {
            for (field, err) in errors {
                self.form.set_error(field.index(), err.to_string());
            }
            while self.focused() != first {
                self.form.focus_next();
            }
            return Action::None;
        }

        Action::Submit
    }
}

fn message_editor(text: &str) -> TextArea<'static> {
    let mut editor = TextArea::new(text.split('\n').map(String::from).collect());
    editor.set_placeholder_text(MESSAGE_PLACEHOLDER);
    editor.set_cursor_line_style(Style::default());
    editor.move_cursor(CursorMove::Bottom);
    editor.move_cursor(CursorMove::End);
    editor
}

/// Renders the contact screen.
#[mutants::skip]
pub fn draw_contact(
    state: &ContactState,
    contact: &ContactForm,
    location: &str,
    frame: &mut Frame,
    area: Rect,
) {
    let [info_area, form_area] =
        Layout::horizontal([Constraint::Percentage(38), Constraint::Percentage(62)]).areas(area);

    draw_info(contact.recipient(), location, frame, info_area);

    let block = Block::default()
        .title(" Send us a message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let [fields_area, message_area, submit_area, alert_area, footer_area] = Layout::vertical([
        Constraint::Length(ROW_HEIGHT * 4),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let fields = contact.fields();
    let values: Vec<&str> = FieldName::ALL.iter().map(|f| fields.get(*f)).collect();
    draw_form(state.form(), &values, frame, fields_area);

    let message_field = &state.form().fields()[FieldName::Message.index()];
    let focused = state.focused() == FieldName::Message;
    let mut title = message_field.title();
    if let Some(ref err) = message_field.error {
        title = format!("{title} ({err})");
    }
    let mut editor = state.message.clone();
    editor.set_block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color(message_field, focused))),
    );
    if !focused {
        editor.set_cursor_style(Style::default());
    }
    frame.render_widget(&editor, message_area);

    let status = contact.status();
    let button = if status.is_submitting {
        Span::styled(
            format!("[ {SENDING_LABEL} ]"),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            format!("[ {SEND_LABEL} ]"),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(button)), submit_area);

    if status.is_submitted {
        let alert = Line::from(vec![
            Span::styled("\u{2714} ", Style::default().fg(Color::Green)),
            Span::styled(SUCCESS_TEXT, Style::default().fg(Color::Green)),
        ]);
        frame.render_widget(Paragraph::new(alert), alert_area);
    }

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter/Ctrl+S: send  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[mutants::skip]
fn draw_info(recipient: &str, location: &str, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::Yellow);

    let lines = vec![
        Line::from(Span::styled("Get in touch with us", heading)),
        Line::from(""),
        Line::from(INTRO),
        Line::from(""),
        Line::from(Span::styled("Email", label)),
        Line::from(recipient.to_string()),
        Line::from(""),
        Line::from(Span::styled("Location", label)),
        Line::from(location.to_string()),
    ];
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyEventKind, KeyEventState};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::opener::RecordingOpener;
    use crate::tui::widgets::buffer_to_string;
    use crate::workflow::Timings;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn filled() -> ContactFields {
        ContactFields {
            name: "Jane Doe".into(),
            company: "Acme".into(),
            email: "jane@acme.com".into(),
            phone: String::new(),
            message: "Need a quote".into(),
        }
    }

    // Types `text` into `state`, applying each edit to `fields` the way the app does.
    fn type_into(state: &mut ContactState, fields: &mut ContactFields, text: &str) {
        for ch in text.chars() {
            let code = if ch == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(ch)
            };
            if let Action::EditField(field, value) = state.handle_key(press(code), fields, Phase::Idle)
            {
                fields.set(field, value);
            }
        }
    }

    mod typing {
        use super::*;

        #[test]
        fn chars_edit_the_focused_field() {
            let mut state = ContactState::new();
            let mut fields = ContactFields::default();
            type_into(&mut state, &mut fields, "Jane");
            assert_eq!(fields.name, "Jane");
            assert!(fields.company.is_empty());
        }

        #[test]
        fn char_produces_edit_action_with_full_value() {
            let mut state = ContactState::new();
            let fields = ContactFields {
                name: "Ja".into(),
                ..ContactFields::default()
            };
            let action = state.handle_key(press(KeyCode::Char('n')), &fields, Phase::Idle);
            assert_eq!(action, Action::EditField(FieldName::Name, "Jan".into()));
        }

        #[test]
        fn tab_moves_to_company() {
            let mut state = ContactState::new();
            let mut fields = ContactFields::default();
            state.handle_key(press(KeyCode::Tab), &fields, Phase::Idle);
            type_into(&mut state, &mut fields, "Acme");
            assert_eq!(fields.company, "Acme");
            assert_eq!(state.focused(), FieldName::Company);
        }

        #[test]
        fn back_tab_wraps_to_message() {
            let mut state = ContactState::new();
            state.handle_key(press(KeyCode::BackTab), &ContactFields::default(), Phase::Idle);
            assert_eq!(state.focused(), FieldName::Message);
        }

        #[test]
        fn backspace_removes_last_char() {
            let mut state = ContactState::new();
            let fields = ContactFields {
                name: "Jane".into(),
                ..ContactFields::default()
            };
            let action = state.handle_key(press(KeyCode::Backspace), &fields, Phase::Idle);
            assert_eq!(action, Action::EditField(FieldName::Name, "Jan".into()));
        }

        #[test]
        fn backspace_on_empty_is_noop() {
            let mut state = ContactState::new();
            let action =
                state.handle_key(press(KeyCode::Backspace), &ContactFields::default(), Phase::Idle);
            assert_eq!(action, Action::None);
        }

        #[test]
        fn control_chars_are_not_typed() {
            let mut state = ContactState::new();
            let action = state.handle_key(ctrl('a'), &ContactFields::default(), Phase::Idle);
            assert_eq!(action, Action::None);
        }

        #[test]
        fn message_accepts_newlines() {
            let mut state = ContactState::new();
            let mut fields = ContactFields::default();
            state.handle_key(press(KeyCode::BackTab), &fields, Phase::Idle);
            type_into(&mut state, &mut fields, "line one\nline two");
            assert_eq!(fields.message, "line one\nline two");
            assert_eq!(state.message_text(), "line one\nline two");
        }

        #[test]
        fn esc_quits() {
            let mut state = ContactState::new();
            let action = state.handle_key(press(KeyCode::Esc), &ContactFields::default(), Phase::Idle);
            assert_eq!(action, Action::Quit);
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn enter_with_complete_form_submits() {
            let mut state = ContactState::new();
            let action = state.handle_key(press(KeyCode::Enter), &filled(), Phase::Idle);
            assert_eq!(action, Action::Submit);
            assert!(!state.form().has_errors());
        }

        #[test]
        fn ctrl_s_submits_from_message_field() {
            let mut state = ContactState::new();
            state.handle_key(press(KeyCode::BackTab), &filled(), Phase::Idle);
            let action = state.handle_key(ctrl('s'), &filled(), Phase::Idle);
            assert_eq!(action, Action::Submit);
        }

        #[test]
        fn enter_in_message_does_not_submit() {
            let mut state = ContactState::new();
            state.handle_key(press(KeyCode::BackTab), &filled(), Phase::Idle);
            let action = state.handle_key(press(KeyCode::Enter), &filled(), Phase::Idle);
            assert!(matches!(action, Action::EditField(FieldName::Message, _)));
        }

        #[test]
        fn missing_required_fields_block_submit() {
            let mut state = ContactState::new();
            let action = state.handle_key(press(KeyCode::Enter), &ContactFields::default(), Phase::Idle);
            assert_eq!(action, Action::None);
            let errored: Vec<bool> = state
                .form()
                .fields()
                .iter()
                .map(|f| f.error.is_some())
                .collect();
            assert_eq!(errored, vec![true, true, true, false, true]);
        }

        #[test]
        fn focus_jumps_to_first_invalid_field() {
            let mut state = ContactState::new();
            let fields = ContactFields {
                company: String::new(),
                ..filled()
            };
            state.handle_key(press(KeyCode::Enter), &fields, Phase::Idle);
            assert_eq!(state.focused(), FieldName::Company);
        }

        #[test]
        fn invalid_email_blocks_submit() {
            let mut state = ContactState::new();
            let fields = ContactFields {
                email: "not-an-email".into(),
                ..filled()
            };
            let action = state.handle_key(ctrl('s'), &fields, Phase::Idle);
            assert_eq!(action, Action::None);
            assert!(state.form().fields()[FieldName::Email.index()].error.is_some());
        }

        #[test]
        fn submit_ignored_while_submitting() {
            let mut state = ContactState::new();
            let action = state.handle_key(press(KeyCode::Enter), &filled(), Phase::Submitting);
            assert_eq!(action, Action::None);
        }

        #[test]
        fn resubmit_allowed_while_success_showing() {
            let mut state = ContactState::new();
            let action = state.handle_key(press(KeyCode::Enter), &filled(), Phase::Submitted);
            assert_eq!(action, Action::Submit);
        }

        #[test]
        fn editing_clears_that_fields_error() {
            let mut state = ContactState::new();
            state.handle_key(press(KeyCode::Enter), &ContactFields::default(), Phase::Idle);
            state.handle_key(press(KeyCode::Char('J')), &ContactFields::default(), Phase::Idle);
            assert!(state.form().fields()[FieldName::Name.index()].error.is_none());
            assert!(state.form().fields()[FieldName::Company.index()].error.is_some());
        }
    }

    mod sync {
        use super::*;

        #[test]
        fn reset_fields_clear_editor_and_errors() {
            let mut state = ContactState::new();
            let mut fields = ContactFields::default();
            state.handle_key(press(KeyCode::BackTab), &fields, Phase::Idle);
            type_into(&mut state, &mut fields, "hello");
            state.handle_key(ctrl('s'), &ContactFields::default(), Phase::Idle);
            assert!(state.form().has_errors());

            state.sync(&ContactFields::default());
            assert_eq!(state.message_text(), "");
            assert!(!state.form().has_errors());
        }

        #[test]
        fn sync_loads_external_message() {
            let mut state = ContactState::new();
            state.sync(&filled());
            assert_eq!(state.message_text(), "Need a quote");
        }
    }

    mod render {
        use super::*;

        fn render(state: &ContactState, contact: &ContactForm) -> String {
            let backend = TestBackend::new(120, 30);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_contact(state, contact, "Johannesburg, South Africa", frame, frame.area())
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        fn make_contact() -> ContactForm {
            ContactForm::new(
                "enquiry@omentics.tech",
                Timings::default(),
                Box::new(RecordingOpener::new()),
            )
        }

        #[test]
        fn idle_shows_send_label_and_details() {
            let output = render(&ContactState::new(), &make_contact());
            assert!(output.contains(SEND_LABEL));
            assert!(!output.contains(SENDING_LABEL));
            assert!(!output.contains("Email opened!"));
            assert!(output.contains("Get in touch with us"));
            assert!(output.contains("enquiry@omentics.tech"));
            assert!(output.contains("Johannesburg"));
        }

        #[test]
        fn submitting_shows_progress_label() {
            let mut contact = make_contact();
            contact.on_submit_intent(Instant::now());
            let output = render(&ContactState::new(), &contact);
            assert!(output.contains(SENDING_LABEL));
            assert!(!output.contains("Email opened!"));
        }

        #[test]
        fn submitted_shows_success_indicator() {
            let start = Instant::now();
            let mut contact = make_contact();
            contact.set_field(FieldName::Name, "Jane Doe");
            contact.on_submit_intent(start);
            contact.tick(start + Duration::from_millis(1000));
            let output = render(&ContactState::new(), &contact);
            assert!(output.contains("Email opened!"));
            assert!(output.contains(SEND_LABEL));
            assert!(output.contains("Jane Doe"));
        }

        #[test]
        fn labels_mark_required_fields() {
            let output = render(&ContactState::new(), &make_contact());
            assert!(output.contains("Full Name *"));
            assert!(output.contains("Phone Number"));
            assert!(!output.contains("Phone Number *"));
        }
    }
}
