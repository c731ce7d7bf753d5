//! Contact form view shared by the contact section and the quote screen

use super::field_renderer::{draw_field, FieldView};
use crate::platform::{CLEAR_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{ContactForm, FieldName, FormButton, SubmitStatus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Inner width from which short fields sit side by side
const TWO_COLUMN_WIDTH: u16 = 60;

/// Success or error banner copy for a status
pub fn banner(status: SubmitStatus) -> Option<(&'static str, &'static str, Color)> {
    match status {
        SubmitStatus::Success => Some((
            "✓ Message sent successfully!",
            "We'll get back to you within 24 hours.",
            Color::Green,
        )),
        SubmitStatus::Error => Some((
            "✗ Error sending message",
            "Please try again or contact us directly.",
            Color::Red,
        )),
        SubmitStatus::Idle | SubmitStatus::Submitting => None,
    }
}

pub fn send_label(form: &ContactForm) -> &'static str {
    if form.is_submitting() {
        "Sending..."
    } else {
        "Send Message"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Row {
    Pair(FieldName, FieldName),
    Single(FieldName),
    Buttons,
}

impl Row {
    fn contains(&self, name: FieldName) -> bool {
        match self {
            Row::Pair(a, b) => *a == name || *b == name,
            Row::Single(n) => *n == name,
            Row::Buttons => false,
        }
    }
}

fn rows(two_columns: bool) -> Vec<Row> {
    let mut rows = if two_columns {
        vec![
            Row::Pair(FieldName::Name, FieldName::Email),
            Row::Pair(FieldName::Phone, FieldName::Company),
        ]
    } else {
        vec![
            Row::Single(FieldName::Name),
            Row::Single(FieldName::Email),
            Row::Single(FieldName::Phone),
            Row::Single(FieldName::Company),
        ]
    };
    rows.push(Row::Single(FieldName::InquiryType));
    rows.push(Row::Single(FieldName::Message));
    rows.push(Row::Buttons);
    rows
}

fn field_view(form: &ContactForm, name: FieldName, focused: bool) -> FieldView<'_> {
    let field = form.field(name);
    FieldView {
        field,
        error: form.error(name),
        is_active: focused && form.active_form_field().is_some_and(|f| f.name == name),
        disabled: form.is_submitting(),
    }
}

fn row_height(form: &ContactForm, row: Row, width: u16, focused: bool) -> u16 {
    match row {
        Row::Pair(a, b) => {
            let half = width / 2;
            field_view(form, a, focused)
                .height(half)
                .max(field_view(form, b, focused).height(width - half))
        }
        Row::Single(name) => field_view(form, name, focused).height(width),
        Row::Buttons => BUTTON_HEIGHT,
    }
}

/// First row to draw so the active row stays on screen
fn first_visible(heights: &[u16], active: usize, available: u16) -> usize {
    let mut first = 0;
    let span = |first: usize| {
        heights[first..=active]
            .iter()
            .fold(0u16, |total, h| total.saturating_add(*h))
    };
    while first < active && span(first) > available {
        first += 1;
    }
    first
}

/// Draw a contact form. `focused` decides whether the cursor and selection are shown.
pub fn draw(frame: &mut Frame, area: Rect, form: &ContactForm, focused: bool) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", form.variant.title()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner_height = if banner(form.status()).is_some() { 2 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Description
            Constraint::Length(banner_height), // Status banner
            Constraint::Min(0),                // Fields and buttons
            Constraint::Length(1),             // Shortcut hint
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(form.variant.description())
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    if let Some((headline, detail, color)) = banner(form.status()) {
        let lines = vec![
            Line::from(Span::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(detail, Style::default().fg(color))),
        ];
        frame.render_widget(Paragraph::new(lines), chunks[1]);
    }

    draw_rows(frame, chunks[2], form, focused);

    let hint = if focused {
        format!("Tab:next  ←/→:choose  {SUBMIT_SHORTCUT}:send  {CLEAR_SHORTCUT}:clear  Esc:leave")
    } else {
        "Enter:fill in form".to_string()
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}

fn draw_rows(frame: &mut Frame, area: Rect, form: &ContactForm, focused: bool) {
    let rows = rows(area.width >= TWO_COLUMN_WIDTH);
    let heights: Vec<u16> = rows
        .iter()
        .map(|r| row_height(form, *r, area.width, focused))
        .collect();
    let active = match form.active_form_field() {
        Some(field) => rows
            .iter()
            .position(|r| r.contains(field.name))
            .unwrap_or_default(),
        None => rows.len() - 1,
    };

    let mut y = area.y;
    let bottom = area.y + area.height;
    for (row, height) in rows
        .iter()
        .zip(&heights)
        .skip(first_visible(&heights, active, area.height))
    {
        if y >= bottom {
            break;
        }
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: (*height).min(bottom - y),
        };
        match *row {
            Row::Pair(a, b) => {
                let half = area.width / 2;
                draw_field(
                    frame,
                    Rect {
                        width: half,
                        ..row_area
                    },
                    field_view(form, a, focused),
                );
                draw_field(
                    frame,
                    Rect {
                        x: area.x + half,
                        width: area.width - half,
                        ..row_area
                    },
                    field_view(form, b, focused),
                );
            }
            Row::Single(name) => draw_field(frame, row_area, field_view(form, name, focused)),
            Row::Buttons => draw_buttons(frame, row_area, form, focused),
        }
        y = y.saturating_add(*height);
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &ContactForm, focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20),
            Constraint::Length(1),
            Constraint::Length(16),
            Constraint::Min(0),
        ])
        .split(area);

    let on_buttons = focused && form.is_buttons_row_active();
    let enabled = form.controls_enabled();
    render_button(
        frame,
        chunks[0],
        send_label(form),
        on_buttons && form.selected_button == FormButton::Send,
        enabled,
    );
    render_button(
        frame,
        chunks[2],
        "Clear Form",
        on_buttons && form.selected_button == FormButton::Clear,
        enabled,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Form, FormVariant, SubmitAttempt};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(form: &ContactForm, width: u16, height: u16, focused: bool) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), form, focused))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|l| l.contains(needle))
    }

    fn submitting_form() -> ContactForm {
        let mut form = ContactForm::new(FormVariant::Contact);
        form.set_value(FieldName::Name, "John");
        form.set_value(FieldName::Email, "john@x.com");
        form.set_value(FieldName::Message, "This is a sufficiently long message.");
        assert!(matches!(form.attempt_submit(), SubmitAttempt::Accepted(_)));
        form
    }

    #[test]
    fn test_first_visible_keeps_active_row_on_screen() {
        let heights = [3, 3, 3, 5, 3];
        assert_eq!(first_visible(&heights, 0, 6), 0);
        assert_eq!(first_visible(&heights, 3, 5), 3);
        assert_eq!(first_visible(&heights, 3, 8), 2);
        assert_eq!(first_visible(&heights, 3, 11), 1);
        assert_eq!(first_visible(&heights, 4, 100), 0);
    }

    #[test]
    fn test_first_visible_with_oversized_rows() {
        let heights = [u16::MAX, u16::MAX, 3];
        assert_eq!(first_visible(&heights, 2, 10), 2);
        assert_eq!(first_visible(&heights, 1, u16::MAX - 1), 1);
    }

    #[test]
    fn test_rows_pair_short_fields_when_wide() {
        assert_eq!(rows(true).len(), 5);
        assert_eq!(rows(false).len(), 7);
        assert!(rows(true)[0].contains(FieldName::Email));
    }

    #[test]
    fn test_draws_title_fields_and_buttons() {
        let form = ContactForm::new(FormVariant::Quote);
        let lines = screen(&form, 90, 30, true);
        assert!(contains(&lines, "Request a Quote"));
        assert!(contains(&lines, "Full Name *"));
        assert!(contains(&lines, "Email Address * (email)"));
        assert!(contains(&lines, "‹ General Inquiry ›"));
        assert!(contains(&lines, "Send Message"));
        assert!(contains(&lines, "Clear Form"));
    }

    #[test]
    fn test_validation_errors_render_inline() {
        let mut form = ContactForm::new(FormVariant::Contact);
        form.attempt_submit();
        let lines = screen(&form, 90, 34, true);
        assert!(contains(&lines, "⚠ Name is required"));
        assert!(contains(&lines, "⚠ Email is required"));
        assert!(contains(&lines, "⚠ Message is required"));
    }

    #[test]
    fn test_submitting_shows_sending_label() {
        let form = submitting_form();
        let lines = screen(&form, 90, 30, true);
        assert!(contains(&lines, "Sending..."));
        assert!(!contains(&lines, "Send Message"));
    }

    #[test]
    fn test_success_and_error_banners() {
        let mut form = submitting_form();
        form.resolve::<String>(&Ok(()));
        let lines = screen(&form, 90, 32, false);
        assert!(contains(&lines, "Message sent successfully!"));
        assert!(contains(&lines, "within 24 hours"));

        let mut form = submitting_form();
        form.resolve(&Err("boom"));
        let lines = screen(&form, 90, 32, false);
        assert!(contains(&lines, "Error sending message"));
        assert!(contains(&lines, "Please try again or contact us directly."));
    }

    #[test]
    fn test_scrolls_to_buttons_in_short_area() {
        let mut form = ContactForm::new(FormVariant::Contact);
        form.prev_field();
        let lines = screen(&form, 50, 14, true);
        assert!(contains(&lines, "Send Message"));
    }

    #[test]
    fn test_banner_copy() {
        assert!(banner(SubmitStatus::Idle).is_none());
        assert!(banner(SubmitStatus::Submitting).is_none());
        assert_eq!(banner(SubmitStatus::Error).unwrap().2, Color::Red);
    }
}
