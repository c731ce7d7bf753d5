//! Contact channels, business hours, emergency line and the embedded contact form,
//! followed by the page footer

use super::{footer, wrapped, Canvas};
use crate::content::{
    self, ChannelKind, BUSINESS_HOURS, CONTACT_CHANNELS, EMERGENCY_HEADING, EMERGENCY_TEXT,
};
use crate::state::{AppState, FormVariant};
use crate::ui::forms::draw_contact_form;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Viewport width from which the form sits beside the contact details
const SIDE_BY_SIDE_WIDTH: u16 = 100;
const INFO_WIDTH: u16 = 42;
const FORM_HEIGHT: u16 = 26;

fn copy_key(kind: ChannelKind) -> Option<&'static str> {
    match kind {
        ChannelKind::Phone => Some("t"),
        ChannelKind::Email => Some("e"),
        ChannelKind::Address => None,
    }
}

fn info_lines(width: u16) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    for channel in &CONTACT_CHANNELS {
        let mut title = vec![Span::styled(channel.label, bold.fg(Color::Cyan))];
        if let Some(key) = copy_key(channel.kind) {
            title.push(Span::styled(format!("  [{key}] copy"), dim));
        }
        lines.push(Line::from(title));
        lines.extend(channel.lines.iter().map(|l| Line::from(*l)));
        if let Some(note) = channel.note {
            lines.push(Line::from(Span::styled(note, dim)));
        }
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        Span::styled("Web  ", bold.fg(Color::Cyan)),
        Span::raw(content::WEBSITE),
    ]));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Business Hours", bold.fg(Color::Cyan))));
    for hours in &BUSINESS_HOURS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<17}", hours.days), Style::default().fg(Color::Gray)),
            Span::raw(hours.time),
        ]));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        EMERGENCY_HEADING,
        bold.fg(Color::Red),
    )));
    lines.extend(wrapped(EMERGENCY_TEXT, width, Style::default().fg(Color::Gray)));
    lines.push(Line::from(Span::styled(
        format!("Emergency Line: {}", content::SALES_PHONE),
        bold,
    )));
    lines
}

pub fn draw(frame: &mut Frame, canvas: &mut Canvas, state: &AppState) {
    let focused = state.contact_form_focused;
    let form = state.form(FormVariant::Contact);
    let heading = canvas.heading_lines(content::CONTACT_HEADING, content::CONTACT_INTRO);

    if canvas.width() >= SIDE_BY_SIDE_WIDTH {
        if focused {
            canvas.follow(rows(heading.len()), FORM_HEIGHT);
        }
        canvas.lines(frame, heading);
        let info = info_lines(INFO_WIDTH);
        let height = rows(info.len()).max(FORM_HEIGHT);
        if let Some(slot) = canvas.next(height) {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(INFO_WIDTH),
                    Constraint::Length(2),
                    Constraint::Min(0),
                ])
                .split(slot.area);
            frame.render_widget(
                Paragraph::new(info).scroll((slot.clipped_top, 0)),
                columns[0],
            );
            draw_contact_form(frame, columns[2], form, focused);
        }
    } else {
        let info = info_lines(canvas.width());
        if focused {
            // Keys go to the form, so it has to be on screen
            let form_top = rows(heading.len() + info.len() + 1);
            canvas.follow(form_top, FORM_HEIGHT);
        }
        canvas.lines(frame, heading);
        canvas.lines(frame, info);
        canvas.skip(1);
        if let Some(slot) = canvas.next(FORM_HEIGHT) {
            draw_contact_form(frame, slot.area, form, focused);
        }
    }

    canvas.skip(2);
    footer::draw(frame, canvas);
}

fn rows(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(width: u16) -> Vec<String> {
        info_lines(width).iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_copy_hints_only_on_phone_and_email() {
        let lines = text(60);
        assert!(lines.iter().any(|l| l == "Phone  [t] copy"));
        assert!(lines.iter().any(|l| l == "Email  [e] copy"));
        assert!(lines.iter().any(|l| l == "Address"));
        assert!(lines.iter().any(|l| l == "Web  www.silicagelpro.com"));
    }

    #[test]
    fn test_lists_hours_and_emergency_line() {
        let lines = text(60);
        assert!(lines.iter().any(|l| l.ends_with("8:00 AM - 6:00 PM EST")));
        assert!(lines.iter().any(|l| l.ends_with("Closed")));
        assert!(lines.iter().any(|l| l == EMERGENCY_HEADING));
        assert!(lines
            .iter()
            .any(|l| l == "Emergency Line: +1 (555) 123-4567"));
    }
}
