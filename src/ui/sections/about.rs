//! Company background and strengths

use super::{wrapped, Canvas};
use crate::content::{ABOUT_HEADING, ABOUT_PARAGRAPHS, ABOUT_STRENGTHS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn draw(frame: &mut Frame, canvas: &mut Canvas) {
    let width = canvas.width();
    let mut lines = vec![
        Line::from(Span::styled(
            ABOUT_HEADING,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for paragraph in ABOUT_PARAGRAPHS {
        lines.extend(wrapped(paragraph, width, Style::default()));
        lines.push(Line::default());
    }
    lines.extend(ABOUT_STRENGTHS.iter().map(|strength| {
        Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::raw(*strength),
        ])
    }));
    canvas.lines(frame, lines);
}
