//! Quality standards

use super::{wrapped, Canvas};
use crate::content::{self, QUALITY};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn draw(frame: &mut Frame, canvas: &mut Canvas) {
    canvas.heading(frame, content::QUALITY_HEADING, content::QUALITY_INTRO);

    let width = canvas.width().saturating_sub(4);
    for standard in &QUALITY {
        let mut lines = vec![Line::from(vec![
            Span::styled("◆ ", Style::default().fg(Color::Cyan)),
            Span::styled(
                standard.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])];
        lines.extend(
            wrapped(standard.description, width, Style::default().fg(Color::Gray))
                .into_iter()
                .map(|line| {
                    let mut spans = vec![Span::raw("  ")];
                    spans.extend(line.spans);
                    Line::from(spans)
                }),
        );
        lines.push(Line::default());
        canvas.lines(frame, lines);
    }
}
