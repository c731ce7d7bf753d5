//! Industry applications grid

use super::Canvas;
use crate::content::{self, APPLICATIONS};
use crate::ui::widgets::GridLayout;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const CARD_HEIGHT: u16 = 5;

pub fn draw(frame: &mut Frame, canvas: &mut Canvas) {
    canvas.heading(
        frame,
        content::APPLICATIONS_HEADING,
        content::APPLICATIONS_INTRO,
    );

    let grid = GridLayout::new(canvas.width(), 28, 3);
    for row in 0..grid.rows(APPLICATIONS.len()) {
        let Some(slot) = canvas.next(CARD_HEIGHT).filter(|s| s.is_whole(CARD_HEIGHT)) else {
            continue;
        };
        for col in 0..grid.columns {
            let Some(application) = APPLICATIONS.get(row * grid.columns + col) else {
                break;
            };
            let card = Paragraph::new(vec![
                Line::from(Span::styled(
                    application.name,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    application.description,
                    Style::default().fg(Color::Gray),
                )),
            ])
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::horizontal(1)),
            );
            frame.render_widget(card, grid.column_area(slot.area, col, slot.area.y, CARD_HEIGHT));
        }
    }
}
