//! Product catalogue and the animated statistics row

use super::{wrapped, Canvas};
use crate::content::{self, Product, PRODUCTS};
use crate::state::AppState;
use crate::ui::widgets::GridLayout;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

const MIN_CARD_WIDTH: u16 = 30;

pub fn draw(frame: &mut Frame, canvas: &mut Canvas, state: &AppState) {
    canvas.heading(frame, content::PRODUCTS_HEADING, content::PRODUCTS_INTRO);

    let grid = GridLayout::new(canvas.width(), MIN_CARD_WIDTH, 2);
    let inner_width = grid.card_width.saturating_sub(4);
    let card_height = PRODUCTS
        .iter()
        .map(|p| card_lines(p, inner_width).len() as u16 + 2)
        .max()
        .unwrap_or(0);

    for row in 0..grid.rows(PRODUCTS.len()) {
        let slot = canvas.next(card_height);
        canvas.skip(1);
        let Some(slot) = slot.filter(|s| s.is_whole(card_height)) else {
            continue;
        };
        for col in 0..grid.columns {
            let Some(product) = PRODUCTS.get(row * grid.columns + col) else {
                break;
            };
            let area = grid.column_area(slot.area, col, slot.area.y, card_height);
            let card = Paragraph::new(card_lines(product, inner_width)).block(
                Block::default()
                    .title(Span::styled(
                        format!(" {} ", product.name),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::horizontal(1)),
            );
            frame.render_widget(card, area);
        }
    }

    draw_stats(frame, canvas, state);
}

fn card_lines(product: &Product, width: u16) -> Vec<Line<'static>> {
    let mut lines = wrapped(product.description, width, Style::default().fg(Color::Gray));
    lines.push(Line::default());
    lines.extend(product.features.iter().map(|feature| {
        Line::from(vec![
            Span::styled("• ", Style::default().fg(Color::Cyan)),
            Span::raw(*feature),
        ])
    }));
    lines
}

fn draw_stats(frame: &mut Frame, canvas: &mut Canvas, state: &AppState) {
    let grid = GridLayout::new(canvas.width(), 18, state.stats.len());
    for row in 0..grid.rows(state.stats.len()) {
        let Some(slot) = canvas.next(2) else {
            continue;
        };
        for col in 0..grid.columns {
            let index = row * grid.columns + col;
            let (Some(counter), Some(stat)) = (state.stats.get(index), content::STATS.get(index))
            else {
                break;
            };
            let lines = vec![
                Line::from(Span::styled(
                    counter.display(state.now),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(stat.label, Style::default().fg(Color::Gray))),
            ];
            let cell = grid.column_area(slot.area, col, slot.area.y, slot.area.height);
            frame.render_widget(Paragraph::new(lines).scroll((slot.clipped_top, 0)), cell);
        }
    }
}
