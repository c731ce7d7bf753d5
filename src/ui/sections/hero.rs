//! Hero: badge, headline, feature bullets, calls to action and headline stats

use super::{wrapped, Canvas};
use crate::content::hero;
use crate::state::AppState;
use crate::ui::components::{render_cta_button, BUTTON_HEIGHT};
use crate::ui::particles::Particles;
use crate::ui::widgets::GridLayout;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const QUOTE_BUTTON_WIDTH: u16 = 30;
const PRODUCTS_BUTTON_WIDTH: u16 = 32;

pub fn draw(frame: &mut Frame, area: Rect, canvas: &mut Canvas, state: &AppState) {
    frame.render_widget(Particles::new(&state.particles), area);

    let width = canvas.width();
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" ★ {} ", hero::BADGE),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )),
        Line::default(),
        Line::from(Span::styled(
            hero::HEADLINE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(wrapped(
        hero::SUBHEADING,
        width,
        Style::default().fg(Color::Gray),
    ));
    lines.push(Line::default());
    lines.extend(hero::FEATURES.iter().map(|feature| {
        Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::raw(*feature),
        ])
    }));
    lines.push(Line::default());
    canvas.lines(frame, lines);

    if let Some(slot) = canvas.next(BUTTON_HEIGHT) {
        if slot.is_whole(BUTTON_HEIGHT) {
            let quote = Rect {
                width: QUOTE_BUTTON_WIDTH.min(slot.area.width),
                ..slot.area
            };
            render_cta_button(frame, quote, "g", hero::QUOTE_CTA, true);

            let products_x = quote.x + quote.width + 1;
            let remaining = (slot.area.x + slot.area.width).saturating_sub(products_x);
            if remaining >= PRODUCTS_BUTTON_WIDTH {
                let products = Rect {
                    x: products_x,
                    width: PRODUCTS_BUTTON_WIDTH,
                    ..slot.area
                };
                render_cta_button(frame, products, "p", hero::PRODUCTS_CTA, false);
            }
        }
    }
    canvas.skip(1);

    draw_stats(frame, canvas);
}

fn draw_stats(frame: &mut Frame, canvas: &mut Canvas) {
    let grid = GridLayout::new(canvas.width(), 18, hero::STATS.len());
    for row in 0..grid.rows(hero::STATS.len()) {
        let Some(slot) = canvas.next(2) else {
            continue;
        };
        for col in 0..grid.columns {
            let Some((value, label)) = hero::STATS.get(row * grid.columns + col) else {
                break;
            };
            let lines = vec![
                Line::from(Span::styled(
                    *value,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(*label, Style::default().fg(Color::Gray))),
            ];
            let cell = grid.column_area(slot.area, col, slot.area.y, slot.area.height);
            frame.render_widget(Paragraph::new(lines).scroll((slot.clipped_top, 0)), cell);
        }
    }
}
