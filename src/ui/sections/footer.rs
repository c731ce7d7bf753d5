//! Page footer: call to action, link columns, legal links and copyright

use super::{wrapped, Canvas};
use crate::content::{self, footer, ADDRESS_LINE, BRAND, SALES_EMAIL, SALES_PHONE, WEBSITE};
use crate::ui::components::{render_cta_button, BUTTON_HEIGHT};
use crate::ui::widgets::GridLayout;
use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const COLUMN_MIN_WIDTH: u16 = 24;

pub fn draw(frame: &mut Frame, canvas: &mut Canvas) {
    let width = canvas.width();
    let mut lines = vec![
        Line::from(Span::styled(
            "─".repeat(usize::from(width)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        Line::from(Span::styled(
            footer::CTA_HEADING,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(wrapped(
        footer::CTA_TEXT,
        width,
        Style::default().fg(Color::Gray),
    ));
    lines.push(Line::default());
    canvas.lines(frame, lines);

    draw_cta_buttons(frame, canvas);
    canvas.skip(1);
    draw_columns(frame, canvas);

    let dim = Style::default().fg(Color::DarkGray);
    canvas.lines(
        frame,
        vec![
            Line::from(Span::styled(footer::LEGAL_LINKS.join("  ·  "), dim)),
            Line::from(Span::styled(
                content::copyright(chrono::Local::now().year()),
                dim,
            )),
        ],
    );
}

/// Same keys as the hero buttons: `g` opens the quote form, `p` jumps to products
fn draw_cta_buttons(frame: &mut Frame, canvas: &mut Canvas) {
    let Some(slot) = canvas.next(BUTTON_HEIGHT) else {
        return;
    };
    if !slot.is_whole(BUTTON_HEIGHT) {
        return;
    }

    let buttons = [
        ("g", footer::QUOTE_CTA, true),
        ("p", footer::PRODUCTS_CTA, false),
    ];
    let mut x = slot.area.x;
    let right = slot.area.x + slot.area.width;
    for (key, label, primary) in buttons {
        // "[k] " prefix, padding and borders
        let width = (label.chars().count() + 8) as u16;
        if x + width > right {
            break;
        }
        render_cta_button(frame, Rect { x, width, ..slot.area }, key, label, primary);
        x += width + 1;
    }
}

fn title(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn columns(width: u16) -> Vec<Vec<Line<'static>>> {
    let gray = Style::default().fg(Color::Gray);
    let key = Style::default().fg(Color::DarkGray);

    let mut company = vec![title(BRAND), Line::default()];
    company.extend(wrapped(footer::BLURB, width, gray));

    let mut quick = vec![title("Quick Links"), Line::default()];
    quick.extend(footer::QUICK_LINKS.iter().enumerate().map(|(i, label)| {
        Line::from(vec![
            Span::styled(format!("[{}] ", i + 1), key),
            Span::styled(*label, gray),
        ])
    }));

    let mut products = vec![title("Products"), Line::default()];
    products.extend(
        footer::PRODUCT_LINKS
            .iter()
            .map(|name| Line::from(Span::styled(*name, gray))),
    );

    let mut contact = vec![title("Contact Info"), Line::default()];
    contact.push(Line::from(vec![
        Span::styled(SALES_PHONE, gray),
        Span::styled("  [t]", key),
    ]));
    contact.push(Line::from(vec![
        Span::styled(SALES_EMAIL, gray),
        Span::styled("  [e]", key),
    ]));
    contact.extend(wrapped(ADDRESS_LINE, width, gray));
    contact.push(Line::from(Span::styled(WEBSITE, gray)));

    vec![company, quick, products, contact]
}

fn draw_columns(frame: &mut Frame, canvas: &mut Canvas) {
    let grid = GridLayout::new(canvas.width(), COLUMN_MIN_WIDTH, 4);
    let columns = columns(grid.card_width);

    for row in columns.chunks(grid.columns) {
        let tallest = row.iter().map(Vec::len).max().unwrap_or_default();
        if let Some(slot) = canvas.next(u16::try_from(tallest).unwrap_or(u16::MAX)) {
            for (col, lines) in row.iter().enumerate() {
                let cell = grid.column_area(slot.area, col, slot.area.y, slot.area.height);
                frame.render_widget(
                    Paragraph::new(lines.clone()).scroll((slot.clipped_top, 0)),
                    cell,
                );
            }
        }
        canvas.skip(1);
    }
}
