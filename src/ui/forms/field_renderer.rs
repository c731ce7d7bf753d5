//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Minimum rows of a textarea, borders included
pub const TEXTAREA_MIN_HEIGHT: u16 = 5;
/// Rows of a single-line control, borders included
pub const INPUT_HEIGHT: u16 = 3;

const CURSOR: &str = "▌";

/// Everything the renderer needs to draw one field
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub field: &'a FormField,
    pub error: Option<&'a str>,
    pub is_active: bool,
    pub disabled: bool,
}

impl FieldView<'_> {
    fn shows_cursor(&self) -> bool {
        self.is_active && !self.disabled && !self.field.kind.is_select()
    }

    /// Rows needed at `width`, including the error line
    pub fn height(&self, width: u16) -> u16 {
        let control = match self.field.kind {
            FieldKind::Textarea => {
                let inner = width.saturating_sub(2).max(1) as usize;
                let mut text = self.field.value().to_string();
                if self.shows_cursor() {
                    text.push_str(CURSOR);
                }
                let rows: usize = text
                    .split('\n')
                    .map(|l| l.chars().count().div_ceil(inner).max(1))
                    .sum();
                u16::try_from(rows)
                    .unwrap_or(u16::MAX)
                    .saturating_add(2)
                    .max(TEXTAREA_MIN_HEIGHT)
            }
            _ => INPUT_HEIGHT,
        };
        control.saturating_add(u16::from(self.error.is_some()))
    }
}

fn title(view: &FieldView) -> Line<'static> {
    let label_style = if view.disabled {
        Style::default().fg(Color::DarkGray)
    } else if view.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut spans = vec![Span::styled(format!(" {}", view.field.label), label_style)];
    if view.field.required {
        spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    if let Some(hint) = view.field.kind.hint() {
        spans.push(Span::styled(
            format!(" ({hint})"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

fn body(view: &FieldView) -> Vec<Line<'static>> {
    let field = view.field;
    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);
    let value_style = if view.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let cursor = Span::styled(CURSOR, Style::default().fg(Color::Cyan));

    if let FieldKind::Select(_) = field.kind {
        let text = if field.value().is_empty() {
            Span::styled(field.placeholder_text(), placeholder_style)
        } else {
            Span::styled(field.display_value(), value_style)
        };
        let arrows = if view.is_active && !view.disabled {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        return vec![Line::from(vec![
            Span::styled("‹ ", arrows),
            text,
            Span::styled(" ›", arrows),
        ])];
    }

    if field.value().is_empty() {
        let mut spans = Vec::new();
        if view.shows_cursor() {
            spans.push(cursor);
        }
        spans.push(Span::styled(field.placeholder_text(), placeholder_style));
        return vec![Line::from(spans)];
    }

    let mut lines: Vec<Line> = field
        .value()
        .split('\n')
        .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
        .collect();
    if view.shows_cursor() {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }
    lines
}

/// Draw a field: bordered control plus its error line
pub fn draw_field(frame: &mut Frame, area: Rect, view: FieldView) {
    let border_style = if view.error.is_some() {
        Style::default().fg(Color::Red)
    } else if view.is_active && !view.disabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let error_rows = u16::from(view.error.is_some());
    let control_area = Rect {
        height: area.height.saturating_sub(error_rows),
        ..area
    };

    let block = Block::default()
        .title(title(&view))
        .borders(Borders::ALL)
        .border_style(border_style);
    let paragraph = Paragraph::new(body(&view)).block(block);
    let paragraph = if view.field.kind.is_multiline() {
        paragraph.wrap(Wrap { trim: false })
    } else {
        paragraph
    };
    frame.render_widget(paragraph, control_area);

    if let Some(error) = view.error {
        let error_area = Rect {
            y: control_area.y + control_area.height,
            height: 1,
            ..area
        };
        let line = Line::from(Span::styled(
            format!(" ⚠ {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), error_area);
    }
}
