//! Storefront page sections, one drawn at a time beneath the header

mod about;
mod applications;
mod contact;
mod footer;
mod hero;
mod products;
mod quality;

use super::components::wrap_text;
use crate::app::App;
use crate::state::Section;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the current section with its reveal offset and scroll position applied
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let offset = if state.reduced_motion {
        (0, 0)
    } else {
        state.reveal(state.section).offset(state.now)
    };
    let mut canvas = Canvas::new(area, state.scroll_offset, offset);

    match state.section {
        Section::Hero => hero::draw(frame, area, &mut canvas, state),
        Section::Products => products::draw(frame, &mut canvas, state),
        Section::Applications => applications::draw(frame, &mut canvas),
        Section::Quality => quality::draw(frame, &mut canvas),
        Section::About => about::draw(frame, &mut canvas),
        Section::Contact => contact::draw(frame, &mut canvas, state),
    }
}

/// Visible part of a block placed on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub area: Rect,
    /// Rows of the block hidden above the viewport
    pub clipped_top: u16,
}

impl Slot {
    pub fn is_whole(&self, height: u16) -> bool {
        self.clipped_top == 0 && self.area.height == height
    }
}

/// Lays blocks out top to bottom on a virtual page and maps them into the viewport
#[derive(Debug, Clone)]
pub struct Canvas {
    viewport: Rect,
    scroll: u16,
    cursor: u16,
}

impl Canvas {
    /// `offset` is the reveal displacement: positive moves content right/down
    pub fn new(area: Rect, scroll: u16, offset: (i16, i16)) -> Self {
        let (dx, dy) = offset;
        let shift_x = dx.unsigned_abs().min(area.width);
        let shift_y = dy.unsigned_abs().min(area.height);
        let mut viewport = area;
        let mut scroll = scroll;

        viewport.width -= shift_x;
        if dx > 0 {
            viewport.x += shift_x;
        }
        if dy > 0 {
            viewport.y += shift_y;
            viewport.height -= shift_y;
        } else {
            scroll = scroll.saturating_add(shift_y);
        }

        Self {
            viewport,
            scroll,
            cursor: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.viewport.width
    }

    /// Reserve `height` rows; returns the visible part, if any
    pub fn next(&mut self, height: u16) -> Option<Slot> {
        let top = self.cursor;
        self.cursor = self.cursor.saturating_add(height);
        self.place(top, height)
    }

    /// Leave `rows` blank
    pub fn skip(&mut self, rows: u16) {
        self.cursor = self.cursor.saturating_add(rows);
    }

    /// Scroll so page rows `top..top + height` are in view, as far as the viewport allows.
    /// Must run before anything is placed.
    pub fn follow(&mut self, top: u16, height: u16) {
        let height = height.min(self.viewport.height);
        let view_bottom = self.scroll.saturating_add(self.viewport.height);
        if top < self.scroll {
            self.scroll = top;
        } else if top.saturating_add(height) > view_bottom {
            self.scroll = top.saturating_add(height) - self.viewport.height;
        }
    }

    fn place(&self, top: u16, height: u16) -> Option<Slot> {
        let bottom = top.saturating_add(height);
        let view_bottom = self.scroll.saturating_add(self.viewport.height);
        if height == 0 || bottom <= self.scroll || top >= view_bottom {
            return None;
        }
        let clipped_top = self.scroll.saturating_sub(top);
        let visible_top = top.max(self.scroll);
        let visible_bottom = bottom.min(view_bottom);

        Some(Slot {
            area: Rect {
                x: self.viewport.x,
                y: self.viewport.y + (visible_top - self.scroll),
                width: self.viewport.width,
                height: visible_bottom - visible_top,
            },
            clipped_top,
        })
    }

    /// Render lines as a block, clipping rows scrolled off the top
    pub fn lines(&mut self, frame: &mut Frame, lines: Vec<Line<'static>>) {
        if let Some(slot) = self.next(lines.len() as u16) {
            frame.render_widget(
                Paragraph::new(lines).scroll((slot.clipped_top, 0)),
                slot.area,
            );
        }
    }

    /// Section heading and its wrapped intro, followed by a blank row
    pub fn heading(&mut self, frame: &mut Frame, title: &str, intro: &str) {
        let lines = self.heading_lines(title, intro);
        self.lines(frame, lines);
    }

    pub fn heading_lines(&self, title: &str, intro: &str) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                title.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(wrapped(intro, self.width(), Style::default().fg(Color::Gray)));
        lines.push(Line::default());
        lines
    }
}

/// Word-wrapped text as styled lines
pub fn wrapped(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    wrap_text(text, width as usize)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, style)))
        .collect()
}
