//! Particle backdrop widget for the hero section

use crate::state::animation::ParticleField;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Draws each particle as a single glyph; positions are relative to the render area
pub struct Particles<'a> {
    field: &'a ParticleField,
}

impl<'a> Particles<'a> {
    pub fn new(field: &'a ParticleField) -> Self {
        Self { field }
    }
}

fn color(opacity: f32) -> Color {
    if opacity >= 0.45 {
        Color::Cyan
    } else if opacity >= 0.3 {
        Color::Blue
    } else {
        Color::DarkGray
    }
}

impl Widget for Particles<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        for p in self.field.particles() {
            let x = (p.x.max(0.0) as u16).min(area.width - 1);
            let y = (p.y.max(0.0) as u16).min(area.height - 1);
            buf[(area.x + x, area.y + y)]
                .set_char(p.glyph())
                .set_style(Style::default().fg(color(p.opacity)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::animation::Density;

    #[test]
    fn test_draws_every_particle_inside_area() {
        let field = ParticleField::with_seed(7, Density::Low, 20, 10);
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        Particles::new(&field).render(area, &mut buf);

        let drawn = area
            .positions()
            .filter(|pos| buf[*pos].symbol() != " ")
            .count();
        assert!(drawn > 0);
        assert!(drawn <= field.particles().len());
    }

    #[test]
    fn test_offsets_by_area_origin() {
        let field = ParticleField::with_seed(7, Density::High, 10, 4);
        let area = Rect::new(5, 3, 10, 4);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        Particles::new(&field).render(area, &mut buf);

        for y in 0..10 {
            for x in 0..20 {
                if !area.contains((x, y).into()) {
                    assert_eq!(buf[(x, y)].symbol(), " ");
                }
            }
        }
    }

    #[test]
    fn test_empty_area_is_noop() {
        let field = ParticleField::with_seed(1, Density::Medium, 0, 0);
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 4));
        Particles::new(&field).render(Rect::new(0, 0, 0, 0), &mut buf);
        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 4, 4)));
    }
}
