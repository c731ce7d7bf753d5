//! Splash screen rendering with block-letter logo

use crate::content::{BRAND, TAGLINE};
use crate::state::SplashState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LOGO: [&str; 5] = [
    "████ ███ █    ███ ████  ██  ████ ████ █   ",
    "█     █  █     █  █    █  █ █    █    █   ",
    "████  █  █     █  █    ████ █ ██ ███  █   ",
    "   █  █  █     █  █    █  █ █  █ █    █   ",
    "████ ███ ████ ███ ████ █  █ ████ ████ ████",
];
const LOGO_WIDTH: u16 = 42;

/// Logo, brand line and tagline, top to bottom
fn build_logo() -> Vec<Line<'static>> {
    let style = Style::default().fg(Color::Cyan);
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, style)))
        .collect();
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "P R O",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
    );
    lines.push(
        Line::from(Span::styled(
            format!("{BRAND} · {TAGLINE}"),
            Style::default().fg(Color::Gray),
        ))
        .centered(),
    );
    lines
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let lines = build_logo();
    let logo_height = lines.len() as u16;

    // Scroll offset may push the logo above the screen
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(LOGO_WIDTH)) / 2;

    let lines_off_top = if y_pos < area.y as i32 {
        (area.y as i32 - y_pos) as usize
    } else {
        0
    };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let render_y = (y_pos.max(area.y as i32)) as u16;
    let logo_area = Rect {
        x,
        y: render_y,
        width: LOGO_WIDTH.min(area.width),
        height: (visible_lines.len() as u16).min(area.height),
    };
    frame.render_widget(Paragraph::new(visible_lines), logo_area);

    // Hint only while the logo is still
    if splash_state.scroll_offset < 1.0 && area.height >= 2 {
        let hint = "Press any key to skip";
        let hint_area = Rect {
            x: area.x + (area.width.saturating_sub(hint.len() as u16)) / 2,
            y: area.y + area.height - 2,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn screen(state: &SplashState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), state))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..20)
            .map(|y| (0..60).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_logo_rows_share_width() {
        for row in LOGO {
            assert_eq!(row.chars().count(), LOGO_WIDTH as usize);
        }
    }

    #[test]
    fn test_shows_logo_and_hint_before_lift_off() {
        let lines = screen(&SplashState::new(Instant::now()));
        assert!(lines.iter().any(|l| l.contains("████ ███ ████ ███ ████")));
        assert!(lines.iter().any(|l| l.contains("SilicaGel Pro · Industrial Desiccants")));
        assert!(lines.iter().any(|l| l.contains("Press any key to skip")));
    }

    #[test]
    fn test_logo_leaves_screen_when_fully_scrolled() {
        let mut state = SplashState::new(Instant::now());
        state.scroll_offset = 40.0;
        let lines = screen(&state);
        assert!(lines.iter().all(|l| l.trim().is_empty()));
    }
}
