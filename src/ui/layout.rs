//! Layout components (header, status bar)

use crate::app::App;
use crate::content::{self, BRAND, TAGLINE};
use crate::platform::{CLEAR_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{AppState, Section, View};
use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header rows, bottom border included
pub const HEADER_HEIGHT: u16 = 3;

/// Split the screen into header, body and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Body
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Area the current page body is drawn into
pub fn body_area(area: Rect) -> Rect {
    create_layout(area).1
}

/// Brand on the left, section navigation after it; solid once scrolled past the hero
pub fn draw_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let solid = state.is_scrolled() || state.current_view == View::Quote;
    let block = if solid {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(Color::Black))
    } else {
        Block::default()
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = Paragraph::new(vec![Line::default(), header_line(state, inner.width)]);
    frame.render_widget(header, inner);
}

/// How much room each navigation item gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavWidth {
    Spaced,
    Tight,
    NumbersOnly,
}

/// Widest header that fits: the tagline goes first, then nav spacing, then nav labels
fn header_line(state: &AppState, width: u16) -> Line<'static> {
    let brand = Span::styled(
        format!(" ◆ {BRAND} "),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let tagline = Span::styled(format!("{TAGLINE}   "), Style::default().fg(Color::DarkGray));

    let candidates = [
        [vec![brand.clone(), tagline], nav_spans(state, NavWidth::Spaced)].concat(),
        [vec![brand.clone()], nav_spans(state, NavWidth::Spaced)].concat(),
        [vec![brand], nav_spans(state, NavWidth::Tight)].concat(),
    ];
    candidates
        .into_iter()
        .map(Line::from)
        .find(|line| line.width() <= usize::from(width))
        .unwrap_or_else(|| Line::from(nav_spans(state, NavWidth::NumbersOnly)))
}

fn nav_spans(state: &AppState, width: NavWidth) -> Vec<Span<'static>> {
    let on_page = state.current_view == View::Page;
    Section::NAV
        .iter()
        .enumerate()
        .flat_map(|(i, section)| {
            let style = if on_page && state.section == *section {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let item = match width {
                NavWidth::NumbersOnly => format!(" {} ", i + 1),
                _ => format!(" {} {} ", i + 1, section.label()),
            };
            let mut spans = vec![Span::styled(item, style)];
            if width == NavWidth::Spaced {
                spans.push(Span::raw(" "));
            }
            spans
        })
        .collect()
}

/// Keyboard hints for what currently has focus
pub fn view_hints(app: &App) -> String {
    let form_hints = |leave: &str| {
        format!("Tab:next  {SUBMIT_SHORTCUT}:send  {CLEAR_SHORTCUT}:clear  Esc:{leave}")
    };
    match app.state.current_view {
        View::Splash => "Press any key to skip".to_string(),
        View::Quote => form_hints("back"),
        View::Page if app.state.contact_form_focused => form_hints("leave form"),
        View::Page => {
            let extra = match app.state.section {
                Section::Hero => "  Enter:quote  p:products",
                Section::Contact => "  Enter:form  e/t:copy",
                _ => "",
            };
            format!("←/→:section  j/k:scroll  1-5:jump  g:quote{extra}  q:quit")
        }
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {}", view_hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Copyright on the right, as long as it does not cover the hints
    let copyright = format!("{} ", content::copyright(chrono::Local::now().year()));
    let width = copyright.chars().count() as u16;
    let hints_width = view_hints(app).chars().count() as u16 + 2;
    if area.width >= width + hints_width {
        let copyright_area = Rect {
            x: area.x + area.width - width,
            width,
            ..area
        };
        frame.render_widget(
            Paragraph::new(copyright).style(Style::default().bg(Color::DarkGray).fg(Color::Black)),
            copyright_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::submission::MockInquirySubmitter;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        let config = SiteConfig {
            reduced_motion: Some(true),
            ..Default::default()
        };
        App::new(&config, Arc::new(MockInquirySubmitter::new()))
    }

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_layout_reserves_header_and_status_rows() {
        let (header, body, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, HEADER_HEIGHT);
        assert_eq!(body, Rect::new(0, 3, 80, 20));
        assert_eq!(status, Rect::new(0, 23, 80, 1));
        assert_eq!(body_area(Rect::new(0, 0, 80, 24)), body);
    }

    #[test]
    fn test_header_lists_navigation() {
        let mut app = app();
        app.state.go_to_section(Section::Quality);
        let mut terminal = Terminal::new(TestBackend::new(120, 3)).unwrap();
        terminal
            .draw(|frame| draw_header(frame, frame.area(), &app.state))
            .unwrap();
        let line = row(&terminal, 1);
        assert!(line.contains("SilicaGel Pro"));
        assert!(line.contains("1 Products"));
        assert!(line.contains("5 Contact"));

        let buffer = terminal.backend().buffer();
        let x = line.find("3 Quality").unwrap();
        let x = line[..x].chars().count() as u16;
        assert_eq!(buffer[(x, 1)].bg, Color::Cyan);
    }

    fn header_row(app: &App, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        terminal
            .draw(|frame| draw_header(frame, frame.area(), &app.state))
            .unwrap();
        row(&terminal, 1)
    }

    #[test]
    fn test_header_keeps_every_section_at_80_columns() {
        let app = app();
        let line = header_row(&app, 80);
        assert!(line.contains("SilicaGel Pro"));
        assert!(!line.contains("Industrial Desiccants"));
        for (i, section) in Section::NAV.iter().enumerate() {
            assert!(line.contains(&format!("{} {}", i + 1, section.label())));
        }
    }

    #[test]
    fn test_header_shows_tagline_when_wide() {
        let app = app();
        assert!(header_row(&app, 120).contains("Industrial Desiccants"));
    }

    #[test]
    fn test_header_falls_back_to_numbers_when_narrow() {
        let app = app();
        let line = header_row(&app, 30);
        assert!(!line.contains("Products"));
        assert!(line.contains(" 1  2  3  4  5 "));
    }

    #[test]
    fn test_header_turns_solid_when_scrolled() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|frame| draw_header(frame, frame.area(), &app.state))
            .unwrap();
        assert_eq!(terminal.backend().buffer()[(0, 0)].bg, Color::Reset);

        app.state.scroll_down();
        terminal
            .draw(|frame| draw_header(frame, frame.area(), &app.state))
            .unwrap();
        assert_eq!(terminal.backend().buffer()[(0, 0)].bg, Color::Black);
    }

    #[test]
    fn test_hints_follow_focus() {
        let mut app = app();
        assert!(view_hints(&app).contains("g:quote"));
        assert!(view_hints(&app).contains("Enter:quote"));

        app.state.go_to_section(Section::Contact);
        assert!(view_hints(&app).contains("e/t:copy"));
        app.state.contact_form_focused = true;
        assert!(view_hints(&app).contains("Esc:leave form"));

        app.state.contact_form_focused = false;
        app.open_quote();
        assert!(view_hints(&app).contains("Esc:back"));
    }

    #[test]
    fn test_status_bar_shows_message_and_copyright() {
        let mut app = app();
        app.status_message = Some("Copied info@silicagelpro.com".to_string());
        let mut terminal = Terminal::new(TestBackend::new(160, 1)).unwrap();
        terminal
            .draw(|frame| draw_status_bar(frame, frame.area(), &app))
            .unwrap();
        let line = row(&terminal, 0);
        assert!(line.contains("Copied info@silicagelpro.com"));
        assert!(line.contains("SilicaGel Pro. All rights reserved."));
    }
}
