//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod particles;
mod sections;
mod splash;
mod widgets;

pub use layout::body_area;

use crate::app::App;
use crate::state::{FormVariant, View};
use ratatui::{layout::Rect, Frame};

/// Widest the standalone quote form grows
const QUOTE_MAX_WIDTH: u16 = 100;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let (View::Splash, Some(splash_state)) = (app.state.current_view, &app.splash_state) {
        splash::draw(frame, area, splash_state);
        return;
    }

    let (header_area, body, status_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, &app.state);

    match app.state.current_view {
        View::Quote => {
            let width = body.width.min(QUOTE_MAX_WIDTH);
            let quote_area = Rect {
                x: body.x + (body.width - width) / 2,
                width,
                ..body
            };
            let quote = app.state.form(FormVariant::Quote);
            forms::draw_contact_form(frame, quote_area, quote, true);
        }
        View::Page | View::Splash => sections::draw(frame, body, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog overlays everything
    if let Some(error) = app.state.current_error() {
        let pending = app.state.error_queue.len().saturating_sub(1);
        components::render_error_dialog(frame, error, pending);
    }
}
