//! Rendering for the single shell screen.
//!
//! - [`render`] draws whatever the controller's state calls for, plus the
//!   front alert on top.
//! - [`render_busy`] draws the loading frame shown while a login or logout
//!   request is awaited.

mod alert;
mod home;
mod login;
pub mod theme;

pub use login::masked;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{ViewController, ViewState};
use crate::traits::{HttpClient, PushProvider, SecureStore};
use theme::{spinner_frame, COLOR_ACTIVE, COLOR_DIM};

pub fn render<S, H, P>(frame: &mut Frame, controller: &ViewController<S, H, P>, tick: usize)
where
    S: SecureStore,
    H: HttpClient,
    P: PushProvider,
{
    let area = frame.area();

    match controller.state() {
        ViewState::Loading => render_spinner(frame, area, "Loading...", tick),
        ViewState::LoggedOut => login::render(frame, area, controller.form()),
        ViewState::LoggedIn => {
            home::render(frame, area, controller.app_url(), controller.push_status())
        }
    }

    if let Some(current) = controller.current_alert() {
        alert::render(frame, area, current);
    }
}

/// Loading frame with a caption, drawn before an awaited request.
pub fn render_busy(frame: &mut Frame, caption: &str, tick: usize) {
    let area = frame.area();
    render_spinner(frame, area, caption, tick);
}

fn render_spinner(frame: &mut Frame, area: Rect, caption: &str, tick: usize) {
    let lines = vec![
        Line::from(Span::styled(
            spinner_frame(tick),
            Style::default()
                .fg(COLOR_ACTIVE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(caption.to_string(), Style::default().fg(COLOR_DIM))),
    ];

    let target = centered(area, area.width, 3);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), target);
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
