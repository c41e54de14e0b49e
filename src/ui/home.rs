//! Logged-in view.
//!
//! The web application itself runs in the system browser; this view only
//! shows where it lives and how to get there.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_LINK, TITLE};
use crate::app::PushStatus;

const CARD_WIDTH: u16 = 70;
const CARD_HEIGHT: u16 = 12;

pub fn render(frame: &mut Frame, area: Rect, app_url: &str, push: &PushStatus) {
    let card = super::centered(area, CARD_WIDTH, CARD_HEIGHT);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", TITLE),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));

    let paragraph = Paragraph::new(content(app_url, push))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, card);
}

fn content(app_url: &str, push: &PushStatus) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            "You are logged in.",
            Style::default()
                .fg(COLOR_ACTIVE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            app_url.to_string(),
            Style::default()
                .fg(COLOR_LINK)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
        push_line(push),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Open in browser  "),
            Span::styled("[L]", Style::default().fg(Color::Green)),
            Span::raw(" Logout  "),
            Span::styled("[Q]", Style::default().fg(Color::Red)),
            Span::raw(" Quit"),
        ]),
    ]
}

fn push_line(push: &PushStatus) -> Line<'static> {
    let (text, color) = match push {
        PushStatus::NotAttempted => ("", COLOR_DIM),
        PushStatus::Registered => ("Notifications enabled", COLOR_DIM),
        PushStatus::PermissionDenied => ("Notifications are turned off", COLOR_DIM),
        PushStatus::Failed(_) => ("Notifications unavailable (see log)", Color::Yellow),
    };
    Line::from(Span::styled(text, Style::default().fg(color)))
}
