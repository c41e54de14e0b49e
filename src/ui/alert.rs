//! Modal alert drawn over whichever view is active.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_ALERT, COLOR_DIALOG_BG};
use crate::app::Alert;

const ALERT_WIDTH: u16 = 52;
const ALERT_HEIGHT: u16 = 8;

pub fn render(frame: &mut Frame, area: Rect, alert: &Alert) {
    let dialog = super::centered(area, ALERT_WIDTH, ALERT_HEIGHT);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", alert.title),
            Style::default()
                .fg(COLOR_ALERT)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ALERT))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    let lines = vec![
        Line::from(""),
        Line::from(alert.message.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" OK"),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        dialog,
    );
}
