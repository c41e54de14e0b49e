//! Login form: email field, masked password field and key hints.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, MASK_CHAR, TITLE};
use crate::app::{FormField, LoginForm};

const FORM_WIDTH: u16 = 50;
const FORM_HEIGHT: u16 = 14;

pub fn render(frame: &mut Frame, area: Rect, form: &LoginForm) {
    let card = super::centered(area, FORM_WIDTH, FORM_HEIGHT);
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
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let [heading, email, password, _, hints] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Sign in to continue",
            Style::default().fg(Color::White),
        )))
        .alignment(Alignment::Center),
        heading,
    );

    render_field(
        frame,
        email,
        "Email",
        form.email.clone(),
        form.focus == FormField::Email,
    );
    render_field(
        frame,
        password,
        "Password",
        masked(&form.password),
        form.focus == FormField::Password,
    );

    frame.render_widget(
        Paragraph::new(hint_lines()).alignment(Alignment::Center),
        hints,
    );
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: String, focused: bool) {
    let border = if focused { COLOR_ACTIVE } else { COLOR_BORDER };
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));

    let mut spans = vec![Span::raw(value)];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(COLOR_ACTIVE)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// The password as it appears on screen.
pub fn masked(password: &str) -> String {
    std::iter::repeat(MASK_CHAR)
        .take(password.chars().count())
        .collect()
}

fn hint_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Log in  "),
            Span::styled("[Tab]", Style::default().fg(Color::Green)),
            Span::raw(" Switch field  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red)),
            Span::raw(" Quit"),
        ]),
        Line::from(Span::styled(
            "Your password is never stored.",
            Style::default().fg(COLOR_DIM),
        )),
    ]
}
