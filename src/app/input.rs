//! Key bindings for the shell screen.
//!
//! Mapping is a pure function of the view state so it can be tested without
//! a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::controller::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Submit the login form
    Submit,
    ToggleFocus,
    Input(char),
    Backspace,
    /// Hand the web app URL to the system browser
    OpenApp,
    Logout,
    DismissAlert,
}

/// Map a key press to an action.
///
/// While an alert is open only dismissing it (or quitting) is possible.
pub fn map_key(state: ViewState, alert_open: bool, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if alert_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissAlert),
            _ => None,
        };
    }

    match state {
        ViewState::Loading => None,
        ViewState::LoggedOut => map_login_key(key),
        ViewState::LoggedIn => match key.code {
            KeyCode::Enter | KeyCode::Char('o') | KeyCode::Char('O') => Some(Action::OpenApp),
            KeyCode::Char('l') | KeyCode::Char('L') => Some(Action::Logout),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
    }
}

fn map_login_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => Some(Action::ToggleFocus),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(Action::Input(c))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for state in [ViewState::Loading, ViewState::LoggedOut, ViewState::LoggedIn] {
            assert_eq!(map_key(state, false, key), Some(Action::Quit));
            assert_eq!(map_key(state, true, key), Some(Action::Quit));
        }
    }

    #[test]
    fn test_login_form_keys() {
        let s = ViewState::LoggedOut;
        assert_eq!(map_key(s, false, press(KeyCode::Enter)), Some(Action::Submit));
        assert_eq!(map_key(s, false, press(KeyCode::Tab)), Some(Action::ToggleFocus));
        assert_eq!(map_key(s, false, press(KeyCode::Backspace)), Some(Action::Backspace));
        assert_eq!(map_key(s, false, press(KeyCode::Char('l'))), Some(Action::Input('l')));
        assert_eq!(
            map_key(s, false, KeyEvent::new(KeyCode::Char('@'), KeyModifiers::SHIFT)),
            Some(Action::Input('@'))
        );
    }

    #[test]
    fn test_logged_in_keys() {
        let s = ViewState::LoggedIn;
        assert_eq!(map_key(s, false, press(KeyCode::Enter)), Some(Action::OpenApp));
        assert_eq!(map_key(s, false, press(KeyCode::Char('l'))), Some(Action::Logout));
        assert_eq!(map_key(s, false, press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_key(s, false, press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_loading_ignores_input() {
        assert_eq!(map_key(ViewState::Loading, false, press(KeyCode::Enter)), None);
        assert_eq!(map_key(ViewState::Loading, false, press(KeyCode::Char('a'))), None);
    }

    #[test]
    fn test_alert_captures_keys() {
        let s = ViewState::LoggedOut;
        assert_eq!(map_key(s, true, press(KeyCode::Enter)), Some(Action::DismissAlert));
        assert_eq!(map_key(s, true, press(KeyCode::Esc)), Some(Action::DismissAlert));
        assert_eq!(map_key(s, true, press(KeyCode::Char('a'))), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(ViewState::LoggedOut, false, key), None);
    }
}
