//! Terminal event loop.

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tracing::{debug, warn};

use super::controller::{Alert, ViewController, ViewState};
use super::input::{map_key, Action};
use crate::traits::{HttpClient, PushProvider, SecureStore};
use crate::ui;

/// Spinner frame interval.
const TICK: Duration = Duration::from_millis(120);

/// Run the screen until the user quits.
///
/// Login and logout are awaited inline after a loading frame has been
/// drawn; key presses are not read while they run.
pub async fn run<B, S, H, P>(
    terminal: &mut Terminal<B>,
    controller: &mut ViewController<S, H, P>,
) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
    S: SecureStore,
    H: HttpClient,
    P: PushProvider,
{
    let mut tick: usize = 0;

    if controller.state() == ViewState::Loading {
        terminal.draw(|f| ui::render(f, controller, tick))?;
        controller.initialize().await;
    }

    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK);

    loop {
        terminal.draw(|f| ui::render(f, controller, tick))?;

        let event = tokio::select! {
            _ = ticker.tick() => {
                tick = tick.wrapping_add(1);
                continue;
            }
            event = events.next() => event,
        };

        let key = match event {
            Some(Ok(Event::Key(key))) => key,
            Some(Ok(_)) => continue,
            Some(Err(e)) => return Err(e.into()),
            None => return Ok(()),
        };

        let alert_open = controller.current_alert().is_some();
        let Some(action) = map_key(controller.state(), alert_open, key) else {
            continue;
        };
        debug!(?action, "Key action");

        match action {
            Action::Quit => return Ok(()),
            Action::DismissAlert => {
                controller.dismiss_alert();
            }
            Action::ToggleFocus => controller.toggle_focus(),
            Action::Input(c) => controller.push_char(c),
            Action::Backspace => controller.pop_char(),
            Action::Submit => {
                terminal.draw(|f| ui::render_busy(f, "Signing in...", tick))?;
                controller.login().await;
            }
            Action::Logout => {
                terminal.draw(|f| ui::render_busy(f, "Signing out...", tick))?;
                controller.logout().await;
            }
            Action::OpenApp => {
                if let Err(e) = webbrowser::open(controller.app_url()) {
                    warn!(error = %e, "Failed to open browser");
                    controller.raise_alert(Alert::new(
                        "Browser Error",
                        format!("Open {} manually.", controller.app_url()),
                    ));
                }
            }
        }
    }
}
