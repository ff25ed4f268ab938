use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

enum Step {
    Event(Option<AppEvent>),
    StateChanged,
    Shutdown,
}

/// Drives the UI until the user quits or shutdown is signaled.
///
/// Everything that touches the terminal runs on this task. The post fetch
/// runs elsewhere and reaches us only through the view's observable slot.
pub async fn run(mut app: App, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(POLL_INTERVAL, shutdown.clone());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let step = tokio::select! {
            event = events.next() => Step::Event(event),
            _ = app.posts_mut().changed() => Step::StateChanged,
            _ = shutdown.wait() => Step::Shutdown,
        };

        match step {
            Step::Event(Some(AppEvent::Key(key))) => handle_key(&mut app, key),
            Step::Event(Some(AppEvent::Resize(cols, rows))) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Step::StateChanged => {
                tracing::debug!(posts = app.posts().cards().len(), "Post list changed");
            }
            Step::Event(None) | Step::Shutdown => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}
