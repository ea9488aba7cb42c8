use std::time::Duration;

use tracing::info;

use crate::quote::{QuoteClient, QuoteFetcher};
use crate::ui::app::App;
use crate::ui::counter::CounterIntent;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(handle: tokio::runtime::Handle) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let client = QuoteClient::new()?;
    let quotes = QuoteFetcher::new(handle, client, events.sender());
    let mut app = App::new(quotes);
    info!("numstep started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Quote(result)) => app.dispatch(CounterIntent::QuoteFetched(result)),
            Ok(AppEvent::Tick) => {}
            // Redraw on the next loop pass picks up the new size.
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
