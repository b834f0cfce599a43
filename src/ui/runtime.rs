use crate::config::UiConfig;
use crate::gateway::{GatewayWorker, RecordGateway};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::screen::InventoryScreen;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// Run the inventory screen until the user quits.
///
/// Gateway calls run on a tokio runtime; the screen loop itself stays on
/// this thread and only ever blocks on the event channel.
pub fn run(gateway: RecordGateway, ui: &UiConfig) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let tick_rate = Duration::from_millis(ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let (commands, worker) = GatewayWorker::channel(gateway);
    let gateway_tx = events.sender();
    runtime.spawn(worker.run(move |event| {
        if gateway_tx.send(AppEvent::Gateway(event)).is_err() {
            tracing::debug!("screen loop gone, dropping gateway event");
        }
    }));

    let mut screen = InventoryScreen::new(ui.initial_status);
    screen.set_command_sender(commands);

    let (mut terminal, guard) = setup_terminal()?;
    screen.initialize();

    loop {
        terminal.draw(|frame| draw(frame, &screen))?;
        if screen.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut screen, key),
            Ok(AppEvent::Gateway(event)) => screen.on_gateway_event(event),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // Dropping the screen closes the command channel and stops the worker.
    drop(screen);
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    Ok(())
}
