use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::gateway::GatewayEvent;

/// Everything the screen loop reacts to, delivered on one channel.
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    /// Terminal size changed; the next draw picks it up.
    Resize,
    /// A backend call finished.
    Gateway(GatewayEvent),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                // Short poll timeout so ticks stay regular
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        let sent = match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                            Ok(Event::Resize(_, _)) => event_tx.send(AppEvent::Resize),
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!("Terminal event read failed: {}", err);
                                break;
                            }
                        };
                        if sent.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!("Terminal event poll failed: {}", err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
