//! Async event pump.
//!
//! Two background tasks feed one unbounded channel: a crossterm
//! [`EventStream`] reader (key presses and resizes) and a periodic tick for
//! animations. Repository loads and delayed effects complete through the same
//! channel via [`EventHandler::sender`], so the application loop drains a
//! single receiver.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::content::{Post, PostMeta};
use crate::error::FolioError;

/// Interval driving the loading spinner.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Everything the application loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    /// The post listing for an earlier request finished loading.
    PostsLoaded {
        request_id: u64,
        result: Result<Vec<PostMeta>, FolioError>,
    },
    /// A single post body finished loading.
    PostLoaded {
        request_id: u64,
        result: Result<Option<Arc<Post>>, FolioError>,
    },
    /// A delayed booking effect fired.
    OpenBooking,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let tx_events = tx.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            loop {
                match reader.next().await {
                    Some(Ok(event)) => {
                        let app_event = match event {
                            // Key repeats and releases would double-fire on
                            // Windows terminals.
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                Some(AppEvent::Key(key))
                            }
                            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(event) = app_event {
                            if tx_events.send(event).is_err() {
                                break;
                            }
                        }
                    }
                    Some(Err(_)) => continue,
                    None => break,
                }
            }
        });

        let tx_tick = tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            loop {
                interval.tick().await;
                if tx_tick.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, tx }
    }

    /// Sender for tasks that complete work off the input path.
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        EventHandler::new()
    }
}
