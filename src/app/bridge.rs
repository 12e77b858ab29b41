//! UI event bridge.
//!
//! Uses an `embassy-sync` bounded channel to carry [`UiEvent`]s from the
//! UI thread to the event task. The producer side never blocks: a full
//! queue drops the event with a warning.
//!
//! ```text
//! ┌──────────────┐   UiEvent   ┌──────────────┐
//! │   UI thread  │───────────▶│  Event task   │──▶ AppService
//! │   (post)     │  depth = 8  │  (receive)    │
//! └──────────────┘             └──────────────┘
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use log::warn;

use super::commands::UiEvent;
use crate::error::BridgeError;

/// Queue depth for inbound UI events.
pub const UI_EVENT_DEPTH: usize = 8;

pub struct UiBridge {
    channel: Channel<CriticalSectionRawMutex, UiEvent, UI_EVENT_DEPTH>,
}

impl UiBridge {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Queue an event for the event task. Callable from any thread.
    pub fn post(&self, event: UiEvent) -> Result<(), BridgeError> {
        self.channel.try_send(event).map_err(|_| {
            warn!("UI: event queue full, dropping {event:?}");
            BridgeError::QueueFull
        })
    }

    /// Wait for the next event.
    pub async fn receive(&self) -> UiEvent {
        self.channel.receive().await
    }

    pub fn try_receive(&self) -> Option<UiEvent> {
        self.channel.try_receive().ok()
    }

    pub fn pending(&self) -> usize {
        self.channel.len()
    }
}

impl Default for UiBridge {
    fn default() -> Self {
        Self::new()
    }
}
