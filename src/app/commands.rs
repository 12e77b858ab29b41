//! Inbound UI events.
//!
//! These represent user actions delivered by the graphics toolkit's
//! dispatch (button matrix, slider, back button). The
//! [`AppService`](super::service::AppService) interprets and acts upon them.

use super::mode::Mode;

/// Events the UI bridge can deliver into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A mode button on the menu was pressed.
    ModeSelected(Mode),

    /// The manual-page slider moved. Carries the slider position (0–100).
    IntensityChanged(u8),

    /// The back button was pressed on either mode page.
    ReturnRequested,
}
