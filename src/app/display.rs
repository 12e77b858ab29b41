//! UI-visible state: the refresh gate plus the surface it protects.
//!
//! Everything in here is only ever touched with the UI lock held (see
//! [`AppService::with_display`](super::service::AppService::with_display)).
//! Label text is formatted into fixed-capacity buffers sized for the
//! longest label.

use core::fmt::Write;

use log::warn;

use super::mode::Mode;
use super::ports::{DisplayPort, Page};
use crate::control::gate::{RefreshGate, UpdateDecision};

const LABEL_CAPACITY: usize = 50;

/// Fixed-capacity label buffer.
pub type LabelText = heapless::String<LABEL_CAPACITY>;

pub const MENU_PROMPT: &str = "Bonjour, veuillez choisir un mode";
pub const LUMINOSITY_PLACEHOLDER: &str = "Luminosite Ambiante: ";
pub const INTENSITY_PLACEHOLDER: &str = "Intensite LED: ";

impl Page {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Automatic => Self::Automatic,
            Mode::Manual => Self::Manual,
        }
    }
}

pub fn luminosity_label(pct: f32) -> LabelText {
    format_label(format_args!("Luminosite Ambiante: {pct:.2} %"))
}

pub fn intensity_label(pct: f32) -> LabelText {
    format_label(format_args!("Intensite LED: {pct:.2} %"))
}

pub fn manual_intensity_label(percent: u8) -> LabelText {
    format_label(format_args!("Intensite LED: {percent} %"))
}

fn format_label(args: core::fmt::Arguments<'_>) -> LabelText {
    let mut text = LabelText::new();
    if text.write_fmt(args).is_err() {
        warn!("UI: label truncated to {LABEL_CAPACITY} bytes");
    }
    text
}

/// The gate and the surface, owned together so they change together.
pub struct GatedDisplay<D> {
    gate: RefreshGate,
    surface: D,
    page: Page,
}

impl<D: DisplayPort> GatedDisplay<D> {
    pub fn new(surface: D, threshold_pct: f32) -> Self {
        Self {
            gate: RefreshGate::new(threshold_pct),
            surface,
            page: Page::Menu,
        }
    }

    /// Switch pages and put the new page's labels in their initial state.
    /// Entering the automatic page forgets the last shown pair so the
    /// first reading on the new page is always drawn.
    pub fn enter_page(&mut self, page: Page) {
        self.page = page;
        self.surface.show_page(page);
        match page {
            Page::Menu => self.surface.set_prompt_text(MENU_PROMPT),
            Page::Automatic => {
                self.gate.reset();
                self.surface.set_luminosity_text(LUMINOSITY_PLACEHOLDER);
                self.surface.set_intensity_text(INTENSITY_PLACEHOLDER);
            }
            Page::Manual => self.surface.set_intensity_text(&manual_intensity_label(0)),
        }
    }

    /// Offer an automatic-mode pair. Labels are redrawn only if the gate
    /// lets the pair through.
    pub fn offer(&mut self, luminosity_pct: f32, intensity_pct: f32) -> UpdateDecision {
        let decision = self.gate.offer(luminosity_pct, intensity_pct);
        if decision == UpdateDecision::Update {
            self.surface.set_luminosity_text(&luminosity_label(luminosity_pct));
            self.surface.set_intensity_text(&intensity_label(intensity_pct));
        }
        decision
    }

    /// Manual slider feedback. Bypasses the gate and leaves its state alone.
    pub fn show_manual_intensity(&mut self, percent: u8) {
        self.surface.set_intensity_text(&manual_intensity_label(percent));
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn gate(&self) -> &RefreshGate {
        &self.gate
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }
}
