//! Text-only UI surface.
//!
//! Implements [`DisplayPort`] by keeping the current page and label texts
//! in memory and logging every change. Stands in for the graphics toolkit
//! on the host; the last texts can be inspected for testing.

use log::info;

use crate::app::display::LabelText;
use crate::app::ports::{DisplayPort, Page};

#[derive(Default)]
pub struct LabelDisplay {
    page: Option<Page>,
    prompt: LabelText,
    luminosity: LabelText,
    intensity: LabelText,
    page_switches: u32,
    text_writes: u32,
}

impl LabelDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page currently shown, `None` before the first `show_page`.
    pub fn page(&self) -> Option<Page> {
        self.page
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn luminosity(&self) -> &str {
        &self.luminosity
    }

    pub fn intensity(&self) -> &str {
        &self.intensity
    }

    pub fn page_switches(&self) -> u32 {
        self.page_switches
    }

    /// Label writes of any kind since construction.
    pub fn text_writes(&self) -> u32 {
        self.text_writes
    }

    fn store(slot: &mut LabelText, text: &str) {
        slot.clear();
        // Labels are produced by the formatters in `app::display`, which
        // already fit the buffer; truncate anything else.
        for c in text.chars() {
            if slot.push(c).is_err() {
                break;
            }
        }
    }
}

impl DisplayPort for LabelDisplay {
    fn show_page(&mut self, page: Page) {
        self.page = Some(page);
        self.page_switches += 1;
        // Widgets of the old page are gone.
        self.prompt.clear();
        self.luminosity.clear();
        self.intensity.clear();
        info!("UI | page {:?}", page);
    }

    fn set_prompt_text(&mut self, text: &str) {
        Self::store(&mut self.prompt, text);
        self.text_writes += 1;
        info!("UI | {}", text);
    }

    fn set_luminosity_text(&mut self, text: &str) {
        Self::store(&mut self.luminosity, text);
        self.text_writes += 1;
        info!("UI | {}", text);
    }

    fn set_intensity_text(&mut self, text: &str) {
        Self::store(&mut self.intensity, text);
        self.text_writes += 1;
        info!("UI | {}", text);
    }
}
