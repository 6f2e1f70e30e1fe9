//! Two-panel display surface
//!
//! Panel 0 (primary) mirrors switch and button presses, panel 1
//! (secondary) mirrors encoder rotation. Either panel may be missing.

use heapless::String;

use crate::traits::Panel;

/// Number of panel slots
pub const PANEL_COUNT: usize = 2;
/// Longest title or message kept per line, in bytes
pub const MAX_LINE_LEN: usize = 32;

/// Idle view titles, indexed by panel
pub const IDLE_TITLES: [&str; PANEL_COUNT] = ["C-Panel", "Ready"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelId {
    Primary,
    Secondary,
}

impl PanelId {
    pub const ALL: [PanelId; PANEL_COUNT] = [PanelId::Primary, PanelId::Secondary];

    pub const fn index(self) -> usize {
        match self {
            PanelId::Primary => 0,
            PanelId::Secondary => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Content {
    title: String<MAX_LINE_LEN>,
    message: String<MAX_LINE_LEN>,
}

impl Content {
    fn new(title: &str, message: &str) -> Self {
        Self {
            title: truncated(title),
            message: truncated(message),
        }
    }
}

fn truncated(text: &str) -> String<MAX_LINE_LEN> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Owns the panels and remembers what each one shows
pub struct DisplaySurface<P> {
    panels: [Option<P>; PANEL_COUNT],
    shown: [Option<Content>; PANEL_COUNT],
}

impl<P: Panel> DisplaySurface<P> {
    pub fn new(primary: Option<P>, secondary: Option<P>) -> Self {
        Self {
            panels: [primary, secondary],
            shown: [None, None],
        }
    }

    pub fn is_present(&self, id: PanelId) -> bool {
        self.panels[id.index()].is_some()
    }

    pub fn panel(&self, id: PanelId) -> Option<&P> {
        self.panels[id.index()].as_ref()
    }

    /// Title and message currently on the panel, if known
    pub fn contents(&self, id: PanelId) -> Option<(&str, &str)> {
        self.shown[id.index()]
            .as_ref()
            .map(|c| (c.title.as_str(), c.message.as_str()))
    }

    /// Show `title` and `message` on one panel
    ///
    /// Missing panels are skipped. Identical content is not redrawn. A
    /// failed write leaves the cache empty so the next draw retries.
    pub fn draw(&mut self, id: PanelId, title: &str, message: &str) {
        let slot = id.index();
        let Some(panel) = self.panels[slot].as_mut() else {
            return;
        };
        let content = Content::new(title, message);
        if self.shown[slot].as_ref() == Some(&content) {
            return;
        }
        self.shown[slot] = match panel.draw(&content.title, &content.message) {
            Ok(()) => Some(content),
            Err(_) => None,
        };
    }

    /// Put every present panel back on its idle view
    pub fn reset_to_idle(&mut self) {
        for id in PanelId::ALL {
            self.draw(id, IDLE_TITLES[id.index()], "");
        }
    }
}
