//! Input events serviced by the controller

/// Encoder rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise (counter increased)
    Cw,
    /// Counter-clockwise (counter decreased)
    Ccw,
}

impl Direction {
    /// Short uppercase name used in panel titles
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Cw => "CW",
            Direction::Ccw => "CCW",
        }
    }
}

/// A physical event detected during one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Switch press edge
    Switch(u8),
    /// Encoder push button press edge
    EncoderButton(u8),
    /// One rotation tick
    Rotation { encoder: u8, direction: Direction },
}
