//! Text panel trait

/// Errors that can occur while updating a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus communication failed
    Communication,
    /// Display not initialized
    NotInitialized,
}

/// A small display showing a title line and a message line
///
/// Pixel layout, fonts and controller quirks belong to the implementation.
pub trait Panel {
    /// Replace the panel contents with `title` and `message`
    fn draw(&mut self, title: &str, message: &str) -> Result<(), DisplayError>;

    /// Clear the panel
    fn blank(&mut self) -> Result<(), DisplayError>;
}
