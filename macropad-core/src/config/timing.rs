//! Control loop timing

use serde::Deserialize;

use super::ConfigError;

/// Timing parameters, the `settings` object of the keymap
///
/// Every field is optional in JSON; missing fields take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct Timing {
    /// Inactivity before the panels return to the idle view
    pub idle_ms: u32,
    /// Sleep between control loop iterations
    pub poll_interval_ms: u32,
    /// Settle delay after a switch is released
    pub switch_settle_ms: u32,
    /// Settle delay after an encoder button is released
    pub button_settle_ms: u32,
    /// Poll period while waiting for a held input to release
    pub release_poll_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            idle_ms: 3000,
            poll_interval_ms: 5,
            switch_settle_ms: 50,
            button_settle_ms: 50,
            release_poll_ms: 1,
        }
    }
}

impl Timing {
    /// Poll periods must be non-zero so the loop always yields
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 || self.release_poll_ms == 0 {
            return Err(ConfigError::InvalidTiming);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = Timing::default();
        assert_eq!(t.idle_ms, 3000);
        assert_eq!(t.poll_interval_ms, 5);
        assert_eq!(t.switch_settle_ms, t.button_settle_ms);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_zero_poll_rejected() {
        let t = Timing {
            release_poll_ms: 0,
            ..Timing::default()
        };
        assert_eq!(t.validate(), Err(ConfigError::InvalidTiming));
    }
}
