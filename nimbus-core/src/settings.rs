//! Persisted lamp settings
//!
//! Snapshot of the lamp state that survives a reboot, so the control board
//! can announce the last colour and mode to the LED board on startup.
//! Stored as postcard binary data; where the bytes live is up to the caller.
//!
//! The LED board firmware in this workspace keeps no settings. This record
//! is the format for the control board's settings store, which lives
//! outside the workspace.

use serde::{Deserialize, Serialize};

use crate::state::LampState;

/// Magic number to identify valid settings data
pub const SETTINGS_MAGIC: u32 = 0x4E4D4253; // "NMBS"

/// Current settings data version
pub const SETTINGS_VERSION: u8 = 1;

/// Upper bound of an encoded settings record
pub const MAX_SETTINGS_SIZE: usize = 32;

/// Settings persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Output buffer too small
    BufferTooSmall,
    /// Bytes do not decode as a settings record
    Deserialize,
    /// Record does not carry the settings magic number
    BadMagic,
    /// Record written by an incompatible firmware version
    VersionMismatch,
}

/// Versioned settings record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LampSettings {
    magic: u32,
    version: u8,
    /// Saved colour and mode
    pub state: LampState,
}

impl LampSettings {
    /// Create a record for the given state
    pub const fn new(state: LampState) -> Self {
        Self {
            magic: SETTINGS_MAGIC,
            version: SETTINGS_VERSION,
            state,
        }
    }

    /// Encode into `buf`, returning the used prefix
    pub fn encode<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], SettingsError> {
        postcard::to_slice(self, buf).map_err(|_| SettingsError::BufferTooSmall)
    }

    /// Decode and validate a record
    pub fn decode(bytes: &[u8]) -> Result<Self, SettingsError> {
        let settings: Self =
            postcard::from_bytes(bytes).map_err(|_| SettingsError::Deserialize)?;
        if settings.magic != SETTINGS_MAGIC {
            return Err(SettingsError::BadMagic);
        }
        if settings.version != SETTINGS_VERSION {
            return Err(SettingsError::VersionMismatch);
        }
        Ok(settings)
    }
}

impl From<LampState> for LampSettings {
    fn from(state: LampState) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Rgb;

    #[test]
    fn test_settings_survive_encoding() {
        let settings = LampSettings::new(LampState::new(Rgb::new(255, 128, 0), 3));
        let mut buf = [0u8; MAX_SETTINGS_SIZE];
        let used = settings.encode(&mut buf).unwrap().len();

        let decoded = LampSettings::decode(&buf[..used]).unwrap();
        assert_eq!(decoded.state.color(), Rgb::new(255, 128, 0));
        assert_eq!(decoded.state.mode(), 3);
    }

    #[test]
    fn test_buffer_too_small() {
        let settings = LampSettings::from(LampState::default());
        let mut buf = [0u8; 2];
        assert_eq!(
            settings.encode(&mut buf).map(|b| b.len()),
            Err(SettingsError::BufferTooSmall)
        );
    }

    #[test]
    fn test_erased_flash_rejected() {
        let erased = [0xFFu8; MAX_SETTINGS_SIZE];
        assert!(LampSettings::decode(&erased).is_err());
    }

    #[test]
    fn test_version_mismatch() {
        let mut settings = LampSettings::new(LampState::default());
        settings.version = SETTINGS_VERSION + 1;
        let mut buf = [0u8; MAX_SETTINGS_SIZE];
        let used = settings.encode(&mut buf).unwrap().len();

        assert_eq!(
            LampSettings::decode(&buf[..used]),
            Err(SettingsError::VersionMismatch)
        );
    }

    #[test]
    fn test_bad_magic() {
        let mut settings = LampSettings::new(LampState::default());
        settings.magic = 0;
        let mut buf = [0u8; MAX_SETTINGS_SIZE];
        let used = settings.encode(&mut buf).unwrap().len();

        assert_eq!(LampSettings::decode(&buf[..used]), Err(SettingsError::BadMagic));
    }
}
