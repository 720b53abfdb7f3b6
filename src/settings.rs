//! Player preferences
//!
//! Persisted as JSON next to the best score.

use serde::{Deserialize, Serialize};

use crate::consts::SETTINGS_KEY;
use crate::persistence::{KeyValueStore, StorageError};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Glow halo around meteors and stars
    pub glow: bool,
    /// Reduced motion (disables glow)
    pub reduced_motion: bool,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            glow: true,
            reduced_motion: false,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Effective glow (respects reduced_motion)
    pub fn effective_glow(&self) -> bool {
        self.glow && !self.reduced_motion
    }

    /// Load settings from the store, falling back to defaults
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        match store.get(SETTINGS_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings: {e}");
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read settings: {e}");
                Self::default()
            }
        }
    }

    pub fn save<S: KeyValueStore>(&self, store: &S) -> Result<(), StorageError> {
        let json = serde_json::to_string(self)?;
        store.set(SETTINGS_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
