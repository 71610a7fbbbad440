//! Game settings and preferences
//!
//! Persisted as JSON in LocalStorage, separate from the best score.

use serde::{Deserialize, Serialize};

use crate::tuning::DeviceClass;

/// Which difficulty profile to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DifficultyOverride {
    /// Pick from the detected device class
    #[default]
    Auto,
    Compact,
    Standard,
}

impl DifficultyOverride {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyOverride::Auto => "Auto",
            DifficultyOverride::Compact => "Compact",
            DifficultyOverride::Standard => "Standard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(DifficultyOverride::Auto),
            "compact" | "mobile" => Some(DifficultyOverride::Compact),
            "standard" | "desktop" => Some(DifficultyOverride::Standard),
            _ => None,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty profile selection
    pub difficulty: DifficultyOverride,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: DifficultyOverride::Auto,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Device class after applying the override
    pub fn device_class(&self, detected: DeviceClass) -> DeviceClass {
        match self.difficulty {
            DifficultyOverride::Auto => detected,
            DifficultyOverride::Compact => DeviceClass::Compact,
            DifficultyOverride::Standard => DeviceClass::Standard,
        }
    }

    /// Effective cue volume (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Flip the mute flag, returning the new state
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Parse settings JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            log::warn!("Bad settings JSON ({}), using defaults", e);
            Self::default()
        })
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "coin_flap_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Persist to LocalStorage (WASM only); failures are logged and dropped
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not encode settings: {}", e);
                return;
            }
        };
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };
        match storage.set_item(Self::STORAGE_KEY, &json) {
            Ok(()) => log::info!("Settings saved (muted: {})", self.muted),
            Err(_) => log::warn!("LocalStorage rejected settings"),
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
