//! Game configuration
//!
//! Everything the host hands to `GameLoop::start`. The color fields are
//! opaque CSS strings the simulation never looks at; only paddle width and
//! starting lives affect physics. Persisted to LocalStorage on the web.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Configuration for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Paddle width in field units, clamped to [20, 300]
    pub paddle_width: f32,
    pub ball_color: String,
    pub paddle_color: String,
    /// Row colors, cycled by row index modulo the list length
    pub brick_colors: Vec<String>,
    pub background_color: String,
    pub starting_lives: u8,
    /// Attach mouse control in addition to keyboard and touch
    pub enable_mouse: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_DEFAULT_WIDTH,
            ball_color: "#0095DD".to_string(),
            paddle_color: "#0095DD".to_string(),
            brick_colors: vec![
                "#0095DD".to_string(),
                "#DD9500".to_string(),
                "#95DD00".to_string(),
            ],
            background_color: "#eee".to_string(),
            starting_lives: DEFAULT_LIVES,
            enable_mouse: true,
        }
    }
}

impl GameConfig {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "brickout_config";

    /// Clamp out-of-range values instead of rejecting them. An empty brick
    /// color list falls back to the defaults so row cycling never divides
    /// by zero.
    pub fn sanitized(mut self) -> Self {
        self.paddle_width = self.paddle_width.clamp(PADDLE_MIN_WIDTH, PADDLE_MAX_WIDTH);
        self.starting_lives = self.starting_lives.max(1);
        if self.brick_colors.is_empty() {
            self.brick_colors = Self::default().brick_colors;
        }
        self
    }

    /// Color for a brick row, cycling through the configured list
    pub fn brick_color(&self, row: usize) -> &str {
        &self.brick_colors[row % self.brick_colors.len()]
    }

    /// Load the stored config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(config) = serde_json::from_str::<GameConfig>(&json) {
                    log::info!("Loaded config from LocalStorage");
                    return config.sanitized();
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Save the config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Config saved");
            }
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
