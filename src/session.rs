//! State that outlives a single event within one page session.

use crate::config::FxConfig;
use crate::parallax::Parallax;
use crate::preset::{self, StylePreset};

/// Per-page controller shared by every handler.
#[derive(Debug, Clone)]
pub struct Session {
    config: FxConfig,
    preset: &'static StylePreset,
    pub parallax: Parallax,
}

impl Session {
    pub fn new(config: FxConfig) -> Self {
        let parallax = Parallax::new(config.scroll_factor, config.pointer_factor);
        Self {
            config,
            preset: &preset::DEFAULT,
            parallax,
        }
    }

    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    /// Displacement scale restored when the pointer leaves a surface.
    pub fn base_scale(&self) -> &'static str {
        self.preset.scale
    }

    pub fn current_preset(&self) -> &'static StylePreset {
        self.preset
    }

    pub fn apply_preset(&mut self, preset: &'static StylePreset) {
        self.preset = preset;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FxConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_scale_tracks_last_preset() {
        let mut session = Session::default();
        assert_eq!(session.base_scale(), "77");
        session.apply_preset(&preset::GLACIER);
        assert_eq!(session.base_scale(), "90");
        session.apply_preset(&preset::DEFAULT);
        assert_eq!(session.base_scale(), "77");
    }
}
