//! Selectors and tuning constants shared by every effect.
//!
//! The host page is the only collaborator, so "configuration" is just the set
//! of selectors it is expected to expose plus a handful of motion factors.
//! [`FxConfig::default`] matches the stock page markup.

use crate::error::FxError;

/// Class toggled on navigation items to mark the current selection.
pub const ACTIVE_CLASS: &str = "active";
/// Class toggled on the navigation bar while a light section is under it.
pub const DARK_MODE_CLASS: &str = "nav-dark-mode";
/// Value of the section theme attribute that turns the nav dark.
pub const LIGHT_THEME: &str = "light";

#[derive(Debug, Clone, PartialEq)]
pub struct FxConfig {
    /// Elements that react to the pointer and receive preset classes.
    pub surface_selector: &'static str,
    /// The navigation bar that carries the dark-mode flag.
    pub nav_selector: &'static str,
    pub nav_item_selector: &'static str,
    pub turbulence_selector: &'static str,
    pub displacement_selector: &'static str,
    /// Overlay child of a surface painted with the pointer highlight.
    pub specular_selector: &'static str,
    pub section_selector: &'static str,
    pub hero_id: &'static str,
    pub hero_bg_selector: &'static str,
    pub style_attr: &'static str,
    pub theme_attr: &'static str,
    /// Viewport y coordinate of the line that decides the nav theme.
    pub trigger_offset: f64,
    /// Fraction of the page scroll applied to the hero background.
    pub scroll_factor: f64,
    /// Pixels of travel for a pointer at the viewport edge.
    pub pointer_factor: f64,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            surface_selector: ".glass-sidebar, .glass-nav",
            nav_selector: ".glass-nav",
            nav_item_selector: ".nav-item",
            turbulence_selector: "#glass-distortion feTurbulence",
            displacement_selector: "#glass-distortion feDisplacementMap",
            specular_selector: ".glass-specular",
            section_selector: "section, footer",
            hero_id: "hero",
            hero_bg_selector: ".hero-bg",
            style_attr: "data-style",
            theme_attr: "data-theme",
            trigger_offset: 50.0,
            scroll_factor: 0.5,
            pointer_factor: 20.0,
        }
    }
}

impl FxConfig {
    pub fn validate(&self) -> Result<(), FxError> {
        let selectors = [
            ("surface_selector", self.surface_selector),
            ("nav_selector", self.nav_selector),
            ("nav_item_selector", self.nav_item_selector),
            ("turbulence_selector", self.turbulence_selector),
            ("displacement_selector", self.displacement_selector),
            ("specular_selector", self.specular_selector),
            ("section_selector", self.section_selector),
            ("hero_id", self.hero_id),
            ("hero_bg_selector", self.hero_bg_selector),
            ("style_attr", self.style_attr),
            ("theme_attr", self.theme_attr),
        ];
        for (field, selector) in selectors {
            if selector.trim().is_empty() {
                return Err(FxError::InvalidConfig {
                    field,
                    reason: "must not be empty",
                });
            }
        }

        let factors = [
            ("trigger_offset", self.trigger_offset),
            ("scroll_factor", self.scroll_factor),
            ("pointer_factor", self.pointer_factor),
        ];
        for (field, value) in factors {
            if !value.is_finite() {
                return Err(FxError::InvalidConfig {
                    field,
                    reason: "must be finite",
                });
            }
        }
        Ok(())
    }
}
