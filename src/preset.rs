//! Named glass styles selectable from the navigation.

/// One glass look: a surface class plus the distortion filter parameters.
///
/// Frequencies and scales are kept as the exact strings written to the SVG
/// filter so that nothing is lost to float formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePreset {
    pub id: &'static str,
    /// Class added to every surface; empty for the stock look.
    pub class_name: &'static str,
    pub base_frequency: &'static str,
    pub scale: &'static str,
}

pub const DEFAULT: StylePreset = StylePreset {
    id: "default",
    class_name: "",
    base_frequency: "0.008",
    scale: "77",
};

pub const LIQUID: StylePreset = StylePreset {
    id: "liquid",
    class_name: "style-liquid",
    base_frequency: "0.001",
    scale: "200",
};

pub const GLACIER: StylePreset = StylePreset {
    id: "glacier",
    class_name: "style-glacier",
    base_frequency: "0.02",
    scale: "90",
};

pub static PRESETS: [StylePreset; 3] = [DEFAULT, LIQUID, GLACIER];

impl StylePreset {
    /// Looks up a preset by the value of a nav item's style attribute.
    pub fn find(id: &str) -> Option<&'static StylePreset> {
        PRESETS.iter().find(|preset| preset.id == id)
    }

    pub fn has_class(&self) -> bool {
        !self.class_name.is_empty()
    }
}

/// Every class a preset may leave behind on a surface.
pub fn preset_classes() -> impl Iterator<Item = &'static str> {
    PRESETS
        .iter()
        .map(|preset| preset.class_name)
        .filter(|class| !class.is_empty())
}
