//! Click rules for navigation items.

use crate::preset::StylePreset;

/// Link target that marks an item as a pure placeholder.
pub const PLACEHOLDER_HREF: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavClick {
    /// Swap the glass style; default navigation is suppressed.
    ApplyPreset(&'static StylePreset),
    /// Ordinary link: only the active marker moves.
    Activate,
    Ignore,
}

impl NavClick {
    /// Decides what a click on an item with the given `data-style` and `href`
    /// does. A missing `href` counts as a real link.
    pub fn classify(style: Option<&str>, href: Option<&str>) -> Self {
        if let Some(preset) = style.and_then(StylePreset::find) {
            return NavClick::ApplyPreset(preset);
        }
        if href == Some(PLACEHOLDER_HREF) {
            NavClick::Ignore
        } else {
            NavClick::Activate
        }
    }

    pub fn marks_active(&self) -> bool {
        !matches!(self, NavClick::Ignore)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::{GLACIER, LIQUID};

    #[test]
    fn recognized_style_wins_over_href() {
        assert_eq!(
            NavClick::classify(Some("liquid"), Some("#")),
            NavClick::ApplyPreset(&LIQUID)
        );
        assert_eq!(
            NavClick::classify(Some("glacier"), Some("/about")),
            NavClick::ApplyPreset(&GLACIER)
        );
    }

    #[test]
    fn plain_links_activate() {
        assert_eq!(NavClick::classify(None, Some("/blog")), NavClick::Activate);
        assert_eq!(NavClick::classify(Some("lava"), Some("#top")), NavClick::Activate);
        assert_eq!(NavClick::classify(None, None), NavClick::Activate);
    }

    #[test]
    fn placeholder_without_style_is_ignored() {
        let click = NavClick::classify(Some("lava"), Some("#"));
        assert_eq!(click, NavClick::Ignore);
        assert!(!click.marks_active());
        assert_eq!(NavClick::classify(None, Some("#")), NavClick::Ignore);
    }
}
