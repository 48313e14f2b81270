//! Picks the nav theme from the section under the trigger line.

/// A section's vertical extent in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub height: f64,
    /// Section declares the light theme.
    pub light: bool,
}

impl SectionBox {
    pub fn crosses(&self, line: f64) -> bool {
        self.top <= line && self.top + self.height > line
    }
}

/// Index of the section crossing `line`. When several overlap the line the
/// last one in document order is taken.
pub fn crossing_section(sections: &[SectionBox], line: f64) -> Option<usize> {
    sections
        .iter()
        .enumerate()
        .filter(|(_, section)| section.crosses(line))
        .map(|(idx, _)| idx)
        .last()
}

/// Whether the navigation bar should switch to its dark variant.
pub fn nav_is_dark(sections: &[SectionBox], line: f64) -> bool {
    crossing_section(sections, line).is_some_and(|idx| sections[idx].light)
}
