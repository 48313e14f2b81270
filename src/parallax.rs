//! Hero background parallax with one recompute per animation frame.
//!
//! Inputs only mark the state dirty. The caller schedules a frame when
//! [`Parallax::set_scroll`] or [`Parallax::set_pointer`] report the clean to
//! dirty edge, and the frame callback drains the state with
//! [`Parallax::take_frame`].

use crate::css;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

impl Translation {
    pub fn to_css(self) -> String {
        css::translate3d(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parallax {
    scroll_factor: f64,
    pointer_factor: f64,
    scroll_y: f64,
    /// Pointer offset from the viewport centre, roughly in `[-1, 1]`.
    pointer_x: f64,
    pointer_y: f64,
    dirty: bool,
}

impl Parallax {
    pub fn new(scroll_factor: f64, pointer_factor: f64) -> Self {
        Self {
            scroll_factor,
            pointer_factor,
            scroll_y: 0.0,
            pointer_x: 0.0,
            pointer_y: 0.0,
            dirty: false,
        }
    }

    /// Records the page scroll. Returns true when a frame must be scheduled.
    pub fn set_scroll(&mut self, scroll_y: f64) -> bool {
        self.scroll_y = scroll_y;
        self.mark_dirty()
    }

    /// Records a pointer position in client coordinates against the viewport
    /// size. Returns true when a frame must be scheduled.
    pub fn set_pointer(
        &mut self,
        client_x: f64,
        client_y: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) -> bool {
        self.pointer_x = centred(client_x, viewport_width / 2.0);
        self.pointer_y = centred(client_y, viewport_height / 2.0);
        self.mark_dirty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears the dirty flag and returns the translation to apply, or `None`
    /// when nothing changed or the hero has scrolled out of view. In the latter
    /// case the previous transform is meant to stay in place.
    pub fn take_frame(&mut self, hero_height: f64) -> Option<Translation> {
        if !std::mem::take(&mut self.dirty) {
            return None;
        }
        if self.scroll_y > hero_height {
            return None;
        }
        Some(self.translation())
    }

    pub fn translation(&self) -> Translation {
        Translation {
            x: -(self.pointer_x * self.pointer_factor),
            y: self.scroll_y * self.scroll_factor + self.pointer_y * self.pointer_factor,
        }
    }

    fn mark_dirty(&mut self) -> bool {
        !std::mem::replace(&mut self.dirty, true)
    }
}

fn centred(coord: f64, centre: f64) -> f64 {
    if centre > 0.0 {
        (coord - centre) / centre
    } else {
        0.0
    }
}
