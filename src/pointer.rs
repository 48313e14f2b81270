//! Pointer-driven distortion over glass surfaces.
//!
//! Everything here is pure geometry: the wasm layer measures the surface,
//! hands the numbers in, and writes the resulting strings back out.

use crate::css::{self, CssNumber, Rgba};

const DARK_START: Rgba = Rgba::new(0, 0, 0, 0.1);
const DARK_END: Rgba = Rgba::new(0, 0, 0, 0.0);
const LIGHT_START: Rgba = Rgba::new(255, 255, 255, 0.25);
const LIGHT_END: Rgba = Rgba::new(255, 255, 255, 0.0);

/// Viewport-space box of a surface, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// What a pointer move over a surface should write.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEffect {
    /// Local pointer position relative to the surface origin.
    pub x: f64,
    pub y: f64,
    /// Displacement scale, the smaller of the two percentage offsets.
    pub scale: f64,
    pub dark: bool,
}

impl PointerEffect {
    pub fn at(rect: SurfaceRect, client_x: f64, client_y: f64, dark: bool) -> Self {
        let x = client_x - rect.left;
        let y = client_y - rect.top;
        let scale_x = x / rect.width * 100.0;
        let scale_y = y / rect.height * 100.0;
        Self {
            x,
            y,
            scale: js_min(scale_x, scale_y),
            dark,
        }
    }

    pub fn scale_attr(&self) -> String {
        CssNumber(self.scale).to_string()
    }

    /// Background for the specular overlay.
    pub fn specular_background(&self) -> String {
        let (start, end) = if self.dark {
            (DARK_START, DARK_END)
        } else {
            (LIGHT_START, LIGHT_END)
        };
        css::radial_highlight(self.x, self.y, start, end)
    }
}

/// `Math.min` for two operands: unlike `f64::min`, a NaN operand wins.
fn js_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}
