//! String forms of the values pushed into inline styles and attributes.

use std::fmt;

/// A number as JavaScript would stringify it: shortest round-trip form, `-0`
/// collapsed to `0`, and `NaN` / `Infinity` spelled the JavaScript way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssNumber(pub f64);

impl fmt::Display for CssNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else if self.0.is_nan() {
            f.write_str("NaN")
        } else if self.0.is_infinite() {
            f.write_str(if self.0 > 0.0 { "Infinity" } else { "-Infinity" })
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// `rgba()` colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            CssNumber(self.a)
        )
    }
}

/// Circular highlight centred on `(x, y)` that fades out by 60% radius.
pub fn radial_highlight(x: f64, y: f64, start: Rgba, end: Rgba) -> String {
    format!(
        "radial-gradient(circle at {}px {}px, {start} 0%, {end} 60%)",
        CssNumber(x),
        CssNumber(y)
    )
}

pub fn translate3d(x: f64, y: f64) -> String {
    format!("translate3d({}px, {}px, 0)", CssNumber(x), CssNumber(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_trailing_zeroes_and_negative_zero() {
        assert_eq!(CssNumber(50.0).to_string(), "50");
        assert_eq!(CssNumber(-0.0).to_string(), "0");
        assert_eq!(CssNumber(12.5).to_string(), "12.5");
        assert_eq!(CssNumber(-7.25).to_string(), "-7.25");
    }

    #[test]
    fn non_finite_numbers_use_javascript_spelling() {
        assert_eq!(CssNumber(f64::NAN).to_string(), "NaN");
        assert_eq!(CssNumber(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(CssNumber(f64::NEG_INFINITY).to_string(), "-Infinity");
    }

    #[test]
    fn gradient_and_transform_strings() {
        let white = Rgba::new(255, 255, 255, 0.25);
        let clear = Rgba::new(255, 255, 255, 0.0);
        assert_eq!(
            radial_highlight(10.0, 4.5, white, clear),
            "radial-gradient(circle at 10px 4.5px, rgba(255, 255, 255, 0.25) 0%, \
             rgba(255, 255, 255, 0) 60%)"
        );
        assert_eq!(translate3d(-0.0, 105.0), "translate3d(0px, 105px, 0)");
    }
}
