//! Strongly-typed numeric primitives for the layout engine.
//!
//! Design goals:
//! - No raw `f64` in domain logic
//! - Canvas-relative percentages never mix silently with physical pixels
//! - Conversions only via an explicit canvas or scale

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reference canvas width used when a theme supplies none.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1920.0;
/// Reference canvas height used when a theme supplies none.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 1080.0;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("value is NaN")]
    NaN,
    #[error("value is infinite")]
    Infinite,
    #[error("value is negative")]
    Negative,
}

/// A coordinate or extent expressed as a percentage of one canvas axis.
///
/// `Percent(50.0)` is half the axis, not 0.5 of it.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Percent(pub f64);

impl Percent {
    pub const ZERO: Percent = Percent(0.0);
    pub const FULL: Percent = Percent(100.0);

    /// Create a Percent with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Percent, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Percent(val))
        }
    }

    /// Convert to physical canvas pixels along an axis of `axis_px` pixels.
    #[inline]
    pub fn to_px(self, axis_px: f64) -> f64 {
        self.0 / 100.0 * axis_px
    }

    /// Inverse of [`Percent::to_px`]: express `px` as a percentage of the axis.
    /// The axis is floored at 1 so a degenerate canvas cannot divide by zero.
    #[inline]
    pub fn from_px(px: f64, axis_px: f64) -> Percent {
        Percent(px / axis_px.max(1.0) * 100.0)
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn max(self, other: Percent) -> Percent {
        Percent(self.0.max(other.0))
    }

    #[inline]
    pub fn min(self, other: Percent) -> Percent {
        Percent(self.0.min(other.0))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Percent {
    type Output = Percent;
    fn add(self, rhs: Percent) -> Percent {
        Percent(self.0 + rhs.0)
    }
}
impl Sub for Percent {
    type Output = Percent;
    fn sub(self, rhs: Percent) -> Percent {
        Percent(self.0 - rhs.0)
    }
}
impl Mul<f64> for Percent {
    type Output = Percent;
    fn mul(self, rhs: f64) -> Percent {
        Percent(self.0 * rhs)
    }
}
impl Div<f64> for Percent {
    type Output = Percent;
    fn div(self, rhs: f64) -> Percent {
        Percent(self.0 / rhs)
    }
}
impl Neg for Percent {
    type Output = Percent;
    fn neg(self) -> Percent {
        Percent(-self.0)
    }
}
impl AddAssign for Percent {
    fn add_assign(&mut self, rhs: Percent) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The single uniform scale factor mapping the reference canvas onto a
/// physical surface. Applied once as a whole-tree transform.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Scale(pub f64);

impl Scale {
    pub const IDENTITY: Scale = Scale(1.0);

    /// Create a Scale with validation (rejects NaN, infinite, negative)
    pub fn try_new(val: f64) -> Result<Scale, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Scale(val))
        }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::IDENTITY
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed-resolution reference canvas all positions are expressed
/// against. Dimensions are in reference pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    #[serde(default = "default_canvas_width")]
    pub width: f64,
    #[serde(default = "default_canvas_height")]
    pub height: f64,
}

fn default_canvas_width() -> f64 {
    DEFAULT_CANVAS_WIDTH
}
fn default_canvas_height() -> f64 {
    DEFAULT_CANVAS_HEIGHT
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl Canvas {
    /// Build a canvas from possibly-missing or degenerate dimensions.
    ///
    /// Missing dimensions fall back to 1920x1080; anything below 1 (or
    /// non-finite) is floored so aspect-ratio math never divides by zero.
    pub fn sanitized(width: Option<f64>, height: Option<f64>) -> Canvas {
        let w = width.filter(|v| v.is_finite()).unwrap_or(DEFAULT_CANVAS_WIDTH);
        let h = height.filter(|v| v.is_finite()).unwrap_or(DEFAULT_CANVAS_HEIGHT);
        Canvas {
            width: w.max(1.0),
            height: h.max(1.0),
        }
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Horizontal percent to canvas pixels.
    #[inline]
    pub fn x_px(&self, p: Percent) -> f64 {
        p.to_px(self.width)
    }

    /// Vertical percent to canvas pixels.
    #[inline]
    pub fn y_px(&self, p: Percent) -> f64 {
        p.to_px(self.height)
    }

    /// Base font size in canvas pixels for a font-size multiplier where
    /// 100 corresponds to 5% of canvas height.
    #[inline]
    pub fn font_px(&self, multiplier: f64) -> f64 {
        multiplier / 100.0 * 0.05 * self.height
    }
}

/// An axis-aligned rectangle in canvas percentages.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: Percent,
    pub y: Percent,
    pub width: Percent,
    pub height: Percent,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            x: Percent(x),
            y: Percent(y),
            width: Percent(width),
            height: Percent(height),
        }
    }

    /// Width/height of this rect in canvas pixels.
    pub fn size_px(&self, canvas: &Canvas) -> DVec2 {
        DVec2::new(canvas.x_px(self.width), canvas.y_px(self.height))
    }
}

/// Per-side values (top, right, bottom, left), CSS order.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sides<T: Default> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Copy + Default> Sides<T> {
    pub fn uniform(v: T) -> Sides<T> {
        Sides {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }
}

/// Per-corner values (top-left, top-right, bottom-right, bottom-left).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Corners<T: Default> {
    pub top_left: T,
    pub top_right: T,
    pub bottom_right: T,
    pub bottom_left: T,
}

impl<T: Copy + Default> Corners<T> {
    pub fn uniform(v: T) -> Corners<T> {
        Corners {
            top_left: v,
            top_right: v,
            bottom_right: v,
            bottom_left: v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_try_new_valid() {
        assert!(Percent::try_new(0.0).is_ok());
        assert!(Percent::try_new(150.0).is_ok());
        assert!(Percent::try_new(-3.0).is_ok());
    }

    #[test]
    fn percent_try_new_rejects_nan() {
        assert_eq!(Percent::try_new(f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn percent_try_new_rejects_infinity() {
        assert_eq!(Percent::try_new(f64::INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn percent_px_round_trip() {
        let p = Percent(25.0);
        let px = p.to_px(1080.0);
        assert_eq!(px, 270.0);
        assert_eq!(Percent::from_px(px, 1080.0), p);
    }

    #[test]
    fn percent_from_px_floors_axis() {
        // degenerate axis must not divide by zero
        let p = Percent::from_px(10.0, 0.0);
        assert!(p.is_finite());
    }

    #[test]
    fn scale_try_new_rejects_negative() {
        assert_eq!(Scale::try_new(-0.5), Err(NumericError::Negative));
    }

    #[test]
    fn canvas_sanitized_defaults() {
        let c = Canvas::sanitized(None, None);
        assert_eq!(c.width, 1920.0);
        assert_eq!(c.height, 1080.0);
    }

    #[test]
    fn canvas_sanitized_floors_degenerate() {
        let c = Canvas::sanitized(Some(0.0), Some(-5.0));
        assert_eq!(c.width, 1.0);
        assert_eq!(c.height, 1.0);
    }

    #[test]
    fn canvas_sanitized_rejects_non_finite() {
        let c = Canvas::sanitized(Some(f64::NAN), Some(f64::INFINITY));
        assert_eq!(c.width, 1920.0);
        assert_eq!(c.height, 1080.0);
    }

    #[test]
    fn font_px_multiplier_100_is_five_percent_of_height() {
        let c = Canvas::default();
        assert_eq!(c.font_px(100.0), 54.0);
        assert_eq!(c.font_px(50.0), 27.0);
    }

    #[test]
    fn rect_size_px() {
        let c = Canvas::default();
        let r = Rect::new(0.0, 3.0, 100.0, 8.0);
        let s = r.size_px(&c);
        assert_eq!(s.x, 1920.0);
        assert!((s.y - 86.4).abs() < 1e-9);
    }
}
