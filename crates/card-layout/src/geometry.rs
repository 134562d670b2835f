//! Card coordinate system
//!
//! Element positions are stored in millimeters relative to the card's
//! top-left corner. Preview surfaces draw them in CSS pixels at an
//! arbitrary zoom; this module is the single place that mapping lives.

use crate::constants::{DEFAULT_FONT_SIZE, MM_TO_PX};
use crate::style::Element;

/// An axis-aligned rectangle with a top-left origin.
///
/// Units depend on context: millimeters for card and page geometry,
/// pixels once mapped through a [`Viewport`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether a point lies inside the rectangle (edges inclusive)
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Whether `other` lies entirely inside this rectangle, within `tolerance`
    pub fn encloses(&self, other: &Rect, tolerance: f64) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }
}

/// Maps millimeter geometry to pixel space at a zoom factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Viewport {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// Pixels per millimeter at this zoom
    pub fn px_per_mm(&self) -> f64 {
        MM_TO_PX * self.scale
    }

    pub fn to_px(&self, mm: f64) -> f64 {
        mm * self.px_per_mm()
    }

    /// Inverse of [`Viewport::to_px`], used when an editor drag reports pixels
    pub fn to_mm(&self, px: f64) -> f64 {
        px / self.px_per_mm()
    }

    pub fn rect_to_px(&self, rect: &Rect) -> Rect {
        Rect::new(
            self.to_px(rect.x),
            self.to_px(rect.y),
            self.to_px(rect.width),
            self.to_px(rect.height),
        )
    }

    pub fn rect_to_mm(&self, rect: &Rect) -> Rect {
        Rect::new(
            self.to_mm(rect.x),
            self.to_mm(rect.y),
            self.to_mm(rect.width),
            self.to_mm(rect.height),
        )
    }

    /// Pixel size of a whole card face
    pub fn card_size_px(&self, width_mm: f64, height_mm: f64) -> (f64, f64) {
        (self.to_px(width_mm), self.to_px(height_mm))
    }

    /// Pixel bounds of an element on the card canvas
    pub fn element_bounds_px(&self, element: &Element) -> Rect {
        self.rect_to_px(&element.bounds())
    }

    /// Font sizes are authored in pixels at scale 1 and only follow the zoom
    pub fn font_size_px(&self, font_size: Option<f64>) -> f64 {
        font_size.unwrap_or(DEFAULT_FONT_SIZE) * self.scale
    }

    /// Zoom that fits a card of the given size into a pixel box
    pub fn fit(width_mm: f64, height_mm: f64, max_width_px: f64, max_height_px: f64) -> Self {
        let sx = max_width_px / (width_mm * MM_TO_PX);
        let sy = max_height_px / (height_mm * MM_TO_PX);
        Self::new(sx.min(sy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_at_zoom() {
        let vp = Viewport::new(2.5);
        let mm = 17.25;
        assert!((vp.to_mm(vp.to_px(mm)) - mm).abs() < 1e-9);
    }

    #[test]
    fn test_poker_card_at_unit_scale() {
        let (w, h) = Viewport::default().card_size_px(63.5, 88.9);
        assert!((w - 240.0).abs() < 0.01);
        assert!((h - 336.0).abs() < 0.01);
    }

    #[test]
    fn test_fit_picks_limiting_axis() {
        let vp = Viewport::fit(63.5, 88.9, 1000.0, 336.0);
        assert!((vp.scale - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_font_size_default_and_scale() {
        let vp = Viewport::new(2.0);
        assert_eq!(vp.font_size_px(None), 24.0);
        assert_eq!(vp.font_size_px(Some(9.0)), 18.0);
    }

    #[test]
    fn test_rect_encloses_with_tolerance() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(outer.encloses(&Rect::new(0.0, 0.0, 10.0, 10.0), 0.0));
        assert!(outer.encloses(&Rect::new(-0.001, 0.0, 10.0, 10.0), 0.01));
        assert!(!outer.encloses(&Rect::new(5.0, 5.0, 6.0, 1.0), 0.01));
        assert!(outer.contains(10.0, 0.0));
    }
}
