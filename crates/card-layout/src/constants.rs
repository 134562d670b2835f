//! Shared constants for card geometry and pagination
//!
//! This module centralizes the unit conversions and print defaults used by
//! the resolver, the compositor and every preview surface.

// =============================================================================
// Unit Conversion
// =============================================================================

/// CSS pixels per millimeter (96 px per inch, 1 inch = 25.4mm)
pub const MM_TO_PX: f64 = 3.7795275591;

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f64) -> f64 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Card Dimensions
// =============================================================================

/// Standard poker card width (2.5")
pub const POKER_CARD_WIDTH_MM: f64 = 63.5;

/// Standard poker card height (3.5")
pub const POKER_CARD_HEIGHT_MM: f64 = 88.9;

// =============================================================================
// Grid Defaults
// =============================================================================

/// Gap between neighbouring cards on a sheet (mm)
pub const DEFAULT_CARD_SPACING_MM: f64 = 3.0;

/// Smallest margin kept between the grid and the paper edge (mm)
pub const DEFAULT_MIN_MARGIN_MM: f64 = 5.0;

/// Margin tried first by the adaptive grid strategy (mm)
pub const IDEAL_MARGIN_MM: f64 = 10.0;

/// Spacing tried first by the adaptive grid strategy (mm)
pub const IDEAL_SPACING_MM: f64 = 2.0;

/// Card count the adaptive strategy aims for (3x3 poker cards)
pub const TARGET_CARDS_PER_PAGE: usize = 9;

// =============================================================================
// Styles
// =============================================================================

pub const DEFAULT_FRONT_STYLE_ID: &str = "default-front";
pub const DEFAULT_BACK_STYLE_ID: &str = "default-back";

/// Font size used when a text element does not set one (px at scale 1)
pub const DEFAULT_FONT_SIZE: f64 = 12.0;
