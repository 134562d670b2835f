//! Card grid calculation
//!
//! Fits as many cards as possible onto one sheet of paper and centers the
//! resulting grid, so the leftover space is split evenly between opposite
//! margins.

use crate::constants::{IDEAL_MARGIN_MM, IDEAL_SPACING_MM, TARGET_CARDS_PER_PAGE};
use crate::options::{GridOptions, GridStrategy};
use crate::types::PaperSize;

use super::PageLayout;

/// Absorbs float error when the printable length is an exact multiple of the pitch
const FIT_EPSILON: f64 = 1e-9;

// =============================================================================
// Grid Creation
// =============================================================================

impl PageLayout {
    /// Compute the grid for a card size on a paper size.
    ///
    /// Both grid dimensions are at least 1: an oversized card still gets a
    /// 1x1 grid, and warning about it is the caller's business
    /// (see [`PageLayout::fits_within`]).
    pub fn calculate(
        card_width: f64,
        card_height: f64,
        paper: PaperSize,
        options: &GridOptions,
    ) -> Self {
        let (page_width, page_height) = paper.dimensions_mm();

        let (cols, rows, spacing, clamp_margins) = match options.strategy {
            GridStrategy::Fixed => {
                let (cols, rows) = fit_grid(
                    page_width,
                    page_height,
                    card_width,
                    card_height,
                    options.min_margin_mm,
                    options.spacing_mm,
                );
                (cols, rows, options.spacing_mm, false)
            }
            GridStrategy::Adaptive => {
                let (cols, rows, spacing) = adaptive_grid(
                    page_width,
                    page_height,
                    card_width,
                    card_height,
                    options.min_margin_mm,
                );
                (cols, rows, spacing, true)
            }
        };

        let mut layout = PageLayout {
            page_width,
            page_height,
            cards_per_row: cols,
            cards_per_col: rows,
            card_width,
            card_height,
            spacing,
            margin_left: 0.0,
            margin_top: 0.0,
        };
        layout.margin_left = (page_width - layout.grid_width()) / 2.0;
        layout.margin_top = (page_height - layout.grid_height()) / 2.0;

        if clamp_margins {
            layout.margin_left = layout.margin_left.max(0.0);
            layout.margin_top = layout.margin_top.max(0.0);
        }

        layout
    }
}

/// Cards that fit along one axis: `n*card + (n-1)*spacing <= available`
fn fit_count(available: f64, card: f64, spacing: f64) -> usize {
    let count = ((available + spacing) / (card + spacing) + FIT_EPSILON).floor();
    if count.is_finite() && count >= 1.0 {
        count as usize
    } else {
        1
    }
}

fn fit_grid(
    page_width: f64,
    page_height: f64,
    card_width: f64,
    card_height: f64,
    margin: f64,
    spacing: f64,
) -> (usize, usize) {
    let cols = fit_count(page_width - 2.0 * margin, card_width, spacing);
    let rows = fit_count(page_height - 2.0 * margin, card_height, spacing);
    (cols, rows)
}

// =============================================================================
// Adaptive Strategy
// =============================================================================

/// Try generous margins first, then the minimum margin, then zero spacing,
/// keeping whichever attempt fits the most cards.
fn adaptive_grid(
    page_width: f64,
    page_height: f64,
    card_width: f64,
    card_height: f64,
    min_margin: f64,
) -> (usize, usize, f64) {
    let attempt = |margin: f64, spacing: f64| {
        let (cols, rows) = fit_grid(page_width, page_height, card_width, card_height, margin, spacing);
        (cols, rows, cols * rows)
    };

    let (mut cols, mut rows, mut count) = attempt(IDEAL_MARGIN_MM, IDEAL_SPACING_MM);
    let mut spacing = IDEAL_SPACING_MM;

    if count < TARGET_CARDS_PER_PAGE {
        let (c, r, n) = attempt(min_margin, IDEAL_SPACING_MM);
        if n > count {
            (cols, rows, count) = (c, r, n);
        }

        if count < TARGET_CARDS_PER_PAGE {
            let (c, r, n) = attempt(min_margin, 0.0);
            if n > count {
                (cols, rows) = (c, r);
                spacing = 0.0;
            }
        }
    }

    (cols, rows, spacing)
}

// =============================================================================
// Tests
// =============================================================================
