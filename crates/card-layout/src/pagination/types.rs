//! Pagination data types
//!
//! These are derived values: recomputed from the deck whenever its card
//! size, paper size or card list changes, never stored.

use crate::geometry::Rect;
use crate::options::PageOrder;
use crate::types::{PaperSize, Side};

/// Computed grid geometry for one paper size, in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageLayout {
    pub page_width: f64,
    pub page_height: f64,
    pub cards_per_row: usize,
    pub cards_per_col: usize,
    pub card_width: f64,
    pub card_height: f64,
    /// Uniform gap between neighbouring cards
    pub spacing: f64,
    pub margin_left: f64,
    pub margin_top: f64,
}

impl PageLayout {
    pub fn cards_per_page(&self) -> usize {
        self.cards_per_row * self.cards_per_col
    }

    /// Width of the whole card grid including inner spacing
    pub fn grid_width(&self) -> f64 {
        self.cards_per_row as f64 * self.card_width
            + self.cards_per_row.saturating_sub(1) as f64 * self.spacing
    }

    /// Height of the whole card grid including inner spacing
    pub fn grid_height(&self) -> f64 {
        self.cards_per_col as f64 * self.card_height
            + self.cards_per_col.saturating_sub(1) as f64 * self.spacing
    }

    /// Bounds of the slot at a displayed grid position
    pub fn slot_rect(&self, pos: GridPosition) -> Rect {
        Rect::new(
            self.margin_left + pos.col as f64 * (self.card_width + self.spacing),
            self.margin_top + pos.row as f64 * (self.card_height + self.spacing),
            self.card_width,
            self.card_height,
        )
    }

    /// Whether the grid lies inside the paper with `margin` to spare on every edge
    pub fn fits_within(&self, margin: f64) -> bool {
        let printable = Rect::new(
            margin,
            margin,
            self.page_width - 2.0 * margin,
            self.page_height - 2.0 * margin,
        );
        let grid = Rect::new(
            self.margin_left,
            self.margin_top,
            self.grid_width(),
            self.grid_height(),
        );
        printable.encloses(&grid, 1e-6)
    }

    /// Physical sheets needed for `cards` expanded cards
    pub fn sheets_for(&self, cards: usize) -> usize {
        cards.div_ceil(self.cards_per_page().max(1))
    }

    /// Output pages needed for `cards` expanded cards (one front and one back per sheet)
    pub fn total_pages_for(&self, cards: usize) -> usize {
        self.sheets_for(cards) * 2
    }
}

/// Position within the page grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Border hint carried with each slot for the export backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SlotFrame {
    #[default]
    None,
    /// Dashed cut line along the exact slot bounds
    CutGuide,
}

/// One expanded card instance placed on a page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SlotPlacement {
    /// Index in fill order on this page (0..cards_per_page)
    pub slot_index: usize,
    /// Index of the card in the deck's card list
    pub card_index: usize,
    /// Which repeat of the card this is (0..count)
    pub copy: usize,
    pub card_id: String,
    /// Position the slot is drawn at; mirrored on back pages
    pub grid_pos: GridPosition,
    /// Slot bounds on the page, top-left origin
    pub rect: Rect,
    /// Resolved style id, `None` when the side has no styles
    pub style_id: Option<String>,
    pub frame: SlotFrame,
}

/// One output page: a single side of a physical sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PrintPage {
    pub side: Side,
    /// Physical sheet this page is printed on
    pub sheet_index: usize,
    pub slots: Vec<SlotPlacement>,
}

/// Complete pagination of a deck: equal-length front and back sequences
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PrintPlan {
    pub paper_size: PaperSize,
    pub layout: PageLayout,
    pub cut_guides: bool,
    pub fronts: Vec<PrintPage>,
    pub backs: Vec<PrintPage>,
}

impl PrintPlan {
    pub fn sheet_count(&self) -> usize {
        self.fronts.len()
    }

    /// Fronts plus backs; always even
    pub fn total_pages(&self) -> usize {
        self.fronts.len() + self.backs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fronts.is_empty()
    }

    pub fn pages(&self, side: Side) -> &[PrintPage] {
        match side {
            Side::Front => &self.fronts,
            Side::Back => &self.backs,
        }
    }

    /// Pages in output-document order
    pub fn pages_in_order(&self, order: PageOrder) -> Vec<&PrintPage> {
        match order {
            PageOrder::Separate => self.fronts.iter().chain(self.backs.iter()).collect(),
            PageOrder::Interleaved => self
                .fronts
                .iter()
                .zip(self.backs.iter())
                .flat_map(|(front, back)| [front, back])
                .collect(),
        }
    }

    pub fn slot_count(&self) -> usize {
        self.fronts.iter().map(|p| p.slots.len()).sum()
    }
}
