use crate::constants::{DEFAULT_CARD_SPACING_MM, DEFAULT_MIN_MARGIN_MM};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the compositor sizes the card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GridStrategy {
    /// Use the configured spacing and minimum margin as-is
    #[default]
    Fixed,
    /// Start from generous margins and spacing, tightening them until
    /// a full 3x3 sheet of poker cards fits
    Adaptive,
}

/// Grid spacing configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridOptions {
    /// Gap between neighbouring cards
    pub spacing_mm: f64,
    /// Margin the grid never intrudes on
    pub min_margin_mm: f64,
    pub strategy: GridStrategy,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            spacing_mm: DEFAULT_CARD_SPACING_MM,
            min_margin_mm: DEFAULT_MIN_MARGIN_MM,
            strategy: GridStrategy::Fixed,
        }
    }
}

/// Order of pages in a single output document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PageOrder {
    /// Front 1, back 1, front 2, back 2, ... for duplex printers
    #[default]
    Interleaved,
    /// All fronts, then all backs
    Separate,
}

/// Print configuration layered over a deck's own settings
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrintOptions {
    /// Overrides the deck's paper size when set
    pub paper_size: Option<PaperSize>,
    pub grid: GridOptions,
    /// Overrides the deck's cut-guide flag when set
    pub cut_guides: Option<bool>,
    pub page_order: PageOrder,
}

impl PrintOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let grid = &self.grid;
        if !grid.spacing_mm.is_finite() || grid.spacing_mm < 0.0 {
            return Err(LayoutError::Config(format!(
                "Card spacing must be a non-negative number, got {}",
                grid.spacing_mm
            )));
        }
        if !grid.min_margin_mm.is_finite() || grid.min_margin_mm < 0.0 {
            return Err(LayoutError::Config(format!(
                "Minimum margin must be a non-negative number, got {}",
                grid.min_margin_mm
            )));
        }
        Ok(())
    }

    pub fn paper_size_for(&self, deck_paper: PaperSize) -> PaperSize {
        self.paper_size.unwrap_or(deck_paper)
    }

    pub fn cut_guides_for(&self, deck_cut_guides: bool) -> bool {
        self.cut_guides.unwrap_or(deck_cut_guides)
    }
}
