use card_layout::{LayoutError, PageOrder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrintError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("No pages to export")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, PrintError>;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Document title stored in the PDF metadata
    pub title: String,
    pub page_order: PageOrder,
    /// Print the card and style id inside each slot
    pub labels: bool,
    pub label_font_size_pt: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: "Cards".to_string(),
            page_order: PageOrder::Interleaved,
            labels: true,
            label_font_size_pt: 6.0,
        }
    }
}
