use thiserror::Error;

use crate::constants::{DEFAULT_BACK_STYLE_ID, DEFAULT_FRONT_STYLE_ID};

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),
    #[error("No {side} style with id '{id}'")]
    UnknownStyle { side: Side, id: String },
    #[error("No element '{element}' in style '{style}'")]
    UnknownElement { style: String, element: String },
    #[error("Cannot delete the last {0} style")]
    LastStyle(Side),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Read an explicit `null` the same as a missing field.
///
/// Files written by the old backend serialize unset lists and maps as `null`.
#[cfg(feature = "serde")]
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Supported output paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PaperSize {
    /// US Letter, 8.5" x 11". Also what an unset (empty) paper size means.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = ""))]
    Letter,
    /// ISO A4
    A4,
}

impl PaperSize {
    /// Portrait dimensions (width, height) in millimeters
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::A4 => (210.0, 297.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::Letter => "Letter",
            PaperSize::A4 => "A4",
        }
    }
}

/// Which face of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Front,
    Back,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Front, Side::Back];

    /// The conventional style id every new deck starts with for this side
    pub fn default_style_id(self) -> &'static str {
        match self {
            Side::Front => DEFAULT_FRONT_STYLE_ID,
            Side::Back => DEFAULT_BACK_STYLE_ID,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
