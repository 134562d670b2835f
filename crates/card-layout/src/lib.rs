mod constants;
mod deck;
mod edit;
mod geometry;
mod history;
#[cfg(feature = "serde")]
mod io;
mod options;
pub mod pagination;
mod render;
mod resolve;
mod stats;
mod style;
mod types;

pub use constants::*;
pub use deck::*;
pub use geometry::{Rect, Viewport};
pub use history::{DEFAULT_HISTORY_LIMIT, History};
#[cfg(feature = "serde")]
pub use io::{load_deck, load_game, parse_deck, save_deck, save_game};
pub use options::*;
pub use pagination::{
    GridPosition, PageLayout, PrintPage, PrintPlan, SlotFrame, SlotPlacement, compose, expand_cards,
    mirror_column,
};
pub use render::{RenderRequest, RenderedCards, render_requests};
pub use resolve::{Resolution, ResolvedLayout, resolve_layout};
pub use stats::*;
pub use style::*;
pub use types::*;
