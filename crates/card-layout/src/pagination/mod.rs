//! Print pagination
//!
//! This module handles all the geometric calculations for printing a deck:
//! - Grid layout (cards per row/column, centered margins)
//! - Slot assignment (print quantities, page filling, duplex mirroring)

mod grid;
mod slots;
mod types;

pub use slots::*;
pub use types::*;
