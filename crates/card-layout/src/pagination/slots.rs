//! Card-to-slot assignment
//!
//! Cards are expanded by print quantity and poured into the grid in deck
//! order, row-major, one page after another. Every front page gets a
//! matching back page on the same sheet. Back pages mirror the column
//! order, matching how a sheet flipped on its long edge reverses left
//! and right. Rows are never mirrored; short-edge duplex is not supported.

use crate::deck::{Card, Deck};
use crate::options::PrintOptions;
use crate::types::Side;

use super::{GridPosition, PageLayout, PrintPage, PrintPlan, SlotFrame, SlotPlacement};

/// One printed instance of a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandedCard<'a> {
    /// Index in the deck's card list
    pub index: usize,
    /// Which repeat this is (0..count)
    pub copy: usize,
    pub card: &'a Card,
}

/// Repeat each card by its count, preserving deck order and identity
pub fn expand_cards(cards: &[Card]) -> Vec<ExpandedCard<'_>> {
    cards
        .iter()
        .enumerate()
        .flat_map(|(index, card)| {
            (0..card.copies()).map(move |copy| ExpandedCard { index, copy, card })
        })
        .collect()
}

/// Column a front-side column lands on when the sheet is flipped on its long edge.
///
/// Applying it twice returns the original column for any `col < cards_per_row`.
/// Columns outside the row clamp to column 0.
pub fn mirror_column(col: usize, cards_per_row: usize) -> usize {
    cards_per_row.saturating_sub(col).saturating_sub(1)
}

/// Grid position of the `slot`-th card on a page, before any mirroring.
///
/// A zero-width row is treated as one card wide.
pub fn slot_position(slot: usize, cards_per_row: usize) -> GridPosition {
    let per_row = cards_per_row.max(1);
    GridPosition::new(slot / per_row, slot % per_row)
}

/// Displayed grid position of a slot on the given side
pub fn display_position(slot: usize, cards_per_row: usize, side: Side) -> GridPosition {
    let pos = slot_position(slot, cards_per_row);
    match side {
        Side::Front => pos,
        Side::Back => GridPosition::new(pos.row, mirror_column(pos.col, cards_per_row)),
    }
}

/// Lay out a deck onto printable pages.
///
/// An empty deck yields a plan with no pages.
pub fn compose(deck: &Deck, options: &PrintOptions) -> PrintPlan {
    let paper_size = options.paper_size_for(deck.paper_size);
    let layout = PageLayout::calculate(deck.width, deck.height, paper_size, &options.grid);
    let cut_guides = options.cut_guides_for(deck.draw_cut_guides);

    if !layout.fits_within(0.0) {
        log::warn!(
            "{}x{}mm cards do not fit on {} paper",
            deck.width,
            deck.height,
            paper_size.name()
        );
    }

    let frame = if cut_guides {
        SlotFrame::CutGuide
    } else {
        SlotFrame::None
    };

    let expanded = expand_cards(&deck.cards);
    let per_page = layout.cards_per_page().max(1);

    let mut fronts = Vec::new();
    let mut backs = Vec::new();

    for (sheet_index, chunk) in expanded.chunks(per_page).enumerate() {
        for side in Side::BOTH {
            let slots = chunk
                .iter()
                .enumerate()
                .map(|(slot_index, expanded)| {
                    let grid_pos = display_position(slot_index, layout.cards_per_row, side);
                    SlotPlacement {
                        slot_index,
                        card_index: expanded.index,
                        copy: expanded.copy,
                        card_id: expanded.card.id.clone(),
                        grid_pos,
                        rect: layout.slot_rect(grid_pos),
                        style_id: deck.resolved_style_id(expanded.card, side).map(String::from),
                        frame,
                    }
                })
                .collect();

            let page = PrintPage {
                side,
                sheet_index,
                slots,
            };
            match side {
                Side::Front => fronts.push(page),
                Side::Back => backs.push(page),
            }
        }
    }

    log::debug!(
        "Composed {} cards onto {} sheets ({}x{} per page)",
        expanded.len(),
        fronts.len(),
        layout.cards_per_row,
        layout.cards_per_col
    );

    PrintPlan {
        paper_size,
        layout,
        cut_guides,
        fronts,
        backs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_is_involution() {
        for per_row in 1..6 {
            for col in 0..per_row {
                assert_eq!(mirror_column(mirror_column(col, per_row), per_row), col);
            }
        }
    }

    #[test]
    fn test_degenerate_rows_do_not_panic() {
        assert_eq!(mirror_column(0, 0), 0);
        assert_eq!(mirror_column(5, 3), 0);
        assert_eq!(slot_position(4, 0), GridPosition::new(4, 0));
        assert_eq!(display_position(2, 0, Side::Back), GridPosition::new(2, 0));
    }

    #[test]
    fn test_back_row_is_not_mirrored() {
        let pos = display_position(4, 3, Side::Back);
        assert_eq!(pos, GridPosition::new(1, 1));

        let pos = display_position(3, 3, Side::Back);
        assert_eq!(pos, GridPosition::new(1, 2));
    }

    #[test]
    fn test_expand_keeps_identity_and_order() {
        let cards = vec![
            Card::new("a").with_count(2),
            Card::new("b"),
            Card::new("c").with_count(0),
        ];
        let expanded: Vec<_> = expand_cards(&cards)
            .iter()
            .map(|e| (e.card.id.as_str(), e.index, e.copy))
            .collect();
        assert_eq!(
            expanded,
            vec![("a", 0, 0), ("a", 0, 1), ("b", 1, 0), ("c", 2, 0)]
        );
    }
}
