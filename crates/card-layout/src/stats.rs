use std::collections::HashSet;

use crate::deck::{Deck, Game};
use crate::options::PrintOptions;
use crate::pagination::{PageLayout, expand_cards};
use crate::types::Side;

/// Statistics about a deck's print run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DeckStatistics {
    /// Cards in the deck, ignoring counts
    pub unique_cards: usize,
    /// Cards printed, counting repeats
    pub expanded_cards: usize,
    pub cards_per_page: usize,
    /// Physical sheets of paper
    pub sheets: usize,
    /// Output pages (front and back of every sheet)
    pub total_pages: usize,
    /// Unused slots on the final sheet
    pub empty_slots_last_sheet: usize,
    pub front_styles: usize,
    pub back_styles: usize,
    /// Distinct resolved front styles across all cards
    pub used_front_styles: usize,
    pub used_back_styles: usize,
}

/// Calculate statistics for printing a deck
pub fn calculate_statistics(deck: &Deck, options: &PrintOptions) -> DeckStatistics {
    let layout = PageLayout::calculate(
        deck.width,
        deck.height,
        options.paper_size_for(deck.paper_size),
        &options.grid,
    );

    let expanded_cards = expand_cards(&deck.cards).len();
    let cards_per_page = layout.cards_per_page();
    let sheets = layout.sheets_for(expanded_cards);
    let empty_slots_last_sheet = sheets * cards_per_page - expanded_cards;

    let used = |side: Side| {
        deck.cards
            .iter()
            .filter_map(|card| deck.resolved_style_id(card, side))
            .collect::<HashSet<_>>()
            .len()
    };

    DeckStatistics {
        unique_cards: deck.cards.len(),
        expanded_cards,
        cards_per_page,
        sheets,
        total_pages: layout.total_pages_for(expanded_cards),
        empty_slots_last_sheet,
        front_styles: deck.front_styles.len(),
        back_styles: deck.back_styles.len(),
        used_front_styles: used(Side::Front),
        used_back_styles: used(Side::Back),
    }
}

/// Totals across every deck of a game
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameStatistics {
    pub decks: usize,
    pub unique_cards: usize,
    pub expanded_cards: usize,
    pub front_styles: usize,
    pub back_styles: usize,
    pub sheets: usize,
}

pub fn calculate_game_statistics(game: &Game, options: &PrintOptions) -> GameStatistics {
    game.decks
        .iter()
        .map(|deck| calculate_statistics(deck, options))
        .fold(
            GameStatistics {
                decks: game.decks.len(),
                ..Default::default()
            },
            |mut totals, stats| {
                totals.unique_cards += stats.unique_cards;
                totals.expanded_cards += stats.expanded_cards;
                totals.front_styles += stats.front_styles;
                totals.back_styles += stats.back_styles;
                totals.sheets += stats.sheets;
                totals
            },
        )
}
