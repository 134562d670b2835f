//! Style resolution
//!
//! Cards may reference styles that were renamed or deleted, and decks loaded
//! from older files may lack default ids altogether. Every surface that draws
//! a card (editor canvas, preview grid, print compositor) goes through
//! [`resolve_layout`] so they all agree on what a card looks like.
//!
//! Resolution order for one side:
//! 1. the card's explicit style id, if it exists in the side's map
//! 2. the deck default id, if it exists
//! 3. the conventional `default-front` / `default-back` id, if it exists
//! 4. the first style in insertion order
//! 5. an empty layout when the map is empty

use crate::deck::{Card, Deck};
use crate::style::{Layout, StyleMap};
use crate::types::Side;

static EMPTY_LAYOUT: Layout = Layout::empty();

/// Which step of the fallback chain picked the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Explicit,
    DeckDefault,
    Conventional,
    First,
    /// The style map was empty
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLayout<'a> {
    /// The id actually used, `None` only when the map was empty
    pub id: Option<&'a str>,
    pub layout: &'a Layout,
    pub resolution: Resolution,
}

impl<'a> ResolvedLayout<'a> {
    /// True when the card's own reference was not honored
    pub fn is_fallback(&self) -> bool {
        self.resolution != Resolution::Explicit
    }
}

/// Pick the layout for one side of a card. Never fails.
pub fn resolve_layout<'a>(
    side: Side,
    explicit_id: Option<&str>,
    styles: &'a StyleMap,
    default_id: Option<&str>,
) -> ResolvedLayout<'a> {
    let lookup = |id: Option<&str>, resolution| {
        let id = id.filter(|id| !id.is_empty())?;
        let (key, layout) = styles.get_key_value(id)?;
        Some(ResolvedLayout {
            id: Some(key.as_str()),
            layout,
            resolution,
        })
    };

    let explicit_id = explicit_id.filter(|id| !id.is_empty());
    if let Some(resolved) = lookup(explicit_id, Resolution::Explicit) {
        return resolved;
    }

    let resolved = lookup(default_id, Resolution::DeckDefault)
        .or_else(|| lookup(Some(side.default_style_id()), Resolution::Conventional))
        .unwrap_or_else(|| match styles.first() {
            Some((key, layout)) => ResolvedLayout {
                id: Some(key.as_str()),
                layout,
                resolution: Resolution::First,
            },
            None => ResolvedLayout {
                id: None,
                layout: &EMPTY_LAYOUT,
                resolution: Resolution::Empty,
            },
        });

    if let Some(requested) = explicit_id {
        log::debug!(
            "{} style '{}' not found, using {:?}",
            side,
            requested,
            resolved.id
        );
    }
    resolved
}

impl Deck {
    /// Resolve the layout a card uses for one side
    pub fn resolve<'a>(&'a self, card: &Card, side: Side) -> ResolvedLayout<'a> {
        resolve_layout(
            side,
            card.style_id(side),
            self.styles(side),
            self.default_style_id(side),
        )
    }

    /// Resolved style id for a card, if the side has any styles
    pub fn resolved_style_id(&self, card: &Card, side: Side) -> Option<&str> {
        self.resolve(card, side).id
    }

    /// Cards whose resolved style for `side` is `style_id`, in deck order.
    ///
    /// Live-preview overlays use this to show only the cards a style affects.
    pub fn cards_using_style<'a>(
        &'a self,
        side: Side,
        style_id: &'a str,
    ) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards
            .iter()
            .filter(move |card| self.resolved_style_id(card, side) == Some(style_id))
    }
}
