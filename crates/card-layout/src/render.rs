//! Render-request planning
//!
//! Cards that share a style render identically apart from their data, so the
//! rendering backend is asked for one bitmap per distinct (style, side) pair
//! rather than one per card. The export then looks the bitmap up per slot.

use std::collections::HashMap;

use crate::deck::{Card, Deck};
use crate::pagination::{PrintPage, SlotPlacement};
use crate::types::Side;

/// One bitmap the rendering backend must produce
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RenderRequest {
    pub side: Side,
    pub style_id: String,
    /// Index of the first card using this style, rendered as the sample
    pub sample_card: usize,
}

impl RenderRequest {
    pub fn sample<'a>(&self, deck: &'a Deck) -> Option<&'a Card> {
        deck.cards.get(self.sample_card)
    }
}

/// Distinct (resolved style, side) pairs used by the deck's cards.
///
/// Front requests come first, each side in order of first use.
pub fn render_requests(deck: &Deck) -> Vec<RenderRequest> {
    let mut requests = Vec::new();
    for side in Side::BOTH {
        let mut seen = std::collections::HashSet::new();
        for (index, card) in deck.cards.iter().enumerate() {
            let Some(style_id) = deck.resolved_style_id(card, side) else {
                continue;
            };
            if seen.insert(style_id) {
                requests.push(RenderRequest {
                    side,
                    style_id: style_id.to_string(),
                    sample_card: index,
                });
            }
        }
    }
    requests
}

/// Bitmap references returned by the rendering backend, keyed by style and side
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedCards {
    images: HashMap<(String, Side), String>,
}

impl RenderedCards {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bitmaps stored on the deck; a later entry for the same style and side wins
    pub fn from_deck(deck: &Deck) -> Self {
        deck.rendered_cards
            .iter()
            .filter(|r| !r.style_id.is_empty() && !r.image.is_empty())
            .map(|r| (r.style_id.clone(), r.side, r.image.clone()))
            .collect()
    }

    pub fn insert(&mut self, style_id: impl Into<String>, side: Side, image: impl Into<String>) {
        self.images.insert((style_id.into(), side), image.into());
    }

    pub fn get(&self, style_id: &str, side: Side) -> Option<&str> {
        self.images
            .get(&(style_id.to_string(), side))
            .map(String::as_str)
    }

    /// The bitmap for a placed slot, `None` means draw a placeholder
    pub fn image_for(&self, page: &PrintPage, slot: &SlotPlacement) -> Option<&str> {
        self.get(slot.style_id.as_deref()?, page.side)
    }

    /// Requests with no bitmap yet
    pub fn missing<'a>(&self, requests: &'a [RenderRequest]) -> Vec<&'a RenderRequest> {
        requests
            .iter()
            .filter(|r| self.get(&r.style_id, r.side).is_none())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl FromIterator<(String, Side, String)> for RenderedCards {
    fn from_iter<I: IntoIterator<Item = (String, Side, String)>>(iter: I) -> Self {
        let mut rendered = Self::new();
        for (style_id, side, image) in iter {
            rendered.insert(style_id, side, image);
        }
        rendered
    }
}
