//! Decks, cards and the data bound into their layouts

use indexmap::IndexMap;

use crate::constants::{POKER_CARD_HEIGHT_MM, POKER_CARD_WIDTH_MM};
use crate::style::{Layout, StyleMap};
use crate::types::*;

#[cfg(feature = "serde")]
use crate::types::null_as_default;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single spreadsheet-like cell value in a card's data map
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Nested values from hand-edited or older files, kept as-is
    List(Vec<FieldValue>),
    Map(IndexMap<String, FieldValue>),
    #[default]
    Empty,
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Map(entries) => entries.is_empty(),
            _ => false,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            // Whole numbers come out of spreadsheets as floats; show them as integers
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            FieldValue::Map(entries) => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                Ok(())
            }
            FieldValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldKind {
    #[default]
    Text,
    Image,
}

/// A named data column that layouts can bind elements to
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldDefinition {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Card {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub data: IndexMap<String, FieldValue>,
    /// Print quantity
    pub count: u32,
    pub front_style_id: Option<String>,
    pub back_style_id: Option<String>,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            id: String::new(),
            data: IndexMap::new(),
            count: 1,
            front_style_id: None,
            back_style_id: None,
        }
    }
}

impl Card {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_style(mut self, side: Side, style_id: impl Into<String>) -> Self {
        self.set_style_id(side, Some(style_id.into()));
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Number of slots this card occupies when printed. A zero count
    /// from older files still prints once.
    pub fn copies(&self) -> usize {
        self.count.max(1) as usize
    }

    /// The explicitly assigned style id for a side; empty strings count as unset
    pub fn style_id(&self, side: Side) -> Option<&str> {
        let id = match side {
            Side::Front => self.front_style_id.as_deref(),
            Side::Back => self.back_style_id.as_deref(),
        };
        id.filter(|id| !id.is_empty())
    }

    pub fn set_style_id(&mut self, side: Side, style_id: Option<String>) {
        match side {
            Side::Front => self.front_style_id = style_id,
            Side::Back => self.back_style_id = style_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Deck {
    pub id: String,
    pub name: String,
    /// Card width in millimeters
    pub width: f64,
    /// Card height in millimeters
    pub height: f64,
    pub paper_size: PaperSize,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub cards: Vec<Card>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub fields: Vec<FieldDefinition>,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub front_styles: StyleMap,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub back_styles: StyleMap,
    pub default_front_style_id: Option<String>,
    pub default_back_style_id: Option<String>,
    pub draw_cut_guides: bool,
    /// Bitmaps the rendering backend produced for this deck's styles
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub rendered_cards: Vec<RenderedCard>,
}

/// One pre-rendered style bitmap, as handed over by the rendering backend
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RenderedCard {
    pub style_id: String,
    pub side: Side,
    /// Path or encoded image data; never decoded here
    pub image: String,
}

fn default_layout(side: Side) -> Layout {
    match side {
        Side::Front => Layout::new("Default Front"),
        Side::Back => Layout::new("Default Back"),
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new("New Deck")
    }
}

impl Deck {
    /// A poker-size Letter deck with one empty style per side
    pub fn new(name: impl Into<String>) -> Self {
        let mut front_styles = StyleMap::new();
        front_styles.insert(
            Side::Front.default_style_id().to_string(),
            default_layout(Side::Front),
        );
        let mut back_styles = StyleMap::new();
        back_styles.insert(
            Side::Back.default_style_id().to_string(),
            default_layout(Side::Back),
        );

        Self {
            id: String::new(),
            name: name.into(),
            width: POKER_CARD_WIDTH_MM,
            height: POKER_CARD_HEIGHT_MM,
            paper_size: PaperSize::Letter,
            cards: Vec::new(),
            fields: Vec::new(),
            front_styles,
            back_styles,
            default_front_style_id: None,
            default_back_style_id: None,
            draw_cut_guides: false,
            rendered_cards: Vec::new(),
        }
    }

    pub fn styles(&self, side: Side) -> &StyleMap {
        match side {
            Side::Front => &self.front_styles,
            Side::Back => &self.back_styles,
        }
    }

    pub fn styles_mut(&mut self, side: Side) -> &mut StyleMap {
        match side {
            Side::Front => &mut self.front_styles,
            Side::Back => &mut self.back_styles,
        }
    }

    /// The deck-level default style id for a side; empty strings count as unset
    pub fn default_style_id(&self, side: Side) -> Option<&str> {
        let id = match side {
            Side::Front => self.default_front_style_id.as_deref(),
            Side::Back => self.default_back_style_id.as_deref(),
        };
        id.filter(|id| !id.is_empty())
    }

    pub fn set_default_style_id(&mut self, side: Side, style_id: Option<String>) {
        match side {
            Side::Front => self.default_front_style_id = style_id,
            Side::Back => self.default_back_style_id = style_id,
        }
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Total printed cards, counting repeats
    pub fn expanded_card_count(&self) -> usize {
        self.cards.iter().map(Card::copies).sum()
    }

    /// Give every card without an id a unique `card-N` id.
    ///
    /// Returns how many ids were assigned.
    pub fn ensure_card_ids(&mut self) -> usize {
        let mut next = 1usize;
        let mut assigned = 0;
        for i in 0..self.cards.len() {
            if !self.cards[i].id.is_empty() {
                continue;
            }
            let id = loop {
                let candidate = format!("card-{}", next);
                next += 1;
                if !self.cards.iter().any(|c| c.id == candidate) {
                    break candidate;
                }
            };
            self.cards[i].id = id;
            assigned += 1;
        }
        assigned
    }

    /// Give each side with no styles at all its conventional default style.
    ///
    /// Returns the sides that were filled in.
    pub fn ensure_default_styles(&mut self) -> Vec<Side> {
        let mut filled = Vec::new();
        for side in Side::BOTH {
            let styles = self.styles_mut(side);
            if styles.is_empty() {
                styles.insert(side.default_style_id().to_string(), default_layout(side));
                filled.push(side);
            }
        }
        filled
    }

    /// Check the preconditions the compositor relies on
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(LayoutError::InvalidDeck(format!(
                "card size must be positive, got {}x{}mm",
                self.width, self.height
            )));
        }
        for side in Side::BOTH {
            if self.styles(side).is_empty() {
                return Err(LayoutError::InvalidDeck(format!(
                    "deck has no {} styles",
                    side
                )));
            }
        }
        let mut seen = std::collections::HashSet::new();
        for card in &self.cards {
            if !card.id.is_empty() && !seen.insert(card.id.as_str()) {
                return Err(LayoutError::InvalidDeck(format!(
                    "duplicate card id '{}'",
                    card.id
                )));
            }
        }
        Ok(())
    }
}

/// A game is a named collection of decks, persisted as one file
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Game {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(deserialize_with = "null_as_default"))]
    pub decks: Vec<Deck>,
}
