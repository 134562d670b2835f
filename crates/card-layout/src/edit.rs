//! Style editing operations
//!
//! Styles are only ever copied between layouts, never shared, so editing one
//! layout can not leak into another.

use crate::deck::Deck;
use crate::style::{Element, Layout};
use crate::types::*;

/// Smallest `{prefix}-{n}` (n >= 1) for which `taken` is false
fn unique_id(prefix: &str, taken: impl Fn(&str) -> bool) -> String {
    (1usize..)
        .map(|n| format!("{}-{}", prefix, n))
        .find(|id| !taken(id))
        .unwrap_or_else(|| prefix.to_string())
}

impl Deck {
    fn unknown_style(side: Side, id: &str) -> LayoutError {
        LayoutError::UnknownStyle {
            side,
            id: id.to_string(),
        }
    }

    pub fn style(&self, side: Side, id: &str) -> Result<&Layout> {
        self.styles(side)
            .get(id)
            .ok_or_else(|| Self::unknown_style(side, id))
    }

    pub fn style_mut(&mut self, side: Side, id: &str) -> Result<&mut Layout> {
        self.styles_mut(side)
            .get_mut(id)
            .ok_or_else(|| Self::unknown_style(side, id))
    }

    /// Add an empty style and return its id (`front-style-N` / `back-style-N`)
    pub fn add_style(&mut self, side: Side, name: impl Into<String>) -> String {
        let prefix = format!("{}-style", side);
        let styles = self.styles_mut(side);
        let id = unique_id(&prefix, |id| styles.contains_key(id));
        styles.insert(id.clone(), Layout::new(name));
        id
    }

    /// Copy a style, elements included, under a fresh id
    pub fn duplicate_style(&mut self, side: Side, id: &str) -> Result<String> {
        let mut copy = self.style(side, id)?.clone();
        copy.name = format!("{} (copy)", copy.name);
        let prefix = format!("{}-style", side);
        let styles = self.styles_mut(side);
        let new_id = unique_id(&prefix, |id| styles.contains_key(id));
        styles.insert(new_id.clone(), copy);
        Ok(new_id)
    }

    pub fn rename_style(&mut self, side: Side, id: &str, name: impl Into<String>) -> Result<()> {
        self.style_mut(side, id)?.name = name.into();
        Ok(())
    }

    /// Remove a style. Cards that referenced it explicitly are moved to the
    /// first remaining style; a deck default pointing at it is cleared.
    ///
    /// The last style of a side can not be deleted.
    pub fn delete_style(&mut self, side: Side, id: &str) -> Result<Layout> {
        let styles = self.styles(side);
        if !styles.contains_key(id) {
            return Err(Self::unknown_style(side, id));
        }
        if styles.len() <= 1 {
            return Err(LayoutError::LastStyle(side));
        }

        let removed = self
            .styles_mut(side)
            .shift_remove(id)
            .ok_or_else(|| Self::unknown_style(side, id))?;

        let fallback = self
            .styles(side)
            .keys()
            .next()
            .cloned()
            .ok_or(LayoutError::LastStyle(side))?;

        for card in &mut self.cards {
            if card.style_id(side) == Some(id) {
                card.set_style_id(side, Some(fallback.clone()));
            }
        }
        if self.default_style_id(side) == Some(id) {
            self.set_default_style_id(side, None);
        }

        log::info!("Deleted {} style '{}', cards moved to '{}'", side, id, fallback);
        Ok(removed)
    }

    /// Copy an element into other styles, on either side.
    ///
    /// Each copy gets an id unique within its target layout; the new ids are
    /// returned in target order. Nothing is changed if any target is unknown.
    pub fn duplicate_element(
        &mut self,
        side: Side,
        style_id: &str,
        element_id: &str,
        targets: &[(Side, &str)],
    ) -> Result<Vec<String>> {
        let element = self
            .style(side, style_id)?
            .element(element_id)
            .cloned()
            .ok_or_else(|| LayoutError::UnknownElement {
                style: style_id.to_string(),
                element: element_id.to_string(),
            })?;

        for &(target_side, target_id) in targets {
            self.style(target_side, target_id)?;
        }

        let mut new_ids = Vec::with_capacity(targets.len());
        for &(target_side, target_id) in targets {
            let layout = self.style_mut(target_side, target_id)?;
            let new_id = unique_id(&element.id, |id| layout.element(id).is_some());
            let mut copy: Element = element.clone();
            copy.id = new_id.clone();
            layout.elements.push(copy);
            new_ids.push(new_id);
        }
        Ok(new_ids)
    }

    /// Move an element to a new stacking position (0 = bottom).
    /// Positions past the end put the element on top.
    pub fn move_element(
        &mut self,
        side: Side,
        style_id: &str,
        element_id: &str,
        to_index: usize,
    ) -> Result<()> {
        let layout = self.style_mut(side, style_id)?;
        let from = layout
            .elements
            .iter()
            .position(|el| el.id == element_id)
            .ok_or_else(|| LayoutError::UnknownElement {
                style: style_id.to_string(),
                element: element_id.to_string(),
            })?;
        let element = layout.elements.remove(from);
        let to = to_index.min(layout.elements.len());
        layout.elements.insert(to, element);
        Ok(())
    }

    pub fn remove_element(&mut self, side: Side, style_id: &str, element_id: &str) -> Result<Element> {
        let layout = self.style_mut(side, style_id)?;
        let index = layout
            .elements
            .iter()
            .position(|el| el.id == element_id)
            .ok_or_else(|| LayoutError::UnknownElement {
                style: style_id.to_string(),
                element: element_id.to_string(),
            })?;
        Ok(layout.elements.remove(index))
    }

    /// Map a style reference from imported card data to a style id.
    ///
    /// An empty reference means the conventional default id. Otherwise an
    /// exact id match wins, then a case-insensitive name match, and finally
    /// a new empty style named after the reference is created.
    pub fn reconcile_style_reference(&mut self, side: Side, reference: &str) -> String {
        let reference = reference.trim();
        if reference.is_empty() {
            return side.default_style_id().to_string();
        }

        let styles = self.styles(side);
        if styles.contains_key(reference) {
            return reference.to_string();
        }
        let wanted = reference.to_lowercase();
        if let Some((id, _)) = styles
            .iter()
            .find(|(_, layout)| layout.name.to_lowercase() == wanted)
        {
            return id.clone();
        }

        let id = self.add_style(side, reference);
        log::debug!("Created {} style '{}' for reference '{}'", side, id, reference);
        id
    }
}
