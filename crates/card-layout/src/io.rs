//! Deck and game file I/O
//!
//! Files written by older versions may lack card ids, style maps or default
//! ids, or write them as `null` / `""`. Missing fields take their defaults,
//! cards without ids get fresh ones and empty style maps get the default
//! style, so the resolver's fallback chain can take over from there.

use crate::deck::{Deck, Game};
use crate::types::*;
use std::path::Path;

fn normalize(deck: &mut Deck) {
    let assigned = deck.ensure_card_ids();
    if assigned > 0 {
        log::debug!("Assigned ids to {} cards in deck '{}'", assigned, deck.name);
    }
    for side in deck.ensure_default_styles() {
        log::debug!("Deck '{}' had no {} styles, added the default", deck.name, side);
    }
}

/// Parse a deck from JSON bytes
pub fn parse_deck(bytes: &[u8]) -> Result<Deck> {
    let mut deck: Deck = serde_json::from_slice(bytes)?;
    normalize(&mut deck);
    Ok(deck)
}

/// Load a single deck file
pub async fn load_deck(path: impl AsRef<Path>) -> Result<Deck> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let deck = tokio::task::spawn_blocking(move || parse_deck(&bytes)).await??;
    log::info!("Loaded deck '{}' ({} cards)", deck.name, deck.cards.len());
    Ok(deck)
}

/// Save a deck as pretty-printed JSON
pub async fn save_deck(deck: &Deck, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_vec_pretty(deck)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

/// Load a game file with all of its decks
pub async fn load_game(path: impl AsRef<Path>) -> Result<Game> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let game = tokio::task::spawn_blocking(move || {
        let mut game: Game = serde_json::from_slice(&bytes)?;
        game.decks.iter_mut().for_each(normalize);
        Ok::<_, LayoutError>(game)
    })
    .await??;
    Ok(game)
}

pub async fn save_game(game: &Game, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_vec_pretty(game)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}
