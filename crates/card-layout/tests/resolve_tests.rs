use card_layout::*;

fn deck_with_front_styles(ids: &[&str]) -> Deck {
    let mut deck = Deck::new("Test");
    deck.front_styles.clear();
    for id in ids {
        deck.front_styles.insert(id.to_string(), Layout::new(*id));
    }
    deck
}

#[test]
fn test_deleted_reference_falls_back_to_first() {
    let deck = deck_with_front_styles(&["A", "B"]);
    let card = Card::new("x").with_style(Side::Front, "C");

    let resolved = deck.resolve(&card, Side::Front);
    assert_eq!(resolved.id, Some("A"));
    assert_eq!(resolved.layout.name, "A");
    assert_eq!(resolved.resolution, Resolution::First);
}

#[test]
fn test_fallback_priority_order() {
    let mut deck = deck_with_front_styles(&["A", "default-front", "B", "D"]);
    let card = Card::new("x").with_style(Side::Front, "C");

    deck.default_front_style_id = Some("D".into());
    assert_eq!(deck.resolved_style_id(&card, Side::Front), Some("D"));

    // Default pointing at a deleted style is skipped too
    deck.default_front_style_id = Some("gone".into());
    assert_eq!(deck.resolved_style_id(&card, Side::Front), Some("default-front"));

    deck.front_styles.shift_remove("default-front");
    assert_eq!(deck.resolved_style_id(&card, Side::Front), Some("A"));
}

#[test]
fn test_resolution_is_deterministic() {
    let deck = deck_with_front_styles(&["z", "y", "x"]);
    let card = Card::new("x").with_style(Side::Front, "missing");

    let first = deck.resolve(&card, Side::Front);
    let second = deck.resolve(&card, Side::Front);
    assert_eq!(first.id, second.id);
    assert_eq!(first.id, Some("z"));
}

#[test]
fn test_non_empty_map_never_yields_empty_resolution() {
    let deck = deck_with_front_styles(&["only"]);
    let cards = [
        Card::new("a"),
        Card::new("b").with_style(Side::Front, "only"),
        Card::new("c").with_style(Side::Front, "nope"),
    ];
    for card in &cards {
        let resolved = deck.resolve(card, Side::Front);
        assert_eq!(resolved.id, Some("only"));
        assert_ne!(resolved.resolution, Resolution::Empty);
    }
}

#[test]
fn test_missing_style_map_resolves_to_empty_layout() {
    let mut deck = Deck::new("Test");
    deck.back_styles.clear();
    let card = Card::new("a").with_style(Side::Back, "anything");

    let resolved = deck.resolve(&card, Side::Back);
    assert_eq!(resolved.id, None);
    assert!(resolved.layout.elements.is_empty());
}

#[test]
fn test_cards_using_style_follow_resolution() {
    let mut deck = deck_with_front_styles(&["A", "B"]);
    deck.cards.push(Card::new("1").with_style(Side::Front, "B"));
    deck.cards.push(Card::new("2"));
    deck.cards.push(Card::new("3").with_style(Side::Front, "deleted"));

    let using_a: Vec<_> = deck
        .cards_using_style(Side::Front, "A")
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(using_a, vec!["2", "3"]);

    let using_b: Vec<_> = deck
        .cards_using_style(Side::Front, "B")
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(using_b, vec!["1"]);
}
