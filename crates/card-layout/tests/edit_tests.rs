use card_layout::*;

fn text_element(id: &str) -> Element {
    Element::new(
        id,
        Rect::new(5.0, 5.0, 20.0, 10.0),
        ElementKind::Text(TextAttributes {
            field: Some("title".into()),
            ..Default::default()
        }),
    )
}

#[test]
fn test_add_style_ids_are_unique() {
    let mut deck = Deck::new("Test");
    let a = deck.add_style(Side::Front, "Monster");
    let b = deck.add_style(Side::Front, "Spell");
    let c = deck.add_style(Side::Back, "Alt back");

    assert_eq!(a, "front-style-1");
    assert_eq!(b, "front-style-2");
    assert_eq!(c, "back-style-1");
    assert_eq!(deck.style(Side::Front, &b).unwrap().name, "Spell");
}

#[test]
fn test_rename_keeps_id_and_references() {
    let mut deck = Deck::new("Test");
    let id = deck.add_style(Side::Front, "Old");
    deck.cards.push(Card::new("a").with_style(Side::Front, id.clone()));

    deck.rename_style(Side::Front, &id, "New").unwrap();
    let card = &deck.cards[0];
    let resolved = deck.resolve(card, Side::Front);
    assert_eq!(resolved.id, Some(id.as_str()));
    assert_eq!(resolved.layout.name, "New");

    let err = deck.rename_style(Side::Front, "missing", "X").unwrap_err();
    assert!(matches!(err, LayoutError::UnknownStyle { side: Side::Front, .. }));
}

#[test]
fn test_delete_reassigns_cards() {
    let mut deck = Deck::new("Test");
    let id = deck.add_style(Side::Front, "Doomed");
    deck.default_front_style_id = Some(id.clone());
    deck.cards.push(Card::new("a").with_style(Side::Front, id.clone()));
    deck.cards.push(Card::new("b"));

    let removed = deck.delete_style(Side::Front, &id).unwrap();
    assert_eq!(removed.name, "Doomed");
    assert_eq!(deck.cards[0].style_id(Side::Front), Some("default-front"));
    assert_eq!(deck.cards[1].style_id(Side::Front), None);
    assert_eq!(deck.default_front_style_id, None);
}

#[test]
fn test_delete_last_style_is_refused() {
    let mut deck = Deck::new("Test");
    let err = deck.delete_style(Side::Back, "default-back").unwrap_err();
    assert!(matches!(err, LayoutError::LastStyle(Side::Back)));
    assert_eq!(deck.back_styles.len(), 1);
}

#[test]
fn test_duplicate_element_copies_not_shares() {
    let mut deck = Deck::new("Test");
    deck.style_mut(Side::Front, "default-front")
        .unwrap()
        .elements
        .push(text_element("title"));
    let other = deck.add_style(Side::Front, "Other");

    let ids = deck
        .duplicate_element(
            Side::Front,
            "default-front",
            "title",
            &[(Side::Front, other.as_str()), (Side::Back, "default-back")],
        )
        .unwrap();
    assert_eq!(ids, vec!["title-1", "title-1"]);

    // Moving the copy leaves the original alone
    let copy = deck
        .style_mut(Side::Front, &other)
        .unwrap()
        .element_mut("title-1")
        .unwrap();
    copy.set_bounds(Rect::new(0.0, 0.0, 1.0, 1.0));

    let original = deck
        .style(Side::Front, "default-front")
        .unwrap()
        .element("title")
        .unwrap();
    assert_eq!(original.bounds(), Rect::new(5.0, 5.0, 20.0, 10.0));
    assert_eq!(deck.back_styles["default-back"].elements.len(), 1);
}

#[test]
fn test_duplicate_element_unknown_target_changes_nothing() {
    let mut deck = Deck::new("Test");
    deck.style_mut(Side::Front, "default-front")
        .unwrap()
        .elements
        .push(text_element("title"));

    let result = deck.duplicate_element(
        Side::Front,
        "default-front",
        "title",
        &[(Side::Back, "default-back"), (Side::Back, "nope")],
    );
    assert!(result.is_err());
    assert!(deck.back_styles["default-back"].elements.is_empty());
}

#[test]
fn test_move_element_reorders_stacking() {
    let mut deck = Deck::new("Test");
    {
        let layout = deck.style_mut(Side::Front, "default-front").unwrap();
        for id in ["a", "b", "c"] {
            layout.elements.push(text_element(id));
        }
    }

    deck.move_element(Side::Front, "default-front", "a", 99).unwrap();
    let order: Vec<_> = deck.front_styles["default-front"]
        .elements
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(order, vec!["b", "c", "a"]);

    deck.move_element(Side::Front, "default-front", "c", 0).unwrap();
    let order: Vec<_> = deck.front_styles["default-front"]
        .elements
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(order, vec!["c", "b", "a"]);

    let removed = deck.remove_element(Side::Front, "default-front", "b").unwrap();
    assert_eq!(removed.id, "b");
    assert!(deck.move_element(Side::Front, "default-front", "b", 0).is_err());
}

#[test]
fn test_duplicate_style_is_deep_copy() {
    let mut deck = Deck::new("Test");
    deck.style_mut(Side::Front, "default-front")
        .unwrap()
        .elements
        .push(text_element("title"));

    let id = deck.duplicate_style(Side::Front, "default-front").unwrap();
    deck.style_mut(Side::Front, &id).unwrap().elements.clear();

    assert_eq!(deck.front_styles[id.as_str()].name, "Default Front (copy)");
    assert_eq!(deck.front_styles["default-front"].elements.len(), 1);
}

#[test]
fn test_reconcile_style_reference() {
    let mut deck = Deck::new("Test");
    let monster = deck.add_style(Side::Front, "Monster");

    assert_eq!(deck.reconcile_style_reference(Side::Front, ""), "default-front");
    assert_eq!(deck.reconcile_style_reference(Side::Front, &monster), monster);
    assert_eq!(deck.reconcile_style_reference(Side::Front, "monster"), monster);

    let created = deck.reconcile_style_reference(Side::Front, "Spell");
    assert_eq!(created, "front-style-2");
    assert_eq!(deck.front_styles[created.as_str()].name, "Spell");

    // A second import finds the style it created
    assert_eq!(deck.reconcile_style_reference(Side::Front, "SPELL"), created);
}

#[test]
fn test_history_over_deck_snapshots() {
    let mut history = History::new(Deck::new("Test"));
    history.update(|deck| {
        deck.add_style(Side::Front, "Monster");
    });
    history.update(|deck| deck.width = 70.0);

    assert_eq!(history.present().width, 70.0);
    history.undo();
    assert_eq!(history.present().width, 63.5);
    assert_eq!(history.present().front_styles.len(), 2);
    history.undo();
    assert_eq!(history.present().front_styles.len(), 1);
    history.redo();
    assert!(history.present().front_styles.contains_key("front-style-1"));
}
