use card_layout::*;
use card_print::*;

fn sample_plan(cut_guides: bool) -> PrintPlan {
    let mut deck = Deck::new("Export");
    deck.front_styles.insert("monster".into(), Layout::new("Monster"));
    deck.cards.push(Card::new("goblin").with_style(Side::Front, "monster").with_count(2));
    for i in 0..5 {
        deck.cards.push(Card::new(format!("filler-{i}")));
    }
    let options = PrintOptions {
        cut_guides: Some(cut_guides),
        ..Default::default()
    };
    compose(&deck, &options)
}

#[test]
fn test_pdf_bytes_are_pdf() {
    let plan = sample_plan(true);
    let bytes = generate_pdf_bytes(&plan, None, &ExportOptions::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_pdf_with_rendered_images() {
    let plan = sample_plan(false);
    let mut rendered = RenderedCards::new();
    rendered.insert("monster", Side::Front, "monster.png");

    let options = ExportOptions {
        labels: false,
        page_order: PageOrder::Separate,
        ..Default::default()
    };
    let bytes = generate_pdf_bytes(&plan, Some(&rendered), &options).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_empty_plan_is_rejected() {
    let plan = compose(&Deck::new("Empty"), &PrintOptions::default());
    let err = generate_pdf_bytes(&plan, None, &ExportOptions::default()).unwrap_err();
    assert!(matches!(err, PrintError::NoPages));
}

#[test]
fn test_manifest_has_one_row_per_slot() {
    let plan = sample_plan(false);
    let bytes = manifest_bytes(&plan).unwrap();

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, MANIFEST_HEADER);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    // 7 expanded cards over two sheets, fronts and backs
    assert_eq!(rows.len(), 14);

    let first = &rows[0];
    assert_eq!(&first[0], "1");
    assert_eq!(&first[1], "front");
    assert_eq!(&first[9], "goblin");
    assert_eq!(&first[10], "monster");

    let last_front = &rows[6];
    assert_eq!(&last_front[0], "2");
    assert_eq!(&last_front[8], "88.90");

    let first_back = &rows[7];
    assert_eq!(&first_back[1], "back");
    assert_eq!(&first_back[10], "default-back");
    // Column is mirrored on the back
    assert_eq!(&first_back[4], "2");
}

#[tokio::test]
async fn test_write_pdf_and_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let pdf_path = dir.path().join("cards.pdf");
    let csv_path = dir.path().join("cards.csv");
    let plan = sample_plan(true);

    generate_pdf(&plan, None, &ExportOptions::default(), &pdf_path)
        .await
        .unwrap();
    write_manifest(&plan, &csv_path).await.unwrap();

    let pdf = tokio::fs::read(&pdf_path).await.unwrap();
    assert!(pdf.starts_with(b"%PDF"));
    let csv = tokio::fs::read_to_string(&csv_path).await.unwrap();
    assert!(csv.starts_with("page,side,slot"));
    assert_eq!(csv.lines().count(), 15);
}

const RENDERED_DECK: &str = r#"{
    "name": "Rendered",
    "cards": [
        { "id": "hero", "frontStyleId": "heroic", "count": 2 },
        { "id": "villain" }
    ],
    "frontStyles": {
        "default-front": { "name": "Default Front", "elements": [] },
        "heroic": { "name": "Heroic", "elements": [] }
    },
    "renderedCards": [
        { "styleId": "heroic", "side": "front", "image": "heroic.png" },
        { "styleId": "default-back", "side": "back", "image": "back.png" }
    ]
}"#;

#[tokio::test]
async fn test_export_deck_uses_stored_renders() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rendered.pdf");
    let deck = parse_deck(RENDERED_DECK.as_bytes()).unwrap();

    let plan = export_deck(&deck, &PrintOptions::default(), &ExportOptions::default(), &path)
        .await
        .unwrap();
    let pdf = tokio::fs::read(&path).await.unwrap();
    assert!(pdf.starts_with(b"%PDF"));

    let rendered = RenderedCards::from_deck(&deck);
    let front = &plan.fronts[0];
    let images: Vec<_> = front
        .slots
        .iter()
        .map(|slot| rendered.image_for(front, slot))
        .collect();
    assert_eq!(images, vec![Some("heroic.png"), Some("heroic.png"), None]);

    let back = &plan.backs[0];
    assert!(back
        .slots
        .iter()
        .all(|slot| rendered.image_for(back, slot) == Some("back.png")));
}

#[tokio::test]
async fn test_export_deck_rejects_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.pdf");

    let mut deck = Deck::new("Broken");
    deck.cards.push(Card::new("a"));
    deck.width = 0.0;
    let err = export_deck(&deck, &PrintOptions::default(), &ExportOptions::default(), &path)
        .await
        .unwrap_err();
    assert!(matches!(err, PrintError::Layout(LayoutError::InvalidDeck(_))));

    let mut options = PrintOptions::default();
    options.grid.spacing_mm = -2.0;
    let err = export_deck(&Deck::new("Fine"), &options, &ExportOptions::default(), &path)
        .await
        .unwrap_err();
    assert!(matches!(err, PrintError::Layout(LayoutError::Config(_))));
    assert!(!path.exists());
}
