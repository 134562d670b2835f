use std::path::Path;

use card_layout::{
    Deck, PrintOptions, PrintPage, PrintPlan, Rect, RenderedCards, SlotFrame, SlotPlacement,
};
use printpdf::graphics::{LinePoint, PaintMode, Point, Polygon, PolygonRing, WindingOrder};
use printpdf::*;

use crate::types::*;

const PLACEHOLDER_GRAY: f32 = 200.0 / 255.0;
const GUIDE_GRAY: f32 = 150.0 / 255.0;
const LABEL_INSET_MM: f64 = 2.0;

/// Write the print plan as a duplex-ready PDF.
///
/// Slots with a rendered image reference are outlined; the rest get a
/// light-gray placeholder. Cut guides are drawn dashed over both.
pub async fn generate_pdf(
    plan: &PrintPlan,
    rendered: Option<&RenderedCards>,
    options: &ExportOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let output_path = output_path.as_ref().to_path_buf();
    let plan = plan.clone();
    let rendered = rendered.cloned();
    let options = options.clone();

    let bytes = tokio::task::spawn_blocking(move || {
        generate_pdf_bytes(&plan, rendered.as_ref(), &options)
    })
    .await??;

    tokio::fs::write(&output_path, bytes).await?;
    log::info!("Wrote {}", output_path.display());

    Ok(())
}

/// Compose a deck and write its proof PDF with the bitmaps stored on the deck.
///
/// Returns the plan that was printed.
pub async fn export_deck(
    deck: &Deck,
    print: &PrintOptions,
    options: &ExportOptions,
    output_path: impl AsRef<Path>,
) -> Result<PrintPlan> {
    print.validate()?;
    deck.validate()?;

    let plan = card_layout::compose(deck, print);
    let rendered = RenderedCards::from_deck(deck);
    let missing = rendered.missing(&card_layout::render_requests(deck)).len();
    if missing > 0 {
        log::warn!(
            "{} of the deck's styles have no rendered image, drawing placeholders",
            missing
        );
    }

    let rendered = (!rendered.is_empty()).then_some(&rendered);
    generate_pdf(&plan, rendered, options, output_path).await?;
    Ok(plan)
}

pub fn generate_pdf_bytes(
    plan: &PrintPlan,
    rendered: Option<&RenderedCards>,
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    if plan.is_empty() {
        return Err(PrintError::NoPages);
    }

    let mut doc = PdfDocument::new(&options.title);
    let page_w = plan.layout.page_width;
    let page_h = plan.layout.page_height;

    let pages: Vec<PdfPage> = plan
        .pages_in_order(options.page_order)
        .into_iter()
        .map(|page| {
            PdfPage::new(
                Mm(page_w as f32),
                Mm(page_h as f32),
                page_ops(page, page_h, rendered, options),
            )
        })
        .collect();
    log::debug!("Generating {} PDF pages", pages.len());

    doc.pages = pages;

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::debug!("PDF writer reported {} warnings", warnings.len());
    }

    Ok(bytes)
}

fn page_ops(
    page: &PrintPage,
    page_h: f64,
    rendered: Option<&RenderedCards>,
    options: &ExportOptions,
) -> Vec<Op> {
    let mut ops = Vec::new();

    for slot in &page.slots {
        let image = rendered.and_then(|r| r.image_for(page, slot));
        let outline = slot_outline(&slot.rect, page_h);

        match image {
            Some(_) => {
                ops.push(Op::SetOutlineColor { col: gray(GUIDE_GRAY) });
                ops.push(Op::SetOutlineThickness { pt: Pt(0.25) });
                ops.push(draw(outline.clone(), PaintMode::Stroke));
            }
            None => {
                ops.push(Op::SetFillColor { col: gray(PLACEHOLDER_GRAY) });
                ops.push(draw(outline.clone(), PaintMode::Fill));
            }
        }

        if slot.frame == SlotFrame::CutGuide {
            ops.push(Op::SetOutlineColor { col: gray(GUIDE_GRAY) });
            ops.push(Op::SetOutlineThickness { pt: Pt(0.5) });
            ops.push(Op::SetLineDashPattern { dash: dashed() });
            ops.push(draw(outline, PaintMode::Stroke));
            ops.push(Op::SetLineDashPattern { dash: solid() });
        }

        if options.labels {
            push_label(&mut ops, slot, image, page_h, options.label_font_size_pt);
        }
    }

    ops
}

fn push_label(
    ops: &mut Vec<Op>,
    slot: &SlotPlacement,
    image: Option<&str>,
    page_h: f64,
    font_size_pt: f32,
) {
    let style = slot.style_id.as_deref().unwrap_or("(none)");
    let mut text = format!("{} / {}", slot.card_id, style);
    if let Some(image) = image {
        text.push_str(&format!(" [{}]", image));
    }

    // Baseline sits one line below the slot's top edge
    let x = slot.rect.x + LABEL_INSET_MM;
    let y = page_h - slot.rect.y - LABEL_INSET_MM - card_layout::pt_to_mm(font_size_pt as f64);

    ops.push(Op::SetFillColor { col: gray(0.0) });
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point {
            x: Mm(x as f32).into_pt(),
            y: Mm(y as f32).into_pt(),
        },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        font: BuiltinFont::Helvetica,
        size: Pt(font_size_pt),
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(text)],
        font: BuiltinFont::Helvetica,
    });
    ops.push(Op::EndTextSection);
}

/// Corners of a top-left-origin rect in PDF points, bottom-left origin.
fn slot_outline(rect: &Rect, page_h: f64) -> Vec<LinePoint> {
    let left = Mm(rect.x as f32).into_pt();
    let right = Mm(rect.right() as f32).into_pt();
    let top = Mm((page_h - rect.y) as f32).into_pt();
    let bottom = Mm((page_h - rect.bottom()) as f32).into_pt();

    [(left, bottom), (right, bottom), (right, top), (left, top)]
        .into_iter()
        .map(|(x, y)| LinePoint {
            p: Point { x, y },
            bezier: false,
        })
        .collect()
}

fn draw(points: Vec<LinePoint>, mode: PaintMode) -> Op {
    Op::DrawPolygon {
        polygon: Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        },
    }
}

fn gray(level: f32) -> printpdf::color::Color {
    printpdf::color::Color::Rgb(Rgb::new(level, level, level, None))
}

fn dashed() -> LineDashPattern {
    LineDashPattern {
        dash_1: Some(3),
        gap_1: Some(3),
        dash_2: None,
        gap_2: None,
        dash_3: None,
        gap_3: None,
        offset: 0,
    }
}

fn solid() -> LineDashPattern {
    LineDashPattern {
        dash_1: None,
        gap_1: None,
        dash_2: None,
        gap_2: None,
        dash_3: None,
        gap_3: None,
        offset: 0,
    }
}
