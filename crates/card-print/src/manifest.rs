use std::path::Path;

use card_layout::PrintPlan;

use crate::types::*;

pub const MANIFEST_HEADER: [&str; 11] = [
    "page", "side", "slot", "row", "col", "x_mm", "y_mm", "width_mm", "height_mm", "card_id",
    "style_id",
];

/// Write one CSV row per placed slot, in front-then-back page order.
pub async fn write_manifest(plan: &PrintPlan, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref().to_path_buf();
    let plan = plan.clone();

    let bytes = tokio::task::spawn_blocking(move || manifest_bytes(&plan)).await??;
    tokio::fs::write(&output_path, bytes).await?;
    log::info!("Wrote manifest {}", output_path.display());

    Ok(())
}

pub fn manifest_bytes(plan: &PrintPlan) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(MANIFEST_HEADER)?;

    for page in plan.fronts.iter().chain(&plan.backs) {
        for slot in &page.slots {
            writer.write_record([
                (page.sheet_index + 1).to_string(),
                page.side.to_string(),
                slot.slot_index.to_string(),
                slot.grid_pos.row.to_string(),
                slot.grid_pos.col.to_string(),
                format!("{:.2}", slot.rect.x),
                format!("{:.2}", slot.rect.y),
                format!("{:.2}", slot.rect.width),
                format!("{:.2}", slot.rect.height),
                slot.card_id.clone(),
                slot.style_id.clone().unwrap_or_default(),
            ])?;
        }
    }

    writer
        .into_inner()
        .map_err(|e| PrintError::Io(e.into_error()))
}
