mod manifest;
mod pdf;
mod types;

pub use manifest::{MANIFEST_HEADER, manifest_bytes, write_manifest};
pub use pdf::{export_deck, generate_pdf, generate_pdf_bytes};
pub use types::*;
