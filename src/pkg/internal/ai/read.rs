use std::io::Cursor;

use lopdf::Document;

use crate::prelude::{Error, Result};

/// Extracts plain text from PDF bytes. Pages that fail to extract are
/// skipped with a warning; an image-only document yields empty text,
/// which downstream stages accept as-is.
pub fn extract_text(data: &[u8]) -> Result<String> {
    let cursor = Cursor::new(data);
    let doc = Document::load_from(cursor)
        .map_err(|e| Error::Extraction(format!("could not read PDF: {}", e)))?;

    let pages = doc.get_pages();
    let mut text = String::new();
    for page_num in pages.keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push(' ');
            }
            Err(e) => {
                tracing::warn!("failed to extract text from page {}: {}", page_num, e);
            }
        }
    }

    Ok(text.trim().to_string())
}
