//! Running footer stamping
//!
//! After the merged document is complete, every page gets two centered
//! lines in the sidebar column near the page bottom: "Page i of N" and
//! "Last updated: Month Year". The total is computed once from the final
//! page count, so certificate pages are included.

use cvforge_content::FooterLabels;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::compositor::draw_text;
use crate::error::Result;
use crate::metrics::StandardFont;
use crate::theme::{CertPageLayout, ResolvedTheme};

/// Stamp footers onto every existing page of `document`, in place
///
/// `font_name` must resolve to Helvetica in every page's font resources;
/// the assembler guarantees this by registering the same font handle on
/// each page it creates.
pub fn stamp_footers(
    document: &mut Document,
    labels: &FooterLabels,
    theme: &ResolvedTheme,
    layout: &CertPageLayout,
    font_name: &str,
) -> Result<()> {
    let pages: Vec<ObjectId> = document.get_pages().values().copied().collect();
    let total = pages.len();
    let size = layout.footer_font_size;
    let update_line = labels.update_line();

    for (index, page_id) in pages.iter().enumerate() {
        let page_line = labels.page_line(index + 1, total);
        let mut ops = Vec::new();
        for (text, y) in [
            (page_line.as_str(), layout.footer_line1_y),
            (update_line.as_str(), layout.footer_line2_y),
        ] {
            let text_width = StandardFont::Helvetica.text_width(text, size);
            let x = (layout.sidebar_width - text_width) / 2.0;
            draw_text(&mut ops, font_name, size, theme.footer_text, x, y, text);
        }

        let encoded = Content { operations: ops }.encode()?;
        let stream_id = document.add_object(Stream::new(Dictionary::new(), encoded));
        append_page_content(document, *page_id, stream_id)?;
    }

    log::debug!("stamped footers on {total} pages");
    Ok(())
}

/// Append a content stream to a page, promoting Contents to an array
fn append_page_content(
    document: &mut Document,
    page_id: ObjectId,
    stream_id: ObjectId,
) -> Result<()> {
    let page = document.get_object_mut(page_id)?.as_dict_mut()?;
    let new_contents = match page.get(b"Contents") {
        Ok(Object::Reference(existing)) => {
            Object::Array(vec![Object::Reference(*existing), Object::Reference(stream_id)])
        }
        Ok(Object::Array(arr)) => {
            let mut arr = arr.clone();
            arr.push(Object::Reference(stream_id));
            Object::Array(arr)
        }
        _ => Object::Reference(stream_id),
    };
    page.set("Contents", new_contents);
    Ok(())
}
