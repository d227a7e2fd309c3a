//! Merged PDF document assembly
//!
//! Orchestrates the full merge: re-emit the base resume pages, append one
//! styled page per certificate page, stamp footers, serialize once. Any
//! unreadable certificate file aborts the whole assembly; no partial
//! document is ever returned.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use cvforge_content::{CertificateDocument, FooterLabels, Locale};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::compositor::{caption_for_page, Compositor, FontHandles};
use crate::embed::{media_box, real, EmbeddedPage, FormXObject};
use crate::error::{PdfError, Result};
use crate::footer::stamp_footers;
use crate::metrics::StandardFont;
use crate::theme::{CertPageLayout, PageSize, ResolvedTheme, Theme};

/// Resource names under which the two standard fonts are registered
const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";

/// Read a required input file, mapping failure to the fatal error kind
///
/// `title` carries the human-readable certificate title for operator
/// triage when the file is a certificate attachment.
pub fn read_source_file(path: &Path, title: Option<&str>) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| PdfError::MissingSourceFile {
        path: path.display().to_string(),
        title: title.map(str::to_string),
        source,
    })
}

/// Assembles merged CV documents against a fixed theme and layout
///
/// Theme colors are validated eagerly at construction; a malformed color
/// never survives to page drawing.
#[derive(Debug, Clone)]
pub struct PdfAssembler {
    theme: ResolvedTheme,
    layout: CertPageLayout,
}

impl PdfAssembler {
    /// Create an assembler, validating every theme color up front
    pub fn new(theme: &Theme, layout: CertPageLayout) -> Result<Self> {
        Ok(Self {
            theme: theme.resolve()?,
            layout,
        })
    }

    /// Assembler with the default site theme and page layout
    pub fn with_defaults() -> Result<Self> {
        Self::new(&Theme::default(), CertPageLayout::default())
    }

    /// Merge the base resume with all certificate attachments
    ///
    /// Pages are appended in order: all base pages first, then per
    /// certificate (in content-model order), per certificate page (in
    /// file order), one newly created styled page. Footers are stamped
    /// after the page set is complete so totals reflect the final count.
    pub fn assemble(
        &self,
        base_bytes: &[u8],
        certificates: &[CertificateDocument],
        locale: Locale,
        assets_root: &Path,
        reference_date: NaiveDate,
    ) -> Result<Vec<u8>> {
        let base = Document::load_mem(base_bytes)?;
        let mut output = Document::with_version("1.7");
        let pages_id = output.new_object_id();

        let font_regular_id = output.add_object(standard_font_dict(StandardFont::Helvetica));
        let font_bold_id = output.add_object(standard_font_dict(StandardFont::HelveticaBold));
        let fonts = FontHandles {
            regular: FONT_REGULAR.to_string(),
            bold: FONT_BOLD.to_string(),
        };

        let base_pages: Vec<ObjectId> = base.get_pages().values().copied().collect();
        let base_size = base_pages
            .first()
            .and_then(|id| base.get_dictionary(*id).ok())
            .map(|dict| {
                let (_, _, width, height) = media_box(&base, dict);
                PageSize { width, height }
            })
            .unwrap_or(PageSize::A4);

        let mut page_refs = Vec::new();

        // Base resume pages, re-emitted 1:1 at their own size
        let mut base_cache = HashMap::new();
        for (index, page_id) in base_pages.iter().enumerate() {
            let name = format!("B{}", index + 1);
            let form = FormXObject::import(&mut output, &base, *page_id, name, &mut base_cache)?;
            let (width, height) = form.intrinsic_size();
            let mut ops = Vec::new();
            form.draw_into(&mut ops, 0.0, 0.0, width, height);
            let page = append_page(
                &mut output,
                pages_id,
                PageSize { width, height },
                ops,
                &form,
                font_regular_id,
                font_bold_id,
            )?;
            page_refs.push(Object::Reference(page));
        }

        // One styled output page per certificate page
        let compositor = Compositor::new(&self.theme, &self.layout);
        for (cert_index, cert) in certificates.iter().enumerate() {
            let path = cert.resolve_path(assets_root);
            let bytes = read_source_file(&path, Some(cert.title.get(locale)))?;
            let source =
                Document::load_mem(&bytes).map_err(|source| PdfError::InvalidSourceFile {
                    path: path.display().to_string(),
                    title: Some(cert.title.get(locale).to_string()),
                    source,
                })?;
            let source_pages: Vec<ObjectId> = source.get_pages().values().copied().collect();
            let page_count = source_pages.len();
            log::info!(
                "merging certificate '{}' ({} page{})",
                cert.title.get(locale),
                page_count,
                if page_count == 1 { "" } else { "s" }
            );

            let mut cache = HashMap::new();
            for (page_index, source_page) in source_pages.iter().enumerate() {
                let name = format!("C{}p{}", cert_index + 1, page_index + 1);
                let form =
                    FormXObject::import(&mut output, &source, *source_page, name, &mut cache)?;
                let caption =
                    caption_for_page(cert.title.get(locale), page_index + 1, page_count);
                let mut ops = Vec::new();
                compositor.compose_certificate_page(
                    &mut ops,
                    &form,
                    &caption,
                    cert.issuer.get(locale),
                    base_size.width,
                    base_size.height,
                    &fonts,
                );
                let page = append_page(
                    &mut output,
                    pages_id,
                    base_size,
                    ops,
                    &form,
                    font_regular_id,
                    font_bold_id,
                )?;
                page_refs.push(Object::Reference(page));
            }
        }

        let count = page_refs.len() as i64;
        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Kids", Object::Array(page_refs));
        pages_dict.set("Count", Object::Integer(count));
        output.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = output.add_object(catalog);
        output.trailer.set("Root", catalog_id);

        let labels = FooterLabels::for_locale(locale, reference_date);
        stamp_footers(&mut output, &labels, &self.theme, &self.layout, FONT_REGULAR)?;

        let mut buffer = Vec::new();
        output.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

fn standard_font_dict(font: StandardFont) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"Font".to_vec()));
    dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    dict.set("BaseFont", Object::Name(font.base_name().as_bytes().to_vec()));
    dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    dict
}

/// Create one output page with the given content and resources
fn append_page(
    output: &mut Document,
    pages_id: ObjectId,
    size: PageSize,
    ops: Vec<Operation>,
    form: &FormXObject,
    font_regular_id: ObjectId,
    font_bold_id: ObjectId,
) -> Result<ObjectId> {
    let encoded = Content { operations: ops }.encode()?;
    let content_id = output.add_object(Stream::new(Dictionary::new(), encoded));

    let mut font_resources = Dictionary::new();
    font_resources.set(FONT_REGULAR, Object::Reference(font_regular_id));
    font_resources.set(FONT_BOLD, Object::Reference(font_bold_id));

    let mut xobjects = Dictionary::new();
    xobjects.set(form.name().as_bytes(), Object::Reference(form.object_id()));

    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(font_resources));
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![real(0.0), real(0.0), real(size.width), real(size.height)]),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}
