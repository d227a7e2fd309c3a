//! Package-level tests for generated DOCX files

use std::io::Cursor;

use cvforge_content::{Locale, SiteContent};
use cvforge_docx::{generate_docx, DocxArchive, Relationships};

const JPEG_STUB: &[u8] = &[0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, 0x4a, 0x46, 0x49, 0x46];

fn generate(locale: Locale) -> DocxArchive {
    let content = SiteContent::sample();
    let bytes = generate_docx(locale, &content, JPEG_STUB).unwrap();
    DocxArchive::from_reader(Cursor::new(bytes)).unwrap()
}

#[test]
fn test_package_contains_required_parts() {
    let archive = generate(Locale::En);

    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "word/document.xml",
        "word/_rels/document.xml.rels",
        "word/styles.xml",
        "word/media/profile.jpg",
        "docProps/core.xml",
    ] {
        assert!(archive.contains(part), "missing part {part}");
    }
}

#[test]
fn test_profile_image_is_stored_verbatim() {
    let archive = generate(Locale::En);
    assert_eq!(archive.get("word/media/profile.jpg"), Some(JPEG_STUB));
}

#[test]
fn test_document_references_image_relationship() {
    let archive = generate(Locale::En);

    let rels_xml = archive.get("word/_rels/document.xml.rels").unwrap();
    let rels = Relationships::parse(rels_xml).unwrap();
    assert_eq!(rels.get("rId1"), Some("styles.xml"));
    assert_eq!(rels.get("rId2"), Some("media/profile.jpg"));
    assert!(rels.is_image("rId2"));

    let document = archive.get_string("word/document.xml").unwrap();
    assert!(document.contains(r#"r:embed="rId2""#));
}

#[test]
fn test_locale_selects_section_headings() {
    let en = generate(Locale::En);
    let de = generate(Locale::De);

    let en_doc = en.get_string("word/document.xml").unwrap();
    let de_doc = de.get_string("word/document.xml").unwrap();

    assert!(en_doc.contains(">Experience<"));
    assert!(de_doc.contains(">Berufserfahrung<"));
    assert!(de_doc.contains("M\u{fc}nchen, Deutschland"));
    assert!(en_doc.contains("Munich, Germany"));
}

#[test]
fn test_content_types_declare_jpeg() {
    let archive = generate(Locale::En);
    let types = archive.get_string("[Content_Types].xml").unwrap();
    assert!(types.contains(r#"Extension="jpg" ContentType="image/jpeg""#));
    assert!(types.contains("/word/document.xml"));
}

#[test]
fn test_generation_is_deterministic() {
    let content = SiteContent::sample();
    let first = generate_docx(Locale::En, &content, JPEG_STUB).unwrap();
    let second = generate_docx(Locale::En, &content, JPEG_STUB).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_a4_section_properties() {
    let archive = generate(Locale::De);
    let document = archive.get_string("word/document.xml").unwrap();
    assert!(document.contains(r#"<w:pgSz w:w="11906" w:h="16838"/>"#));
}
