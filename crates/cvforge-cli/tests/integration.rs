//! End-to-end CLI generation tests

use std::fs;
use std::io::Cursor;
use std::path::Path;

use chrono::NaiveDate;
use cvforge_cli::generate_all;
use cvforge_content::SiteContent;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream};
use tempfile::TempDir;
use zip::ZipArchive;

/// Build a minimal PDF with the given number of A4 pages
fn make_pdf(page_count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids = Vec::new();

    for _ in 0..page_count {
        let content = Content {
            operations: vec![Operation::new("q", vec![]), Operation::new("Q", vec![])],
        };
        let content_id =
            doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));
        let mut page = Dictionary::new();
        page.set("Type", Object::Name(b"Page".to_vec()));
        page.set("Parent", Object::Reference(pages_id));
        page.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(595.28),
                Object::Real(841.89),
            ]),
        );
        page.set("Contents", Object::Reference(content_id));
        page.set("Resources", Object::Dictionary(Dictionary::new()));
        kids.push(Object::Reference(doc.add_object(page)));
    }

    let count = kids.len() as i64;
    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", Object::Integer(count));
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// Lay out a complete assets directory for the sample content
fn setup_assets(assets: &Path) {
    let content = SiteContent::sample();
    fs::write(
        assets.join("content.json"),
        serde_json::to_vec_pretty(&content).unwrap(),
    )
    .unwrap();

    fs::create_dir_all(assets.join("cv")).unwrap();
    fs::write(assets.join("cv/base_en.pdf"), make_pdf(2)).unwrap();
    fs::write(assets.join("cv/base_de.pdf"), make_pdf(2)).unwrap();

    fs::create_dir_all(assets.join("certificates")).unwrap();
    fs::write(assets.join("certificates/security-plus.pdf"), make_pdf(1)).unwrap();

    fs::write(assets.join("profile.jpg"), [0xff, 0xd8, 0xff, 0xe0]).unwrap();
}

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
}

#[test]
fn test_generates_all_six_documents() {
    let dir = TempDir::new().unwrap();
    let assets = dir.path().join("public");
    fs::create_dir_all(&assets).unwrap();
    setup_assets(&assets);
    let out = assets.join("cv-out");

    let outputs = generate_all(&assets, &out, reference_date()).unwrap();
    assert_eq!(outputs.len(), 6);

    for name in [
        "christian_erben_cv_en.pdf",
        "christian_erben_cv_en_with_certificates.pdf",
        "christian_erben_cv_en.docx",
        "christian_erben_cv_de.pdf",
        "christian_erben_cv_de_with_certificates.pdf",
        "christian_erben_cv_de.docx",
    ] {
        let path = out.join(name);
        assert!(path.is_file(), "missing output {name}");
        assert!(outputs.contains(&path), "{name} not reported");
    }
}

#[test]
fn test_merged_pdf_gains_certificate_pages() {
    let dir = TempDir::new().unwrap();
    let assets = dir.path().join("public");
    fs::create_dir_all(&assets).unwrap();
    setup_assets(&assets);
    let out = assets.join("cv-out");

    generate_all(&assets, &out, reference_date()).unwrap();

    let plain = Document::load(out.join("christian_erben_cv_en.pdf")).unwrap();
    let merged =
        Document::load(out.join("christian_erben_cv_en_with_certificates.pdf")).unwrap();
    assert_eq!(plain.get_pages().len(), 2);
    // Two base pages plus the one-page sample certificate
    assert_eq!(merged.get_pages().len(), 3);
}

#[test]
fn test_docx_output_is_valid_package() {
    let dir = TempDir::new().unwrap();
    let assets = dir.path().join("public");
    fs::create_dir_all(&assets).unwrap();
    setup_assets(&assets);
    let out = assets.join("cv-out");

    generate_all(&assets, &out, reference_date()).unwrap();

    let bytes = fs::read(out.join("christian_erben_cv_de.docx")).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert!(archive.by_name("word/document.xml").is_ok());
    assert!(archive.by_name("word/media/profile.jpg").is_ok());
}

#[test]
fn test_missing_certificate_aborts_without_merged_output() {
    let dir = TempDir::new().unwrap();
    let assets = dir.path().join("public");
    fs::create_dir_all(&assets).unwrap();
    setup_assets(&assets);
    fs::remove_file(assets.join("certificates/security-plus.pdf")).unwrap();
    let out = assets.join("cv-out");

    let err = generate_all(&assets, &out, reference_date()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("security-plus.pdf"), "got: {message}");

    assert!(!out
        .join("christian_erben_cv_en_with_certificates.pdf")
        .exists());
}

#[test]
fn test_missing_content_model_is_reported() {
    let dir = TempDir::new().unwrap();
    let assets = dir.path().join("public");
    fs::create_dir_all(&assets).unwrap();
    let out = assets.join("cv-out");

    let err = generate_all(&assets, &out, reference_date()).unwrap_err();
    assert!(format!("{err:#}").contains("content.json"));
}
