//! CLI application logic
//!
//! Drives the whole generation run: load the content model, then for each
//! locale write the plain resume PDF, the certificate-merged PDF, and the
//! DOCX. All outputs are assembled fully in memory before anything is
//! written, so a failed run never leaves a truncated file behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

use cvforge_content::{Locale, SiteContent};
use cvforge_docx::generate_docx;
use cvforge_pdf::assembler::read_source_file;
use cvforge_pdf::PdfAssembler;

#[derive(Parser)]
#[command(name = "cvforge")]
#[command(author, version, about = "Generate CV documents from site content", long_about = None)]
pub struct Cli {
    /// Public assets directory with content.json, base PDFs, certificates,
    /// and the profile photo
    #[arg(long, default_value = "public")]
    assets_dir: PathBuf,

    /// Output directory for the generated documents
    #[arg(long, default_value = "public/cv")]
    out_dir: PathBuf,
}

/// Parse arguments and run the full generation
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let today = Local::now().date_naive();
    let generated = generate_all(&cli.assets_dir, &cli.out_dir, today)?;
    for path in &generated {
        println!("{}", path.display());
    }
    Ok(())
}

/// Generate every output document, returning the written paths in order
///
/// `reference_date` feeds the "Last updated" footer line; the binary
/// passes today, tests pass a fixed date.
pub fn generate_all(
    assets_dir: &Path,
    out_dir: &Path,
    reference_date: NaiveDate,
) -> Result<Vec<PathBuf>> {
    let content_path = assets_dir.join("content.json");
    let content = SiteContent::from_json_file(&content_path)
        .with_context(|| format!("loading content model from {}", content_path.display()))?;

    let profile_image = read_source_file(&assets_dir.join("profile.jpg"), None)
        .context("reading profile photo")?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let slug = file_slug(&content.profile.name);
    let assembler = PdfAssembler::with_defaults()?;
    let mut outputs = Vec::new();

    for locale in Locale::ALL {
        let base_path = assets_dir.join(format!("cv/base_{locale}.pdf"));
        let base = read_source_file(&base_path, None)
            .with_context(|| format!("reading {locale} base resume"))?;

        // Plain variant is the externally rendered base, copied as-is
        let plain_path = out_dir.join(format!("{slug}_cv_{locale}.pdf"));
        fs::write(&plain_path, &base)
            .with_context(|| format!("writing {}", plain_path.display()))?;
        outputs.push(plain_path);

        let merged = assembler
            .assemble(
                &base,
                &content.certificates,
                locale,
                assets_dir,
                reference_date,
            )
            .with_context(|| format!("assembling {locale} certificate-merged resume"))?;
        let merged_path = out_dir.join(format!("{slug}_cv_{locale}_with_certificates.pdf"));
        fs::write(&merged_path, &merged)
            .with_context(|| format!("writing {}", merged_path.display()))?;
        outputs.push(merged_path);

        let docx = generate_docx(locale, &content, &profile_image)
            .with_context(|| format!("generating {locale} DOCX resume"))?;
        let docx_path = out_dir.join(format!("{slug}_cv_{locale}.docx"));
        fs::write(&docx_path, &docx)
            .with_context(|| format!("writing {}", docx_path.display()))?;
        outputs.push(docx_path);

        log::info!("generated {locale} documents");
    }

    Ok(outputs)
}

/// Derive the output file name prefix from the person's name
///
/// "Christian Erben" becomes "christian_erben"; runs of non-alphanumeric
/// characters collapse into a single underscore.
fn file_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_separator = true;
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_was_separator = false;
        } else if !last_was_separator {
            slug.push('_');
            last_was_separator = true;
        }
    }
    slug.trim_end_matches('_').to_string()
}
