//! DOCX resume generation
//!
//! Builds the full OPC package from scratch for one locale: the main
//! document part, styles, relationships, content types, core properties,
//! and the embedded profile photo. The document XML is assembled into a
//! string buffer paragraph by paragraph.

use cvforge_content::{Locale, SiteContent, Skill, SkillCategory};

use crate::archive::DocxArchive;
use crate::error::Result;
use crate::relationships::{escape_xml, Relationships};

/// WordprocessingML main namespace
const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Profile photo edge length: 1.25 inch in EMU (914400 EMU per inch)
const PHOTO_EDGE_EMU: i64 = 1143000;

/// A4 page size in twentieths of a point
const PAGE_WIDTH_TWIPS: u32 = 11906;
const PAGE_HEIGHT_TWIPS: u32 = 16838;

/// Section headings for the two supported locales
struct SectionLabels {
    about: &'static str,
    experience: &'static str,
    skills: &'static str,
    certificates: &'static str,
}

impl SectionLabels {
    fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                about: "About",
                experience: "Experience",
                skills: "Skills",
                certificates: "Certificates",
            },
            Locale::De => Self {
                about: "\u{dc}ber mich",
                experience: "Berufserfahrung",
                skills: "Kenntnisse",
                certificates: "Zertifikate",
            },
        }
    }
}

fn category_label(category: SkillCategory, locale: Locale) -> &'static str {
    match (category, locale) {
        (SkillCategory::Security, Locale::En) => "Security",
        (SkillCategory::Security, Locale::De) => "Sicherheit",
        (SkillCategory::Infrastructure, Locale::En) => "Infrastructure",
        (SkillCategory::Infrastructure, Locale::De) => "Infrastruktur",
        (SkillCategory::Tools, _) => "Tools & DevOps",
        (SkillCategory::Ai, Locale::En) => "AI",
        (SkillCategory::Ai, Locale::De) => "KI",
        (SkillCategory::Management, _) => "Management",
        (SkillCategory::Languages, Locale::En) => "Languages",
        (SkillCategory::Languages, Locale::De) => "Sprachen",
        (SkillCategory::Compliance, _) => "Compliance",
    }
}

/// Generate a complete DOCX resume for one locale
///
/// `profile_image` must be JPEG bytes; it is stored verbatim as
/// word/media/profile.jpg and referenced by an inline drawing at the top
/// of the document.
pub fn generate_docx(
    locale: Locale,
    content: &SiteContent,
    profile_image: &[u8],
) -> Result<Vec<u8>> {
    let mut rels = Relationships::new();
    rels.add(
        "styles.xml".to_string(),
        Relationships::TYPE_STYLES.to_string(),
    );
    let image_rel_id = rels.add(
        "media/profile.jpg".to_string(),
        Relationships::TYPE_IMAGE.to_string(),
    );

    let mut writer = DocumentWriter::new();
    writer.generate(locale, content, &image_rel_id);

    let mut archive = DocxArchive::new();
    archive.set_string("[Content_Types].xml", content_types_xml());
    archive.set_string("_rels/.rels", root_rels_xml());
    archive.set_string("word/document.xml", writer.into_xml());
    archive.set_string("word/_rels/document.xml.rels", rels.to_xml());
    archive.set_string("word/styles.xml", styles_xml());
    archive.set_string("docProps/core.xml", core_props_xml(content, locale));
    archive.set("word/media/profile.jpg", profile_image.to_vec());

    log::info!(
        "generated {} DOCX package with {} parts",
        locale,
        archive.file_list().count()
    );
    archive.to_bytes()
}

/// Builds word/document.xml into a string buffer
struct DocumentWriter {
    output: String,
}

impl DocumentWriter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn into_xml(self) -> String {
        self.output
    }

    fn generate(&mut self, locale: Locale, content: &SiteContent, image_rel_id: &str) {
        let labels = SectionLabels::for_locale(locale);

        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(&format!(
            r#"<w:document xmlns:w="{W_NS}" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#
        ));
        self.output.push_str("\n<w:body>\n");

        self.generate_photo(image_rel_id);

        self.heading("Heading1", &content.profile.name);
        self.paragraph(&[Run::plain(content.profile.title.get(locale))]);
        self.generate_contact(content);

        self.heading("Heading2", labels.about);
        for paragraph in &content.profile.about {
            self.paragraph(&[Run::plain(paragraph.get(locale))]);
        }

        self.heading("Heading2", labels.experience);
        for experience in &content.experience {
            let position = format!(
                "{} - {}",
                experience.title.get(locale),
                experience.company
            );
            self.paragraph(&[Run::bold(&position)]);
            let where_when = format!(
                "{} | {}",
                experience.period.get(locale),
                experience.location.get(locale)
            );
            self.paragraph(&[Run::italic(&where_when)]);
            for item in &experience.description {
                let bullet = format!("\u{2022} {}", item.text.get(locale));
                if item.achievement {
                    self.paragraph(&[Run::bold(&bullet)]);
                } else {
                    self.paragraph(&[Run::plain(&bullet)]);
                }
            }
        }

        self.heading("Heading2", labels.skills);
        self.generate_skills(locale, &content.skills);

        if !content.certificates.is_empty() {
            self.heading("Heading2", labels.certificates);
            for certificate in &content.certificates {
                let line = format!(
                    "\u{2022} {} - {}",
                    certificate.title.get(locale),
                    certificate.issuer.get(locale)
                );
                self.paragraph(&[Run::plain(&line)]);
            }
        }

        self.generate_section_properties();
        self.output.push_str("</w:body>\n</w:document>\n");
    }

    /// Skills grouped by category, one line per category in model order
    fn generate_skills(&mut self, locale: Locale, skills: &[Skill]) {
        let mut seen: Vec<SkillCategory> = Vec::new();
        for skill in skills {
            if !seen.contains(&skill.category) {
                seen.push(skill.category);
            }
        }
        for category in seen {
            let names: Vec<&str> = skills
                .iter()
                .filter(|s| s.category == category)
                .map(|s| s.name.get(locale))
                .collect();
            let label = format!("{}: ", category_label(category, locale));
            let joined = names.join(", ");
            self.paragraph(&[Run::bold(&label), Run::plain(&joined)]);
        }
    }

    fn generate_contact(&mut self, content: &SiteContent) {
        let mut parts = vec![
            content.contact.email.clone(),
            content.contact.phone.clone(),
        ];
        if let Some(homepage) = &content.contact.homepage {
            parts.push(homepage.clone());
        }
        let line = parts.join(" | ");
        self.paragraph(&[Run::plain(&line)]);
    }

    /// Inline drawing paragraph for the profile photo
    fn generate_photo(&mut self, rel_id: &str) {
        self.output.push_str("<w:p>\n  <w:r>\n    <w:drawing>\n");
        self.output.push_str(&format!(
            r#"      <wp:inline distT="0" distB="0" distL="0" distR="0">
        <wp:extent cx="{PHOTO_EDGE_EMU}" cy="{PHOTO_EDGE_EMU}"/>
        <wp:docPr id="1" name="Profile photo"/>
        <a:graphic>
          <a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture">
            <pic:pic>
              <pic:nvPicPr>
                <pic:cNvPr id="1" name="Profile photo"/>
                <pic:cNvPicPr/>
              </pic:nvPicPr>
              <pic:blipFill>
                <a:blip r:embed="{rel_id}"/>
                <a:stretch><a:fillRect/></a:stretch>
              </pic:blipFill>
              <pic:spPr>
                <a:xfrm><a:off x="0" y="0"/><a:ext cx="{PHOTO_EDGE_EMU}" cy="{PHOTO_EDGE_EMU}"/></a:xfrm>
                <a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
              </pic:spPr>
            </pic:pic>
          </a:graphicData>
        </a:graphic>
      </wp:inline>
"#
        ));
        self.output.push_str("    </w:drawing>\n  </w:r>\n</w:p>\n");
    }

    fn heading(&mut self, style: &str, text: &str) {
        self.output.push_str("<w:p>\n<w:pPr>\n");
        self.output
            .push_str(&format!("<w:pStyle w:val=\"{style}\"/>\n"));
        self.output.push_str("</w:pPr>\n");
        self.push_run(&Run::plain(text));
        self.output.push_str("</w:p>\n");
    }

    fn paragraph(&mut self, runs: &[Run<'_>]) {
        self.output.push_str("<w:p>\n");
        for run in runs {
            self.push_run(run);
        }
        self.output.push_str("</w:p>\n");
    }

    fn push_run(&mut self, run: &Run<'_>) {
        self.output.push_str("<w:r>\n");
        if run.bold || run.italic {
            self.output.push_str("<w:rPr>\n");
            if run.bold {
                self.output.push_str("<w:b/>\n");
            }
            if run.italic {
                self.output.push_str("<w:i/>\n");
            }
            self.output.push_str("</w:rPr>\n");
        }
        self.output.push_str(&format!(
            "<w:t xml:space=\"preserve\">{}</w:t>\n",
            escape_xml(run.text)
        ));
        self.output.push_str("</w:r>\n");
    }

    fn generate_section_properties(&mut self) {
        self.output.push_str(&format!(
            "<w:sectPr>\n<w:pgSz w:w=\"{PAGE_WIDTH_TWIPS}\" w:h=\"{PAGE_HEIGHT_TWIPS}\"/>\n<w:pgMar w:top=\"1134\" w:right=\"1134\" w:bottom=\"1134\" w:left=\"1134\"/>\n</w:sectPr>\n"
        ));
    }
}

/// One text run with optional emphasis
struct Run<'a> {
    text: &'a str,
    bold: bool,
    italic: bool,
}

impl<'a> Run<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            bold: false,
            italic: false,
        }
    }

    fn bold(text: &'a str) -> Self {
        Self {
            text,
            bold: true,
            italic: false,
        }
    }

    fn italic(text: &'a str) -> Self {
        Self {
            text,
            bold: false,
            italic: true,
        }
    }
}

fn content_types_xml() -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Default Extension="jpg" ContentType="image/jpeg"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
</Types>"#,
    );
    xml
}

fn root_rels_xml() -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
</Relationships>"#,
    );
    xml
}

fn styles_xml() -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(&format!(
        r#"<w:styles xmlns:w="{W_NS}">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:rPr><w:sz w:val="22"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading1">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:spacing w:before="240" w:after="120"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="40"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="Heading2">
    <w:name w:val="heading 2"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:spacing w:before="240" w:after="120"/></w:pPr>
    <w:rPr><w:b/><w:sz w:val="28"/></w:rPr>
  </w:style>
</w:styles>"#
    ));
    xml
}

fn core_props_xml(content: &SiteContent, locale: Locale) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(&format!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <dc:title>{} - CV ({})</dc:title>
  <dc:creator>{}</dc:creator>
  <dc:language>{}</dc:language>
</cp:coreProperties>"#,
        escape_xml(&content.profile.name),
        locale,
        escape_xml(&content.profile.name),
        locale
    ));
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_xml_contains_all_sections() {
        let content = SiteContent::sample();
        let mut writer = DocumentWriter::new();
        writer.generate(Locale::En, &content, "rId2");
        let xml = writer.into_xml();

        assert!(xml.contains("Christian Erben"));
        assert!(xml.contains(">About<"));
        assert!(xml.contains(">Experience<"));
        assert!(xml.contains(">Skills<"));
        assert!(xml.contains(">Certificates<"));
        assert!(xml.contains("Security Consultant - Acme GmbH"));
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
        assert!(xml.contains("<w:sectPr>"));
    }

    #[test]
    fn test_german_sections() {
        let content = SiteContent::sample();
        let mut writer = DocumentWriter::new();
        writer.generate(Locale::De, &content, "rId2");
        let xml = writer.into_xml();

        assert!(xml.contains("Berufserfahrung"));
        assert!(xml.contains("Kenntnisse"));
        assert!(xml.contains("Zertifikate"));
        assert!(xml.contains("Sicherheitsberater - Acme GmbH"));
    }

    #[test]
    fn test_achievement_bullets_are_bold() {
        let content = SiteContent::sample();
        let mut writer = DocumentWriter::new();
        writer.generate(Locale::En, &content, "rId2");
        let xml = writer.into_xml();

        // The achievement bullet is preceded by a bold run property
        let achievement_pos = xml.find("Cut incident response time").unwrap();
        let run_start = xml[..achievement_pos].rfind("<w:r>").unwrap();
        assert!(xml[run_start..achievement_pos].contains("<w:b/>"));

        let plain_pos = xml.find("Designed zero-trust").unwrap();
        let run_start = xml[..plain_pos].rfind("<w:r>").unwrap();
        assert!(!xml[run_start..plain_pos].contains("<w:b/>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut content = SiteContent::sample();
        content.profile.name = "A & B <GmbH>".to_string();
        let mut writer = DocumentWriter::new();
        writer.generate(Locale::En, &content, "rId2");
        let xml = writer.into_xml();

        assert!(xml.contains("A &amp; B &lt;GmbH&gt;"));
        assert!(!xml.contains("A & B <GmbH>"));
    }

    #[test]
    fn test_skills_grouped_by_category() {
        let content = SiteContent::sample();
        let mut writer = DocumentWriter::new();
        writer.generate(Locale::En, &content, "rId2");
        let xml = writer.into_xml();

        assert!(xml.contains("Security: "));
        assert!(xml.contains("Network Security"));
        assert!(xml.contains("Tools &amp; DevOps: "));
    }

    #[test]
    fn test_category_labels_are_locale_selected() {
        use cvforge_content::LocalizedText;

        assert_eq!(
            category_label(SkillCategory::Infrastructure, Locale::En),
            "Infrastructure"
        );
        assert_eq!(
            category_label(SkillCategory::Infrastructure, Locale::De),
            "Infrastruktur"
        );
        assert_eq!(
            category_label(SkillCategory::Tools, Locale::En),
            "Tools & DevOps"
        );

        let mut content = SiteContent::sample();
        content.skills.push(Skill {
            name: LocalizedText::new("Kubernetes", "Kubernetes"),
            category: SkillCategory::Infrastructure,
        });
        let mut writer = DocumentWriter::new();
        writer.generate(Locale::En, &content, "rId2");
        let xml = writer.into_xml();

        // No German category label may leak into the English document
        assert!(xml.contains("Infrastructure: "));
        assert!(!xml.contains("Infrastruktur"));
        assert!(!xml.contains("Sicherheit"));
    }
}
