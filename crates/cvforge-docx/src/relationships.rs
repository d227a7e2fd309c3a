//! Relationship registry for DOCX package parts
//!
//! OOXML maps relationship IDs to targets through _rels/*.rels files. The
//! generated resume only needs two kinds: the styles part and the embedded
//! profile photo.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{DocxError, Result};

/// OOXML namespace for relationships
pub const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

impl Relationships {
    /// Image relationship type
    pub const TYPE_IMAGE: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
    /// Styles relationship type
    pub const TYPE_STYLES: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
}

/// Relationship map with deterministic serialization order
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Relationship IDs in insertion order
    order: Vec<String>,
    /// Map of relationship ID to target
    map: HashMap<String, RelationshipTarget>,
    /// Counter for generating unique IDs (starts at 1)
    next_id_counter: u32,
}

impl Default for Relationships {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            map: HashMap::new(),
            next_id_counter: 1, // IDs start at rId1
        }
    }
}

/// A relationship target with its type
#[derive(Debug, Clone)]
pub struct RelationshipTarget {
    /// The target path, relative to the owning part
    pub target: String,
    /// The relationship type URI
    pub rel_type: String,
}

impl Relationships {
    /// Create an empty relationships map
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse relationships from XML bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut order = Vec::new();
        let mut map = HashMap::new();
        let mut max_id: u32 = 0;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    if e.local_name().as_ref() == b"Relationship" {
                        let mut id = None;
                        let mut target = None;
                        let mut rel_type = None;

                        for attr in e.attributes().filter_map(|a| a.ok()) {
                            match attr.key.as_ref() {
                                b"Id" => {
                                    id = attr.unescape_value().ok().map(|s| s.to_string());
                                }
                                b"Target" => {
                                    target = attr.unescape_value().ok().map(|s| s.to_string());
                                }
                                b"Type" => {
                                    rel_type = attr.unescape_value().ok().map(|s| s.to_string());
                                }
                                _ => {}
                            }
                        }

                        if let (Some(id), Some(target)) = (id, target) {
                            if let Some(num) = extract_id_number(&id) {
                                max_id = max_id.max(num);
                            }

                            order.push(id.clone());
                            map.insert(
                                id,
                                RelationshipTarget {
                                    target,
                                    rel_type: rel_type.unwrap_or_default(),
                                },
                            );
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(DocxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(Self {
            order,
            map,
            next_id_counter: max_id + 1,
        })
    }

    /// Add a new relationship and return the generated ID (e.g., "rId3")
    pub fn add(&mut self, target: String, rel_type: String) -> String {
        let id = format!("rId{}", self.next_id_counter);
        self.next_id_counter += 1;

        self.order.push(id.clone());
        self.map
            .insert(id.clone(), RelationshipTarget { target, rel_type });

        id
    }

    /// Serialize relationships to a .rels XML document
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Relationships xmlns="{}">"#, RELATIONSHIPS_NS));
        xml.push('\n');

        // Iterate in insertion order for deterministic output
        for id in &self.order {
            if let Some(rel) = self.map.get(id) {
                xml.push_str("  <Relationship");
                xml.push_str(&format!(r#" Id="{}""#, escape_xml(id)));
                xml.push_str(&format!(r#" Type="{}""#, escape_xml(&rel.rel_type)));
                xml.push_str(&format!(r#" Target="{}""#, escape_xml(&rel.target)));
                xml.push_str("/>\n");
            }
        }

        xml.push_str("</Relationships>");
        xml
    }

    /// Get the target for a relationship ID
    pub fn get(&self, id: &str) -> Option<&str> {
        self.map.get(id).map(|r| r.target.as_str())
    }

    /// Check if a relationship is an image
    pub fn is_image(&self, id: &str) -> bool {
        self.map
            .get(id)
            .map(|r| r.rel_type == Self::TYPE_IMAGE)
            .unwrap_or(false)
    }

    /// Get the number of relationships
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if there are no relationships
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Extract the numeric portion from a relationship ID (e.g., "rId5" -> 5)
fn extract_id_number(id: &str) -> Option<u32> {
    id.strip_prefix("rId").and_then(|num_str| num_str.parse().ok())
}

/// Escape special XML characters in attribute values and text
pub(crate) fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
