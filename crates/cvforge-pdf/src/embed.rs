//! Foreign-page embedding
//!
//! A page from an externally loaded PDF is lifted into the output document
//! as a Form XObject: its content streams become the form body, its
//! resource dictionary is deep-copied behind an object cache, and its
//! MediaBox becomes the form BBox. The compositor only sees the
//! [`EmbeddedPage`] interface, so the embedding backend stays swappable.

use std::collections::HashMap;

use lopdf::content::Operation;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::error::Result;

/// Convert a layout coordinate to a content-stream operand
pub(crate) fn real(v: f64) -> Object {
    Object::Real(v as f32)
}

/// One page of a foreign document, embeddable into an output page
///
/// The two capabilities the compositor needs: report the intrinsic size,
/// and emit a "draw scaled into this region" instruction.
pub trait EmbeddedPage {
    /// Intrinsic (width, height) of the page in points
    fn intrinsic_size(&self) -> (f64, f64);

    /// Emit operations drawing the page scaled into the given region
    fn draw_into(&self, ops: &mut Vec<Operation>, x: f64, y: f64, width: f64, height: f64);
}

/// A source page imported into the output document as a Form XObject
#[derive(Debug)]
pub struct FormXObject {
    /// Resource name the content stream refers to, e.g. "C2p1"
    name: String,
    /// Output-document object id of the form
    id: ObjectId,
    /// BBox origin of the source page
    origin: (f64, f64),
    /// Intrinsic page size
    size: (f64, f64),
}

impl FormXObject {
    /// Import one page of `source` into `output`
    ///
    /// The cache maps source object ids to output object ids so resources
    /// shared between pages of the same source document are copied once.
    pub fn import(
        output: &mut Document,
        source: &Document,
        page_id: ObjectId,
        name: impl Into<String>,
        cache: &mut HashMap<ObjectId, ObjectId>,
    ) -> Result<Self> {
        let page_dict = source.get_dictionary(page_id)?;
        let (x0, y0, width, height) = media_box(source, page_dict);
        let content = page_content(source, page_dict)?;

        let mut form_dict = Dictionary::new();
        form_dict.set("Type", Object::Name(b"XObject".to_vec()));
        form_dict.set("Subtype", Object::Name(b"Form".to_vec()));
        form_dict.set("FormType", Object::Integer(1));
        form_dict.set(
            "BBox",
            Object::Array(vec![
                real(x0),
                real(y0),
                real(x0 + width),
                real(y0 + height),
            ]),
        );
        if let Ok(resources) = page_dict.get(b"Resources") {
            form_dict.set("Resources", copy_object_deep(output, source, resources, cache)?);
        }

        let id = output.add_object(Stream::new(form_dict, content));
        Ok(Self {
            name: name.into(),
            id,
            origin: (x0, y0),
            size: (width, height),
        })
    }

    /// Resource name under which the form must be registered on the page
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Output-document object id for the page's XObject resource entry
    pub fn object_id(&self) -> ObjectId {
        self.id
    }
}

impl EmbeddedPage for FormXObject {
    fn intrinsic_size(&self) -> (f64, f64) {
        self.size
    }

    fn draw_into(&self, ops: &mut Vec<Operation>, x: f64, y: f64, width: f64, height: f64) {
        let (fw, fh) = self.size;
        let sx = width / fw;
        let sy = height / fh;
        // Compensate for a non-zero BBox origin so the visible content
        // lands exactly at (x, y).
        let tx = x - self.origin.0 * sx;
        let ty = y - self.origin.1 * sy;
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new(
            "cm",
            vec![real(sx), real(0.0), real(0.0), real(sy), real(tx), real(ty)],
        ));
        ops.push(Operation::new(
            "Do",
            vec![Object::Name(self.name.as_bytes().to_vec())],
        ));
        ops.push(Operation::new("Q", vec![]));
    }
}

/// Extract (x0, y0, width, height) from a page's MediaBox, A4 fallback
///
/// MediaBox is an inheritable page attribute: generators commonly hoist it
/// to the page tree root, so a page without its own entry is resolved by
/// walking the Parent chain before falling back to A4.
pub(crate) fn media_box(doc: &Document, page_dict: &Dictionary) -> (f64, f64, f64, f64) {
    let mut dict = page_dict;
    // Depth limit guards against a malformed circular Parent chain
    for _ in 0..32 {
        if let Some(rect) = media_box_entry(doc, dict) {
            return rect;
        }
        match dict.get(b"Parent") {
            Ok(Object::Reference(id)) => match doc.get_dictionary(*id) {
                Ok(parent) => dict = parent,
                Err(_) => break,
            },
            _ => break,
        }
    }
    (
        0.0,
        0.0,
        crate::theme::PageSize::A4.width,
        crate::theme::PageSize::A4.height,
    )
}

/// Read one dictionary's own MediaBox entry, following an indirect value
fn media_box_entry(doc: &Document, dict: &Dictionary) -> Option<(f64, f64, f64, f64)> {
    let mut value = dict.get(b"MediaBox").ok()?;
    if let Object::Reference(id) = value {
        value = doc.get_object(*id).ok()?;
    }
    let Object::Array(mb) = value else {
        return None;
    };
    if mb.len() != 4 {
        return None;
    }
    let n = |o: &Object| -> Option<f64> {
        match o {
            Object::Integer(i) => Some(*i as f64),
            Object::Real(r) => Some(f64::from(*r)),
            _ => None,
        }
    };
    let (x0, y0, x1, y1) = (n(&mb[0])?, n(&mb[1])?, n(&mb[2])?, n(&mb[3])?);
    Some((x0, y0, x1 - x0, y1 - y0))
}

/// Concatenated, decompressed content stream bytes of a page
fn page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()),
    };
    match contents {
        Object::Reference(id) => Ok(stream_bytes(doc, *id)),
        Object::Array(arr) => {
            let mut result = Vec::new();
            for obj in arr {
                if let Object::Reference(id) = obj {
                    result.extend_from_slice(&stream_bytes(doc, *id));
                    result.push(b'\n');
                }
            }
            Ok(result)
        }
        _ => Ok(Vec::new()),
    }
}

fn stream_bytes(doc: &Document, id: ObjectId) -> Vec<u8> {
    match doc.get_object(id).and_then(|o| o.as_stream()) {
        Ok(stream) => stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone()),
        Err(_) => Vec::new(),
    }
}

/// Deep-copy an object graph from `source` into `output`, following
/// references once per object via the cache
fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }
            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            let new_id = output.add_object(copied);
            cache.insert(*id, new_id);
            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let mut new_arr = Vec::with_capacity(arr.len());
            for item in arr {
                new_arr.push(copy_object_deep(output, source, item, cache)?);
            }
            Ok(Object::Array(new_arr))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            let mut new_stream = Stream::new(new_dict, stream.content.clone());
            new_stream.allows_compression = stream.allows_compression;
            Ok(Object::Stream(new_stream))
        }
        _ => Ok(obj.clone()),
    }
}
