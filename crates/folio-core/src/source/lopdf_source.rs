use crate::error::FolioError;
use crate::source::{BlockKind, DocumentSource, PageBlock, PageGeometry, Rect};
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::path::Path;

/// Rough footprint of one glyph in points², used to size the synthetic
/// text block from a content-stream character count.
const AVG_CHAR_AREA: f32 = 10.0;

/// US Letter fallback when a page carries no usable MediaBox.
const DEFAULT_PAGE_SIZE: (f32, f32) = (612.0, 792.0);

/// Document backend reading page structure directly from the PDF via lopdf.
///
/// Produces an approximate geometry: one synthetic text block sized from
/// the content stream's string literals, plus one image block per image
/// XObject. Workable for coverage ratios; not a layout model.
pub struct LopdfSource {
    doc: Document,
    pages: Vec<ObjectId>,
}

impl LopdfSource {
    pub fn open(path: &Path) -> Result<Self, FolioError> {
        let doc =
            Document::load(path).map_err(|e| FolioError::DocumentUnreadable(e.to_string()))?;
        Ok(Self::from_document(doc))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FolioError> {
        let doc =
            Document::load_mem(bytes).map_err(|e| FolioError::DocumentUnreadable(e.to_string()))?;
        Ok(Self::from_document(doc))
    }

    fn from_document(doc: Document) -> Self {
        let pages = doc.get_pages().into_values().collect();
        LopdfSource { doc, pages }
    }
}

impl DocumentSource for LopdfSource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<PageGeometry, FolioError> {
        let id = *self
            .pages
            .get(index)
            .ok_or(FolioError::PageOutOfRange(index))?;
        let page = self
            .doc
            .get_object(id)
            .and_then(|obj| obj.as_dict())
            .map_err(|e| FolioError::DocumentUnreadable(e.to_string()))?;

        let (width, height) = page_size(&self.doc, page);
        let mut blocks = Vec::new();

        let text = content_stream_text(&self.doc, page);
        if !text.trim().is_empty() {
            let est_area = (text.chars().count() as f32 * AVG_CHAR_AREA).min(width * height);
            let block_height = if width > 0.0 { est_area / width } else { 0.0 };
            blocks.push(PageBlock {
                rect: Rect::new(0.0, 0.0, width, block_height),
                kind: BlockKind::Text,
                text,
            });
        }

        for rect in image_rects(&self.doc, page) {
            blocks.push(PageBlock {
                rect,
                kind: BlockKind::Image,
                text: String::new(),
            });
        }

        Ok(PageGeometry {
            index,
            width,
            height,
            blocks,
            has_embedded_fonts: has_fonts(&self.doc, page),
        })
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}

/// Follow a reference one hop; other objects pass through unchanged.
fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

fn as_f32(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

fn dict_entry<'a>(doc: &'a Document, dict: &'a Dictionary, key: &[u8]) -> Option<&'a Dictionary> {
    match resolve(doc, dict.get(key).ok()?) {
        Object::Dictionary(d) => Some(d),
        _ => None,
    }
}

fn page_size(doc: &Document, page: &Dictionary) -> (f32, f32) {
    if let Ok(media_box) = page.get(b"MediaBox") {
        if let Object::Array(values) = resolve(doc, media_box) {
            let nums: Vec<f32> = values
                .iter()
                .filter_map(|v| as_f32(resolve(doc, v)))
                .collect();
            if nums.len() == 4 {
                return ((nums[2] - nums[0]).abs(), (nums[3] - nums[1]).abs());
            }
        }
    }
    DEFAULT_PAGE_SIZE
}

fn content_stream_text(doc: &Document, page: &Dictionary) -> String {
    let Ok(contents) = page.get(b"Contents") else {
        return String::new();
    };
    let data = content_bytes(doc, contents);
    literal_strings(&String::from_utf8_lossy(&data))
}

fn content_bytes(doc: &Document, obj: &Object) -> Vec<u8> {
    match resolve(doc, obj) {
        Object::Stream(stream) => stream.decompressed_content().unwrap_or_default(),
        Object::Array(parts) => {
            let mut data = Vec::new();
            for part in parts {
                data.extend(content_bytes(doc, part));
            }
            data
        }
        _ => Vec::new(),
    }
}

/// Collect the characters of all string literals in a content stream.
///
/// Tj/TJ operands dominate these literals, which makes the total a
/// workable proxy for visible text without interpreting the operators.
fn literal_strings(content: &str) -> String {
    let mut out = String::new();
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '(' {
            continue;
        }
        let mut depth = 1usize;
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '(' => {
                    depth += 1;
                    out.push(c);
                }
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        out.push(' ');
                        break;
                    }
                    out.push(c);
                }
                _ => out.push(c),
            }
        }
    }
    out
}

fn image_rects(doc: &Document, page: &Dictionary) -> Vec<Rect> {
    let mut rects = Vec::new();
    let Some(resources) = dict_entry(doc, page, b"Resources") else {
        return rects;
    };
    let Some(xobjects) = dict_entry(doc, resources, b"XObject") else {
        return rects;
    };

    for (_name, entry) in xobjects.iter() {
        let Object::Stream(stream) = resolve(doc, entry) else {
            continue;
        };
        let is_image = match stream.dict.get(b"Subtype").map(|obj| resolve(doc, obj)) {
            Ok(Object::Name(name)) => name == b"Image",
            _ => false,
        };
        if !is_image {
            continue;
        }

        // Width/Height are pixel dimensions, not placement; they only feed
        // an area estimate that the classifier caps at full-page coverage.
        let w = stream
            .dict
            .get(b"Width")
            .ok()
            .and_then(|obj| as_f32(resolve(doc, obj)))
            .unwrap_or(0.0);
        let h = stream
            .dict
            .get(b"Height")
            .ok()
            .and_then(|obj| as_f32(resolve(doc, obj)))
            .unwrap_or(0.0);
        if w > 0.0 && h > 0.0 {
            rects.push(Rect::new(0.0, 0.0, w, h));
        }
    }

    rects
}

fn has_fonts(doc: &Document, page: &Dictionary) -> bool {
    dict_entry(doc, page, b"Resources")
        .and_then(|res| dict_entry(doc, res, b"Font"))
        .map(|fonts| fonts.iter().next().is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Stream};

    /// One-page document with a Helvetica font resource and a short
    /// text-showing content stream, built in memory.
    fn minimal_pdf() -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal("Hello there")]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_reads_minimal_document() {
        let source = LopdfSource::from_bytes(&minimal_pdf()).unwrap();
        assert_eq!(source.backend_name(), "lopdf");
        assert_eq!(source.page_count(), 1);

        let page = source.page(0).unwrap();
        assert_eq!(page.width, 612.0);
        assert_eq!(page.height, 792.0);
        assert!(page.has_embedded_fonts);
        assert!(page
            .blocks
            .iter()
            .any(|b| b.kind == BlockKind::Text && b.text.contains("Hello there")));
    }

    #[test]
    fn test_page_out_of_range() {
        let source = LopdfSource::from_bytes(&minimal_pdf()).unwrap();
        assert!(matches!(
            source.page(1),
            Err(FolioError::PageOutOfRange(1))
        ));
    }

    #[test]
    fn test_literal_strings_simple() {
        let text = literal_strings("BT /F1 12 Tf (Hello) Tj (world) Tj ET");
        assert_eq!(text, "Hello world ");
    }

    #[test]
    fn test_literal_strings_nested_and_escaped() {
        let text = literal_strings(r"(outer (inner)) Tj (a\) b) Tj");
        assert_eq!(text, "outer (inner) a) b ");
    }

    #[test]
    fn test_literal_strings_none() {
        assert_eq!(literal_strings("BT ET"), "");
    }
}
