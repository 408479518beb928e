pub mod lopdf_source;

use crate::error::FolioError;

/// Axis-aligned rectangle in page coordinates (points).
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Rect {
    pub fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn width(&self) -> f32 {
        (self.x_max - self.x_min).abs()
    }

    pub fn height(&self) -> f32 {
        (self.y_max - self.y_min).abs()
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }
}

/// A rectangular content region of a page, tagged as text or image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Text,
    Image,
}

#[derive(Debug, Clone)]
pub struct PageBlock {
    pub rect: Rect,
    pub kind: BlockKind,
    /// Text payload; empty for image blocks.
    pub text: String,
}

/// Geometry of a single page as seen by the classifier.
#[derive(Debug, Clone)]
pub struct PageGeometry {
    pub index: usize,
    pub width: f32,
    pub height: f32,
    pub blocks: Vec<PageBlock>,
    pub has_embedded_fonts: bool,
}

impl PageGeometry {
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// Trait for document backends feeding the structural classifier.
///
/// Classification is read-only over the source; implementations must
/// return pages by index without side effects.
pub trait DocumentSource {
    /// Total number of pages in the document.
    fn page_count(&self) -> usize;

    /// Geometry of the page at `index` (zero-based).
    fn page(&self, index: usize) -> Result<PageGeometry, FolioError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
