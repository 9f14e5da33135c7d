use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};
use tracing::debug;

use crate::sheet::{ExportSheet, TITLE};
use crate::{ExportError, ExportResult};

const PT_PER_MM: f32 = 72.0 / 25.4;
const FONT_KEY: &str = "F1";

/// Page geometry in millimetres, measured from the top-left corner with `y`
/// pointing down to the text baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_left_mm: f32,
    pub margin_top_mm: f32,
    pub margin_bottom_mm: f32,
    /// Advance after every line
    pub line_height_mm: f32,
    /// Extra advance after each product block
    pub block_gap_mm: f32,
    pub font_size_pt: f32,
}

impl Default for PdfLayout {
    fn default() -> Self {
        // A4
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_left_mm: 10.0,
            margin_top_mm: 10.0,
            margin_bottom_mm: 10.0,
            line_height_mm: 10.0,
            block_gap_mm: 5.0,
            font_size_pt: 16.0,
        }
    }
}

impl PdfLayout {
    fn bottom_limit_mm(&self) -> f32 {
        self.page_height_mm - self.margin_bottom_mm
    }
}

/// A line of text positioned on a page (0-based page index)
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub page: usize,
    pub x_mm: f32,
    pub y_mm: f32,
    pub text: String,
}

struct Cursor<'l> {
    layout: &'l PdfLayout,
    page: usize,
    y_mm: f32,
    lines: Vec<PlacedLine>,
}

impl<'l> Cursor<'l> {
    fn new(layout: &'l PdfLayout) -> Self {
        Self {
            layout,
            page: 0,
            y_mm: layout.margin_top_mm,
            lines: Vec::new(),
        }
    }

    fn put(&mut self, text: String) {
        if self.y_mm > self.layout.bottom_limit_mm() {
            self.page += 1;
            self.y_mm = self.layout.margin_top_mm;
        }
        self.lines.push(PlacedLine {
            page: self.page,
            x_mm: self.layout.margin_left_mm,
            y_mm: self.y_mm,
            text,
        });
        self.y_mm += self.layout.line_height_mm;
    }

    fn gap(&mut self) {
        self.y_mm += self.layout.block_gap_mm;
    }
}

/// Renders export sheets to PDF.
///
/// Pagination: a line whose baseline would land below the bottom margin moves
/// to the top of a fresh page. Product blocks may split across pages.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    layout: PdfLayout,
}

impl PdfRenderer {
    pub fn new(layout: PdfLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &PdfLayout {
        &self.layout
    }

    /// Position every line of the sheet without producing any PDF bytes.
    pub fn place(&self, sheet: &ExportSheet<'_>) -> Vec<PlacedLine> {
        let mut cursor = Cursor::new(&self.layout);

        cursor.put(TITLE.to_string());
        for block in sheet.blocks() {
            for line in block {
                cursor.put(line);
            }
            cursor.gap();
        }

        cursor.lines
    }

    pub fn render(&self, sheet: &ExportSheet<'_>) -> ExportResult<Vec<u8>> {
        let placed = self.place(sheet);
        let page_count = placed.last().map(|l| l.page + 1).unwrap_or(1);

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                FONT_KEY => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(page_count);
        for page in 0..page_count {
            let operations: Vec<Operation> = placed
                .iter()
                .filter(|line| line.page == page)
                .flat_map(|line| self.text_operations(line))
                .collect();
            let content = Content { operations };

            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id: ObjectId = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                (self.layout.page_width_mm * PT_PER_MM).into(),
                (self.layout.page_height_mm * PT_PER_MM).into(),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| ExportError::Render(e.into()))?;

        debug!(
            products = sheet.products().len(),
            pages = page_count,
            size = bytes.len(),
            "Rendered PDF"
        );
        Ok(bytes)
    }

    fn text_operations(&self, line: &PlacedLine) -> Vec<Operation> {
        let x = line.x_mm * PT_PER_MM;
        let y = (self.layout.page_height_mm - line.y_mm) * PT_PER_MM;

        vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![FONT_KEY.into(), self.layout.font_size_pt.into()]),
            Operation::new("Td", vec![x.into(), y.into()]),
            Operation::new("Tj", vec![Object::String(win_ansi(&line.text), StringFormat::Literal)]),
            Operation::new("ET", vec![]),
        ]
    }
}

/// Latin-1 covers every accented letter the catalog uses and matches
/// WinAnsiEncoding in that range. Anything else prints as `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
