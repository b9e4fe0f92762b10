//! Transfer-log PDF writer.
//!
//! Follows the page plan from `layout::paginate`: the title and localized header labels
//! go on page one, data rows go wherever the plan placed them. Every page starts by
//! re-establishing the body font size.

use chrono::Utc;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use thiserror::Error;
use tracing::debug;

use crate::i18n::Strings;
use crate::layout::{paginate, truncate_chars, PageConfig, PagePlan};
use crate::models::transfer::TransferRow;
use crate::render::fonts::PdfFont;

pub const DOCUMENT_TITLE: &str = "transfer_log";
pub const PRODUCER: &str = concat!("transfer-log ", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode page content: {0}")]
    Encode(String),

    #[error("failed to serialize document: {0}")]
    Write(String),
}

/// A finished document.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Content-stream builder for one page.
struct PageCanvas {
    ops: Vec<Operation>,
    font_size: f32,
}

impl PageCanvas {
    fn new(font_size: f32) -> Self {
        Self {
            ops: Vec::new(),
            font_size,
        }
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str) {
        let font = PdfFont::for_text(text);
        self.ops.extend([
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![
                    Object::Name(font.resource_name().to_vec()),
                    self.font_size.into(),
                ],
            ),
            Operation::new("Td", vec![x.into(), y.into()]),
            Operation::new("Tj", vec![font.encode(text)]),
            Operation::new("ET", vec![]),
        ]);
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        Content {
            operations: self.ops,
        }
        .encode()
        .map_err(|e| RenderError::Encode(e.to_string()))
    }
}

/// Renders already-validated rows into a paginated PDF.
pub fn render_transfer_log(
    rows: &[TransferRow],
    strings: &Strings,
    config: &PageConfig,
) -> Result<RenderedPdf, RenderError> {
    let plan = paginate(rows.len(), config);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in PdfFont::ALL {
        let font_id = doc.add_object(font.dictionary());
        fonts.set(font.resource_name().to_vec(), font_id);
    }
    let resources_id = doc.add_object(dictionary! { "Font" => fonts });

    let mut page_ids: Vec<ObjectId> = Vec::with_capacity(plan.len());
    for page in &plan {
        let content = draw_page(page, rows, strings, config)?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                config.page_width_pt.into(),
                config.page_height_pt.into(),
            ]),
            "Resources" => resources_id,
            "Contents" => content_id,
        });
        page_ids.push(page_id);
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<_>>(),
        "Count" => page_ids.len() as i64,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(DOCUMENT_TITLE),
        "Producer" => Object::string_literal(PRODUCER),
        "CreationDate" => Object::string_literal(
            Utc::now().format("D:%Y%m%d%H%M%SZ").to_string(),
        ),
    });
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| RenderError::Write(e.to_string()))?;

    debug!(
        rows = rows.len(),
        pages = plan.len(),
        size = bytes.len(),
        "Rendered transfer log"
    );

    Ok(RenderedPdf {
        bytes,
        page_count: plan.len(),
    })
}

fn draw_page(
    page: &PagePlan,
    rows: &[TransferRow],
    strings: &Strings,
    config: &PageConfig,
) -> Result<Vec<u8>, RenderError> {
    tracing::trace!(page = page.number, rows = page.rows.len(), "Drawing page");
    let mut canvas = PageCanvas::new(config.body_font_size_pt);

    if page.has_header {
        canvas.set_font_size(config.title_font_size_pt);
        canvas.draw_text(config.title_x, config.title_y, strings.title);

        canvas.set_font_size(config.body_font_size_pt);
        for (x, label) in config.column_x.iter().zip(strings.column_labels()) {
            canvas.draw_text(*x, config.header_y, label);
        }
    }

    for placed in &page.rows {
        let Some(row) = rows.get(placed.index) else {
            continue;
        };
        for (x, cell) in config.column_x.iter().zip(row.cells()) {
            canvas.draw_text(*x, placed.y, truncate_chars(cell, config.max_cell_chars));
        }
    }

    canvas.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;
    use crate::layout::default_page_config;

    fn make_row(i: usize) -> TransferRow {
        TransferRow {
            from_date: "2024-05-01".to_string(),
            route: format!("A{:02}", i % 25 + 1),
            from_driver: format!("Driver {i}"),
            from_range: format!("{}-{}", i * 10, i * 10 + 9),
            to_date: "2024-05-02".to_string(),
            to_driver: "Wang".to_string(),
            to_range: format!("{}-{}", i * 10, i * 10 + 5),
            locked: false,
        }
    }

    /// Every `Tj` operand on every page, in page order.
    fn shown_strings(bytes: &[u8]) -> Vec<Vec<Vec<u8>>> {
        let doc = Document::load_mem(bytes).expect("generated PDF should parse");
        doc.get_pages()
            .values()
            .map(|page_id| {
                let data = doc.get_page_content(*page_id).unwrap();
                Content::decode(&data)
                    .unwrap()
                    .operations
                    .into_iter()
                    .filter(|op| op.operator == "Tj")
                    .filter_map(|op| match op.operands.first() {
                        Some(Object::String(s, _)) => Some(s.clone()),
                        _ => None,
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_empty_batch_renders_title_and_header() {
        let pdf = render_transfer_log(&[], Lang::En.strings(), &default_page_config()).unwrap();
        assert!(pdf.bytes.starts_with(b"%PDF-1.5"));
        assert_eq!(pdf.page_count, 1);

        let pages = shown_strings(&pdf.bytes);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 1 + 7);
        assert_eq!(pages[0][0], b"Transfer Log".to_vec());
        assert_eq!(pages[0][1], b"From date".to_vec());
    }

    #[test]
    fn test_row_count_preserved_across_pages() {
        let config = default_page_config();
        let rows: Vec<TransferRow> = (0..120).map(make_row).collect();
        let pdf = render_transfer_log(&rows, Lang::En.strings(), &config).unwrap();
        assert_eq!(pdf.page_count, 3);

        let pages = shown_strings(&pdf.bytes);
        assert_eq!(pages.len(), 3);

        // Page one carries title and header labels; later pages carry rows only.
        let data_rows: Vec<usize> = pages
            .iter()
            .enumerate()
            .map(|(i, strings)| {
                let cells = if i == 0 { strings.len() - 8 } else { strings.len() };
                assert_eq!(cells % 7, 0);
                cells / 7
            })
            .collect();
        assert_eq!(data_rows, vec![47, 51, 22]);
        assert_eq!(data_rows.iter().sum::<usize>(), rows.len());
        assert!(data_rows[0] <= config.first_page_capacity());
        assert!(data_rows[1..].iter().all(|n| *n <= config.continuation_capacity()));
    }

    #[test]
    fn test_continuation_page_resets_font() {
        let rows: Vec<TransferRow> = (0..48).map(make_row).collect();
        let pdf = render_transfer_log(&rows, Lang::En.strings(), &default_page_config()).unwrap();
        let doc = Document::load_mem(&pdf.bytes).unwrap();
        let second = *doc.get_pages().get(&2).unwrap();
        let ops = Content::decode(&doc.get_page_content(second).unwrap())
            .unwrap()
            .operations;
        let tf = ops.iter().find(|op| op.operator == "Tf").unwrap();
        assert_eq!(tf.operands[1].as_float().unwrap(), 10.0);
    }

    #[test]
    fn test_cells_truncated_to_limit() {
        let mut row = make_row(1);
        row.from_driver = "x".repeat(40);
        let pdf = render_transfer_log(&[row], Lang::En.strings(), &default_page_config()).unwrap();
        let pages = shown_strings(&pdf.bytes);
        assert_eq!(pages[0][8 + 2], b"x".repeat(22));
    }

    #[test]
    fn test_chinese_title_uses_ucs2() {
        let pdf = render_transfer_log(&[], Lang::Zh.strings(), &default_page_config()).unwrap();
        let pages = shown_strings(&pdf.bytes);
        // 转单记录 as UTF-16BE
        assert_eq!(pages[0][0], vec![0x8F, 0x6C, 0x53, 0x55, 0x8B, 0xB0, 0x5F, 0x55]);
    }

    #[test]
    fn test_document_info_title() {
        let pdf = render_transfer_log(&[], Lang::Es.strings(), &default_page_config()).unwrap();
        let doc = Document::load_mem(&pdf.bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"transfer_log");
    }
}
