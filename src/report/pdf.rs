//! Serializes a [`PagePlan`] into PDF bytes with `lopdf`.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use super::font::{encode_win_ansi, text_width, FontStyle};
use super::layout::{PageLayout, PagePlan, PlacedRow, RenderOptions};
use super::RenderError;

const PDF_VERSION: &str = "1.5";

/// Build the whole document in memory and return its serialized bytes.
pub fn write_document(plan: &PagePlan, options: &RenderOptions, title: &str) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let regular_id = add_font(&mut doc, FontStyle::Regular);
    let bold_id = add_font(&mut doc, FontStyle::Bold);
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FontStyle::Regular.resource_name() => regular_id,
            FontStyle::Bold.resource_name() => bold_id,
        },
    });

    let mut kids = Vec::with_capacity(plan.pages.len());
    for page in &plan.pages {
        let content = page_content(page, plan.column_width, options);
        let encoded = content.encode().map_err(RenderError::Encode)?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Count" => kids.len() as i64,
        "Kids" => kids,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(options.page_width.round() as i64),
            Object::Integer(options.page_height.round() as i64),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(encode_win_ansi(title)),
        "Producer" => Object::string_literal(concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"))),
    });
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| RenderError::Serialize(e.to_string()))?;
    Ok(buffer)
}

fn add_font(doc: &mut Document, style: FontStyle) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => style.base_font(),
        "Encoding" => "WinAnsiEncoding",
    })
}

fn page_content(page: &PageLayout, column_width: f32, options: &RenderOptions) -> Content {
    let mut ops = Vec::new();

    if let Some(title) = &page.title {
        let width = text_width(title, options.title_size, FontStyle::Bold);
        let x = (options.page_width - width) / 2.0;
        let baseline = options.margin + options.title_size;
        push_text(&mut ops, title, FontStyle::Bold, options.title_size, x, to_pdf_y(baseline, options));
    }

    for row in &page.rows {
        push_row(&mut ops, row, column_width, options);
    }

    Content { operations: ops }
}

fn push_row(ops: &mut Vec<Operation>, row: &PlacedRow, column_width: f32, options: &RenderOptions) {
    let style = if row.is_header {
        FontStyle::Bold
    } else {
        FontStyle::Regular
    };
    let bottom = to_pdf_y(row.top + row.height, options);

    if row.is_header {
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new("g", vec![Object::Real(0.9)]));
        ops.push(rect(options.margin, bottom, options.content_width(), row.height));
        ops.push(Operation::new("f", vec![]));
        ops.push(Operation::new("Q", vec![]));
    }

    for (index, lines) in row.cells.iter().enumerate() {
        let left = options.margin + index as f32 * column_width;
        ops.push(rect(left, bottom, column_width, row.height));
        ops.push(Operation::new("S", vec![]));

        for (line_no, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let baseline = row.top
                + options.cell_padding
                + line_no as f32 * options.line_height()
                + options.font_size;
            push_text(
                ops,
                line,
                style,
                options.font_size,
                left + options.cell_padding,
                to_pdf_y(baseline, options),
            );
        }
    }
}

fn push_text(ops: &mut Vec<Operation>, text: &str, style: FontStyle, size: f32, x: f32, y: f32) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new(
        "Tf",
        vec![
            Object::Name(style.resource_name().as_bytes().to_vec()),
            Object::Integer(size.round() as i64),
        ],
    ));
    ops.push(Operation::new(
        "Td",
        vec![Object::Integer(x.round() as i64), Object::Integer(y.round() as i64)],
    ));
    ops.push(Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(text))]));
    ops.push(Operation::new("ET", vec![]));
}

fn rect(x: f32, y: f32, width: f32, height: f32) -> Operation {
    Operation::new(
        "re",
        vec![
            Object::Integer(x.round() as i64),
            Object::Integer(y.round() as i64),
            Object::Integer(width.round() as i64),
            Object::Integer(height.round() as i64),
        ],
    )
}

fn to_pdf_y(from_top: f32, options: &RenderOptions) -> f32 {
    options.page_height - from_top
}
