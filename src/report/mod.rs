//! Report module - renders record collections as tabular PDF documents.
//!
//! - `spec` - column layouts (`DocumentSpec`) and the `Record` trait
//! - `specs` - the built-in product and country layouts
//! - `format` - currency, date and placeholder formatting
//! - `layout` - column sizing, wrapping and pagination
//! - `pdf` - serialization through `lopdf`

pub mod font;
pub mod format;
pub mod layout;
mod pdf;
pub mod spec;
pub mod specs;

pub use layout::{RenderOptions, TableLayout};
pub use spec::{Column, DocumentSpec, Record};
pub use specs::{countries_spec, products_spec};

use thiserror::Error;

/// Leading bytes of every PDF file.
pub const PDF_SIGNATURE: &[u8; 4] = b"%PDF";

/// Errors that can occur while rendering a document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("document spec '{0}' has no columns")]
    NoColumns(&'static str),
    #[error("failed to encode page content: {0}")]
    Encode(#[source] lopdf::Error),
    #[error("failed to write PDF output: {0}")]
    Serialize(String),
}

/// A finished document. Produced once per request and never mutated.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    bytes: Vec<u8>,
    page_count: usize,
    row_count: usize,
}

impl RenderedDocument {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Number of body rows, which always equals the number of input records.
    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

/// Check whether `data` starts with the PDF signature.
pub fn is_pdf(data: &[u8]) -> bool {
    data.starts_with(PDF_SIGNATURE)
}

/// Stateless renderer; each call builds and discards its own document.
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    options: RenderOptions,
}

impl DocumentRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Project `records` through `spec` without producing any bytes.
    pub fn layout<R>(&self, records: &[R], spec: &DocumentSpec<R>, title: &str) -> TableLayout {
        TableLayout::from_records(records, spec, title)
    }

    /// Render `records` as a titled table, one body row per record in input order.
    pub fn render<R>(
        &self,
        records: &[R],
        spec: &DocumentSpec<R>,
        title: &str,
    ) -> Result<RenderedDocument, RenderError> {
        log::info!("Starting PDF generation for {}", spec.name);
        log::info!("Processing {} {} records", records.len(), spec.name);

        match self.render_inner(records, spec, title) {
            Ok(document) => {
                log::info!(
                    "PDF generated successfully, size: {} bytes, pages: {}",
                    document.len(),
                    document.page_count()
                );
                Ok(document)
            }
            Err(e) => {
                log::error!("Error generating {} PDF: {}", spec.name, e);
                Err(e)
            }
        }
    }

    fn render_inner<R>(
        &self,
        records: &[R],
        spec: &DocumentSpec<R>,
        title: &str,
    ) -> Result<RenderedDocument, RenderError> {
        if spec.columns.is_empty() {
            return Err(RenderError::NoColumns(spec.name));
        }

        let table = self.layout(records, spec, title);
        let plan = layout::paginate(&table, &self.options);
        let bytes = pdf::write_document(&plan, &self.options, title)?;

        Ok(RenderedDocument {
            bytes,
            page_count: plan.pages.len(),
            row_count: plan.body_row_count(),
        })
    }
}
