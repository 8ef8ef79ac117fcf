//! Column layouts describing how a record type projects into a table row.

/// Pure function extracting the display text of one cell.
pub type Extractor<R> = fn(&R) -> String;

/// A single table column: header label plus cell extractor.
pub struct Column<R> {
    pub label: &'static str,
    pub extract: Extractor<R>,
}

/// Named, ordered list of columns for one record type.
pub struct DocumentSpec<R> {
    pub name: &'static str,
    pub columns: Vec<Column<R>>,
}

impl<R> DocumentSpec<R> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            columns: Vec::new(),
        }
    }

    /// Append a column; columns render left to right in insertion order.
    pub fn column(mut self, label: &'static str, extract: Extractor<R>) -> Self {
        self.columns.push(Column { label, extract });
        self
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label).collect()
    }

    /// Project one record into its row of cell strings.
    pub fn row(&self, record: &R) -> Vec<String> {
        self.columns.iter().map(|c| (c.extract)(record)).collect()
    }
}

/// Record types that know their own export layout.
pub trait Record: Sized {
    fn document_spec() -> DocumentSpec<Self>;
}
