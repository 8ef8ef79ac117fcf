//! Export endpoints - bridge a data provider to the document renderer.
//!
//! A request either receives a complete PDF or a redirect back to the listing
//! page it came from; partial documents are never sent.

pub mod handlers;

use thiserror::Error;

use crate::report::RenderError;

/// The two exportable reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Products,
    Countries,
}

impl ReportKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Products => "Products Report",
            Self::Countries => "Countries Report",
        }
    }

    pub fn filename(self) -> &'static str {
        match self {
            Self::Products => "products-export.pdf",
            Self::Countries => "countries-export.pdf",
        }
    }

    /// Listing page to fall back to when the export fails.
    pub fn listing_path(self) -> &'static str {
        match self {
            Self::Products => "/products",
            Self::Countries => "/countries",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Countries => "countries",
        }
    }
}

/// Failures at the export boundary.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to load products: {0}")]
    Catalog(#[from] sqlx::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("rendering task was cancelled")]
    Cancelled,
}
