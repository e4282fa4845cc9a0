//! Document kinds.

use serde::{Deserialize, Serialize};

use crate::status::DocumentStatus;

/// Whether a document is a quote or an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Quote,
    Invoice,
}

impl DocumentKind {
    /// Prefix for generated document ids (`QT-1234`, `INV-5678`).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::Quote => "QT",
            Self::Invoice => "INV",
        }
    }

    /// Status assigned at creation.
    pub fn initial_status(&self) -> DocumentStatus {
        match self {
            Self::Quote => DocumentStatus::Pending,
            Self::Invoice => DocumentStatus::Unpaid,
        }
    }

    /// Display name for UI and exported documents.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Quote => "Quote",
            Self::Invoice => "Invoice",
        }
    }

    /// Lowercase slug used in filenames and the wire format.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::Invoice => "invoice",
        }
    }
}
