use std::path::Path;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use caterbook_domain::{Document, DocumentDraft, DocumentKind, DocumentStatus};

use crate::backend::{FileBackend, KeyValue, MemoryBackend};
use crate::error::StoreError;

/// Key the whole store is persisted under.
pub const STORAGE_KEY: &str = "caterbook_data";

/// The single persisted unit: both document sequences, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub quotes: Vec<Document>,
    #[serde(default)]
    pub invoices: Vec<Document>,
}

impl StoreData {
    fn sequence(&self, kind: DocumentKind) -> &Vec<Document> {
        match kind {
            DocumentKind::Quote => &self.quotes,
            DocumentKind::Invoice => &self.invoices,
        }
    }

    fn sequence_mut(&mut self, kind: DocumentKind) -> &mut Vec<Document> {
        match kind {
            DocumentKind::Quote => &mut self.quotes,
            DocumentKind::Invoice => &mut self.invoices,
        }
    }
}

/// Durable store for quotes and invoices.
///
/// Every mutation rewrites the whole blob under one key; every read
/// re-materializes it. A blob that is missing or unreadable loads as an
/// empty store (logged, never surfaced), so first run and corruption look
/// the same to callers.
pub struct DocumentStore {
    backend: Box<dyn KeyValue>,
    key: String,
}

impl DocumentStore {
    /// Store over an explicit substrate, persisted under [`STORAGE_KEY`].
    pub fn new(backend: Box<dyn KeyValue>) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    /// Store over an explicit substrate and storage key.
    pub fn with_key(backend: Box<dyn KeyValue>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// File-backed store rooted at `dir`.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        Ok(Self::new(Box::new(FileBackend::open(dir)?)))
    }

    /// Ephemeral in-memory store (for testing).
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::new()))
    }

    fn load(&self) -> StoreData {
        match self.backend.get(&self.key) {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(data) => data,
                Err(e) => {
                    warn!(key = %self.key, error = %e, "unreadable store blob, starting empty");
                    StoreData::default()
                }
            },
            Ok(None) => StoreData::default(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "substrate read failed, starting empty");
                StoreData::default()
            }
        }
    }

    fn persist(&self, data: &StoreData) -> Result<(), StoreError> {
        let blob = serde_json::to_string(data)?;
        self.backend.set(&self.key, &blob)
    }

    /// Create a document from a draft: assign an id, stamp the creation
    /// time, set the kind's initial status, prepend to its sequence, and
    /// persist.
    ///
    /// Ids are `<prefix>-<random four digits>`; uniqueness against
    /// existing documents is not checked. No field validation happens
    /// here; required-field enforcement belongs to the form layer.
    pub fn save_document(&self, draft: DocumentDraft) -> Result<Document, StoreError> {
        let mut data = self.load();
        let id = generate_id(draft.kind);
        let document = draft.into_document(id, Utc::now());
        data.sequence_mut(document.kind).insert(0, document.clone());
        self.persist(&data)?;
        debug!(id = %document.id, kind = document.kind.slug(), "document saved");
        Ok(document)
    }

    /// All documents of one kind, newest first. Returns owned copies;
    /// mutating them never touches persisted state.
    pub fn documents(&self, kind: DocumentKind) -> Vec<Document> {
        self.load().sequence(kind).clone()
    }

    /// The most recent `limit` documents of one kind (dashboard tables).
    pub fn recent(&self, kind: DocumentKind, limit: usize) -> Vec<Document> {
        let mut docs = self.documents(kind);
        docs.truncate(limit);
        docs
    }

    /// Set the status of the invoice with the given id.
    ///
    /// Returns `Ok(true)` after persisting the change, `Ok(false)` if no
    /// invoice matched (including when `id` names a quote). `Ok(false)`
    /// means nothing was written.
    pub fn update_invoice_status(
        &self,
        id: &str,
        status: DocumentStatus,
    ) -> Result<bool, StoreError> {
        let mut data = self.load();
        match data.invoices.iter_mut().find(|inv| inv.id == id) {
            Some(invoice) => {
                invoice.status = status;
                self.persist(&data)?;
                debug!(id, status = %status, "invoice status updated");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn generate_id(kind: DocumentKind) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(1000..=9999);
    format!("{}-{}", kind.id_prefix(), suffix)
}
