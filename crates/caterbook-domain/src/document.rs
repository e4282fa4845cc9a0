use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::amount;
use crate::kind::DocumentKind;
use crate::status::DocumentStatus;

fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// A persisted quote or invoice.
///
/// The serialized form is the blob format the frontends read and write:
/// camelCase keys, `type` for the kind, `date` for the event date.
/// Fields missing from older blobs read as their zero value, and keys
/// this model does not know about pass through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: DocumentKind,

    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(rename = "date", alias = "eventDate", default)]
    pub event_date: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,

    #[serde(default, deserialize_with = "amount::lenient")]
    pub guest_count: f64,
    #[serde(default, deserialize_with = "amount::lenient")]
    pub total: f64,

    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default = "epoch")]
    pub created_at: DateTime<Utc>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Creation input for a document. The store assigns `id`, `status`, and
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDraft {
    #[serde(rename = "type", alias = "kind")]
    pub kind: DocumentKind,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(rename = "date", alias = "eventDate", default)]
    pub event_date: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, deserialize_with = "amount::lenient")]
    pub guest_count: f64,
    #[serde(default, deserialize_with = "amount::lenient")]
    pub total: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl DocumentDraft {
    /// An empty draft of the given kind.
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            client_name: String::new(),
            company: String::new(),
            event_name: String::new(),
            event_type: String::new(),
            event_date: String::new(),
            address: String::new(),
            email: String::new(),
            phone: String::new(),
            guest_count: 0.0,
            total: 0.0,
            extra: BTreeMap::new(),
        }
    }

    /// Promote the draft to a full document with the kind's initial status.
    pub fn into_document(self, id: String, created_at: DateTime<Utc>) -> Document {
        Document {
            id,
            status: self.kind.initial_status(),
            created_at,
            kind: self.kind,
            client_name: self.client_name,
            company: self.company,
            event_name: self.event_name,
            event_type: self.event_type,
            event_date: self.event_date,
            address: self.address,
            email: self.email,
            phone: self.phone,
            guest_count: self.guest_count,
            total: self.total,
            extra: self.extra,
        }
    }
}
