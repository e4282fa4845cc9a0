//! End-to-end dashboard figures against a live store.

use caterbook_analytics::summarize;
use caterbook_domain::{DocumentDraft, DocumentKind, DocumentStatus};
use caterbook_store::DocumentStore;

fn draft(kind: DocumentKind, total: f64) -> DocumentDraft {
    DocumentDraft {
        client_name: "Client".into(),
        total,
        ..DocumentDraft::new(kind)
    }
}

#[test]
fn counts_track_list_lengths() {
    let store = DocumentStore::in_memory();
    store.save_document(draft(DocumentKind::Quote, 100.0)).unwrap();
    store.save_document(draft(DocumentKind::Quote, 200.0)).unwrap();
    store.save_document(draft(DocumentKind::Invoice, 300.0)).unwrap();

    let summary = summarize(&store);
    assert_eq!(summary.total_quotes, store.documents(DocumentKind::Quote).len());
    assert_eq!(summary.total_invoices, store.documents(DocumentKind::Invoice).len());
}

#[test]
fn fresh_invoice_counts_toward_current_month() {
    let store = DocumentStore::in_memory();
    store.save_document(draft(DocumentKind::Invoice, 1500.0)).unwrap();

    let summary = summarize(&store);
    assert_eq!(summary.total_revenue, 1500.0);
    assert_eq!(summary.outstanding_balance, 1500.0);
    assert_eq!(summary.monthly_revenue, 1500.0);
    assert_eq!(summary.paid_count, 0);
}

#[test]
fn marking_paid_updates_the_dashboard() {
    let store = DocumentStore::in_memory();
    let invoice = store.save_document(draft(DocumentKind::Invoice, 1000.0)).unwrap();
    assert!(store.update_invoice_status(&invoice.id, DocumentStatus::Paid).unwrap());

    let summary = summarize(&store);
    assert_eq!(summary.outstanding_balance, 0.0);
    assert_eq!(summary.paid_count, 1);
    assert_eq!(summary.total_revenue, 1000.0);
}

#[test]
fn summarize_twice_without_mutation_matches() {
    let store = DocumentStore::in_memory();
    store.save_document(draft(DocumentKind::Invoice, 750.0)).unwrap();
    assert_eq!(summarize(&store), summarize(&store));
}
