//! Summary statistics for the dashboard
//!
//! Everything here is a pure function of the store's current contents and
//! an evaluation instant. Nothing is cached; callers recompute after every
//! mutation.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use caterbook_domain::{Document, DocumentKind};
use caterbook_store::DocumentStore;

/// Aggregate statistics over both document sequences.
///
/// Revenue figures sum invoice totals only; quotes never contribute.
/// `outstanding_balance` counts the full total of every non-Paid invoice.
/// Partial payments are not tracked, so a Partially Paid invoice is still
/// fully outstanding here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of quotes
    pub total_quotes: usize,
    /// Number of invoices
    pub total_invoices: usize,
    /// Invoices with status Paid
    pub paid_count: usize,
    /// Sum of all invoice totals, any status
    pub total_revenue: f64,
    /// Sum of Paid invoice totals
    pub paid_revenue: f64,
    /// Sum of non-Paid invoice totals
    pub outstanding_balance: f64,
    /// Sum of invoice totals created in the evaluation instant's calendar month
    pub monthly_revenue: f64,
}

impl Summary {
    /// Compute statistics from document sequences at a given instant.
    ///
    /// `now` only drives the monthly-revenue bucket; the same inputs and
    /// instant always produce the same summary.
    pub fn compute(quotes: &[Document], invoices: &[Document], now: DateTime<Utc>) -> Self {
        let paid: Vec<&Document> = invoices.iter().filter(|inv| inv.status.is_paid()).collect();

        let total_revenue: f64 = invoices.iter().map(|inv| inv.total).sum();
        let paid_revenue: f64 = paid.iter().map(|inv| inv.total).sum();
        let outstanding_balance: f64 = invoices
            .iter()
            .filter(|inv| !inv.status.is_paid())
            .map(|inv| inv.total)
            .sum();

        let monthly_revenue: f64 = invoices
            .iter()
            .filter(|inv| {
                inv.created_at.month() == now.month() && inv.created_at.year() == now.year()
            })
            .map(|inv| inv.total)
            .sum();

        Self {
            total_quotes: quotes.len(),
            total_invoices: invoices.len(),
            paid_count: paid.len(),
            total_revenue,
            paid_revenue,
            outstanding_balance,
            monthly_revenue,
        }
    }

    /// All-zero summary (the empty store).
    pub fn empty() -> Self {
        Self::compute(&[], &[], Utc::now())
    }
}

/// Summarize the store's current contents as of now.
pub fn summarize(store: &DocumentStore) -> Summary {
    Summary::compute(
        &store.documents(DocumentKind::Quote),
        &store.documents(DocumentKind::Invoice),
        Utc::now(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use caterbook_domain::{DocumentDraft, DocumentStatus};
    use chrono::TimeZone;
    use rstest::rstest;

    fn invoice(total: f64, status: DocumentStatus, created_at: DateTime<Utc>) -> Document {
        let mut doc = DocumentDraft {
            total,
            ..DocumentDraft::new(DocumentKind::Invoice)
        }
        .into_document("INV-1234".into(), created_at);
        doc.status = status;
        doc
    }

    fn quote(total: f64) -> Document {
        DocumentDraft {
            total,
            ..DocumentDraft::new(DocumentKind::Quote)
        }
        .into_document("QT-1234".into(), Utc::now())
    }

    fn at(year: i32, month: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn empty_store_is_all_zero() {
        let summary = Summary::compute(&[], &[], Utc::now());
        assert_eq!(summary.total_quotes, 0);
        assert_eq!(summary.total_invoices, 0);
        assert_eq!(summary.paid_count, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.outstanding_balance, 0.0);
        assert_eq!(summary.monthly_revenue, 0.0);
    }

    #[test]
    fn single_unpaid_invoice_is_fully_outstanding() {
        let now = at(2026, 8);
        let invoices = vec![invoice(1500.0, DocumentStatus::Unpaid, now)];
        let summary = Summary::compute(&[], &invoices, now);
        assert_eq!(summary.total_revenue, 1500.0);
        assert_eq!(summary.outstanding_balance, 1500.0);
        assert_eq!(summary.paid_count, 0);
    }

    #[test]
    fn paying_moves_balance_not_revenue() {
        let now = at(2026, 8);
        let invoices = vec![invoice(1000.0, DocumentStatus::Paid, now)];
        let summary = Summary::compute(&[], &invoices, now);
        assert_eq!(summary.total_revenue, 1000.0);
        assert_eq!(summary.paid_revenue, 1000.0);
        assert_eq!(summary.outstanding_balance, 0.0);
        assert_eq!(summary.paid_count, 1);
    }

    #[rstest]
    #[case(DocumentStatus::Unpaid, 700.0)]
    #[case(DocumentStatus::PartiallyPaid, 700.0)]
    #[case(DocumentStatus::Paid, 0.0)]
    fn outstanding_counts_full_total_unless_paid(
        #[case] status: DocumentStatus,
        #[case] expected: f64,
    ) {
        let now = at(2026, 8);
        let summary = Summary::compute(&[], &[invoice(700.0, status, now)], now);
        assert_eq!(summary.outstanding_balance, expected);
    }

    #[test]
    fn outstanding_plus_paid_equals_total() {
        let now = at(2026, 8);
        let invoices = vec![
            invoice(1000.0, DocumentStatus::Paid, now),
            invoice(250.0, DocumentStatus::PartiallyPaid, now),
            invoice(400.0, DocumentStatus::Unpaid, at(2026, 7)),
        ];
        let summary = Summary::compute(&[], &invoices, now);
        assert_eq!(
            summary.outstanding_balance + summary.paid_revenue,
            summary.total_revenue
        );
    }

    #[test]
    fn monthly_revenue_buckets_by_calendar_month() {
        let now = at(2026, 8);
        let invoices = vec![
            invoice(100.0, DocumentStatus::Unpaid, at(2026, 8)),
            invoice(200.0, DocumentStatus::Paid, at(2026, 7)),
            invoice(400.0, DocumentStatus::Unpaid, at(2025, 8)),
        ];
        let summary = Summary::compute(&[], &invoices, now);
        assert_eq!(summary.monthly_revenue, 100.0);
        assert_eq!(summary.total_revenue, 700.0);
    }

    #[test]
    fn quotes_count_but_never_earn() {
        let now = at(2026, 8);
        let quotes = vec![quote(5000.0), quote(2500.0)];
        let summary = Summary::compute(&quotes, &[], now);
        assert_eq!(summary.total_quotes, 2);
        assert_eq!(summary.total_revenue, 0.0);
    }

    #[test]
    fn recompute_without_mutation_is_identical() {
        let now = at(2026, 8);
        let invoices = vec![
            invoice(10.0, DocumentStatus::Unpaid, now),
            invoice(20.0, DocumentStatus::Paid, now),
        ];
        let a = Summary::compute(&[], &invoices, now);
        let b = Summary::compute(&[], &invoices, now);
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_with_dashboard_keys() {
        let json = serde_json::to_value(Summary::empty()).unwrap();
        for key in [
            "totalQuotes",
            "totalInvoices",
            "paidCount",
            "totalRevenue",
            "paidRevenue",
            "outstandingBalance",
            "monthlyRevenue",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}
