//! What goes on an exported document, independent of how it is drawn.

use caterbook_domain::Document;
use caterbook_pricing::{ChargeSheet, Totals};

use crate::profile::BusinessProfile;

/// One row of the charges table.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

/// A document ready to export: the saved record, its charge breakdown,
/// and the issuing business.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub document: Document,
    pub charges: ChargeSheet,
    pub profile: BusinessProfile,
}

impl ExportJob {
    pub fn new(document: Document, charges: ChargeSheet, profile: BusinessProfile) -> Self {
        Self {
            document,
            charges,
            profile,
        }
    }

    pub fn totals(&self) -> Totals {
        self.charges.totals()
    }

    /// The charges table: the catering service row, plus a transport row
    /// when transport was actually charged.
    pub fn line_items(&self) -> Vec<LineItem> {
        let totals = self.totals();
        let mut items = vec![LineItem {
            description: self.profile.service_description.clone(),
            quantity: self.charges.guest_count,
            unit_price: self.charges.price_per_guest,
            total: totals.food_total,
        }];
        if totals.transport_total > 0.0 {
            items.push(LineItem {
                description: "Transport".into(),
                quantity: 1.0,
                unit_price: totals.transport_total,
                total: totals.transport_total,
            });
        }
        items
    }

    /// Download filename, safe for any filesystem: `caterbook_invoice_INV-1234.pdf`.
    pub fn filename(&self) -> String {
        let id: String = self
            .document
            .id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        format!("caterbook_{}_{}.pdf", self.document.kind.slug(), id)
    }
}
