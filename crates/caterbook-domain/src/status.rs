//! Document statuses.

use serde::{Deserialize, Serialize};

/// Payment/workflow state of a document.
///
/// Quotes are created `Pending` and stay there. Invoices start `Unpaid`
/// and may be rewritten to any invoice status in any direction; there is
/// no terminal state and no forward-only rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DocumentStatus {
    #[default]
    Pending,
    Unpaid,
    #[serde(rename = "Partially Paid")]
    PartiallyPaid,
    Paid,
}

impl DocumentStatus {
    /// True only for `Paid`. Partially paid invoices still count their
    /// full total as outstanding.
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Paid)
    }

    /// Whether this status belongs to the invoice lifecycle.
    pub fn is_invoice_status(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// The display string, identical to the wire form.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Unpaid => "Unpaid",
            Self::PartiallyPaid => "Partially Paid",
            Self::Paid => "Paid",
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DocumentStatus::Pending, "\"Pending\"")]
    #[case(DocumentStatus::Unpaid, "\"Unpaid\"")]
    #[case(DocumentStatus::PartiallyPaid, "\"Partially Paid\"")]
    #[case(DocumentStatus::Paid, "\"Paid\"")]
    fn wire_form_matches_display_strings(#[case] status: DocumentStatus, #[case] json: &str) {
        assert_eq!(serde_json::to_string(&status).unwrap(), json);
        assert_eq!(serde_json::from_str::<DocumentStatus>(json).unwrap(), status);
    }

    #[test]
    fn only_paid_is_paid() {
        assert!(DocumentStatus::Paid.is_paid());
        assert!(!DocumentStatus::PartiallyPaid.is_paid());
        assert!(!DocumentStatus::Unpaid.is_paid());
    }
}
