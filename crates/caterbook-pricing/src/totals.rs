//! Totals arithmetic for quote and invoice forms.

use serde::{Deserialize, Serialize};

/// How transport is charged for an event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransportCharge {
    /// Rate per kilometre times driving distance.
    PerKilometre { rate: f64, distance_km: f64 },
    /// One fixed amount regardless of distance.
    Flat { cost: f64 },
}

impl TransportCharge {
    /// The transport line total.
    pub fn amount(&self) -> f64 {
        match self {
            Self::PerKilometre { rate, distance_km } => rate * distance_km,
            Self::Flat { cost } => *cost,
        }
    }
}

/// Everything priced on a quote/invoice form. Missing form fields arrive
/// as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeSheet {
    pub guest_count: f64,
    pub price_per_guest: f64,
    pub transport: Option<TransportCharge>,
    pub deposit: f64,
}

impl ChargeSheet {
    /// Catering for a head count with no transport or deposit.
    pub fn per_head(guest_count: f64, price_per_guest: f64) -> Self {
        Self {
            guest_count,
            price_per_guest,
            transport: None,
            deposit: 0.0,
        }
    }

    pub fn with_transport(mut self, transport: TransportCharge) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_deposit(mut self, deposit: f64) -> Self {
        self.deposit = deposit;
        self
    }

    /// Derive all displayed totals.
    pub fn totals(&self) -> Totals {
        let food_total = self.guest_count * self.price_per_guest;
        let transport_total = self.transport.map_or(0.0, |t| t.amount());
        let grand_total = food_total + transport_total;
        Totals {
            food_total,
            transport_total,
            grand_total,
            balance_due: grand_total - self.deposit,
        }
    }
}

/// The four figures shown on forms and exported documents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub food_total: f64,
    pub transport_total: f64,
    pub grand_total: f64,
    /// Grand total less the deposit already received. Negative when the
    /// deposit exceeds the total.
    pub balance_due: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn food_total_is_guests_times_rate() {
        let totals = ChargeSheet::per_head(80.0, 300.0).totals();
        assert_eq!(totals.food_total, 24000.0);
        assert_eq!(totals.transport_total, 0.0);
        assert_eq!(totals.grand_total, 24000.0);
        assert_eq!(totals.balance_due, 24000.0);
    }

    #[rstest]
    #[case(TransportCharge::PerKilometre { rate: 5.5, distance_km: 60.0 }, 330.0)]
    #[case(TransportCharge::Flat { cost: 450.0 }, 450.0)]
    #[case(TransportCharge::PerKilometre { rate: 5.5, distance_km: 0.0 }, 0.0)]
    fn transport_modes(#[case] charge: TransportCharge, #[case] expected: f64) {
        assert_eq!(charge.amount(), expected);
    }

    #[test]
    fn deposit_reduces_balance_only() {
        let totals = ChargeSheet::per_head(50.0, 200.0)
            .with_transport(TransportCharge::Flat { cost: 500.0 })
            .with_deposit(3000.0)
            .totals();
        assert_eq!(totals.grand_total, 10500.0);
        assert_eq!(totals.balance_due, 7500.0);
    }

    #[test]
    fn overpaid_deposit_goes_negative() {
        let totals = ChargeSheet::per_head(10.0, 100.0).with_deposit(1200.0).totals();
        assert_eq!(totals.balance_due, -200.0);
    }
}
