pub mod format;
pub mod totals;

pub use format::{format_date, format_zar};
pub use totals::{ChargeSheet, Totals, TransportCharge};
