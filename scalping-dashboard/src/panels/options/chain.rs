//! Fixed options chain and expiry selection

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::shared::types::{OptionContract, OptionSide};

pub const EXPIRIES: [&str; 4] = ["2024-01-19", "2024-01-26", "2024-02-02", "2024-02-16"];

/// Expiry as "Jan 19"; unparseable dates are shown verbatim
pub fn format_expiry(expiry: &str) -> String {
    NaiveDate::parse_from_str(expiry, "%Y-%m-%d")
        .map(|date| date.format("%b %-d").to_string())
        .unwrap_or_else(|_| expiry.to_string())
}

fn contract(
    strike: Decimal,
    bid: Decimal,
    ask: Decimal,
    volume: u64,
    open_interest: u64,
    implied_volatility: f64,
) -> OptionContract {
    OptionContract {
        strike,
        bid,
        ask,
        volume,
        open_interest,
        implied_volatility,
    }
}

pub fn calls() -> Vec<OptionContract> {
    vec![
        contract(dec!(145), dec!(5.20), dec!(5.35), 1250, 3400, 0.28),
        contract(dec!(150), dec!(2.10), dec!(2.25), 2100, 5600, 0.25),
        contract(dec!(155), dec!(0.85), dec!(0.95), 890, 2300, 0.32),
        contract(dec!(160), dec!(0.25), dec!(0.35), 450, 1100, 0.35),
    ]
}

pub fn puts() -> Vec<OptionContract> {
    vec![
        contract(dec!(145), dec!(0.15), dec!(0.25), 320, 1200, 0.29),
        contract(dec!(150), dec!(1.20), dec!(1.35), 1450, 4200, 0.26),
        contract(dec!(155), dec!(3.80), dec!(3.95), 980, 2800, 0.31),
        contract(dec!(160), dec!(7.20), dec!(7.40), 560, 1600, 0.33),
    ]
}

/// Selected expiry and side, with the chain for that side
#[derive(Debug, Clone)]
pub struct OptionsPanel {
    expiry: usize,
    side: OptionSide,
    calls: Vec<OptionContract>,
    puts: Vec<OptionContract>,
}

impl Default for OptionsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsPanel {
    pub fn new() -> Self {
        Self {
            expiry: 0,
            side: OptionSide::Call,
            calls: calls(),
            puts: puts(),
        }
    }

    pub fn expiry(&self) -> &'static str {
        EXPIRIES[self.expiry]
    }

    pub fn expiry_index(&self) -> usize {
        self.expiry
    }

    pub fn cycle_expiry(&mut self) {
        self.expiry = (self.expiry + 1) % EXPIRIES.len();
    }

    pub fn side(&self) -> OptionSide {
        self.side
    }

    pub fn set_side(&mut self, side: OptionSide) {
        self.side = side;
    }

    /// Contracts for the selected side; the chain does not vary by expiry
    pub fn contracts(&self) -> &[OptionContract] {
        match self.side {
            OptionSide::Call => &self.calls,
            OptionSide::Put => &self.puts,
        }
    }
}
