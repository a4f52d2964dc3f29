use serde::{Deserialize, Serialize};

/// Valuation of a single wallet's SOL holdings, as computed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioResult {
    pub wallet: String,
    pub sol_balance: f64,
    pub sol_usd_price: f64,
    pub sol_usd_value: f64,
}

impl PortfolioResult {
    pub fn balance_label(&self) -> String {
        format!("{:.4} SOL", self.sol_balance)
    }

    pub fn price_label(&self) -> String {
        format_usd(self.sol_usd_price)
    }

    pub fn value_label(&self) -> String {
        format_usd(self.sol_usd_value)
    }
}

/// `$` followed by two decimals
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}
