use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How many entries of the full token list are kept
pub const ALL_TOKENS_LIMIT: usize = 20;
/// Default `limit` asked of the top-tokens endpoint
pub const TOP_TOKENS_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenListing {
    pub address: String,
    pub symbol: String,
    #[serde(default)]
    pub price: Option<f64>,
}

impl TokenListing {
    pub fn label(&self) -> String {
        format!("{} - {}", self.symbol, price_label(self.price))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopToken {
    #[serde(alias = "name")]
    pub symbol: String,
    #[serde(default)]
    pub price: Option<f64>,
}

impl TopToken {
    pub fn label(&self) -> String {
        format!("{} - {}", self.symbol, price_label(self.price))
    }
}

fn price_label(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("${:.4}", price),
        None => "$n/a".to_string(),
    }
}

/// Mint metadata; the shape is whatever the backend forwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenInfo(pub Value);

impl TokenInfo {
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}
