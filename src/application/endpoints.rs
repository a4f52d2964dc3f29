use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::domain::{
    errors::{FetchError, FetchResult},
    portfolio::PortfolioResult,
    price_history::{HistoryWindow, PriceHistory},
    sentiment::SentimentResult,
    tokens::{ALL_TOKENS_LIMIT, TOP_TOKENS_LIMIT, TokenInfo, TokenListing, TopToken},
    trade_signals::TradeSignalResult,
};

/// The single `{data, error}` shape every response is normalised into.
///
/// A present, non-null `error` always wins over data, whatever else the
/// payload contains.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: DeserializeOwned> ApiEnvelope<T> {
    pub fn decode(value: Value) -> FetchResult<Self> {
        if let Some(error) = value.get("error").filter(|e| !e.is_null()) {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Ok(Self { data: None, error: Some(message) });
        }

        let data = serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(Self { data: Some(data), error: None })
    }
}

impl<T> ApiEnvelope<T> {
    pub fn into_result(self) -> FetchResult<T> {
        match (self.error, self.data) {
            (Some(error), _) => Err(FetchError::Backend(error)),
            (None, Some(data)) => Ok(data),
            (None, None) => Err(FetchError::Decode("empty response envelope".to_string())),
        }
    }
}

/// One backend route: where it lives, what it returns, what to say when it fails.
pub trait Endpoint: 'static {
    type Output: DeserializeOwned + 'static;

    const PATH: &'static str;
    /// Shown for transport and shape failures
    const FAILURE_MESSAGE: &'static str;

    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn url(&self, config: &ApiConfig) -> String {
        config.url_for(Self::PATH, &self.query())
    }

    /// Client-side post-processing of a decoded payload
    fn prepare(output: Self::Output) -> Self::Output {
        output
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioRequest {
    pub wallet_address: String,
}

impl PortfolioRequest {
    pub fn new(wallet_address: &str) -> Self {
        Self { wallet_address: wallet_address.trim().to_string() }
    }
}

impl Endpoint for PortfolioRequest {
    type Output = PortfolioResult;
    const PATH: &'static str = "/portfolio";
    const FAILURE_MESSAGE: &'static str = "Failed to fetch portfolio.";

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("wallet_address", self.wallet_address.clone())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceHistoryRequest {
    pub window: HistoryWindow,
}

impl PriceHistoryRequest {
    pub fn new(window: HistoryWindow) -> Self {
        Self { window }
    }
}

impl Endpoint for PriceHistoryRequest {
    type Output = PriceHistory;
    const PATH: &'static str = "/sol-price-history";
    const FAILURE_MESSAGE: &'static str = "Failed to fetch price history";

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("days", self.window.days().to_string())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentRequest {
    pub token: String,
}

impl SentimentRequest {
    pub fn new(token: &str) -> Self {
        Self { token: token.trim().to_string() }
    }
}

impl Endpoint for SentimentRequest {
    type Output = SentimentResult;
    const PATH: &'static str = "/token-sentiment";
    const FAILURE_MESSAGE: &'static str = "Failed to fetch sentiment data.";

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("token", self.token.clone())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeSignalsRequest {
    pub token_id: String,
}

impl TradeSignalsRequest {
    pub fn new(token_id: &str) -> Self {
        Self { token_id: token_id.trim().to_string() }
    }
}

impl Endpoint for TradeSignalsRequest {
    type Output = TradeSignalResult;
    const PATH: &'static str = "/token-trade-signals";
    const FAILURE_MESSAGE: &'static str = "Failed to fetch data.";

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("token_id", self.token_id.clone())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllTokensRequest;

impl Endpoint for AllTokensRequest {
    type Output = Vec<TokenListing>;
    const PATH: &'static str = "/all-tokens";
    const FAILURE_MESSAGE: &'static str = "Failed to fetch tokens.";

    fn prepare(mut output: Self::Output) -> Self::Output {
        output.truncate(ALL_TOKENS_LIMIT);
        output
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopTokensRequest {
    pub limit: u32,
}

impl Default for TopTokensRequest {
    fn default() -> Self {
        Self { limit: TOP_TOKENS_LIMIT }
    }
}

impl Endpoint for TopTokensRequest {
    type Output = Vec<TopToken>;
    const PATH: &'static str = "/top-tokens";
    const FAILURE_MESSAGE: &'static str = "Failed to fetch top tokens.";

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("limit", self.limit.to_string())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfoRequest {
    pub mint: String,
}

impl TokenInfoRequest {
    pub fn new(mint: &str) -> Self {
        Self { mint: mint.trim().to_string() }
    }
}

impl Endpoint for TokenInfoRequest {
    type Output = TokenInfo;
    const PATH: &'static str = "/token-info";
    const FAILURE_MESSAGE: &'static str = "Failed to fetch token info.";

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("mint", self.mint.clone())]
    }
}
