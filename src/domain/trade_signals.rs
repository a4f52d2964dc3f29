use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Categories the chart cares about; anything else ("Hold", empty) is `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString, AsRefStr)]
pub enum TradeSignal {
    Buy,
    Sell,
    #[strum(disabled)]
    Other,
}

impl TradeSignal {
    /// Exact, case-sensitive match on the backend's labels
    pub fn parse(label: &str) -> Self {
        label.parse().unwrap_or(Self::Other)
    }
}

/// Which of the two parallel signal fields drives the overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalSource {
    #[default]
    Adjusted,
    Raw,
}

impl SignalSource {
    pub fn from_toggle(use_adjusted: bool) -> Self {
        if use_adjusted { Self::Adjusted } else { Self::Raw }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPoint {
    pub timestamp: String,
    pub price: f64,
    #[serde(rename = "SMA_5")]
    pub sma_5: f64,
    #[serde(rename = "SMA_10")]
    pub sma_10: f64,
    pub signal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_signal: Option<String>,
}

impl AnalysisPoint {
    /// The preferred field, falling back to `signal` when it is absent or empty
    pub fn effective_signal(&self, source: SignalSource) -> &str {
        match source {
            SignalSource::Adjusted => self
                .adjusted_signal
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(&self.signal),
            SignalSource::Raw => &self.signal,
        }
    }

    pub fn trade_signal(&self, source: SignalSource) -> TradeSignal {
        TradeSignal::parse(self.effective_signal(source))
    }
}

/// A buy/sell overlay point: category `x`, price `y`
#[derive(Debug, Clone, PartialEq)]
pub struct SignalMarker {
    pub x: String,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSignalResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub usd_index_trend: String,
    pub usd_change_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub analysis: Vec<AnalysisPoint>,
}

impl TradeSignalResult {
    pub fn markers(&self, source: SignalSource, signal: TradeSignal) -> Vec<SignalMarker> {
        self.analysis
            .iter()
            .filter(|point| point.trade_signal(source) == signal)
            .map(|point| SignalMarker { x: point.timestamp.clone(), y: point.price })
            .collect()
    }

    pub fn buy_markers(&self, source: SignalSource) -> Vec<SignalMarker> {
        self.markers(source, TradeSignal::Buy)
    }

    pub fn sell_markers(&self, source: SignalSource) -> Vec<SignalMarker> {
        self.markers(source, TradeSignal::Sell)
    }

    /// "Today's signal"
    pub fn latest(&self) -> Option<&AnalysisPoint> {
        self.analysis.last()
    }

    pub fn change_label(&self) -> String {
        match self.usd_change_pct {
            Some(pct) => format!("{pct}%"),
            None => "Unknown".to_string(),
        }
    }
}
