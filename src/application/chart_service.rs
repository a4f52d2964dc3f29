//! Turns decoded payloads into chart descriptions.

use crate::domain::{
    chart::{Bar, BarChart, ChartPoint, LineChart, Series, ValueFormat, XAxis},
    price_history::{HistoryWindow, PriceHistory},
    sentiment::{SentimentResult, SentimentTone},
    trade_signals::{AnalysisPoint, SignalMarker, SignalSource, TradeSignalResult},
};

pub const PRICE_LINE_COLOR: &str = "#58a6ff";
pub const SIGNAL_PRICE_COLOR: &str = "white";
pub const SMA_5_COLOR: &str = "orange";
pub const SMA_10_COLOR: &str = "cyan";
pub const BUY_COLOR: &str = "green";
pub const SELL_COLOR: &str = "red";

pub fn price_history_chart(history: &PriceHistory, window: HistoryWindow) -> LineChart {
    let points = history
        .points()
        .iter()
        .map(|p| ChartPoint::new(p.timestamp as f64, p.price))
        .collect();

    LineChart {
        x_axis: XAxis::Time { unit: window.time_unit() },
        x_title: "Date",
        y_title: "Price (USD)",
        y_format: ValueFormat::Usd,
        series: vec![Series::line("SOL Price (USD)", PRICE_LINE_COLOR, points).with_points_shown()],
    }
}

/// `None` when the payload has no analysis rows
pub fn trade_signal_chart(result: &TradeSignalResult, source: SignalSource) -> Option<LineChart> {
    if result.analysis.is_empty() {
        return None;
    }

    let labels: Vec<String> = result.analysis.iter().map(|p| p.timestamp.clone()).collect();
    let price = column(&result.analysis, |p| p.price);
    let sma_5 = column(&result.analysis, |p| p.sma_5);
    let sma_10 = column(&result.analysis, |p| p.sma_10);

    let x_axis = XAxis::Category { labels };
    let buy = place_markers(&x_axis, &result.buy_markers(source));
    let sell = place_markers(&x_axis, &result.sell_markers(source));

    Some(LineChart {
        x_axis,
        x_title: "Date",
        y_title: "Price (USD)",
        y_format: ValueFormat::Usd,
        series: vec![
            Series::line("Price", SIGNAL_PRICE_COLOR, price).with_points_shown(),
            Series::line("SMA 5", SMA_5_COLOR, sma_5),
            Series::line("SMA 10", SMA_10_COLOR, sma_10),
            Series::markers("Buy", BUY_COLOR, 10.0, buy),
            Series::markers("Sell", SELL_COLOR, 8.0, sell),
        ],
    })
}

fn column(rows: &[AnalysisPoint], value: impl Fn(&AnalysisPoint) -> f64) -> Vec<ChartPoint> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| ChartPoint::new(i as f64, value(row)))
        .collect()
}

/// Resolve `{x: timestamp}` markers to category positions; unknown labels are skipped
fn place_markers(axis: &XAxis, markers: &[SignalMarker]) -> Vec<ChartPoint> {
    markers
        .iter()
        .filter_map(|m| axis.category_index(&m.x).map(|i| ChartPoint::new(i as f64, m.y)))
        .collect()
}

pub fn sentiment_chart(result: &SentimentResult) -> BarChart {
    let bars = result
        .article_labels()
        .into_iter()
        .zip(result.news_analysis.iter())
        .map(|(label, item)| Bar {
            label,
            value: item.sentiment,
            color: SentimentTone::classify(item.sentiment).color(),
        })
        .collect();

    BarChart {
        bars,
        y_min: -1.0,
        y_max: 1.0,
        y_title: "Polarity Score",
        y_format: ValueFormat::Score,
    }
}
