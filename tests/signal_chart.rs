use coinme_dashboard::application::chart_service::{BUY_COLOR, SELL_COLOR, trade_signal_chart};
use coinme_dashboard::domain::chart::{ChartPoint, SeriesStyle, XAxis};
use coinme_dashboard::domain::trade_signals::{AnalysisPoint, SignalSource, TradeSignalResult};
use wasm_bindgen_test::*;

fn row(day: u32, price: f64, signal: &str, adjusted: &str) -> AnalysisPoint {
    AnalysisPoint {
        timestamp: format!("2024-03-{day:02}"),
        price,
        sma_5: price - 1.0,
        sma_10: price - 2.0,
        signal: signal.to_string(),
        adjusted_signal: Some(adjusted.to_string()),
    }
}

fn payload(analysis: Vec<AnalysisPoint>) -> TradeSignalResult {
    TradeSignalResult {
        token: None,
        usd_index_trend: "Stable".to_string(),
        usd_change_pct: Some(0.0),
        note: Some("note".to_string()),
        analysis,
    }
}

#[wasm_bindgen_test]
fn no_chart_without_analysis() {
    assert!(trade_signal_chart(&payload(Vec::new()), SignalSource::Adjusted).is_none());
}

#[wasm_bindgen_test]
fn three_lines_and_two_overlays() {
    let result = payload(vec![
        row(1, 10.0, "Buy", "Hold"),
        row(2, 11.0, "Hold", "Sell"),
        row(3, 12.0, "Sell", "Buy"),
    ]);

    let chart = trade_signal_chart(&result, SignalSource::Adjusted).unwrap();

    let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["Price", "SMA 5", "SMA 10", "Buy", "Sell"]);
    assert_eq!(
        chart.x_axis,
        XAxis::Category { labels: vec!["2024-03-01".into(), "2024-03-02".into(), "2024-03-03".into()] }
    );

    let buy = &chart.series[3];
    assert_eq!(buy.color, BUY_COLOR);
    assert_eq!(buy.style, SeriesStyle::Markers { radius: 10.0 });
    assert_eq!(buy.points, [ChartPoint::new(2.0, 12.0)]);

    let sell = &chart.series[4];
    assert_eq!(sell.color, SELL_COLOR);
    assert_eq!(sell.style, SeriesStyle::Markers { radius: 8.0 });
    assert_eq!(sell.points, [ChartPoint::new(1.0, 11.0)]);
}

#[wasm_bindgen_test]
fn toggle_switches_overlay_source() {
    let result = payload(vec![row(1, 10.0, "Buy", "Hold"), row(2, 11.0, "Hold", "Sell")]);

    let raw = trade_signal_chart(&result, SignalSource::Raw).unwrap();
    assert_eq!(raw.series[3].points, [ChartPoint::new(0.0, 10.0)]);
    assert!(raw.series[4].points.is_empty());
}

#[wasm_bindgen_test]
fn y_extent_spans_prices_and_averages() {
    let result = payload(vec![row(1, 10.0, "Hold", "Hold"), row(2, 20.0, "Hold", "Hold")]);
    let chart = trade_signal_chart(&result, SignalSource::Adjusted).unwrap();
    assert_eq!(chart.y_extent(), Some((8.0, 20.0)));
    assert_eq!(chart.x_extent(), Some((0.0, 1.0)));
}
