use coinme_dashboard::domain::trade_signals::{
    AnalysisPoint, SignalSource, TradeSignal, TradeSignalResult,
};
use quickcheck_macros::quickcheck;
use serde_json::json;
use wasm_bindgen_test::*;

const LABELS: [&str; 4] = ["Buy", "Sell", "Hold", ""];

fn point(i: usize, signal: &str, adjusted: Option<&str>) -> AnalysisPoint {
    AnalysisPoint {
        timestamp: format!("2024-01-{:02}", i + 1),
        price: 100.0 + i as f64,
        sma_5: 99.0,
        sma_10: 98.0,
        signal: signal.to_string(),
        adjusted_signal: adjusted.map(str::to_string),
    }
}

fn result(analysis: Vec<AnalysisPoint>) -> TradeSignalResult {
    TradeSignalResult {
        token: Some("solana".to_string()),
        usd_index_trend: "Rising".to_string(),
        usd_change_pct: Some(1.5),
        note: None,
        analysis,
    }
}

#[quickcheck]
fn markers_partition_by_effective_signal(codes: Vec<(u8, Option<u8>)>, use_adjusted: bool) -> bool {
    let analysis: Vec<AnalysisPoint> = codes
        .iter()
        .enumerate()
        .map(|(i, (raw, adjusted))| {
            point(
                i,
                LABELS[*raw as usize % LABELS.len()],
                adjusted.map(|a| LABELS[a as usize % LABELS.len()]),
            )
        })
        .collect();
    let result = result(analysis);
    let source = SignalSource::from_toggle(use_adjusted);

    let expected = |wanted: &str| -> Vec<String> {
        result
            .analysis
            .iter()
            .filter(|p| p.effective_signal(source) == wanted)
            .map(|p| p.timestamp.clone())
            .collect()
    };
    let buys: Vec<String> = result.buy_markers(source).into_iter().map(|m| m.x).collect();
    let sells: Vec<String> = result.sell_markers(source).into_iter().map(|m| m.x).collect();

    buys == expected("Buy") && sells == expected("Sell")
}

#[wasm_bindgen_test]
fn adjusted_field_falls_back_to_signal() {
    let absent = point(0, "Buy", None);
    let empty = point(1, "Sell", Some(""));
    let present = point(2, "Buy", Some("Sell"));

    assert_eq!(absent.trade_signal(SignalSource::Adjusted), TradeSignal::Buy);
    assert_eq!(empty.trade_signal(SignalSource::Adjusted), TradeSignal::Sell);
    assert_eq!(present.trade_signal(SignalSource::Adjusted), TradeSignal::Sell);
    assert_eq!(present.trade_signal(SignalSource::Raw), TradeSignal::Buy);
}

#[wasm_bindgen_test]
fn markers_carry_timestamp_and_price() {
    let result = result(vec![point(0, "Buy", None), point(1, "Hold", None), point(2, "Sell", None)]);

    let buys = result.buy_markers(SignalSource::Raw);
    assert_eq!(buys.len(), 1);
    assert_eq!(buys[0].x, "2024-01-01");
    assert_eq!(buys[0].y, 100.0);

    let sells = result.sell_markers(SignalSource::Raw);
    assert_eq!(sells[0].x, "2024-01-03");
}

#[wasm_bindgen_test]
fn labels_are_case_sensitive() {
    assert_eq!(TradeSignal::parse("Buy"), TradeSignal::Buy);
    assert_eq!(TradeSignal::parse("buy"), TradeSignal::Other);
    assert_eq!(TradeSignal::parse("Other"), TradeSignal::Other);
}

#[wasm_bindgen_test]
fn decodes_backend_payload() {
    let payload = json!({
        "token": "solana",
        "usd_index_trend": "Falling",
        "usd_change_pct": null,
        "note": "Signals adjusted for USD strength",
        "analysis": [
            { "timestamp": "2024-05-01", "price": 140.0, "SMA_5": 138.0, "SMA_10": 135.0,
              "signal": "Buy", "adjusted_signal": "Hold" }
        ]
    });

    let result: TradeSignalResult = serde_json::from_value(payload).unwrap();
    assert_eq!(result.change_label(), "Unknown");
    let latest = result.latest().unwrap();
    assert_eq!(latest.sma_5, 138.0);
    assert_eq!(latest.effective_signal(SignalSource::Adjusted), "Hold");
    assert!(result.buy_markers(SignalSource::Adjusted).is_empty());
    assert_eq!(result.buy_markers(SignalSource::Raw).len(), 1);
}

#[wasm_bindgen_test]
fn change_label_appends_percent() {
    assert_eq!(result(Vec::new()).change_label(), "1.5%");
}
