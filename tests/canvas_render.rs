use coinme_dashboard::application::chart_service::{price_history_chart, sentiment_chart};
use coinme_dashboard::domain::price_history::{HistoryWindow, PriceHistory, PricePoint};
use coinme_dashboard::domain::sentiment::{NewsItem, SentimentResult};
use coinme_dashboard::infrastructure::rendering::CanvasChartRenderer;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn draws_price_history() {
    let history = PriceHistory {
        sol_price_history: (0..48)
            .map(|h| PricePoint { timestamp: 1_700_000_000_000 + h * 3_600_000, price: 50.0 + h as f64 })
            .collect(),
    };
    let canvas = canvas();
    let renderer = CanvasChartRenderer::new(320, 160);

    renderer
        .draw_line_chart(&canvas, &price_history_chart(&history, HistoryWindow::ThreeDays))
        .unwrap();

    assert_eq!((canvas.width(), canvas.height()), (320, 160));
}

#[wasm_bindgen_test]
fn draws_sentiment_bars_and_placeholder() {
    let result = SentimentResult {
        token: "SOL".into(),
        sentiment: "Positive".into(),
        average_sentiment_score: 0.3,
        risk_warning: "Low".into(),
        news_analysis: vec![
            NewsItem { summary: "up".into(), sentiment: 0.6 },
            NewsItem { summary: "down".into(), sentiment: -0.2 },
        ],
    };
    let canvas = canvas();
    let renderer = CanvasChartRenderer::new(320, 160);

    renderer.draw_bar_chart(&canvas, &sentiment_chart(&result)).unwrap();
    renderer.draw_placeholder(&canvas).unwrap();
}
