use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use coinme_dashboard::application::endpoints::PriceHistoryRequest;
use coinme_dashboard::config::ApiConfig;
use coinme_dashboard::domain::errors::FetchResult;
use coinme_dashboard::domain::price_history::HistoryWindow;
use coinme_dashboard::infrastructure::http::{ApiClient, Transport};
use coinme_dashboard::presentation::RemoteResource;
use coinme_dashboard::presentation::components::watch_window;
use gloo_timers::future::sleep;
use leptos::*;
use serde_json::{Value, json};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Answers every request with an empty history and remembers the URL
#[derive(Clone, Default)]
struct RecordingTransport {
    requested: Rc<RefCell<Vec<String>>>,
}

impl Transport for RecordingTransport {
    async fn get_json(&self, url: &str) -> FetchResult<Value> {
        self.requested.borrow_mut().push(url.to_string());
        Ok(json!({ "sol_price_history": [] }))
    }
}

#[wasm_bindgen_test(async)]
async fn fetches_on_mount_and_on_every_selection() {
    let runtime = create_runtime();
    let transport = RecordingTransport::default();
    let requested = transport.requested.clone();
    let history = RemoteResource::<PriceHistoryRequest, RecordingTransport>::new(ApiClient::new(
        ApiConfig::new("http://backend"),
        transport,
    ));
    let window = create_rw_signal(HistoryWindow::default());

    watch_window(window, history);
    sleep(Duration::from_millis(10)).await;
    assert_eq!(*requested.borrow(), ["http://backend/sol-price-history?days=7"]);

    window.set(HistoryWindow::OneDay);
    sleep(Duration::from_millis(10)).await;
    assert_eq!(
        *requested.borrow(),
        [
            "http://backend/sol-price-history?days=7",
            "http://backend/sol-price-history?days=1",
        ]
    );
    assert!(!history.is_loading());
    assert!(history.with_data(|h| h.is_empty()).unwrap_or(false));

    runtime.dispose();
}
