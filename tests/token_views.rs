use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use coinme_dashboard::config::ApiConfig;
use coinme_dashboard::domain::errors::FetchResult;
use coinme_dashboard::infrastructure::http::{ApiClient, Transport};
use coinme_dashboard::presentation::components::{AllTokens, TokenInfoLookup, TopTokens};
use gloo_timers::future::sleep;
use leptos::*;
use serde_json::{Value, json};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Clone, Default)]
struct RecordingTransport {
    requested: Rc<RefCell<Vec<String>>>,
}

impl Transport for RecordingTransport {
    async fn get_json(&self, url: &str) -> FetchResult<Value> {
        self.requested.borrow_mut().push(url.to_string());
        Ok(json!([
            { "symbol": "SOL", "price": 150.0 },
            { "name": "BONK", "price": 0.00002 }
        ]))
    }
}

fn client() -> (ApiClient<RecordingTransport>, Rc<RefCell<Vec<String>>>) {
    let transport = RecordingTransport::default();
    let requested = transport.requested.clone();
    (ApiClient::new(ApiConfig::new("http://backend"), transport), requested)
}

fn container() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

fn click_button(host: &web_sys::HtmlElement) {
    host.query_selector("button")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

#[wasm_bindgen_test(async)]
async fn top_tokens_wait_for_the_button() {
    let (client, requested) = client();
    let host = container();
    mount_to(host.clone(), move || view! { <TopTokens client=client.clone() /> });

    sleep(Duration::from_millis(10)).await;
    assert!(requested.borrow().is_empty());
    assert!(host.inner_html().contains("Fetch Top Tokens"));
    assert!(host.query_selector("ol").unwrap().is_none());

    click_button(&host);
    sleep(Duration::from_millis(10)).await;

    assert_eq!(*requested.borrow(), ["http://backend/top-tokens?limit=10"]);
    let list = host.query_selector("ol").unwrap().unwrap();
    assert!(list.text_content().unwrap_or_default().contains("SOL - $150.0000"));
    assert!(host.inner_html().contains("Fetch Top Tokens"));
}

#[wasm_bindgen_test]
fn all_tokens_heading_and_button() {
    let (client, requested) = client();
    let host = container();
    mount_to(host.clone(), move || view! { <AllTokens client=client.clone() /> });

    let html = host.inner_html();
    assert!(html.contains("All Tokens (First 20)"));
    assert!(html.contains("Load Tokens"));
    assert!(requested.borrow().is_empty());
}

#[wasm_bindgen_test]
fn token_info_button_reads_fetch() {
    let (client, requested) = client();
    let host = container();
    mount_to(host.clone(), move || view! { <TokenInfoLookup client=client.clone() /> });

    let button = host.query_selector("button").unwrap().unwrap();
    assert_eq!(button.text_content().as_deref(), Some("Fetch"));
    assert!(requested.borrow().is_empty());
}
