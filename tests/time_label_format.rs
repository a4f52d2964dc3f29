use coinme_dashboard::domain::price_history::TimeUnit;
use coinme_dashboard::time_utils::format_axis_time;
use js_sys::Date;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn formats_epoch_in_utc() {
    assert_eq!(format_axis_time(0, TimeUnit::Hour), "00:00");
    assert_eq!(format_axis_time(0, TimeUnit::Day), "01.01");
}

#[wasm_bindgen_test]
fn hour_and_day_labels_match_date_components() {
    let ts = 1_700_000_000_000u64; // 2023-11-14 22:13:20 UTC
    let date = Date::new(&JsValue::from_f64(ts as f64));
    assert_eq!(
        format_axis_time(ts, TimeUnit::Hour),
        format!("{:02}:{:02}", date.get_utc_hours(), date.get_utc_minutes())
    );
    assert_eq!(format_axis_time(ts, TimeUnit::Day), "14.11");
}
