use js_sys::Date;
use wasm_bindgen::JsValue;

use crate::domain::price_history::TimeUnit;

/// Axis label for a millisecond timestamp, using UTC components.
///
/// - `Hour` -> `HH:MM`
/// - `Day`  -> `DD.MM`
pub fn format_axis_time(timestamp: u64, unit: TimeUnit) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp as f64));
    match unit {
        TimeUnit::Hour => format!("{:02}:{:02}", date.get_utc_hours(), date.get_utc_minutes()),
        TimeUnit::Day => format!("{:02}.{:02}", date.get_utc_date(), date.get_utc_month() + 1),
    }
}
