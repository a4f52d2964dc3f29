use coinme_dashboard::infrastructure::rendering::geometry::{
    LinearScale, Padding, PlotArea, bar_slots, category_ticks, category_x, padded_extent,
    time_ticks, value_ticks,
};
use insta::assert_json_snapshot;
use wasm_bindgen_test::*;

const HOUR: u64 = 60 * 60 * 1000;
const DAY: u64 = 24 * HOUR;

fn area() -> PlotArea {
    PlotArea::new(400.0, 200.0, Padding { left: 40.0, right: 10.0, top: 10.0, bottom: 30.0 })
}

#[wasm_bindgen_test]
fn plot_area_excludes_padding() {
    let area = area();
    assert_eq!(area.width, 350.0);
    assert_eq!(area.height, 160.0);
    assert_eq!(area.right(), 390.0);
    assert_eq!(area.bottom(), 170.0);
}

#[wasm_bindgen_test]
fn scale_maps_inverted_pixel_range() {
    let scale = LinearScale::new((-1.0, 1.0), (170.0, 10.0));
    assert_eq!(scale.map(-1.0), 170.0);
    assert_eq!(scale.map(1.0), 10.0);
    assert_eq!(scale.map(0.0), 90.0);
}

#[wasm_bindgen_test]
fn ticks_cover_both_ends() {
    assert_eq!(value_ticks(0.0, 100.0, 5), [0.0, 25.0, 50.0, 75.0, 100.0]);
    assert_eq!(padded_extent((10.0, 20.0), 0.1), (9.0, 21.0));
}

#[wasm_bindgen_test]
fn time_ticks_align_to_unit_and_thin_out() {
    let start = 3 * DAY + 5 * HOUR;
    let end = start + 30 * DAY;

    let ticks = time_ticks(start, end, DAY, 8);
    assert!(ticks.len() <= 8);
    assert!(ticks.iter().all(|t| t % DAY == 0 && *t >= start && *t <= end));
    assert_eq!(ticks[0], 4 * DAY);
}

#[wasm_bindgen_test]
fn hourly_ticks_within_a_day() {
    let ticks = time_ticks(0, DAY, HOUR, 8);
    assert_json_snapshot!(ticks.iter().map(|t| t / HOUR).collect::<Vec<_>>(), @r###"
    [
      0,
      4,
      8,
      12,
      16,
      20,
      24
    ]
    "###);
}

#[wasm_bindgen_test]
fn empty_or_inverted_ranges_yield_nothing() {
    assert!(time_ticks(10, 5, HOUR, 8).is_empty());
    assert!(time_ticks(1, 2, HOUR, 8).is_empty());
    assert!(category_ticks(0, 8).is_empty());
    assert!(bar_slots(0, &area(), 0.3).is_empty());
}

#[wasm_bindgen_test]
fn categories_spread_edge_to_edge() {
    let area = area();
    assert_eq!(category_x(0, 5, &area), area.left);
    assert_eq!(category_x(4, 5, &area), area.right());
    assert_eq!(category_x(0, 1, &area), area.left + area.width / 2.0);
    assert_eq!(category_ticks(20, 8), [0, 3, 6, 9, 12, 15, 18]);
}

#[wasm_bindgen_test]
fn bar_slots_stay_inside_area() {
    let area = area();
    let slots = bar_slots(4, &area, 0.3);
    assert_eq!(slots.len(), 4);
    for pair in slots.windows(2) {
        assert!(pair[0].x + pair[0].width < pair[1].x);
    }
    let last = slots[3];
    assert!(slots[0].x > area.left && last.x + last.width < area.right());
}
