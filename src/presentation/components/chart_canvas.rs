use leptos::html::Canvas;
use leptos::*;

use crate::domain::chart::{BarChart, LineChart};
use crate::domain::logging::LogComponent;
use crate::infrastructure::rendering::CanvasChartRenderer;
use crate::log_warn;

pub const CHART_WIDTH: u32 = 720;
pub const CHART_HEIGHT: u32 = 360;

/// Redraws whenever `chart` changes; `None` draws the empty placeholder
#[component]
pub fn LineChartCanvas(
    #[prop(into)] chart: Signal<Option<LineChart>>,
    #[prop(default = CHART_WIDTH)] width: u32,
    #[prop(default = CHART_HEIGHT)] height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let renderer = CanvasChartRenderer::new(width, height);
        let drawn = chart.with(|chart| match chart {
            Some(chart) => renderer.draw_line_chart(&canvas, chart),
            None => renderer.draw_placeholder(&canvas),
        });
        if let Err(e) = drawn {
            log_warn!(LogComponent::View("LineChartCanvas"), "draw failed: {:?}", e);
        }
    });

    view! { <canvas class="chart-canvas" node_ref=canvas_ref width=width height=height /> }
}

#[component]
pub fn BarChartCanvas(
    chart: BarChart,
    #[prop(default = CHART_WIDTH)] width: u32,
    #[prop(default = CHART_HEIGHT)] height: u32,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if let Err(e) = CanvasChartRenderer::new(width, height).draw_bar_chart(&canvas, &chart) {
            log_warn!(LogComponent::View("BarChartCanvas"), "draw failed: {:?}", e);
        }
    });

    view! { <canvas class="chart-canvas" node_ref=canvas_ref width=width height=height /> }
}
