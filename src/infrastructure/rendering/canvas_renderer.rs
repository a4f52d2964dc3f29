use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::geometry::{
    LinearScale, Padding, PlotArea, bar_slots, category_ticks, category_x, padded_extent, time_ticks,
    value_ticks,
};
use crate::domain::chart::{BarChart, ChartPoint, LineChart, Series, SeriesStyle, ValueFormat, XAxis};
use crate::time_utils::format_axis_time;

const BACKGROUND: &str = "#161b22";
const GRID: &str = "#30363d";
const TICK_TEXT: &str = "#8b949e";
const TITLE_TEXT: &str = "#f0f6fc";
const Y_TICKS: usize = 5;
const MAX_X_LABELS: usize = 8;

/// Canvas 2D renderer for line and bar charts
pub struct CanvasChartRenderer {
    width: u32,
    height: u32,
    padding: Padding,
}

impl CanvasChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, padding: Padding::default() }
    }

    fn context(&self, canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
        canvas.set_width(self.width);
        canvas.set_height(self.height);

        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))
    }

    fn area(&self) -> PlotArea {
        PlotArea::new(self.width as f64, self.height as f64, self.padding)
    }

    fn clear(&self, ctx: &CanvasRenderingContext2d) {
        ctx.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    pub fn draw_placeholder(&self, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        let ctx = self.context(canvas)?;
        self.clear(&ctx);
        self.draw_no_data(&ctx)
    }

    pub fn draw_line_chart(&self, canvas: &HtmlCanvasElement, chart: &LineChart) -> Result<(), JsValue> {
        let ctx = self.context(canvas)?;
        self.clear(&ctx);

        let (Some(x_extent), Some(y_extent)) = (chart.x_extent(), chart.y_extent()) else {
            return self.draw_no_data(&ctx);
        };

        let area = self.area();
        let (y_lo, y_hi) = padded_extent(y_extent, 0.05);
        let y_scale = LinearScale::new((y_lo, y_hi), (area.bottom(), area.top));
        self.draw_y_axis(&ctx, &area, &y_scale, y_lo, y_hi, chart.y_format)?;

        let x_of: Box<dyn Fn(f64) -> f64> = match &chart.x_axis {
            XAxis::Time { unit } => {
                let x_scale = LinearScale::new(x_extent, (area.left, area.right()));
                let start = x_extent.0.max(0.0) as u64;
                let end = x_extent.1.max(0.0) as u64;
                for tick in time_ticks(start, end, unit.duration_ms(), MAX_X_LABELS) {
                    let x = x_scale.map(tick as f64);
                    self.draw_x_label(&ctx, &area, x, &format_axis_time(tick, *unit))?;
                }
                Box::new(move |x| x_scale.map(x))
            }
            XAxis::Category { labels } => {
                let count = labels.len();
                for index in category_ticks(count, MAX_X_LABELS) {
                    let x = category_x(index, count, &area);
                    self.draw_x_label(&ctx, &area, x, &labels[index])?;
                }
                Box::new(move |x| category_x(x.max(0.0) as usize, count, &area))
            }
        };

        for series in &chart.series {
            self.draw_series(&ctx, series, &x_of, &y_scale)?;
        }

        self.draw_titles(&ctx, &area, chart.x_title, chart.y_title)?;
        self.draw_legend(&ctx, &chart.series)
    }

    pub fn draw_bar_chart(&self, canvas: &HtmlCanvasElement, chart: &BarChart) -> Result<(), JsValue> {
        let ctx = self.context(canvas)?;
        self.clear(&ctx);

        if chart.bars.is_empty() {
            return self.draw_no_data(&ctx);
        }

        let area = self.area();
        let y_scale = LinearScale::new((chart.y_min, chart.y_max), (area.bottom(), area.top));
        self.draw_y_axis(&ctx, &area, &y_scale, chart.y_min, chart.y_max, chart.y_format)?;

        let baseline = y_scale.map(0.0_f64.clamp(chart.y_min, chart.y_max));
        for (bar, slot) in chart.bars.iter().zip(bar_slots(chart.bars.len(), &area, 0.3)) {
            let top = y_scale.map(bar.value.clamp(chart.y_min, chart.y_max));
            ctx.set_fill_style_str(bar.color);
            ctx.fill_rect(slot.x, top.min(baseline), slot.width, (baseline - top).abs());
            self.draw_x_label(&ctx, &area, slot.x + slot.width / 2.0, &bar.label)?;
        }

        self.draw_titles(&ctx, &area, "", chart.y_title)
    }

    fn draw_y_axis(
        &self,
        ctx: &CanvasRenderingContext2d,
        area: &PlotArea,
        scale: &LinearScale,
        lo: f64,
        hi: f64,
        format: ValueFormat,
    ) -> Result<(), JsValue> {
        ctx.set_stroke_style_str(GRID);
        ctx.set_line_width(1.0);
        ctx.set_fill_style_str(TICK_TEXT);
        ctx.set_font("11px sans-serif");
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");

        for value in value_ticks(lo, hi, Y_TICKS) {
            let y = scale.map(value);
            ctx.begin_path();
            ctx.move_to(area.left, y);
            ctx.line_to(area.right(), y);
            ctx.stroke();
            ctx.fill_text(&format.format(value), area.left - 6.0, y)?;
        }
        Ok(())
    }

    fn draw_x_label(&self, ctx: &CanvasRenderingContext2d, area: &PlotArea, x: f64, label: &str) -> Result<(), JsValue> {
        ctx.set_fill_style_str(TICK_TEXT);
        ctx.set_font("11px sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");
        ctx.fill_text(label, x, area.bottom() + 6.0)
    }

    fn draw_series(
        &self,
        ctx: &CanvasRenderingContext2d,
        series: &Series,
        x_of: &dyn Fn(f64) -> f64,
        y_scale: &LinearScale,
    ) -> Result<(), JsValue> {
        let pixels: Vec<(f64, f64)> = series
            .points
            .iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .map(|p: &ChartPoint| (x_of(p.x), y_scale.map(p.y)))
            .collect();

        ctx.set_stroke_style_str(series.color);
        ctx.set_fill_style_str(series.color);

        match series.style {
            SeriesStyle::Line { width, show_points } => {
                ctx.set_line_width(width);
                ctx.begin_path();
                for (i, (x, y)) in pixels.iter().enumerate() {
                    if i == 0 {
                        ctx.move_to(*x, *y);
                    } else {
                        ctx.line_to(*x, *y);
                    }
                }
                ctx.stroke();

                if show_points {
                    for (x, y) in &pixels {
                        ctx.begin_path();
                        ctx.arc(*x, *y, 2.0, 0.0, std::f64::consts::TAU)?;
                        ctx.fill();
                    }
                }
            }
            SeriesStyle::Markers { radius } => {
                for (x, y) in &pixels {
                    draw_diamond(ctx, *x, *y, radius);
                }
            }
        }
        Ok(())
    }

    fn draw_titles(&self, ctx: &CanvasRenderingContext2d, area: &PlotArea, x_title: &str, y_title: &str) -> Result<(), JsValue> {
        ctx.set_fill_style_str(TITLE_TEXT);
        ctx.set_font("bold 14px sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("bottom");
        if !x_title.is_empty() {
            ctx.fill_text(x_title, area.left + area.width / 2.0, self.height as f64 - 4.0)?;
        }

        ctx.save();
        ctx.translate(14.0, area.top + area.height / 2.0)?;
        ctx.rotate(-std::f64::consts::FRAC_PI_2)?;
        ctx.set_text_baseline("middle");
        let drawn = ctx.fill_text(y_title, 0.0, 0.0);
        ctx.restore();
        drawn
    }

    fn draw_legend(&self, ctx: &CanvasRenderingContext2d, series: &[Series]) -> Result<(), JsValue> {
        ctx.set_font("12px sans-serif");
        ctx.set_text_align("left");
        ctx.set_text_baseline("middle");

        let mut x = self.padding.left;
        let y = self.padding.top / 2.0;
        for s in series {
            ctx.set_fill_style_str(s.color);
            match s.style {
                SeriesStyle::Markers { .. } => draw_diamond(ctx, x + 6.0, y, 5.0),
                SeriesStyle::Line { .. } => ctx.fill_rect(x, y - 2.0, 12.0, 4.0),
            }
            ctx.set_fill_style_str(TITLE_TEXT);
            ctx.fill_text(&s.label, x + 16.0, y)?;
            x += 24.0 + 7.0 * s.label.chars().count() as f64;
        }
        Ok(())
    }

    fn draw_no_data(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        ctx.set_fill_style_str(TICK_TEXT);
        ctx.set_font("14px sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text("No data", self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

/// Rotated square, the "rectRot" point style
fn draw_diamond(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64) {
    ctx.begin_path();
    ctx.move_to(x, y - radius);
    ctx.line_to(x + radius, y);
    ctx.line_to(x, y + radius);
    ctx.line_to(x - radius, y);
    ctx.close_path();
    ctx.fill();
}
