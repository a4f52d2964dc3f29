//! Pixel math for the canvas charts. Pure and target-independent.

/// Canvas margins around the plot area, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self { left: 72.0, right: 16.0, top: 36.0, bottom: 48.0 }
    }
}

/// The rectangle data is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(canvas_width: f64, canvas_height: f64, padding: Padding) -> Self {
        Self {
            left: padding.left,
            top: padding.top,
            width: (canvas_width - padding.left - padding.right).max(1.0),
            height: (canvas_height - padding.top - padding.bottom).max(1.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Affine map from a data interval onto a pixel interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// A zero-width domain is widened around its value so the map stays finite
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (lo, hi) = domain;
        let domain = if (hi - lo).abs() < f64::EPSILON {
            let pad = if lo.abs() > f64::EPSILON { lo.abs() * 0.05 } else { 1.0 };
            (lo - pad, hi + pad)
        } else {
            domain
        };
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Extent with `ratio` headroom on both ends
pub fn padded_extent(extent: (f64, f64), ratio: f64) -> (f64, f64) {
    let (lo, hi) = extent;
    let pad = (hi - lo).abs() * ratio;
    (lo - pad, hi + pad)
}

/// `count` evenly spaced values covering `[lo, hi]` inclusive
pub fn value_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (count - 1) as f64;
            (0..count).map(|i| lo + step * i as f64).collect()
        }
    }
}

/// Tick timestamps on `unit_ms` boundaries inside `[start, end]`, thinned to at most `max_ticks`
pub fn time_ticks(start: u64, end: u64, unit_ms: u64, max_ticks: usize) -> Vec<u64> {
    if unit_ms == 0 || max_ticks == 0 || end < start {
        return Vec::new();
    }

    let first = start.div_ceil(unit_ms) * unit_ms;
    if first > end {
        return Vec::new();
    }

    let available = ((end - first) / unit_ms + 1) as usize;
    let stride = available.div_ceil(max_ticks).max(1) as u64;
    let step = unit_ms * stride;

    let mut ticks = Vec::new();
    let mut t = first;
    while t <= end {
        ticks.push(t);
        t += step;
    }
    ticks
}

/// Category indices to label, evenly thinned to at most `max_labels`
pub fn category_ticks(count: usize, max_labels: usize) -> Vec<usize> {
    if count == 0 || max_labels == 0 {
        return Vec::new();
    }
    let stride = count.div_ceil(max_labels).max(1);
    (0..count).step_by(stride).collect()
}

/// Pixel x of category `index` when `count` categories share `area` evenly
pub fn category_x(index: usize, count: usize, area: &PlotArea) -> f64 {
    if count <= 1 {
        return area.left + area.width / 2.0;
    }
    area.left + area.width * index as f64 / (count - 1) as f64
}

/// Horizontal slot of one bar: `(x, width)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSlot {
    pub x: f64,
    pub width: f64,
}

/// Equal slots with `gap_ratio` of each slot left empty
pub fn bar_slots(count: usize, area: &PlotArea, gap_ratio: f64) -> Vec<BarSlot> {
    if count == 0 {
        return Vec::new();
    }
    let slot = area.width / count as f64;
    let width = slot * (1.0 - gap_ratio.clamp(0.0, 0.95));
    (0..count)
        .map(|i| BarSlot { x: area.left + slot * i as f64 + (slot - width) / 2.0, width })
        .collect()
}
