use crate::domain::price_history::TimeUnit;

/// A data-space point. On category axes `x` is the category index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum XAxis {
    /// Millisecond timestamps, ticked every `unit`
    Time { unit: TimeUnit },
    /// Evenly spaced labels, one per index
    Category { labels: Vec<String> },
}

impl XAxis {
    pub fn time_unit(&self) -> Option<TimeUnit> {
        match self {
            XAxis::Time { unit } => Some(*unit),
            XAxis::Category { .. } => None,
        }
    }

    /// Index of a category label, for placing overlays keyed by label
    pub fn category_index(&self, label: &str) -> Option<usize> {
        match self {
            XAxis::Category { labels } => labels.iter().position(|l| l == label),
            XAxis::Time { .. } => None,
        }
    }
}

/// How a series is stroked
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesStyle {
    Line { width: f64, show_points: bool },
    /// Unconnected diamonds
    Markers { radius: f64 },
}

/// Formatting for y-axis tick labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Usd,
    Score,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Usd => format!("${:.2}", value),
            ValueFormat::Score => format!("{:.1}", value),
        }
    }
}
