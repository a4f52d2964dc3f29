use super::value_objects::{ChartPoint, SeriesStyle, ValueFormat, XAxis};

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: &'static str,
    pub style: SeriesStyle,
    pub points: Vec<ChartPoint>,
}

impl Series {
    pub fn line(label: &str, color: &'static str, points: Vec<ChartPoint>) -> Self {
        Self {
            label: label.to_string(),
            color,
            style: SeriesStyle::Line { width: 2.0, show_points: false },
            points,
        }
    }

    pub fn markers(label: &str, color: &'static str, radius: f64, points: Vec<ChartPoint>) -> Self {
        Self {
            label: label.to_string(),
            color,
            style: SeriesStyle::Markers { radius },
            points,
        }
    }

    pub fn with_points_shown(mut self) -> Self {
        if let SeriesStyle::Line { width, .. } = self.style {
            self.style = SeriesStyle::Line { width, show_points: true };
        }
        self
    }
}

/// Line chart over a time or category axis
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub x_axis: XAxis,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub y_format: ValueFormat,
    pub series: Vec<Series>,
}

impl LineChart {
    /// Combined y extent of every series
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.y)
            .filter(|y| y.is_finite())
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }

    pub fn x_extent(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.x)
            .filter(|x| x.is_finite())
            .fold(None, |acc, x| match acc {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

/// Bar chart with a fixed y range
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    pub y_min: f64,
    pub y_max: f64,
    pub y_title: &'static str,
    pub y_format: ValueFormat,
}
