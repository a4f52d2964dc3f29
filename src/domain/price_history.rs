use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter};

/// Look-back window offered by the history selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter)]
pub enum HistoryWindow {
    #[strum(to_string = "1 Day")]
    OneDay,
    #[strum(to_string = "3 Days")]
    ThreeDays,
    #[default]
    #[strum(to_string = "7 Days")]
    SevenDays,
    #[strum(to_string = "14 Days")]
    FourteenDays,
    #[strum(to_string = "30 Days")]
    ThirtyDays,
}

impl HistoryWindow {
    pub fn days(&self) -> u32 {
        match self {
            Self::OneDay => 1,
            Self::ThreeDays => 3,
            Self::SevenDays => 7,
            Self::FourteenDays => 14,
            Self::ThirtyDays => 30,
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        match days {
            1 => Some(Self::OneDay),
            3 => Some(Self::ThreeDays),
            7 => Some(Self::SevenDays),
            14 => Some(Self::FourteenDays),
            30 => Some(Self::ThirtyDays),
            _ => None,
        }
    }

    /// Hourly ticks only for the single-day window
    pub fn time_unit(&self) -> TimeUnit {
        if self.days() == 1 {
            TimeUnit::Hour
        } else {
            TimeUnit::Day
        }
    }
}

/// Granularity of a time axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum TimeUnit {
    Hour,
    Day,
}

impl TimeUnit {
    pub fn duration_ms(&self) -> u64 {
        match self {
            Self::Hour => 60 * 60 * 1000,
            Self::Day => 24 * 60 * 60 * 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub sol_price_history: Vec<PricePoint>,
}

impl PriceHistory {
    pub fn points(&self) -> &[PricePoint] {
        &self.sol_price_history
    }

    pub fn is_empty(&self) -> bool {
        self.sol_price_history.is_empty()
    }

    pub fn time_range(&self) -> Option<(u64, u64)> {
        let first = self.sol_price_history.first()?;
        let last = self.sol_price_history.last()?;
        Some((first.timestamp.min(last.timestamp), first.timestamp.max(last.timestamp)))
    }
}
