//! Segment tables for time-synchronized mode.
//!
//! A [`Schedule`] splits the 24-hour day into contiguous half-open hour
//! ranges. The last segment may run past hour 24 (e.g. `[23, 29)`); hours
//! before the day start are then read as `hour + 24`.

use serde::{Deserialize, Serialize};

use super::settings::AnchorColor;

/// Minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// One `[start_hour, end_hour)` interval blending `from` into `to`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub start_hour: u32,
    pub end_hour: u32,
    pub from: AnchorColor,
    pub to: AnchorColor,
}

impl Segment {
    pub fn new(
        name: &str,
        start_hour: u32,
        end_hour: u32,
        from: AnchorColor,
        to: AnchorColor,
    ) -> Self {
        Self {
            name: name.into(),
            start_hour,
            end_hour,
            from,
            to,
        }
    }

    pub fn length_minutes(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour) * 60
    }

    /// Whether `adjusted_hour` (already shifted past midnight) falls inside.
    pub fn contains_hour(&self, adjusted_hour: u32) -> bool {
        (self.start_hour..self.end_hour).contains(&adjusted_hour)
    }
}

/// An ordered segment table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    pub name: String,
    pub segments: Vec<Segment>,
}

impl Schedule {
    /// Morning `[5,12)`, midday `[12,18)`, night `[18,23)`, midnight `[23,29)`.
    pub fn four_segment() -> Self {
        use AnchorColor::*;
        Self {
            name: "four-segment".into(),
            segments: vec![
                Segment::new("morning", 5, 12, Morning, Midday),
                Segment::new("midday", 12, 18, Midday, Night),
                Segment::new("night", 18, 23, Night, Midnight),
                Segment::new("midnight", 23, 29, Midnight, Morning),
            ],
        }
    }

    /// Like [`Schedule::four_segment`] with an evening segment between
    /// midday and night: `[5,10)`, `[10,16)`, `[16,19)`, `[19,23)`, `[23,29)`.
    pub fn five_segment() -> Self {
        use AnchorColor::*;
        Self {
            name: "five-segment".into(),
            segments: vec![
                Segment::new("morning", 5, 10, Morning, Midday),
                Segment::new("midday", 10, 16, Midday, Evening),
                Segment::new("evening", 16, 19, Evening, Night),
                Segment::new("night", 19, 23, Night, Midnight),
                Segment::new("midnight", 23, 29, Midnight, Morning),
            ],
        }
    }

    /// Hour at which the first segment begins.
    pub fn day_start(&self) -> u32 {
        self.segments.first().map(|s| s.start_hour).unwrap_or(0)
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::four_segment()
    }
}

/// How time-sync mode shapes its output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TimeSyncStyle {
    /// Only the blended color, as a flat fill.
    Flat,
    /// `[from, blended, to]` as a left-to-right gradient.
    #[default]
    ThreeStop,
}
