use chrono::{Days, NaiveDate};

use crate::domain::market_data::{DateRange, TimePeriod};

/// `end` minus the period's fixed day count.
pub fn start_date_for(period: TimePeriod, end: NaiveDate) -> NaiveDate {
    end.checked_sub_days(Days::new(period.days())).unwrap_or(NaiveDate::MIN)
}

/// Latest date whose data is expected to be published.
pub fn default_end_date(today: NaiveDate, lag_days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(lag_days)).unwrap_or(today)
}

/// Periods offered by the toolbar, shortest first.
pub fn periods() -> &'static [TimePeriod] {
    &TimePeriod::ALL
}

/// Selected period plus the date range derived from it. The range is only
/// recomputed when the selection actually changes.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSelection {
    selected: TimePeriod,
    end: NaiveDate,
    range: DateRange,
}

impl PeriodSelection {
    pub fn new(default: TimePeriod, today: NaiveDate, lag_days: u64) -> Self {
        let end = default_end_date(today, lag_days);
        Self { selected: default, end, range: DateRange::ending_at(end, default) }
    }

    pub fn selected(&self) -> TimePeriod {
        self.selected
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Returns whether the range changed.
    pub fn select(&mut self, period: TimePeriod) -> bool {
        if period == self.selected {
            return false;
        }
        self.selected = period;
        self.range = DateRange::ending_at(self.end, period);
        true
    }
}
