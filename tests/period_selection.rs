use chrono::{Days, NaiveDate};
use investment_lens::application::period_selection::{PeriodSelection, default_end_date, periods, start_date_for};
use investment_lens::domain::errors::DomainError;
use investment_lens::domain::market_data::TimePeriod;
use quickcheck_macros::quickcheck;

fn day(offset: u16) -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Days::new(offset as u64 * 3)
}

#[quickcheck]
fn start_is_end_minus_fixed_days(offset: u16, which: u8) -> bool {
    let period = periods()[which as usize % periods().len()];
    let end = day(offset);
    let start = start_date_for(period, end);
    (end - start).num_days() == period.days() as i64
}

#[quickcheck]
fn range_never_inverts(offset: u16, lag: u8, which: u8) -> bool {
    let period = periods()[which as usize % periods().len()];
    let selection = PeriodSelection::new(period, day(offset), lag as u64 % 10);
    selection.range().start() <= selection.range().end()
}

#[quickcheck]
fn switching_periods_keeps_end_date(offset: u16, a: u8, b: u8) -> bool {
    let first = periods()[a as usize % periods().len()];
    let second = periods()[b as usize % periods().len()];
    let mut selection = PeriodSelection::new(first, day(offset), 2);
    let end = selection.range().end();
    let changed = selection.select(second);
    changed == (first != second) && selection.range().end() == end && selection.selected() == second
}

#[quickcheck]
fn unknown_tokens_are_rejected(token: String) -> bool {
    let known = ["1W", "1M", "3M", "6M", "1Y", "5Y"];
    match TimePeriod::parse_token(&token) {
        Ok(period) => known.contains(&token.as_str()) && period.to_string() == token,
        Err(DomainError::InvalidPeriod(rejected)) => rejected == token && !known.contains(&token.as_str()),
        Err(_) => false,
    }
}

#[test]
fn fixed_day_counts() {
    let days: Vec<u64> = periods().iter().map(TimePeriod::days).collect();
    assert_eq!(days, vec![7, 30, 90, 180, 365, 1825]);
    assert_eq!(TimePeriod::default(), TimePeriod::ThreeMonths);
}

#[test]
fn end_date_lags_today() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    assert_eq!(default_end_date(today, 2), NaiveDate::from_ymd_opt(2023, 12, 30).unwrap());
    assert_eq!(default_end_date(today, 0), today);
}
