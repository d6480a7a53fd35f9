use chrono::{Days, NaiveDate};
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::domain::errors::DomainError;

/// Static currency catalog entry. `id` is the backend's `CurType` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    pub symbol: &'static str,
    pub id: u8,
    pub flag_class: &'static str,
}

impl Currency {
    const fn new(symbol: &'static str, id: u8, flag_class: &'static str) -> Self {
        Self { symbol, id, flag_class }
    }

    pub fn by_id(id: u8) -> Option<&'static Currency> {
        CURRENCIES.iter().find(|c| c.id == id)
    }

    pub fn by_symbol(symbol: &str) -> Option<&'static Currency> {
        CURRENCIES.iter().find(|c| c.symbol.eq_ignore_ascii_case(symbol))
    }
}

pub const CURRENCIES: [Currency; 15] = [
    Currency::new("USD", 1, "fi-us"),
    Currency::new("CAD", 2, "fi-ca"),
    Currency::new("CNY", 3, "fi-cn"),
    Currency::new("GBP", 4, "fi-gb"),
    Currency::new("AUD", 5, "fi-au"),
    Currency::new("JPY", 6, "fi-jp"),
    Currency::new("EUR", 7, "fi-eu"),
    Currency::new("MOP", 8, "fi-mo"),
    Currency::new("HKD", 9, "fi-hk"),
    Currency::new("CHF", 10, "fi-ch"),
    Currency::new("TWD", 11, "fi-tw"),
    Currency::new("THB", 12, "fi-th"),
    Currency::new("MXN", 13, "fi-mx"),
    Currency::new("CUP", 14, "fi-cu"),
    Currency::new("RUB", 15, "fi-ru"),
];

/// Source/target pair for exchange-rate queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub from: Currency,
    pub to: Currency,
}

impl Default for CurrencyPair {
    fn default() -> Self {
        Self { from: CURRENCIES[0], to: CURRENCIES[1] }
    }
}

/// Instrument kind, mirrors the backend `PropertyType` integer enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, AsRefStr, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Cash = 0,
    MoneyMarket = 1,
    Bond = 2,
    Stock = 3,
    Etf = 4,
    FundPub = 5,
    FundPriv = 6,
    Derivative = 7,
    RealEstate = 8,
    Crypto = 9,
    Debt = 10,
    Business = 11,
    Lending = 12,
    Other = 13,
}

impl TryFrom<u8> for PropertyType {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use PropertyType::*;
        let kind = match value {
            0 => Cash,
            1 => MoneyMarket,
            2 => Bond,
            3 => Stock,
            4 => Etf,
            5 => FundPub,
            6 => FundPriv,
            7 => Derivative,
            8 => RealEstate,
            9 => Crypto,
            10 => Debt,
            11 => Business,
            12 => Lending,
            13 => Other,
            other => return Err(DomainError::UnknownPropertyType(other)),
        };
        Ok(kind)
    }
}

impl From<PropertyType> for u8 {
    fn from(value: PropertyType) -> Self {
        value as u8
    }
}

/// Lookback window token driving the chart date range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr,
)]
pub enum TimePeriod {
    #[strum(serialize = "1W")]
    OneWeek,
    #[strum(serialize = "1M")]
    OneMonth,
    #[default]
    #[strum(serialize = "3M")]
    ThreeMonths,
    #[strum(serialize = "6M")]
    SixMonths,
    #[strum(serialize = "1Y")]
    OneYear,
    #[strum(serialize = "5Y")]
    FiveYears,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 6] = [
        TimePeriod::OneWeek,
        TimePeriod::OneMonth,
        TimePeriod::ThreeMonths,
        TimePeriod::SixMonths,
        TimePeriod::OneYear,
        TimePeriod::FiveYears,
    ];

    pub fn days(&self) -> u64 {
        match self {
            Self::OneWeek => 7,
            Self::OneMonth => 30,
            Self::ThreeMonths => 90,
            Self::SixMonths => 180,
            Self::OneYear => 365,
            Self::FiveYears => 1825,
        }
    }

    /// Parse a token such as `"6M"`; unknown tokens are an error.
    pub fn parse_token(token: &str) -> Result<Self, DomainError> {
        TimePeriod::from_str(token).map_err(|_| DomainError::InvalidPeriod(token.to_string()))
    }
}

/// Closed date interval with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Range ending at `end` and spanning `period`.
    pub fn ending_at(end: NaiveDate, period: TimePeriod) -> Self {
        let start = end.checked_sub_days(Days::new(period.days())).unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn start_param(&self) -> String {
        iso_date(self.start)
    }

    pub fn end_param(&self) -> String {
        iso_date(self.end)
    }
}

/// `YYYY-MM-DD`, the format every date query parameter uses.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Ticker symbol as typed by the user, trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display)]
#[display(fmt = "{}", _0)]
pub struct Symbol(String);

impl Symbol {
    /// `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_type_labels_match_backend_names() {
        assert_eq!(PropertyType::MoneyMarket.to_string(), "MONEY_MARKET");
        assert_eq!(PropertyType::Etf.to_string(), "ETF");
        assert_eq!(PropertyType::try_from(8).unwrap(), PropertyType::RealEstate);
        assert_eq!(PropertyType::try_from(42), Err(DomainError::UnknownPropertyType(42)));
    }

    #[test]
    fn symbol_rejects_blank_input() {
        assert!(Symbol::parse("").is_none());
        assert!(Symbol::parse("   \t").is_none());
        assert_eq!(Symbol::parse(" AAPL ").unwrap().value(), "AAPL");
    }

    #[test]
    fn date_range_rejects_inverted_bounds() {
        let a = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(DateRange::new(a, b).is_err());
        let range = DateRange::new(b, a).unwrap();
        assert_eq!(range.start_param(), "2024-01-01");
        assert_eq!(range.end_param(), "2024-01-10");
    }
}
