use serde::{Deserialize, Serialize};

use super::value_objects::{Currency, PropertyType};

/// One exchange-rate observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxRate {
    pub cur_dt: String,
    pub rate: f64,
}

/// Historical series plus the spot rate at the end of the range.
#[derive(Debug, Clone, PartialEq)]
pub struct FxSnapshot {
    pub rates: Vec<FxRate>,
    pub current_rate: f64,
}

impl Default for FxSnapshot {
    fn default() -> Self {
        Self { rates: Vec::new(), current_rate: 1.0 }
    }
}

impl FxSnapshot {
    /// Date of the most recent historical point, shown as "As of ...".
    pub fn as_of(&self) -> Option<&str> {
        self.rates.last().map(|r| r.cur_dt.as_str())
    }
}

/// Descriptive metadata for a tradable symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicPropInfo {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    pub currency: u8,
    pub prop_type: PropertyType,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl PublicPropInfo {
    pub fn currency(&self) -> Option<&'static Currency> {
        Currency::by_id(self.currency)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.symbol)
    }
}

/// One trading day of price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YFinancePricePoint {
    pub dt: String,
    pub close: f64,
    pub raw_close: f64,
    pub adj_close: f64,
    pub volume: f64,
    pub stock_splits: f64,
    pub dividends: f64,
    pub split_factor: f64,
}
