//! Market data use cases composed from the raw backend calls.

use futures::future::join;

use crate::domain::{
    errors::ApiResult,
    logging::LogComponent,
    market_data::{CurrencyPair, DateRange, FxSnapshot, PublicPropInfo, Symbol, YFinancePricePoint},
};
use crate::infrastructure::http::ApiClient;
use crate::log_debug;

/// Historical points and the spot rate at the range end, fetched concurrently.
pub async fn load_fx(api: &ApiClient, pair: CurrencyPair, range: DateRange) -> ApiResult<FxSnapshot> {
    log_debug!(
        LogComponent::Application("MarketQueries"),
        "fx {}→{} {}..{}",
        pair.from.symbol,
        pair.to.symbol,
        range.start_param(),
        range.end_param()
    );
    let (rates, current_rate) = join(api.hist_fx_points(pair, range), api.fx_rate(pair, range.end())).await;
    Ok(FxSnapshot { rates: rates?, current_rate: current_rate? })
}

/// Existence check, then details. Blank input makes no request at all and a
/// symbol the backend does not know yields `None`.
pub async fn lookup_symbol(api: &ApiClient, raw: &str) -> ApiResult<Option<PublicPropInfo>> {
    let Some(symbol) = Symbol::parse(raw) else {
        return Ok(None);
    };
    if !api.yfinance_exists(&symbol).await? {
        log_debug!(LogComponent::Application("MarketQueries"), "{} is not listed", symbol);
        return Ok(None);
    }
    api.public_prop_info(&symbol).await.map(Some)
}

pub async fn load_history(api: &ApiClient, symbol: &Symbol, range: DateRange) -> ApiResult<Vec<YFinancePricePoint>> {
    api.hist_data(symbol, range).await
}

/// Fuzzy keyword search; blank input returns no suggestions without a request.
pub async fn search_properties(api: &ApiClient, keyword: &str, limit: u32) -> ApiResult<Vec<PublicPropInfo>> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Ok(Vec::new());
    }
    api.blurry_search_yfinance(keyword, limit).await
}
