mod common;

use chrono::NaiveDate;
use common::{AAPL_JSON, FakeTransport, client};
use futures::executor::block_on;
use investment_lens::application::market_queries::{load_fx, load_history, lookup_symbol, search_properties};
use investment_lens::domain::market_data::{CurrencyPair, DateRange, PropertyType, Symbol};
use investment_lens::infrastructure::http::endpoints;

fn range() -> DateRange {
    let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    DateRange::new(NaiveDate::from_ymd_opt(2024, 2, 23).unwrap(), end).unwrap()
}

#[test]
fn blank_symbol_makes_no_request() {
    let transport = FakeTransport::new();
    let found = block_on(lookup_symbol(&client(&transport), "   ")).unwrap();
    assert!(found.is_none());
    assert!(transport.requests().is_empty());
}

#[test]
fn unknown_symbol_stops_after_exists_check() {
    let transport = FakeTransport::new();
    transport.reply(endpoints::YFINANCE_EXISTS, 200, "false");

    let found = block_on(lookup_symbol(&client(&transport), "ZZZZ")).unwrap();
    assert!(found.is_none());
    assert_eq!(transport.paths(), vec![endpoints::YFINANCE_EXISTS]);
}

#[test]
fn known_symbol_fetches_details() {
    let transport = FakeTransport::new();
    transport
        .reply(endpoints::YFINANCE_EXISTS, 200, "true")
        .reply(endpoints::PUBLIC_PROP_INFO, 200, AAPL_JSON);

    let info = block_on(lookup_symbol(&client(&transport), " AAPL ")).unwrap().expect("listed");
    assert_eq!(info.display_name(), "Apple Inc.");
    assert_eq!(info.prop_type, PropertyType::Stock);
    assert_eq!(info.currency().map(|c| c.symbol), Some("USD"));

    let requests = transport.requests();
    assert_eq!(requests[0].query, vec![("symbol".to_string(), "AAPL".to_string())]);
    assert_eq!(requests[1].path, endpoints::PUBLIC_PROP_INFO);
}

#[test]
fn exists_failure_propagates() {
    let transport = FakeTransport::new();
    transport.reply(endpoints::YFINANCE_EXISTS, 500, "");
    let error = block_on(lookup_symbol(&client(&transport), "AAPL")).unwrap_err();
    assert_eq!(error.status(), Some(500));
}

#[test]
fn fx_snapshot_joins_history_and_spot_rate() {
    let transport = FakeTransport::new();
    transport
        .reply(
            endpoints::HIST_FX_POINTS,
            200,
            r#"[{"cur_dt":"2024-02-28","rate":1.351},{"cur_dt":"2024-02-29","rate":1.357}]"#,
        )
        .reply(endpoints::FX_RATE, 200, "1.3581");

    let snapshot = block_on(load_fx(&client(&transport), CurrencyPair::default(), range())).unwrap();
    assert_eq!(snapshot.rates.len(), 2);
    assert_eq!(snapshot.current_rate, 1.3581);
    assert_eq!(snapshot.as_of(), Some("2024-02-29"));

    let spot = transport.requests().into_iter().find(|r| r.path == endpoints::FX_RATE).unwrap();
    assert_eq!(
        spot.query,
        vec![
            ("src_currency".to_string(), "1".to_string()),
            ("tgt_currency".to_string(), "2".to_string()),
            ("cur_dt".to_string(), "2024-03-01".to_string()),
        ]
    );
}

#[test]
fn fx_snapshot_fails_when_either_call_fails() {
    let transport = FakeTransport::new();
    transport.reply(endpoints::HIST_FX_POINTS, 200, "[]");
    assert!(block_on(load_fx(&client(&transport), CurrencyPair::default(), range())).is_err());
}

#[test]
fn history_uses_range_params() {
    let transport = FakeTransport::new();
    transport.reply(
        endpoints::HIST_DATA,
        200,
        r#"[{"dt":"2024-02-23","close":182.5,"raw_close":182.5,"adj_close":182.1,"volume":4.5e7,"stock_splits":0.0,"dividends":0.0,"split_factor":1.0}]"#,
    );
    let symbol = Symbol::parse("AAPL").unwrap();

    let points = block_on(load_history(&client(&transport), &symbol, range())).unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].close, 182.5);
    assert_eq!(
        transport.requests()[0].query,
        vec![
            ("symbol".to_string(), "AAPL".to_string()),
            ("start_date".to_string(), "2024-02-23".to_string()),
            ("end_date".to_string(), "2024-03-01".to_string()),
        ]
    );
}

#[test]
fn search_sends_keyword_and_limit() {
    let transport = FakeTransport::new();
    transport.reply(endpoints::BLURRY_SEARCH_YFINANCE, 200, &format!("[{}]", AAPL_JSON));
    let api = client(&transport);

    assert!(block_on(search_properties(&api, "  ", 10)).unwrap().is_empty());
    assert!(transport.requests().is_empty());

    let hits = block_on(search_properties(&api, " app ", 10)).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(
        transport.requests()[0].query,
        vec![("keyword".to_string(), "app".to_string()), ("limit".to_string(), "10".to_string())]
    );
}
