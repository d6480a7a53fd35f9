mod common;

use chrono::NaiveDate;
use common::{FakeTransport, client};
use futures::executor::block_on;
use insta::assert_snapshot;
use investment_lens::domain::market_data::{CURRENCIES, CurrencyPair, DateRange, Symbol, TimePeriod};
use investment_lens::domain::session::{LoginData, RegisterData};
use investment_lens::infrastructure::http::{ApiRequest, HttpUtils, RequestBody};

const BASE: &str = "/backend/api/v1";

fn describe(request: &ApiRequest) -> String {
    let line = format!("{:?} {}", request.method, request.url(BASE));
    match &request.body {
        RequestBody::Empty => line,
        RequestBody::Form(fields) => format!("{} form:{}", line, HttpUtils::encode_pairs(fields)),
        RequestBody::Json(json) => format!("{} json:{}", line, json),
    }
}

fn last_request(transport: &FakeTransport) -> String {
    transport.requests().last().map(describe).unwrap_or_default()
}

#[test]
fn login_posts_urlencoded_form() {
    let transport = FakeTransport::new();
    let api = client(&transport);
    let _ = block_on(api.login(&LoginData { username: "luntaixia".into(), password: "p@ss word".into() }));
    assert_snapshot!(last_request(&transport), @"Post /backend/api/v1/management/login form:username=luntaixia&password=p%40ss%20word");
}

#[test]
fn register_posts_json_document() {
    let transport = FakeTransport::new();
    let api = client(&transport);
    let data = RegisterData { username: "newuser".into(), email: "new@user.io".into(), password: "longenough".into() };
    let _ = block_on(api.register(&data));
    assert_snapshot!(last_request(&transport), @r#"Post /backend/api/v1/management/register json:{"username":"newuser","email":"new@user.io","password":"longenough"}"#);
}

#[test]
fn session_checks_are_plain_calls() {
    let transport = FakeTransport::new();
    let api = client(&transport);
    let _ = block_on(api.check_login());
    assert_snapshot!(last_request(&transport), @"Get /backend/api/v1/management/check_login");
    let _ = block_on(api.logout());
    assert_snapshot!(last_request(&transport), @"Post /backend/api/v1/management/logout");
}

#[test]
fn password_reset_sends_query_params() {
    let transport = FakeTransport::new();
    let api = client(&transport);
    let _ = block_on(api.request_reset_password("me+test@example.com"));
    assert_snapshot!(last_request(&transport), @"Post /backend/api/v1/management/request_reset_password?email=me%2Btest%40example.com");
    let _ = block_on(api.reset_password("tok.123", "brandnew1"));
    assert_snapshot!(last_request(&transport), @"Post /backend/api/v1/management/reset_password?token=tok.123&new_password=brandnew1");
}

#[test]
fn fx_queries_use_currency_ids() {
    let transport = FakeTransport::new();
    let api = client(&transport);
    let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let pair = CurrencyPair { from: CURRENCIES[6], to: CURRENCIES[2] };

    let _ = block_on(api.hist_fx_points(pair, DateRange::ending_at(end, TimePeriod::OneWeek)));
    assert_snapshot!(last_request(&transport), @"Get /backend/api/v1/market/fx/get_hist_fx_points?src_currency=7&tgt_currency=3&start_date=2024-02-23&end_date=2024-03-01");
    let _ = block_on(api.fx_rate(pair, end));
    assert_snapshot!(last_request(&transport), @"Get /backend/api/v1/market/fx/get_rate?src_currency=7&tgt_currency=3&cur_dt=2024-03-01");
}

#[test]
fn yfinance_queries_pass_symbol_through() {
    let transport = FakeTransport::new();
    let api = client(&transport);
    let symbol = Symbol::parse(" BRK-B ").unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    let _ = block_on(api.yfinance_exists(&symbol));
    assert_snapshot!(last_request(&transport), @"Get /backend/api/v1/market/yfinance/exists?symbol=BRK-B");
    let _ = block_on(api.public_prop_info(&symbol));
    assert_snapshot!(last_request(&transport), @"Get /backend/api/v1/market/yfinance/get_public_prop_info?symbol=BRK-B");
    let _ = block_on(api.hist_data(&symbol, DateRange::ending_at(end, TimePeriod::OneMonth)));
    assert_snapshot!(last_request(&transport), @"Get /backend/api/v1/market/yfinance/get_hist_data?symbol=BRK-B&start_date=2024-01-31&end_date=2024-03-01");
    let _ = block_on(api.blurry_search_yfinance("berkshire hathaway", 10));
    assert_snapshot!(last_request(&transport), @"Get /backend/api/v1/registry/blurry_search_yfinance?keyword=berkshire%20hathaway&limit=10");
}
