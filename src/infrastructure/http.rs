use crate::domain::{
    errors::{ApiError, ApiResult, TransportError},
    logging::{LogComponent, get_logger},
    market_data::{CurrencyPair, DateRange, FxRate, PublicPropInfo, Symbol, YFinancePricePoint, iso_date},
    session::{LoginData, RegisterData, User},
};
use chrono::NaiveDate;
use futures::future::LocalBoxFuture;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::rc::Rc;
use web_sys::RequestCredentials;

/// Backend routes, relative to the configured API prefix.
pub mod endpoints {
    pub const LOGIN: &str = "management/login";
    pub const CHECK_LOGIN: &str = "management/check_login";
    pub const LOGOUT: &str = "management/logout";
    pub const REGISTER: &str = "management/register";
    pub const REQUEST_RESET_PASSWORD: &str = "management/request_reset_password";
    pub const RESET_PASSWORD: &str = "management/reset_password";
    pub const HIST_FX_POINTS: &str = "market/fx/get_hist_fx_points";
    pub const FX_RATE: &str = "market/fx/get_rate";
    pub const YFINANCE_EXISTS: &str = "market/yfinance/exists";
    pub const PUBLIC_PROP_INFO: &str = "market/yfinance/get_public_prop_info";
    pub const HIST_DATA: &str = "market/yfinance/get_hist_data";
    pub const BLURRY_SEARCH_YFINANCE: &str = "registry/blurry_search_yfinance";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    /// `application/x-www-form-urlencoded`
    Form(Vec<(String, String)>),
    /// Pre-serialized JSON document.
    Json(String),
}

/// Transport-neutral description of one backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(path: &str) -> Self {
        Self { method: Method::Get, path: path.to_string(), query: Vec::new(), body: RequestBody::Empty }
    }

    pub fn post(path: &str) -> Self {
        Self { method: Method::Post, path: path.to_string(), query: Vec::new(), body: RequestBody::Empty }
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn form(mut self, fields: &[(&str, &str)]) -> Self {
        self.body = RequestBody::Form(fields.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect());
        self
    }

    pub fn json(mut self, json: String) -> Self {
        self.body = RequestBody::Json(json);
        self
    }

    /// Full URL under `base`, query values percent-encoded.
    pub fn url(&self, base: &str) -> String {
        let path = format!("{}/{}", base.trim_end_matches('/'), self.path.trim_start_matches('/'));
        HttpUtils::build_url_with_params(&path, &self.query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

/// Sends requests to the backend. Futures are `!Send`: everything runs on the UI thread.
pub trait HttpTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, TransportError>>;
}

/// gloo-net transport; the session cookie rides along on every request.
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn builder(method: Method, url: &str) -> RequestBuilder {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
        };
        builder.credentials(RequestCredentials::Include)
    }
}

impl HttpTransport for GlooTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, TransportError>> {
        let url = request.url(&self.base_url);
        Box::pin(async move {
            get_logger().debug(
                LogComponent::Infrastructure("HTTP"),
                &format!("🌐 {:?}: {}", request.method, url),
            );

            let builder = Self::builder(request.method, &url);
            let sent = match request.body {
                RequestBody::Empty => builder.send().await,
                RequestBody::Form(fields) => {
                    builder
                        .header("Content-Type", "application/x-www-form-urlencoded")
                        .body(HttpUtils::encode_pairs(&fields))
                        .map_err(|e| TransportError(format!("Failed to create request body: {:?}", e)))?
                        .send()
                        .await
                }
                RequestBody::Json(json) => {
                    builder
                        .header("Content-Type", "application/json")
                        .body(json)
                        .map_err(|e| TransportError(format!("Failed to create request body: {:?}", e)))?
                        .send()
                        .await
                }
            };

            let response = sent.map_err(|e| {
                get_logger().warn(LogComponent::Infrastructure("HTTP"), &format!("❌ {} failed: {:?}", url, e));
                TransportError(format!("Request failed: {:?}", e))
            })?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError(format!("Failed to read response: {:?}", e)))?;

            get_logger().debug(
                LogComponent::Infrastructure("HTTP"),
                &format!("✅ {} -> {} ({} bytes)", url, status, body.len()),
            );

            Ok(ApiResponse { status, body })
        })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// `{message}` from an error body, falling back to a string `detail`.
fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.or_else(|| parsed.detail.and_then(|d| d.as_str().map(str::to_string)))
}

/// Typed client for the backend REST surface.
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Client over the browser fetch API rooted at `api_base`.
    pub fn browser(api_base: &str) -> Self {
        Self::new(Rc::new(GlooTransport::new(api_base)))
    }

    async fn execute(&self, request: ApiRequest) -> ApiResult<String> {
        let path = request.path.clone();
        let response = self.transport.send(request).await?;
        if HttpUtils::is_success_status(response.status) {
            Ok(response.body)
        } else {
            get_logger().warn(
                LogComponent::Infrastructure("ApiClient"),
                &format!("{} answered HTTP {}", path, response.status),
            );
            Err(ApiError::Status { status: response.status, message: error_message(&response.body) })
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let path = request.path.clone();
        let body = self.execute(request).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("{}: {}", path, e)))
    }

    pub async fn check_login(&self) -> ApiResult<User> {
        self.fetch_json(ApiRequest::get(endpoints::CHECK_LOGIN)).await
    }

    pub async fn login(&self, data: &LoginData) -> ApiResult<()> {
        let request = ApiRequest::post(endpoints::LOGIN)
            .form(&[("username", data.username.as_str()), ("password", data.password.as_str())]);
        self.execute(request).await.map(|_| ())
    }

    pub async fn logout(&self) -> ApiResult<()> {
        self.execute(ApiRequest::post(endpoints::LOGOUT)).await.map(|_| ())
    }

    pub async fn register(&self, data: &RegisterData) -> ApiResult<()> {
        let json = serde_json::to_string(data).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.execute(ApiRequest::post(endpoints::REGISTER).json(json)).await.map(|_| ())
    }

    pub async fn request_reset_password(&self, email: &str) -> ApiResult<()> {
        let request = ApiRequest::post(endpoints::REQUEST_RESET_PASSWORD).param("email", email);
        self.execute(request).await.map(|_| ())
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> ApiResult<()> {
        let request = ApiRequest::post(endpoints::RESET_PASSWORD)
            .param("token", token)
            .param("new_password", new_password);
        self.execute(request).await.map(|_| ())
    }

    pub async fn hist_fx_points(&self, pair: CurrencyPair, range: DateRange) -> ApiResult<Vec<FxRate>> {
        let request = ApiRequest::get(endpoints::HIST_FX_POINTS)
            .param("src_currency", pair.from.id)
            .param("tgt_currency", pair.to.id)
            .param("start_date", range.start_param())
            .param("end_date", range.end_param());
        self.fetch_json(request).await
    }

    pub async fn fx_rate(&self, pair: CurrencyPair, on: NaiveDate) -> ApiResult<f64> {
        let request = ApiRequest::get(endpoints::FX_RATE)
            .param("src_currency", pair.from.id)
            .param("tgt_currency", pair.to.id)
            .param("cur_dt", iso_date(on));
        self.fetch_json(request).await
    }

    pub async fn yfinance_exists(&self, symbol: &Symbol) -> ApiResult<bool> {
        self.fetch_json(ApiRequest::get(endpoints::YFINANCE_EXISTS).param("symbol", symbol)).await
    }

    pub async fn public_prop_info(&self, symbol: &Symbol) -> ApiResult<PublicPropInfo> {
        self.fetch_json(ApiRequest::get(endpoints::PUBLIC_PROP_INFO).param("symbol", symbol)).await
    }

    pub async fn hist_data(&self, symbol: &Symbol, range: DateRange) -> ApiResult<Vec<YFinancePricePoint>> {
        let request = ApiRequest::get(endpoints::HIST_DATA)
            .param("symbol", symbol)
            .param("start_date", range.start_param())
            .param("end_date", range.end_param());
        self.fetch_json(request).await
    }

    pub async fn blurry_search_yfinance(&self, keyword: &str, limit: u32) -> ApiResult<Vec<PublicPropInfo>> {
        let request = ApiRequest::get(endpoints::BLURRY_SEARCH_YFINANCE)
            .param("keyword", keyword)
            .param("limit", limit);
        self.fetch_json(request).await
    }
}

/// Helpers for building HTTP requests
pub struct HttpUtils;

impl HttpUtils {
    pub fn is_success_status(status: u16) -> bool {
        (200..300).contains(&status)
    }

    /// `base?k=v&...`, or `base` when there are no params.
    pub fn build_url_with_params(base_url: &str, params: &[(String, String)]) -> String {
        if params.is_empty() {
            return base_url.to_string();
        }
        format!("{}?{}", base_url, Self::encode_pairs(params))
    }

    pub fn encode_pairs(params: &[(String, String)]) -> String {
        params
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let request = ApiRequest::get(endpoints::YFINANCE_EXISTS).param("symbol", "BRK-B");
        assert_eq!(request.url("/backend/api/v1/"), "/backend/api/v1/market/yfinance/exists?symbol=BRK-B");
    }

    #[test]
    fn test_url_encoding() {
        let request = ApiRequest::post(endpoints::RESET_PASSWORD)
            .param("token", "a+b/c=")
            .param("new_password", "p@ss word");
        assert_eq!(
            request.url("/api"),
            "/api/management/reset_password?token=a%2Bb%2Fc%3D&new_password=p%40ss%20word"
        );
    }

    #[test]
    fn error_message_prefers_message_then_detail() {
        assert_eq!(error_message(r#"{"message":"Too many requests"}"#).as_deref(), Some("Too many requests"));
        assert_eq!(error_message(r#"{"detail":"Not authenticated"}"#).as_deref(), Some("Not authenticated"));
        assert_eq!(error_message(r#"{"detail":[{"loc":["query"]}]}"#), None);
        assert_eq!(error_message("<html>"), None);
    }
}
