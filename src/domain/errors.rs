use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::NaiveDate;

/// Failure below HTTP: the request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Transport Error: {}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// Errors produced by the backend API client.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network failure, no status available.
    Transport(String),
    /// Non-2xx response. `message` is the backend-supplied `{message}` if any.
    Status { status: u16, message: Option<String> },
    /// 2xx response whose body did not match the expected shape.
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ApiError::Transport(msg) => write!(f, "Network Error: {}", msg),
            ApiError::Status { status, message: Some(msg) } => write!(f, "HTTP {}: {}", status, msg),
            ApiError::Status { status, message: None } => write!(f, "HTTP {}", status),
            ApiError::Decode(msg) => write!(f, "Decode Error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        ApiError::Transport(error.0)
    }
}

/// Violations of domain invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    InvalidPeriod(String),
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    UnknownPropertyType(u8),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidPeriod(token) => write!(f, "Invalid period: {}", token),
            DomainError::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: {} is after {}", start, end)
            }
            DomainError::UnknownPropertyType(value) => write!(f, "Unknown property type: {}", value),
        }
    }
}

impl std::error::Error for DomainError {}

pub type ApiResult<T> = Result<T, ApiError>;
