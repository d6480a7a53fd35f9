//! Field-level validation for the account forms.
//!
//! Rules run in declaration order and the first failure wins, so a field shows
//! at most one message at a time.

use std::collections::BTreeMap;

use crate::domain::session::{LoginData, RegisterData, ResetPasswordData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// `^[a-zA-Z0-9]+$`
    Alphanumeric,
    /// `^[^\s@]+@[^\s@]+\.[^\s@]+$`
    Email,
}

impl Pattern {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Pattern::Alphanumeric => !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric()),
            Pattern::Email => is_email(value),
        }
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    // some dot with at least one character on each side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required(&'static str),
    MinLength(usize, &'static str),
    MaxLength(usize, &'static str),
    Matches(Pattern, &'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), &'static str> {
        let len = value.chars().count();
        let ok = match self {
            Rule::Required(_) => !value.is_empty(),
            Rule::MinLength(min, _) => len >= *min,
            Rule::MaxLength(max, _) => len <= *max,
            Rule::Matches(pattern, _) => pattern.matches(value),
        };
        if ok { Ok(()) } else { Err(self.message()) }
    }

    fn message(&self) -> &'static str {
        match self {
            Rule::Required(msg) | Rule::MinLength(_, msg) | Rule::MaxLength(_, msg) | Rule::Matches(_, msg) => *msg,
        }
    }
}

pub const USERNAME_RULES: &[Rule] = &[
    Rule::Required("Username is required"),
    Rule::MinLength(3, "Username must be at least 3 characters long"),
    Rule::MaxLength(20, "Username must be at most 20 characters long"),
    Rule::Matches(Pattern::Alphanumeric, "Username must be only alphanumeric"),
];

pub const PASSWORD_RULES: &[Rule] = &[
    Rule::Required("Password is required"),
    Rule::MinLength(8, "Password must be at least 8 characters long"),
    Rule::MaxLength(20, "Password must be at most 20 characters long"),
];

pub const EMAIL_RULES: &[Rule] = &[
    Rule::Required("Email is required"),
    Rule::Matches(Pattern::Email, "Invalid email address"),
];

pub const TOKEN_RULES: &[Rule] = &[Rule::Required("Token is required")];

/// First failing rule's message, if any.
pub fn validate_field(value: &str, rules: &[Rule]) -> Option<&'static str> {
    rules.iter().find_map(|rule| rule.check(value).err())
}

/// Field name → message. Empty means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    fn check(mut self, field: &'static str, value: &str, rules: &[Rule]) -> Self {
        if let Some(message) = validate_field(value, rules) {
            self.0.insert(field, message);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

pub fn validate_login(data: &LoginData) -> FieldErrors {
    FieldErrors::default()
        .check("username", &data.username, USERNAME_RULES)
        .check("password", &data.password, PASSWORD_RULES)
}

pub fn validate_register(data: &RegisterData) -> FieldErrors {
    FieldErrors::default()
        .check("username", &data.username, USERNAME_RULES)
        .check("email", &data.email, EMAIL_RULES)
        .check("password", &data.password, PASSWORD_RULES)
}

pub fn validate_reset_request(email: &str) -> FieldErrors {
    FieldErrors::default().check("email", email, EMAIL_RULES)
}

pub fn validate_reset_password(data: &ResetPasswordData) -> FieldErrors {
    FieldErrors::default()
        .check("token", &data.token, TOKEN_RULES)
        .check("new_password", &data.new_password, PASSWORD_RULES)
}
