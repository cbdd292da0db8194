//! Serverless-style request/response envelope.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use crate::error::HandlerError;

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const MAX_AGE: &str = "Access-Control-Max-Age";
pub const CONTENT_TYPE: &str = "Content-Type";

/// Incoming invocation: HTTP method plus query string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default = "default_method")]
    pub http_method: String,

    /// `null` and absent are both treated as "no parameters"
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

fn default_method() -> String {
    "GET".to_string()
}

impl Default for Event {
    fn default() -> Self {
        Self {
            http_method: default_method(),
            query_string_parameters: None,
        }
    }
}

impl Event {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            http_method: method.into(),
            query_string_parameters: None,
        }
    }

    /// GET event with the given query parameters.
    pub fn get<K, V>(params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            http_method: default_method(),
            query_string_parameters: Some(
                params.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            ),
        }
    }

    /// Exact match; `get` is not `GET`.
    pub fn is_method(&self, method: &str) -> bool {
        self.http_method == method
    }

    /// Query parameter value; blank values count as missing.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()?
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// First present parameter among `keys` (aliases), or `default`.
    pub fn query_param_or<'a>(&'a self, keys: &[&str], default: &'a str) -> &'a str {
        keys.iter()
            .find_map(|key| self.query_param(key))
            .unwrap_or(default)
    }

    pub fn query_param_as<T: FromStr>(&self, key: &str) -> Option<T> {
        self.query_param(key).and_then(|v| v.parse().ok())
    }
}

/// Outgoing envelope: `{statusCode, headers, body, isBase64Encoded}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl HandlerResponse {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    /// JSON body with content type and wildcard origin.
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Result<Self, HandlerError> {
        let body = serde_json::to_string(body)?;
        Ok(Self::new(status_code)
            .with_header(CONTENT_TYPE, "application/json")
            .with_header(ALLOW_ORIGIN, "*")
            .with_body(body))
    }

    pub fn ok<T: Serialize>(body: &T) -> Result<Self, HandlerError> {
        Self::json(200, body)
    }

    /// Answer to a CORS preflight: empty 200 with the full header set.
    pub fn preflight() -> Self {
        Self::new(200)
            .with_header(ALLOW_ORIGIN, "*")
            .with_header(ALLOW_METHODS, "GET, POST, OPTIONS")
            .with_header(
                ALLOW_HEADERS,
                "Content-Type, X-User-Id, X-Auth-Token, X-Session-Id",
            )
            .with_header(MAX_AGE, "86400")
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
