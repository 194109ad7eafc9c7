use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::config::BodyEncoding;
use crate::errors::Result;

pub const STATUS_OK: u16 = 200;

pub const ALLOW_ORIGIN_HEADER: &str = "Access-Control-Allow-Origin";
pub const ALLOW_HEADERS_HEADER: &str = "Access-Control-Allow-Headers";
pub const ALLOW_METHODS_HEADER: &str = "Access-Control-Allow-Methods";

pub const GREETING_NAME: &str = "haimtran";
pub const GREETING_MESSAGE: &str = "hello lambda api";

/// CORS headers attached to every response.
pub fn cors_headers() -> HashMap<String, String> {
    HashMap::from([
        (ALLOW_ORIGIN_HEADER.to_string(), "*".to_string()),
        (ALLOW_HEADERS_HEADER.to_string(), "Content-Type".to_string()),
        (ALLOW_METHODS_HEADER.to_string(), "OPTIONS,GET".to_string()),
    ])
}

/// The record carried in the response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResponseBody {
    pub id: String,
    pub name: String,
    pub message: String,
}

impl ResponseBody {
    /// A greeting with a fresh v4 UUID as its id.
    pub fn greeting() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: GREETING_NAME.to_string(),
            message: GREETING_MESSAGE.to_string(),
        }
    }
}

/// Response body as it goes over the wire: JSON text or a nested object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Body {
    Text(String),
    Object(ResponseBody),
}

impl Body {
    pub fn encode(record: ResponseBody, encoding: BodyEncoding) -> Result<Self> {
        Ok(match encoding {
            BodyEncoding::Text => Body::Text(serde_json::to_string(&record)?),
            BodyEncoding::Object => Body::Object(record),
        })
    }

    /// Returns the body record regardless of how it was encoded.
    pub fn record(&self) -> Result<ResponseBody> {
        match self {
            Body::Text(text) => Ok(serde_json::from_str(text)?),
            Body::Object(record) => Ok(record.clone()),
        }
    }
}

/// Lambda proxy integration response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: Body,
}

impl ProxyResponse {
    pub fn ok(body: Body) -> Self {
        Self {
            status_code: STATUS_OK,
            headers: cors_headers(),
            body,
        }
    }
}
