use std::str::FromStr;

use crate::errors::{ConfigError, Result};

pub const FUNCTION_NAME_VAR: &str = "AWS_LAMBDA_FUNCTION_NAME";
pub const FUNCTION_VERSION_VAR: &str = "AWS_LAMBDA_FUNCTION_VERSION";
pub const FUNCTION_MEMORY_VAR: &str = "AWS_LAMBDA_FUNCTION_MEMORY_SIZE";
pub const BODY_ENCODING_VAR: &str = "HELLO_BODY_ENCODING";

/// How the response `body` is placed into the proxy response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyEncoding {
    /// Body record serialized to JSON text, as API Gateway proxy integrations expect.
    #[default]
    Text,
    /// Body record returned as a nested JSON object.
    Object,
}

impl FromStr for BodyEncoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(BodyEncoding::Text),
            "object" => Ok(BodyEncoding::Object),
            _ => Err(ConfigError::Invalid {
                variable: BODY_ENCODING_VAR.to_string(),
                value: s.to_string(),
                reason: "expected `string` or `object`".to_string(),
            }),
        }
    }
}

/// Settings read once at cold start.
///
/// The Lambda service populates the `AWS_LAMBDA_*` variables; they are only
/// used for logging and are optional so the runner also works locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionConfig {
    pub function_name: Option<String>,
    pub function_version: Option<String>,
    pub memory_mb: Option<u32>,
    pub body_encoding: BodyEncoding,
}

impl FunctionConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let memory_mb = match lookup(FUNCTION_MEMORY_VAR) {
            Some(raw) => Some(raw.trim().parse::<u32>().map_err(|e| ConfigError::Invalid {
                variable: FUNCTION_MEMORY_VAR.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            })?),
            None => None,
        };

        let body_encoding = match lookup(BODY_ENCODING_VAR) {
            Some(raw) => raw.parse::<BodyEncoding>()?,
            None => BodyEncoding::default(),
        };

        Ok(Self {
            function_name: lookup(FUNCTION_NAME_VAR),
            function_version: lookup(FUNCTION_VERSION_VAR),
            memory_mb,
            body_encoding,
        })
    }
}
