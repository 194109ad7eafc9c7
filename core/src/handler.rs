use lambda_runtime::Context;
use serde_json::Value;

use crate::config::BodyEncoding;
use crate::errors::Result;
use crate::response::{Body, ProxyResponse, ResponseBody};

/// Answers any invocation with the fixed greeting response.
///
/// Neither the event nor the context is inspected, so every well-formed
/// payload, including `null`, gets the same response apart from `body.id`.
pub fn handle(event: &Value, context: &Context) -> Result<ProxyResponse> {
    handle_with(BodyEncoding::default(), event, context)
}

/// Same as [`handle`] with an explicit body encoding.
pub fn handle_with(
    encoding: BodyEncoding,
    _event: &Value,
    _context: &Context,
) -> Result<ProxyResponse> {
    let body = Body::encode(ResponseBody::greeting(), encoding)?;
    Ok(ProxyResponse::ok(body))
}
