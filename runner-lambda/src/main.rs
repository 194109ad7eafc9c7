use hello_core::config::{BodyEncoding, FunctionConfig};
use hello_core::telemetry::init_tracing;
use hello_core::{ProxyResponse, handle_with};
use lambda_runtime::{Context, Error, LambdaEvent, service_fn};
use serde_json::Value;
use std::env;
use tracing::{debug, info};

/// Runtime-facing handler: splits the invocation into payload and context
/// and hands both to the core handler.
pub async fn lambda_handler(
    encoding: BodyEncoding,
    event: LambdaEvent<Value>,
) -> Result<ProxyResponse, Error> {
    let (payload, context) = event.into_parts();
    debug!(request_id = %context.request_id, "handling invocation");

    Ok(handle_with(encoding, &payload, &context)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    let config = FunctionConfig::from_env()?;
    info!(
        function_name = config.function_name.as_deref().unwrap_or("local"),
        function_version = config.function_version.as_deref().unwrap_or("-"),
        memory_mb = config.memory_mb,
        body_encoding = ?config.body_encoding,
        "starting hello lambda"
    );

    let encoding = config.body_encoding;
    if env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        info!("Running in AWS Lambda environment");
        lambda_runtime::run(service_fn(move |event| lambda_handler(encoding, event))).await
    } else {
        info!("Running in local development mode");

        let event = LambdaEvent::new(serde_json::json!({}), Context::default());
        let response = lambda_handler(encoding, event).await?;
        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn invoke(encoding: BodyEncoding, payload: Value) -> Value {
        let event = LambdaEvent::new(payload, Context::default());
        let response = lambda_handler(encoding, event).await.unwrap();
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn test_default_log_filter_enables_runner_target() {
        use hello_core::telemetry::DEFAULT_LOG_FILTER;

        let crate_target = module_path!().split("::").next().unwrap();
        assert_eq!(crate_target, "bootstrap");
        assert!(
            DEFAULT_LOG_FILTER
                .split(',')
                .any(|directive| directive == format!("{crate_target}=info")),
            "{DEFAULT_LOG_FILTER} does not enable {crate_target} at info"
        );
    }

    #[tokio::test]
    async fn test_empty_event() {
        let value = invoke(BodyEncoding::Text, json!({})).await;

        assert_eq!(value["statusCode"], json!(200));
        assert_eq!(value["headers"]["Access-Control-Allow-Origin"], json!("*"));
        assert_eq!(value["headers"]["Access-Control-Allow-Headers"], json!("Content-Type"));
        assert_eq!(value["headers"]["Access-Control-Allow-Methods"], json!("OPTIONS,GET"));

        let body: Value = serde_json::from_str(value["body"].as_str().unwrap()).unwrap();
        assert_eq!(body["name"], json!("haimtran"));
        assert_eq!(body["message"], json!("hello lambda api"));
    }

    #[tokio::test]
    async fn test_null_event() {
        let value = invoke(BodyEncoding::Text, Value::Null).await;
        assert_eq!(value["statusCode"], json!(200));
    }

    #[tokio::test]
    async fn test_proxy_event_with_object_body() {
        let event = json!({
            "httpMethod": "OPTIONS",
            "path": "/lambda",
            "requestContext": { "requestId": "c6af9ac6-7b61-11e6-9a41-93e8deadbeef" }
        });
        let value = invoke(BodyEncoding::Object, event).await;

        assert_eq!(value["statusCode"], json!(200));
        assert_eq!(value["body"]["name"], json!("haimtran"));
        assert_eq!(value["body"]["message"], json!("hello lambda api"));
    }

    #[tokio::test]
    async fn test_concurrent_invocations_get_distinct_ids() {
        let (a, b) = tokio::join!(
            invoke(BodyEncoding::Object, json!({})),
            invoke(BodyEncoding::Object, json!({}))
        );
        assert_ne!(a["body"]["id"], b["body"]["id"]);
    }
}
