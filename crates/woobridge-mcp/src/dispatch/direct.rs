//! Direct JSON-RPC dispatch of registry methods.
//!
//! Clients that skip the MCP tool wrapping can call any registry
//! method as a plain JSON-RPC method; the raw upstream JSON comes
//! back as the result.

use serde_json::Value;

use woobridge_core::Dispatcher;
use woobridge_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};

use crate::handler::JsonRpcOutput;

/// Dispatches `method` straight to the store. Every dispatch failure,
/// unknown methods included, maps to the server-error code.
pub(crate) async fn handle_direct(
    id: RequestId,
    method: &str,
    params: &Option<Value>,
    dispatcher: &Dispatcher,
) -> JsonRpcOutput {
    let arguments = params.clone().unwrap_or(Value::Null);
    match dispatcher.dispatch(method, &arguments).await {
        Ok(result) => JsonRpcOutput::Success(JsonRpcResponse::success(id, result)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::SERVER_ERROR,
            e.to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use serde_json::json;
    use woobridge_core::{Dispatcher, StoreDefaults};

    #[tokio::test]
    async fn unknown_method_maps_to_server_error() {
        let dispatcher = Dispatcher::new(StoreDefaults::default(), Duration::from_secs(1));
        let output = handle_direct(
            RequestId::String("r1".into()),
            "get_widgets",
            &None,
            &dispatcher,
        )
        .await;
        match output {
            JsonRpcOutput::Error(response) => {
                assert_eq!(response.error.code, error_codes::SERVER_ERROR);
                assert_eq!(response.id, Some(RequestId::String("r1".into())));
                assert!(response.error.message.contains("get_widgets"));
            }
            JsonRpcOutput::Success(_) => panic!("must not succeed"),
        }
    }

    #[tokio::test]
    async fn missing_parameter_maps_to_server_error() {
        let defaults = StoreDefaults {
            site_url: Some("https://shop.example.com".into()),
            consumer_key: Some("ck".into()),
            consumer_secret: Some("cs".into()),
            ..StoreDefaults::default()
        };
        let dispatcher = Dispatcher::new(defaults, Duration::from_secs(1));
        let output = handle_direct(
            RequestId::Number(2),
            "get_product",
            &Some(json!({})),
            &dispatcher,
        )
        .await;
        match output {
            JsonRpcOutput::Error(response) => {
                assert_eq!(response.error.code, error_codes::SERVER_ERROR);
                assert!(response.error.message.contains("productId"));
            }
            JsonRpcOutput::Success(_) => panic!("must not succeed"),
        }
    }
}
