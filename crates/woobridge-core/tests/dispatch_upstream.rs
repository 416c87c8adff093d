//! End-to-end dispatch tests against a mock upstream.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use mockito::Matcher;
use serde_json::{json, Value};
use woobridge_core::{CredentialError, Dispatcher, DispatchError, MutationSink, StoreDefaults};

fn defaults_for(server: &mockito::ServerGuard) -> StoreDefaults {
    StoreDefaults {
        site_url: Some(server.url()),
        consumer_key: Some("ck_default".into()),
        consumer_secret: Some("cs_default".into()),
        username: Some("admin".into()),
        password: Some("pass".into()),
    }
}

fn dispatcher_for(server: &mockito::ServerGuard) -> Dispatcher {
    Dispatcher::new(defaults_for(server), Duration::from_secs(5))
}

fn store_auth() -> Vec<Matcher> {
    vec![
        Matcher::UrlEncoded("consumer_key".into(), "ck_default".into()),
        Matcher::UrlEncoded("consumer_secret".into(), "cs_default".into()),
    ]
}

#[tokio::test]
async fn list_call_carries_auth_and_pagination_defaults() {
    let mut server = mockito::Server::new_async().await;
    let mut matchers = store_auth();
    matchers.push(Matcher::UrlEncoded("per_page".into(), "10".into()));
    matchers.push(Matcher::UrlEncoded("page".into(), "1".into()));
    let mock = server
        .mock("GET", "/wp-json/wc/v3/products")
        .match_query(Matcher::AllOf(matchers))
        .with_status(200)
        .with_body(r#"[{"id": 1}]"#)
        .create_async()
        .await;

    let result = dispatcher_for(&server)
        .dispatch("get_products", &json!({}))
        .await
        .expect("listed");
    assert_eq!(result, json!([{"id": 1}]));
    mock.assert_async().await;
}

#[tokio::test]
async fn filters_reach_the_query_string() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/wp-json/wc/v3/orders")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("status".into(), "processing".into()),
            Matcher::UrlEncoded("per_page".into(), "5".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    dispatcher_for(&server)
        .dispatch(
            "get_orders",
            &json!({"filters": {"status": "processing", "per_page": 5}}),
        )
        .await
        .expect("listed");
    mock.assert_async().await;
}

#[tokio::test]
async fn path_params_route_to_the_entity() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/wp-json/wc/v3/products/42")
        .match_query(Matcher::AllOf(store_auth()))
        .with_status(200)
        .with_body(r#"{"id": 42}"#)
        .create_async()
        .await;

    let result = dispatcher_for(&server)
        .dispatch("get_product", &json!({"productId": 42}))
        .await
        .expect("fetched");
    assert_eq!(result["id"], 42);
    mock.assert_async().await;
}

#[tokio::test]
async fn create_sends_the_payload_as_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/wp-json/wc/v3/products")
        .match_query(Matcher::AllOf(store_auth()))
        .match_body(Matcher::Json(json!({"name": "Chair", "type": "simple"})))
        .with_status(201)
        .with_body(r#"{"id": 7, "name": "Chair"}"#)
        .create_async()
        .await;

    let result = dispatcher_for(&server)
        .dispatch(
            "create_product",
            &json!({"productData": {"name": "Chair", "type": "simple"}}),
        )
        .await
        .expect("created");
    assert_eq!(result["id"], 7);
    mock.assert_async().await;
}

#[tokio::test]
async fn update_puts_to_the_entity_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/wp-json/wc/v3/orders/7")
        .match_query(Matcher::AllOf(store_auth()))
        .match_body(Matcher::Json(json!({"status": "completed"})))
        .with_status(200)
        .with_body(r#"{"id": 7, "status": "completed"}"#)
        .create_async()
        .await;

    dispatcher_for(&server)
        .dispatch(
            "update_order",
            &json!({"orderId": 7, "orderData": {"status": "completed"}}),
        )
        .await
        .expect("updated");
    mock.assert_async().await;
}

#[tokio::test]
async fn store_delete_defaults_to_force() {
    let mut server = mockito::Server::new_async().await;
    let mut matchers = store_auth();
    matchers.push(Matcher::UrlEncoded("force".into(), "true".into()));
    let mock = server
        .mock("DELETE", "/wp-json/wc/v3/products/42")
        .match_query(Matcher::AllOf(matchers))
        .with_status(200)
        .with_body(r#"{"id": 42}"#)
        .create_async()
        .await;

    dispatcher_for(&server)
        .dispatch("delete_product", &json!({"productId": 42}))
        .await
        .expect("deleted");
    mock.assert_async().await;
}

#[tokio::test]
async fn caller_supplied_force_wins() {
    let mut server = mockito::Server::new_async().await;
    let mut matchers = store_auth();
    matchers.push(Matcher::UrlEncoded("force".into(), "false".into()));
    let mock = server
        .mock("DELETE", "/wp-json/wc/v3/coupons/3")
        .match_query(Matcher::AllOf(matchers))
        .with_status(200)
        .with_body(r#"{"id": 3}"#)
        .create_async()
        .await;

    dispatcher_for(&server)
        .dispatch("delete_coupon", &json!({"couponId": 3, "force": false}))
        .await
        .expect("deleted");
    mock.assert_async().await;
}

#[tokio::test]
async fn content_calls_use_basic_auth_not_query_auth() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/wp-json/wp/v2/posts/3")
        .match_header("authorization", "Basic YWRtaW46cGFzcw==")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({"title": "Hello"})))
        .with_status(200)
        .with_body(r#"{"id": 3, "title": {"raw": "Hello"}}"#)
        .create_async()
        .await;

    dispatcher_for(&server)
        .dispatch(
            "update_post",
            &json!({"postId": 3, "postData": {"title": "Hello"}}),
        )
        .await
        .expect("updated");
    mock.assert_async().await;
}

#[tokio::test]
async fn request_credentials_override_defaults() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/wp-json/wc/v3/products/1")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("consumer_key".into(), "ck_inline".into()),
            Matcher::UrlEncoded("consumer_secret".into(), "cs_inline".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"id": 1}"#)
        .create_async()
        .await;

    dispatcher_for(&server)
        .dispatch(
            "get_product",
            &json!({
                "productId": 1,
                "consumerKey": "ck_inline",
                "consumerSecret": "cs_inline"
            }),
        )
        .await
        .expect("fetched");
    mock.assert_async().await;
}

#[tokio::test]
async fn concurrent_requests_keep_their_own_sites() {
    let mut server_a = mockito::Server::new_async().await;
    let mut server_b = mockito::Server::new_async().await;
    let mock_a = server_a
        .mock("GET", "/wp-json/wc/v3/products/1")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"id": 1, "site": "a"}"#)
        .create_async()
        .await;
    let mock_b = server_b
        .mock("GET", "/wp-json/wc/v3/products/1")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"id": 1, "site": "b"}"#)
        .create_async()
        .await;

    // Defaults point at site A; the second call overrides per request.
    let dispatcher = dispatcher_for(&server_a);
    let params_a = json!({"productId": 1});
    let params_b = json!({"productId": 1, "siteUrl": server_b.url()});
    let (from_a, from_b) = tokio::join!(
        dispatcher.dispatch("get_product", &params_a),
        dispatcher.dispatch("get_product", &params_b),
    );
    assert_eq!(from_a.expect("site a")["site"], "a");
    assert_eq!(from_b.expect("site b")["site"], "b");
    mock_a.assert_async().await;
    mock_b.assert_async().await;
}

#[tokio::test]
async fn missing_store_credentials_fail_without_calling_upstream() {
    let server = mockito::Server::new_async().await;
    let defaults = StoreDefaults {
        site_url: Some(server.url()),
        ..StoreDefaults::default()
    };
    let dispatcher = Dispatcher::new(defaults, Duration::from_secs(5));
    let err = dispatcher
        .dispatch("get_products", &json!({}))
        .await
        .expect_err("no key pair");
    assert!(matches!(
        err,
        DispatchError::Credential(CredentialError::MissingStoreCredentials)
    ));
}

#[tokio::test]
async fn upstream_error_message_is_surfaced() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/wp-json/wc/v3/products/999")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"code":"woocommerce_rest_product_invalid_id","message":"Invalid ID."}"#)
        .create_async()
        .await;

    let err = dispatcher_for(&server)
        .dispatch("get_product", &json!({"productId": 999}))
        .await
        .expect_err("not found");
    match err {
        DispatchError::Upstream { message, status } => {
            assert_eq!(message, "Invalid ID.");
            assert_eq!(status, Some(404));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn product_meta_read_returns_the_sequence() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/wp-json/wc/v3/products/5")
        .match_query(Matcher::AllOf(store_auth()))
        .with_status(200)
        .with_body(
            r#"{"id": 5, "meta_data": [
                {"id": 11, "key": "color", "value": "red"},
                {"id": 12, "key": "size", "value": "xl"}
            ]}"#,
        )
        .create_async()
        .await;

    let result = dispatcher_for(&server)
        .dispatch("get_product_meta", &json!({"productId": 5}))
        .await
        .expect("read");
    assert_eq!(result.as_array().map(Vec::len), Some(2));
    mock.assert_async().await;
}

#[tokio::test]
async fn product_meta_read_filters_by_key() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/wp-json/wc/v3/products/5")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"id": 5, "meta_data": [
                {"id": 11, "key": "color", "value": "red"},
                {"id": 12, "key": "size", "value": "xl"},
                {"id": 13, "key": "color", "value": "blue"}
            ]}"#,
        )
        .create_async()
        .await;

    let result = dispatcher_for(&server)
        .dispatch("get_product_meta", &json!({"productId": 5, "metaKey": "color"}))
        .await
        .expect("read");
    let entries = result.as_array().expect("array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["value"], "red");
    assert_eq!(entries[1]["value"], "blue");
}

#[tokio::test]
async fn product_meta_create_appends_and_writes_back() {
    let mut server = mockito::Server::new_async().await;
    let read = server
        .mock("GET", "/wp-json/wc/v3/products/5")
        .match_query(Matcher::AllOf(store_auth()))
        .with_status(200)
        .with_body(r#"{"id": 5, "meta_data": [{"key": "x", "value": 1}]}"#)
        .create_async()
        .await;
    let write = server
        .mock("PUT", "/wp-json/wc/v3/products/5")
        .match_query(Matcher::AllOf(store_auth()))
        .match_body(Matcher::Json(json!({
            "meta_data": [
                {"key": "x", "value": 1},
                {"key": "k", "value": "v"}
            ]
        })))
        .with_status(200)
        .with_body(
            r#"{"id": 5, "meta_data": [
                {"id": 21, "key": "x", "value": 1},
                {"id": 22, "key": "k", "value": "v"}
            ]}"#,
        )
        .create_async()
        .await;

    let result = dispatcher_for(&server)
        .dispatch(
            "create_product_meta",
            &json!({"productId": 5, "metaKey": "k", "metaValue": "v"}),
        )
        .await
        .expect("upserted");

    // The upstream echo wins, ids included.
    let entries = result.as_array().expect("array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["id"], 22);
    read.assert_async().await;
    write.assert_async().await;
}

#[tokio::test]
async fn product_meta_update_replaces_in_place() {
    let mut server = mockito::Server::new_async().await;
    let _read = server
        .mock("GET", "/wp-json/wc/v3/products/5")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"id": 5, "meta_data": [
                {"id": 31, "key": "k", "value": "old"},
                {"id": 32, "key": "z", "value": 2}
            ]}"#,
        )
        .create_async()
        .await;
    let write = server
        .mock("PUT", "/wp-json/wc/v3/products/5")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "meta_data": [
                {"id": 31, "key": "k", "value": "new"},
                {"id": 32, "key": "z", "value": 2}
            ]
        })))
        .with_status(200)
        .with_body(r#"{"id": 5, "meta_data": []}"#)
        .create_async()
        .await;

    dispatcher_for(&server)
        .dispatch(
            "update_product_meta",
            &json!({"productId": 5, "metaKey": "k", "metaValue": "new"}),
        )
        .await
        .expect("updated");
    write.assert_async().await;
}

#[tokio::test]
async fn product_meta_delete_drops_every_match() {
    let mut server = mockito::Server::new_async().await;
    let _read = server
        .mock("GET", "/wp-json/wc/v3/orders/9")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"id": 9, "meta_data": [
                {"key": "k", "value": 1},
                {"key": "x", "value": 2},
                {"key": "k", "value": 3}
            ]}"#,
        )
        .create_async()
        .await;
    let write = server
        .mock("PUT", "/wp-json/wc/v3/orders/9")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "meta_data": [{"key": "x", "value": 2}]
        })))
        .with_status(200)
        .with_body(r#"{"id": 9, "meta_data": [{"id": 41, "key": "x", "value": 2}]}"#)
        .create_async()
        .await;

    let result = dispatcher_for(&server)
        .dispatch("delete_order_meta", &json!({"orderId": 9, "metaKey": "k"}))
        .await
        .expect("deleted");
    assert_eq!(result.as_array().map(Vec::len), Some(1));
    write.assert_async().await;
}

#[tokio::test]
async fn post_meta_read_requests_edit_context() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/wp-json/wp/v2/posts/3")
        .match_header("authorization", "Basic YWRtaW46cGFzcw==")
        .match_query(Matcher::UrlEncoded("context".into(), "edit".into()))
        .with_status(200)
        .with_body(r#"{"id": 3, "meta": {"views": 12, "mood": "calm"}}"#)
        .create_async()
        .await;

    let result = dispatcher_for(&server)
        .dispatch("get_post_meta", &json!({"postId": 3}))
        .await
        .expect("read");
    assert_eq!(result, json!({"views": 12, "mood": "calm"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn post_meta_read_with_key_returns_one_value() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/wp-json/wp/v2/posts/3")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"id": 3, "meta": {"views": 12}}"#)
        .create_async()
        .await;

    let result = dispatcher_for(&server)
        .dispatch("get_post_meta", &json!({"postId": 3, "metaKey": "views"}))
        .await
        .expect("read");
    assert_eq!(result, json!(12));
}

#[tokio::test]
async fn post_meta_upsert_merges_into_the_map() {
    let mut server = mockito::Server::new_async().await;
    let _read = server
        .mock("GET", "/wp-json/wp/v2/posts/3")
        .match_query(Matcher::UrlEncoded("context".into(), "edit".into()))
        .with_status(200)
        .with_body(r#"{"id": 3, "meta": {"views": 12}}"#)
        .create_async()
        .await;
    let write = server
        .mock("PUT", "/wp-json/wp/v2/posts/3")
        .match_header("authorization", "Basic YWRtaW46cGFzcw==")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "meta": {"views": 12, "mood": "calm"}
        })))
        .with_status(200)
        .with_body(r#"{"id": 3, "meta": {"views": 12, "mood": "calm"}}"#)
        .create_async()
        .await;

    let result = dispatcher_for(&server)
        .dispatch(
            "update_post_meta",
            &json!({"postId": 3, "metaKey": "mood", "metaValue": "calm"}),
        )
        .await
        .expect("upserted");
    assert_eq!(result, json!({"views": 12, "mood": "calm"}));
    write.assert_async().await;
}

#[tokio::test]
async fn post_meta_delete_writes_null_for_the_key() {
    let mut server = mockito::Server::new_async().await;
    let _read = server
        .mock("GET", "/wp-json/wp/v2/posts/3")
        .match_query(Matcher::UrlEncoded("context".into(), "edit".into()))
        .with_status(200)
        .with_body(r#"{"id": 3, "meta": {"views": 12, "mood": "calm"}}"#)
        .create_async()
        .await;
    let write = server
        .mock("PUT", "/wp-json/wp/v2/posts/3")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!({
            "meta": {"views": 12, "mood": null}
        })))
        .with_status(200)
        .with_body(r#"{"id": 3, "meta": {"views": 12}}"#)
        .create_async()
        .await;

    let result = dispatcher_for(&server)
        .dispatch("delete_post_meta", &json!({"postId": 3, "metaKey": "mood"}))
        .await
        .expect("deleted");
    assert_eq!(result, json!({"views": 12}));
    write.assert_async().await;
}

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<(String, String)>>,
}

impl MutationSink for RecordingSink {
    fn publish(&self, resource: &str, method: &str, _payload: &Value) {
        self.events
            .lock()
            .expect("lock")
            .push((resource.to_string(), method.to_string()));
    }
}

#[tokio::test]
async fn mutations_reach_the_sink_and_reads_do_not() {
    let mut server = mockito::Server::new_async().await;
    let _create = server
        .mock("POST", "/wp-json/wc/v3/products")
        .match_query(Matcher::Any)
        .with_status(201)
        .with_body(r#"{"id": 7}"#)
        .create_async()
        .await;
    let _list = server
        .mock("GET", "/wp-json/wc/v3/products")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let sink = Arc::new(RecordingSink::default());
    let dispatcher = Dispatcher::new(defaults_for(&server), Duration::from_secs(5))
        .with_sink(sink.clone());

    dispatcher
        .dispatch("create_product", &json!({"productData": {"name": "Chair"}}))
        .await
        .expect("created");
    dispatcher
        .dispatch("get_products", &json!({}))
        .await
        .expect("listed");

    let events = sink.events.lock().expect("lock");
    assert_eq!(
        events.as_slice(),
        &[("products".to_string(), "create_product".to_string())]
    );
}

#[tokio::test]
async fn failed_mutation_does_not_reach_the_sink() {
    let mut server = mockito::Server::new_async().await;
    let _create = server
        .mock("POST", "/wp-json/wc/v3/products")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"message": "missing name"}"#)
        .create_async()
        .await;

    let sink = Arc::new(RecordingSink::default());
    let dispatcher = Dispatcher::new(defaults_for(&server), Duration::from_secs(5))
        .with_sink(sink.clone());

    dispatcher
        .dispatch("create_product", &json!({"productData": {}}))
        .await
        .expect_err("rejected upstream");
    assert!(sink.events.lock().expect("lock").is_empty());
}
