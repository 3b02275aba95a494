//! Integration tests for the TLS subscriptions endpoints.
//!
//! Uses wiremock to stand in for the Fastly API.

use fastly_acme_client::{AcmeError, FastlyClient};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> FastlyClient {
    FastlyClient::builder("test-token")
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn authorization(id: &str, record_name: &str, value: &str) -> Value {
    json!({
        "type": "tls_authorization",
        "id": id,
        "attributes": {
            "challenges": [{
                "type": "managed-dns",
                "record_type": "CNAME",
                "record_name": record_name,
                "values": [value]
            }]
        }
    })
}

fn page(current_page: u32, total_pages: u32, included: Vec<Value>) -> Value {
    let record_count = included.len();
    json!({
        "data": [],
        "included": included,
        "meta": {
            "per_page": 20,
            "current_page": current_page,
            "record_count": record_count,
            "total_pages": total_pages
        }
    })
}

async fn mount_page(server: &MockServer, number: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path("/tls/subscriptions"))
        .and(query_param("include", "tls_authorizations"))
        .and(query_param("page[number]", number.to_string()))
        .and(header("Fastly-Key", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_single_page() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        page(
            1,
            1,
            vec![
                json!({"type": "tls_domain", "id": "www.example.com"}),
                authorization("a1", "_acme-challenge.www.example.com", "v1.fastly-validations.com"),
            ],
        ),
    )
    .await;

    let authorizations = client(&server)
        .tls_subscriptions()
        .authorizations()
        .await
        .unwrap();

    assert_eq!(authorizations.len(), 1);
    assert_eq!(authorizations[0].id, "a1");
}

#[tokio::test]
async fn test_accumulates_pages_in_order() {
    let server = MockServer::start().await;
    for n in 1..=3 {
        mount_page(
            &server,
            n,
            page(
                n,
                3,
                vec![authorization(
                    &format!("a{n}"),
                    &format!("_acme-challenge.host{n}.example.com"),
                    &format!("v{n}.fastly-validations.com"),
                )],
            ),
        )
        .await;
    }

    let authorizations = client(&server)
        .tls_subscriptions()
        .authorizations()
        .await
        .unwrap();

    let ids: Vec<_> = authorizations.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a1", "a2", "a3"]);

    let requested: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter_map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "page[number]")
                .map(|(_, v)| v.into_owned())
        })
        .collect();
    assert_eq!(requested, ["1", "2", "3"]);
}

#[tokio::test]
async fn test_empty_account_stops_after_first_page() {
    let server = MockServer::start().await;
    mount_page(&server, 1, page(1, 0, vec![])).await;

    let authorizations = client(&server)
        .tls_subscriptions()
        .authorizations()
        .await
        .unwrap();

    assert!(authorizations.is_empty());
}

#[tokio::test]
async fn test_unauthorized_fails_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tls/subscriptions"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"msg": "Provided credentials are missing or invalid"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .tls_subscriptions()
        .authorizations()
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    assert_eq!(err.status_code(), Some(401));
    assert!(err.to_string().contains("credentials are missing"));
}

#[tokio::test]
async fn test_failure_on_later_page_discards_everything() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        page(
            1,
            2,
            vec![authorization("a1", "_acme-challenge.example.com", "v1")],
        ),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/tls/subscriptions"))
        .and(query_param("page[number]", "2"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .tls_subscriptions()
        .authorizations()
        .await
        .unwrap_err();

    match err {
        AcmeError::Api { code, message } => {
            assert_eq!(code, 503);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_mismatched_page_number_is_a_data_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tls/subscriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0, 2, vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .tls_subscriptions()
        .authorizations()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AcmeError::UnexpectedPage {
            requested: 1,
            reported: 0
        }
    ));
}

#[tokio::test]
async fn test_repeated_page_stops_the_fetch() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        page(
            1,
            3,
            vec![authorization("a1", "_acme-challenge.example.com", "v1")],
        ),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/tls/subscriptions"))
        .and(query_param("page[number]", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            1,
            3,
            vec![authorization("a1", "_acme-challenge.example.com", "v1")],
        )))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .tls_subscriptions()
        .authorizations()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AcmeError::UnexpectedPage {
            requested: 2,
            reported: 1
        }
    ));
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_malformed_response_is_a_data_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tls/subscriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"included": []})))
        .mount(&server)
        .await;

    let err = client(&server)
        .tls_subscriptions()
        .authorizations()
        .await
        .unwrap_err();

    assert!(matches!(err, AcmeError::Json(_)));
}

#[tokio::test]
async fn test_single_page_request_without_include() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tls/subscriptions"))
        .and(query_param("page[number]", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(4, 4, vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .tls_subscriptions()
        .list()
        .without_include()
        .page(4)
        .send()
        .await
        .unwrap();

    assert_eq!(page.meta.current_page, 4);
    assert!(page.is_last());

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].url.query_pairs().any(|(k, _)| k == "include"));
}
