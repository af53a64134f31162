// Client fetch tests against a mocked Contentful endpoint
// Author: kelexine (https://github.com/kelexine)

use contentful_client::config::ClientConfig;
use contentful_client::models::{item_ids, ContentfulCollectionItem, ContentfulItem};
use contentful_client::{ContentfulClient, ContentfulCollection, ContentfulError, ContentfulRequest};
use mockito::Matcher;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const TEST_TOKEN: &str = "9d5de88248563ebc0d2ad688d0473f56fcd31c600e419d6c8962f6aed0150599";

const QUERY: &str = r#"
query GetLessonCopys($limit:Int!) {
  lessonCopyCollection(limit:$limit) {
    items {
      sys {
        id
      }
    }
  }
}
"#;

const EXPECTED_ONE: &str = "5jR4ciJ8Y8m2KKqmMKOkg4";
const EXPECTED_TWO: &str = "3k6uoYm9i8MycCm42IsY62";

#[derive(Debug, Serialize, Deserialize)]
struct LessonCopies {
    #[serde(rename = "lessonCopyCollection")]
    lesson_copy_collection: ContentfulCollectionItem<ContentfulItem>,
}

fn lesson_request() -> ContentfulRequest {
    ContentfulRequest::new(QUERY).with_variable("limit", 2)
}

fn lesson_body() -> String {
    json!({
        "data": {
            "lessonCopyCollection": {
                "items": [
                    { "sys": { "id": EXPECTED_ONE } },
                    { "sys": { "id": EXPECTED_TWO } }
                ]
            }
        }
    })
    .to_string()
}

fn client(url: &str, token: &str) -> ContentfulClient {
    ContentfulClient::new(&ClientConfig::default())
        .unwrap()
        .with_url(url)
        .with_token(token)
}

#[tokio::test]
async fn test_simple_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("content-type", "application/json")
        .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
        .match_body(Matcher::Json(json!({
            "query": QUERY,
            "variables": { "limit": 2 }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(lesson_body())
        .expect(1)
        .create_async()
        .await;

    let target: ContentfulCollection<LessonCopies> = client(&server.url(), TEST_TOKEN)
        .fetch(&lesson_request())
        .await
        .unwrap();

    let items = &target.data.lesson_copy_collection.items;
    assert_eq!(items.len(), 2, "Got an invalid number of items in return");
    assert_eq!(item_ids(items), vec![EXPECTED_ONE, EXPECTED_TWO]);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_query_without_variables_omits_them() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(json!({ "query": "{ a }" })))
        .with_status(200)
        .with_body(r#"{"data":{"a":1}}"#)
        .create_async()
        .await;

    let target: Value = client(&server.url(), TEST_TOKEN)
        .fetch(&ContentfulRequest::new("{ a }"))
        .await
        .unwrap();

    assert_eq!(target["data"]["a"], json!(1));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_url_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let result = client("", TEST_TOKEN).fetch::<Value>(&lesson_request()).await;

    assert!(matches!(result, Err(ContentfulError::UrlNotSet)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_token_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let result = client(&server.url(), "").fetch::<Value>(&lesson_request()).await;

    assert!(matches!(result, Err(ContentfulError::TokenNotSet)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_builder_token_takes_priority() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Bearer preview-token")
        .with_status(200)
        .with_body(lesson_body())
        .create_async()
        .await;

    let config = ClientConfig {
        url: server.url(),
        token: "delivery-token".to_string(),
        ..ClientConfig::default()
    };
    let client = ContentfulClient::new(&config)
        .unwrap()
        .with_token("preview-token");

    let target: ContentfulCollection<LessonCopies> = client.fetch(&lesson_request()).await.unwrap();

    assert_eq!(target.data.lesson_copy_collection.items.len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_is_an_api_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(401)
        .with_body(r#"{"errors":[{"message":"Bearer badtoken is not valid"}]}"#)
        .create_async()
        .await;

    let result = client(&server.url(), TEST_TOKEN)
        .fetch::<ContentfulCollection<LessonCopies>>(&lesson_request())
        .await;

    match result {
        Err(ContentfulError::Api { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("[REDACTED_TOKEN]"));
            assert!(!body.contains("badtoken"));
        }
        other => panic!("expected an API error, got {:?}", other),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_undecodable_body_is_a_json_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let result = client(&server.url(), TEST_TOKEN)
        .fetch::<ContentfulCollection<LessonCopies>>(&lesson_request())
        .await;

    assert!(matches!(result, Err(ContentfulError::Json(_))));
}

#[tokio::test]
async fn test_transport_failure_is_an_http_error() {
    // Nothing listens on port 1
    let result = client("http://127.0.0.1:1", TEST_TOKEN)
        .fetch::<Value>(&lesson_request())
        .await;

    assert!(matches!(result, Err(ContentfulError::Http(_))));
}
