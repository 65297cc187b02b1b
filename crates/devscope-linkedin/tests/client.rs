//! Integration tests for `LinkedInClient` using wiremock HTTP mocks.

use devscope_linkedin::{LinkedInClient, LinkedInError};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> LinkedInClient {
    LinkedInClient::new(base_url, Some("test-token".to_string()), 30)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn fetch_profile_parses_scraped_payload() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "name": "Jane Doe",
        "headline": "Staff Engineer",
        "location": "Berlin",
        "photoUrl": "https://img.example/jane.jpg",
        "summary": "Builds data platforms.",
        "experience": [
            { "title": "Staff Engineer", "company": "Acme", "duration": "2020-present",
              "description": "Platform work", "location": "Berlin" }
        ],
        "education": [
            { "school": "TU Berlin", "degree": "MSc", "field": "CS", "duration": "2014-2016" }
        ],
        "skills": ["Rust", "Kubernetes"],
        "certifications": [
            { "name": "CKA", "issuer": "CNCF", "date": "2021" }
        ]
    });

    Mock::given(method("GET"))
        .and(query_param("token", "test-token"))
        .and(query_param("url", "https://linkedin.com/in/jane-doe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let profile = client
        .fetch_profile("jane-doe")
        .await
        .expect("should parse profile");

    assert_eq!(profile.name, "Jane Doe");
    assert_eq!(profile.headline, "Staff Engineer");
    assert_eq!(profile.experience.len(), 1);
    assert_eq!(profile.experience[0].company, "Acme");
    assert_eq!(profile.skills, vec!["Rust", "Kubernetes"]);
    assert_eq!(profile.certifications.len(), 1);
}

#[tokio::test]
async fn partial_payload_normalizes_missing_fields_to_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "name": "Jane Doe" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let profile = client.fetch_profile("jane-doe").await.expect("should parse");

    assert_eq!(profile.name, "Jane Doe");
    assert_eq!(profile.headline, "");
    assert_eq!(profile.summary, "");
    assert!(profile.experience.is_empty());
    assert!(profile.education.is_empty());
    assert!(profile.skills.is_empty());
}

#[tokio::test]
async fn proxy_error_status_is_typed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_profile("jane-doe")
        .await
        .expect_err("should fail");
    assert!(matches!(
        err,
        LinkedInError::UnexpectedStatus { status: 403, .. }
    ));
}

#[tokio::test]
async fn non_json_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_profile("jane-doe")
        .await
        .expect_err("should fail");
    assert!(matches!(err, LinkedInError::Deserialize { .. }));
}
