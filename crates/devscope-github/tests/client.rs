//! Integration tests for `GitHubClient` using wiremock HTTP mocks.

use devscope_github::{GitHubClient, GitHubError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> GitHubClient {
    GitHubClient::with_base_url(None, 30, base_url).expect("client construction should not fail")
}

fn user_body() -> serde_json::Value {
    serde_json::json!({
        "login": "octocat",
        "name": "The Octocat",
        "avatar_url": "https://avatars.example/octocat.png",
        "bio": null,
        "location": "San Francisco",
        "company": null,
        "blog": "",
        "public_repos": 8,
        "followers": 4000,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z"
    })
}

#[tokio::test]
async fn fetch_stats_builds_normalized_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
        .mount(&server)
        .await;

    let repos = serde_json::json!([
        { "name": "hello-world", "description": "First repo", "stargazers_count": 10,
          "forks_count": 2, "language": "Ruby", "html_url": "https://github.com/octocat/hello-world" },
        { "name": "spoon-knife", "description": null, "stargazers_count": 5,
          "forks_count": 1, "language": "Ruby", "html_url": "https://github.com/octocat/spoon-knife" },
        { "name": "linguist-fork", "description": "forked", "stargazers_count": 9000,
          "forks_count": 12, "language": "C", "html_url": "https://github.com/octocat/linguist-fork" },
        { "name": "scripts", "description": null, "stargazers_count": 0,
          "forks_count": 0, "language": null, "html_url": null }
    ]);
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&repos))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let profile = client.fetch_stats("octocat").await.expect("should succeed");

    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.display_name(), "The Octocat");
    assert_eq!(profile.bio, "", "null bio normalizes to empty");
    // The "-fork" repo is filtered out before aggregation.
    assert_eq!(profile.repos.len(), 3);
    assert_eq!(profile.total_stars, 15);
    assert_eq!(profile.total_forks, 3);
    assert_eq!(profile.repos[0].name, "hello-world");
    // Ruby counted twice; null language excluded.
    assert_eq!(profile.languages.len(), 1);
    assert_eq!(profile.languages[0].name, "Ruby");
    assert_eq!(profile.languages[0].count, 2);
    assert!(profile.contribution_years >= 14);
}

#[tokio::test]
async fn unknown_login_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Not Found"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_stats("no-such-user")
        .await
        .expect_err("should fail");
    assert!(
        matches!(err, GitHubError::NotFound { ref login } if login == "no-such-user"),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
async fn server_error_maps_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_stats("octocat").await.expect_err("should fail");
    assert!(matches!(
        err,
        GitHubError::UnexpectedStatus { status: 502, .. }
    ));
}

#[tokio::test]
async fn malformed_body_maps_to_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_stats("octocat").await.expect_err("should fail");
    assert!(matches!(err, GitHubError::Deserialize { .. }));
}

#[tokio::test]
async fn token_is_sent_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .and(wiremock::matchers::header("Authorization", "token test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = GitHubClient::with_base_url(Some("test-token".to_string()), 30, &server.uri())
        .expect("client construction should not fail");
    client.fetch_stats("octocat").await.expect("should succeed");
}
