//! Integration tests for the Reddit listing client against a mock server.

use scour::feed::{FeedError, FeedReader, RedditFeed, SortFilter};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_BODY: &str = r#"{
    "kind": "Listing",
    "data": {
        "children": [
            {
                "kind": "t3",
                "data": {
                    "url": "https://i.redd.it/abc123.png",
                    "title": "first",
                    "permalink": "/r/pics/comments/1/first/",
                    "over_18": false
                }
            },
            {
                "kind": "t3",
                "data": {
                    "url": "https://imgur.com/qqrr",
                    "title": "second",
                    "permalink": "/r/pics/comments/2/second/",
                    "over_18": true
                }
            }
        ]
    }
}"#;

#[tokio::test]
async fn test_fetch_returns_posts_in_listing_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/pics/top.json"))
        .and(query_param("limit", "5"))
        .and(query_param("t", "day"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING_BODY))
        .mount(&server)
        .await;

    let feed = RedditFeed::with_base_url(server.uri());
    let posts = feed.fetch("pics", SortFilter::Top, 5).await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "first");
    assert!(!posts[0].is_nsfw);
    assert_eq!(posts[1].url, "https://imgur.com/qqrr");
    assert!(posts[1].is_nsfw);
}

#[tokio::test]
async fn test_fetch_non_top_sort_omits_time_window() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/pics/new.json"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTING_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let feed = RedditFeed::with_base_url(server.uri());
    let posts = feed.fetch("pics", SortFilter::New, 10).await.unwrap();
    assert_eq!(posts.len(), 2);
}

#[tokio::test]
async fn test_fetch_unknown_feed_maps_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/no_such_sub/top.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let feed = RedditFeed::with_base_url(server.uri());
    let result = feed.fetch("no_such_sub", SortFilter::Top, 10).await;

    match result {
        Err(FeedError::UnknownFeed { feed }) => assert_eq!(feed, "no_such_sub"),
        other => panic!("expected UnknownFeed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_server_error_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/pics/top.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let feed = RedditFeed::with_base_url(server.uri());
    let result = feed.fetch("pics", SortFilter::Top, 10).await;

    match result {
        Err(FeedError::HttpStatus { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_malformed_listing_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/r/pics/top.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let feed = RedditFeed::with_base_url(server.uri());
    let result = feed.fetch("pics", SortFilter::Top, 10).await;

    assert!(matches!(result, Err(FeedError::Malformed { .. })));
}
