use douban::{DoubanClient, DoubanError};
use mockito::Matcher;
use serde_json::json;

fn client_for(server: &mockito::Server) -> DoubanClient {
    DoubanClient::with_base_urls(
        reqwest::Client::new(),
        server.url(),
        format!("{}/j/search", server.url()),
    )
}

#[tokio::test]
async fn search_ids_sends_category_and_query() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/j/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("cat".into(), "1001".into()),
            Matcher::UrlEncoded("q".into(), "三体".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "total": 2,
                "items": [
                    "<a onclick=\"moreurl(this, {sid: 123, qcat: '1001'})\">三体</a>",
                    "<a onclick=\"moreurl(this, {sid: 456, qcat: '1001'})\">三体II</a>"
                ]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let ids = client_for(&server).search_ids("三体").await.unwrap();
    assert_eq!(ids, vec!["123", "456"]);
    mock.assert_async().await;
}

#[tokio::test]
async fn search_ids_zero_total_is_empty_not_error() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/j/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "total": 0, "items": [] }).to_string())
        .create_async()
        .await;

    let ids = client_for(&server).search_ids("没有这本书").await.unwrap();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn search_ids_surfaces_http_error() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/j/search")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let err = client_for(&server).search_ids("三体").await.unwrap_err();
    assert!(matches!(err, DoubanError::Api { status_code: 502, .. }));
}

#[tokio::test]
async fn get_book_parses_detail_page() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/subject/123/")
        .with_status(200)
        .with_body(
            r#"<html><body>
            <span property="v:itemreviewed">三体</span>
            <div class="rating_self clearfix"><strong>8.7</strong></div>
            </body></html>"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let book = client.get_book("123", "generic.jpg").await.unwrap();
    assert_eq!(book.id, "123");
    assert_eq!(book.url, format!("{}/subject/123/", server.url()));
    assert_eq!(book.title, "三体");
    assert_eq!(book.rating, 5);
    assert_eq!(book.cover, "generic.jpg");
}

#[tokio::test]
async fn get_book_surfaces_http_error() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/subject/404/")
        .with_status(404)
        .with_body("not found")
        .create_async()
        .await;

    let err = client_for(&server)
        .get_book("404", "generic.jpg")
        .await
        .unwrap_err();
    assert!(matches!(err, DoubanError::Api { status_code: 404, .. }));
}
