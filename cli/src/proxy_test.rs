use super::*;
use axum::http::Uri;
use axum::routing::get;

#[test]
fn rewrite_path_strips_one_api_segment() {
    assert_eq!(rewrite_path("/api/tickets").as_deref(), Some("/tickets"));
    assert_eq!(rewrite_path("/api/api/tickets").as_deref(), Some("/api/tickets"));
    assert_eq!(rewrite_path("/api/tickets/3").as_deref(), Some("/tickets/3"));
}

#[test]
fn rewrite_path_keeps_query() {
    assert_eq!(rewrite_path("/api/tickets?skip=0&limit=5").as_deref(), Some("/tickets?skip=0&limit=5"));
    assert_eq!(rewrite_path("/api?x=1").as_deref(), Some("/?x=1"));
}

#[test]
fn rewrite_path_bare_prefix_maps_to_root() {
    assert_eq!(rewrite_path("/api").as_deref(), Some("/"));
    assert_eq!(rewrite_path("/api/").as_deref(), Some("/"));
}

#[test]
fn rewrite_path_ignores_other_paths() {
    assert_eq!(rewrite_path("/apis/tickets"), None);
    assert_eq!(rewrite_path("/tickets"), None);
    assert_eq!(rewrite_path("/"), None);
}

#[test]
fn backend_url_joins_without_double_slash() {
    assert_eq!(backend_url("http://127.0.0.1:8000/", "/tickets"), "http://127.0.0.1:8000/tickets");
    assert_eq!(backend_url("http://127.0.0.1:8000", "/"), "http://127.0.0.1:8000/");
}

#[test]
fn hop_by_hop_headers_are_dropped() {
    let mut headers = HeaderMap::new();
    headers.insert("host", "localhost:5173".parse().unwrap());
    headers.insert("connection", "keep-alive".parse().unwrap());
    headers.insert("content-type", "application/json".parse().unwrap());
    headers.insert("x-request-id", "abc".parse().unwrap());

    let forwarded = forwardable_headers(&headers);
    assert!(forwarded.get("host").is_none());
    assert!(forwarded.get("connection").is_none());
    assert_eq!(forwarded.get("content-type").unwrap(), "application/json");
    assert_eq!(forwarded.get("x-request-id").unwrap(), "abc");
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn echo_uri(method: axum::http::Method, uri: Uri, body: String) -> String {
    format!("{method} {uri} {body}")
}

#[tokio::test]
async fn forwards_api_requests_with_prefix_stripped() {
    let backend = spawn(Router::new().fallback(echo_uri)).await;
    let proxy = spawn(router(format!("http://{backend}"), None, reqwest::Client::new())).await;

    let client = reqwest::Client::new();
    let got = client
        .get(format!("http://{proxy}/api/tickets?limit=5"))
        .send()
        .await
        .unwrap();
    assert_eq!(got.status(), reqwest::StatusCode::OK);
    assert_eq!(got.text().await.unwrap(), "GET /tickets?limit=5 ");

    let posted = client
        .post(format!("http://{proxy}/api/tickets"))
        .body(r#"{"title":"a","description":"b"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(posted.text().await.unwrap(), r#"POST /tickets {"title":"a","description":"b"}"#);
}

#[tokio::test]
async fn forwards_api_root_with_trailing_slash() {
    let backend = spawn(Router::new().fallback(echo_uri)).await;
    let proxy = spawn(router(format!("http://{backend}"), None, reqwest::Client::new())).await;

    for (path, expected) in [("/api", "GET / "), ("/api/", "GET / "), ("/api/?x=1", "GET /?x=1 ")] {
        let got = reqwest::get(format!("http://{proxy}{path}")).await.unwrap();
        assert_eq!(got.status(), reqwest::StatusCode::OK, "{path}");
        assert_eq!(got.text().await.unwrap(), expected, "{path}");
    }
}

#[tokio::test]
async fn passes_backend_status_through() {
    let backend = spawn(Router::new().route("/tickets", get(|| async { StatusCode::UNPROCESSABLE_ENTITY }))).await;
    let proxy = spawn(router(format!("http://{backend}"), None, reqwest::Client::new())).await;

    let got = reqwest::get(format!("http://{proxy}/api/tickets")).await.unwrap();
    assert_eq!(got.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn non_api_paths_are_not_found_without_static_dir() {
    let proxy = spawn(router("http://127.0.0.1:9".into(), None, reqwest::Client::new())).await;

    let got = reqwest::get(format!("http://{proxy}/index.html")).await.unwrap();
    assert_eq!(got.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = listener.local_addr().unwrap();
    drop(listener);
    let proxy = spawn(router(format!("http://{dead}"), None, reqwest::Client::new())).await;

    let got = reqwest::get(format!("http://{proxy}/api/tickets")).await.unwrap();
    assert_eq!(got.status(), reqwest::StatusCode::BAD_GATEWAY);
}
