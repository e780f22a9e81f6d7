use super::*;

fn transport() -> ReqwestTransport {
    ReqwestTransport::new("http://localhost:5000/api").unwrap()
}

#[test]
fn build_joins_path_and_encodes_query() {
    let request = HttpRequest::get("/search")
        .with_query(vec![("q".to_owned(), "udiliv 300".to_owned()), ("page".to_owned(), "2".to_owned())]);

    let built = transport().build(&request).unwrap();

    assert_eq!(built.method(), reqwest::Method::GET);
    assert_eq!(built.url().as_str(), "http://localhost:5000/api/search?q=udiliv+300&page=2");
    assert!(built.body().is_none());
}

#[test]
fn build_attaches_bearer_and_json_body() {
    let request = HttpRequest::post("/login")
        .with_bearer(Some("tok".to_owned()))
        .with_json(&serde_json::json!({ "username": "testuser" }))
        .unwrap();

    let built = transport().build(&request).unwrap();

    assert_eq!(built.method(), reqwest::Method::POST);
    assert_eq!(built.headers()[reqwest::header::AUTHORIZATION], "Bearer tok");
    assert_eq!(built.headers()[reqwest::header::CONTENT_TYPE], "application/json");
    let body = built.body().and_then(reqwest::Body::as_bytes).unwrap();
    assert_eq!(serde_json::from_slice::<serde_json::Value>(body).unwrap(), serde_json::json!({ "username": "testuser" }));
}

#[test]
fn build_without_token_sends_no_authorization() {
    let built = transport().build(&HttpRequest::get("/health")).unwrap();
    assert!(built.headers().get(reqwest::header::AUTHORIZATION).is_none());
}
