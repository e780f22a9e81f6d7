use super::*;

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn url_for_joins_base_and_path() {
    let transport = GlooTransport::new("http://localhost:5000/api/");
    assert_eq!(transport.url_for(&HttpRequest::get("/product/3")), "http://localhost:5000/api/product/3");
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn send_fails_outside_the_browser() {
    let transport = GlooTransport::new("http://localhost:5000/api");
    let err = transport.send(HttpRequest::get("/health")).await.unwrap_err();
    assert!(err.to_string().contains("/api/health"));
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn web_client_reports_network_error_natively() {
    let err = web_client().health().await.unwrap_err();
    assert!(err.is_network());
}
