use serde_json::json;

use super::*;
use medicare_api::{MemoryStorage, StubTransport};

fn pagination(page: u32, has_prev: bool, has_next: bool) -> Pagination {
    Pagination { page, per_page: PAGE_SIZE, total: 30, pages: 3, has_next, has_prev }
}

#[test]
fn default_filter_starts_on_first_page() {
    let filter = ListingFilter::default();
    assert_eq!(
        filter.to_query().to_pairs(),
        vec![("page".to_owned(), "1".to_owned()), ("per_page".to_owned(), "12".to_owned())]
    );
}

#[test]
fn changing_search_or_category_resets_page() {
    let filter = ListingFilter { page: 3, search: "old".to_owned(), category_id: Some(2) };

    let searched = filter.with_search("udiliv");
    assert_eq!(searched, ListingFilter { page: 1, search: "udiliv".to_owned(), category_id: Some(2) });

    let all = filter.with_category(None);
    assert_eq!(all, ListingFilter { page: 1, search: "old".to_owned(), category_id: None });
}

#[test]
fn next_and_prev_follow_pagination_flags() {
    let filter = ListingFilter { page: 2, ..ListingFilter::default() };
    assert_eq!(filter.next_page(&pagination(2, true, true)).map(|f| f.page), Some(3));
    assert_eq!(filter.prev_page(&pagination(2, true, true)).map(|f| f.page), Some(1));
    assert_eq!(filter.next_page(&pagination(2, true, false)), None);
    assert_eq!(filter.prev_page(&pagination(2, false, true)), None);
}

#[test]
fn prev_never_goes_below_first_page() {
    let filter = ListingFilter::default();
    assert_eq!(filter.prev_page(&pagination(1, true, true)), None);
}

#[test]
fn parse_category_treats_blank_as_all() {
    assert_eq!(parse_category("4"), Some(4));
    assert_eq!(parse_category(""), None);
    assert_eq!(parse_category("all"), None);
}

#[test]
fn page_summary_never_reports_zero_pages() {
    let empty = Pagination { page: 1, ..Pagination::default() };
    assert_eq!(page_summary(&empty), "Page 1 of 1 (0 products)");
    assert_eq!(page_summary(&pagination(2, true, true)), "Page 2 of 3 (30 products)");
}

#[tokio::test]
async fn load_listing_sends_filters() {
    let transport = StubTransport::new().respond(
        200,
        &json!({
            "products": [{ "id": 1, "name": "Udiliv 300mg Tablet", "price": 34.0 }],
            "pagination": { "page": 1, "per_page": 12, "total": 1, "pages": 1, "has_next": false, "has_prev": false }
        }),
    );
    let client = ApiClient::new(transport.clone(), MemoryStorage::new());
    let filter = ListingFilter { page: 1, search: " udiliv ".to_owned(), category_id: Some(3) };

    let list = load_listing(&client, &filter).await.unwrap();

    assert_eq!(list.products.len(), 1);
    let request = transport.last_request().unwrap();
    assert_eq!(request.path, "/products");
    assert_eq!(
        request.query,
        vec![
            ("page".to_owned(), "1".to_owned()),
            ("per_page".to_owned(), "12".to_owned()),
            ("search".to_owned(), "udiliv".to_owned()),
            ("category_id".to_owned(), "3".to_owned()),
        ]
    );
}

#[tokio::test]
async fn load_listing_failure_uses_page_message() {
    let client = ApiClient::new(StubTransport::new().fail("offline"), MemoryStorage::new());
    assert_eq!(load_listing(&client, &ListingFilter::default()).await.unwrap_err(), LOAD_FAILED_MESSAGE);
}
