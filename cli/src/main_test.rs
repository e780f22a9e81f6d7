use super::*;
use medicare_api::session::ACCESS_TOKEN_KEY;
use medicare_api::{MemoryStorage, StubTransport};

// =============================================================
// parse_order_line
// =============================================================

#[test]
fn parse_order_line_accepts_id_and_quantity() {
    assert_eq!(parse_order_line("12:3"), Ok(OrderLine { product_id: 12, quantity: 3 }));
    assert_eq!(parse_order_line(" 1 : 2 "), Ok(OrderLine { product_id: 1, quantity: 2 }));
}

#[test]
fn parse_order_line_rejects_malformed_input() {
    for raw in ["12", "x:1", "1:y", "1:0", "-1:2", ":"] {
        assert!(parse_order_line(raw).is_err(), "raw={raw:?}");
    }
}

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn list_flags_map_onto_product_query() {
    let cli = Cli::try_parse_from([
        "medicare-cli",
        "catalog",
        "list",
        "--page",
        "2",
        "--search",
        "udiliv",
        "--category",
        "4",
        "--prescription",
        "true",
    ])
    .unwrap();

    let Command::Catalog(CatalogCommand {
        command: CatalogSubcommand::List(args),
    }) = cli.command
    else {
        panic!("expected catalog list");
    };
    assert_eq!(
        args.to_query().to_pairs(),
        vec![
            ("page".to_owned(), "2".to_owned()),
            ("search".to_owned(), "udiliv".to_owned()),
            ("category_id".to_owned(), "4".to_owned()),
            ("prescription_required".to_owned(), "true".to_owned()),
        ]
    );
}

#[test]
fn order_create_requires_at_least_one_item() {
    assert!(Cli::try_parse_from(["medicare-cli", "orders", "create"]).is_err());

    let cli = Cli::try_parse_from([
        "medicare-cli",
        "orders",
        "create",
        "--item",
        "1:2",
        "--item",
        "5:1",
    ])
    .unwrap();
    let Command::Orders(OrdersCommand {
        command: OrdersSubcommand::Create { items, .. },
    }) = cli.command
    else {
        panic!("expected orders create");
    };
    assert_eq!(items.len(), 2);
    assert_eq!(items[1], OrderLine { product_id: 5, quantity: 1 });
}

#[test]
fn review_rating_is_bounded() {
    for rating in ["0", "6"] {
        let parsed = Cli::try_parse_from([
            "medicare-cli",
            "reviews",
            "add",
            "1",
            "--rating",
            rating,
            "--comment",
            "ok",
        ]);
        assert!(parsed.is_err(), "rating={rating}");
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

// =============================================================
// Logout
// =============================================================

#[tokio::test]
async fn logout_succeeds_locally_when_backend_is_unreachable() {
    let storage = MemoryStorage::new();
    storage.set(ACCESS_TOKEN_KEY, "tok").unwrap();
    let transport = StubTransport::new().fail("offline");
    let client = ApiClient::new(transport.clone(), storage.clone());

    run_logout(&client).await;

    assert!(storage.is_empty());
    assert_eq!(transport.last_request().unwrap().path, "/logout");
}

#[tokio::test]
async fn logout_succeeds_locally_when_backend_rejects() {
    let storage = MemoryStorage::new();
    storage.set(ACCESS_TOKEN_KEY, "tok").unwrap();
    let transport = StubTransport::new().respond(401, &serde_json::json!({ "error": "Token has expired" }));
    let client = ApiClient::new(transport, storage.clone());

    run_logout(&client).await;

    assert!(storage.is_empty());
}
