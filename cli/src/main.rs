mod storage;
mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use clap::{Args, Parser, Subcommand};
use medicare_api::types::{
    Credentials, NewOrder, NewReview, OrderLine, PageQuery, ProductId, ProductQuery, Registration,
};
use medicare_api::{ApiClient, ApiError, SessionStorage, Transport};
use serde::Serialize;
use tracing_subscriber::filter::LevelFilter;

use crate::storage::FileStorage;
use crate::transport::ReqwestTransport;

type Client = ApiClient<ReqwestTransport, FileStorage>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("not signed in; run `medicare-cli auth login` first")]
    NotSignedIn,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "medicare-cli", about = "MediCare storefront API CLI")]
struct Cli {
    #[arg(long, env = "MEDICARE_API_URL", default_value = "http://localhost:5000/api")]
    base_url: String,

    #[arg(long, env = "MEDICARE_SESSION_FILE", default_value = ".medicare-session.json")]
    session_file: String,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Health,
    Auth(AuthCommand),
    Catalog(CatalogCommand),
    Reviews(ReviewsCommand),
    Orders(OrdersCommand),
}

#[derive(Args, Debug)]
struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
enum AuthSubcommand {
    Login {
        username: String,
        #[arg(long, env = "MEDICARE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Register {
        username: String,
        email: String,
        #[arg(long, env = "MEDICARE_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
    },
    Refresh,
    Logout,
    /// Print the signed-in user from the session file without a request.
    Whoami,
    Profile,
}

#[derive(Args, Debug)]
struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Subcommand, Debug)]
enum CatalogSubcommand {
    Product {
        id: ProductId,
    },
    List(ListArgs),
    Search {
        query: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Categories,
    Manufacturers,
}

#[derive(Args, Debug, Default)]
struct PageArgs {
    #[arg(long)]
    page: Option<u32>,
    #[arg(long)]
    per_page: Option<u32>,
}

impl PageArgs {
    fn to_query(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    #[command(flatten)]
    page: PageArgs,
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    category: Option<i64>,
    #[arg(long)]
    manufacturer: Option<i64>,
    #[arg(long)]
    min_price: Option<f64>,
    #[arg(long)]
    max_price: Option<f64>,
    #[arg(long)]
    prescription: Option<bool>,
}

impl ListArgs {
    fn to_query(&self) -> ProductQuery {
        ProductQuery {
            page: self.page.page,
            per_page: self.page.per_page,
            search: self.search.clone(),
            category_id: self.category,
            manufacturer_id: self.manufacturer,
            min_price: self.min_price,
            max_price: self.max_price,
            prescription_required: self.prescription,
        }
    }
}

#[derive(Args, Debug)]
struct ReviewsCommand {
    #[command(subcommand)]
    command: ReviewsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ReviewsSubcommand {
    List {
        product_id: ProductId,
        #[command(flatten)]
        page: PageArgs,
    },
    Add {
        product_id: ProductId,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
        #[arg(long)]
        comment: String,
        #[arg(long)]
        title: Option<String>,
    },
}

#[derive(Args, Debug)]
struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Subcommand, Debug)]
enum OrdersSubcommand {
    List,
    Create {
        #[arg(long = "item", required = true, value_parser = parse_order_line, help = "PRODUCT_ID:QUANTITY")]
        items: Vec<OrderLine>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        payment: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let transport = ReqwestTransport::new(cli.base_url)?;
    let storage = FileStorage::new(cli.session_file);
    tracing::debug!(session_file = %storage.path().display(), "using session file");
    let client = ApiClient::new(transport, storage);

    match cli.command {
        Command::Health => print_json(&client.health().await?),
        Command::Auth(auth) => run_auth(&client, auth).await,
        Command::Catalog(catalog) => run_catalog(&client, catalog).await,
        Command::Reviews(reviews) => run_reviews(&client, reviews).await,
        Command::Orders(orders) => run_orders(&client, orders).await,
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    // stdout carries command output only.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_auth(client: &Client, auth: AuthCommand) -> Result<(), CliError> {
    match auth.command {
        AuthSubcommand::Login { username, password } => {
            let user = client.sign_in(&Credentials { username, password }).await?;
            print_json(&user)
        }
        AuthSubcommand::Register {
            username,
            email,
            password,
            first_name,
            last_name,
        } => {
            let registration = Registration {
                username,
                email,
                password,
                first_name,
                last_name,
            };
            print_json(&client.register(&registration).await?)
        }
        AuthSubcommand::Refresh => {
            client.refresh().await?;
            println!("ok");
            Ok(())
        }
        AuthSubcommand::Logout => {
            run_logout(client).await;
            println!("ok");
            Ok(())
        }
        AuthSubcommand::Whoami => {
            let user = client.session().current_user().ok_or(CliError::NotSignedIn)?;
            print_json(&user)
        }
        AuthSubcommand::Profile => print_json(&client.profile().await?),
    }
}

/// The session is gone either way, so a failed request is only logged.
async fn run_logout<T: Transport, S: SessionStorage>(client: &ApiClient<T, S>) {
    if let Err(e) = client.logout().await {
        tracing::warn!(error = %e, "logout request failed; local session cleared");
    }
}

async fn run_catalog(client: &Client, catalog: CatalogCommand) -> Result<(), CliError> {
    match catalog.command {
        CatalogSubcommand::Product { id } => print_json(&client.product(id).await?),
        CatalogSubcommand::List(args) => print_json(&client.products(&args.to_query()).await?),
        CatalogSubcommand::Search { query, page } => {
            print_json(&client.search(&query, page.to_query()).await?)
        }
        CatalogSubcommand::Categories => print_json(&client.categories().await?),
        CatalogSubcommand::Manufacturers => print_json(&client.manufacturers().await?),
    }
}

async fn run_reviews(client: &Client, reviews: ReviewsCommand) -> Result<(), CliError> {
    match reviews.command {
        ReviewsSubcommand::List { product_id, page } => {
            print_json(&client.product_reviews(product_id, page.to_query()).await?)
        }
        ReviewsSubcommand::Add {
            product_id,
            rating,
            comment,
            title,
        } => {
            let review = NewReview {
                rating,
                comment,
                title,
                reviewer_name: None,
            };
            print_json(&client.add_review(product_id, &review).await?)
        }
    }
}

async fn run_orders(client: &Client, orders: OrdersCommand) -> Result<(), CliError> {
    match orders.command {
        OrdersSubcommand::List => print_json(&client.orders().await?),
        OrdersSubcommand::Create {
            items,
            address,
            payment,
            notes,
        } => {
            let order = NewOrder {
                items,
                shipping_address: address,
                payment_method: payment,
                notes,
            };
            print_json(&client.create_order(&order).await?)
        }
    }
}

/// Parse `PRODUCT_ID:QUANTITY`. Quantity must be at least 1.
fn parse_order_line(raw: &str) -> Result<OrderLine, String> {
    let (id, quantity) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected PRODUCT_ID:QUANTITY, got `{raw}`"))?;
    let product_id = id
        .trim()
        .parse::<ProductId>()
        .map_err(|e| format!("invalid product id `{id}`: {e}"))?;
    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid quantity `{quantity}`: {e}"))?;
    if quantity == 0 {
        return Err("quantity must be at least 1".to_owned());
    }
    Ok(OrderLine { product_id, quantity })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
