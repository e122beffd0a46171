use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use loan_compare::config::{AppConfig, CatalogConfig};
use loan_compare::error::AppError;
use loan_compare::telemetry;
use loan_compare::workflows::catalog::CatalogImporter;
use loan_compare::workflows::loans::{
    product_router, Conversation, InMemoryProductRepository, ProductCard, ProductId,
    ProductService,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: Arc<PrometheusHandle>,
}

#[derive(Parser, Debug)]
#[command(
    name = "Loan Compare",
    about = "Rank loan products by APR and answer questions about them",
    version
)]
struct Cli {
    /// Product catalog file (.csv or .json); overrides LOAN_CATALOG_PATH
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the top picks ranked by APR
    Products(ProductsArgs),
    /// Ask a single question about a product
    Ask(AskArgs),
    /// Chat with the assistant about a product until EOF or `exit`
    Chat(ChatArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ProductsArgs {
    /// Number of products to show (defaults to LOAN_TOP_PICKS)
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Args, Debug)]
struct AskArgs {
    /// Product identifier
    #[arg(long)]
    product: String,
    /// Question text
    #[arg(required = true, trailing_var_arg = true)]
    question: Vec<String>,
}

#[derive(Args, Debug)]
struct ChatArgs {
    /// Product identifier
    #[arg(long)]
    product: String,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let (config, command) = prepare(Cli::parse())?;

    match command {
        Command::Serve(args) => run_server(config, args).await,
        Command::Products(args) => run_products(&config.catalog, args),
        Command::Ask(args) => run_ask(&config.catalog, args),
        Command::Chat(args) => run_chat(&config.catalog, args),
    }
}

/// Resolve configuration and start logging before any command runs, so catalog
/// warnings surface for the one-shot commands too.
fn prepare(cli: Cli) -> Result<(AppConfig, Command), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));
    Ok((config, command))
}

fn load_service(
    catalog: &CatalogConfig,
) -> Result<ProductService<InMemoryProductRepository>, AppError> {
    let repository = CatalogImporter::repository(catalog.path.as_deref())?;
    Ok(ProductService::new(Arc::new(repository), catalog.top_picks))
}

async fn run_server(mut config: AppConfig, mut args: ServeArgs) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    let service = Arc::new(load_service(&config.catalog)?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = product_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(Extension(state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "loan comparison service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_products(catalog: &CatalogConfig, args: ProductsArgs) -> Result<(), AppError> {
    let service = load_service(catalog)?;
    let cards = service.top_picks(args.limit)?;
    print!("{}", render_top_picks(&cards));
    Ok(())
}

fn run_ask(catalog: &CatalogConfig, args: AskArgs) -> Result<(), AppError> {
    let service = load_service(catalog)?;
    let question = args.question.join(" ");
    let answer = service.ask(&ProductId(args.product), &question)?;
    println!("{}", answer.text);
    Ok(())
}

fn run_chat(catalog: &CatalogConfig, args: ChatArgs) -> Result<(), AppError> {
    let service = load_service(catalog)?;
    let product = service.product(&ProductId(args.product))?;
    let card = ProductCard::from_product(&product, false);

    println!("{} ({})", card.name, card.bank);
    println!("APR {} • Tenure {}", card.apr_label, card.tenure_label);
    println!("Tags: {}", card.badges.join(", "));
    println!("Ask a question about this loan (type `exit` to leave).");

    let mut conversation = Conversation::new(product.id.clone());
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }
        if input.is_empty() {
            continue;
        }

        let reply = conversation.ask(&product, input)?;
        println!("{}\n", reply.content);
    }

    info!(messages = conversation.len(), "chat session closed");
    Ok(())
}

fn render_top_picks(cards: &[ProductCard]) -> String {
    let mut out = String::new();
    if cards.is_empty() {
        out.push_str("No products found.\n");
        return out;
    }

    out.push_str("Your Top Loan Picks\n");
    out.push_str("Based on APR and basic eligibility, here are some good options.\n");

    for card in cards {
        let marker = if card.is_best_match { " [Best Match]" } else { "" };
        let _ = writeln!(out, "\n{} ({}){}", card.name, card.id, marker);
        let _ = writeln!(out, "  {} • {}", card.bank, card.type_label);
        let _ = writeln!(
            out,
            "  APR: {} • Tenure: {}",
            card.apr_label, card.tenure_label
        );
        let _ = writeln!(
            out,
            "  Min Income: {} • Min Credit Score: {}",
            card.min_income_label, card.min_credit_score
        );
        if let Some(summary) = &card.summary {
            let _ = writeln!(out, "  {}", summary);
        }
        let _ = writeln!(out, "  Tags: {}", card.badges.join(", "));
    }

    out
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
