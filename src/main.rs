use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use ehc_case_mapper::config::{AppConfig, LinkConfig};
use ehc_case_mapper::error::AppError;
use ehc_case_mapper::telemetry;
use ehc_case_mapper::workflows::application::ApplicationForm;
use ehc_case_mapper::workflows::case_mapping::{case_router, Case, CaseMapper};
use ehc_case_mapper::workflows::catalog::{FormPageCatalog, HealthCertificateCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

type CatalogCaseMapper = CaseMapper<FormPageCatalog, HealthCertificateCatalog>;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "EHC Case Mapper",
    about = "Map export health certificate applications onto case payloads",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Map a single application form file and print the case payload
    Map(MapArgs),
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
struct MapArgs {
    /// Application form JSON file
    #[arg(long)]
    form: PathBuf,
    /// Health certificate catalog CSV (defaults to the configured catalog)
    #[arg(long)]
    certificates: Option<PathBuf>,
    /// Merged form page catalog JSON (defaults to the configured catalog)
    #[arg(long)]
    form_pages: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Map(args) => run_map(args),
    }
}

fn load_mapper(
    certificates: &Path,
    form_pages: &Path,
    links: &LinkConfig,
) -> Result<CatalogCaseMapper, AppError> {
    let certificates = HealthCertificateCatalog::from_path(certificates)?;
    let form_pages = FormPageCatalog::from_path(form_pages)?;
    Ok(CaseMapper::new(
        Arc::new(form_pages),
        Arc::new(certificates),
        links,
    ))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let mapper = load_mapper(
        &config.catalog.health_certificates,
        &config.catalog.form_pages,
        &config.links,
    )?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(case_router(Arc::new(mapper)))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "case mapping service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_map(args: MapArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let certificates = args
        .certificates
        .unwrap_or_else(|| config.catalog.health_certificates.clone());
    let form_pages = args
        .form_pages
        .unwrap_or_else(|| config.catalog.form_pages.clone());

    let mapper = load_mapper(&certificates, &form_pages, &config.links)?;
    let case = map_form_file(&mapper, &args.form)?;

    println!("{}", serde_json::to_string_pretty(&case)?);
    Ok(())
}

fn map_form_file(mapper: &CatalogCaseMapper, path: &Path) -> Result<Case, AppError> {
    let file = std::fs::File::open(path)?;
    let form: ApplicationForm = serde_json::from_reader(file)?;
    Ok(mapper.map_case(&form)?)
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
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

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
