//! 경제 대시보드 API 서버.
//!
//! 설정을 로드하고 FRED/Yahoo 프록시 서버를 시작합니다.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use econ_core::{init_logging, AppConfig, LogConfig};
use tracing::{error, info, warn};

use econ_api::openapi::ApiDoc;
use econ_api::{create_router, setup_metrics_recorder, AppState};

#[derive(Parser)]
#[command(name = "econ-api")]
#[command(about = "Economic Dashboard Backend", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로 (없으면 기본값과 환경 변수만 사용)
    #[arg(long, default_value = "config/default.toml")]
    config: PathBuf,

    /// OpenAPI JSON 스펙을 stdout으로 출력하고 종료
    #[arg(long, env = "EXPORT_OPENAPI")]
    export_openapi: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 파일 로드 (있는 경우)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.export_openapi {
        use utoipa::OpenApi as _;
        println!("{}", serde_json::to_string_pretty(&ApiDoc::openapi())?);
        return Ok(());
    }

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("failed to load config: {}", cli.config.display()))?;

    init_logging(LogConfig::from_settings(&config.logging))
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    info!("Starting Economic Dashboard Backend...");

    let metrics_handle = setup_metrics_recorder().context("failed to install metrics recorder")?;
    info!("Prometheus metrics recorder initialized");

    let addr: SocketAddr = config.server.bind_address().parse().map_err(|e| {
        error!(
            address = %config.server.bind_address(),
            error = %e,
            "소켓 주소 설정이 유효하지 않습니다. server.host, server.port를 확인하세요."
        );
        anyhow::anyhow!("invalid bind address: {e}")
    })?;

    let state = Arc::new(
        AppState::from_config(&config).context("failed to build application state")?,
    );

    if !state.fred_configured {
        warn!("FRED_API_KEY not set, /fred requests will fail");
    }
    info!(
        version = %state.version,
        fred_configured = state.fred_configured,
        cache_ttl_secs = config.cache.ttl_secs,
        max_points = config.fred.max_points,
        distinct_error_status = state.distinct_error_status,
        "Application state initialized"
    );

    let app = create_router(state, &config.server, Some(metrics_handle));

    info!(%addr, "API server listening");
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("Metrics available at http://{}/metrics", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Graceful shutdown 시그널 대기.
///
/// Ctrl+C 또는 SIGTERM 시그널을 수신하면 반환합니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
