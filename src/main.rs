use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

mod config;
mod dtos;
mod errors;
mod handlers;
mod models;
mod routes;
mod services;
mod state;


use config::AppConfig;
use errors::{AppError, Result, GENERIC_SERVER_ERROR};
use services::mail_service::SmtpMailer;
use state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let port = config.port;

    let app_state = match initialize_app_state(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("❌ Failed to initialize services: {}", e);
            std::process::exit(1);
        }
    };

    let app = match build_router(app_state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("❌ Failed to build router: {}", e);
            std::process::exit(1);
        }
    };

    start_server(app, port).await;
}

fn initialize_app_state(config: AppConfig) -> Result<AppState> {
    let mailer = SmtpMailer::new(&config.mail)
        .map_err(|e| AppError::configuration(e.to_string()))?;
    tracing::info!(
        "✅ SMTP mailer ready ({}:{} as {})",
        config.mail.smtp_host,
        config.mail.smtp_port,
        config.mail.username
    );

    tracing::info!("🌐 Environment: {}", config.environment);
    tracing::info!("🧾 Invoice form: {:?}", config.invoice_form);
    if config.expose_otp && config.is_production() {
        tracing::warn!("⚠️ OTP codes are included in API responses while running in production");
    } else if config.expose_otp {
        tracing::warn!("⚠️ OTP codes are included in API responses; set EXPOSE_OTP=false to hide them");
    }

    Ok(AppState::new(config, Arc::new(mailer)))
}

fn build_cors(origin: &str) -> Result<CorsLayer> {
    let allow_origin = if origin.trim() == "*" {
        AllowOrigin::from(AnyOrigin)
    } else {
        let origins = origin
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|_| AppError::configuration(format!("Invalid CORS origin '{}'", o)))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(false))
}

fn build_router(app_state: AppState) -> Result<Router> {
    let cors = build_cors(&app_state.config.cors_origin)?;

    Ok(Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .nest(
            "/api/v1/user",
            routes::user_routes::user_routes(app_state.config.invoice_form),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state))
}

async fn start_server(app: Router, port: u16) {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("🚀 Server starting on {}", addr);

    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Server error: {}", e);
            }
        }
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("❌ Handler panicked: {}", detail);

    AppError::unhandled(GENERIC_SERVER_ERROR).into_response()
}

async fn root_handler() -> &'static str {
    "🚀 MYBIZ Notification API"
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
