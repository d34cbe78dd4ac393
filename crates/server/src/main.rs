// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use fapiao_api::{
    ApiError, CheckInvoiceRequest, CheckInvoiceResponse, IngestPrizeSheetRequest,
    IngestPrizeSheetResponse, ListAwardRecordsResponse, ListDrawDatesResponse, check_invoice,
    ingest_prize_sheet, list_award_records, list_draw_dates,
};
use fapiao_persistence::SqlitePersistence;

/// Fapiao Server - HTTP server for the uniform-invoice prize-checking service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for award records.
    persistence: Arc<Mutex<SqlitePersistence>>,
}

/// Liveness payload for GET `/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StatusResponse {
    /// Liveness indicator.
    status: String,
    /// A human-readable liveness message.
    message: String,
}

/// Query parameters for listing award records.
#[derive(Debug, Deserialize)]
struct AwardRecordsQuery {
    /// The draw date (ISO 8601).
    draw_date: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::DataIntegrity { .. } | ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

/// Handler for GET `/status` endpoint.
///
/// Returns a liveness payload.
async fn handle_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: String::from("ok"),
        message: String::from("Service is running"),
    })
}

/// Handler for POST `/redemptions/check` endpoint.
///
/// Checks an invoice number against the award records of a draw date.
async fn handle_check_invoice(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CheckInvoiceRequest>,
) -> Result<Json<CheckInvoiceResponse>, HttpError> {
    info!(
        invoice_number = %req.invoice_number,
        draw_date = %req.draw_date,
        "Handling check_invoice request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CheckInvoiceResponse = check_invoice(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/prize_sheets` endpoint.
///
/// Ingests a prize sheet for a draw date.
async fn handle_ingest_prize_sheet(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<IngestPrizeSheetRequest>,
) -> Result<Json<IngestPrizeSheetResponse>, HttpError> {
    info!(
        draw_date = %req.draw_date,
        "Handling ingest_prize_sheet request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: IngestPrizeSheetResponse = ingest_prize_sheet(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/award_records` endpoint.
///
/// Lists the award records stored for a draw date.
async fn handle_list_award_records(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<AwardRecordsQuery>,
) -> Result<Json<ListAwardRecordsResponse>, HttpError> {
    info!(draw_date = %query.draw_date, "Handling list_award_records request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListAwardRecordsResponse =
        list_award_records(&mut persistence, &query.draw_date)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/draw_dates` endpoint.
///
/// Lists every draw date with stored award records.
async fn handle_list_draw_dates(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListDrawDatesResponse>, HttpError> {
    info!("Handling list_draw_dates request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListDrawDatesResponse = list_draw_dates(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/status", get(handle_status))
        .route("/redemptions/check", post(handle_check_invoice))
        .route("/prize_sheets", post(handle_ingest_prize_sheet))
        .route("/award_records", get(handle_list_award_records))
        .route("/draw_dates", get(handle_list_draw_dates))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Fapiao Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: SqlitePersistence =
            SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    /// Helper to create a prize sheet request for 2024-03-25 with one
    /// grand prize number and all six derived tiers.
    fn create_test_sheet_request() -> IngestPrizeSheetRequest {
        IngestPrizeSheetRequest {
            draw_date: String::from("2024-03-25"),
            grand_prize_numbers: vec![String::from("12345678")],
            special_numbers: vec![String::from("00011122")],
            extra_numbers: vec![],
            derived_tiers: vec![
                String::from("Second"),
                String::from("Third"),
                String::from("Fourth"),
                String::from("Fifth"),
                String::from("Sixth"),
                String::from("BonusSixth"),
            ],
        }
    }

    fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn ingest_test_sheet(app: &Router) {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/prize_sheets",
                serde_json::to_string(&create_test_sheet_request()).unwrap(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
    }

    #[tokio::test]
    async fn test_status_endpoint_reports_ok() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let status: StatusResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(status.status, "ok");
    }

    #[tokio::test]
    async fn test_ingest_then_check_winning_invoice() {
        let app: Router = build_router(create_test_app_state());
        ingest_test_sheet(&app).await;

        let check_req = CheckInvoiceRequest {
            invoice_number: String::from("99345678"),
            draw_date: String::from("2024-03-25"),
        };
        let response = app
            .oneshot(json_request(
                "POST",
                "/redemptions/check",
                serde_json::to_string(&check_req).unwrap(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let check: CheckInvoiceResponse = serde_json::from_slice(&body_bytes).unwrap();

        assert!(check.won);
        assert_eq!(check.tier.as_deref(), Some("Third"));
        assert_eq!(check.matched_suffix.as_deref(), Some("345678"));
    }

    #[tokio::test]
    async fn test_check_losing_invoice() {
        let app: Router = build_router(create_test_app_state());
        ingest_test_sheet(&app).await;

        let check_req = CheckInvoiceRequest {
            invoice_number: String::from("99999991"),
            draw_date: String::from("2024-03-25"),
        };
        let response = app
            .oneshot(json_request(
                "POST",
                "/redemptions/check",
                serde_json::to_string(&check_req).unwrap(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let check: CheckInvoiceResponse = serde_json::from_slice(&body_bytes).unwrap();

        assert!(!check.won);
        assert!(check.tier.is_none());
    }

    #[tokio::test]
    async fn test_malformed_invoice_returns_bad_request() {
        let app: Router = build_router(create_test_app_state());
        ingest_test_sheet(&app).await;

        let check_req = CheckInvoiceRequest {
            invoice_number: String::from("1234567"),
            draw_date: String::from("2024-03-25"),
        };
        let response = app
            .oneshot(json_request(
                "POST",
                "/redemptions/check",
                serde_json::to_string(&check_req).unwrap(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_draw_date_returns_not_found() {
        let app: Router = build_router(create_test_app_state());
        ingest_test_sheet(&app).await;

        let check_req = CheckInvoiceRequest {
            invoice_number: String::from("12345678"),
            draw_date: String::from("2024-05-25"),
        };
        let response = app
            .oneshot(json_request(
                "POST",
                "/redemptions/check",
                serde_json::to_string(&check_req).unwrap(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_incomplete_sheet_returns_unprocessable_entity() {
        let app: Router = build_router(create_test_app_state());

        let sheet_req = IngestPrizeSheetRequest {
            draw_date: String::from("2024-03-25"),
            grand_prize_numbers: vec![],
            special_numbers: vec![],
            extra_numbers: vec![],
            derived_tiers: vec![String::from("Second")],
        };
        let response = app
            .oneshot(json_request(
                "POST",
                "/prize_sheets",
                serde_json::to_string(&sheet_req).unwrap(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_award_records_and_draw_dates_routes() {
        let app: Router = build_router(create_test_app_state());
        ingest_test_sheet(&app).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/award_records?draw_date=2024-03-25")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let records: ListAwardRecordsResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(records.records.len(), 8);
        assert_eq!(records.records[0].tier, "Special");

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/draw_dates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let dates: ListDrawDatesResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(dates.draw_dates, vec!["2024-03-25"]);
    }
}
