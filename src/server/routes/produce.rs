//! Produce inventory API endpoints
//!
//! This module provides the HTTP endpoints for listing, bulk creating and
//! deleting produce records.

use crate::core::bulk::BulkCreateStatus;
use crate::core::models::{CreateProduceResponse, Produce};
use crate::core::query::{ListProduceParams, QueryOptions, query};
use crate::server::AppState;
use crate::utils::error::{InventoryError, Result};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use tracing::{debug, info};

/// Base path of the produce API
pub const PRODUCE_PATH: &str = "/api/v1/produce";

/// Configure produce routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(PRODUCE_PATH)
            .route("", web::get().to(list_produce))
            .route("", web::post().to(create_produce))
            .route("/{productCode}", web::delete().to(delete_produce)),
    );
}

/// List produce endpoint
/// GET /api/v1/produce
///
/// Unrecognized, repeated or malformed query values are ignored rather than
/// rejected.
pub async fn list_produce(
    data: web::Data<AppState>,
    pairs: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse> {
    let params = ListProduceParams::from_pairs(pairs.into_inner());
    let options = QueryOptions::from_params(&params);
    debug!(?options, "Listing produce");

    let snapshot = data.store.list().await?;
    let records = query(&snapshot, &options);

    Ok(HttpResponse::Ok().json(records))
}

/// Bulk create produce endpoint
/// POST /api/v1/produce
///
/// Responds 201 when every record was created, 207 when some were and 400
/// when none were.
pub async fn create_produce(data: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse> {
    let batch: Vec<Produce> = serde_json::from_slice(&body)
        .map_err(|e| InventoryError::bad_request(format!("Invalid request body: {}", e)))?;

    info!(records = batch.len(), "Bulk create requested");

    let outcome = data.orchestrator.create_all(batch).await?;
    let status = match outcome.status() {
        BulkCreateStatus::AllCreated => StatusCode::CREATED,
        BulkCreateStatus::Partial => StatusCode::MULTI_STATUS,
        BulkCreateStatus::AllFailed => StatusCode::BAD_REQUEST,
    };

    Ok(HttpResponse::build(status).json(CreateProduceResponse::from(outcome)))
}

/// Delete produce endpoint
/// DELETE /api/v1/produce/{productCode}
///
/// Deleting an unknown code still succeeds.
pub async fn delete_produce(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let produce_code = path.into_inner();
    info!(%produce_code, "Deleting produce");

    data.store.delete(&produce_code).await?;

    Ok(HttpResponse::NoContent().finish())
}
