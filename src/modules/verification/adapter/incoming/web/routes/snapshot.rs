use actix_web::{
    get,
    http::header::{ContentDisposition, ContentType, DispositionParam, DispositionType},
    post, web, HttpResponse, Responder,
};
use serde::Serialize;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::verification::application::ports::incoming::use_cases::{
    ExportSnapshotError, ImportSnapshotError,
};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ImportSnapshotResponse {
    pub imported: usize,
}

//
// ──────────────────────────────────────────────────────────
// Backup download
// ──────────────────────────────────────────────────────────
//

#[get("/api/admin/snapshot")]
pub async fn export_snapshot_handler(data: web::Data<AppState>) -> impl Responder {
    match data.verification.export_snapshot.execute().await {
        Ok(download) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(download.file_name)],
            })
            .body(download.content),
        Err(ExportSnapshotError::Unsupported(msg)) => {
            ApiResponse::not_implemented("OPERATION_NOT_SUPPORTED", &msg)
        }
        Err(ExportSnapshotError::RepositoryError(msg)) => {
            error!("Error exporting snapshot: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Restore
// ──────────────────────────────────────────────────────────
//

/// Takes the raw backup file as the body and replaces the whole collection.
#[post("/api/admin/snapshot")]
pub async fn import_snapshot_handler(data: web::Data<AppState>, body: String) -> impl Responder {
    match data.verification.import_snapshot.execute(&body).await {
        Ok(imported) => ApiResponse::success(ImportSnapshotResponse { imported }),
        Err(ImportSnapshotError::InvalidSnapshot(reason)) => {
            ApiResponse::bad_request("INVALID_SNAPSHOT", &reason.to_string())
        }
        Err(ImportSnapshotError::Unsupported(msg)) => {
            ApiResponse::not_implemented("OPERATION_NOT_SUPPORTED", &msg)
        }
        Err(ImportSnapshotError::RepositoryError(msg)) => {
            error!("Error importing snapshot: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
