use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::verification::adapter::incoming::web::routes::dto::RecordResponse;
use crate::verification::application::ports::incoming::use_cases::GetSingleRecordError;
use crate::AppState;

/// Fetch one record by its public token
#[utoipa::path(
    get,
    path = "/api/admin/records/{unique_id}",
    tag = "admin",
    params(("unique_id" = String, Path, description = "Public token, e.g. VU-7K2M9Q")),
    responses(
        (status = 200, description = "Record found", body = inline(SuccessResponse<RecordResponse>)),
        (status = 404, description = "No record carries this token", body = ErrorResponse),
        (status = 502, description = "Remote store unavailable", body = ErrorResponse)
    )
)]
#[get("/api/admin/records/{unique_id}")]
pub async fn get_record_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let unique_id = path.into_inner();

    match data.verification.get_single.execute(&unique_id).await {
        Ok(record) => ApiResponse::success(RecordResponse::from_record(
            record,
            &data.public_base_url,
        )),
        Err(err) => map_get_single_record_error(err),
    }
}

fn map_get_single_record_error(err: GetSingleRecordError) -> HttpResponse {
    match err {
        GetSingleRecordError::NotFound => {
            ApiResponse::not_found("RECORD_NOT_FOUND", "Record not found")
        }
        GetSingleRecordError::RemoteUnavailable(msg) => {
            error!("Remote store unavailable: {}", msg);
            ApiResponse::bad_gateway(
                "REMOTE_STORE_UNAVAILABLE",
                "Remote record store is unavailable",
            )
        }
        GetSingleRecordError::RepositoryError(msg) => {
            error!("Repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
