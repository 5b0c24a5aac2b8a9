use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::verification::adapter::incoming::web::routes::dto::RecordResponse;
use crate::AppState;

/// List every issued certificate record
#[utoipa::path(
    get,
    path = "/api/admin/records",
    tag = "admin",
    responses(
        (status = 200, description = "All records in stored order", body = inline(SuccessResponse<Vec<RecordResponse>>))
    )
)]
#[get("/api/admin/records")]
pub async fn get_records_handler(data: web::Data<AppState>) -> impl Responder {
    let records: Vec<RecordResponse> = data
        .verification
        .get_list
        .execute()
        .await
        .into_iter()
        .map(|record| RecordResponse::from_record(record, &data.public_base_url))
        .collect();

    ApiResponse::success(records)
}
