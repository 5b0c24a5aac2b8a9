use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::verification::application::domain::certificate::RenderOptions;
use crate::verification::application::ports::incoming::use_cases::RenderCertificateError;
use crate::AppState;

/// Admin preview: the certificate card with the watermark overlay.
#[get("/api/admin/records/{unique_id}/preview")]
pub async fn preview_certificate_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let unique_id = path.into_inner();

    match data
        .verification
        .render_certificate
        .execute(&unique_id, RenderOptions::preview())
        .await
    {
        Ok(view) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(data.certificate_renderer.render_fragment(&view)),
        Err(RenderCertificateError::NotFound) => {
            ApiResponse::not_found("RECORD_NOT_FOUND", "Record not found")
        }
        Err(RenderCertificateError::RemoteUnavailable(msg)) => {
            error!("Remote store unavailable: {}", msg);
            ApiResponse::bad_gateway(
                "REMOTE_STORE_UNAVAILABLE",
                "Remote record store is unavailable",
            )
        }
        Err(RenderCertificateError::RepositoryError(msg)) => {
            error!("Repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
