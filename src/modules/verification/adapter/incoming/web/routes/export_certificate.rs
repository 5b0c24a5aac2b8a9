use actix_web::{
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    post, web, HttpResponse, Responder,
};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::verification::application::ports::incoming::use_cases::ExportCertificateError;
use crate::AppState;

#[post("/api/admin/records/{unique_id}/export")]
pub async fn export_certificate_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let unique_id = path.into_inner();

    match data.verification.export_certificate.execute(&unique_id).await {
        Ok(artifact) => HttpResponse::Ok()
            .content_type(artifact.content_type)
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(artifact.file_name)],
            })
            .body(artifact.bytes),
        Err(err) => map_export_certificate_error(err),
    }
}

fn map_export_certificate_error(err: ExportCertificateError) -> HttpResponse {
    match err {
        ExportCertificateError::NotFound => {
            ApiResponse::not_found("RECORD_NOT_FOUND", "Record not found")
        }
        ExportCertificateError::ExportInProgress => ApiResponse::conflict(
            "EXPORT_IN_PROGRESS",
            "Another certificate export is in progress",
        ),
        ExportCertificateError::ExportFailed(msg) => {
            error!("Certificate export failed: {}", msg);
            ApiResponse::internal_error_with("EXPORT_FAILED", "Certificate export failed")
        }
        ExportCertificateError::RemoteUnavailable(msg) => {
            error!("Remote store unavailable: {}", msg);
            ApiResponse::bad_gateway(
                "REMOTE_STORE_UNAVAILABLE",
                "Remote record store is unavailable",
            )
        }
        ExportCertificateError::RepositoryError(msg) => {
            error!("Repository error: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::{memory_record_store, sample_draft};
    use crate::tests::support::stubs::StubExportCertificateUseCase;

    #[actix_web::test]
    async fn export_returns_printable_attachment() {
        // Arrange
        let store = memory_record_store();
        let created = store.add(sample_draft("@alice")).await.unwrap();
        let state = TestAppStateBuilder::default()
            .with_record_store(store)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(export_certificate_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::post()
            .uri(&format!("/api/admin/records/{}/export", created.unique_id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let disposition = resp
            .headers()
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains(&format!("VeriUserRU_{}.html", created.unique_id)));

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("window.print()"));
        assert!(!body.contains("<a href"));
        assert!(!body.contains(r#"class="watermark""#));
    }

    #[actix_web::test]
    async fn export_in_progress_returns_conflict() {
        let state = TestAppStateBuilder::default()
            .with_export_certificate(StubExportCertificateUseCase::failing(
                ExportCertificateError::ExportInProgress,
            ))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(export_certificate_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/records/VU-ABC123/export")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "EXPORT_IN_PROGRESS");
    }

    #[actix_web::test]
    async fn export_failure_returns_export_failed() {
        let state = TestAppStateBuilder::default()
            .with_export_certificate(StubExportCertificateUseCase::failing(
                ExportCertificateError::ExportFailed("canvas".to_string()),
            ))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(export_certificate_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/records/VU-ABC123/export")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "EXPORT_FAILED");
    }
}
