use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use crate::verification::adapter::incoming::web::routes::{
    CreateRecordRequest, RecordResponse, SocialNetworkDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "VeriUser API",
        version = "1.0.0",
        description = "Issuing and publishing user verification certificates"
    ),
    paths(
        crate::verification::adapter::incoming::web::routes::create_record::create_record_handler,
        crate::verification::adapter::incoming::web::routes::get_records::get_records_handler,
        crate::verification::adapter::incoming::web::routes::get_single_record::get_record_handler,
    ),
    components(
        schemas(
            SuccessResponse<RecordResponse>,
            ErrorResponse,
            ErrorDetail,
            CreateRecordRequest,
            RecordResponse,
            SocialNetworkDto
        )
    ),
    tags(
        (name = "admin", description = "Record management"),
    )
)]
pub struct ApiDoc;
