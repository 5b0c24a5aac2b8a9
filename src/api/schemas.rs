use serde::Serialize;
use utoipa::ToSchema;

/// Envelope of every successful admin or public JSON response
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope of every failed admin or public JSON response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code for programmatic handling
    #[schema(example = "RECORD_NOT_FOUND")]
    pub code: String,

    #[schema(example = "No record carries this unique id")]
    pub message: String,
}
