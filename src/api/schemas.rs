// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Body of endpoints that only acknowledge success
#[derive(Serialize, ToSchema)]
pub struct SuccessResponse {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Title and description are required")]
    pub message: String,
}
