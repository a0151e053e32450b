use serde::Serialize;

/// Status envelope for service-level endpoints such as the health check.
#[derive(Serialize)]
pub struct ApiResponse {
    pub message: String,
    pub status: String,
}
