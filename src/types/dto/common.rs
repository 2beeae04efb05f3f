use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// `healthy` when the item store answers, `degraded` otherwise
    pub status: String,

    /// Number of stored items, absent when the store is unreachable
    pub item_count: Option<u64>,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}
