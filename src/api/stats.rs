//! Platform statistics and test-data operations

use std::sync::Arc;

use crate::models::{PlatformStats, TestDataSummary};
use crate::utils::errors::Result;

use super::transport::ApiClient;

/// Aggregate/demo information API operations (no auth)
#[derive(Debug, Clone)]
pub struct StatsApi {
    client: Arc<ApiClient>,
}

impl StatsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Get platform statistics
    pub async fn platform_stats(&self) -> Result<PlatformStats> {
        self.client.get_public("/stats").await
    }

    /// Get a summary of the backend's test data
    pub async fn test_data_summary(&self) -> Result<TestDataSummary> {
        self.client.get_public("/test-data/summary").await
    }
}
