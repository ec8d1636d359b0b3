//! Platform statistics and test-data payload models

use serde::{Deserialize, Serialize};

/// Aggregate platform statistics from `/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub active_players: u32,
    pub games_weekly: u32,
    pub padel_venues: u32,
    pub player_rating: f64,
}

/// Free-form test-data summary from `/test-data/summary`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestDataSummary(pub serde_json::Map<String, serde_json::Value>);
