use serde::{Deserialize, Serialize};

/// How the fee was put together, for UI transparency.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub base_fee: f64,
    pub distance_fee: f64,
    pub total_before_clamp: f64,
}

/// Result of a single fee calculation. Built fresh per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuote {
    pub fee: f64,
    pub distance_km: f64,
    pub estimated_time_label: String,
    pub breakdown: FeeBreakdown,
    pub is_free_delivery: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_delivery_reason: Option<String>,
}
