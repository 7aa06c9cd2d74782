use serde::{Deserialize, Serialize};

/// Headline metric value
///
/// Percent values stay in [0, 100]; counts stay non-negative. Both are
/// cosmetic display figures with no coupling to the progress engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricValue {
    Percent(u8),
    Count(i64),
}

/// Labeled headline metric shown in the overview section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: MetricValue,
}
