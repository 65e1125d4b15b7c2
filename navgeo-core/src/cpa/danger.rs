//! Collision danger assessment from CPA/TCPA

use serde::{Deserialize, Serialize};

use super::CpaResult;

/// Thresholds below which an encounter is flagged as dangerous
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DangerLimits {
    /// Minimum acceptable CPA in nautical miles
    pub cpa_nm: f64,
    /// Only encounters closer than this many hours ahead are considered
    pub tcpa_hours: f64,
}

impl Default for DangerLimits {
    fn default() -> Self {
        DangerLimits {
            cpa_nm: 1.0,
            tcpa_hours: 0.5,
        }
    }
}

impl CpaResult {
    /// True when the vessels pass closer than `limits.cpa_nm` within
    /// `limits.tcpa_hours`
    pub fn is_dangerous(&self, limits: &DangerLimits) -> bool {
        self.distance < limits.cpa_nm && self.time <= limits.tcpa_hours
    }
}
