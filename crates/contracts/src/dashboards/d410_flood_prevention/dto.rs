use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Flood risk records
// ---------------------------------------------------------------------------

/// One time-stamped flood-risk observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSample {
    /// Clock label, e.g. "6:00 AM".
    pub time: String,
    /// Flood-risk percentage, 0–100.
    pub risk: f64,
    /// Number of sensors reporting at this time.
    pub active_sensors: u32,
    /// Predicted water depth in meters.
    pub predicted_depth: f64,
}

/// One named geographic zone with an aggregate risk score and two
/// magnitude metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerableArea {
    pub area: String,
    /// Aggregate risk score, 0–100.
    pub risk_score: f64,
    /// Count of properties inside the flood contour.
    pub affected_properties: u32,
    /// Infrastructure vulnerability index, 0–100.
    pub infrastructure_vulnerability: f64,
}

// ---------------------------------------------------------------------------
// Alert severity
// ---------------------------------------------------------------------------

/// Risk percentage above which the alert switches to the destructive
/// display mode.
pub const ALERT_RISK_THRESHOLD: f64 = 80.0;

/// Visual urgency of the alert banner (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Default,
    Destructive,
}

impl AlertSeverity {
    /// Classify a risk percentage against [`ALERT_RISK_THRESHOLD`].
    ///
    /// Strictly greater than: a reading exactly at the threshold stays
    /// on the default style.
    pub fn for_risk(risk: f64) -> Self {
        if risk > ALERT_RISK_THRESHOLD {
            AlertSeverity::Destructive
        } else {
            AlertSeverity::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_above_threshold() {
        assert_eq!(AlertSeverity::for_risk(90.0), AlertSeverity::Destructive);
        assert_eq!(AlertSeverity::for_risk(80.1), AlertSeverity::Destructive);
        assert_eq!(AlertSeverity::for_risk(100.0), AlertSeverity::Destructive);
    }

    #[test]
    fn test_severity_at_or_below_threshold() {
        assert_eq!(AlertSeverity::for_risk(80.0), AlertSeverity::Default);
        assert_eq!(AlertSeverity::for_risk(60.0), AlertSeverity::Default);
        assert_eq!(AlertSeverity::for_risk(0.0), AlertSeverity::Default);
    }
}
