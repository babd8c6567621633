//! Fixed sample datasets backing the flood prevention dashboard.
//!
//! All values are literal constants baked into the view; nothing here is
//! loaded, computed, or mutated after construction.

use contracts::dashboards::d410_flood_prevention::{RiskSample, VulnerableArea};

/// Index of the reading shown in the alert banner (the 3:00 PM peak).
pub const CURRENT_SAMPLE_IDX: usize = 3;

/// Five risk readings spanning one day, in clock order.
pub fn risk_levels() -> Vec<RiskSample> {
    vec![
        sample("6:00 AM", 30.0, 12, 0.2),
        sample("9:00 AM", 45.0, 13, 0.3),
        sample("12:00 PM", 75.0, 13, 0.5),
        sample("3:00 PM", 90.0, 13, 0.8),
        sample("6:00 PM", 60.0, 13, 0.4),
    ]
}

/// Four coastal zones with their impact metrics.
pub fn vulnerable_areas() -> Vec<VulnerableArea> {
    vec![
        area("South Beach", 85.0, 245, 78.0),
        area("Midland Beach", 75.0, 180, 65.0),
        area("New Dorp Beach", 70.0, 156, 72.0),
        area("Oakwood Beach", 65.0, 134, 58.0),
    ]
}

/// The reading the alert banner reports on.
pub fn current_sample() -> RiskSample {
    risk_levels()[CURRENT_SAMPLE_IDX].clone()
}

fn sample(time: &str, risk: f64, active_sensors: u32, predicted_depth: f64) -> RiskSample {
    RiskSample {
        time: time.to_string(),
        risk,
        active_sensors,
        predicted_depth,
    }
}

fn area(
    name: &str,
    risk_score: f64,
    affected_properties: u32,
    infrastructure_vulnerability: f64,
) -> VulnerableArea {
    VulnerableArea {
        area: name.to_string(),
        risk_score,
        affected_properties,
        infrastructure_vulnerability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use contracts::dashboards::d410_flood_prevention::AlertSeverity;

    #[test]
    fn test_samples_in_clock_order() {
        let samples = risk_levels();
        assert_eq!(samples.len(), 5);

        let times: Vec<NaiveTime> = samples
            .iter()
            .map(|s| NaiveTime::parse_from_str(&s.time, "%I:%M %p").unwrap())
            .collect();
        for pair in times.windows(2) {
            assert!(pair[0] < pair[1], "readings must advance through the day");
        }
    }

    #[test]
    fn test_current_sample_is_the_peak() {
        let current = current_sample();
        assert_eq!(current.time, "3:00 PM");
        assert_eq!(current.risk, 90.0);
        assert_eq!(current.active_sensors, 13);
        assert_eq!(current.predicted_depth, 0.8);
        assert_eq!(
            AlertSeverity::for_risk(current.risk),
            AlertSeverity::Destructive
        );
    }

    #[test]
    fn test_area_literals() {
        let areas = vulnerable_areas();
        assert_eq!(areas.len(), 4);

        let south = areas.iter().find(|a| a.area == "South Beach").unwrap();
        assert_eq!(south.risk_score, 85.0);
        assert_eq!(south.affected_properties, 245);
        assert_eq!(south.infrastructure_vulnerability, 78.0);

        let oakwood = areas.iter().find(|a| a.area == "Oakwood Beach").unwrap();
        assert_eq!(oakwood.affected_properties, 134);
    }

    #[test]
    fn test_datasets_are_deterministic() {
        assert_eq!(risk_levels(), risk_levels());
        assert_eq!(vulnerable_areas(), vulnerable_areas());
    }
}
