use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::MaintenanceType;

use super::compile;

static EMERGENCY_KEYWORDS: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)emergency|urgent|unplanned|immediate"));

pub fn extract_maintenance_type(text: &str) -> MaintenanceType {
    if EMERGENCY_KEYWORDS.is_match(text) {
        MaintenanceType::Emergency
    } else {
        MaintenanceType::Scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emergency_keywords_override_scheduled_language() {
        let text = "This scheduled maintenance has been escalated to an EMERGENCY repair.";
        assert_eq!(extract_maintenance_type(text), MaintenanceType::Emergency);
        assert_eq!(
            extract_maintenance_type("Immediately after the planned work"),
            MaintenanceType::Emergency
        );
    }

    #[test]
    fn defaults_to_scheduled() {
        assert_eq!(
            extract_maintenance_type("Planned maintenance window"),
            MaintenanceType::Scheduled
        );
        assert_eq!(extract_maintenance_type(""), MaintenanceType::Scheduled);
    }
}
