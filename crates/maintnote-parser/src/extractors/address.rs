use once_cell::sync::Lazy;

use crate::registry::{extract_with_rules, Extraction, ExtractionRule};

use super::CaptureRule;

static ADDRESS_RULES: Lazy<Vec<Box<dyn ExtractionRule>>> = Lazy::new(|| {
    vec![
        Box::new(CaptureRule::new(
            "address_label",
            r"(?is)Address:\s*(.+?)(?:Please note|$)",
        )),
        Box::new(CaptureRule::new(
            "service_location_label",
            r"(?i)Service\s*Location:\s*(.+)",
        )),
        Box::new(CaptureRule::new("location_label", r"(?i)Location:\s*(.+)")),
        Box::new(CaptureRule::new(
            "state_zip",
            r"([^.\n]+\s+[A-Z]{2}\s+\d{5}(?:-\d{4})?)",
        )),
    ]
});

pub fn extract_address(text: &str) -> Option<Extraction> {
    extract_with_rules("address", text, &ADDRESS_RULES)
}
