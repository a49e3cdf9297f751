use once_cell::sync::Lazy;

use crate::registry::{extract_with_rules, Extraction, ExtractionRule};

use super::{CaptureRule, FixedRule, LineCaptureRule};

/// Name of the last-resort rule. Its matches are not trusted for confidence.
pub const CAPITALIZED_FALLBACK: &str = "capitalized_sequence";

static CARRIER_RULES: Lazy<Vec<Box<dyn ExtractionRule>>> = Lazy::new(|| {
    vec![
        Box::new(CaptureRule::new(
            "dear_customer",
            r"(?i)Dear\s+(.+?)\s+(?:IP|Internet|Business|Network)?\s*Services?\s*Customer",
        )),
        Box::new(CaptureRule::new(
            "network_engineers",
            r"(?i)(.*?)\s+(?:Network\s+Engineers|Engineers)\s+will\s+be\s+performing",
        )),
        Box::new(FixedRule::new(
            "access_provider",
            r"(?i)access provider['\s]*s?\s+engineers\s+will\s+be\s+performing",
            "AT&T",
        )),
        Box::new(CaptureRule::new(
            "will_be_performing",
            r"(?i)(.*?)\s+will\s+be\s+performing\b",
        )),
        Box::new(LineCaptureRule::with_group(
            "from_by_maintenance",
            r"(?i)(from|by)\s+([A-Za-z][A-Za-z& .-]{1,50})\b.*maintenance",
            2,
        )),
        Box::new(CaptureRule::new(
            CAPITALIZED_FALLBACK,
            r"\b([A-Z][A-Za-z& .-]{2,})\b",
        )),
    ]
});

pub fn extract_carrier(text: &str) -> Option<Extraction> {
    extract_with_rules("carrier", text, &CARRIER_RULES)
}
