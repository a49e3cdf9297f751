use once_cell::sync::Lazy;

use crate::registry::{extract_with_rules, Extraction, ExtractionRule};

use super::CaptureRule;

static TICKET_RULES: Lazy<Vec<Box<dyn ExtractionRule>>> = Lazy::new(|| {
    vec![
        Box::new(CaptureRule::new(
            "trouble_ticket_numeric",
            r"(?i)trouble ticket number is\s+(\d+)",
        )),
        Box::new(CaptureRule::new(
            "trouble_ticket",
            r"(?i)trouble ticket number is\s*([A-Za-z0-9-]+)",
        )),
        Box::new(CaptureRule::new(
            "ticket_label",
            r"(?i)ticket\s*(?:number|#):\s*([A-Za-z0-9-]+)",
        )),
        Box::new(CaptureRule::new(
            "reference_number_label",
            r"(?i)reference\s*(?:number|#):\s*([A-Za-z0-9-]+)",
        )),
        Box::new(CaptureRule::new(
            "work_order_label",
            r"(?i)work\s*order\s*(?:number|#):\s*([A-Za-z0-9-]+)",
        )),
        Box::new(CaptureRule::new(
            "case_label",
            r"(?i)case\s*(?:number|#):\s*([A-Za-z0-9-]+)",
        )),
    ]
});

pub fn extract_ticket_number(text: &str) -> Option<Extraction> {
    extract_with_rules("ticket_number", text, &TICKET_RULES)
}
