use once_cell::sync::Lazy;

use crate::registry::{extract_with_rules, Extraction, ExtractionRule};

use super::CaptureRule;

static REASON_RULES: Lazy<Vec<Box<dyn ExtractionRule>>> = Lazy::new(|| {
    vec![
        Box::new(CaptureRule::new(
            "performing_a_n",
            r"(?i)performing\s+a\(n\)\s+(.+?)\.",
        )),
        Box::new(CaptureRule::new(
            "performing",
            r"(?i)performing\s+(?:a\(n\)\s*)?([^\n.]+)[\n.]",
        )),
        Box::new(CaptureRule::new(
            "maintenance_for",
            r"(?i)maintenance\s+(?:is\s+)?for\s+([^\n.]+)[\n.]",
        )),
        Box::new(CaptureRule::new("reason_label", r"(?i)Reason:\s*(.+)")),
        Box::new(CaptureRule::new(
            "will_be_performing",
            r"(?i)will\s+be\s+performing\s+(.+?)(?:\.|on|at)",
        )),
    ]
});

pub fn extract_reason(text: &str) -> Option<Extraction> {
    extract_with_rules("reason", text, &REASON_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(text: &str) -> Option<(String, &'static str)> {
        extract_reason(text).map(|found| (found.value, found.rule))
    }

    #[test]
    fn a_n_phrase_beats_earlier_performing() {
        let text = "AT&T will be performing a maintenance on GAR 1.\nOur engineers will be performing a(n) IOS UPGRADE.";
        assert_eq!(
            reason(text),
            Some(("IOS UPGRADE".to_string(), "performing_a_n"))
        );
    }

    #[test]
    fn general_performing_phrase() {
        assert_eq!(
            reason("Crews are performing fiber relocation work\nthanks"),
            Some(("fiber relocation work".to_string(), "performing"))
        );
    }

    #[test]
    fn maintenance_for_phrase() {
        assert_eq!(
            reason("This maintenance is for a core router replacement. Thanks"),
            Some(("a core router replacement".to_string(), "maintenance_for"))
        );
    }

    #[test]
    fn reason_label() {
        assert_eq!(
            reason("Reason: Software upgrade"),
            Some(("Software upgrade".to_string(), "reason_label"))
        );
    }

    #[test]
    fn no_reason() {
        assert_eq!(reason("Ticket 123"), None);
    }
}
