use once_cell::sync::Lazy;

use crate::registry::{extract_with_rules, Extraction, ExtractionRule};

use super::{CaptureRule, FnRule, ShapeRule};

const ID_VALUE: &str = r"([A-Za-z0-9._-]+)";

/// `Label: value` forms, most specific first.
const LABELLED_IDS: &[(&str, &str)] = &[
    ("circuit_label", r"(?i)Circuit(?:\s*ID)?:\s*"),
    ("cid_label", r"(?i)CID:\s*"),
    ("reference_label", r"(?i)Reference(?:\s*ID)?:\s*"),
    ("service_id_label", r"(?i)Service\s*ID:\s*"),
    ("account_label", r"(?i)Account(?:\s*Number)?:\s*"),
    ("order_label", r"(?i)Order(?:\s*Number)?:\s*"),
];

/// Circuit identifier shapes seen in carrier notices.
pub const CIRCUIT_SHAPES: &[(&str, &str)] = &[
    // IUEC.796938..ATI
    ("dotted_circuit", r"\b[A-Z]{2,4}\.\d{3,6}\.+[A-Z]{2,4}\b"),
    // ABC123456DEF
    ("alpha_numeric_circuit", r"\b[A-Z]{2,4}[0-9]{4,10}[A-Z]{0,4}\b"),
    // 12345678ABC
    ("numeric_alpha_circuit", r"\b\d{8,12}[A-Z]{2,4}\b"),
];

static REFERENCE_RULES: Lazy<Vec<Box<dyn ExtractionRule>>> = Lazy::new(|| {
    let mut rules: Vec<Box<dyn ExtractionRule>> = LABELLED_IDS
        .iter()
        .map(|&(name, label)| {
            Box::new(CaptureRule::new(name, &format!("{label}{ID_VALUE}")))
                as Box<dyn ExtractionRule>
        })
        .collect();

    rules.push(Box::new(CaptureRule::new(
        "affected_circuits_block",
        r"(?is)Below\s+are\s+the\s+affected\s+circuit\(s\).*?\n\s*(\S+)",
    )));

    rules.extend(
        CIRCUIT_SHAPES
            .iter()
            .map(|&(name, shape)| Box::new(ShapeRule::new(name, shape)) as Box<dyn ExtractionRule>),
    );

    rules.push(Box::new(FnRule::new("identifier_line", identifier_line)));
    rules
});

pub fn extract_reference_id(text: &str) -> Option<Extraction> {
    extract_with_rules("reference_id", text, &REFERENCE_RULES)
}

/// First line that mixes letters, digits and a separator, the way bare circuit
/// ids are usually pasted on their own line.
fn identifier_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| {
            let len = line.chars().count();
            (5..=40).contains(&len)
                && line.chars().any(|c| c.is_ascii_alphabetic())
                && line.chars().any(|c| c.is_ascii_digit())
                && line.chars().any(|c| matches!(c, '.' | '_' | '-'))
        })
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(text: &str) -> Option<(String, &'static str)> {
        extract_reference_id(text).map(|found| (found.value, found.rule))
    }

    #[test]
    fn labelled_value_has_priority() {
        let text = "Below are the affected circuit(s)\nIUEC.639083..ATI\nCircuit ID: 44.KXGS.012345";
        assert_eq!(
            reference(text),
            Some(("44.KXGS.012345".to_string(), "circuit_label"))
        );
    }

    #[test]
    fn later_labels_are_tried_in_order() {
        assert_eq!(
            reference("Order Number: ORD-7781"),
            Some(("ORD-7781".to_string(), "order_label"))
        );
        assert_eq!(
            reference("CID: 12/ABCD/0001"),
            Some(("12".to_string(), "cid_label"))
        );
    }

    #[test]
    fn affected_circuits_block() {
        let text = "Below are the affected circuit(s) for which you are listed as a contact.\n  IUEC.639083..ATI\nAddress: x";
        assert_eq!(
            reference(text),
            Some(("IUEC.639083..ATI".to_string(), "affected_circuits_block"))
        );
    }

    #[test]
    fn circuit_shapes_in_table_order() {
        assert_eq!(
            reference("impacting IUEC.796938..ATI and ABC123456DEF"),
            Some(("IUEC.796938..ATI".to_string(), "dotted_circuit"))
        );
        assert_eq!(
            reference("impacting 123456789012XY and ABC123456DEF"),
            Some(("ABC123456DEF".to_string(), "alpha_numeric_circuit"))
        );
        assert_eq!(
            reference("impacting 12345678ABC"),
            Some(("12345678ABC".to_string(), "numeric_alpha_circuit"))
        );
    }

    #[test]
    fn identifier_line_heuristic() {
        let text = "hello\nckt_77-b\n";
        assert_eq!(
            reference(text),
            Some(("ckt_77-b".to_string(), "identifier_line"))
        );
    }

    #[test]
    fn no_identifier() {
        assert_eq!(reference("plain words only"), None);
    }
}
