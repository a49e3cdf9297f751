use crate::extractors::CAPITALIZED_FALLBACK;
use crate::model::Confidence;

/// Resolved field values as they go into the record, plus the provenance the
/// scorer needs.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInput<'a> {
    pub carrier: &'a str,
    pub carrier_rule: Option<&'static str>,
    pub address: &'a str,
    pub reference_id: &'a str,
    pub reason: &'a str,
    pub ticket_number: &'a str,
    pub window_resolved: bool,
}

pub fn score(input: &ScoreInput<'_>) -> Confidence {
    Confidence {
        carrier: plausible(input.carrier, 3)
            && input.carrier_rule != Some(CAPITALIZED_FALLBACK),
        address: plausible(input.address, 6),
        reference_id: plausible(input.reference_id, 4),
        reason: plausible(input.reason, 4),
        times: input.window_resolved,
        ticket_number: plausible(input.ticket_number, 1),
    }
}

fn plausible(value: &str, min_chars: usize) -> bool {
    !value.contains('[') && value.chars().count() >= min_chars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ScoreInput<'static> {
        ScoreInput {
            carrier: "AT&T",
            carrier_rule: Some("dear_customer"),
            address: "2398 E CAMELBACK RD PHOENIX, AZ 85016",
            reference_id: "IUEC.639083..ATI",
            reason: "IOS UPGRADE",
            ticket_number: "335981103",
            window_resolved: true,
        }
    }

    #[test]
    fn real_values_are_confident() {
        assert!(score(&input()).all_confident());
    }

    #[test]
    fn placeholders_are_never_confident() {
        let scored = score(&ScoreInput {
            carrier: "[Carrier Name]",
            address: "[Service Address]",
            reference_id: "[Circuit ID]",
            reason: "[Maintenance Reason]",
            ticket_number: "[Ticket Number]",
            window_resolved: false,
            ..input()
        });
        assert_eq!(scored, Confidence::default());
    }

    #[test]
    fn minimum_lengths() {
        let scored = score(&ScoreInput {
            carrier: "GT",
            address: "12 Rd",
            reference_id: "A-1",
            reason: "fix",
            ticket_number: "7",
            ..input()
        });
        assert!(!scored.carrier);
        assert!(!scored.address);
        assert!(!scored.reference_id);
        assert!(!scored.reason);
        assert!(scored.ticket_number);
    }

    #[test]
    fn capitalized_fallback_carrier_is_not_trusted() {
        let scored = score(&ScoreInput {
            carrier: "Customer Notice",
            carrier_rule: Some(CAPITALIZED_FALLBACK),
            ..input()
        });
        assert!(!scored.carrier);
        assert!(scored.address);
    }
}
