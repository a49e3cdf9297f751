use tracing::{debug, debug_span};

use crate::confidence::{score, ScoreInput};
use crate::duration::describe_duration;
use crate::extractors::{
    extract_address, extract_carrier, extract_maintenance_type, extract_reason,
    extract_reference_id, extract_ticket_number,
};
use crate::model::{Field, ParsedFields};
use crate::registry::Extraction;
use crate::timezone::resolve_timezone;
use crate::window::{resolve_window, Clock, SystemClock};

/// Parses a notice using the system clock for the "today" fallback.
pub fn parse(raw: &str) -> ParsedFields {
    parse_with_clock(raw, &SystemClock)
}

/// Parses a notice. Never fails: anything not found becomes a placeholder.
pub fn parse_with_clock(raw: &str, clock: &dyn Clock) -> ParsedFields {
    let _span = debug_span!("parse_notice", bytes = raw.len()).entered();

    let carrier = extract_carrier(raw);
    let address = extract_address(raw);
    let reference_id = extract_reference_id(raw);
    let reason = extract_reason(raw);
    let ticket_number = extract_ticket_number(raw);
    let maintenance_type = extract_maintenance_type(raw);

    let timezone = resolve_timezone(raw, address.as_ref().map(|found| found.value.as_str()));
    let window = resolve_window(raw, timezone, clock);
    let time_length = describe_duration(raw, window.as_ref());

    debug!(
        carrier = rule_of(&carrier),
        address = rule_of(&address),
        reference_id = rule_of(&reference_id),
        reason = rule_of(&reason),
        ticket_number = rule_of(&ticket_number),
        %maintenance_type,
        window = window.is_some(),
        "extraction finished"
    );

    let carrier_rule = carrier.as_ref().map(|found| found.rule);
    let carrier = Field::Carrier.or_placeholder(carrier.map(|found| found.value));
    let address = Field::Address.or_placeholder(address.map(|found| found.value));
    let reference_id = Field::ReferenceId.or_placeholder(reference_id.map(|found| found.value));
    let reason = Field::Reason.or_placeholder(reason.map(|found| found.value));
    let ticket_number = Field::TicketNumber.or_placeholder(ticket_number.map(|found| found.value));
    let time_length = Field::TimeLength.or_placeholder(time_length);
    let start_time = Field::StartTime.or_placeholder(window.as_ref().map(|w| w.formatted_start()));
    let end_time = Field::EndTime.or_placeholder(window.as_ref().map(|w| w.formatted_end()));

    let confidence = score(&ScoreInput {
        carrier: &carrier,
        carrier_rule,
        address: &address,
        reference_id: &reference_id,
        reason: &reason,
        ticket_number: &ticket_number,
        window_resolved: window.is_some(),
    });

    ParsedFields {
        carrier,
        address,
        reference_id,
        reason,
        maintenance_type,
        ticket_number,
        time_length,
        start_time,
        end_time,
        confidence,
        window,
    }
}

fn rule_of(found: &Option<Extraction>) -> &'static str {
    found.as_ref().map_or("none", |found| found.rule)
}
